use tracing::debug;

use crate::internal::format::structs::FormatError;

const KB: u64 = 1024;

/// 带单位的阶梯，按从大到小匹配
const UNITS: [(u64, &str); 4] = [
    (KB * KB * KB * KB, "TB"),
    (KB * KB * KB, "GB"),
    (KB * KB, "MB"),
    (KB, "KB"),
];

/// 字节数上限（1024 TB），达到即报错
const LIMIT: u64 = KB * KB * KB * KB * KB;

/// 进制转换：字节数 → 可读字符串（1024 进制）。
///
/// - 小于 1024：原样输出整数加 `B`，如 `1023B`
/// - KB ~ TB：保留两位小数，如 `1.00KB`、`2.50GB`
/// - 大于等于 1024 TB：返回 [`FormatError::OutOfRange`]
pub fn format_bytes(bytes: u64) -> Result<String, FormatError> {
    if bytes >= LIMIT {
        debug!(bytes, "byte count beyond TB range");
        return Err(FormatError::OutOfRange { bytes });
    }

    let formatted = UNITS
        .iter()
        .find(|(scale, _)| bytes >= *scale)
        .map(|(scale, unit)| format!("{:.2}{}", bytes as f64 / *scale as f64, unit))
        .unwrap_or_else(|| format!("{}B", bytes));

    Ok(formatted)
}

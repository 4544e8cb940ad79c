//! 格式化相关错误类型。

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// 超出 TB 的字节数没有对应单位
    #[error("字节数超出可格式化范围（需小于 1024 TB）: {bytes}")]
    OutOfRange { bytes: u64 },
}

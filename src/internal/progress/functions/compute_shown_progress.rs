use tracing::trace;

use super::validate::{validate_percent, validate_speed, validate_thresholds};
use crate::internal::progress::structs::ProgressError;

/// 进度条显示工具：根据实际进度和当前显示进度，计算下一次应显示的进度。
///
/// - `real`：实际进度，`real == 100` 时直接返回 100，不检查其余参数
/// - `shown`：当前显示进度（上一次的返回值）
/// - `fixed_speed`：实际进度落在当前阈值区间内时，每次调用推进的固定增量
/// - `thresholds`：严格递增的阈值表（如 `[50, 90, 99]`），实际进度到达阈值前，显示进度至多越过它一个增量
///
/// 阈值表只读，内部会在头部补 0 作为哨兵，调用方的切片不会被修改。
///
/// 扫描规则：找到第一个大于 `shown` 的阈值 `t[i]`
/// - `real >= t[i]`：直接跳到 `t[i]`
/// - `t[i-1] <= real < t[i]`：`shown + fixed_speed`（可能略越过 `t[i]`，仅保证不超过 100）
/// - 否则保持 `shown` 不变
///
/// 没有阈值大于 `shown` 时返回 `real`。
///
/// example:
/// ```
/// use display_kit::progress::compute_shown_progress;
///
/// let next = compute_shown_progress(45.0, 40.0, 0.4, &[50.0, 90.0, 99.0]).unwrap();
/// assert!((next - 40.4).abs() < 1e-9);
/// ```
pub fn compute_shown_progress(
    real: f64,
    shown: f64,
    fixed_speed: f64,
    thresholds: &[f64],
) -> Result<f64, ProgressError> {
    validate_percent("real", real)?;
    if real == 100.0 {
        return Ok(100.0);
    }

    validate_percent("shown", shown)?;
    validate_speed(fixed_speed)?;
    validate_thresholds(thresholds)?;

    // 头部补 0，保证 i - 1 不越界
    let bounds: Vec<f64> = std::iter::once(0.0)
        .chain(thresholds.iter().copied())
        .collect();

    for i in 1..bounds.len() {
        let (lower, upper) = (bounds[i - 1], bounds[i]);
        if shown >= upper {
            continue;
        }

        if real >= upper {
            trace!(real, shown, checkpoint = upper, "snap to checkpoint");
            return Ok(upper);
        }
        if real >= lower {
            // 只收在 100 以内，允许越过 t[i]，下次调用再进入下一段
            let next = (shown + fixed_speed).min(100.0);
            trace!(real, shown, next, checkpoint = upper, "advance within band");
            return Ok(next);
        }
        trace!(real, shown, lower, "real lags behind, freeze");
        return Ok(shown);
    }

    trace!(real, shown, "past last checkpoint, follow real");
    Ok(real)
}

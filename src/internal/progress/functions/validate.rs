//! 进度参数校验：失败立即返回错误，不做任何修正。

use tracing::debug;

use crate::internal::progress::structs::ProgressError;

pub(crate) fn validate_percent(name: &'static str, value: f64) -> Result<f64, ProgressError> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        return Ok(value);
    }
    debug!(param = name, value, "percent out of range");
    Err(ProgressError::PercentOutOfRange { name, value })
}

pub(crate) fn validate_speed(fixed_speed: f64) -> Result<f64, ProgressError> {
    // NaN 同样不满足 > 0
    if fixed_speed.is_finite() && fixed_speed > 0.0 {
        return Ok(fixed_speed);
    }
    debug!(fixed_speed, "invalid fixed speed");
    Err(ProgressError::InvalidSpeed(fixed_speed))
}

pub(crate) fn validate_thresholds(thresholds: &[f64]) -> Result<(), ProgressError> {
    for (index, &value) in thresholds.iter().enumerate() {
        if !(value > 0.0 && value <= 100.0) {
            debug!(index, value, "threshold out of range");
            return Err(ProgressError::ThresholdOutOfRange { index, value });
        }
    }

    if let Some(index) = thresholds.windows(2).position(|w| w[0] >= w[1]) {
        let (prev, next) = (thresholds[index], thresholds[index + 1]);
        debug!(index = index + 1, prev, next, "thresholds not ascending");
        return Err(ProgressError::ThresholdsNotAscending {
            index: index + 1,
            prev,
            next,
        });
    }

    Ok(())
}

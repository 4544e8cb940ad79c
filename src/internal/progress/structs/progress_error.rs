//! 进度平滑相关错误类型。

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProgressError {
    /// `name` 为出错的参数名（如 `real` / `shown`）
    #[error("进度 {name} 超出范围 [0, 100]: {value}")]
    PercentOutOfRange { name: &'static str, value: f64 },

    #[error("固定增量必须为正数: {0}")]
    InvalidSpeed(f64),

    #[error("阈值 {value} 超出范围 (0, 100]（下标 {index}）")]
    ThresholdOutOfRange { index: usize, value: f64 },

    #[error("阈值必须严格递增：下标 {index} 处 {prev} >= {next}")]
    ThresholdsNotAscending { index: usize, prev: f64, next: f64 },
}

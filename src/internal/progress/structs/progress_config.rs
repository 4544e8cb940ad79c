use serde::{Deserialize, Serialize};

use super::progress_error::ProgressError;
use crate::internal::progress::functions::validate::{validate_speed, validate_thresholds};

/// 默认固定增量
pub const DEFAULT_FIXED_SPEED: f64 = 0.4;

/// 默认阈值表
pub const DEFAULT_THRESHOLDS: [f64; 3] = [50.0, 90.0, 99.0];

/// 细粒度阈值表对应的固定增量
pub const FINE_FIXED_SPEED: f64 = 0.15;

/// 细粒度阈值表
pub const FINE_THRESHOLDS: [f64; 4] = [25.0, 50.0, 75.0, 99.0];

/// 进度条平滑配置：每次调用的固定增量 + 升序阈值表。
///
/// 可由宿主程序从自己的配置文件反序列化得到，使用前请调用 [`ProgressConfig::validate`]。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressConfig {
    /// 每次推进的固定增量（百分点）
    pub fixed_speed: f64,
    /// 升序阈值表，不包含哨兵 0
    pub thresholds: Vec<f64>,
}

impl ProgressConfig {
    pub fn new(fixed_speed: f64, thresholds: Vec<f64>) -> Self {
        Self {
            fixed_speed,
            thresholds,
        }
    }

    /// 标准预设：增量 0.4，阈值 [50, 90, 99]
    pub fn standard() -> Self {
        Self::new(DEFAULT_FIXED_SPEED, DEFAULT_THRESHOLDS.to_vec())
    }

    /// 细粒度预设：增量 0.15，阈值 [25, 50, 75, 99]
    pub fn fine() -> Self {
        Self::new(FINE_FIXED_SPEED, FINE_THRESHOLDS.to_vec())
    }

    /// 校验增量与阈值表，规则与 `compute_shown_progress` 一致。
    pub fn validate(&self) -> Result<&Self, ProgressError> {
        validate_speed(self.fixed_speed)?;
        validate_thresholds(&self.thresholds)?;
        Ok(self)
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self::standard()
    }
}

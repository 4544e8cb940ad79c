use tracing::debug;

use super::{progress_config::ProgressConfig, progress_error::ProgressError};
use crate::internal::progress::functions::compute_shown_progress;

/// 进度条平滑器：持有配置与当前显示进度，每次 [`ProgressSmoother::tick`] 时把上一次结果作为 `shown` 传回。
///
/// 适合放在定时刷新进度条的循环里，调用方只需提供实际进度。
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSmoother {
    config: ProgressConfig,
    shown: f64,
}

impl ProgressSmoother {
    /// 创建平滑器，配置非法时直接返回错误
    pub fn new(config: ProgressConfig) -> Result<Self, ProgressError> {
        config.validate()?;
        Ok(Self { config, shown: 0.0 })
    }

    /// 根据实际进度推进一次，返回新的显示进度
    pub fn tick(&mut self, real: f64) -> Result<f64, ProgressError> {
        let next = compute_shown_progress(
            real,
            self.shown,
            self.config.fixed_speed,
            &self.config.thresholds,
        )?;
        self.shown = next;
        Ok(next)
    }

    /// 当前显示进度
    pub fn shown(&self) -> f64 {
        self.shown
    }

    pub fn config(&self) -> &ProgressConfig {
        &self.config
    }

    /// 是否已经显示到 100
    pub fn is_finished(&self) -> bool {
        self.shown >= 100.0
    }

    /// 显示进度归零，配置保持不变
    pub fn reset(&mut self) {
        debug!(shown = self.shown, "reset progress smoother");
        self.shown = 0.0;
    }
}

impl Default for ProgressSmoother {
    fn default() -> Self {
        Self {
            config: ProgressConfig::default(),
            shown: 0.0,
        }
    }
}

pub mod progress_config;
pub mod progress_error;
pub mod progress_smoother;

// 重导出公共类型
pub use progress_config::ProgressConfig;
pub use progress_error::ProgressError;
pub use progress_smoother::ProgressSmoother;

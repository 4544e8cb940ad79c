/// 内部实现模块，对外统一从下方各模块导出
mod internal;

#[cfg(test)]
mod tests;

/// 进度条平滑：实际进度 → 显示进度
pub mod progress {
    use crate::internal;
    pub use internal::progress::functions::compute_shown_progress;
    pub use internal::progress::structs::*;
    pub use internal::progress::structs::progress_config::{
        DEFAULT_FIXED_SPEED, DEFAULT_THRESHOLDS, FINE_FIXED_SPEED, FINE_THRESHOLDS,
    };
}

/// 展示用格式化：字节数与进度条宽度
pub mod format {
    use crate::internal;
    pub use internal::format::functions::*;
    pub use internal::format::structs::*;
}

/// 查询串参数读取，查询串由调用方注入
pub mod url_param {
    use crate::internal;
    pub use internal::url_param::*;
}

/// 分页计数器
pub mod pagination {
    use crate::internal;
    pub use internal::pagination::structs::*;
}

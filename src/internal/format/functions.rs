mod bar_width;
mod format_bytes;

pub use bar_width::bar_width;
pub use format_bytes::format_bytes;

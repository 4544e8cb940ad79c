pub mod format;
pub mod pagination;
pub mod progress;
pub mod url_param;

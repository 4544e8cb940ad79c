pub mod format_error;

pub use format_error::FormatError;

mod compute_shown_progress;
pub(crate) mod validate;

pub use compute_shown_progress::compute_shown_progress;

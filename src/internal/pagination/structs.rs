pub mod pagination_error;
pub mod paginator;

pub use pagination_error::PaginationError;
pub use paginator::{DEFAULT_PER_PAGE, MIN_PAGE, Paginator};

//! 分页相关错误类型。

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("页码 {page} 超出范围 [{min}, {max}]")]
    PageOutOfRange { page: u32, min: u32, max: u32 },

    #[error("每页条数不能为 0")]
    ZeroPageSize,
}

//! 分页计数器。

pub mod structs;

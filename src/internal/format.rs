//! 展示用格式化：字节数转可读单位、按文件大小计算进度条宽度。

pub mod functions;
pub mod structs;

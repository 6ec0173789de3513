//! 工具

pub mod text_file;

//! 节点分类

/// 标签
pub const CATEGORY_DARKBFLY: &str = "darkbfly";
/// 基础
pub const CATEGORY_BASIC: &str = "basic";

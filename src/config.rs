//! 节点配置

use std::{env, path::PathBuf};

/// 标签表路径环境变量
pub const TABLE_PATH_ENV: &str = "DARKBFLY_CHARACTER_TABLE";

/// 默认的节点目录, 相对 ComfyUI 根目录
pub const NODE_DIRECTORY: &str = "custom_nodes/ComfyUI-Darkbfly";

/// 默认的标签表文件名
pub const TABLE_FILE_NAME: &str = "character.xlsx";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    pub table_path: PathBuf,
}

impl NodeConfig {
    /// 环境变量优先, 否则使用 `<ComfyUI 根目录>/custom_nodes/ComfyUI-Darkbfly/character.xlsx`
    ///
    /// ComfyUI 在根目录下启动, 当前目录即根目录
    pub fn from_env() -> Self {
        let table_path = match env::var_os(TABLE_PATH_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => {
                let base_path = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                base_path.join(NODE_DIRECTORY).join(TABLE_FILE_NAME)
            }
        };
        Self { table_path }
    }
}

//! 公共库
//!
//! 相关节点定义: ComfyUI/comfy/comfy_types/node_typing.py

pub mod category;

/// 节点注册信息: (节点 class 名称, 节点类型, 节点显示名称)
#[cfg(feature = "python")]
pub struct NodeRegister<'py>(
    pub &'static str,
    pub pyo3::Bound<'py, pyo3::types::PyType>,
    pub &'static str,
);

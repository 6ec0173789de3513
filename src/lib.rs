//! ComfyUI 标签节点
//!
//! - 标签表: 从 Excel/CSV 加载 中文显示名 -> 英文标签
//! - 节点: 下拉选择标签并拼接到输入文本 (需启用 `python` 特性)
//! - 数据集工具: 标签 CSV 查找, 中英对照文本转换

pub mod config;
pub mod core;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod table;
pub mod utils;
pub mod wrapper;

#[cfg(feature = "python")]
pub mod text;

#[cfg(feature = "python")]
use pyo3::{
    pymodule,
    types::{PyDict, PyDictMethods, PyModule, PyModuleMethods},
    Bound, PyResult, Python,
};

#[cfg(feature = "python")]
use crate::core::NodeRegister;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
#[pyo3(name = "comfyui_darkbfly")] // 需要与包名保持一致
fn py_init(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    // 每个扩展模块都有自己的全局变量, 因此各自设置日志记录器
    logging::init(tracing::Level::DEBUG);

    m.add_submodule(&text::submodule(py)?)?;

    // 注册 ComfyUI NODE_CLASS_MAPPINGS/NODE_DISPLAY_NAME_MAPPINGS
    let node_mapping = PyDict::new(py);
    let name_mapping = PyDict::new(py);

    let nodes = node_register(py)?;
    for node in nodes {
        node_mapping.set_item(node.0, node.1)?;
        name_mapping.set_item(node.0, node.2)?;
    }

    m.add("NODE_CLASS_MAPPINGS", node_mapping)?;
    m.add("NODE_DISPLAY_NAME_MAPPINGS", name_mapping)?;
    Ok(())
}

/// 节点注册
#[cfg(feature = "python")]
fn node_register(py: Python<'_>) -> PyResult<Vec<NodeRegister<'_>>> {
    let mut nodes: Vec<NodeRegister> = Vec::new();
    nodes.extend(text::node_register(py)?);
    Ok(nodes)
}

//! 文本相关的节点
use pyo3::{
    types::{PyModule, PyModuleMethods},
    Bound, PyResult, Python,
};

use crate::core::NodeRegister;

mod character_node;
pub use character_node::CharacterNode;

mod simple_string;
pub use simple_string::SimpleStringNode;

/// 文本模块
pub fn submodule(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    let submodule = PyModule::new(py, "text")?;
    submodule.add_class::<CharacterNode>()?;
    submodule.add_class::<SimpleStringNode>()?;
    Ok(submodule)
}

/// Text node register
pub fn node_register(py: Python<'_>) -> PyResult<Vec<NodeRegister<'_>>> {
    let nodes: Vec<NodeRegister> = vec![
        NodeRegister("CharacterNode", py.get_type::<CharacterNode>(), "角色节点"),
        NodeRegister(
            "SimpleStringNode",
            py.get_type::<SimpleStringNode>(),
            "📌 简单文本节点",
        ),
    ];
    Ok(nodes)
}

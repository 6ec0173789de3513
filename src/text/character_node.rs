//! 角色节点
//!
//! 从 character.xlsx 读取标签表, 每个工作表作为一个下拉选项,
//! 选中的中文显示名转换为英文标签后追加到输入文本.

use std::collections::HashMap;

use log::error;
use pyo3::{
    exceptions::PyRuntimeError,
    pyclass, pymethods,
    types::{PyAnyMethods, PyDict, PyDictMethods, PyType},
    Bound, Py, PyErr, PyResult, Python,
};

use crate::{
    config::NodeConfig,
    core::category::CATEGORY_DARKBFLY,
    error::Error,
    table::{load_or_empty, resolve},
    wrapper::comfyui::{
        node_input::{character_input_spec, INPUT_TEXT},
        types::NODE_STRING,
        PromptServer,
    },
};

/// 角色节点
#[pyclass(subclass)]
pub struct CharacterNode {
    config: NodeConfig,
}

impl PromptServer for CharacterNode {}

#[pymethods]
impl CharacterNode {
    #[new]
    fn new() -> Self {
        Self {
            config: NodeConfig::from_env(),
        }
    }

    #[classattr]
    #[pyo3(name = "RETURN_TYPES")]
    fn return_types() -> (&'static str,) {
        (NODE_STRING,)
    }

    #[classattr]
    #[pyo3(name = "RETURN_NAMES")]
    fn return_names() -> (&'static str,) {
        ("输出文本",)
    }

    #[classattr]
    #[pyo3(name = "CATEGORY")]
    const CATEGORY: &'static str = CATEGORY_DARKBFLY;

    #[classattr]
    #[pyo3(name = "DESCRIPTION")]
    fn description() -> &'static str {
        "Append the English tags of the selected labels to the input text."
    }

    #[classattr]
    #[pyo3(name = "FUNCTION")]
    const FUNCTION: &'static str = "execute";

    /// 每次调用都重新读取标签表
    #[classmethod]
    #[pyo3(name = "INPUT_TYPES")]
    fn input_types(_cls: &Bound<'_, PyType>) -> PyResult<Py<PyDict>> {
        Python::with_gil(|py| {
            let config = NodeConfig::from_env();
            let tables = load_or_empty(&config.table_path);
            character_input_spec(&tables).build(py)
        })
    }

    #[pyo3(name = "execute", signature = (**kwargs))]
    fn execute<'py>(
        &mut self,
        py: Python<'py>,
        kwargs: Option<&Bound<'py, PyDict>>,
    ) -> PyResult<(String,)> {
        let results = self.process(kwargs);

        match results {
            Ok(v) => Ok(v),
            Err(e) => {
                error!("CharacterNode error, {e}");
                if let Err(e) = self.send_error(py, "CharacterNode", &e.to_string()) {
                    error!("send error failed, {e}");
                    return Err(PyErr::new::<PyRuntimeError, _>(e.to_string()));
                };
                Err(PyErr::new::<PyRuntimeError, _>(e.to_string()))
            }
        }
    }
}

impl CharacterNode {
    /// 解析选中项
    fn process(&self, kwargs: Option<&Bound<'_, PyDict>>) -> Result<(String,), Error> {
        let mut selections = HashMap::new();
        if let Some(kwargs) = kwargs {
            for (key, value) in kwargs.iter() {
                // 非字符串参数不是下拉选项
                if let (Ok(key), Ok(value)) = (key.extract::<String>(), value.extract::<String>()) {
                    selections.insert(key, value);
                }
            }
        }

        let base = selections
            .remove(INPUT_TEXT)
            .ok_or_else(|| Error::PyMissingKwargs(INPUT_TEXT.to_string()))?;

        // 重新加载, 保证使用最新的标签表
        let tables = load_or_empty(&self.config.table_path);
        Ok((resolve(&base, &selections, &tables),))
    }
}

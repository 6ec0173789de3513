//! Prompt Server

use pyo3::{
    types::{PyAnyMethods, PyDict, PyDictMethods, PyModule},
    PyResult, PyTypeInfo, Python,
};

/// 前端事件名
const EVENT_NAME: &str = "darkbfly";

/// comfyui PromptServer wrapper
pub trait PromptServer: PyTypeInfo {
    /// 节点执行出错时通知前端
    fn send_error(&self, py: Python, error_type: &str, message: &str) -> PyResult<()> {
        let server = PyModule::import(py, "server")?
            .getattr("PromptServer")?
            .getattr("instance")?;

        let error_data = PyDict::new(py);
        error_data.set_item("type", error_type)?;
        error_data.set_item("node", Self::type_object(py).getattr("__name__")?)?;
        error_data.set_item("message", message)?;

        server.getattr("send_sync")?.call1((EVENT_NAME, error_data))?;
        Ok(())
    }
}

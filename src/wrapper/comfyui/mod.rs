//! ComfyUI 节点接口

pub mod node_input;
pub mod types;

#[cfg(feature = "python")]
mod prompt_server;
#[cfg(feature = "python")]
pub use prompt_server::PromptServer;

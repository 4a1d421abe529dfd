//! Tool definitions module.
//!
//! Each tool is defined in its own file with:
//! - An identifier
//! - A `ToolHandler` implementation
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file (e.g., `my_tool.rs`)
//! 2. Implement the `ToolDefinition` and `ToolHandler` traits
//! 3. Export it here
//! 4. Register in `registry.rs`

mod minikube_cmd;

pub use minikube_cmd::MinikubeCmdTool;

/// Trait for tool definitions.
pub trait ToolDefinition {
    /// The unique identifier of the tool.
    const ID: &'static str;
}

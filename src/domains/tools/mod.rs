//! Tools domain.
//!
//! A tool is an invocable capability: the registry binds an identifier to a
//! handler that executes a command and returns an output record. Handlers
//! are opaque to the registry and never mutate registry state; a real
//! backend may have external side effects (e.g. running a system command)
//! but must report through the same two-outcome contract — a complete
//! output record or a `ToolError`. No partial results, no streaming.

pub mod definitions;
pub mod error;
pub mod registry;

pub use error::ToolError;
pub use registry::builtin_tools;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An invocation request for a tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolRequest {
    /// The command to execute.
    pub command: String,

    /// Optional command parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Map<String, Value>>,
}

impl ToolRequest {
    /// Create a request with no parameters.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            params: None,
        }
    }
}

/// The result of a successful tool invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolOutput {
    /// Output produced by the command.
    pub output: String,

    /// Invocation status reported to the caller, always "success" when the
    /// handler completes.
    pub status: String,
}

impl ToolOutput {
    /// Create an output record with the default "success" status.
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            status: "success".to_string(),
        }
    }
}

/// The invocation contract for a tool capability.
///
/// Handlers are registered once at startup and shared across concurrent
/// dispatches, so implementations must be `Send + Sync` and must not rely
/// on interior mutable state.
pub trait ToolHandler: Send + Sync {
    /// Execute the command described by `request`.
    fn invoke(&self, request: &ToolRequest) -> Result<ToolOutput, ToolError>;
}

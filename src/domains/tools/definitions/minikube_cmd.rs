//! Minikube command tool definition.

use super::ToolDefinition;
use crate::domains::tools::{ToolError, ToolHandler, ToolOutput, ToolRequest};

/// Mock minikube command executor.
///
/// Echoes the command back instead of shelling out. A real backend would
/// replace this handler with one that runs the command against the cluster
/// and reports failures as `ToolError::ExecutionFailed`.
pub struct MinikubeCmdTool;

impl ToolDefinition for MinikubeCmdTool {
    const ID: &'static str = "minikube_cmd";
}

impl ToolHandler for MinikubeCmdTool {
    fn invoke(&self, request: &ToolRequest) -> Result<ToolOutput, ToolError> {
        Ok(ToolOutput::new(format!("Executed: {}", request.command)))
    }
}

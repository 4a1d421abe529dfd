//! Tool registry - central registration of all tools.
//!
//! When adding a new tool:
//! 1. Create the tool file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `builtin_tools()`

use std::sync::Arc;

use super::ToolHandler;
use super::definitions::{MinikubeCmdTool, ToolDefinition};

/// All built-in tools as (identifier, handler) pairs.
///
/// This is the central place where tools are registered. The capability
/// registry seeds its tool mapping from this list.
pub fn builtin_tools() -> Vec<(&'static str, Arc<dyn ToolHandler>)> {
    vec![(
        MinikubeCmdTool::ID,
        Arc::new(MinikubeCmdTool) as Arc<dyn ToolHandler>,
    )]
}

//! Prompt definitions module.
//!
//! Each prompt is defined in its own file with its identifier and record.
//!
//! ## Adding a New Prompt
//!
//! 1. Create a new file (e.g., `my_prompt.rs`)
//! 2. Implement the `PromptDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod monitoring_workflow;

pub use monitoring_workflow::MonitoringWorkflowPrompt;

use super::Prompt;

/// Trait for prompt definitions.
pub trait PromptDefinition {
    /// The unique identifier of the prompt.
    const ID: &'static str;

    /// Build the record registered under `ID`.
    fn record() -> Prompt;
}

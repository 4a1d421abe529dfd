//! Prompt registry - central registration of all prompts.
//!
//! When adding a new prompt:
//! 1. Create the prompt file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `builtin_prompts()`

use super::Prompt;
use super::definitions::{MonitoringWorkflowPrompt, PromptDefinition};

/// All built-in prompts as (identifier, record) pairs.
///
/// This is the central place where prompts are registered. The capability
/// registry seeds its prompt mapping from this list.
pub fn builtin_prompts() -> Vec<(&'static str, Prompt)> {
    vec![(
        MonitoringWorkflowPrompt::ID,
        MonitoringWorkflowPrompt::record(),
    )]
}

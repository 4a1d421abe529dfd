//! Prompts domain.
//!
//! A prompt describes an ordered external workflow: a sequence of step names
//! and a human-readable description. The dispatcher only returns the
//! description; it never executes or sequences the steps itself.

pub mod definitions;
pub mod error;
pub mod registry;

pub use error::PromptError;
pub use registry::builtin_prompts;

use serde::{Deserialize, Serialize};

/// A static description of an ordered external workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    /// Ordered step names of the workflow.
    pub steps: Vec<String>,

    /// Human-readable description of the workflow.
    pub description: String,
}

impl Prompt {
    /// Create a prompt record.
    pub fn new(steps: Vec<&str>, description: impl Into<String>) -> Self {
        Self {
            steps: steps.into_iter().map(String::from).collect(),
            description: description.into(),
        }
    }
}

//! Monitoring workflow prompt definition.

use super::PromptDefinition;
use crate::domains::prompts::Prompt;

/// Describes the metrics monitoring workflow executed by external agents.
pub struct MonitoringWorkflowPrompt;

impl PromptDefinition for MonitoringWorkflowPrompt {
    const ID: &'static str = "monitoring_workflow";

    fn record() -> Prompt {
        Prompt::new(
            vec!["scrape_metrics", "log_data"],
            "Monitor system metrics",
        )
    }
}

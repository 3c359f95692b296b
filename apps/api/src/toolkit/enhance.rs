//! Best-effort AI rewrite of work-tool descriptions.
//!
//! Every gateway failure or unusable reply keeps the catalog description.
//! Calls for one toolkit run concurrently, each bounded by the gateway timeout.

use std::sync::Arc;

use tokio::task::{JoinError, JoinSet};
use tracing::{debug, warn};

use crate::llm_client::{prompts::REWRITE, TextGateway};
use crate::toolkit::models::WorkTool;
use crate::toolkit::prompts::ENHANCE_DESCRIPTION_TEMPLATE;

const MIN_DESCRIPTION_CHARS: usize = 20;
const MAX_DESCRIPTION_CHARS: usize = 150;

/// Accepts a single line of 20–150 characters once wrapping quotes,
/// backticks and whitespace are stripped.
pub fn accept_rewrite(raw: &str) -> Option<String> {
    let text = raw
        .trim()
        .trim_matches(|c: char| c == '"' || c == '\'' || c == '`')
        .trim();

    if text.contains('\n') {
        return None;
    }

    let chars = text.chars().count();
    (MIN_DESCRIPTION_CHARS..=MAX_DESCRIPTION_CHARS)
        .contains(&chars)
        .then(|| text.to_string())
}

fn build_prompt(tool: &WorkTool, profession_label: &str) -> String {
    ENHANCE_DESCRIPTION_TEMPLATE
        .replace("{tool_name}", &tool.name)
        .replace("{tool_description}", &tool.description)
        .replace("{profession}", profession_label)
}

/// Rewrites descriptions in place and returns how many were replaced.
///
/// Only a panicked task surfaces as an error; the composer treats that as an
/// unexpected failure and rebuilds the toolkit locally.
pub async fn enhance_descriptions(
    gateway: Arc<dyn TextGateway>,
    profession_label: &str,
    tools: &mut [WorkTool],
) -> Result<usize, JoinError> {
    let mut tasks = JoinSet::new();

    for (index, tool) in tools.iter().enumerate() {
        let gateway = Arc::clone(&gateway);
        let prompt = build_prompt(tool, profession_label);
        tasks.spawn(async move { (index, gateway.complete(&prompt, REWRITE).await) });
    }

    let mut replaced = 0;
    while let Some(joined) = tasks.join_next().await {
        let (index, outcome) = joined?;
        let tool = &mut tools[index];

        match outcome {
            Ok(text) => match accept_rewrite(&text) {
                Some(description) => {
                    tool.description = description;
                    replaced += 1;
                }
                None => debug!(tool = %tool.id, "Rewrite rejected, keeping catalog description"),
            },
            Err(e) => {
                warn!(tool = %tool.id, error = %e, "Description rewrite failed, keeping catalog description");
            }
        }
    }

    Ok(replaced)
}

//! Gateway-backed tool suggestions for a free-text use case.
//!
//! Not tied to the catalog: the model may name any real tool. A failed call or
//! an unreadable reply yields an empty list.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, SUGGESTION};
use crate::llm_client::{strip_json_fences, TextGateway};
use crate::suggest::prompts::SUGGEST_TOOLS_TEMPLATE;

pub const DEFAULT_LIMIT: usize = 5;
pub const MAX_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub pricing: String,
    #[serde(default)]
    pub relevance_score: f64,
}

fn build_prompt(query: &str, category: Option<&str>, limit: usize) -> String {
    let category_line = category
        .map(|c| format!("Category: {c}"))
        .unwrap_or_default();
    format!(
        "{}\n\n{}",
        SUGGEST_TOOLS_TEMPLATE
            .replace("{limit}", &limit.to_string())
            .replace("{query}", query)
            .replace("{category_line}", &category_line),
        JSON_ONLY_INSTRUCTION
    )
}

/// Reads a JSON array of suggestions, tolerating fences and surrounding prose.
pub fn parse_suggestions(reply: &str) -> Option<Vec<Suggestion>> {
    let stripped = strip_json_fences(reply);
    if let Ok(list) = serde_json::from_str::<Vec<Suggestion>>(stripped) {
        return Some(list);
    }

    let start = stripped.find('[')?;
    let end = stripped.rfind(']')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&stripped[start..=end]).ok()
}

/// Up to `limit` suggestions, in the order the model gave them.
pub async fn suggest_tools(
    gateway: &dyn TextGateway,
    query: &str,
    category: Option<&str>,
    limit: usize,
) -> Vec<Suggestion> {
    let prompt = build_prompt(query, category, limit);

    let reply = match gateway.complete(&prompt, SUGGESTION).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!(error = %e, "Suggestion call failed, returning no suggestions");
            return Vec::new();
        }
    };

    let Some(list) = parse_suggestions(&reply) else {
        warn!("Suggestion reply was not a JSON array, returning no suggestions");
        return Vec::new();
    };

    let suggestions: Vec<Suggestion> = list
        .into_iter()
        .filter(|s| !s.name.trim().is_empty())
        .take(limit)
        .collect();
    info!(count = suggestions.len(), "Suggestions ready");
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolkit::enhance::tests::FixedGateway;

    const REPLY: &str = r#"[
        {"name": "Jasper", "description": "Marketing copy", "category": "Writing", "url": "https://jasper.ai", "pricing": "Paid", "relevanceScore": 0.93},
        {"name": "Copy.ai", "description": "Short-form copy", "category": "Writing", "url": "https://copy.ai", "pricing": "Freemium", "relevanceScore": 0.88},
        {"name": "", "description": "nameless"},
        {"name": "Writesonic"}
    ]"#;

    fn gateway(reply: Option<&str>) -> FixedGateway {
        FixedGateway {
            reply: reply.map(str::to_string),
        }
    }

    #[test]
    fn test_prompt_includes_category_only_when_given() {
        assert!(build_prompt("blog posts", Some("Writing"), 3).contains("Category: Writing"));
        let prompt = build_prompt("blog posts", None, 3);
        assert!(!prompt.contains("Category:"));
        assert!(prompt.contains("Suggest 3 AI tools"));
    }

    #[test]
    fn test_parse_fenced_and_prose_wrapped_arrays() {
        let fenced = format!("```json\n{REPLY}\n```");
        assert_eq!(parse_suggestions(&fenced).unwrap().len(), 4);

        let prose = format!("Here you go: {REPLY} Hope this helps.");
        assert_eq!(parse_suggestions(&prose).unwrap().len(), 4);

        assert!(parse_suggestions("no tools today").is_none());
    }

    #[tokio::test]
    async fn test_suggestions_are_limited_and_named() {
        let result = suggest_tools(&gateway(Some(REPLY)), "blog posts", None, 5).await;
        let names: Vec<_> = result.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Jasper", "Copy.ai", "Writesonic"]);
        assert_eq!(result[0].relevance_score, 0.93);
        assert_eq!(result[2].pricing, "");

        let result = suggest_tools(&gateway(Some(REPLY)), "blog posts", None, 1).await;
        assert_eq!(result.len(), 1);
    }

    #[tokio::test]
    async fn test_gateway_failure_is_empty_list() {
        assert!(suggest_tools(&gateway(None), "blog posts", None, 5).await.is_empty());
        assert!(suggest_tools(&gateway(Some("sorry")), "blog posts", None, 5)
            .await
            .is_empty());
    }
}

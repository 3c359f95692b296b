//! Intent Parser: free text → profession, hobby and optional name.
//!
//! Never fails. Each tier that cannot produce an answer hands over to the next
//! one, and the reported confidence drops with every tier:
//!
//! 1. structured extraction reply, through [`strategies::REPLY_STRATEGIES`]
//! 2. offline keyword dictionary
//! 3. plain-text re-prompt (`PROFESSION: x, HOBBY: y`)
//! 4. fixed default guess

pub mod handlers;
pub mod keywords;
pub mod prompts;
pub mod strategies;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::intent::prompts::{EXTRACT_INTENT_TEMPLATE, PLAIN_INTENT_TEMPLATE};
use crate::intent::strategies::{
    default_guess, from_keywords, plain_text, DEFAULT_CAP, KEYWORD_CAP, PLAIN_TEXT_CAP,
    REPLY_STRATEGIES,
};
use crate::llm_client::{prompts::EXTRACTION, TextGateway};

pub const DEFAULT_PROFESSION: &str = "product-manager";
pub const DEFAULT_HOBBY: &str = "general";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedIntent {
    pub profession: String,
    pub profession_label: String,
    pub hobby: String,
    pub hobby_label: String,
    pub name: Option<String>,
    pub confidence: f64,
}

/// Best-effort parse of `input`. Gateway failures only lower the confidence.
pub async fn parse_intent(gateway: &dyn TextGateway, input: &str) -> ParsedIntent {
    let prompt = EXTRACT_INTENT_TEMPLATE.replace("{input}", input);

    match gateway.complete(&prompt, EXTRACTION).await {
        Ok(reply) => {
            for strategy in REPLY_STRATEGIES {
                if let Some(candidate) = (strategy.extract)(&reply) {
                    let intent = candidate.into_intent(strategy.cap);
                    info!(
                        tier = strategy.name,
                        profession = %intent.profession,
                        hobby = %intent.hobby,
                        confidence = intent.confidence,
                        "Intent parsed"
                    );
                    return intent;
                }
            }
            warn!("Extraction reply held no usable intent, trying keywords");
        }
        Err(e) => warn!(error = %e, "Intent extraction call failed, trying keywords"),
    }

    let (profession, hobby) = keywords::match_keywords(input);
    if let Some(candidate) = from_keywords(profession, hobby) {
        info!(tier = "keywords", "Intent parsed");
        return candidate.into_intent(KEYWORD_CAP);
    }

    let prompt = PLAIN_INTENT_TEMPLATE.replace("{input}", input);
    match gateway.complete(&prompt, EXTRACTION).await {
        Ok(reply) => {
            if let Some(candidate) = plain_text(&reply) {
                info!(tier = "plain_text", "Intent parsed");
                return candidate.into_intent(PLAIN_TEXT_CAP);
            }
        }
        Err(e) => warn!(error = %e, "Plain-text intent call failed"),
    }

    warn!("No tier understood the input, using default intent");
    default_guess().into_intent(DEFAULT_CAP)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::{CompletionOptions, LlmError};

    /// Pops scripted replies in order; `None` entries and an exhausted
    /// script fail the call.
    struct ScriptedGateway {
        replies: Mutex<Vec<Option<String>>>,
    }

    impl ScriptedGateway {
        fn new(replies: &[Option<&str>]) -> Self {
            let mut replies: Vec<Option<String>> =
                replies.iter().map(|r| r.map(str::to_string)).collect();
            replies.reverse();
            Self {
                replies: Mutex::new(replies),
            }
        }
    }

    #[async_trait]
    impl TextGateway for ScriptedGateway {
        async fn complete(&self, _prompt: &str, _options: CompletionOptions) -> Result<String, LlmError> {
            let next = self.replies.lock().unwrap().pop().flatten();
            next.ok_or(LlmError::EmptyContent)
        }

        fn model(&self) -> &str {
            "scripted"
        }
    }

    #[tokio::test]
    async fn test_clean_json_reply() {
        let gateway = ScriptedGateway::new(&[Some(
            r#"{"profession":"developer","professionLabel":"Software Developer","hobby":"gaming","hobbyLabel":"Gaming","name":"Sam","confidence":0.9}"#,
        )]);
        let intent = parse_intent(&gateway, "Sam, a developer who games").await;
        assert_eq!(intent.profession, "developer");
        assert_eq!(intent.profession_label, "Software Developer");
        assert_eq!(intent.hobby, "gaming");
        assert_eq!(intent.name.as_deref(), Some("Sam"));
        assert_eq!(intent.confidence, 0.9);
    }

    #[tokio::test]
    async fn test_fenced_reply_is_capped_below_direct() {
        let gateway = ScriptedGateway::new(&[Some(
            "```json\n{\"profession\":\"designer\",\"hobby\":\"photography\",\"confidence\":0.99}\n```",
        )]);
        let intent = parse_intent(&gateway, "designer into photography").await;
        assert_eq!(intent.profession, "designer");
        assert_eq!(intent.confidence, 0.9);
    }

    #[tokio::test]
    async fn test_gateway_failure_falls_to_keywords() {
        let gateway = ScriptedGateway::new(&[None]);
        let intent = parse_intent(&gateway, "I am a Product Manager who loves hiking").await;
        assert_eq!(intent.profession, "product-manager");
        assert_eq!(intent.hobby, "hiking");
        assert!(intent.confidence <= 0.5);
        assert!(intent.name.is_none());
    }

    #[tokio::test]
    async fn test_garbage_reply_then_plain_text() {
        let gateway = ScriptedGateway::new(&[
            Some("I cannot help with that"),
            Some("PROFESSION: Teacher, HOBBY: Chess"),
        ]);
        let intent = parse_intent(&gateway, "educator who loves chess").await;
        assert_eq!(intent.profession, "teacher");
        assert_eq!(intent.hobby, "chess");
        assert_eq!(intent.confidence, PLAIN_TEXT_CAP);
    }

    #[tokio::test]
    async fn test_everything_fails_uses_default() {
        let gateway = ScriptedGateway::new(&[None, None]);
        let intent = parse_intent(&gateway, "just vibes").await;
        assert_eq!(intent.profession, DEFAULT_PROFESSION);
        assert_eq!(intent.hobby, DEFAULT_HOBBY);
        assert_eq!(intent.confidence, DEFAULT_CAP);
        assert!(intent.confidence <= 0.5);
    }
}

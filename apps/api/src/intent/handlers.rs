//! Axum route handlers for intent parsing.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::intent::{parse_intent, ParsedIntent};
use crate::state::AppState;

/// Body shared by `/api/parse` and `/api/smart-generate`.
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub input: String,
}

impl ParseRequest {
    pub fn validated_input(&self) -> Result<&str, AppError> {
        let input = self.input.trim();
        if input.is_empty() {
            return Err(AppError::Validation("input cannot be empty".to_string()));
        }
        Ok(input)
    }
}

/// POST /api/parse
///
/// Always 200 for a non-empty input; low confidence signals a fallback tier.
pub async fn handle_parse(
    State(state): State<AppState>,
    Json(request): Json<ParseRequest>,
) -> Result<Json<ParsedIntent>, AppError> {
    let input = request.validated_input()?;
    Ok(Json(parse_intent(state.llm.as_ref(), input).await))
}

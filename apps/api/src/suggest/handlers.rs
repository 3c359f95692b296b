//! Axum route handlers for tool suggestions.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::suggest::{suggest_tools, Suggestion, DEFAULT_LIMIT, MAX_LIMIT};

/// `q` is accepted as an alias of `query`.
#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    pub query: Option<String>,
    pub q: Option<String>,
    pub category: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<Suggestion>,
}

/// GET /api/suggest?query=&category=&limit=
pub async fn handle_suggest(
    State(state): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> Result<Json<SuggestResponse>, AppError> {
    let query = params
        .query
        .as_deref()
        .or(params.q.as_deref())
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::Validation("query cannot be empty".to_string()))?;

    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(AppError::Validation(format!(
            "limit must be between 1 and {MAX_LIMIT}"
        )));
    }

    let category = params
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());

    let suggestions = suggest_tools(state.llm.as_ref(), query, category, limit).await;
    Ok(Json(SuggestResponse { suggestions }))
}

//! Read-only tool directory over the catalog.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{search, ToolCategory};
use crate::errors::AppError;
use crate::state::AppState;
use crate::toolkit::models::WorkTool;

const DEFAULT_LIMIT: usize = 20;
const MAX_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
pub struct ToolsParams {
    pub q: Option<String>,
    /// Category slug (`code_assistant`) or label (`Code Assistant`).
    pub category: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ToolsResponse {
    pub tools: Vec<WorkTool>,
    pub total: usize,
}

/// GET /api/tools?q=&category=&limit=
pub async fn handle_list_tools(
    State(state): State<AppState>,
    Query(params): Query<ToolsParams>,
) -> Result<Json<ToolsResponse>, AppError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(AppError::Validation(format!(
            "limit must be between 1 and {MAX_LIMIT}"
        )));
    }

    let category = match params.category.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(
            ToolCategory::parse(raw)
                .ok_or_else(|| AppError::Validation(format!("Unknown category: {raw}")))?,
        ),
    };

    let catalog = state.catalog.all_tools().await;
    let tools: Vec<WorkTool> = search(&catalog, params.q.as_deref(), category, limit)
        .into_iter()
        .map(WorkTool::from)
        .collect();

    Ok(Json(ToolsResponse {
        total: tools.len(),
        tools,
    }))
}

/// GET /api/tools/:id
pub async fn handle_get_tool(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WorkTool>, AppError> {
    let tool = state
        .catalog
        .tool_by_id(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Tool {id} not found")))?;
    Ok(Json(WorkTool::from(&tool)))
}

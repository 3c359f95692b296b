//! Axum route handlers for toolkit generation.

use axum::{extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::intent::{handlers::ParseRequest, parse_intent};
use crate::state::AppState;
use crate::toolkit::generator::{generate_toolkit, ToolkitInput};
use crate::toolkit::models::{GenerateRequest, Toolkit};

/// POST /api/generate
///
/// Unknown professions and hobbies are accepted and simply under-matched.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<Toolkit>, AppError> {
    if request.profession.trim().is_empty() {
        return Err(AppError::Validation("profession cannot be empty".to_string()));
    }
    if request.hobby.trim().is_empty() {
        return Err(AppError::Validation("hobby cannot be empty".to_string()));
    }

    let input = ToolkitInput::new(&request.profession, &request.hobby, request.name.as_deref());
    let toolkit = generate_toolkit(&state.toolkit_sources(), &input, request.use_ai).await?;

    info!(slug = %toolkit.slug, work = toolkit.work_tools.len(), life = toolkit.life_tools.len(), "Toolkit generated");
    Ok(Json(toolkit))
}

/// POST /api/smart-generate
///
/// Parses free text, then generates with AI rewriting on.
pub async fn handle_smart_generate(
    State(state): State<AppState>,
    Json(request): Json<ParseRequest>,
) -> Result<Json<Toolkit>, AppError> {
    let text = request.validated_input()?;
    let intent = parse_intent(state.llm.as_ref(), text).await;

    let input = ToolkitInput::new(&intent.profession, &intent.hobby, intent.name.as_deref());
    let toolkit = generate_toolkit(&state.toolkit_sources(), &input, true).await?;

    info!(
        slug = %toolkit.slug,
        confidence = intent.confidence,
        "Toolkit generated from free text"
    );
    Ok(Json(toolkit))
}

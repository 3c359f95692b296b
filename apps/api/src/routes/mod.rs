pub mod health;
pub mod taxonomy;
pub mod tools;

use axum::{
    routing::{get, post},
    Router,
};

use crate::intent::handlers as intent;
use crate::state::AppState;
use crate::suggest::handlers as suggest;
use crate::toolkit::handlers as toolkit;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/health/ready", get(health::ready_handler))
        // Toolkit API
        .route("/api/generate", post(toolkit::handle_generate))
        .route("/api/smart-generate", post(toolkit::handle_smart_generate))
        .route("/api/parse", post(intent::handle_parse))
        .route("/api/suggest", get(suggest::handle_suggest))
        // Pickers
        .route("/api/professions", get(taxonomy::handle_professions))
        .route("/api/hobbies", get(taxonomy::handle_hobbies))
        // Directory
        .route("/api/tools", get(tools::handle_list_tools))
        .route("/api/tools/:id", get(tools::handle_get_tool))
        .with_state(state)
}

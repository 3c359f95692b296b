use std::sync::Arc;

use crate::catalog::{Backgrounds, Catalog};
use crate::config::Config;
use crate::llm_client::TextGateway;
use crate::toolkit::generator::ToolkitSources;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub backgrounds: Backgrounds,
    /// Text-generation gateway. Gemini in production, fakes in tests.
    pub llm: Arc<dyn TextGateway>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn toolkit_sources(&self) -> ToolkitSources {
        ToolkitSources {
            catalog: self.catalog.clone(),
            backgrounds: self.backgrounds.clone(),
            gateway: Arc::clone(&self.llm),
        }
    }
}

//! Request and response shapes for toolkit generation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{IntegrationMode, Tool, ToolCategory};

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub profession: String,
    pub hobby: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_use_ai")]
    pub use_ai: bool,
}

fn default_use_ai() -> bool {
    true
}

/// Work-mode projection of a catalog tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkTool {
    pub id: String,
    pub name: String,
    /// Brand color used as the logo placeholder.
    pub logo: String,
    pub logo_url: Option<String>,
    pub rating: f64,
    pub description: String,
    pub cta_text: String,
    pub category: ToolCategory,
    pub price: f64,
    pub url: Option<String>,
    pub integration_mode: IntegrationMode,
    pub api_available: bool,
}

impl From<&Tool> for WorkTool {
    fn from(tool: &Tool) -> Self {
        Self {
            id: tool.id.clone(),
            name: tool.name.clone(),
            logo: tool.logo_color.clone(),
            logo_url: tool.logo_url.clone(),
            rating: tool.rating,
            description: tool.description.clone(),
            cta_text: tool.cta_text.clone(),
            category: tool.category,
            price: tool.price_monthly,
            url: Some(tool.website_url.clone()),
            integration_mode: tool.integration_mode,
            api_available: tool.api_available,
        }
    }
}

/// Life-mode projection: a catalog tool or a synthesized placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeTool {
    pub name: String,
    pub description: String,
    pub background_image: String,
    pub url: Option<String>,
}

impl LifeTool {
    pub fn from_tool(tool: &Tool, background_image: &str) -> Self {
        Self {
            name: tool.name.clone(),
            description: tool.description.clone(),
            background_image: background_image.to_string(),
            url: Some(tool.website_url.clone()),
        }
    }
}

/// Aggregates derived from the selected tools. Life tools are unpriced and
/// excluded from the cost and free/paid counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolkitSpecs {
    pub total_tools: usize,
    pub monthly_cost: f64,
    pub primary_goal: String,
    pub free_tools: usize,
    pub paid_tools: usize,
}

/// A generated toolkit. Built fresh per request and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toolkit {
    pub id: Uuid,
    pub slug: String,
    pub user_name: String,
    pub profession: String,
    pub profession_slug: String,
    pub life_context: String,
    pub work_tools: Vec<WorkTool>,
    pub life_tools: Vec<LifeTool>,
    pub specs: ToolkitSpecs,
    pub description: String,
    pub long_description: String,
    pub created_at: DateTime<Utc>,
}

//! Tool Catalog: the immutable list of recommendable tools and the hobby
//! background table.
//!
//! Catalog access prefers the remote row store when one is configured and
//! silently falls back to the built-in table on any failure. Callers only
//! ever see a list of tools, never where it came from.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub mod backgrounds;
pub mod builtin;
pub mod row_store;

pub use backgrounds::{BackgroundSource, BackgroundTable, Backgrounds};
pub use row_store::{RowStoreClient, RowStoreError};

// ────────────────────────────────────────────────────────────────────────────
// Data model
// ────────────────────────────────────────────────────────────────────────────

/// Closed set of tool categories. Serialized as the display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolCategory {
    /// General language model assistants. At most one per toolkit.
    #[serde(rename = "LLM")]
    Llm,
    #[serde(rename = "Code Assistant")]
    CodeAssistant,
    #[serde(rename = "Project Management")]
    ProjectManagement,
    Design,
    Analytics,
    Marketing,
    #[serde(rename = "SEO")]
    Seo,
    Writing,
    Research,
    Data,
    Communication,
    Automation,
    Testing,
    Monitoring,
    Finance,
    #[serde(rename = "HR")]
    Hr,
    Education,
    #[serde(rename = "Image Generation")]
    ImageGeneration,
    Video,
    Audio,
    Lifestyle,
    Fitness,
    Travel,
}

impl ToolCategory {
    pub const ALL: [ToolCategory; 23] = [
        ToolCategory::Llm,
        ToolCategory::CodeAssistant,
        ToolCategory::ProjectManagement,
        ToolCategory::Design,
        ToolCategory::Analytics,
        ToolCategory::Marketing,
        ToolCategory::Seo,
        ToolCategory::Writing,
        ToolCategory::Research,
        ToolCategory::Data,
        ToolCategory::Communication,
        ToolCategory::Automation,
        ToolCategory::Testing,
        ToolCategory::Monitoring,
        ToolCategory::Finance,
        ToolCategory::Hr,
        ToolCategory::Education,
        ToolCategory::ImageGeneration,
        ToolCategory::Video,
        ToolCategory::Audio,
        ToolCategory::Lifestyle,
        ToolCategory::Fitness,
        ToolCategory::Travel,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ToolCategory::Llm => "LLM",
            ToolCategory::CodeAssistant => "Code Assistant",
            ToolCategory::ProjectManagement => "Project Management",
            ToolCategory::Design => "Design",
            ToolCategory::Analytics => "Analytics",
            ToolCategory::Marketing => "Marketing",
            ToolCategory::Seo => "SEO",
            ToolCategory::Writing => "Writing",
            ToolCategory::Research => "Research",
            ToolCategory::Data => "Data",
            ToolCategory::Communication => "Communication",
            ToolCategory::Automation => "Automation",
            ToolCategory::Testing => "Testing",
            ToolCategory::Monitoring => "Monitoring",
            ToolCategory::Finance => "Finance",
            ToolCategory::Hr => "HR",
            ToolCategory::Education => "Education",
            ToolCategory::ImageGeneration => "Image Generation",
            ToolCategory::Video => "Video",
            ToolCategory::Audio => "Audio",
            ToolCategory::Lifestyle => "Lifestyle",
            ToolCategory::Fitness => "Fitness",
            ToolCategory::Travel => "Travel",
        }
    }

    /// Row-store `category_id` column value.
    pub fn slug(self) -> &'static str {
        match self {
            ToolCategory::Llm => "llm",
            ToolCategory::CodeAssistant => "code_assistant",
            ToolCategory::ProjectManagement => "project_mgmt",
            ToolCategory::Design => "design",
            ToolCategory::Analytics => "analytics",
            ToolCategory::Marketing => "marketing",
            ToolCategory::Seo => "seo",
            ToolCategory::Writing => "writing",
            ToolCategory::Research => "research",
            ToolCategory::Data => "data",
            ToolCategory::Communication => "communication",
            ToolCategory::Automation => "automation",
            ToolCategory::Testing => "testing",
            ToolCategory::Monitoring => "monitoring",
            ToolCategory::Finance => "finance",
            ToolCategory::Hr => "hr",
            ToolCategory::Education => "education",
            ToolCategory::ImageGeneration => "image_gen",
            ToolCategory::Video => "video",
            ToolCategory::Audio => "audio",
            ToolCategory::Lifestyle => "lifestyle",
            ToolCategory::Fitness => "fitness",
            ToolCategory::Travel => "travel",
        }
    }

    /// Accepts either the slug or the display label, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(raw) || c.label().eq_ignore_ascii_case(raw))
    }

    pub fn is_general_assistant(self) -> bool {
        self == ToolCategory::Llm
    }
}

/// Informational only; nothing enforces it against `price_monthly`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingType {
    Free,
    Freemium,
    Paid,
}

/// How the tool could be embedded in the product later on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationMode {
    Crawler,
    FreeApi,
    PaidApi,
    Prompt,
    Iframe,
    Redirect,
}

/// An immutable catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: ToolCategory,
    pub logo_color: String,
    pub logo_url: Option<String>,
    pub website_url: String,
    pub pricing_type: PricingType,
    /// 0 means free.
    pub price_monthly: f64,
    /// 1.0 – 5.0, primary ranking key.
    pub rating: f64,
    /// Only used by fuzzy search, never by profession/hobby matching.
    pub tags: Vec<String>,
    pub professions: Vec<String>,
    pub hobbies: Vec<String>,
    pub cta_text: String,
    pub features: Vec<String>,
    pub integration_mode: IntegrationMode,
    pub api_available: bool,
    pub has_free_tier: bool,
}

impl Tool {
    pub fn is_general_assistant(&self) -> bool {
        self.category.is_general_assistant()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Catalog access
// ────────────────────────────────────────────────────────────────────────────

/// A remote source of catalog rows. Implemented by `RowStoreClient`.
#[async_trait]
pub trait ToolSource: Send + Sync {
    async fn fetch_tools(&self) -> Result<Vec<Tool>, RowStoreError>;
}

/// Read-only catalog handle shared by every request.
#[derive(Clone)]
pub struct Catalog {
    local: Arc<[Tool]>,
    remote: Option<Arc<dyn ToolSource>>,
}

impl Catalog {
    pub fn new(local: Vec<Tool>) -> Self {
        Self {
            local: local.into(),
            remote: None,
        }
    }

    pub fn builtin() -> Self {
        Self::new(builtin::builtin_tools())
    }

    pub fn with_remote(mut self, remote: Arc<dyn ToolSource>) -> Self {
        self.remote = Some(remote);
        self
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Same local table, remote source detached.
    pub fn local_only(&self) -> Self {
        Self {
            local: Arc::clone(&self.local),
            remote: None,
        }
    }

    /// All tools in stable order. Never fails: a remote error or an empty
    /// remote result falls back to the built-in table for this call.
    pub async fn all_tools(&self) -> Arc<[Tool]> {
        let Some(remote) = &self.remote else {
            return Arc::clone(&self.local);
        };

        match remote.fetch_tools().await {
            Ok(tools) if !tools.is_empty() => {
                debug!(count = tools.len(), "Catalog served from row store");
                tools.into()
            }
            Ok(_) => {
                warn!("Row store returned no tools, using built-in catalog");
                Arc::clone(&self.local)
            }
            Err(e) => {
                warn!(error = %e, "Row store unavailable, using built-in catalog");
                Arc::clone(&self.local)
            }
        }
    }

    pub async fn tool_by_id(&self, id: &str) -> Option<Tool> {
        self.all_tools().await.iter().find(|t| t.id == id).cloned()
    }
}

/// Case-insensitive fuzzy search over name, description and tags, optionally
/// narrowed to one category. Results are ordered by rating, best first.
pub fn search<'a>(
    tools: &'a [Tool],
    query: Option<&str>,
    category: Option<ToolCategory>,
    limit: usize,
) -> Vec<&'a Tool> {
    let terms: Vec<String> = query
        .unwrap_or_default()
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();

    let mut hits: Vec<&Tool> = tools
        .iter()
        .filter(|t| category.map_or(true, |c| t.category == c))
        .filter(|t| {
            terms.iter().all(|term| {
                t.name.to_lowercase().contains(term)
                    || t.description.to_lowercase().contains(term)
                    || t.tags.iter().any(|tag| tag.to_lowercase().contains(term))
            })
        })
        .collect();

    hits.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    hits.truncate(limit);
    hits
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

//! Row-store client for a PostgREST-style table API holding the catalog.
//!
//! Optional. When configured, the catalog reads `ai_tools` and
//! `hobby_backgrounds` through it; any failure here is absorbed by
//! `Catalog::all_tools` and `Backgrounds::table`.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use super::backgrounds::{BackgroundSource, BackgroundTable};
use super::{IntegrationMode, PricingType, Tool, ToolCategory, ToolSource};
use crate::config::RowStoreConfig;

const TOOLS_TABLE: &str = "ai_tools";
const BACKGROUNDS_TABLE: &str = "hobby_backgrounds";

#[derive(Debug, Error)]
pub enum RowStoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Schema error: {0}")]
    Schema(String),
}

/// One `ai_tools` row, snake_case columns as stored remotely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category_id: String,
    #[serde(default)]
    pub logo_color: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    pub website_url: String,
    #[serde(default)]
    pub pricing_type: Option<String>,
    pub price_monthly: f64,
    pub rating: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub professions: Vec<String>,
    #[serde(default)]
    pub hobbies: Vec<String>,
    #[serde(default)]
    pub cta_text: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub integration_mode: Option<String>,
    #[serde(default)]
    pub api_available: bool,
    #[serde(default)]
    pub has_free_tier: bool,
    #[serde(default = "active")]
    pub is_active: bool,
}

fn active() -> bool {
    true
}

impl TryFrom<ToolRow> for Tool {
    type Error = RowStoreError;

    fn try_from(row: ToolRow) -> Result<Self, Self::Error> {
        let category = ToolCategory::parse(&row.category_id).ok_or_else(|| {
            RowStoreError::Schema(format!(
                "tool '{}' has unknown category_id '{}'",
                row.id, row.category_id
            ))
        })?;

        let pricing_type = match row.pricing_type.as_deref() {
            Some(raw) => parse_enum::<PricingType>(raw, &row.id, "pricing_type")?,
            None if row.price_monthly == 0.0 => PricingType::Free,
            None => PricingType::Paid,
        };

        let integration_mode = match row.integration_mode.as_deref() {
            Some(raw) => parse_enum::<IntegrationMode>(raw, &row.id, "integration_mode")?,
            None => IntegrationMode::Redirect,
        };

        if !(1.0..=5.0).contains(&row.rating) || row.price_monthly < 0.0 {
            return Err(RowStoreError::Schema(format!(
                "tool '{}' has out-of-range rating {} or price {}",
                row.id, row.rating, row.price_monthly
            )));
        }

        Ok(Tool {
            id: row.id,
            name: row.name,
            description: row.description,
            category,
            logo_color: row.logo_color.unwrap_or_else(|| "#6366F1".to_string()),
            logo_url: row.logo_url,
            website_url: row.website_url,
            pricing_type,
            price_monthly: row.price_monthly,
            rating: row.rating,
            tags: row.tags,
            professions: row.professions,
            hobbies: row.hobbies,
            cta_text: row.cta_text.unwrap_or_else(|| "Try Free".to_string()),
            features: row.features,
            integration_mode,
            api_available: row.api_available,
            has_free_tier: row.has_free_tier,
        })
    }
}

impl From<&Tool> for ToolRow {
    fn from(tool: &Tool) -> Self {
        Self {
            id: tool.id.clone(),
            name: tool.name.clone(),
            description: tool.description.clone(),
            category_id: tool.category.slug().to_string(),
            logo_color: Some(tool.logo_color.clone()),
            logo_url: tool.logo_url.clone(),
            website_url: tool.website_url.clone(),
            pricing_type: Some(enum_text(&tool.pricing_type)),
            price_monthly: tool.price_monthly,
            rating: tool.rating,
            tags: tool.tags.clone(),
            professions: tool.professions.clone(),
            hobbies: tool.hobbies.clone(),
            cta_text: Some(tool.cta_text.clone()),
            features: tool.features.clone(),
            integration_mode: Some(enum_text(&tool.integration_mode)),
            api_available: tool.api_available,
            has_free_tier: tool.has_free_tier,
            is_active: true,
        }
    }
}

/// One `hobby_backgrounds` row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackgroundRow {
    pub hobby: String,
    pub image_url: String,
    #[serde(default)]
    pub priority: u32,
}

fn parse_enum<T: serde::de::DeserializeOwned>(
    raw: &str,
    id: &str,
    column: &str,
) -> Result<T, RowStoreError> {
    serde_json::from_value(serde_json::Value::String(raw.trim().to_lowercase())).map_err(|_| {
        RowStoreError::Schema(format!("tool '{id}' has unknown {column} '{raw}'"))
    })
}

fn enum_text<T: Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}

/// PostgREST client. Each call is an independent HTTP request bounded by the
/// configured timeout.
#[derive(Clone)]
pub struct RowStoreClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RowStoreClient {
    pub fn new(config: &RowStoreConfig) -> Result<Self, RowStoreError> {
        Ok(Self {
            client: Client::builder().timeout(config.timeout).build()?,
            base_url: config.url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, RowStoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(RowStoreError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Active tools ordered by insertion id, converted into catalog records.
    pub async fn list_tools(&self) -> Result<Vec<Tool>, RowStoreError> {
        let request = self
            .client
            .get(self.table_url(TOOLS_TABLE))
            .query(&[("select", "*"), ("is_active", "eq.true")]);

        let response = Self::check(self.authorized(request).send().await?).await?;
        let rows: Vec<ToolRow> = response
            .json()
            .await
            .map_err(|e| RowStoreError::Schema(e.to_string()))?;

        rows.into_iter().map(Tool::try_from).collect()
    }

    /// Every background row, lowest priority first, grouped by hobby.
    pub async fn list_backgrounds(&self) -> Result<BackgroundTable, RowStoreError> {
        let request = self.client.get(self.table_url(BACKGROUNDS_TABLE)).query(&[
            ("select", "hobby,image_url,priority"),
            ("order", "priority.asc"),
        ]);

        let response = Self::check(self.authorized(request).send().await?).await?;
        let rows: Vec<BackgroundRow> = response
            .json()
            .await
            .map_err(|e| RowStoreError::Schema(e.to_string()))?;

        Ok(BackgroundTable::from_rows(rows))
    }

    /// Inserts or merges every tool by primary key.
    pub async fn upsert_tools(&self, tools: &[Tool]) -> Result<usize, RowStoreError> {
        let rows: Vec<ToolRow> = tools.iter().map(ToolRow::from).collect();
        self.upsert(TOOLS_TABLE, &rows).await?;
        info!(count = rows.len(), "Upserted tools into row store");
        Ok(rows.len())
    }

    pub async fn upsert_backgrounds(&self, rows: &[BackgroundRow]) -> Result<usize, RowStoreError> {
        self.upsert(BACKGROUNDS_TABLE, rows).await?;
        info!(count = rows.len(), "Upserted hobby backgrounds into row store");
        Ok(rows.len())
    }

    async fn upsert<T: Serialize>(&self, table: &str, rows: &[T]) -> Result<(), RowStoreError> {
        let request = self
            .client
            .post(self.table_url(table))
            .header("Prefer", "resolution=merge-duplicates")
            .json(rows);

        Self::check(self.authorized(request).send().await?).await?;
        Ok(())
    }
}

#[async_trait]
impl ToolSource for RowStoreClient {
    async fn fetch_tools(&self) -> Result<Vec<Tool>, RowStoreError> {
        self.list_tools().await
    }
}

#[async_trait]
impl BackgroundSource for RowStoreClient {
    async fn fetch_backgrounds(&self) -> Result<BackgroundTable, RowStoreError> {
        self.list_backgrounds().await
    }
}

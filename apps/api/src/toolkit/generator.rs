//! Toolkit generation: catalog → recommendations → optional AI rewrite → toolkit.
//!
//! The catalog being empty is the only failure a caller ever sees. Anything
//! else that goes wrong on the full path is logged and the toolkit is rebuilt
//! from the builtin catalog with no AI step.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::catalog::{Backgrounds, Catalog};
use crate::errors::AppError;
use crate::llm_client::TextGateway;
use crate::recommend::{personalized, DEFAULT_LIFE_LIMIT, DEFAULT_WORK_LIMIT};
use crate::toolkit::enhance::enhance_descriptions;
use crate::toolkit::labels::{humanize_slug, profession_label, slugify, toolkit_slug};
use crate::toolkit::models::{LifeTool, Toolkit, ToolkitSpecs, WorkTool};

const PRIMARY_GOAL: &str = "Productivity";
const DEFAULT_USER_NAME: &str = "User";

/// Normalized generation inputs.
#[derive(Debug, Clone)]
pub struct ToolkitInput {
    pub profession: String,
    pub hobby: String,
    pub name: Option<String>,
}

impl ToolkitInput {
    /// Slugifies profession and hobby; a blank name becomes `None`.
    pub fn new(profession: &str, hobby: &str, name: Option<&str>) -> Self {
        Self {
            profession: slugify(profession),
            hobby: slugify(hobby),
            name: name
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string),
        }
    }
}

/// Everything the generator reads from.
#[derive(Clone)]
pub struct ToolkitSources {
    pub catalog: Catalog,
    pub backgrounds: Backgrounds,
    pub gateway: Arc<dyn TextGateway>,
}

/// Builds a toolkit, rewriting work-tool descriptions through the gateway when
/// `use_ai` is set.
pub async fn generate_toolkit(
    sources: &ToolkitSources,
    input: &ToolkitInput,
    use_ai: bool,
) -> Result<Toolkit, AppError> {
    let gateway = use_ai.then(|| Arc::clone(&sources.gateway));

    match compose(&sources.catalog, &sources.backgrounds, gateway, input).await {
        Ok(toolkit) => Ok(toolkit),
        // all_tools is only empty when the builtin table is
        Err(AppError::CatalogEmpty) => Err(AppError::CatalogEmpty),
        Err(e) => {
            warn!(
                error = %e,
                profession = %input.profession,
                hobby = %input.hobby,
                "Toolkit generation failed, rebuilding from the builtin catalog"
            );
            compose(
                &sources.catalog.local_only(),
                &sources.backgrounds.local_only(),
                None,
                input,
            )
            .await
        }
    }
}

async fn compose(
    catalog: &Catalog,
    backgrounds: &Backgrounds,
    gateway: Option<Arc<dyn TextGateway>>,
    input: &ToolkitInput,
) -> Result<Toolkit, AppError> {
    let tools = catalog.all_tools().await;
    if tools.is_empty() {
        return Err(AppError::CatalogEmpty);
    }

    let profession = profession_label(&input.profession);
    let life_context = humanize_slug(&input.hobby);

    let backgrounds = backgrounds.table().await;
    let mut recs = personalized(
        &tools,
        &backgrounds,
        &input.profession,
        &input.hobby,
        DEFAULT_WORK_LIMIT,
        DEFAULT_LIFE_LIMIT,
    );

    if let Some(gateway) = gateway {
        let replaced = enhance_descriptions(gateway, &profession, &mut recs.work_tools)
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("description rewrite task failed: {e}")))?;
        info!(replaced, total = recs.work_tools.len(), "Rewrote work-tool descriptions");
    }

    let specs = compute_specs(&recs.work_tools, &recs.life_tools);
    let description = format!("A personalized AI toolkit for {profession}s who enjoy {life_context}.");
    let long_description = long_description(&profession, &life_context, &recs.work_tools, &recs.life_tools);

    Ok(Toolkit {
        id: Uuid::new_v4(),
        slug: toolkit_slug(input.name.as_deref(), &input.profession, &input.hobby),
        user_name: input
            .name
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_NAME.to_string()),
        profession,
        profession_slug: input.profession.clone(),
        life_context,
        work_tools: recs.work_tools,
        life_tools: recs.life_tools,
        specs,
        description,
        long_description,
        created_at: Utc::now(),
    })
}

/// Cost and free/paid counts cover work tools only; life tools carry no price.
pub fn compute_specs(work_tools: &[WorkTool], life_tools: &[LifeTool]) -> ToolkitSpecs {
    let free_tools = work_tools.iter().filter(|t| t.price == 0.0).count();

    ToolkitSpecs {
        total_tools: work_tools.len() + life_tools.len(),
        monthly_cost: work_tools.iter().map(|t| t.price).sum(),
        primary_goal: PRIMARY_GOAL.to_string(),
        free_tools,
        paid_tools: work_tools.len() - free_tools,
    }
}

/// `["a"]` → `"a"`, `["a", "b", "c"]` → `"a, b and c"`.
fn join_names(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

fn long_description(
    profession: &str,
    life_context: &str,
    work_tools: &[WorkTool],
    life_tools: &[LifeTool],
) -> String {
    let work: Vec<&str> = work_tools.iter().take(3).map(|t| t.name.as_str()).collect();
    let life: Vec<&str> = life_tools.iter().map(|t| t.name.as_str()).collect();

    let mut text = if work.is_empty() {
        format!("A curated set of AI tools for the everyday work of a {profession}.")
    } else {
        format!(
            "Built around {} for the everyday work of a {profession}.",
            join_names(&work)
        )
    };
    if !life.is_empty() {
        text.push_str(&format!(
            " Outside work, {} keep {life_context} time fun and organized.",
            join_names(&life)
        ));
    }
    text
}

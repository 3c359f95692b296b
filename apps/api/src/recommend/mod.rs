//! Recommendation Engine: profession and hobby matching over the catalog.
//!
//! Pure functions over a tool slice. No I/O, no randomness: identical inputs
//! against an unchanged catalog always produce identical output.
//!
//! Matching is deliberately loose. A tool matches when its tag list contains
//! the input exactly OR any of its tags is a substring of the input, so
//! "developer" matches "software-developer" but "art" also matches
//! "startup". Callers must tolerate that over-match.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::catalog::{BackgroundTable, Tool};
use crate::toolkit::models::{LifeTool, WorkTool};

pub mod fallback;

pub const DEFAULT_WORK_LIMIT: usize = 5;
pub const DEFAULT_LIFE_LIMIT: usize = 2;

/// Work and life picks in frontend projection form.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations {
    pub work_tools: Vec<WorkTool>,
    pub life_tools: Vec<LifeTool>,
}

/// Exact membership, or any non-empty tag contained in `value`.
fn tags_match(tags: &[String], value: &str) -> bool {
    tags.iter()
        .any(|tag| tag == value || (!tag.is_empty() && value.contains(tag.as_str())))
}

/// Picks at most one general assistant for `profession`.
///
/// Preference: exact profession membership, then a profession tag contained in
/// the input, then the first assistant in catalog order.
pub fn pick_general_assistant<'a>(tools: &'a [Tool], profession: &str) -> Option<&'a Tool> {
    let assistants: Vec<&Tool> = tools.iter().filter(|t| t.is_general_assistant()).collect();

    assistants
        .iter()
        .find(|t| t.professions.iter().any(|p| p == profession))
        .or_else(|| {
            assistants
                .iter()
                .find(|t| tags_match(&t.professions, profession))
        })
        .or_else(|| assistants.first())
        .copied()
}

/// Rating descending, ties broken by price ascending.
fn work_order(a: &Tool, b: &Tool) -> Ordering {
    b.rating
        .total_cmp(&a.rating)
        .then_with(|| a.price_monthly.total_cmp(&b.price_monthly))
}

/// Up to `limit` tools for `profession`: one general assistant first (when the
/// catalog has any) followed by the best matching vertical tools.
///
/// The vertical search is never widened: an unmatched profession yields just
/// the assistant.
pub fn recommend_for_profession<'a>(
    tools: &'a [Tool],
    profession: &str,
    limit: usize,
) -> Vec<&'a Tool> {
    if limit == 0 {
        return Vec::new();
    }

    let mut verticals: Vec<&Tool> = tools
        .iter()
        .filter(|t| !t.is_general_assistant() && tags_match(&t.professions, profession))
        .collect();
    // Stable: equal keys keep catalog order.
    verticals.sort_by(|a, b| work_order(a, b));

    let mut seen = HashSet::new();
    let mut picked = Vec::with_capacity(limit);

    let assistant = pick_general_assistant(tools, profession);
    for tool in assistant.into_iter().chain(verticals) {
        if picked.len() == limit {
            break;
        }
        if seen.insert(tool.id.as_str()) {
            picked.push(tool);
        }
    }

    picked
}

/// Up to `limit` non-assistant tools for `hobby`, rating descending (no price
/// tie-break). Empty when nothing matches; placeholders are the caller's job.
pub fn recommend_for_hobby<'a>(tools: &'a [Tool], hobby: &str, limit: usize) -> Vec<&'a Tool> {
    let mut matches: Vec<&Tool> = tools
        .iter()
        .filter(|t| !t.is_general_assistant() && tags_match(&t.hobbies, hobby))
        .collect();
    matches.sort_by(|a, b| b.rating.total_cmp(&a.rating));

    let mut seen = HashSet::new();
    matches
        .into_iter()
        .filter(|&t| seen.insert(t.id.as_str()))
        .take(limit)
        .collect()
}

/// Work and life recommendations in projection form. Life tools get
/// backgrounds by position; an empty hobby match is replaced by the generic
/// placeholders.
pub fn personalized(
    tools: &[Tool],
    backgrounds: &BackgroundTable,
    profession: &str,
    hobby: &str,
    work_limit: usize,
    life_limit: usize,
) -> Recommendations {
    let work_tools = recommend_for_profession(tools, profession, work_limit)
        .into_iter()
        .map(WorkTool::from)
        .collect();

    let mut life_tools: Vec<LifeTool> = recommend_for_hobby(tools, hobby, life_limit)
        .into_iter()
        .enumerate()
        .map(|(i, tool)| LifeTool::from_tool(tool, backgrounds.background_for(hobby, i)))
        .collect();

    if life_tools.is_empty() {
        life_tools = fallback::generic_hobby_tools(hobby, backgrounds);
    }

    Recommendations {
        work_tools,
        life_tools,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

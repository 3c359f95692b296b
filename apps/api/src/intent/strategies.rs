//! Extraction strategies for gateway replies, tried in order from strictest to
//! most permissive. Each is a plain function so the order is auditable and
//! every tier can be tested on its own.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::intent::{ParsedIntent, DEFAULT_HOBBY, DEFAULT_PROFESSION};
use crate::toolkit::labels::{humanize_slug, slugify};

static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(?:json|JSON)?\s*(.*?)```").expect("Invalid regex"));
static KEYED_OBJECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)\{[^{}]*"profession"[^{}]*\}"#).expect("Invalid regex"));
static TRAILING_COMMA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*([}\]])").expect("Invalid regex"));
static PLAIN_TEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)PROFESSION:\s*([^,\n]+?)\s*,?\s*HOBBY:\s*([^,\n]+)").expect("Invalid regex")
});

/// Fields as the model reported them, before normalization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub profession: String,
    #[serde(default)]
    pub profession_label: Option<String>,
    #[serde(default)]
    pub hobby: Option<String>,
    #[serde(default)]
    pub hobby_label: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl Candidate {
    fn from_slugs(profession: &str, hobby: &str) -> Self {
        Self {
            profession: profession.to_string(),
            profession_label: None,
            hobby: Some(hobby.to_string()),
            hobby_label: None,
            name: None,
            confidence: None,
        }
    }

    /// Normalizes slugs, fills missing labels and clamps confidence to `cap`.
    pub fn into_intent(self, cap: f64) -> ParsedIntent {
        let profession = Some(slugify(&self.profession))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_PROFESSION.to_string());
        let hobby = self
            .hobby
            .map(|h| slugify(&h))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_HOBBY.to_string());

        let name = non_empty(self.name).filter(|n| {
            !n.eq_ignore_ascii_case("null") && !n.eq_ignore_ascii_case("none")
        });

        let confidence = self
            .confidence
            .filter(|c| c.is_finite())
            .map_or(cap, |c| c.clamp(0.0, cap));

        ParsedIntent {
            profession_label: non_empty(self.profession_label)
                .unwrap_or_else(|| humanize_slug(&profession)),
            hobby_label: non_empty(self.hobby_label).unwrap_or_else(|| humanize_slug(&hobby)),
            profession,
            hobby,
            name,
            confidence,
        }
    }
}

/// One extraction tier.
pub struct Strategy {
    pub name: &'static str,
    /// Highest confidence a result from this tier may report.
    pub cap: f64,
    pub extract: fn(&str) -> Option<Candidate>,
}

/// Tiers applied to the structured-extraction reply, in order.
pub const REPLY_STRATEGIES: &[Strategy] = &[
    Strategy {
        name: "direct_json",
        cap: 0.95,
        extract: direct_json,
    },
    Strategy {
        name: "fenced_json",
        cap: 0.9,
        extract: fenced_json,
    },
    Strategy {
        name: "keyed_object",
        cap: 0.7,
        extract: keyed_object,
    },
    Strategy {
        name: "brace_repair",
        cap: 0.6,
        extract: brace_repair,
    },
];

pub const KEYWORD_CAP: f64 = 0.5;
pub const PLAIN_TEXT_CAP: f64 = 0.3;
pub const DEFAULT_CAP: f64 = 0.1;

fn parse_candidate(text: &str) -> Option<Candidate> {
    serde_json::from_str::<Candidate>(text.trim())
        .ok()
        .filter(|c| !c.profession.trim().is_empty())
}

pub fn direct_json(reply: &str) -> Option<Candidate> {
    parse_candidate(reply)
}

pub fn fenced_json(reply: &str) -> Option<Candidate> {
    FENCE_RE
        .captures_iter(reply)
        .find_map(|caps| parse_candidate(&caps[1]))
}

pub fn keyed_object(reply: &str) -> Option<Candidate> {
    KEYED_OBJECT_RE
        .find_iter(reply)
        .find_map(|m| parse_candidate(m.as_str()))
}

/// Smart quotes become plain quotes, single quotes become double quotes when
/// the text has no double quotes at all, and trailing commas are dropped.
pub fn repair_json(raw: &str) -> String {
    let mut text = raw
        .replace(['\u{201C}', '\u{201D}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'");
    if !text.contains('"') {
        text = text.replace('\'', "\"");
    }
    TRAILING_COMMA_RE.replace_all(&text, "$1").into_owned()
}

pub fn brace_repair(reply: &str) -> Option<Candidate> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    if end <= start {
        return None;
    }
    parse_candidate(&repair_json(&reply[start..=end]))
}

/// `PROFESSION: x, HOBBY: y`, case-insensitive, trailing punctuation ignored.
pub fn plain_text(reply: &str) -> Option<Candidate> {
    let caps = PLAIN_TEXT_RE.captures(reply)?;
    let clean = |s: &str| {
        s.trim()
            .trim_end_matches(|c: char| c == '.' || c == ';')
            .trim_matches(|c: char| c == '"' || c == '\'')
            .to_string()
    };
    let profession = clean(&caps[1]);
    let hobby = clean(&caps[2]);
    if profession.is_empty() {
        return None;
    }
    Some(Candidate::from_slugs(&profession, &hobby))
}

/// Candidate from dictionary slugs. `None` unless at least one side matched.
pub fn from_keywords(profession: Option<&str>, hobby: Option<&str>) -> Option<Candidate> {
    if profession.is_none() && hobby.is_none() {
        return None;
    }
    Some(Candidate::from_slugs(
        profession.unwrap_or(DEFAULT_PROFESSION),
        hobby.unwrap_or(DEFAULT_HOBBY),
    ))
}

pub fn default_guess() -> Candidate {
    Candidate::from_slugs(DEFAULT_PROFESSION, DEFAULT_HOBBY)
}

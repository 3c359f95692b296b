//! Fixed synonym dictionaries for the offline intent tier.

/// Checked in order; the first keyword found wins, so no entry may contain an
/// earlier one at a word start.
const PROFESSION_KEYWORDS: &[(&str, &str)] = &[
    ("product manager", "product-manager"),
    ("pm", "product-manager"),
    ("developer", "developer"),
    ("software engineer", "developer"),
    ("programmer", "developer"),
    ("designer", "designer"),
    ("marketer", "marketer"),
    ("marketing", "marketer"),
    ("writer", "writer"),
    ("content", "writer"),
    ("student", "student"),
    ("entrepreneur", "entrepreneur"),
    ("founder", "entrepreneur"),
    ("data scientist", "data-scientist"),
    ("sales", "sales"),
    ("hr", "hr-manager"),
    ("finance", "finance"),
    ("support", "customer-support"),
];

const HOBBY_KEYWORDS: &[(&str, &str)] = &[
    ("hiking", "hiking"),
    ("hike", "hiking"),
    ("gaming", "gaming"),
    ("game", "gaming"),
    ("cook", "cooking"),
    ("read", "reading"),
    ("fitness", "fitness"),
    ("gym", "fitness"),
    ("workout", "fitness"),
    ("travel", "traveling"),
    ("code", "coding"),
    ("coding", "coding"),
    ("photo", "photography"),
    ("music", "music"),
    ("art", "art"),
];

/// True when `keyword` occurs in `text` starting at a word boundary.
/// Keeps short keywords like "hr" and "art" from firing inside "three" or
/// "startup" while still letting "cook" match "cooking".
fn starts_word(text: &str, keyword: &str) -> bool {
    text.match_indices(keyword).any(|(at, _)| {
        text[..at]
            .chars()
            .next_back()
            .map_or(true, |prev| !prev.is_alphanumeric())
    })
}

fn lookup(text: &str, table: &[(&str, &'static str)]) -> Option<&'static str> {
    table
        .iter()
        .find(|(keyword, _)| starts_word(text, keyword))
        .map(|(_, slug)| *slug)
}

/// Profession and hobby slugs found in `input`, either possibly absent.
pub fn match_keywords(input: &str) -> (Option<&'static str>, Option<&'static str>) {
    let lowered = input.to_lowercase();
    (
        lookup(&lowered, PROFESSION_KEYWORDS),
        lookup(&lowered, HOBBY_KEYWORDS),
    )
}

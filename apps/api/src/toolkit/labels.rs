//! Slugs and human-readable labels for professions and hobbies.

/// Display names for the professions offered by the pickers. Anything else is
/// title-cased from its slug.
const PROFESSION_LABELS: &[(&str, &str)] = &[
    ("product-manager", "Product Manager"),
    ("developer", "Software Developer"),
    ("designer", "UX Designer"),
    ("marketer", "Marketing Manager"),
    ("writer", "Content Writer"),
    ("student", "Student"),
    ("entrepreneur", "Entrepreneur"),
    ("data-scientist", "Data Scientist"),
    ("sales", "Sales Representative"),
    ("hr-manager", "HR Manager"),
    ("finance", "Financial Analyst"),
    ("customer-support", "Customer Support"),
];

/// Lowercases, trims and joins whitespace/underscore runs with single hyphens.
pub fn slugify(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// `"unknown-abc"` → `"Unknown Abc"`.
pub fn humanize_slug(slug: &str) -> String {
    slug.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn profession_label(slug: &str) -> String {
    PROFESSION_LABELS
        .iter()
        .find(|(known, _)| *known == slug)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| humanize_slug(slug))
}

/// `{name-or-"user"}-{profession}-{hobby}`. The name token is always present so
/// every slug has the same three-part shape.
pub fn toolkit_slug(name: Option<&str>, profession: &str, hobby: &str) -> String {
    let name = name.map(slugify).filter(|n| !n.is_empty());
    let name = name.as_deref().unwrap_or("user");
    format!("{}-{}-{}", name, slugify(profession), slugify(hobby))
}

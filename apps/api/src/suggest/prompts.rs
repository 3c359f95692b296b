// Prompt constants for tool suggestions.

/// Replace: {limit}, {query}, {category_line}
pub const SUGGEST_TOOLS_TEMPLATE: &str = r#"Suggest {limit} AI tools for the following use case:

Query: {query}
{category_line}

Return a JSON array of tools:
[
  {
    "name": "Tool Name",
    "description": "Brief description",
    "category": "Category",
    "url": "https://tool-url.com",
    "pricing": "Free / Freemium / Paid",
    "relevanceScore": 0.95
  }
]

Only include real, existing AI tools."#;

// Prompt constants for toolkit generation.

/// Rewrites one catalog description for a profession.
/// Replace: {tool_name}, {tool_description}, {profession}
pub const ENHANCE_DESCRIPTION_TEMPLATE: &str = r#"Rewrite the description of an AI tool so it speaks directly to a {profession}.

Tool: {tool_name}
Current description: {tool_description}

Rules:
- ONE sentence, 20 to 150 characters
- Mention a concrete task a {profession} would use it for
- No quotes, no markdown, no preamble

Description:"#;

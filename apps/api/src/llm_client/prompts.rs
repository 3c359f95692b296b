// Shared prompt fragments and the sampling presets every caller picks from.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

use super::CompletionOptions;

/// Suffix that enforces JSON-only output.
pub const JSON_ONLY_INSTRUCTION: &str = "Output ONLY valid JSON. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Low-temperature preset for extraction tasks.
pub const EXTRACTION: CompletionOptions = CompletionOptions {
    temperature: 0.1,
    max_tokens: 256,
};

/// Preset for short rewrites of catalog copy.
pub const REWRITE: CompletionOptions = CompletionOptions {
    temperature: 0.3,
    max_tokens: 128,
};

/// Preset for list-style suggestions.
pub const SUGGESTION: CompletionOptions = CompletionOptions {
    temperature: 0.2,
    max_tokens: 2048,
};

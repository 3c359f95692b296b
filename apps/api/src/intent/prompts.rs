// Prompt constants for intent extraction.

/// Structured extraction. Replace: {input}
pub const EXTRACT_INTENT_TEMPLATE: &str = r#"Parse this user input and extract their profession and hobby/interest.

User input: "{input}"

Output ONLY this JSON (no markdown, no explanation):
{"profession":"slug-format","professionLabel":"Human Readable","hobby":"slug-format","hobbyLabel":"Human Readable","name":"extracted name or null","confidence":0.95}

Rules:
- profession slug: lowercase, hyphenated (e.g., "product-manager", "software-developer")
- hobby slug: lowercase, single word preferred (e.g., "hiking", "gaming", "cooking")
- name: extract if mentioned, otherwise null
- confidence: 0.0-1.0 based on how clear the input is

Common professions: product-manager, developer, designer, marketer, writer, student, entrepreneur, data-scientist, sales, hr-manager, finance, customer-support, consultant, researcher, teacher

Common hobbies: hiking, gaming, cooking, reading, fitness, traveling, coding, photography, music, art

If unclear, make reasonable assumptions.

JSON:"#;

/// Last-resort plain-text extraction. Replace: {input}
pub const PLAIN_INTENT_TEMPLATE: &str = r#"What is this person's profession and hobby?

"{input}"

Answer on one line in exactly this format, nothing else:
PROFESSION: <profession>, HOBBY: <hobby>"#;

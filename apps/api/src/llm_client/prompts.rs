// Shared prompt fragments for structured-output calls.
// Feature prompts live in a prompts.rs next to the feature that owns them.

/// System instruction that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only, matching the provided response schema. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

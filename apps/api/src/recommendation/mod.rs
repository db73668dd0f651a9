// Career recommendations from the external structured model.
// All model calls go through llm_client — no direct Gemini requests here.

pub mod client;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod schema;

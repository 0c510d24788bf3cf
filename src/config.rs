use std::env;

/// Upstream credentials, read once at startup and passed into the services
/// that need them. Every field is independently optional: a missing
/// credential switches the owning service to its fallback behavior rather
/// than failing startup.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub openai_api_key: Option<String>,
    pub google_search_api_key: Option<String>,
    pub google_search_engine_id: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: read_non_empty("OPENAI_API_KEY"),
            google_search_api_key: read_non_empty("GOOGLE_SEARCH_API_KEY"),
            google_search_engine_id: read_non_empty("GOOGLE_SEARCH_ENGINE_ID"),
        }
    }
}

fn read_non_empty(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

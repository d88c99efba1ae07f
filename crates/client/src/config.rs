/// Environment variable holding the API base URL
pub const API_URL_VAR: &str = "HOTELS_API_URL";

/// Base URL used when [`API_URL_VAR`] is unset
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Client-side settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and authority of the API server, without the `/v1` prefix
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Reads the configuration from the environment, honouring a local `.env`
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        match std::env::var(API_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

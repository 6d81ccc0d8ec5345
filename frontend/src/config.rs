//! Build-time configuration
//!
//! The API base URL is baked into the WASM bundle from `FLOTA_API_URL` when
//! the crate is compiled, and read once when the app starts.

/// Used when `FLOTA_API_URL` is not set at build time.
const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    api_base_url: String,
}

impl AppConfig {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Reads `FLOTA_API_URL` captured at compile time.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("FLOTA_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

//! Frontend configuration module
//!
//! This module provides configuration for backend endpoints and settings.

/// Frontend configuration for backend URLs
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL of the shop API
    pub api_base_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("SHOPFRONT_API_URL")
                .unwrap_or("http://127.0.0.1:8000/api")
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

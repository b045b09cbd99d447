//! API base URL configuration.

/// Environment variable naming the API server.
pub const BASE_URL_VAR: &str = "BACKEND_URL";

/// Used when [`BASE_URL_VAR`] is unset or blank.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8001";

/// Where the portal API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme, host and optional prefix, without a trailing slash.
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::from_value(Some(base_url.into()))
    }

    /// Read the base URL from the environment.
    ///
    /// Native builds load `.env` first. Browser builds have no process
    /// environment, so the value is baked in at compile time.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            Self::from_value(std::env::var(BASE_URL_VAR).ok())
        }
        #[cfg(target_arch = "wasm32")]
        {
            Self::from_value(option_env!("BACKEND_URL").map(str::to_string))
        }
    }

    fn from_value(value: Option<String>) -> Self {
        let base_url = value
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }

    /// Absolute URL for an API path such as `/api/cases`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_value(None)
    }
}

//! Backend endpoint configuration.
//!
//! The base URL is baked in at build time from `PORTAL_API_URL`, the same way
//! a bundler inlines environment values into a static SPA. When unset, requests
//! go to the page's own origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use portal_session::gateway::join_url;

/// Build-time variable naming the backend base URL.
pub const API_URL_ENV: &str = "PORTAL_API_URL";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self { base_url: base_url.trim().trim_end_matches('/').to_owned() }
    }

    /// Configuration compiled in from [`API_URL_ENV`].
    pub fn from_build_env() -> Self {
        Self::new(option_env!("PORTAL_API_URL").unwrap_or_default())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute (or same-origin) URL for a backend endpoint.
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

//! Backend API configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment, so the base URL is baked in
//! at build time. SSR and native builds may still override it at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Environment variable naming the backend base URL.
pub const API_URL_ENV: &str = "RUSTLE_API_URL";

/// Same-origin: paths are requested relative to the page.
pub const DEFAULT_API_URL: &str = "";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build a config, trimming any trailing `/` from `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self { base_url: base_url.trim().trim_end_matches('/').to_owned() }
    }

    /// Resolve the base URL from `RUSTLE_API_URL`.
    ///
    /// Lookup order:
    /// - runtime env var (SSR / native)
    /// - compile-time env var (the WASM bundle)
    /// - [`DEFAULT_API_URL`]
    pub fn from_env() -> Self {
        let runtime = std::env::var(API_URL_ENV).ok();
        Self::new(resolve_base_url(runtime.as_deref(), option_env!("RUSTLE_API_URL")))
    }

    /// Absolute URL for a backend-relative `path`.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') || path.is_empty() {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

fn resolve_base_url<'a>(runtime: Option<&'a str>, build: Option<&'a str>) -> &'a str {
    runtime
        .filter(|v| !v.trim().is_empty())
        .or_else(|| build.filter(|v| !v.trim().is_empty()))
        .unwrap_or(DEFAULT_API_URL)
}

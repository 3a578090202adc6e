//! Client configuration.
//!
//! Defaults are compiled in; the API base can be overridden for a session with
//! `?api=https://school.example.org` in the page URL.

use serde::Deserialize;

pub const PAGE_SIZE_OPTIONS: [u64; 3] = [10, 20, 50];

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL in front of every `/api/...` path. Empty means "derive from
    /// the window location".
    pub api_base: String,
    pub default_limit: u64,
    pub stale_minutes: i64,
    pub page_size_options: Vec<u64>,
    pub toast_millis: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            default_limit: 10,
            stale_minutes: 5,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
            toast_millis: 5000,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct UrlOverrides {
    api: Option<String>,
    limit: Option<u64>,
}

impl ClientConfig {
    /// Defaults with the overrides found in a `location.search` string.
    /// Unparseable query strings are ignored.
    pub fn from_query(search: &str) -> Self {
        let overrides: UrlOverrides =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        let mut config = Self::default();
        if let Some(api) = overrides.api.filter(|a| !a.trim().is_empty()) {
            config.api_base = api.trim().trim_end_matches('/').to_string();
        }
        if let Some(limit) = overrides.limit.filter(|l| config.page_size_options.contains(l)) {
            config.default_limit = limit;
        }
        config
    }

    /// Read overrides from the current page URL.
    pub fn from_window() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }

    pub fn resolved_api_base(&self) -> String {
        if self.api_base.is_empty() {
            api_base_from_location()
        } else {
            self.api_base.clone()
        }
    }
}

/// The API listens on port 3000 of the host serving the admin.
fn api_base_from_location() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_query("");
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.default_limit, 10);
        assert_eq!(config.stale_minutes, 5);
        assert_eq!(config.toast_millis, 5000);
    }

    #[test]
    fn test_api_override() {
        let config = ClientConfig::from_query("?api=https%3A%2F%2Fapi.school.test%2F&active=news");
        assert_eq!(config.api_base, "https://api.school.test");
        assert_eq!(config.resolved_api_base(), "https://api.school.test");
    }

    #[test]
    fn test_limit_must_be_an_offered_size() {
        assert_eq!(ClientConfig::from_query("limit=20").default_limit, 20);
        assert_eq!(ClientConfig::from_query("limit=7").default_limit, 10);
    }
}

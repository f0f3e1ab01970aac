//! # Client Configuration
//!
//! Settings that shape the requests the typed clients build. Anything about
//! *how* requests travel (hosts, credentials, TLS, timeouts, retries) belongs
//! to the [`Transport`](super::Transport) implementation instead.

use serde::{Deserialize, Serialize};

/// Environment variable overriding [`ClientConfig::api_root`].
pub const ENV_API_ROOT: &str = "TOWER_API_ROOT";
/// Environment variable overriding [`ClientConfig::max_pages`].
pub const ENV_MAX_PAGES: &str = "TOWER_MAX_PAGES";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Path prefix of every list and detail URL.
    pub api_root: String,
    /// Upper bound on the pages `all()` follows through `next` links.
    pub max_pages: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_root: "/api/v1/".to_string(),
            max_pages: 1000,
        }
    }
}

impl ClientConfig {
    /// Defaults, overridden by `TOWER_API_ROOT` and `TOWER_MAX_PAGES` when set.
    ///
    /// A `TOWER_MAX_PAGES` value that is not a number is ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(root) = std::env::var(ENV_API_ROOT) {
            if !root.trim().is_empty() {
                config.api_root = root.trim().to_string();
            }
        }
        if let Some(pages) = std::env::var(ENV_MAX_PAGES)
            .ok()
            .and_then(|v| v.trim().parse().ok())
        {
            config.max_pages = pages;
        }
        config
    }

    pub fn with_api_root(mut self, api_root: impl Into<String>) -> Self {
        self.api_root = api_root.into();
        self
    }

    /// Joins `segments` under the API root: `["jobs", "42"]` → `/api/v1/jobs/42/`.
    pub fn api_path(&self, segments: &[&str]) -> String {
        let mut path = String::from("/");
        for part in std::iter::once(self.api_root.as_str()).chain(segments.iter().copied()) {
            for piece in part.split('/').filter(|p| !p.is_empty()) {
                path.push_str(piece);
                path.push('/');
            }
        }
        path
    }
}

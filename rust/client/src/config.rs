// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client configuration loaded from environment variables.

use std::time::Duration;

pub use taxmap_core::bounds::DEFAULT_PLACEHOLDER;
use taxmap_core::{AliasPriority, Bounds};

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the parcel data service.
    pub api_url: String,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Quiet period before a live search fires, in milliseconds.
    pub search_debounce_ms: u64,
    /// Schema tried first when resolving attribute aliases.
    pub alias_priority: AliasPriority,
    /// Placeholder outline as `min_lon,min_lat,max_lon,max_lat`.
    pub placeholder_bounds: [f64; 4],
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup. Missing or
    /// malformed variables keep their [`Config::default`] value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            api_url: lookup("TAXMAP_API_URL")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.api_url),
            request_timeout_secs: lookup("TAXMAP_TIMEOUT_SECS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            search_debounce_ms: lookup("TAXMAP_SEARCH_DEBOUNCE_MS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.search_debounce_ms),
            alias_priority: lookup("TAXMAP_ALIAS_PRIORITY")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.alias_priority),
            placeholder_bounds: lookup("TAXMAP_PLACEHOLDER_BOUNDS")
                .and_then(|s| parse_bounds(&s))
                .unwrap_or(defaults.placeholder_bounds),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn placeholder(&self) -> Bounds {
        Bounds::from_extent(self.placeholder_bounds)
    }
}

/// Built-in defaults; the environment is not consulted.
impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".into(),
            request_timeout_secs: 30,
            search_debounce_ms: 300,
            alias_priority: AliasPriority::LegacyFirst,
            placeholder_bounds: DEFAULT_PLACEHOLDER,
        }
    }
}

/// Parse `min_lon,min_lat,max_lon,max_lat`.
fn parse_bounds(s: &str) -> Option<[f64; 4]> {
    let values: Vec<f64> = s
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .ok()?;
    <[f64; 4]>::try_from(values).ok()
}

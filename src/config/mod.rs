//! Configuration loading and management

mod io;

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Remote API settings
    #[serde(default)]
    pub api: ApiSettings,

    /// Defaults for command-line arguments
    #[serde(default)]
    pub defaults: DefaultsSettings,
}

/// Where and how to reach the relay key endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// API root, e.g. `https://sentry.io/api/0`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_connect_secs")]
    pub timeout_connect_secs: u64,

    #[serde(default = "default_timeout_read_secs")]
    pub timeout_read_secs: u64,
}

fn default_base_url() -> String {
    "https://sentry.io/api/0".to_string()
}

fn default_timeout_connect_secs() -> u64 {
    5
}

fn default_timeout_read_secs() -> u64 {
    30
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_connect_secs: default_timeout_connect_secs(),
            timeout_read_secs: default_timeout_read_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsSettings {
    /// Organization used when `--org` is not given
    #[serde(default)]
    pub org_slug: String,
}

impl Config {
    /// Resolve the organization slug, preferring an explicit override
    pub fn org_slug(&self, explicit: Option<&str>) -> Option<String> {
        explicit
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .or_else(|| {
                Some(self.defaults.org_slug.trim().to_string()).filter(|s| !s.is_empty())
            })
    }
}

//! Application settings loaded from environment variables.

use std::net::SocketAddr;

use serde::{Deserialize, Deserializer};
use url::Url;

/// Version advertised by the API and its OpenAPI document.
pub const API_VERSION: &str = "1.0.0";

/// Human-readable service name.
pub const SERVICE_NAME: &str = "Creative-Forge API";

/// Application settings.
///
/// Resolved once at process start, then passed by reference to whatever
/// builds the router and binds the listener. Field names map to upper-case
/// environment variables (`api_port` <- `API_PORT`), matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    // === API Configuration ===
    /// Title shown in the OpenAPI document.
    #[serde(default = "default_api_title")]
    pub api_title: String,

    /// API version string.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Interface the HTTP listener binds to.
    #[serde(default = "default_api_host")]
    pub api_host: String,

    /// Port the HTTP listener binds to.
    #[serde(default = "default_api_port")]
    pub api_port: u16,

    /// Development auto-reload flag.
    #[serde(default = "default_true", deserialize_with = "deserialize_flag")]
    pub api_reload: bool,

    // === CORS Configuration ===
    /// Origins allowed to call the API from a browser (comma-separated).
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    // === Environment ===
    /// Deployment environment name ("development", "production", ...).
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Debug mode.
    #[serde(default = "default_true", deserialize_with = "deserialize_flag")]
    pub debug: bool,

    // === Observability ===
    /// Log filter used when `RUST_LOG` directives are absent.
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Port for the Prometheus exporter. Disabled when unset.
    #[serde(default)]
    pub metrics_port: Option<u16>,
}

fn default_api_title() -> String {
    SERVICE_NAME.to_string()
}

fn default_api_version() -> String {
    API_VERSION.to_string()
}

fn default_api_host() -> String {
    "0.0.0.0".to_string()
}

fn default_api_port() -> u16 {
    8000
}

fn default_true() -> bool {
    true
}

fn default_cors_origins() -> Vec<String> {
    [
        "http://localhost:3000",
        "http://localhost:8000",
        "http://127.0.0.1:3000",
        "http://127.0.0.1:8000",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Parse a boolean flag, ignoring case.
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flag(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid boolean value {raw:?}"))
    })
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_title: default_api_title(),
            api_version: default_api_version(),
            api_host: default_api_host(),
            api_port: default_api_port(),
            api_reload: default_true(),
            cors_origins: default_cors_origins(),
            environment: default_environment(),
            debug: default_true(),
            rust_log: default_log_level(),
            metrics_port: None,
        }
    }
}

impl Settings {
    /// Load settings from the environment, reading a `.env` file first.
    ///
    /// Variables already present in the process environment win over the
    /// `.env` file, which wins over the built-in defaults.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Load settings from explicit key/value pairs using the same rules as
    /// [`Settings::load`], without touching the process environment.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        envy::from_iter(pairs.into_iter().map(|(k, v)| (k.into(), v.into())))
    }

    /// Check that every configured value is usable.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_host.trim().is_empty() {
            return Err("API_HOST must not be empty".to_string());
        }

        for origin in &self.cors_origins {
            let url = Url::parse(origin)
                .map_err(|e| format!("CORS_ORIGINS entry {origin:?} is not a URL: {e}"))?;
            if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
                return Err(format!(
                    "CORS_ORIGINS entry {origin:?} must be an http(s) origin"
                ));
            }
        }

        Ok(())
    }

    /// CORS allow-list normalised to the form browsers send in `Origin`
    /// (scheme, host and non-default port, no trailing slash).
    pub fn cors_allow_list(&self) -> Vec<String> {
        self.cors_origins
            .iter()
            .filter_map(|origin| Url::parse(origin).ok())
            .map(|url| url.origin().ascii_serialization())
            .filter(|origin| origin != "null")
            .collect()
    }

    /// Host and port as a `host:port` string suitable for binding.
    pub fn bind_address(&self) -> String {
        match self.api_host.parse::<std::net::IpAddr>() {
            Ok(ip) => SocketAddr::new(ip, self.api_port).to_string(),
            Err(_) => format!("{}:{}", self.api_host, self.api_port),
        }
    }

    /// Check if running in production.
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

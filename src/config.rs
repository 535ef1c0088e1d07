use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Search4Faces JSON-RPC endpoint
pub const API_URL: &str = "https://search4faces.com/api/json-rpc/v1";
pub const JSONRPC_VERSION: &str = "2.0";
pub const DEFAULT_REQUEST_ID: &str = "some-id";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
/// Language of the textual profile fields returned by `searchFace`
pub const RESPONSE_LANG: &str = "ru";

/// Configuration held by a client for its whole lifetime
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub token: String,
    pub endpoint: String,
    pub request_id: String,
    pub timeout: Duration,
    pub lang: String,
}

impl ClientConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            endpoint: API_URL.to_string(),
            request_id: DEFAULT_REQUEST_ID.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            lang: RESPONSE_LANG.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Settings for the command-line front end
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub client: ClientSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientSettings {
    pub token: String,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_show_hidden")]
    pub show_hidden: bool,
    #[serde(default = "default_results_limit")]
    pub results_limit: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            source: default_source(),
            show_hidden: default_show_hidden(),
            results_limit: default_results_limit(),
        }
    }
}

fn default_source() -> String { "vk_wall".to_string() }
fn default_show_hidden() -> bool { true }
fn default_results_limit() -> u32 { crate::models::DEFAULT_RESULTS_LIMIT }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Later sources override earlier ones:
    /// 1. Configuration file (config/default.toml)
    /// 2. Local overrides (config/local.toml)
    /// 3. Environment variables prefixed with SEARCH4FACES,
    ///    e.g. SEARCH4FACES__CLIENT__TOKEN -> client.token
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(self.client.token.clone());
        if let Some(endpoint) = &self.client.endpoint {
            config = config.with_endpoint(endpoint.clone());
        }
        if let Some(secs) = self.client.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }

    pub fn search_options(&self) -> crate::models::SearchOptions {
        crate::models::SearchOptions::default()
            .source(self.search.source.as_str())
            .show_hidden(self.search.show_hidden)
            .results_limit(self.search.results_limit)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("SEARCH4FACES")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

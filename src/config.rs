use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;
use tracing::info;
use validator::{Validate, ValidationError};

/// Default values for configuration
const DEFAULT_BASE_URL: &str = "http://localhost:5034";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENV: &str = "development";
const DEFAULT_SESSION_DIR: &str = ".atk-session";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const CONFIG_DIR: &str = "config";

/// Client configuration with validation.
///
/// Layered from `config/default.toml`, `config/{env}.toml` and `ATK__`-
/// prefixed environment variables, in that order of precedence.
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Base URL of the remote ATK API
    #[validate(custom = "validate_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds (1-300)
    #[serde(default = "default_request_timeout_secs")]
    #[validate(range(min = 1, max = 300))]
    pub request_timeout_secs: u64,

    /// Connection timeout in seconds (1-300)
    #[serde(default = "default_connect_timeout_secs")]
    #[validate(range(min = 1, max = 300))]
    pub connect_timeout_secs: u64,

    /// Directory holding the durable session slots (identity + token)
    #[serde(default = "default_session_dir")]
    pub session_dir: String,

    /// Application environment
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Logging level
    #[serde(default = "default_log_level")]
    #[validate(custom = "validate_log_level")]
    pub log_level: String,

    /// Log in JSON format (structured logging)
    #[serde(default)]
    pub log_json: bool,
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

fn default_session_dir() -> String {
    DEFAULT_SESSION_DIR.to_string()
}

fn default_environment() -> String {
    DEFAULT_ENV.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: default_request_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            session_dir: default_session_dir(),
            environment: default_environment(),
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl ClientConfig {
    /// Creates a configuration with explicit base URL and session directory.
    pub fn new(base_url: impl Into<String>, session_dir: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            session_dir: session_dir.into(),
            ..Self::default()
        }
    }

    /// Initializes the global tracing subscriber from `log_level`/`log_json`.
    pub fn init_tracing(&self) {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(self.log_level.clone()));
        if self.log_json {
            let _ = tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .try_init();
        } else {
            let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
        }
    }
}

/// Loads and validates the configuration for the current environment.
pub fn load_config() -> Result<ClientConfig, ConfigError> {
    let run_env = env::var("RUN_ENV")
        .or_else(|_| env::var("ATK_ENV"))
        .unwrap_or_else(|_| DEFAULT_ENV.to_string());
    info!("Loading configuration for environment: {}", run_env);

    if !Path::new(CONFIG_DIR).exists() {
        info!(
            "Config directory '{}' not found; relying on built-in defaults and environment variables",
            CONFIG_DIR
        );
    }

    let config = Config::builder()
        .set_default("base_url", DEFAULT_BASE_URL)?
        .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS as i64)?
        .set_default("connect_timeout_secs", DEFAULT_CONNECT_TIMEOUT_SECS as i64)?
        .set_default("session_dir", DEFAULT_SESSION_DIR)?
        .set_default("environment", DEFAULT_ENV)?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("log_json", false)?
        .add_source(File::with_name(&format!("{}/default", CONFIG_DIR)).required(false))
        .add_source(File::with_name(&format!("{}/{}", CONFIG_DIR, run_env)).required(false))
        .add_source(Environment::with_prefix("ATK").separator("__"))
        .build()?;

    let config: ClientConfig = config.try_deserialize()?;
    config
        .validate()
        .map_err(|e| ConfigError::Message(format!("invalid configuration: {}", e)))?;

    Ok(config)
}

fn validate_base_url(value: &str) -> Result<(), ValidationError> {
    match url::Url::parse(value) {
        Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => Ok(()),
        _ => Err(ValidationError::new("base_url_invalid")),
    }
}

fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    match level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ValidationError::new("log_level_invalid")),
    }
}

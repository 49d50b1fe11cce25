use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub records: RecordsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub max_workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            max_workers: 8,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RecordsConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080/api/properties/".to_string(),
            timeout_secs: 15,
            user_agent: concat!("listing_resolver/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[server]
bind_addr = "127.0.0.1:3000"
max_workers = 8

[records]
base_url = "http://127.0.0.1:8080/api/properties/"
timeout_secs = 15

[logging]
filter = "info"
"#;

pub const CONFIG_PATH_VAR: &str = "LISTING_RESOLVER_CONFIG";
pub const BASE_URL_VAR: &str = "RECORDS_BASE_URL";
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    EnvPath(PathBuf),
    WorkingDir,
    Embedded,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::EnvPath(path) => write!(f, "{} (from {CONFIG_PATH_VAR})", path.display()),
            ConfigSource::WorkingDir => write!(f, "./config.toml"),
            ConfigSource::Embedded => write!(f, "embedded default"),
        }
    }
}

/// Load configuration.
///
/// Search order:
/// 1. The file named by `LISTING_RESOLVER_CONFIG`
/// 2. `config.toml` in the working directory
/// 3. The embedded default
///
/// `RECORDS_BASE_URL` and `BIND_ADDR` override whatever was loaded. Runs before
/// logging is installed, so the source is returned for the caller to report.
pub fn load_config() -> Result<(Config, ConfigSource), ConfigError> {
    let (mut config, source) = match std::env::var(CONFIG_PATH_VAR) {
        Ok(path) => {
            let path = PathBuf::from(path);
            (read_config(&path)?, ConfigSource::EnvPath(path))
        }
        Err(_) if Path::new("config.toml").exists() => (
            read_config(Path::new("config.toml"))?,
            ConfigSource::WorkingDir,
        ),
        Err(_) => (parse_config(DEFAULT_CONFIG)?, ConfigSource::Embedded),
    };

    apply_overrides(&mut config, |key| std::env::var(key).ok());
    validate(&config)?;
    Ok((config, source))
}

pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(contents)?)
}

pub fn apply_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(base_url) = lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
        config.records.base_url = base_url;
    }
    if let Some(bind_addr) = lookup(BIND_ADDR_VAR).filter(|v| !v.trim().is_empty()) {
        config.server.bind_addr = bind_addr;
    }
}

pub fn validate(config: &Config) -> Result<(), ConfigError> {
    let url = Url::parse(&config.records.base_url)
        .map_err(|e| ConfigError::Invalid(format!("records.base_url: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::Invalid(format!(
            "records.base_url cannot carry a path: {}",
            config.records.base_url
        )));
    }
    if config.records.timeout_secs == 0 {
        return Err(ConfigError::Invalid("records.timeout_secs must be > 0".into()));
    }
    if config.server.max_workers == 0 {
        return Err(ConfigError::Invalid("server.max_workers must be > 0".into()));
    }
    config
        .server
        .bind_addr
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::Invalid(format!("server.bind_addr: {e}")))?;
    Ok(())
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_addr
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("server.bind_addr: {e}")))
    }
}

//! Configuration loading for Tipboard.
//! Reads tipboard.toml from the current directory or the path in TIPBOARD_CONFIG.
//! Every field has a default, so an empty file (or no file) is a valid config.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const CONFIG_ENV: &str = "TIPBOARD_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "tipboard.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid listen address {0}")]
    Address(String),

    #[error("Invalid chat mount path {path:?}: {reason}")]
    ChatPath { path: String, reason: &'static str },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

// ── Server ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory served under /static
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host()       -> String { "127.0.0.1".to_string() }
fn default_port()       -> u16    { 3001 }
fn default_static_dir() -> String { "static".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

// ── Logging ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; RUST_LOG takes precedence when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String { "info,tower_http=info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_log_filter() }
    }
}

// ── Chart ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_plotly_cdn")]
    pub plotly_cdn: String,
    #[serde(default = "default_png_width")]
    pub png_width: u32,
    #[serde(default = "default_png_height")]
    pub png_height: u32,
    /// Multiplier applied to both PNG dimensions.
    #[serde(default = "default_png_scale")]
    pub png_scale: u32,
}

fn default_plotly_cdn() -> String { "https://cdn.plot.ly/plotly-2.35.2.min.js".to_string() }
fn default_png_width()  -> u32    { 800 }
fn default_png_height() -> u32    { 400 }
fn default_png_scale()  -> u32    { 2 }

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            plotly_cdn: default_plotly_cdn(),
            png_width: default_png_width(),
            png_height: default_png_height(),
            png_scale: default_png_scale(),
        }
    }
}

// ── Chat ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_stream_delay_ms")]
    pub stream_delay_ms: u64,
    #[serde(default = "default_instant_path")]
    pub instant_path: String,
    #[serde(default = "default_stream_path")]
    pub stream_path: String,
    #[serde(default = "default_instant_title")]
    pub instant_title: String,
    #[serde(default = "default_stream_title")]
    pub stream_title: String,
}

fn default_stream_delay_ms() -> u64    { 50 }
fn default_instant_path()    -> String { "/studio".to_string() }
fn default_stream_path()     -> String { "/stream".to_string() }
fn default_instant_title()   -> String { "Test APP".to_string() }
fn default_stream_title()    -> String { "Stream echo".to_string() }

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            stream_delay_ms: default_stream_delay_ms(),
            instant_path: default_instant_path(),
            stream_path: default_stream_path(),
            instant_title: default_instant_title(),
            stream_title: default_stream_title(),
        }
    }
}

/// Top-level paths the router already owns. `/static` also reserves everything below it.
const RESERVED_PATHS: &[&str] = &["/index_two", "/api/chart", "/api/chart_a", "/api/data", "/healthz", "/static"];

/// `/a/b` is `/a` or lies below it.
fn is_under(path: &str, prefix: &str) -> bool {
    path == prefix || path.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('/'))
}

fn check_mount_path(path: &str) -> Result<(), ConfigError> {
    let invalid = |reason: &'static str| -> Result<(), ConfigError> {
        Err(ConfigError::ChatPath { path: path.to_string(), reason })
    };

    let Some(rest) = path.strip_prefix('/') else {
        return invalid("must start with '/'");
    };
    if rest.is_empty() {
        return invalid("cannot mount at the root");
    }
    let segment_ok = |s: &str| {
        !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    };
    if !rest.split('/').all(segment_ok) {
        return invalid("segments must be non-empty and use only [A-Za-z0-9._-]");
    }
    if RESERVED_PATHS.iter().any(|r| path == *r) || is_under(path, "/static") {
        return invalid("collides with a built-in route");
    }
    Ok(())
}


impl Config {
    /// Load configuration.
    ///
    /// Lookup order: `explicit` (e.g. a `--config` flag), then the
    /// TIPBOARD_CONFIG env var, then tipboard.toml in the current directory.
    /// A path the caller asked for must exist; a missing default file yields
    /// `Config::default()`.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let requested = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        match requested {
            Some(path) => Self::from_file(&path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the router cannot be built from.
    ///
    /// Each chat mount path must be a plain absolute path that is not the root
    /// and not a built-in route. Neither may equal or contain the other.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let chat = &self.chat;
        check_mount_path(&chat.instant_path)?;
        check_mount_path(&chat.stream_path)?;
        if is_under(&chat.instant_path, &chat.stream_path) || is_under(&chat.stream_path, &chat.instant_path) {
            return Err(ConfigError::ChatPath {
                path: chat.stream_path.clone(),
                reason: "overlaps the instant chat path",
            });
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .server
            .host
            .parse()
            .map_err(|_| ConfigError::Address(self.server.host.clone()))?;
        Ok(SocketAddr::new(ip, self.server.port))
    }

    pub fn stream_delay(&self) -> Duration {
        Duration::from_millis(self.chat.stream_delay_ms)
    }
}

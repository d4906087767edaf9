//! Application configuration management
//!
//! Configuration is assembled once at startup from built-in defaults, an
//! optional TOML file and environment overrides, then validated so the relay
//! fails fast if misconfigured.

use crate::core::constants::defaults;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OllamaConfig {
    #[serde(default = "default_ollama_url")]
    pub url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Seconds; no timeout when absent
    #[serde(default)]
    pub request_timeout: Option<u64>,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            url: default_ollama_url(),
            model: default_model(),
            request_timeout: None,
        }
    }
}

fn default_host() -> String {
    defaults::HOST.to_string()
}

fn default_port() -> u16 {
    defaults::PORT
}

fn default_log_level() -> String {
    defaults::LOG_LEVEL.to_string()
}

fn default_ollama_url() -> String {
    defaults::OLLAMA_URL.to_string()
}

fn default_model() -> String {
    defaults::MODEL.to_string()
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ollama: OllamaConfig,
}

/// Relay configuration, immutable after startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address
    pub host: String,

    /// Listen port
    pub port: u16,

    /// Logging level
    pub log_level: String,

    /// Full URL of the upstream chat endpoint
    pub ollama_url: String,

    /// Model identifier sent with every upstream request
    pub model: String,

    /// Upstream request timeout in seconds
    pub request_timeout: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from(TomlConfig::default())
    }
}

impl From<TomlConfig> for Config {
    fn from(config: TomlConfig) -> Self {
        Config {
            host: config.server.host,
            port: config.server.port,
            log_level: config.server.log_level,
            ollama_url: config.ollama.url,
            model: config.ollama.model,
            request_timeout: config.ollama.request_timeout,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Keys missing from the file fall back to the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed, or if the
    /// resulting configuration is invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read configuration file")?;

        let toml_config: TomlConfig =
            toml::from_str(&content).context("Failed to parse TOML configuration")?;

        let config = Config::from(toml_config);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the config file and the process environment
    ///
    /// The file named by `CONFIG_PATH` must exist; the default `config.toml`
    /// is optional.
    pub fn from_env() -> Result<Self> {
        let mut config = match std::env::var("CONFIG_PATH") {
            Ok(path) => Self::from_file(&path)
                .with_context(|| format!("Failed to load configuration from {path}"))?,
            Err(_) if Path::new(defaults::CONFIG_PATH).exists() => {
                Self::from_file(defaults::CONFIG_PATH)?
            }
            Err(_) => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `HOST`, `PORT`, `LOG_LEVEL`, `OLLAMA_URL`, `OLLAMA_MODEL` and
    /// `OLLAMA_TIMEOUT` overrides read through `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.port = port
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {port:?}"))?;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            self.log_level = level;
        }
        if let Some(url) = lookup("OLLAMA_URL") {
            self.ollama_url = url;
        }
        if let Some(model) = lookup("OLLAMA_MODEL") {
            self.model = model;
        }
        if let Some(timeout) = lookup("OLLAMA_TIMEOUT") {
            let timeout = timeout.trim();
            self.request_timeout = if timeout.is_empty() {
                None
            } else {
                Some(timeout.parse().with_context(|| {
                    format!("OLLAMA_TIMEOUT must be a number of seconds, got {timeout:?}")
                })?)
            };
        }
        Ok(())
    }

    /// Check invariants the relay depends on at request time
    pub fn validate(&self) -> Result<()> {
        if !(self.ollama_url.starts_with("http://") || self.ollama_url.starts_with("https://")) {
            bail!(
                "Ollama URL must start with http:// or https://, got {:?}",
                self.ollama_url
            );
        }
        if self.model.trim().is_empty() {
            bail!("Model identifier must not be empty");
        }
        if self.request_timeout == Some(0) {
            bail!("Request timeout must be greater than zero when set");
        }
        Ok(())
    }

    /// Socket address string the server binds to
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

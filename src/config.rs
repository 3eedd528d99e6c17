use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::DEFAULT_TOP_N;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub quiz: QuizSettings,
    #[serde(default)]
    pub sessions: SessionSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct QuizSettings {
    /// Size of the "top recommendations" section
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self { top_n: default_top_n() }
    }
}

fn default_top_n() -> usize { DEFAULT_TOP_N }

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_max_sessions")]
    pub max_sessions: u64,
    /// Idle time after which a session is discarded
    #[serde(default = "default_session_ttl")]
    pub ttl_secs: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            max_sessions: default_max_sessions(),
            ttl_secs: default_session_ttl(),
        }
    }
}

fn default_max_sessions() -> u64 { 10_000 }
fn default_session_ttl() -> u64 { 1800 }

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
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with INSIGHT__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., INSIGHT__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        settings.try_deserialize::<Self>()?.validated()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        settings.try_deserialize::<Self>()?.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.quiz.top_n == 0 {
            return Err(ConfigError::Message("quiz.top_n must be at least 1".to_string()));
        }
        if self.sessions.max_sessions == 0 {
            return Err(ConfigError::Message("sessions.max_sessions must be at least 1".to_string()));
        }
        Ok(self)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("INSIGHT")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

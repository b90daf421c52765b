//! Layered application configuration.
//!
//! Precedence, lowest to highest:
//! 1. built-in defaults
//! 2. YAML file passed with `--config`
//! 3. environment variables prefixed `SHIPPY__` (nesting with `__`)
//! 4. CLI overrides

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, e.g. `SHIPPY__SERVER__LISTEN_ADDR`.
pub const ENV_PREFIX: &str = "SHIPPY__";

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:50051";

/// Configuration errors raised while loading or validating [`AppConfig`].
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config file does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),

    #[error("invalid server.listen_addr '{addr}': {reason}")]
    InvalidListenAddr { addr: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// `host:port` the gRPC server binds to.
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset, e.g. `info` or `consignment=debug`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

/// Top-level configuration shared by the Shippy binaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// Command-line values that take precedence over every other layer.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub listen_addr: Option<String>,
    pub verbose: u8,
}

impl AppConfig {
    /// Load defaults, then the optional YAML file, then `SHIPPY__*` env vars.
    ///
    /// The result is not validated; call [`AppConfig::validate`] after
    /// [`AppConfig::apply_cli_overrides`].
    ///
    /// # Errors
    /// Returns [`ConfigError`] if an explicit file is missing or a layer cannot be
    /// deserialized.
    pub fn load_layered(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Self = figment.extract().map_err(Box::new)?;
        Ok(config)
    }

    /// Apply CLI overrides on top of the loaded layers.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(addr) = &args.listen_addr {
            self.server.listen_addr.clone_from(addr);
        }
    }

    /// # Errors
    /// Returns [`ConfigError::InvalidListenAddr`] if `server.listen_addr` is not `host:port`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        shippy_transport_grpc::server::parse_listen_addr(&self.server.listen_addr).map_err(|e| {
            ConfigError::InvalidListenAddr {
                addr: self.server.listen_addr.clone(),
                reason: e.root_cause().to_string(),
            }
        })?;
        Ok(())
    }

    /// Effective configuration as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

//! Bridge configuration file
//!
//! Loaded from TOML, then overridden by environment variables and flags
//! (clap resolves those two before they get here).

use openclaw_mcp_bridge::{CliSettings, ServerIdentity, DEFAULT_SESSION_KEY};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Complete bridge configuration
///
/// ```toml
/// default_session_key = "agent:main:main"
/// verbose = false
///
/// [server]
/// name = "openclaw-mcp"
/// version = "0.1.0"
///
/// [cli]
/// binary = "openclaw"
/// agent = "main"
/// request_timeout_secs = 30
/// process_timeout_secs = 35
/// max_output_bytes = 10485760
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub server: ServerIdentity,
    pub default_session_key: String,
    pub verbose: bool,
    pub cli: CliSettings,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            server: ServerIdentity::new("openclaw-mcp", env!("CARGO_PKG_VERSION")),
            default_session_key: DEFAULT_SESSION_KEY.to_string(),
            verbose: false,
            cli: CliSettings::default(),
        }
    }
}

/// Values from the environment or command line; `None` leaves the file value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub binary: Option<String>,
    pub session: Option<String>,
    pub verbose: Option<bool>,
    pub server_name: Option<String>,
    pub server_version: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl BridgeConfig {
    /// Read `path` if given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(binary) = non_empty(overrides.binary) {
            self.cli.binary = binary;
        }
        if let Some(session) = non_empty(overrides.session) {
            self.default_session_key = session;
        }
        if let Some(name) = non_empty(overrides.server_name) {
            self.server.name = name;
        }
        if let Some(version) = non_empty(overrides.server_version) {
            self.server.version = version;
        }
        if let Some(verbose) = overrides.verbose {
            self.verbose = verbose;
        }
        self
    }
}

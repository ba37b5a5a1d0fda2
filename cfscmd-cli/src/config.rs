//! Destination configuration.
//!
//! Resolved in the following order (later overrides earlier):
//! 1. Default values
//! 2. TOML file (`--config` or `CFSCMD_CONFIG`)
//! 3. Environment variables (`CFSCMD_TARGET_IP`, `CFSCMD_CI_LAB_PORT`)
//! 4. Command-line flags

use anyhow::{Context, Result};
use cfscmd_core::{constants::DEFAULT_CI_LAB_PORT, Destination};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Default CI_LAB host
pub const DEFAULT_TARGET_IP: &str = "192.168.136.129";

/// Where to send commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// CI_LAB host name or IP
    pub host: String,
    /// CI_LAB UDP port
    pub port: u16,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_TARGET_IP.to_string(),
            port: DEFAULT_CI_LAB_PORT,
        }
    }
}

impl TargetConfig {
    /// Load defaults, then the config file (explicit path or `CFSCMD_CONFIG`),
    /// then environment overrides
    pub fn load(path: Option<&str>) -> Result<Self> {
        let path = path
            .map(str::to_string)
            .or_else(|| std::env::var("CFSCMD_CONFIG").ok());

        let mut config = match path {
            Some(p) => Self::from_file(&p)?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        debug!("Loaded target config from {}", path.display());
        Ok(config)
    }

    /// Parse a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("CFSCMD_TARGET_IP") {
            self.host = host;
        }
        if let Ok(port) = std::env::var("CFSCMD_CI_LAB_PORT") {
            match port.parse() {
                Ok(p) => self.port = p,
                Err(_) => warn!("Ignoring invalid CFSCMD_CI_LAB_PORT: {}", port),
            }
        }
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// Destination for the transport
    pub fn destination(&self) -> Destination {
        Destination::new(self.host.clone(), self.port)
    }
}

//! Server configuration.
//!
//! All tunables live in one immutable [`Config`] loaded at startup from a
//! YAML file and handed to every component. Nothing reads configuration
//! after startup.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level configuration, split into the listening side and the site side.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
}

/// Socket-level settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Per-connection read timeout, in seconds.
    pub read_timeout_secs: u64,
}

/// File-serving settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory beneath which every file target is resolved.
    pub root: PathBuf,
    /// Target of the canned 302 redirect.
    pub moved_to: String,
    /// Asset sent as the body of every 404 response.
    pub fallback_asset: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            read_timeout_secs: 2,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("webroot"),
            moved_to: "/index.html".to_string(),
            fallback_asset: PathBuf::from("webroot/imgs/error.jpg"),
        }
    }
}

impl Config {
    /// Loads configuration from the file named by `BEACON_CONFIG`, falling
    /// back to `beacon.yaml` in the working directory. A missing file yields
    /// the built-in defaults; a file that exists but does not parse is a
    /// startup error.
    pub fn load() -> anyhow::Result<Self> {
        let path =
            std::env::var("BEACON_CONFIG").unwrap_or_else(|_| "beacon.yaml".to_string());
        Self::from_file(&path)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let cfg = serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(cfg)
    }

    /// The `host:port` pair the listener binds.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.server.read_timeout_secs)
    }
}

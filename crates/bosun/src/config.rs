//! Host configuration loading
//!
//! # Hierarchy
//!
//! Configuration is loaded in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Project config: `bosun.toml` in the working directory
//! 3. CLI flags
//!
//! # Example Config
//!
//! ```toml
//! quiet = false
//! log_filter = "bosun=debug"
//! ```

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Host-level defaults for the demo binary
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    /// Suppress console output for every run
    pub quiet: bool,
    /// Default tracing filter used when `RUST_LOG` is unset
    pub log_filter: Option<String>,
}

impl HostConfig {
    /// Load from `path`, falling back to defaults when the file is absent.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::ConfigError;

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

/// Runtime configuration.
///
/// Lists the connectors and models to load at startup and where their DSL
/// files live. It is typically loaded from a YAML file.
///
/// # Fields
/// * `root` - Directory DSL paths are resolved against (defaults to `.`)
/// * `log_level` - Fallback tracing filter when `RUST_LOG` is unset (optional)
/// * `connectors` - Connector DSL files, each stored under its `id`
/// * `models` - Model DSL files, registered under `id` or the file name
///
/// # Example
/// ```yaml
/// root: ./dsl
/// log_level: debug
/// connectors:
///   - id: main
///     file: connectors/main.conn.yaml
///   - id: cache
///     file: connectors/cache.conn.yaml
/// models:
///   - file: models/user.mod.yaml
///   - id: pet
///     file: models/animal.mod.json
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(default)]
    pub connectors: Vec<ConnectorEntry>,
    #[serde(default)]
    pub models: Vec<ModelEntry>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            log_level: None,
            connectors: Vec::new(),
            models: Vec::new(),
        }
    }
}

/// A connector to load: DSL `file` stored under `id`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ConnectorEntry {
    pub id: String,
    pub file: String,
}

/// A model DSL to load. The class defaults to the file name up to its first `.`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ModelEntry {
    #[serde(default)]
    pub id: Option<String>,
    pub file: String,
}

/// Load a config from a YAML file.
///
/// A relative `root` is resolved against the directory holding the file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RuntimeConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let mut cfg: RuntimeConfig = serde_yaml::from_str(&content)?;

    if cfg.root.is_relative() {
        if let Some(dir) = path.parent() {
            cfg.root = dir.join(&cfg.root);
        }
    }
    Ok(cfg)
}

/// Load a config from a YAML file and validate it.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<RuntimeConfig, ConfigError> {
    let cfg = load_config(path)?;
    crate::config::validate_config(&cfg).map_err(ConfigError::Invalid)?;
    Ok(cfg)
}

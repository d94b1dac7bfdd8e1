// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::config::RuntimeConfig;
use crate::engine::Runtime;
use crate::errors::ConfigError;
use crate::traits::FsSource;

/// Runtime builder - creates a [`Runtime`] and loads everything a
/// [`RuntimeConfig`] lists into it.
///
/// # Examples
///
/// ```
/// use the_switchboard::config::{RuntimeBuilder, RuntimeConfig};
///
/// # #[tokio::main]
/// # async fn main() {
/// let runtime = RuntimeBuilder::from_config(&RuntimeConfig::default()).await.unwrap();
///
/// // Built-in processes are available even with an empty config
/// assert!(runtime.processes().contains("encoding.base64.encode"));
/// # }
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Build a runtime reading DSL from `cfg.root`, then load every connector
    /// (in order) followed by every model.
    ///
    /// The first failure stops the build; connectors opened before it are
    /// closed.
    pub async fn from_config(cfg: &RuntimeConfig) -> Result<Runtime, ConfigError> {
        let runtime = Runtime::new(Arc::new(FsSource::new(cfg.root.clone())));

        if let Err(e) = Self::load_all(&runtime, cfg).await {
            runtime.shutdown().await;
            return Err(e);
        }
        Ok(runtime)
    }

    async fn load_all(runtime: &Runtime, cfg: &RuntimeConfig) -> Result<(), ConfigError> {
        for entry in &cfg.connectors {
            runtime.load_connector(&entry.file, &entry.id).await?;
        }
        for entry in &cfg.models {
            runtime.load_model(&entry.file, entry.id.as_deref()).await?;
        }
        Ok(())
    }
}

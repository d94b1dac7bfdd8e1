// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;
use std::sync::Arc;

use super::registry::{ModelRegistry, PluginRegistry, ProcessRegistry};
use super::{Arg, Caller};
use crate::backends::connectors::ConnectorFactory;
use crate::backends::local::encoding;
use crate::backends::memory::{class_from_file, MemoryModel, ModelDsl};
use crate::errors::{ConnectorResult, ModelError, ModelResult, ProcessResult};
use crate::observability::messages::process::ProcessFailed;
use crate::observability::messages::registry::ModelLoaded;
use crate::observability::messages::StructuredLog;
use crate::traits::{Connector, DslSource, Model, Plugin};

/// Everything a process call can reach: the process, model and plugin
/// registries plus the connector factory and its table.
///
/// All registries live as long as the runtime and are shared with every
/// [`Caller`] it creates.
pub struct Runtime {
    processes: Arc<ProcessRegistry>,
    models: Arc<ModelRegistry>,
    plugins: Arc<PluginRegistry>,
    connectors: ConnectorFactory,
}

impl Runtime {
    /// A runtime reading DSL from `source`, with the built-in processes and
    /// connector types registered.
    pub fn new(source: Arc<dyn DslSource>) -> Self {
        let runtime = Self {
            processes: Arc::new(ProcessRegistry::new("process")),
            models: Arc::new(ModelRegistry::new("model")),
            plugins: Arc::new(PluginRegistry::new("plugin")),
            connectors: ConnectorFactory::new(source),
        };
        encoding::register(&runtime.processes);
        runtime
    }

    pub fn processes(&self) -> &ProcessRegistry {
        &self.processes
    }

    pub fn models(&self) -> &ModelRegistry {
        &self.models
    }

    pub fn plugins(&self) -> &PluginRegistry {
        &self.plugins
    }

    pub fn connectors(&self) -> &ConnectorFactory {
        &self.connectors
    }

    pub(crate) fn models_handle(&self) -> Arc<ModelRegistry> {
        Arc::clone(&self.models)
    }

    pub(crate) fn plugins_handle(&self) -> Arc<PluginRegistry> {
        Arc::clone(&self.plugins)
    }

    pub fn register_model(&self, class: &str, model: Arc<dyn Model>) -> bool {
        self.models.register(class, model)
    }

    pub fn register_plugin(&self, name: &str, plugin: Arc<dyn Plugin>) -> bool {
        self.plugins.register(name, plugin)
    }

    /// Load a connector DSL and store it under `id`.
    pub async fn load_connector(&self, file: &str, id: &str) -> ConnectorResult<Arc<dyn Connector>> {
        self.connectors.load(file, id).await
    }

    /// Read a model DSL and register it as an in-memory model.
    ///
    /// The class defaults to the file name up to its first `.`. Returns the
    /// class the model was registered under.
    pub async fn load_model(&self, file: &str, class: Option<&str>) -> ModelResult<String> {
        let data = self
            .connectors
            .source()
            .read(file)
            .await
            .map_err(|source| ModelError::Read {
                file: file.to_string(),
                source,
            })?;
        let dsl = ModelDsl::parse(file, &data)?;

        let class = class
            .map(str::to_lowercase)
            .unwrap_or_else(|| class_from_file(file));
        let rows = dsl.values.len();
        let model = MemoryModel::from_dsl(&class, dsl)?;
        self.models.register(&class, Arc::new(model));

        ModelLoaded {
            class: &class,
            file,
            rows,
        }
        .log();
        Ok(class)
    }

    /// Parse and bind `name` without running it.
    pub fn caller(&self, name: &str, args: Vec<Arg>) -> ProcessResult<Caller> {
        Caller::new(self, name, args).map_err(|e| {
            ProcessFailed {
                name,
                code: e.code(),
                error: &e,
            }
            .log();
            e
        })
    }

    /// Bind and run `name` with `args`.
    pub async fn call(&self, name: &str, args: Vec<Arg>) -> ProcessResult<Value> {
        self.caller(name, args)?.run().await
    }

    /// Close every live connector.
    pub async fn shutdown(&self) {
        self.connectors.table().close_all().await;
    }
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

use super::model_handlers::model_handler;
use super::registry::{ModelRegistry, PluginRegistry, ProcessFn};
use super::{plugin_handler, Arg, ProcessName, Runtime};
use crate::errors::{ModelError, ProcessError, ProcessResult};
use crate::observability::messages::process::{
    ProcessBound, ProcessCompleted, ProcessFailed, ProcessStarted,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{Model, Plugin};

pub const MODELS_DOMAIN: &str = "models";
pub const PLUGINS_DOMAIN: &str = "plugins";

pub type HandlerFuture<'a> = Pin<Box<dyn Future<Output = ProcessResult<Value>> + Send + 'a>>;

/// A built-in async handler. Receives the bound caller for its name parts,
/// arguments and registries.
pub type Handler = for<'a> fn(&'a Caller) -> HandlerFuture<'a>;

enum Binding {
    Handler(Handler),
    Process(Arc<ProcessFn>),
}

/// One bound process invocation.
///
/// Construction parses the name and binds the handler; nothing touches a
/// model, plugin or connector until [`Caller::run`]. A name with fewer than
/// three segments, a `models` method outside the handler table, or a domain
/// that is neither built in nor registered fails here.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use serde_json::json;
/// use the_switchboard::engine::{Arg, Caller, Runtime};
/// use the_switchboard::traits::FsSource;
///
/// # #[tokio::main]
/// # async fn main() {
/// let runtime = Runtime::new(Arc::new(FsSource::new(".")));
/// let caller = Caller::new(&runtime, "encoding.hex.encode", vec![Arg::from("hi")]).unwrap();
/// assert_eq!(caller.domain(), "encoding");
/// assert_eq!(caller.run().await.unwrap(), json!("6869"));
/// # }
/// ```
pub struct Caller {
    process: ProcessName,
    args: Vec<Arg>,
    binding: Binding,
    models: Arc<ModelRegistry>,
    plugins: Arc<PluginRegistry>,
}

impl Caller {
    pub fn new(runtime: &Runtime, name: &str, args: Vec<Arg>) -> ProcessResult<Self> {
        let process = ProcessName::parse(name)?;

        let binding = match process.domain.as_str() {
            MODELS_DOMAIN => model_handler(&process.method)
                .map(Binding::Handler)
                .ok_or_else(|| ProcessError::MethodNotFound {
                    name: name.to_string(),
                    method: process.method.clone(),
                })?,
            PLUGINS_DOMAIN => Binding::Handler(plugin_handler::exec),
            _ => runtime
                .processes()
                .lookup(&process.key())
                .map(Binding::Process)
                .ok_or_else(|| ProcessError::UnsupportedDomain {
                    name: name.to_string(),
                    domain: process.domain.clone(),
                })?,
        };

        ProcessBound {
            name,
            domain: &process.domain,
            class: &process.class,
            method: &process.method,
        }
        .log();

        Ok(Self {
            process,
            args,
            binding,
            models: runtime.models_handle(),
            plugins: runtime.plugins_handle(),
        })
    }

    /// Invoke the bound handler once and return its result unchanged.
    pub async fn run(&self) -> ProcessResult<Value> {
        let started = ProcessStarted {
            name: &self.process.raw,
            arg_count: self.args.len(),
        };
        started.log();
        let span = started.span("run");

        let clock = Instant::now();
        let result = match &self.binding {
            Binding::Handler(handler) => handler(self).instrument(span).await,
            Binding::Process(handler) => span.in_scope(|| handler(self)),
        };

        match &result {
            Ok(_) => ProcessCompleted {
                name: &self.process.raw,
                duration: clock.elapsed(),
            }
            .log(),
            Err(e) => ProcessFailed {
                name: &self.process.raw,
                code: e.code(),
                error: e,
            }
            .log(),
        }
        result
    }

    pub fn name(&self) -> &str {
        &self.process.raw
    }

    pub fn domain(&self) -> &str {
        &self.process.domain
    }

    pub fn class(&self) -> &str {
        &self.process.class
    }

    pub fn method(&self) -> &str {
        &self.process.method
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    /// Every argument in its JSON form.
    pub fn values(&self) -> Vec<Value> {
        self.args.iter().map(Arg::to_value).collect()
    }

    /// Fail unless at least `expected` arguments were given.
    pub fn validate_arg_nums(&self, expected: usize) -> ProcessResult<()> {
        if self.args.len() < expected {
            return Err(ProcessError::MissingArguments {
                class: self.process.class.clone(),
                method: self.process.method.clone(),
                expected,
                given: self.args.len(),
            });
        }
        Ok(())
    }

    pub fn arg(&self, index: usize) -> ProcessResult<&Arg> {
        self.validate_arg_nums(index + 1)?;
        Ok(&self.args[index])
    }

    pub fn invalid_arg(&self, index: usize, reason: impl Into<String>) -> ProcessError {
        ProcessError::InvalidArgument {
            class: self.process.class.clone(),
            method: self.process.method.clone(),
            index,
            reason: reason.into(),
        }
    }

    /// The model named by the class part.
    pub fn model(&self) -> ProcessResult<Arc<dyn Model>> {
        self.models
            .lookup(&self.process.class)
            .ok_or_else(|| ProcessError::ModelNotFound(self.process.class.clone()))
    }

    /// The plugin named by the class part.
    pub fn plugin(&self) -> ProcessResult<Arc<dyn Plugin>> {
        self.plugins
            .lookup(&self.process.class)
            .ok_or_else(|| ProcessError::PluginNotFound(self.process.class.clone()))
    }

    pub fn model_error(&self, source: ModelError) -> ProcessError {
        ProcessError::Model {
            class: self.process.class.clone(),
            source,
        }
    }

    pub fn execution_error(&self, reason: impl Into<String>) -> ProcessError {
        ProcessError::Execution {
            name: self.process.raw.clone(),
            reason: reason.into(),
        }
    }
}

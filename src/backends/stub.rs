// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use serde_json::{json, Value};
use std::any::Any;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::backends::connectors::options::ConnectorDsl;
use crate::errors::{ConnectorError, ConnectorResult, PluginError};
use crate::traits::{Connector, ConnectorKind, Plugin};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StubOptions {
    dsn: String,
    fail: bool,
}

/// A connector that never opens a network connection.
///
/// `register` reads `options.dsn` verbatim and fails with a connection error
/// when `options.fail` is true.
pub struct StubConnector {
    id: String,
    kind: ConnectorKind,
    dsn: String,
    closed: AtomicBool,
}

impl StubConnector {
    pub fn new(kind: ConnectorKind) -> Self {
        Self {
            id: String::new(),
            kind,
            dsn: String::new(),
            closed: AtomicBool::new(false),
        }
    }

    /// An already registered connector.
    pub fn live(id: &str, kind: ConnectorKind, dsn: &str) -> Self {
        Self {
            id: id.to_string(),
            kind,
            dsn: dsn.to_string(),
            closed: AtomicBool::new(false),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Connector for StubConnector {
    async fn register(&mut self, file: &str, id: &str, dsl: &[u8]) -> ConnectorResult<()> {
        let dsl: ConnectorDsl<StubOptions> = ConnectorDsl::parse(file, dsl)?;
        if dsl.options.fail {
            return Err(ConnectorError::connection(id, "simulated connection failure"));
        }
        self.id = id.to_string();
        self.dsn = dsl.options.dsn;
        Ok(())
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> ConnectorKind {
        self.kind
    }

    fn dsn(&self) -> &str {
        &self.dsn
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A plugin that returns `{"method": ..., "args": [...]}` and counts calls.
pub struct EchoPlugin {
    name: String,
    calls: AtomicUsize,
}

impl EchoPlugin {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Plugin for EchoPlugin {
    async fn exec(&self, method: &str, args: &[Value]) -> Result<Value, PluginError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(json!({ "method": method, "args": args }))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A plugin that always fails with the configured error.
pub struct FailingPlugin {
    name: String,
    code: Option<u16>,
}

impl FailingPlugin {
    /// Fails in transport.
    pub fn transport(name: &str) -> Self {
        Self {
            name: name.to_string(),
            code: None,
        }
    }

    /// Fails with an application error carrying `code`.
    pub fn application(name: &str, code: u16) -> Self {
        Self {
            name: name.to_string(),
            code: Some(code),
        }
    }
}

#[async_trait::async_trait]
impl Plugin for FailingPlugin {
    async fn exec(&self, method: &str, _args: &[Value]) -> Result<Value, PluginError> {
        match self.code {
            None => Err(PluginError::Transport("connection reset by peer".to_string())),
            Some(code) => Err(PluginError::Application {
                code,
                message: format!("simulated failure in {}", method),
            }),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

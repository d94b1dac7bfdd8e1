// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Key-value store connector backed by a redis `ConnectionManager`.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use serde::Deserialize;
use serde_json::Value;
use std::any::Any;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use super::options::{
    connect_within, query_string, resolve_hosts, resolve_timeout, ConnectorDsl, Host, HostDsl,
    HostRules,
};
use crate::config::consts::REDIS_DEFAULT_PORT;
use crate::errors::ConnectorResult;
use crate::observability::messages::connector::ConnectorClosed;
use crate::observability::messages::StructuredLog;
use crate::traits::{Connector, ConnectorKind};
use crate::utils::env_string;

const DEFAULT_DB: &str = "0";

const HOST_RULES: HostRules = HostRules {
    default_port: REDIS_DEFAULT_PORT,
    require_credentials: false,
};

/// `options` block of a key-value DSL.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct KeyValueOptions {
    /// Logical database index; a number or a string, `0` when absent.
    pub db: Option<Value>,
    pub timeout: Option<Value>,
    pub hosts: Vec<HostDsl>,
    /// Appended to the URL as `?key=value&...` in key order.
    pub params: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyValueSettings {
    pub db: String,
    pub timeout: Duration,
    pub host: Host,
    pub dsn: String,
}

impl KeyValueSettings {
    /// Validate `options` and assemble `redis://[user][:pass@]host:port/db[?params]`.
    /// Credentials are optional; only the first host is used.
    pub fn resolve(id: &str, options: &KeyValueOptions) -> ConnectorResult<Self> {
        let db = options
            .db
            .as_ref()
            .and_then(crate::utils::value::to_text)
            .map(|db| env_string(&db))
            .filter(|db| !db.is_empty())
            .unwrap_or_else(|| DEFAULT_DB.to_string());
        let timeout = resolve_timeout(options.timeout.as_ref());
        let mut hosts = resolve_hosts(id, &options.hosts, HOST_RULES)?;
        let host = hosts.remove(0);
        let mut dsn = format!("redis://{}/{}", host.authority(), db);
        let params = query_string(&options.params);
        if !params.is_empty() {
            dsn.push('?');
            dsn.push_str(&params);
        }

        Ok(Self {
            db,
            timeout,
            host,
            dsn,
        })
    }
}

/// A live redis connection, multiplexed and auto-reconnecting.
#[derive(Default)]
pub struct KeyValueConnector {
    id: String,
    file: String,
    name: String,
    dsn: String,
    settings: Option<KeyValueSettings>,
    manager: RwLock<Option<ConnectionManager>>,
}

impl KeyValueConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle to the shared connection; `None` before register or after close.
    pub fn connection(&self) -> Option<ConnectionManager> {
        self.manager
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn settings(&self) -> Option<&KeyValueSettings> {
        self.settings.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file(&self) -> &str {
        &self.file
    }
}

#[async_trait]
impl Connector for KeyValueConnector {
    async fn register(&mut self, file: &str, id: &str, dsl: &[u8]) -> ConnectorResult<()> {
        let dsl: ConnectorDsl<KeyValueOptions> = ConnectorDsl::parse(file, dsl)?;
        let settings = KeyValueSettings::resolve(id, &dsl.options)?;

        let manager = connect_within(id, settings.timeout, async {
            let client = redis::Client::open(settings.dsn.as_str())?;
            let mut manager = client.get_connection_manager().await?;
            redis::cmd("PING")
                .query_async::<String>(&mut manager)
                .await?;
            Ok::<_, redis::RedisError>(manager)
        })
        .await?;

        self.id = id.to_string();
        self.file = file.to_string();
        self.name = dsl.name;
        self.dsn = settings.dsn.clone();
        self.settings = Some(settings);
        *self.manager.get_mut().unwrap_or_else(PoisonError::into_inner) = Some(manager);
        Ok(())
    }

    async fn close(&self) {
        let released = self
            .manager
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if released.is_some() {
            ConnectorClosed {
                id: &self.id,
                kind: "key-value-store",
            }
            .log();
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> ConnectorKind {
        ConnectorKind::KeyValue
    }

    fn dsn(&self) -> &str {
        &self.dsn
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options(value: Value) -> KeyValueOptions {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_dsn_table_driven() {
        let cases = vec![
            (
                "defaults",
                json!({"hosts": [{"host": "127.0.0.1"}]}),
                "redis://127.0.0.1:6379/0",
            ),
            (
                "password only",
                json!({"db": 2, "hosts": [{"host": "cache", "pass": "pw"}]}),
                "redis://:pw@cache:6379/2",
            ),
            (
                "user and password",
                json!({"db": "3", "hosts": [{"host": "cache", "port": "6380", "user": "u", "pass": "p"}]}),
                "redis://u:p@cache:6380/3",
            ),
            (
                "params in key order",
                json!({"hosts": [{"host": "cache"}], "params": {"protocol": "resp3", "insecure": true}}),
                "redis://cache:6379/0?insecure=true&protocol=resp3",
            ),
        ];

        for (name, value, expected) in cases {
            let settings = KeyValueSettings::resolve("cache", &options(value))
                .unwrap_or_else(|e| panic!("{}: {}", name, e));
            assert_eq!(settings.dsn, expected, "{}", name);
        }
    }

    #[test]
    fn test_hosts_required() {
        let err = KeyValueSettings::resolve("cache", &options(json!({"db": 1}))).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("options.hosts is required"));
    }

    #[tokio::test]
    async fn test_close_before_register_is_noop() {
        let connector = KeyValueConnector::new();
        connector.close().await;
        assert!(connector.connection().is_none());
        assert_eq!(connector.kind(), ConnectorKind::KeyValue);
    }
}

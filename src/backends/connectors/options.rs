// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! DSL shapes and validation shared by every connector driver.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use crate::config::consts::DEFAULT_CONNECT_TIMEOUT_SECS;
use crate::errors::{ConnectorError, ConnectorResult};
use crate::utils::value::to_text;
use crate::utils::{env_int, env_string, parse_dsl};

/// The only part of a connector DSL the factory reads before picking a driver.
#[derive(Debug, Deserialize)]
pub struct ConnectorHead {
    #[serde(rename = "type")]
    pub kind: String,
}

/// A full connector document with driver-specific `options`.
///
/// ```yaml
/// name: Main store
/// type: document-store
/// options:
///   db: app
///   timeout: 5
///   hosts:
///     - host: $ENV.MONGO_HOST
///       user: root
///       pass: $ENV.MONGO_PASS
///   params:
///     authSource: admin
/// ```
#[derive(Debug, Deserialize)]
pub struct ConnectorDsl<O> {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub options: O,
}

impl<O: serde::de::DeserializeOwned + Default> ConnectorDsl<O> {
    pub fn parse(file: &str, data: &[u8]) -> ConnectorResult<Self> {
        parse_dsl(file, data).map_err(|reason| ConnectorError::Parse {
            file: file.to_string(),
            reason,
        })
    }
}

/// One host entry as written in the DSL. `port` may be a number or a string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HostDsl {
    pub host: String,
    pub port: Option<Value>,
    pub user: String,
    #[serde(alias = "password")]
    pub pass: String,
}

/// A host after environment substitution and defaulting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    pub host: String,
    pub port: String,
    pub user: String,
    pub pass: String,
}

impl Host {
    /// `user:pass@host:port`, with the credential part omitted when empty.
    pub fn authority(&self) -> String {
        let credentials = match (self.user.is_empty(), self.pass.is_empty()) {
            (true, true) => String::new(),
            (false, true) => format!("{}@", self.user),
            (true, false) => format!(":{}@", self.pass),
            (false, false) => format!("{}:{}@", self.user, self.pass),
        };
        format!("{}{}:{}", credentials, self.host, self.port)
    }
}

/// Per-driver rules for validating host entries.
#[derive(Debug, Clone, Copy)]
pub struct HostRules {
    pub default_port: &'static str,
    pub require_credentials: bool,
}

/// Substitute, default and validate the host list.
///
/// Fails with a configuration error naming the first missing field, e.g.
/// `options.hosts is required` or `hosts.1.user is required`.
pub fn resolve_hosts(id: &str, hosts: &[HostDsl], rules: HostRules) -> ConnectorResult<Vec<Host>> {
    if hosts.is_empty() {
        return Err(ConnectorError::config(id, "options.hosts is required"));
    }

    hosts
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            let port = raw
                .port
                .as_ref()
                .and_then(to_text)
                .map(|p| env_string(&p))
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| rules.default_port.to_string());

            let host = Host {
                host: env_string(&raw.host),
                port,
                user: env_string(&raw.user),
                pass: env_string(&raw.pass),
            };

            if host.host.is_empty() {
                return Err(ConnectorError::config(id, format!("hosts.{}.host is required", i)));
            }
            if rules.require_credentials && host.user.is_empty() {
                return Err(ConnectorError::config(id, format!("hosts.{}.user is required", i)));
            }
            if rules.require_credentials && host.pass.is_empty() {
                return Err(ConnectorError::config(id, format!("hosts.{}.pass is required", i)));
            }
            Ok(host)
        })
        .collect()
}

/// Require a non-empty database name after substitution.
pub fn resolve_db(id: &str, db: &str) -> ConnectorResult<String> {
    let db = env_string(db);
    if db.is_empty() {
        return Err(ConnectorError::config(id, "options.db is required"));
    }
    Ok(db)
}

pub fn resolve_timeout(timeout: Option<&Value>) -> Duration {
    Duration::from_secs(env_int(timeout, DEFAULT_CONNECT_TIMEOUT_SECS))
}

/// `key=value` pairs joined with `&`, in key order, values substituted.
pub fn query_string(params: &BTreeMap<String, Value>) -> String {
    params
        .iter()
        .map(|(name, value)| {
            let value = match value {
                Value::String(s) => env_string(s),
                other => to_text(other).unwrap_or_else(|| other.to_string()),
            };
            format!("{}={}", name, value)
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Run a connect future under the connector timeout.
pub async fn connect_within<T, E, F>(id: &str, timeout: Duration, connect: F) -> ConnectorResult<T>
where
    E: Display,
    F: Future<Output = Result<T, E>>,
{
    match tokio::time::timeout(timeout, connect).await {
        Ok(Ok(handle)) => Ok(handle),
        Ok(Err(e)) => Err(ConnectorError::connection(id, e)),
        Err(_) => Err(ConnectorError::Timeout {
            id: id.to_string(),
            timeout,
        }),
    }
}

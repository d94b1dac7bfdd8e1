// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for connector loading, registration and lookup.

use std::time::Duration;
use thiserror::Error;

use super::ErrorKind;

/// Every way a connector can fail between reading its DSL and opening its
/// connection, plus lookup failures against the connector table.
#[derive(Error, Debug)]
pub enum ConnectorError {
    /// The DSL source could not be read.
    #[error("failed to read connector DSL '{file}': {source}")]
    Read {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// The DSL is not well-formed for its format.
    #[error("failed to parse connector DSL '{file}': {reason}")]
    Parse { file: String, reason: String },

    /// The `type` discriminator has no registered driver.
    #[error("connector type '{0}' is not supported")]
    UnsupportedType(String),

    /// A required option is missing or invalid.
    #[error("connector '{id}': {reason}")]
    Config { id: String, reason: String },

    /// The backend refused or failed the connection.
    #[error("connector '{id}': connection failed: {reason}")]
    Connection { id: String, reason: String },

    /// The backend did not answer within the configured timeout.
    #[error("connector '{id}': connection timed out after {timeout:?}")]
    Timeout { id: String, timeout: Duration },

    /// No connector is registered under the id.
    #[error("connector '{0}' is not loaded")]
    NotFound(String),
}

impl ConnectorError {
    pub fn config(id: &str, reason: impl Into<String>) -> Self {
        ConnectorError::Config {
            id: id.to_string(),
            reason: reason.into(),
        }
    }

    pub fn connection(id: &str, reason: impl ToString) -> Self {
        ConnectorError::Connection {
            id: id.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ConnectorError::Parse { .. }
            | ConnectorError::UnsupportedType(_)
            | ConnectorError::Config { .. } => ErrorKind::BadRequest,
            ConnectorError::NotFound(_) => ErrorKind::NotFound,
            ConnectorError::Read { source, .. }
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                ErrorKind::NotFound
            }
            ConnectorError::Read { .. }
            | ConnectorError::Connection { .. }
            | ConnectorError::Timeout { .. } => ErrorKind::Internal,
        }
    }

    /// True when the failure happened before any network traffic.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ConnectorError::Parse { .. }
                | ConnectorError::UnsupportedType(_)
                | ConnectorError::Config { .. }
        )
    }
}

pub type ConnectorResult<T> = Result<T, ConnectorError>;

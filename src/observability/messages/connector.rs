// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for connector lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Loading connector DSL and registering drivers
//! * Replacing an id that already had a live connector
//! * Closing native connection handles

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// A connector DSL is being loaded.
///
/// # Log Level
/// `debug!` - Lifecycle detail
pub struct ConnectorLoading<'a> {
    pub id: &'a str,
    pub file: &'a str,
}

impl Display for ConnectorLoading<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Loading connector '{}' from '{}'", self.id, self.file)
    }
}

impl StructuredLog for ConnectorLoading<'_> {
    fn log(&self) {
        tracing::debug!(connector_id = self.id, file = self.file, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "connector_load",
            span_name = name,
            connector_id = self.id,
            file = self.file,
        )
    }
}

/// A connector opened its connection and was stored in the table.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_switchboard::observability::messages::connector::ConnectorRegistered;
/// use std::time::Duration;
///
/// let msg = ConnectorRegistered {
///     id: "main",
///     kind: "database",
///     duration: Duration::from_millis(12),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ConnectorRegistered<'a> {
    pub id: &'a str,
    pub kind: &'a str,
    pub duration: Duration,
}

impl Display for ConnectorRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Connector '{}' ({}) connected in {:?}",
            self.id, self.kind, self.duration
        )
    }
}

impl StructuredLog for ConnectorRegistered<'_> {
    fn log(&self) {
        tracing::info!(
            connector_id = self.id,
            kind = self.kind,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "connector_registered",
            span_name = name,
            connector_id = self.id,
            kind = self.kind,
        )
    }
}

/// A newly registered connector displaced an existing one under the same id.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConnectorReplaced<'a> {
    pub id: &'a str,
    pub previous_kind: &'a str,
}

impl Display for ConnectorReplaced<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Connector '{}' replaced; closing previous {} connection",
            self.id, self.previous_kind
        )
    }
}

impl StructuredLog for ConnectorReplaced<'_> {
    fn log(&self) {
        tracing::info!(
            connector_id = self.id,
            previous_kind = self.previous_kind,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("connector_replaced", span_name = name, connector_id = self.id)
    }
}

/// Loading a connector failed; the table was left untouched.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ConnectorLoadFailed<'a> {
    pub id: &'a str,
    pub file: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ConnectorLoadFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Connector '{}' from '{}' failed to load: {}",
            self.id, self.file, self.error
        )
    }
}

impl StructuredLog for ConnectorLoadFailed<'_> {
    fn log(&self) {
        tracing::error!(connector_id = self.id, file = self.file, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "connector_load_failed",
            span_name = name,
            connector_id = self.id,
            file = self.file,
        )
    }
}

/// A connector released its native handle.
///
/// # Log Level
/// `debug!` - Lifecycle detail
pub struct ConnectorClosed<'a> {
    pub id: &'a str,
    pub kind: &'a str,
}

impl Display for ConnectorClosed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Connector '{}' ({}) closed", self.id, self.kind)
    }
}

impl StructuredLog for ConnectorClosed<'_> {
    fn log(&self) {
        tracing::debug!(connector_id = self.id, kind = self.kind, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("connector_closed", span_name = name, connector_id = self.id)
    }
}

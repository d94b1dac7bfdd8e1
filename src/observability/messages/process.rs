// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for process binding and invocation.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// A process name was parsed and bound to a handler.
///
/// # Log Level
/// `debug!` - Dispatch detail
///
/// # Example
/// ```
/// use the_switchboard::observability::messages::process::ProcessBound;
///
/// let msg = ProcessBound {
///     name: "models.user.Find",
///     domain: "models",
///     class: "user",
///     method: "find",
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ProcessBound<'a> {
    pub name: &'a str,
    pub domain: &'a str,
    pub class: &'a str,
    pub method: &'a str,
}

impl Display for ProcessBound<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Process '{}' bound: domain={}, class={}, method={}",
            self.name, self.domain, self.class, self.method
        )
    }
}

impl StructuredLog for ProcessBound<'_> {
    fn log(&self) {
        tracing::debug!(
            process = self.name,
            domain = self.domain,
            class = self.class,
            method = self.method,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "process_bound",
            span_name = name,
            process = self.name,
            domain = self.domain,
        )
    }
}

/// A bound process is about to run.
///
/// # Log Level
/// `debug!` - Dispatch detail
pub struct ProcessStarted<'a> {
    pub name: &'a str,
    pub arg_count: usize,
}

impl Display for ProcessStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Process '{}' started with {} argument(s)",
            self.name, self.arg_count
        )
    }
}

impl StructuredLog for ProcessStarted<'_> {
    fn log(&self) {
        tracing::debug!(process = self.name, arg_count = self.arg_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "process",
            span_name = name,
            process = self.name,
            arg_count = self.arg_count,
        )
    }
}

/// A process returned a result.
///
/// # Log Level
/// `debug!` - Dispatch detail
pub struct ProcessCompleted<'a> {
    pub name: &'a str,
    pub duration: Duration,
}

impl Display for ProcessCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Process '{}' completed in {:?}", self.name, self.duration)
    }
}

impl StructuredLog for ProcessCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            process = self.name,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "process_completed",
            span_name = name,
            process = self.name,
            duration = ?self.duration,
        )
    }
}

/// A process failed while binding or running.
///
/// # Log Level
/// `warn!` for caller mistakes (4xx), `error!` for backend failures (5xx)
///
/// # Example
/// ```
/// use the_switchboard::observability::messages::process::ProcessFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "boom");
/// let msg = ProcessFailed {
///     name: "plugins.user.login",
///     code: 500,
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ProcessFailed<'a> {
    pub name: &'a str,
    pub code: u16,
    pub error: &'a dyn std::error::Error,
}

impl Display for ProcessFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Process '{}' failed ({}): {}",
            self.name, self.code, self.error
        )
    }
}

impl StructuredLog for ProcessFailed<'_> {
    fn log(&self) {
        if self.code >= 500 {
            tracing::error!(process = self.name, code = self.code, "{}", self);
        } else {
            tracing::warn!(process = self.name, code = self.code, "{}", self);
        }
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "process_failed",
            span_name = name,
            process = self.name,
            code = self.code,
        )
    }
}

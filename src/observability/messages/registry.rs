// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for registry writes.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// An entry was written to one of the name-keyed registries.
///
/// # Log Level
/// `debug!` for a fresh entry, `warn!` when an existing entry was overwritten
///
/// # Example
/// ```
/// use the_switchboard::observability::messages::registry::EntryRegistered;
///
/// let msg = EntryRegistered {
///     registry: "process",
///     name: "encoding.base64.encode",
///     overwritten: false,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct EntryRegistered<'a> {
    pub registry: &'a str,
    pub name: &'a str,
    pub overwritten: bool,
}

impl Display for EntryRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.overwritten {
            write!(
                f,
                "{} registry: '{}' overwritten by a new registration",
                self.registry, self.name
            )
        } else {
            write!(f, "{} registry: '{}' registered", self.registry, self.name)
        }
    }
}

impl StructuredLog for EntryRegistered<'_> {
    fn log(&self) {
        if self.overwritten {
            tracing::warn!(registry = self.registry, name = self.name, "{}", self);
        } else {
            tracing::debug!(registry = self.registry, name = self.name, "{}", self);
        }
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "registry_write",
            span_name = name,
            registry = self.registry,
            name = self.name,
        )
    }
}

/// A model DSL was loaded into the model registry.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ModelLoaded<'a> {
    pub class: &'a str,
    pub file: &'a str,
    pub rows: usize,
}

impl Display for ModelLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Model '{}' loaded from '{}' with {} seed row(s)",
            self.class, self.file, self.rows
        )
    }
}

impl StructuredLog for ModelLoaded<'_> {
    fn log(&self) {
        tracing::info!(model = self.class, file = self.file, rows = self.rows, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("model_loaded", span_name = name, model = self.class)
    }
}

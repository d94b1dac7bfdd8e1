// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit it at its documented level with the same data
//! attached as tracing fields.
//!
//! # Organization
//!
//! * `process` - process binding and invocation events
//! * `connector` - connector loading, replacement and disposal
//! * `registry` - registrations into the process, model and plugin registries
//!
//! # Usage Pattern
//!
//! ```rust
//! use the_switchboard::observability::messages::process::ProcessStarted;
//! use the_switchboard::observability::messages::StructuredLog;
//!
//! let msg = ProcessStarted {
//!     name: "models.user.find",
//!     arg_count: 2,
//! };
//!
//! msg.log();
//! ```

use tracing::Span;

pub mod connector;
pub mod process;
pub mod registry;

/// Emit a message as a tracing event, or open a span carrying its fields.
pub trait StructuredLog {
    fn log(&self);

    fn span(&self, name: &str) -> Span;
}

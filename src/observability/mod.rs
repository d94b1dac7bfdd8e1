// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Log lines are built from message structs rather than inline strings so that
//! every event for the same situation reads the same way and carries the same
//! tracing fields.
//!
//! # Usage
//!
//! ```rust
//! use the_switchboard::observability::messages::connector::ConnectorClosed;
//! use the_switchboard::observability::messages::StructuredLog;
//!
//! let msg = ConnectorClosed { id: "main", kind: "database" };
//! msg.log();
//! ```

pub mod messages;

use tracing_subscriber::EnvFilter;

use crate::config::consts::DEFAULT_LOG_LEVEL;

/// Install a `fmt` subscriber filtered by `RUST_LOG`, falling back to `level`.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_tracing(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or(DEFAULT_LOG_LEVEL)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

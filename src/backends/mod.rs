// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Backend implementations behind the runtime's traits.
//!
//! # Available Backends
//!
//! ## Connectors
//! Storage drivers built from connector DSL files:
//! - **Database**: MySQL, PostgreSQL and SQLite pools through `sqlx`
//! - **Key-value store**: Redis connection managers
//! - **Document store**: MongoDB clients
//!
//! ## Memory
//! In-process [`Model`](crate::traits::Model) implementation loaded from model
//! DSL files. Backs `models.<class>.<method>` processes without a database.
//!
//! ## Local
//! Built-in processes registered into every runtime (`encoding.*`).
//!
//! ## Stub Backend (Test-Only)
//! Connectors and plugins with scripted behavior, only compiled for tests:
//! - **StubConnector**: Registers from a DSL, optionally failing on demand
//! - **EchoPlugin**: Returns the method and arguments it received
//! - **FailingPlugin**: Fails with a transport or application error
//!
//! # Examples
//!
//! ```rust
//! use the_switchboard::backends::memory::MemoryModel;
//!
//! let users = MemoryModel::new("user", "id", false);
//! assert_eq!(users.primary(), "id");
//! assert!(users.is_empty());
//! ```

pub mod connectors;
pub mod local;
pub mod memory;
#[cfg(test)]
pub mod stub;

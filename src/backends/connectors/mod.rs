// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Storage connectors.
//!
//! A connector DSL names its driver with `type` and carries driver-specific
//! `options`. The [`ConnectorFactory`] reads the DSL, picks a driver from its
//! discriminator registry, lets the driver validate its options and open the
//! connection, then stores the live driver in a [`ConnectorTable`].
//!
//! ```text
//! DSL file → ConnectorHead.type → constructor → Connector::register → ConnectorTable
//! ```
//!
//! | `type`                                       | driver                   |
//! |----------------------------------------------|--------------------------|
//! | `database`, `mysql`, `postgres`, `sqlite`    | [`DatabaseConnector`]    |
//! | `key-value-store`, `redis`                   | [`KeyValueConnector`]    |
//! | `document-store`, `mongo`, `mongodb`         | [`DocumentStoreConnector`] |

pub mod database;
pub mod document_store;
pub mod factory;
pub mod key_value;
pub mod options;
pub mod table;

pub use database::{DatabaseConnector, SqlDriver};
pub use document_store::DocumentStoreConnector;
pub use factory::{ConnectorConstructor, ConnectorFactory};
pub use key_value::KeyValueConnector;
pub use table::ConnectorTable;

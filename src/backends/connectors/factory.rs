// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Instant;
use tracing::Instrument;

use super::options::ConnectorHead;
use super::{ConnectorTable, DatabaseConnector, DocumentStoreConnector, KeyValueConnector};
use crate::errors::{ConnectorError, ConnectorResult};
use crate::observability::messages::connector::{
    ConnectorLoadFailed, ConnectorLoading, ConnectorRegistered, ConnectorReplaced,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{Connector, DslSource};
use crate::utils::parse_dsl;

/// Builds an empty, unregistered driver. Receives the DSL `type` value so one
/// driver can serve several discriminators.
pub type ConnectorConstructor = fn(&str) -> Box<dyn Connector>;

fn database(discriminator: &str) -> Box<dyn Connector> {
    Box::new(DatabaseConnector::new(discriminator))
}

fn key_value(_: &str) -> Box<dyn Connector> {
    Box::new(KeyValueConnector::new())
}

fn document_store(_: &str) -> Box<dyn Connector> {
    Box::new(DocumentStoreConnector::new())
}

const DEFAULT_TYPES: &[(&str, ConnectorConstructor)] = &[
    ("database", database),
    ("mysql", database),
    ("postgres", database),
    ("sqlite", database),
    ("sqlite3", database),
    ("key-value-store", key_value),
    ("redis", key_value),
    ("document-store", document_store),
    ("mongo", document_store),
    ("mongodb", document_store),
];

/// Turns connector DSL files into live connectors stored in a [`ConnectorTable`].
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use the_switchboard::backends::connectors::ConnectorFactory;
/// use the_switchboard::traits::FsSource;
///
/// # async fn demo() -> Result<(), the_switchboard::errors::ConnectorError> {
/// let factory = ConnectorFactory::new(Arc::new(FsSource::new("./dsl")));
/// factory.load("connectors/main.conn.yaml", "main").await?;
///
/// let main = factory.select("main")?;
/// println!("{} -> {}", main.id(), main.kind());
/// # Ok(())
/// # }
/// ```
pub struct ConnectorFactory {
    source: Arc<dyn DslSource>,
    types: RwLock<HashMap<String, ConnectorConstructor>>,
    table: ConnectorTable,
}

impl ConnectorFactory {
    /// A factory that knows every built-in discriminator.
    pub fn new(source: Arc<dyn DslSource>) -> Self {
        let factory = Self::empty(source);
        for (discriminator, constructor) in DEFAULT_TYPES {
            factory.register_type(discriminator, *constructor);
        }
        factory
    }

    /// A factory with no known discriminators.
    pub fn empty(source: Arc<dyn DslSource>) -> Self {
        Self {
            source,
            types: RwLock::new(HashMap::new()),
            table: ConnectorTable::new(),
        }
    }

    /// Map a `type` discriminator to a driver constructor. Last write wins.
    pub fn register_type(&self, discriminator: &str, constructor: ConnectorConstructor) {
        self.types
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(discriminator.trim().to_lowercase(), constructor);
    }

    /// Known discriminators, sorted.
    pub fn supported_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self
            .types
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        types.sort();
        types
    }

    pub fn table(&self) -> &ConnectorTable {
        &self.table
    }

    pub fn source(&self) -> &Arc<dyn DslSource> {
        &self.source
    }

    /// Read `file`, build the driver named by its `type`, register it and store
    /// it under `id`. A connector previously stored under `id` is closed.
    ///
    /// On failure the table is left as it was.
    pub async fn load(&self, file: &str, id: &str) -> ConnectorResult<Arc<dyn Connector>> {
        let loading = ConnectorLoading { id, file };
        loading.log();
        let span = loading.span("load");

        async {
            let started = Instant::now();
            let connector = match self.build(file, id).await {
                Ok(connector) => connector,
                Err(e) => {
                    ConnectorLoadFailed {
                        id,
                        file,
                        error: &e,
                    }
                    .log();
                    return Err(e);
                }
            };

            let kind = connector.kind().to_string();
            if let Some(previous) = self.table.insert(id, connector.clone()) {
                ConnectorReplaced {
                    id,
                    previous_kind: &previous.kind().to_string(),
                }
                .log();
                previous.close().await;
            }

            ConnectorRegistered {
                id,
                kind: &kind,
                duration: started.elapsed(),
            }
            .log();

            Ok(connector)
        }
        .instrument(span)
        .await
    }

    async fn build(&self, file: &str, id: &str) -> ConnectorResult<Arc<dyn Connector>> {
        let data = self
            .source
            .read(file)
            .await
            .map_err(|source| ConnectorError::Read {
                file: file.to_string(),
                source,
            })?;

        let head: ConnectorHead = parse_dsl(file, &data).map_err(|reason| ConnectorError::Parse {
            file: file.to_string(),
            reason,
        })?;

        let discriminator = head.kind.trim().to_lowercase();
        let constructor = self
            .types
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&discriminator)
            .copied()
            .ok_or_else(|| ConnectorError::UnsupportedType(head.kind.clone()))?;

        let mut driver = constructor(&discriminator);
        driver.register(file, id, &data).await?;
        Ok(Arc::from(driver))
    }

    /// The live connector stored under `id`.
    pub fn select(&self, id: &str) -> ConnectorResult<Arc<dyn Connector>> {
        self.table.select(id)
    }
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::errors::{ConnectorError, ConnectorResult};
use crate::traits::Connector;

/// Live connectors keyed by id.
///
/// Writes are last-write-wins. [`ConnectorTable::insert`] hands back the
/// displaced connector so the caller can close it; the table never closes
/// anything on its own.
#[derive(Default)]
pub struct ConnectorTable {
    entries: RwLock<HashMap<String, Arc<dyn Connector>>>,
}

impl ConnectorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `connector` under `id`, returning the entry it replaced.
    pub fn insert(&self, id: &str, connector: Arc<dyn Connector>) -> Option<Arc<dyn Connector>> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.to_string(), connector)
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn Connector>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// Like [`ConnectorTable::get`] but with an explicit not-found error.
    pub fn select(&self, id: &str) -> ConnectorResult<Arc<dyn Connector>> {
        self.get(id)
            .ok_or_else(|| ConnectorError::NotFound(id.to_string()))
    }

    pub fn remove(&self, id: &str) -> Option<Arc<dyn Connector>> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(id)
    }

    /// Registered ids, sorted.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drain the table and close every connector.
    pub async fn close_all(&self) {
        let drained: Vec<Arc<dyn Connector>> = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .drain()
            .map(|(_, connector)| connector)
            .collect();

        for connector in drained {
            connector.close().await;
        }
    }
}

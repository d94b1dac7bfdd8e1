// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Name-keyed, process-lifetime registries.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use super::Caller;
use crate::errors::ProcessResult;
use crate::observability::messages::registry::EntryRegistered;
use crate::observability::messages::StructuredLog;
use crate::traits::{Model, Plugin};

/// A handler stored in the [`ProcessRegistry`].
pub type ProcessFn = dyn Fn(&Caller) -> ProcessResult<Value> + Send + Sync;

/// Overwrite-on-conflict map from lowercased names to shared entries.
///
/// There is no removal: an entry lives until it is overwritten or the
/// registry is dropped.
pub struct Registry<T: ?Sized> {
    label: &'static str,
    entries: RwLock<HashMap<String, Arc<T>>>,
}

pub type ProcessRegistry = Registry<ProcessFn>;
pub type ModelRegistry = Registry<dyn Model>;
pub type PluginRegistry = Registry<dyn Plugin>;

impl<T: ?Sized> Registry<T> {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Insert or overwrite. Returns true when an entry was replaced.
    pub fn register(&self, name: &str, entry: Arc<T>) -> bool {
        let key = name.to_lowercase();
        let overwritten = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.clone(), entry)
            .is_some();

        EntryRegistered {
            registry: self.label,
            name: &key,
            overwritten,
        }
        .log();
        overwritten
    }

    pub fn lookup(&self, name: &str) -> Option<Arc<T>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&name.to_lowercase())
            .cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
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
}

impl ProcessRegistry {
    /// Register a plain function or closure as a process handler.
    pub fn register_fn<F>(&self, name: &str, handler: F) -> bool
    where
        F: Fn(&Caller) -> ProcessResult<Value> + Send + Sync + 'static,
    {
        self.register(name, Arc::new(handler))
    }
}

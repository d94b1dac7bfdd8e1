// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;

use crate::errors::{ModelError, ModelResult};
use crate::traits::Record;
use crate::utils::parse_dsl;

fn default_primary() -> String {
    "id".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableDsl {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelOptionDsl {
    #[serde(default)]
    pub soft_deletes: bool,
}

/// A model document.
///
/// ```yaml
/// name: User
/// table:
///   name: users
/// primary: id
/// option:
///   soft_deletes: true
/// values:
///   - { name: Ada, status: enabled }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ModelDsl {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub table: TableDsl,
    #[serde(default = "default_primary")]
    pub primary: String,
    #[serde(default)]
    pub option: ModelOptionDsl,
    #[serde(default)]
    pub values: Vec<Record>,
}

impl ModelDsl {
    pub fn parse(file: &str, data: &[u8]) -> ModelResult<Self> {
        let dsl: Self = parse_dsl(file, data).map_err(|reason| ModelError::Dsl {
            file: file.to_string(),
            reason,
        })?;
        if dsl.primary.trim().is_empty() {
            return Err(ModelError::Dsl {
                file: file.to_string(),
                reason: "primary must not be empty".to_string(),
            });
        }
        Ok(dsl)
    }
}

/// Model class for a DSL path: the file name up to its first `.`, lowercased.
///
/// `models/user.mod.yaml` and `/models/User.json` both name `user`.
pub fn class_from_file(file: &str) -> String {
    let name = file.rsplit('/').next().unwrap_or(file);
    name.split('.').next().unwrap_or(name).to_lowercase()
}

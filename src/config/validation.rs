// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Runtime configuration validation.
//!
//! Every check runs and every problem is reported, so a config with three
//! mistakes fails once with three errors rather than three times.
//!
//! Checks:
//! 1. Connector ids are non-empty and unique
//! 2. Every connector and model entry names a file
//! 3. `log_level`, when set, is a level tracing understands

use std::collections::HashSet;

use super::RuntimeConfig;
use crate::errors::ValidationError;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

pub fn validate_config(cfg: &RuntimeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for (index, entry) in cfg.connectors.iter().enumerate() {
        if entry.id.trim().is_empty() {
            errors.push(ValidationError::EmptyConnectorId { index });
        } else if !seen.insert(entry.id.as_str()) {
            errors.push(ValidationError::DuplicateConnectorId {
                connector_id: entry.id.clone(),
            });
        }
        if entry.file.trim().is_empty() {
            errors.push(ValidationError::MissingFile {
                section: "connectors",
                index,
            });
        }
    }

    for (index, entry) in cfg.models.iter().enumerate() {
        if entry.file.trim().is_empty() {
            errors.push(ValidationError::MissingFile {
                section: "models",
                index,
            });
        }
    }

    if let Some(level) = &cfg.log_level {
        if !LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            errors.push(ValidationError::UnknownLogLevel {
                level: level.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

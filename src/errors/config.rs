// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

use super::{ConnectorError, ModelError};

/// Errors found while validating a runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Two connector entries share an id
    DuplicateConnectorId {
        /// The repeated id
        connector_id: String,
    },
    /// A connector entry has an empty id
    EmptyConnectorId {
        /// Position of the entry in the `connectors` list
        index: usize,
    },
    /// A connector or model entry has no DSL file
    MissingFile {
        /// `connectors` or `models`
        section: &'static str,
        /// Position of the entry in its list
        index: usize,
    },
    /// The log level is not one tracing understands
    UnknownLogLevel {
        /// The configured value
        level: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateConnectorId { connector_id } => {
                write!(f, "Duplicate connector id: '{}'", connector_id)
            }
            ValidationError::EmptyConnectorId { index } => {
                write!(f, "Connector at position {} has an empty id", index)
            }
            ValidationError::MissingFile { section, index } => {
                write!(f, "Entry {} in '{}' has no file", index, section)
            }
            ValidationError::UnknownLogLevel { level } => {
                write!(
                    f,
                    "Unknown log level '{}': expected one of trace, debug, info, warn, error, off",
                    level
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors that stop a runtime from being built from configuration
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("configuration validation failed:\n{}", join_lines(.0))]
    Invalid(Vec<ValidationError>),

    #[error(transparent)]
    Connector(#[from] ConnectorError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

fn join_lines(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use super::ErrorKind;

/// Errors returned by [`crate::traits::Model`] implementations.
#[derive(Error, Debug)]
pub enum ModelError {
    /// No live record matches the key.
    #[error("{model}: record '{key}' not found")]
    RecordNotFound { model: String, key: String },

    /// The input row, key or query cannot be applied.
    #[error("{model}: {reason}")]
    Invalid { model: String, reason: String },

    /// A model DSL could not be read.
    #[error("failed to read model DSL '{file}': {source}")]
    Read {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// A model DSL could not be parsed.
    #[error("model DSL '{file}' is invalid: {reason}")]
    Dsl { file: String, reason: String },
}

impl ModelError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ModelError::RecordNotFound { .. } => ErrorKind::NotFound,
            ModelError::Invalid { .. } | ModelError::Dsl { .. } => ErrorKind::BadRequest,
            ModelError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                ErrorKind::NotFound
            }
            ModelError::Read { .. } => ErrorKind::Internal,
        }
    }
}

pub type ModelResult<T> = Result<T, ModelError>;

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while binding and running a process.

use thiserror::Error;

use super::{ErrorKind, ModelError, PluginError};

/// Failure of a single process invocation.
///
/// Dispatch variants (`MalformedName` through `InvalidArgument`) are always
/// produced before any model or plugin is touched. The remaining variants come
/// from the resolved target itself.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// The name has fewer than three dot-separated segments.
    #[error("process '{name}' is malformed: expected <domain>.<class>.<method>")]
    MalformedName { name: String },

    /// The domain is neither built in nor present in the process registry.
    #[error("process '{name}': domain '{domain}' is not supported")]
    UnsupportedDomain { name: String, domain: String },

    /// The models domain has no handler for this method.
    #[error("process '{name}': method '{method}' does not exist")]
    MethodNotFound { name: String, method: String },

    /// Fewer positional arguments than the method requires.
    #[error("{class}.{method}: expected at least {expected} argument(s), got {given}")]
    MissingArguments {
        class: String,
        method: String,
        expected: usize,
        given: usize,
    },

    /// A positional argument has a shape the method cannot use.
    #[error("{class}.{method}: argument {index} is invalid: {reason}")]
    InvalidArgument {
        class: String,
        method: String,
        index: usize,
        reason: String,
    },

    /// No model is registered under the class name.
    #[error("model '{0}' is not loaded")]
    ModelNotFound(String),

    /// No plugin is registered under the class name.
    #[error("plugin '{0}' is not loaded")]
    PluginNotFound(String),

    /// The model operation failed.
    #[error("model '{class}' failed: {source}")]
    Model {
        class: String,
        #[source]
        source: ModelError,
    },

    /// The plugin call failed in transport or in the plugin itself.
    #[error("plugin '{class}' failed: {source}")]
    Plugin {
        class: String,
        #[source]
        source: PluginError,
    },

    /// A registered process handler failed.
    #[error("process '{name}' failed: {reason}")]
    Execution { name: String, reason: String },
}

impl ProcessError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProcessError::MalformedName { .. }
            | ProcessError::UnsupportedDomain { .. }
            | ProcessError::MissingArguments { .. }
            | ProcessError::InvalidArgument { .. } => ErrorKind::BadRequest,
            ProcessError::MethodNotFound { .. }
            | ProcessError::ModelNotFound(_)
            | ProcessError::PluginNotFound(_) => ErrorKind::NotFound,
            ProcessError::Model { source, .. } => source.kind(),
            ProcessError::Plugin { source, .. } => source.kind(),
            ProcessError::Execution { .. } => ErrorKind::Internal,
        }
    }

    pub fn code(&self) -> u16 {
        self.kind().code()
    }

    /// True for failures detected while parsing the name or validating arguments.
    pub fn is_dispatch(&self) -> bool {
        matches!(
            self,
            ProcessError::MalformedName { .. }
                | ProcessError::UnsupportedDomain { .. }
                | ProcessError::MethodNotFound { .. }
                | ProcessError::MissingArguments { .. }
                | ProcessError::InvalidArgument { .. }
        )
    }
}

pub type ProcessResult<T> = Result<T, ProcessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let cases = vec![
            (
                ProcessError::MalformedName { name: "a.b".into() },
                ErrorKind::BadRequest,
            ),
            (
                ProcessError::MethodNotFound {
                    name: "models.user.nope".into(),
                    method: "nope".into(),
                },
                ErrorKind::NotFound,
            ),
            (
                ProcessError::Model {
                    class: "user".into(),
                    source: ModelError::RecordNotFound {
                        model: "user".into(),
                        key: "9".into(),
                    },
                },
                ErrorKind::NotFound,
            ),
            (
                ProcessError::Plugin {
                    class: "user".into(),
                    source: PluginError::Transport("broken pipe".into()),
                },
                ErrorKind::Internal,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.kind(), expected, "unexpected kind for: {}", error);
        }
    }

    #[test]
    fn test_malformed_and_missing_method_are_distinct() {
        let malformed = ProcessError::MalformedName { name: "models.find".into() };
        let missing = ProcessError::MethodNotFound {
            name: "models.user.nope".into(),
            method: "nope".into(),
        };
        assert!(malformed.is_dispatch() && missing.is_dispatch());
        assert_ne!(malformed.code(), missing.code());
    }
}

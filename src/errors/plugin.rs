// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use super::ErrorKind;

/// Errors surfaced by a [`crate::traits::Plugin`] call.
#[derive(Error, Debug)]
pub enum PluginError {
    /// The call never reached the plugin or its reply was lost.
    #[error("transport error: {0}")]
    Transport(String),

    /// The plugin ran and reported a failure of its own.
    #[error("plugin error {code}: {message}")]
    Application { code: u16, message: String },
}

impl PluginError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PluginError::Transport(_) => ErrorKind::Internal,
            PluginError::Application { code, .. } => match code {
                400..=403 | 405..=499 => ErrorKind::BadRequest,
                404 => ErrorKind::NotFound,
                _ => ErrorKind::Internal,
            },
        }
    }
}

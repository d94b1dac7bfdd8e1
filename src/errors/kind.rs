// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

/// Coarse classification shared by every error in the crate.
///
/// The numeric codes follow HTTP status semantics so that an outer surface can
/// map a failure without inspecting the concrete error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller supplied something malformed (name, arguments, DSL).
    BadRequest,
    /// The addressed handler, model, plugin, connector or record does not exist.
    NotFound,
    /// A backend, plugin or connection failed while doing its work.
    Internal,
}

impl ErrorKind {
    pub fn code(self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::Internal => 500,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::BadRequest => "bad request",
            ErrorKind::NotFound => "not found",
            ErrorKind::Internal => "internal",
        };
        write!(f, "{} ({})", label, self.code())
    }
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

use crate::errors::{ProcessError, ProcessResult};

/// A parsed `<domain>.<class>.<method>` process name.
///
/// `domain` is the first segment, `method` the last and `class` everything in
/// between rejoined with dots, so `models.pet.owner.find` has class
/// `pet.owner`. All three are lowercased; `raw` keeps the name as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessName {
    pub raw: String,
    pub domain: String,
    pub class: String,
    pub method: String,
}

impl ProcessName {
    pub fn parse(name: &str) -> ProcessResult<Self> {
        let segments: Vec<&str> = name.split('.').collect();
        if segments.len() < 3 {
            return Err(ProcessError::MalformedName {
                name: name.to_string(),
            });
        }

        let last = segments.len() - 1;
        Ok(Self {
            raw: name.to_string(),
            domain: segments[0].to_lowercase(),
            class: segments[1..last].join(".").to_lowercase(),
            method: segments[last].to_lowercase(),
        })
    }

    /// The lowercased full name, as used for process registry lookups.
    pub fn key(&self) -> String {
        format!("{}.{}.{}", self.domain, self.class, self.method)
    }
}

impl fmt::Display for ProcessName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // connectors, in-memory models, built-in processes
pub mod config;     // runtime config + builder
pub mod engine;     // process dispatch
pub mod errors;     // error handling
pub mod observability;
pub mod traits;     // unified abstractions
pub mod utils;

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! In-process handlers registered into the process registry at startup.

pub mod encoding;

pub use encoding::ENCODING_PROCESSES;

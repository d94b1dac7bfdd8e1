// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! In-process data models built from model DSL.

pub mod dsl;
pub mod model;
pub mod query;

pub use dsl::{class_from_file, ModelDsl};
pub use model::MemoryModel;

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod connector;
mod kind;
mod model;
mod plugin;
mod process;

pub use config::{ConfigError, ValidationError};
pub use connector::{ConnectorError, ConnectorResult};
pub use kind::ErrorKind;
pub use model::{ModelError, ModelResult};
pub use plugin::PluginError;
pub use process::{ProcessError, ProcessResult};

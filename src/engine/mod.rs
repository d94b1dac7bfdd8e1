// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Process dispatch.
//!
//! A process name enters a [`Caller`], which binds it to one of three paths:
//!
//! ```text
//! models.<class>.<method>   → model handler table → Model registered as <class>
//! plugins.<name>.<method>   → plugin executor     → Plugin registered as <name>
//! <anything else>           → ProcessRegistry lookup of the full name
//! ```
//!
//! The [`Runtime`] owns the registries and is the usual entry point:
//! `runtime.call(name, args).await`.

pub mod args;
pub mod caller;
pub mod model_handlers;
pub mod plugin_handler;
pub mod process_name;
pub mod registry;
pub mod runtime;
#[cfg(test)]
mod integration_tests;

pub use args::Arg;
pub use caller::{Caller, Handler, HandlerFuture, MODELS_DOMAIN, PLUGINS_DOMAIN};
pub use process_name::ProcessName;
pub use registry::{ModelRegistry, PluginRegistry, ProcessFn, ProcessRegistry, Registry};
pub use runtime::Runtime;

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::caller::{Caller, HandlerFuture};
use crate::errors::ProcessError;

/// Generic executor for `plugins.<name>.<method>`: forwards every argument,
/// in order, to the named plugin and relays its reply.
pub fn exec<'a>(caller: &'a Caller) -> HandlerFuture<'a> {
    Box::pin(async move {
        let plugin = caller.plugin()?;
        let args = caller.values();
        plugin
            .exec(caller.method(), &args)
            .await
            .map_err(|source| ProcessError::Plugin {
                class: caller.class().to_string(),
                source,
            })
    })
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::time::Instant;

use anyhow::Context;
use serde_json::Value;
use the_switchboard::config::{load_and_validate_config, RuntimeBuilder};
use the_switchboard::engine::Arg;
use the_switchboard::errors::ProcessError;
use the_switchboard::observability::init_tracing;

/// Parse a command-line argument as JSON, keeping it as a plain string when it
/// is not valid JSON (`ada` and `"ada"` both become the string `ada`).
fn parse_arg(raw: &str) -> Arg {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => Arg::from(value),
        Err(_) => Arg::from(raw),
    }
}

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <config.yaml> <process> [json-arg ...]", args[0]);
        eprintln!("Example: {} configs/app.yaml models.user.find 1 '{{}}'", args[0]);
        eprintln!("Example: {} configs/app.yaml encoding.base64.encode \"hello world\"", args[0]);
        std::process::exit(1);
    }

    if let Err(e) = run(&args[1], &args[2], &args[3..]).await {
        match e.downcast_ref::<ProcessError>() {
            Some(process_error) => eprintln!("❌ [{}] {:#}", process_error.code(), e),
            None => eprintln!("❌ {:#}", e),
        }
        std::process::exit(2);
    }
}

async fn run(config_file: &str, process: &str, raw_args: &[String]) -> anyhow::Result<()> {
    let config = load_and_validate_config(config_file)
        .with_context(|| format!("loading {}", config_file))?;
    init_tracing(config.log_level.as_deref());

    let runtime = RuntimeBuilder::from_config(&config)
        .await
        .context("building runtime")?;

    let start_time = Instant::now();
    let result = runtime
        .call(process, raw_args.iter().map(|raw| parse_arg(raw)).collect())
        .await;
    let elapsed = start_time.elapsed();
    runtime.shutdown().await;

    let value = result.with_context(|| format!("calling {}", process))?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    tracing::debug!(process, elapsed_ms = elapsed.as_millis() as u64, "call finished");
    Ok(())
}

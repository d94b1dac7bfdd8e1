// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Built-in `encoding.*` processes.
//!
//! | process                  | argument        | result              |
//! |--------------------------|-----------------|---------------------|
//! | `encoding.base64.encode` | string          | base64 text         |
//! | `encoding.base64.decode` | base64 text     | string              |
//! | `encoding.hex.encode`    | string          | lowercase hex text  |
//! | `encoding.hex.decode`    | hex text        | string              |
//! | `encoding.json.encode`   | any value       | JSON text           |
//! | `encoding.json.decode`   | JSON text       | value               |
//!
//! Non-string arguments to the text encoders are encoded as their JSON text.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;

use crate::engine::{Caller, ProcessRegistry};
use crate::errors::ProcessResult;

/// Every built-in encoding process with its full name.
pub const ENCODING_PROCESSES: &[(&str, fn(&Caller) -> ProcessResult<Value>)] = &[
    ("encoding.base64.encode", base64_encode),
    ("encoding.base64.decode", base64_decode),
    ("encoding.hex.encode", hex_encode),
    ("encoding.hex.decode", hex_decode),
    ("encoding.json.encode", json_encode),
    ("encoding.json.decode", json_decode),
];

pub fn register(registry: &ProcessRegistry) {
    for (name, handler) in ENCODING_PROCESSES {
        registry.register_fn(name, *handler);
    }
}

fn text_arg(caller: &Caller) -> ProcessResult<String> {
    Ok(match caller.arg(0)?.to_value() {
        Value::String(text) => text,
        other => other.to_string(),
    })
}

fn utf8(caller: &Caller, bytes: Vec<u8>) -> ProcessResult<Value> {
    String::from_utf8(bytes)
        .map(Value::String)
        .map_err(|e| caller.invalid_arg(0, format!("decoded bytes are not UTF-8: {}", e)))
}

fn base64_encode(caller: &Caller) -> ProcessResult<Value> {
    let text = text_arg(caller)?;
    Ok(Value::String(STANDARD.encode(text.as_bytes())))
}

fn base64_decode(caller: &Caller) -> ProcessResult<Value> {
    let text = text_arg(caller)?;
    let bytes = STANDARD
        .decode(text.trim())
        .map_err(|e| caller.invalid_arg(0, format!("invalid base64: {}", e)))?;
    utf8(caller, bytes)
}

fn hex_encode(caller: &Caller) -> ProcessResult<Value> {
    let text = text_arg(caller)?;
    Ok(Value::String(
        text.as_bytes().iter().map(|b| format!("{:02x}", b)).collect(),
    ))
}

fn hex_decode(caller: &Caller) -> ProcessResult<Value> {
    let text = text_arg(caller)?;
    let text = text.trim();
    if text.len() % 2 != 0 {
        return Err(caller.invalid_arg(0, "invalid hex: odd length"));
    }
    let bytes = (0..text.len())
        .step_by(2)
        .map(|i| {
            text.get(i..i + 2)
                .filter(|pair| pair.bytes().all(|b| b.is_ascii_hexdigit()))
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| caller.invalid_arg(0, format!("invalid hex at offset {}", i)))
        })
        .collect::<ProcessResult<Vec<u8>>>()?;
    utf8(caller, bytes)
}

fn json_encode(caller: &Caller) -> ProcessResult<Value> {
    let value = caller.arg(0)?.to_value();
    serde_json::to_string(&value)
        .map(Value::String)
        .map_err(|e| caller.execution_error(e.to_string()))
}

fn json_decode(caller: &Caller) -> ProcessResult<Value> {
    let text = text_arg(caller)?;
    serde_json::from_str(&text).map_err(|e| caller.invalid_arg(0, format!("invalid JSON: {}", e)))
}

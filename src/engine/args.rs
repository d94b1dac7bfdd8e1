// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Positional process arguments.
//!
//! Arguments arrive either strongly typed (built in Rust) or as loose JSON
//! (from a CLI, an HTTP body, another process). Each accessor resolves both
//! forms once, at the boundary, and reports shapes it cannot use.

use serde_json::Value;

use crate::traits::QueryParam;
use crate::utils::value::{to_int, to_text};

/// One positional argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Value(Value),
    Query(QueryParam),
    Columns(Vec<String>),
    Rows(Vec<Vec<Value>>),
}

impl Arg {
    /// The JSON form of the argument, whatever its variant.
    pub fn to_value(&self) -> Value {
        match self {
            Arg::Value(value) => value.clone(),
            Arg::Query(param) => serde_json::to_value(param).unwrap_or(Value::Null),
            Arg::Columns(columns) => Value::from(columns.clone()),
            Arg::Rows(rows) => Value::Array(rows.iter().cloned().map(Value::Array).collect()),
        }
    }

    /// Query options, leniently: anything that is not query-shaped yields `None`.
    pub fn query(&self) -> Option<QueryParam> {
        match self {
            Arg::Query(param) => Some(param.clone()),
            Arg::Value(value @ Value::Object(_)) => serde_json::from_value(value.clone()).ok(),
            _ => None,
        }
    }

    pub fn int(&self) -> Option<i64> {
        match self {
            Arg::Value(value) => to_int(value),
            _ => None,
        }
    }

    /// A column name list. Loose elements must be scalars.
    pub fn columns(&self) -> Result<Vec<String>, String> {
        match self {
            Arg::Columns(columns) => Ok(columns.clone()),
            Arg::Value(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    to_text(item).ok_or_else(|| format!("column {} is not a string: {}", i, item))
                })
                .collect(),
            other => Err(format!("expected a column list, got {}", other.describe())),
        }
    }

    /// A list of value rows. Loose rows must each be a sequence.
    pub fn rows(&self) -> Result<Vec<Vec<Value>>, String> {
        match self {
            Arg::Rows(rows) => Ok(rows.clone()),
            Arg::Value(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| match item {
                    Value::Array(values) => Ok(values.clone()),
                    other => Err(format!("row {} is not a sequence: {}", i, other)),
                })
                .collect(),
            other => Err(format!("expected a list of rows, got {}", other.describe())),
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            Arg::Value(Value::Null) => "null",
            Arg::Value(Value::Bool(_)) => "a boolean",
            Arg::Value(Value::Number(_)) => "a number",
            Arg::Value(Value::String(_)) => "a string",
            Arg::Value(Value::Array(_)) => "an array",
            Arg::Value(Value::Object(_)) => "an object",
            Arg::Query(_) => "query options",
            Arg::Columns(_) => "a column list",
            Arg::Rows(_) => "a row list",
        }
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Arg::Value(value)
    }
}

impl From<QueryParam> for Arg {
    fn from(param: QueryParam) -> Self {
        Arg::Query(param)
    }
}

impl From<Vec<String>> for Arg {
    fn from(columns: Vec<String>) -> Self {
        Arg::Columns(columns)
    }
}

impl From<Vec<Vec<Value>>> for Arg {
    fn from(rows: Vec<Vec<Value>>) -> Self {
        Arg::Rows(rows)
    }
}

impl From<&str> for Arg {
    fn from(text: &str) -> Self {
        Arg::Value(Value::from(text))
    }
}

impl From<i64> for Arg {
    fn from(n: i64) -> Self {
        Arg::Value(Value::from(n))
    }
}

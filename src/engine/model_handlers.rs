// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The fixed `models.<class>.<method>` vocabulary.
//!
//! Every handler checks its argument count and argument shapes first, then
//! resolves the model and calls exactly one model operation.
//!
//! | method   | args | roles                                  | result            |
//! |----------|------|----------------------------------------|-------------------|
//! | find     | 2    | key, query (empty when not query-like) | record            |
//! | get      | 1    | query                                  | records           |
//! | paginate | 3    | query, page, pagesize                  | page envelope     |
//! | create   | 1    | row                                    | primary key       |
//! | update   | 2    | key, row                               | null              |
//! | save     | 1    | row                                    | primary key       |
//! | delete   | 1    | key                                    | null              |
//! | destroy  | 1    | key                                    | null              |
//! | insert   | 2    | columns, rows                          | null              |

use serde_json::Value;

use super::caller::{Caller, Handler, HandlerFuture};
use crate::errors::ProcessResult;
use crate::traits::{QueryParam, Record};

pub const MODEL_HANDLERS: &[(&str, Handler)] = &[
    ("find", find),
    ("get", get),
    ("paginate", paginate),
    ("create", create),
    ("update", update),
    ("save", save),
    ("delete", delete),
    ("destroy", destroy),
    ("insert", insert),
];

pub fn model_handler(method: &str) -> Option<Handler> {
    MODEL_HANDLERS
        .iter()
        .find(|(name, _)| *name == method)
        .map(|(_, handler)| *handler)
}

fn key_arg(caller: &Caller, index: usize) -> ProcessResult<Value> {
    match caller.arg(index)?.to_value() {
        key @ (Value::String(_) | Value::Number(_) | Value::Bool(_)) => Ok(key),
        other => Err(caller.invalid_arg(index, format!("key must be a scalar, got {}", other))),
    }
}

fn query_arg(caller: &Caller, index: usize) -> ProcessResult<QueryParam> {
    caller
        .arg(index)?
        .query()
        .ok_or_else(|| caller.invalid_arg(index, "expected query options"))
}

fn row_arg(caller: &Caller, index: usize) -> ProcessResult<Record> {
    match caller.arg(index)?.to_value() {
        Value::Object(row) => Ok(row),
        other => Err(caller.invalid_arg(index, format!("row must be an object, got {}", other))),
    }
}

fn int_arg(caller: &Caller, index: usize, role: &str) -> ProcessResult<i64> {
    caller
        .arg(index)?
        .int()
        .ok_or_else(|| caller.invalid_arg(index, format!("{} must be an integer", role)))
}

fn find<'a>(caller: &'a Caller) -> HandlerFuture<'a> {
    Box::pin(async move {
        caller.validate_arg_nums(2)?;
        let key = key_arg(caller, 0)?;
        let param = caller.arg(1)?.query().unwrap_or_default();

        let model = caller.model()?;
        let record = model
            .find(&key, &param)
            .await
            .map_err(|e| caller.model_error(e))?;
        Ok(Value::Object(record))
    })
}

fn get<'a>(caller: &'a Caller) -> HandlerFuture<'a> {
    Box::pin(async move {
        caller.validate_arg_nums(1)?;
        let param = query_arg(caller, 0)?;

        let model = caller.model()?;
        let records = model.get(&param).await.map_err(|e| caller.model_error(e))?;
        Ok(Value::Array(records.into_iter().map(Value::Object).collect()))
    })
}

fn paginate<'a>(caller: &'a Caller) -> HandlerFuture<'a> {
    Box::pin(async move {
        caller.validate_arg_nums(3)?;
        let param = query_arg(caller, 0)?;
        let page = int_arg(caller, 1, "page")?;
        let pagesize = int_arg(caller, 2, "pagesize")?;

        let model = caller.model()?;
        let paginated = model
            .paginate(&param, page, pagesize)
            .await
            .map_err(|e| caller.model_error(e))?;
        serde_json::to_value(paginated).map_err(|e| caller.execution_error(e.to_string()))
    })
}

fn create<'a>(caller: &'a Caller) -> HandlerFuture<'a> {
    Box::pin(async move {
        caller.validate_arg_nums(1)?;
        let row = row_arg(caller, 0)?;

        let model = caller.model()?;
        model.create(row).await.map_err(|e| caller.model_error(e))
    })
}

fn update<'a>(caller: &'a Caller) -> HandlerFuture<'a> {
    Box::pin(async move {
        caller.validate_arg_nums(2)?;
        let key = key_arg(caller, 0)?;
        let row = row_arg(caller, 1)?;

        let model = caller.model()?;
        model
            .update(&key, row)
            .await
            .map_err(|e| caller.model_error(e))?;
        Ok(Value::Null)
    })
}

fn save<'a>(caller: &'a Caller) -> HandlerFuture<'a> {
    Box::pin(async move {
        caller.validate_arg_nums(1)?;
        let row = row_arg(caller, 0)?;

        let model = caller.model()?;
        model.save(row).await.map_err(|e| caller.model_error(e))
    })
}

fn delete<'a>(caller: &'a Caller) -> HandlerFuture<'a> {
    Box::pin(async move {
        caller.validate_arg_nums(1)?;
        let key = key_arg(caller, 0)?;

        let model = caller.model()?;
        model.delete(&key).await.map_err(|e| caller.model_error(e))?;
        Ok(Value::Null)
    })
}

fn destroy<'a>(caller: &'a Caller) -> HandlerFuture<'a> {
    Box::pin(async move {
        caller.validate_arg_nums(1)?;
        let key = key_arg(caller, 0)?;

        let model = caller.model()?;
        model.destroy(&key).await.map_err(|e| caller.model_error(e))?;
        Ok(Value::Null)
    })
}

fn insert<'a>(caller: &'a Caller) -> HandlerFuture<'a> {
    Box::pin(async move {
        caller.validate_arg_nums(2)?;
        let columns = caller
            .arg(0)?
            .columns()
            .map_err(|reason| caller.invalid_arg(0, reason))?;
        let rows = caller
            .arg(1)?
            .rows()
            .map_err(|reason| caller.invalid_arg(1, reason))?;

        let model = caller.model()?;
        model
            .insert(&columns, &rows)
            .await
            .map_err(|e| caller.model_error(e))?;
        Ok(Value::Null)
    })
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Applying a [`QueryParam`] to in-memory rows.

use serde_json::Value;
use std::cmp::Ordering;

use crate::traits::{OrderOption, QueryOrder, QueryParam, QueryWhere, Record, WhereOp};
use crate::utils::value::to_text;

/// Ordering of two JSON scalars of the same family. Mixed families and
/// non-scalars are incomparable. `null` sorts before everything.
pub fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Null, Value::Null) => Some(Ordering::Equal),
        (Value::Null, _) => Some(Ordering::Less),
        (_, Value::Null) => Some(Ordering::Greater),
        (Value::Number(a), Value::Number(b)) => a.as_f64()?.partial_cmp(&b.as_f64()?),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Number(_), Value::String(s)) => {
            compare(left, &Value::from(s.trim().parse::<f64>().ok()?))
        }
        (Value::String(s), Value::Number(_)) => {
            compare(&Value::from(s.trim().parse::<f64>().ok()?), right)
        }
        _ => None,
    }
}

pub fn matches(row: &Record, condition: &QueryWhere) -> bool {
    let column = row.get(&condition.column).unwrap_or(&Value::Null);
    let ordering = || compare(column, &condition.value);

    match condition.op {
        WhereOp::Null => column.is_null(),
        WhereOp::NotNull => !column.is_null(),
        WhereOp::Eq => ordering() == Some(Ordering::Equal),
        WhereOp::Ne => ordering() != Some(Ordering::Equal),
        WhereOp::Gt => ordering() == Some(Ordering::Greater),
        WhereOp::Ge => matches!(ordering(), Some(Ordering::Greater | Ordering::Equal)),
        WhereOp::Lt => ordering() == Some(Ordering::Less),
        WhereOp::Le => matches!(ordering(), Some(Ordering::Less | Ordering::Equal)),
        WhereOp::Match => match (to_text(column), to_text(&condition.value)) {
            (Some(haystack), Some(needle)) => haystack.contains(&needle),
            _ => false,
        },
    }
}

pub fn matches_all(row: &Record, param: &QueryParam) -> bool {
    param.wheres.iter().all(|condition| matches(row, condition))
}

/// Stable multi-column sort.
pub fn sort(rows: &mut [Record], orders: &[QueryOrder]) {
    if orders.is_empty() {
        return;
    }
    rows.sort_by(|a, b| {
        for order in orders {
            let left = a.get(&order.column).unwrap_or(&Value::Null);
            let right = b.get(&order.column).unwrap_or(&Value::Null);
            let ordering = compare(left, right).unwrap_or(Ordering::Equal);
            let ordering = match order.option {
                OrderOption::Asc => ordering,
                OrderOption::Desc => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    });
}

/// Keep only the selected columns. An empty selection keeps the row intact.
pub fn project(row: &Record, select: &[String]) -> Record {
    if select.is_empty() {
        return row.clone();
    }
    select
        .iter()
        .filter_map(|column| row.get(column).map(|v| (column.clone(), v.clone())))
        .collect()
}

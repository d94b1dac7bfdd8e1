// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde_json::Value;
use std::sync::{PoisonError, RwLock};

use super::dsl::ModelDsl;
use super::query::{matches_all, project, sort};
use crate::errors::{ModelError, ModelResult};
use crate::traits::{Model, Paginated, QueryParam, Record};
use crate::utils::value::{key_text, to_int};

pub const DELETED_AT: &str = "deleted_at";

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Record>,
    next_id: i64,
}

/// A data model held entirely in process memory.
///
/// Rows are kept in insertion order. Integer primary keys are assigned from a
/// counter that always stays ahead of the largest integer key seen. With soft
/// deletes enabled, `delete` stamps `deleted_at` (RFC 3339) and the row is
/// hidden from queries unless `with_trashed` is set; `destroy` always removes.
#[derive(Debug)]
pub struct MemoryModel {
    name: String,
    table: String,
    primary: String,
    soft_deletes: bool,
    state: RwLock<Table>,
}

impl MemoryModel {
    pub fn new(name: &str, primary: &str, soft_deletes: bool) -> Self {
        Self {
            name: name.to_string(),
            table: name.to_string(),
            primary: primary.to_string(),
            soft_deletes,
            state: RwLock::new(Table {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Build a model named `class` from its DSL, seeding `values`.
    pub fn from_dsl(class: &str, dsl: ModelDsl) -> ModelResult<Self> {
        let mut model = Self::new(class, &dsl.primary, dsl.option.soft_deletes);
        if !dsl.table.name.is_empty() {
            model.table = dsl.table.name;
        }
        {
            let state = model.state.get_mut().unwrap_or_else(PoisonError::into_inner);
            for row in dsl.values {
                Self::push(&model.name, &model.primary, state, row)?;
            }
        }
        Ok(model)
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn soft_deletes(&self) -> bool {
        self.soft_deletes
    }

    /// Rows currently stored, trashed ones included.
    pub fn len(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .rows
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn invalid(&self, reason: impl Into<String>) -> ModelError {
        ModelError::Invalid {
            model: self.name.clone(),
            reason: reason.into(),
        }
    }

    fn not_found(&self, key: &Value) -> ModelError {
        ModelError::RecordNotFound {
            model: self.name.clone(),
            key: key_text(key),
        }
    }

    fn is_live(&self, row: &Record) -> bool {
        !self.soft_deletes || row.get(DELETED_AT).map_or(true, Value::is_null)
    }

    fn has_key(primary: &str, row: &Record, key: &Value) -> bool {
        row.get(primary)
            .map_or(false, |value| key_text(value) == key_text(key))
    }

    fn position(&self, table: &Table, key: &Value, with_trashed: bool) -> Option<usize> {
        table.rows.iter().position(|row| {
            Self::has_key(&self.primary, row, key) && (with_trashed || self.is_live(row))
        })
    }

    /// Append `row`, assigning the primary key when absent.
    fn push(model: &str, primary: &str, table: &mut Table, mut row: Record) -> ModelResult<Value> {
        let key = match row.get(primary).filter(|v| !v.is_null()).cloned() {
            Some(key) => {
                if table.rows.iter().any(|r| Self::has_key(primary, r, &key)) {
                    return Err(ModelError::Invalid {
                        model: model.to_string(),
                        reason: format!("duplicate {} '{}'", primary, key_text(&key)),
                    });
                }
                if let Some(id) = to_int(&key) {
                    table.next_id = table.next_id.max(id.saturating_add(1));
                }
                key
            }
            None => {
                let key = Value::from(table.next_id);
                // The counter saturates at i64::MAX; once that key is taken there is none left.
                if table.rows.iter().any(|r| Self::has_key(primary, r, &key)) {
                    return Err(ModelError::Invalid {
                        model: model.to_string(),
                        reason: format!("no {} left to assign after '{}'", primary, table.next_id),
                    });
                }
                table.next_id = table.next_id.saturating_add(1);
                row.insert(primary.to_string(), key.clone());
                key
            }
        };
        table.rows.push(row);
        Ok(key)
    }

    /// Live rows matching `param`, ordered, not yet projected or limited.
    fn select(&self, param: &QueryParam) -> Vec<Record> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        let mut rows: Vec<Record> = state
            .rows
            .iter()
            .filter(|row| param.with_trashed || self.is_live(row))
            .filter(|row| matches_all(row, param))
            .cloned()
            .collect();
        sort(&mut rows, &param.orders);
        rows
    }

    fn update_locked(&self, table: &mut Table, key: &Value, row: Record) -> ModelResult<()> {
        let index = self
            .position(table, key, false)
            .ok_or_else(|| self.not_found(key))?;
        let target = &mut table.rows[index];
        for (column, value) in row {
            if column != self.primary {
                target.insert(column, value);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl Model for MemoryModel {
    fn name(&self) -> &str {
        &self.name
    }

    async fn find(&self, key: &Value, param: &QueryParam) -> ModelResult<Record> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state
            .rows
            .iter()
            .filter(|row| param.with_trashed || self.is_live(row))
            .find(|row| Self::has_key(&self.primary, row, key) && matches_all(row, param))
            .map(|row| project(row, &param.select))
            .ok_or_else(|| self.not_found(key))
    }

    async fn get(&self, param: &QueryParam) -> ModelResult<Vec<Record>> {
        let rows = self.select(param);
        let limit = param.limit.unwrap_or(rows.len());
        Ok(rows
            .iter()
            .take(limit)
            .map(|row| project(row, &param.select))
            .collect())
    }

    async fn paginate(&self, param: &QueryParam, page: i64, pagesize: i64) -> ModelResult<Paginated> {
        if pagesize < 1 {
            return Err(self.invalid(format!("pagesize must be at least 1, got {}", pagesize)));
        }
        let page = page.max(1);

        let rows = self.select(param);
        let total = rows.len() as i64;
        let offset = usize::try_from((page - 1).saturating_mul(pagesize)).unwrap_or(usize::MAX);
        let data = rows
            .iter()
            .skip(offset)
            .take(pagesize as usize)
            .map(|row| project(row, &param.select))
            .collect();

        Ok(Paginated::new(data, total, page, pagesize))
    }

    async fn create(&self, row: Record) -> ModelResult<Value> {
        if row.is_empty() {
            return Err(self.invalid("row must not be empty"));
        }
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        Self::push(&self.name, &self.primary, &mut state, row)
    }

    async fn update(&self, key: &Value, row: Record) -> ModelResult<()> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        self.update_locked(&mut state, key, row)
    }

    async fn save(&self, row: Record) -> ModelResult<Value> {
        if row.is_empty() {
            return Err(self.invalid("row must not be empty"));
        }
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let existing = row
            .get(&self.primary)
            .filter(|key| self.position(&state, key, true).is_some())
            .cloned();

        match existing {
            // A trashed row is not found, as for update; it is never revived.
            Some(key) => {
                self.update_locked(&mut state, &key, row)?;
                Ok(key)
            }
            None => Self::push(&self.name, &self.primary, &mut state, row),
        }
    }

    async fn delete(&self, key: &Value) -> ModelResult<()> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let index = self
            .position(&state, key, false)
            .ok_or_else(|| self.not_found(key))?;

        if self.soft_deletes {
            let stamp = chrono::Utc::now().to_rfc3339();
            state.rows[index].insert(DELETED_AT.to_string(), Value::String(stamp));
        } else {
            state.rows.remove(index);
        }
        Ok(())
    }

    async fn destroy(&self, key: &Value) -> ModelResult<()> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let index = self
            .position(&state, key, true)
            .ok_or_else(|| self.not_found(key))?;
        state.rows.remove(index);
        Ok(())
    }

    /// All rows are validated before any is stored.
    async fn insert(&self, columns: &[String], rows: &[Vec<Value>]) -> ModelResult<()> {
        if columns.is_empty() {
            return Err(self.invalid("insert needs at least one column"));
        }
        let records: Vec<Record> = rows
            .iter()
            .enumerate()
            .map(|(i, values)| {
                if values.len() != columns.len() {
                    return Err(self.invalid(format!(
                        "row {} has {} value(s) for {} column(s)",
                        i,
                        values.len(),
                        columns.len()
                    )));
                }
                Ok(columns.iter().cloned().zip(values.iter().cloned()).collect())
            })
            .collect::<ModelResult<_>>()?;

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let mut staged = Table {
            rows: state.rows.clone(),
            next_id: state.next_id,
        };
        for record in records {
            Self::push(&self.name, &self.primary, &mut staged, record)?;
        }
        *state = staged;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    fn users(soft_deletes: bool) -> MemoryModel {
        let dsl: ModelDsl = serde_json::from_value(json!({
            "name": "User",
            "table": {"name": "users"},
            "option": {"soft_deletes": soft_deletes},
            "values": [
                {"name": "Ada", "status": "enabled"},
                {"name": "Grace", "status": "disabled"},
                {"name": "Linus", "status": "enabled"}
            ]
        }))
        .unwrap();
        MemoryModel::from_dsl("user", dsl).unwrap()
    }

    #[tokio::test]
    async fn test_seed_assigns_keys() {
        let model = users(false);
        assert_eq!(model.table(), "users");
        assert_eq!(model.len(), 3);

        let grace = model.find(&json!(2), &QueryParam::default()).await.unwrap();
        assert_eq!(grace["name"], "Grace");

        let by_string = model.find(&json!("3"), &QueryParam::default()).await.unwrap();
        assert_eq!(by_string["name"], "Linus");
    }

    #[tokio::test]
    async fn test_find_missing_is_not_found() {
        let model = users(false);
        let err = model.find(&json!(99), &QueryParam::default()).await.unwrap_err();
        assert!(matches!(err, ModelError::RecordNotFound { ref key, .. } if key == "99"));
    }

    #[tokio::test]
    async fn test_get_filters_orders_limits() {
        let model = users(false);
        let param = QueryParam::default()
            .where_eq("status", "enabled")
            .order_by("id", crate::traits::OrderOption::Desc)
            .with_limit(1);
        let rows = model.get(&param).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["name"], "Linus");
    }

    #[tokio::test]
    async fn test_paginate() {
        let model = users(false);
        let param = QueryParam::default();

        let cases = vec![
            (1, 2, 2, 2, -1),
            (2, 2, 1, -1, 1),
            (0, 2, 2, 2, -1),
            (5, 2, 0, -1, 4),
        ];

        for (page, pagesize, rows, next, prev) in cases {
            let result = model.paginate(&param, page, pagesize).await.unwrap();
            assert_eq!(result.total, 3);
            assert_eq!(result.pagecnt, 2);
            assert_eq!(result.data.len(), rows, "page {}", page);
            assert_eq!(result.next, next, "page {}", page);
            assert_eq!(result.prev, prev, "page {}", page);
        }

        let err = model.paginate(&param, 1, 0).await.unwrap_err();
        assert!(matches!(err, ModelError::Invalid { .. }));

        let whole = model.paginate(&param, 1, i64::MAX).await.unwrap();
        assert_eq!(whole.data.len(), 3);
        assert_eq!(whole.pagecnt, 1);
        assert_eq!(whole.next, -1);

        let far = model.paginate(&param, i64::MAX, i64::MAX).await.unwrap();
        assert!(far.data.is_empty());
        assert_eq!(far.next, -1);
        assert_eq!(far.prev, i64::MAX - 1);
    }

    #[tokio::test]
    async fn test_create_update_save() {
        let model = users(false);

        let id = model.create(record(json!({"name": "Barbara"}))).await.unwrap();
        assert_eq!(id, json!(4));

        let explicit = model.create(record(json!({"id": 10, "name": "Ken"}))).await.unwrap();
        assert_eq!(explicit, json!(10));
        let next = model.create(record(json!({"name": "Dennis"}))).await.unwrap();
        assert_eq!(next, json!(11));

        let err = model.create(record(json!({"id": 10, "name": "Dup"}))).await.unwrap_err();
        assert!(matches!(err, ModelError::Invalid { .. }));

        model.update(&json!(4), record(json!({"status": "enabled", "id": 99}))).await.unwrap();
        let barbara = model.find(&json!(4), &QueryParam::default()).await.unwrap();
        assert_eq!(barbara["status"], "enabled");
        assert_eq!(barbara["id"], 4);

        let saved = model.save(record(json!({"id": 4, "name": "Barbara L."}))).await.unwrap();
        assert_eq!(saved, json!(4));
        let created = model.save(record(json!({"name": "Frances"}))).await.unwrap();
        assert_eq!(created, json!(12));

        let err = model.update(&json!(404), record(json!({"a": 1}))).await.unwrap_err();
        assert!(matches!(err, ModelError::RecordNotFound { .. }));
    }

    #[tokio::test]
    async fn test_create_at_key_limit() {
        let model = users(false);

        let below = model
            .create(record(json!({"id": i64::MAX - 1, "name": "Penultimate"})))
            .await
            .unwrap();
        assert_eq!(below, json!(i64::MAX - 1));

        let last = model.create(record(json!({"name": "Last"}))).await.unwrap();
        assert_eq!(last, json!(i64::MAX));

        let err = model.create(record(json!({"name": "Overflow"}))).await.unwrap_err();
        assert!(matches!(err, ModelError::Invalid { .. }));
        assert!(err.to_string().contains("no id left"), "got: {}", err);

        let max = users(false);
        let key = max
            .create(record(json!({"id": i64::MAX, "name": "Max"})))
            .await
            .unwrap();
        assert_eq!(key, json!(i64::MAX));
        let dup = max
            .create(record(json!({"id": i64::MAX, "name": "Again"})))
            .await
            .unwrap_err();
        assert!(matches!(dup, ModelError::Invalid { .. }));
        assert_eq!(max.len(), 4);
    }

    #[tokio::test]
    async fn test_soft_delete_then_destroy() {
        let model = users(true);

        model.delete(&json!(1)).await.unwrap();
        assert!(model.find(&json!(1), &QueryParam::default()).await.is_err());
        assert_eq!(model.get(&QueryParam::default()).await.unwrap().len(), 2);

        let trashed = QueryParam {
            with_trashed: true,
            ..QueryParam::default()
        };
        let ada = model.find(&json!(1), &trashed).await.unwrap();
        let stamp = ada[DELETED_AT].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());

        assert!(model.delete(&json!(1)).await.is_err());

        let err = model
            .save(record(json!({"id": 1, "name": "Ada L."})))
            .await
            .unwrap_err();
        assert!(matches!(err, ModelError::RecordNotFound { .. }));
        let still_trashed = model.find(&json!(1), &trashed).await.unwrap();
        assert_eq!(still_trashed["name"], "Ada");

        model.destroy(&json!(1)).await.unwrap();
        assert_eq!(model.len(), 2);

        let recreated = model.save(record(json!({"id": 1, "name": "Ada"}))).await.unwrap();
        assert_eq!(recreated, json!(1));
    }

    #[tokio::test]
    async fn test_hard_delete_without_soft_deletes() {
        let model = users(false);
        model.delete(&json!(2)).await.unwrap();
        assert_eq!(model.len(), 2);
        assert!(model.destroy(&json!(2)).await.is_err());
    }

    #[tokio::test]
    async fn test_insert_is_all_or_nothing() {
        let model = users(false);
        let columns = vec!["name".to_string(), "status".to_string()];

        model
            .insert(&columns, &[vec![json!("Ken"), json!("enabled")], vec![json!("Rob"), json!("enabled")]])
            .await
            .unwrap();
        assert_eq!(model.len(), 5);

        let err = model
            .insert(&columns, &[vec![json!("Bjarne"), json!("enabled")], vec![json!("short")]])
            .await
            .unwrap_err();
        assert!(matches!(err, ModelError::Invalid { .. }));
        assert_eq!(model.len(), 5);

        let columns = vec!["id".to_string(), "name".to_string()];
        let err = model
            .insert(&columns, &[vec![json!(100), json!("A")], vec![json!(1), json!("B")]])
            .await
            .unwrap_err();
        assert!(matches!(err, ModelError::Invalid { .. }));
        assert_eq!(model.len(), 5);
    }
}

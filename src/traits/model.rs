//! The data-model capability reached through `models.<class>.<method>`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::ModelResult;

/// One row, keyed by column name.
pub type Record = Map<String, Value>;

/// Comparison applied by a [`QueryWhere`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WhereOp {
    #[default]
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    /// Substring match on the string form of the column.
    Match,
    Null,
    NotNull,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryWhere {
    pub column: String,
    #[serde(default)]
    pub op: WhereOp,
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderOption {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryOrder {
    pub column: String,
    #[serde(default)]
    pub option: OrderOption,
}

/// Query options accepted by `find`, `get` and `paginate`.
///
/// Every field is optional; `QueryParam::default()` selects all live rows in
/// storage order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParam {
    pub select: Vec<String>,
    pub wheres: Vec<QueryWhere>,
    pub orders: Vec<QueryOrder>,
    pub limit: Option<usize>,
    pub with_trashed: bool,
}

impl QueryParam {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn where_eq(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.wheres.push(QueryWhere {
            column: column.to_string(),
            op: WhereOp::Eq,
            value: value.into(),
        });
        self
    }

    pub fn order_by(mut self, column: &str, option: OrderOption) -> Self {
        self.orders.push(QueryOrder {
            column: column.to_string(),
            option,
        });
        self
    }
}

/// One page of results plus the navigation numbers around it.
///
/// `next` and `prev` are `-1` when there is no such page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated {
    pub data: Vec<Record>,
    pub total: i64,
    pub page: i64,
    pub pagesize: i64,
    pub pagecnt: i64,
    pub next: i64,
    pub prev: i64,
}

impl Paginated {
    /// Build the page envelope. `page` and `pagesize` must already be >= 1.
    pub fn new(data: Vec<Record>, total: i64, page: i64, pagesize: i64) -> Self {
        let pagecnt = total / pagesize + i64::from(total % pagesize != 0);
        let next = if page < pagecnt { page + 1 } else { -1 };
        let prev = if page > 1 { page - 1 } else { -1 };
        Self {
            data,
            total,
            page,
            pagesize,
            pagecnt,
            next,
            prev,
        }
    }
}

/// Must-succeed query and mutation operations of a named data model.
///
/// Each method either returns a complete result or a [`crate::errors::ModelError`];
/// there are no partial results.
#[async_trait]
pub trait Model: Send + Sync {
    fn name(&self) -> &str;

    async fn find(&self, key: &Value, param: &QueryParam) -> ModelResult<Record>;

    async fn get(&self, param: &QueryParam) -> ModelResult<Vec<Record>>;

    async fn paginate(&self, param: &QueryParam, page: i64, pagesize: i64)
        -> ModelResult<Paginated>;

    /// Insert one row and return its primary key.
    async fn create(&self, row: Record) -> ModelResult<Value>;

    async fn update(&self, key: &Value, row: Record) -> ModelResult<()>;

    /// Update when the row carries an existing primary key, create otherwise.
    async fn save(&self, row: Record) -> ModelResult<Value>;

    /// Soft delete where supported, hard delete otherwise.
    async fn delete(&self, key: &Value) -> ModelResult<()>;

    async fn destroy(&self, key: &Value) -> ModelResult<()>;

    async fn insert(&self, columns: &[String], rows: &[Vec<Value>]) -> ModelResult<()>;
}

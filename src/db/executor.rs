//! The single chokepoint through which every SQL statement runs.
//!
//! Each call runs in its own transaction: commit on success, rollback when
//! the transaction is dropped on any error path. Failures are logged here
//! and handed back as [`SqlOutcome::Failed`]; nothing above this layer sees
//! a raw `sqlx::Error`.

use log::{debug, error};
use serde_json::{Map, Value};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{Column, PgPool, Postgres, Row as _, TypeInfo, ValueRef};
use thiserror::Error;

use super::statement::{Statement, StatementError, SqlValue};
use super::StoreError;

/// A fetched row: column name to value, in the column order of the result set.
pub type Row = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecMode {
    /// Return the rows produced by the statement.
    Fetch,
    /// Return only the number of affected rows.
    Execute,
}

/// Uniform result of running a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlOutcome {
    Rows(Vec<Row>),
    Affected(u64),
    Failed(String),
}

impl SqlOutcome {
    pub fn into_rows(self) -> Result<Vec<Row>, StoreError> {
        match self {
            SqlOutcome::Rows(rows) => Ok(rows),
            SqlOutcome::Affected(_) => Err(StoreError::UnexpectedOutcome {
                expected: "rows",
                found: "affected row count",
            }),
            SqlOutcome::Failed(message) => Err(StoreError::Failed(message)),
        }
    }

    pub fn into_affected(self) -> Result<u64, StoreError> {
        match self {
            SqlOutcome::Affected(count) => Ok(count),
            SqlOutcome::Rows(_) => Err(StoreError::UnexpectedOutcome {
                expected: "affected row count",
                found: "rows",
            }),
            SqlOutcome::Failed(message) => Err(StoreError::Failed(message)),
        }
    }
}

#[derive(Debug, Error)]
enum ExecError {
    #[error(transparent)]
    Statement(#[from] StatementError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

#[derive(Clone)]
pub struct SqlExecutor {
    pool: PgPool,
}

impl SqlExecutor {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn fetch(&self, statement: &Statement) -> SqlOutcome {
        self.run(statement, ExecMode::Fetch).await
    }

    pub async fn execute(&self, statement: &Statement) -> SqlOutcome {
        self.run(statement, ExecMode::Execute).await
    }

    /// Run `statement` in a fresh transaction.
    pub async fn run(&self, statement: &Statement, mode: ExecMode) -> SqlOutcome {
        match self.try_run(statement, mode).await {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(
                    "SQL error: {} | detail: {:?} | statement: {}",
                    err,
                    err,
                    compact(statement.template())
                );
                SqlOutcome::Failed(err.to_string())
            }
        }
    }

    async fn try_run(&self, statement: &Statement, mode: ExecMode) -> Result<SqlOutcome, ExecError> {
        let compiled = statement.compile()?;
        debug!(
            "Executing ({:?}) {} with {} parameter(s)",
            mode,
            compact(&compiled.sql),
            compiled.values.len()
        );

        let mut tx = self.pool.begin().await?;

        let query = compiled
            .values
            .into_iter()
            .fold(sqlx::query(&compiled.sql), bind_value);

        let outcome = match mode {
            ExecMode::Fetch => {
                let rows = query.fetch_all(&mut *tx).await?;
                let rows = rows.iter().map(decode_row).collect::<Result<Vec<_>, _>>()?;
                SqlOutcome::Rows(rows)
            }
            ExecMode::Execute => {
                let result = query.execute(&mut *tx).await?;
                SqlOutcome::Affected(result.rows_affected())
            }
        };

        tx.commit().await?;
        Ok(outcome)
    }
}

fn bind_value<'q>(
    query: Query<'q, Postgres, PgArguments>,
    value: SqlValue,
) -> Query<'q, Postgres, PgArguments> {
    match value {
        SqlValue::Int(v) => query.bind(v),
        SqlValue::Text(v) => query.bind(v),
        SqlValue::Bool(v) => query.bind(v),
        SqlValue::Null => query.bind(None::<String>),
    }
}

fn decode_row(row: &PgRow) -> Result<Row, sqlx::Error> {
    let mut out = Row::new();
    for (idx, column) in row.columns().iter().enumerate() {
        let value = decode_column(row, idx, column.type_info().name())?;
        out.insert(column.name().to_string(), value);
    }
    Ok(out)
}

fn decode_column(row: &PgRow, idx: usize, type_name: &str) -> Result<Value, sqlx::Error> {
    if row.try_get_raw(idx)?.is_null() {
        return Ok(Value::Null);
    }

    let value = match type_name {
        "INT2" => Value::from(row.try_get::<i16, _>(idx)?),
        "INT4" => Value::from(row.try_get::<i32, _>(idx)?),
        "INT8" => Value::from(row.try_get::<i64, _>(idx)?),
        "FLOAT4" => Value::from(f64::from(row.try_get::<f32, _>(idx)?)),
        "FLOAT8" => Value::from(row.try_get::<f64, _>(idx)?),
        "BOOL" => Value::Bool(row.try_get::<bool, _>(idx)?),
        // Text-like columns; anything else fails to decode here.
        _ => Value::String(row.try_get::<String, _>(idx)?),
    };
    Ok(value)
}

/// Collapse whitespace so multi-line templates log on one line.
fn compact(sql: &str) -> String {
    sql.split_whitespace().collect::<Vec<_>>().join(" ")
}

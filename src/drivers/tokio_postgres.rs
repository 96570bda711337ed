use std::error::Error;

use async_trait::async_trait;
use bytes::BytesMut;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tokio_postgres::types::{to_sql_checked, IsNull, ToSql, Type};
use tokio_postgres::{Client, NoTls};

use crate::error::{CrudMapError, Result};
use crate::traits::DatabaseDriver;
use crate::types::{ExecuteResult, RawQueryResult, SqlValue};

/// PostgreSQL driver implementation using tokio-postgres.
pub struct TokioPostgresDriver {
    client: Client,
}

impl TokioPostgresDriver {
    /// Connect to a PostgreSQL database.
    pub async fn connect(connection_string: &str) -> Result<Self> {
        let (client, connection) = tokio_postgres::connect(connection_string, NoTls)
            .await
            .map_err(|e| CrudMapError::ConnectionFailed(e.to_string()))?;

        // Spawn the connection handler
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!(error = %e, "PostgreSQL connection error");
            }
        });

        Ok(Self { client })
    }
}

#[async_trait]
impl DatabaseDriver for TokioPostgresDriver {
    async fn query(&self, sql: &str, params: &[SqlValue]) -> Result<RawQueryResult> {
        let converted_params: Vec<Box<dyn ToSql + Sync + Send>> =
            params.iter().map(sql_value_to_tosql).collect();
        let param_refs = param_refs(&converted_params);

        let statement = self
            .client
            .prepare(sql)
            .await
            .map_err(|e| CrudMapError::QueryFailed(e.to_string()))?;
        let rows = self
            .client
            .query(&statement, &param_refs)
            .await
            .map_err(|e| CrudMapError::QueryFailed(e.to_string()))?;

        let columns: Vec<String> = statement
            .columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect();

        let result_rows = rows
            .iter()
            .map(|row| {
                row.columns()
                    .iter()
                    .enumerate()
                    .map(|(i, col)| row_value(row, i, col.type_()))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(RawQueryResult::new(columns, result_rows))
    }

    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<ExecuteResult> {
        let converted_params: Vec<Box<dyn ToSql + Sync + Send>> =
            params.iter().map(sql_value_to_tosql).collect();
        let param_refs = param_refs(&converted_params);

        let rows_affected = self
            .client
            .execute(sql, &param_refs)
            .await
            .map_err(|e| CrudMapError::QueryFailed(e.to_string()))?;

        Ok(ExecuteResult::affected(rows_affected))
    }
}

fn param_refs(params: &[Box<dyn ToSql + Sync + Send>]) -> Vec<&(dyn ToSql + Sync)> {
    params
        .iter()
        .map(|b| b.as_ref() as &(dyn ToSql + Sync))
        .collect()
}

/// NULL parameter accepted for a column of any type.
#[derive(Debug)]
struct UntypedNull;

impl ToSql for UntypedNull {
    fn to_sql(
        &self,
        _ty: &Type,
        _out: &mut BytesMut,
    ) -> std::result::Result<IsNull, Box<dyn Error + Sync + Send>> {
        Ok(IsNull::Yes)
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }

    to_sql_checked!();
}

/// Convert a SqlValue to a boxed ToSql trait object.
fn sql_value_to_tosql(value: &SqlValue) -> Box<dyn ToSql + Sync + Send> {
    match value {
        SqlValue::Null => Box::new(UntypedNull),
        SqlValue::Text(s) => Box::new(s.clone()),
        SqlValue::Int32(i) => Box::new(*i),
        SqlValue::Int64(i) => Box::new(*i),
        SqlValue::Float64(f) => Box::new(*f),
        SqlValue::Bool(b) => Box::new(*b),
        SqlValue::Date(d) => Box::new(*d),
        SqlValue::Timestamp(ts) => Box::new(*ts),
    }
}

/// Convert a row value at a given index to a SqlValue, by column type.
/// Types without a dedicated variant are read as text.
fn row_value(row: &tokio_postgres::Row, index: usize, ty: &Type) -> Result<SqlValue> {
    let value = if *ty == Type::BOOL {
        row.try_get::<_, Option<bool>>(index).map(SqlValue::from)
    } else if *ty == Type::INT2 {
        row.try_get::<_, Option<i16>>(index)
            .map(|v| SqlValue::from(v.map(i32::from)))
    } else if *ty == Type::INT4 {
        row.try_get::<_, Option<i32>>(index).map(SqlValue::from)
    } else if *ty == Type::INT8 {
        row.try_get::<_, Option<i64>>(index).map(SqlValue::from)
    } else if *ty == Type::FLOAT4 {
        row.try_get::<_, Option<f32>>(index)
            .map(|v| SqlValue::from(v.map(f64::from)))
    } else if *ty == Type::FLOAT8 {
        row.try_get::<_, Option<f64>>(index).map(SqlValue::from)
    } else if *ty == Type::DATE {
        row.try_get::<_, Option<NaiveDate>>(index).map(SqlValue::from)
    } else if *ty == Type::TIMESTAMP {
        row.try_get::<_, Option<NaiveDateTime>>(index)
            .map(SqlValue::from)
    } else if *ty == Type::TIMESTAMPTZ {
        row.try_get::<_, Option<DateTime<Utc>>>(index)
            .map(|v| SqlValue::from(v.map(|ts| ts.naive_utc())))
    } else {
        row.try_get::<_, Option<String>>(index).map(SqlValue::from)
    };

    value.map_err(|e| {
        CrudMapError::QueryFailed(format!(
            "cannot read column {} of type {}: {}",
            index,
            ty.name(),
            e
        ))
    })
}

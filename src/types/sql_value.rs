use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Represents a SQL parameter or cell value in a driver-agnostic way.
/// Drivers are responsible for converting these to and from their native types.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Text(String),
    Int32(i32),
    Int64(i64),
    Float64(f64),
    Bool(bool),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
}

impl SqlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Short name of the variant, used in conversion errors.
    pub fn kind(&self) -> &'static str {
        match self {
            SqlValue::Null => "NULL",
            SqlValue::Text(_) => "text",
            SqlValue::Int32(_) => "int4",
            SqlValue::Int64(_) => "int8",
            SqlValue::Float64(_) => "float8",
            SqlValue::Bool(_) => "bool",
            SqlValue::Date(_) => "date",
            SqlValue::Timestamp(_) => "timestamp",
        }
    }
}

/// Why a `SqlValue` could not be converted into a field's type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    #[error("expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("unexpected NULL for a non-optional field")]
    UnexpectedNull,

    #[error("{value} does not fit in {target}")]
    OutOfRange { value: i64, target: &'static str },
}

impl ValueError {
    fn mismatch(expected: &'static str, actual: &SqlValue) -> Self {
        ValueError::TypeMismatch {
            expected,
            actual: actual.kind(),
        }
    }
}

/// Conversion from a `SqlValue` read out of a result row into a Rust field type.
pub trait FromSqlValue: Sized {
    fn from_sql_value(value: SqlValue) -> Result<Self, ValueError>;
}

impl<T: FromSqlValue> FromSqlValue for Option<T> {
    fn from_sql_value(value: SqlValue) -> Result<Self, ValueError> {
        match value {
            SqlValue::Null => Ok(None),
            other => T::from_sql_value(other).map(Some),
        }
    }
}

impl FromSqlValue for String {
    fn from_sql_value(value: SqlValue) -> Result<Self, ValueError> {
        match value {
            SqlValue::Text(s) => Ok(s),
            SqlValue::Null => Err(ValueError::UnexpectedNull),
            other => Err(ValueError::mismatch("text", &other)),
        }
    }
}

impl FromSqlValue for i32 {
    fn from_sql_value(value: SqlValue) -> Result<Self, ValueError> {
        match value {
            SqlValue::Int32(i) => Ok(i),
            SqlValue::Int64(i) => i32::try_from(i).map_err(|_| ValueError::OutOfRange {
                value: i,
                target: "i32",
            }),
            SqlValue::Null => Err(ValueError::UnexpectedNull),
            other => Err(ValueError::mismatch("int4", &other)),
        }
    }
}

impl FromSqlValue for i64 {
    fn from_sql_value(value: SqlValue) -> Result<Self, ValueError> {
        match value {
            SqlValue::Int64(i) => Ok(i),
            SqlValue::Int32(i) => Ok(i64::from(i)),
            SqlValue::Null => Err(ValueError::UnexpectedNull),
            other => Err(ValueError::mismatch("int8", &other)),
        }
    }
}

impl FromSqlValue for f64 {
    fn from_sql_value(value: SqlValue) -> Result<Self, ValueError> {
        match value {
            SqlValue::Float64(f) => Ok(f),
            SqlValue::Int32(i) => Ok(f64::from(i)),
            SqlValue::Null => Err(ValueError::UnexpectedNull),
            other => Err(ValueError::mismatch("float8", &other)),
        }
    }
}

impl FromSqlValue for bool {
    fn from_sql_value(value: SqlValue) -> Result<Self, ValueError> {
        match value {
            SqlValue::Bool(b) => Ok(b),
            SqlValue::Null => Err(ValueError::UnexpectedNull),
            other => Err(ValueError::mismatch("bool", &other)),
        }
    }
}

impl FromSqlValue for NaiveDate {
    fn from_sql_value(value: SqlValue) -> Result<Self, ValueError> {
        match value {
            SqlValue::Date(d) => Ok(d),
            SqlValue::Null => Err(ValueError::UnexpectedNull),
            other => Err(ValueError::mismatch("date", &other)),
        }
    }
}

impl FromSqlValue for NaiveDateTime {
    fn from_sql_value(value: SqlValue) -> Result<Self, ValueError> {
        match value {
            SqlValue::Timestamp(ts) => Ok(ts),
            SqlValue::Null => Err(ValueError::UnexpectedNull),
            other => Err(ValueError::mismatch("timestamp", &other)),
        }
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Int32(value)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int64(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Float64(value)
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

impl From<NaiveDate> for SqlValue {
    fn from(value: NaiveDate) -> Self {
        SqlValue::Date(value)
    }
}

impl From<NaiveDateTime> for SqlValue {
    fn from(value: NaiveDateTime) -> Self {
        SqlValue::Timestamp(value)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => SqlValue::Null,
        }
    }
}

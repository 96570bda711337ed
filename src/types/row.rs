use std::collections::HashMap;

use crate::{
    error::{CrudMapError, Result},
    naming,
    traits::FieldSet,
    types::SqlValue,
};

/// Driver-agnostic raw result from a row-returning statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawQueryResult {
    /// Column names in order
    pub columns: Vec<String>,
    /// Rows, where each row holds one value per column in column order
    pub rows: Vec<Vec<SqlValue>>,
}

impl RawQueryResult {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<SqlValue>>) -> Self {
        Self { columns, rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

/// Driver-agnostic outcome of a statement that returns no rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecuteResult {
    pub rows_affected: u64,
    /// Key generated by the store for an INSERT, when the driver can report it.
    pub last_insert_id: Option<i64>,
}

impl ExecuteResult {
    pub fn affected(rows_affected: u64) -> Self {
        Self {
            rows_affected,
            last_insert_id: None,
        }
    }

    pub fn inserted(last_insert_id: i64) -> Self {
        Self {
            rows_affected: 1,
            last_insert_id: Some(last_insert_id),
        }
    }
}

/// A single row result from a query, accessed by column name.
#[derive(Debug, Clone)]
pub struct Row {
    values: HashMap<String, SqlValue>,
}

impl Row {
    /// Creates a new Row from column names and values.
    pub(crate) fn new(columns: &[String], values: Vec<SqlValue>) -> Self {
        let values = columns.iter().cloned().zip(values).collect();
        Self { values }
    }

    /// Gets a value by column name.
    pub fn get(&self, column: &str) -> Result<&SqlValue> {
        self.values
            .get(column)
            .ok_or_else(|| CrudMapError::ColumnNotFound(column.to_string()))
    }

    /// Removes a value by column name, handing ownership to the caller.
    pub fn take(&mut self, column: &str) -> Result<SqlValue> {
        self.values
            .remove(column)
            .ok_or_else(|| CrudMapError::ColumnNotFound(column.to_string()))
    }

    /// Builds a record by feeding each declared field the value of its column.
    pub fn decode<T: FieldSet + Default>(mut self) -> Result<T> {
        let mut record = T::default();
        for field in T::fields() {
            let value = self.take(&naming::column_name(field.name))?;
            field.write(&mut record, value)?;
        }
        Ok(record)
    }

    /// Returns all column names in this row.
    pub fn columns(&self) -> Vec<&str> {
        self.values.keys().map(|s| s.as_str()).collect()
    }

    /// Returns the number of columns in this row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if this row has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Result of a query execution, containing zero or more rows.
#[derive(Debug)]
pub struct QueryResult {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl QueryResult {
    /// Creates a QueryResult from a RawQueryResult.
    pub fn from_raw(raw: RawQueryResult) -> Self {
        let rows = raw
            .rows
            .into_iter()
            .map(|values| Row::new(&raw.columns, values))
            .collect();
        Self {
            columns: raw.columns,
            rows,
        }
    }

    /// Extracts a single row from the result.
    /// Returns an error if the result contains zero or more than one row.
    pub fn single_row(self) -> Result<Row> {
        match self.optional_row()? {
            Some(row) => Ok(row),
            None => Err(CrudMapError::UnexpectedRowCount {
                expected: 1,
                actual: 0,
            }),
        }
    }

    /// Extracts at most one row from the result.
    /// Zero rows is `None`; more than one row is an error.
    pub fn optional_row(self) -> Result<Option<Row>> {
        if self.rows.len() > 1 {
            return Err(CrudMapError::UnexpectedRowCount {
                expected: 1,
                actual: self.rows.len(),
            });
        }
        Ok(self.rows.into_iter().next())
    }

    /// Returns all rows from the result.
    pub fn rows(self) -> Vec<Row> {
        self.rows
    }

    /// Returns the column names from this result.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the number of rows in this result.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if this result contains no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

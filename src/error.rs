use thiserror::Error;

use crate::types::ValueError;

/// Error type for crudmap operations
#[derive(Debug, Error)]
pub enum CrudMapError {
    /// The entity descriptor cannot be used to derive SQL.
    #[error("Invalid mapper configuration: {0}")]
    Configuration(String),

    #[error("Cannot access field `{field}` of {entity}: {source}")]
    AttributeAccess {
        entity: &'static str,
        field: &'static str,
        #[source]
        source: ValueError,
    },

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Expected {expected} row(s), got {actual}")]
    UnexpectedRowCount { expected: usize, actual: usize },

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Insert into {0} returned no generated key")]
    MissingGeneratedKey(String),

    #[error("Configuration could not be loaded: {0}")]
    Config(String),
}

/// Result type alias for crudmap operations
pub type Result<T> = std::result::Result<T, CrudMapError>;

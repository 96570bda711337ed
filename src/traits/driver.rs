use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ExecuteResult, RawQueryResult, SqlValue};

/// Trait for database driver implementations.
/// Drivers are responsible for:
/// - Connecting to the database
/// - Converting SqlValue parameters to native types
/// - Executing statements and converting results back to SqlValue
#[async_trait]
pub trait DatabaseDriver: Send + Sync {
    /// Run a row-returning statement (SELECT, or INSERT ... RETURNING).
    async fn query(&self, sql: &str, params: &[SqlValue]) -> Result<RawQueryResult>;

    /// Run a statement that returns no rows and report what it changed.
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<ExecuteResult>;
}

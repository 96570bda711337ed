use std::sync::Arc;

use crate::config::ClientConfig;
use crate::dialect::{Dialect, DialectKind, Postgres};
use crate::drivers::TokioPostgresDriver;
use crate::error::{CrudMapError, Result};
use crate::mapper::CrudMapper;
use crate::traits::{DatabaseDriver, Entity, FieldSet};

/// Main entry point for crudmap.
/// Holds a database driver and the dialect statements are rendered in.
pub struct CrudClient {
    driver: Arc<dyn DatabaseDriver>,
    dialect: Arc<dyn Dialect>,
}

impl CrudClient {
    /// Connect to the PostgreSQL database described by `config`.
    ///
    /// The bundled driver only speaks PostgreSQL, so any other dialect is a
    /// configuration error. Other dialects go through [`with_driver`](Self::with_driver)
    /// and [`with_dialect`](Self::with_dialect) with a driver that understands them.
    ///
    /// # Example
    /// ```ignore
    /// let client = CrudClient::connect(&ClientConfig::from_env()?).await?;
    /// ```
    pub async fn connect(config: &ClientConfig) -> Result<Self> {
        if config.dialect != DialectKind::Postgres {
            return Err(CrudMapError::Config(format!(
                "the PostgreSQL driver cannot run statements in the {} dialect",
                config.dialect
            )));
        }

        let driver = TokioPostgresDriver::connect(&config.database_url).await?;
        Ok(Self {
            driver: Arc::new(driver),
            dialect: config.dialect.dialect(),
        })
    }

    /// Create a new client with a custom driver and the PostgreSQL dialect.
    /// Useful for testing or using alternative database drivers.
    pub fn with_driver(driver: Arc<dyn DatabaseDriver>) -> Self {
        Self {
            driver,
            dialect: Arc::new(Postgres),
        }
    }

    /// Replace the dialect statements are rendered in.
    pub fn with_dialect(mut self, dialect: Arc<dyn Dialect>) -> Self {
        self.dialect = dialect;
        self
    }

    /// The driver statements are sent to.
    pub fn driver(&self) -> Arc<dyn DatabaseDriver> {
        Arc::clone(&self.driver)
    }

    /// Create a mapper for `E`, filtered by criteria of the same type.
    pub fn mapper<E: Entity>(&self) -> Result<CrudMapper<E>> {
        self.criteria_mapper()
    }

    /// Create a mapper for `E` filtered by a separate criteria type `C`.
    pub fn criteria_mapper<E: Entity, C: FieldSet>(&self) -> Result<CrudMapper<E, C>> {
        CrudMapper::new(Arc::clone(&self.driver), Arc::clone(&self.dialect))
    }
}

use serde::{Deserialize, Serialize};

use crate::dialect::DialectKind;
use crate::error::{CrudMapError, Result};

/// Environment variable holding the database connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Environment variable selecting the SQL dialect.
pub const DIALECT_VAR: &str = "CRUDMAP_DIALECT";

/// Connection settings for a [`CrudClient`](crate::CrudClient).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub database_url: String,
    #[serde(default)]
    pub dialect: DialectKind,
}

impl ClientConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            dialect: DialectKind::default(),
        }
    }

    pub fn with_dialect(mut self, dialect: DialectKind) -> Self {
        self.dialect = dialect;
        self
    }

    /// Load settings from the process environment, after reading a `.env`
    /// file if one exists. Variables already set are never overwritten.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| CrudMapError::Config(format!("{} is not set", DATABASE_URL_VAR)))?;

        let dialect = match lookup(DIALECT_VAR) {
            Some(name) => name.parse()?,
            None => DialectKind::default(),
        };

        Ok(Self {
            database_url,
            dialect,
        })
    }
}

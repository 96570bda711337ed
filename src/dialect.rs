//! SQL dialect differences that leak into generated statements.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::CrudMapError;

/// Placeholder syntax and the few clauses that vary between SQL dialects.
pub trait Dialect: Send + Sync {
    /// Placeholder for the `index`-th (1-based) parameter, bound to field `name`.
    fn placeholder(&self, index: usize, name: &str) -> String;

    /// Suffix bounding a SELECT to `limit` rows starting at `offset`.
    fn limit_offset(&self, limit: u64, offset: u64) -> String {
        format!(" LIMIT {} OFFSET {}", limit, offset)
    }

    /// Literal rendered in VALUES instead of a placeholder when the primary
    /// key is NULL, so the store generates it.
    fn absent_key_value(&self) -> Option<&'static str> {
        None
    }

    /// Suffix making an INSERT return the generated `column`.
    fn returning(&self, _column: &str) -> Option<String> {
        None
    }
}

/// PostgreSQL: `$1, $2, ...`, identity keys through `DEFAULT ... RETURNING`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Postgres;

impl Dialect for Postgres {
    fn placeholder(&self, index: usize, _name: &str) -> String {
        format!("${}", index)
    }

    fn absent_key_value(&self) -> Option<&'static str> {
        Some("DEFAULT")
    }

    fn returning(&self, column: &str) -> Option<String> {
        Some(format!(" RETURNING {}", column))
    }
}

/// `?` placeholders, as used by MySQL and SQLite drivers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generic;

impl Dialect for Generic {
    fn placeholder(&self, _index: usize, _name: &str) -> String {
        "?".to_string()
    }
}

/// Named `#{field}` placeholders for drivers that bind by name.
#[derive(Debug, Clone, Copy, Default)]
pub struct Named;

impl Dialect for Named {
    fn placeholder(&self, _index: usize, name: &str) -> String {
        format!("#{{{}}}", name)
    }
}

/// Configurable choice of the built-in dialects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    #[default]
    Postgres,
    Generic,
    Named,
}

impl DialectKind {
    pub fn dialect(self) -> Arc<dyn Dialect> {
        match self {
            DialectKind::Postgres => Arc::new(Postgres),
            DialectKind::Generic => Arc::new(Generic),
            DialectKind::Named => Arc::new(Named),
        }
    }
}

impl FromStr for DialectKind {
    type Err = CrudMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(DialectKind::Postgres),
            "generic" => Ok(DialectKind::Generic),
            "named" => Ok(DialectKind::Named),
            other => Err(CrudMapError::Config(format!("unknown dialect `{}`", other))),
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DialectKind::Postgres => "postgres",
            DialectKind::Generic => "generic",
            DialectKind::Named => "named",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders() {
        assert_eq!(Postgres.placeholder(3, "title"), "$3");
        assert_eq!(Generic.placeholder(3, "title"), "?");
        assert_eq!(Named.placeholder(3, "title"), "#{title}");
    }

    #[test]
    fn test_generated_key_support() {
        assert_eq!(Postgres.absent_key_value(), Some("DEFAULT"));
        assert_eq!(Postgres.returning("id").as_deref(), Some(" RETURNING id"));
        assert_eq!(Generic.absent_key_value(), None);
        assert!(Named.returning("id").is_none());
    }

    #[test]
    fn test_limit_offset() {
        assert_eq!(Generic.limit_offset(10, 20), " LIMIT 10 OFFSET 20");
    }

    #[test]
    fn test_dialect_kind_parsing() {
        assert_eq!("PostgreSQL".parse::<DialectKind>().unwrap(), DialectKind::Postgres);
        assert_eq!(" named ".parse::<DialectKind>().unwrap(), DialectKind::Named);
        assert!(matches!(
            "oracle".parse::<DialectKind>(),
            Err(CrudMapError::Config(_))
        ));
        assert_eq!(DialectKind::Generic.to_string(), "generic");
    }
}

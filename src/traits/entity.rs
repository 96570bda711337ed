use std::collections::HashSet;

use crate::error::{CrudMapError, Result};
use crate::naming;
use crate::traits::{Field, FieldSet};

/// A record type stored one-to-one in a table named after the type.
pub trait Entity: FieldSet + Default + Send + Sync {
    /// Declared name of the primary key field.
    fn primary_key() -> &'static str {
        "id"
    }

    /// Table name derived from the type name.
    fn table_name() -> String {
        naming::table_name(Self::type_name())
    }

    /// The primary key field.
    fn key_field() -> Result<&'static Field<Self>> {
        Self::field(Self::primary_key()).ok_or_else(|| {
            CrudMapError::Configuration(format!(
                "{} declares no primary key field `{}`",
                Self::type_name(),
                Self::primary_key()
            ))
        })
    }
}

/// Checks that a field set can be mapped to columns unambiguously.
pub fn validate_fields<T: FieldSet>() -> Result<()> {
    let fields = T::fields();
    if fields.is_empty() {
        return Err(CrudMapError::Configuration(format!(
            "{} declares no fields",
            T::type_name()
        )));
    }

    let mut seen = HashSet::with_capacity(fields.len());
    for field in fields {
        let column = field.column();
        if !seen.insert(column.clone()) {
            return Err(CrudMapError::Configuration(format!(
                "{}.{} maps to column `{}` which is already taken",
                T::type_name(),
                field.name,
                column
            )));
        }
    }
    Ok(())
}

/// Checks an entity's descriptor before any SQL is derived from it.
pub fn validate_entity<E: Entity>() -> Result<()> {
    validate_fields::<E>()?;
    E::key_field().map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::entity! {
        #[derive(Default)]
        struct Todo {
            id: Option<i32>,
            title: Option<String>,
        }
    }

    crate::entity! {
        #[derive(Default)]
        struct Keyless {
            title: Option<String>,
        }
    }

    crate::entity! {
        #[derive(Default)]
        #[allow(non_snake_case)]
        struct Clash {
            id: Option<i32>,
            createdAt: Option<String>,
            created_at: Option<String>,
        }
    }

    #[test]
    fn test_table_name_and_key() {
        assert_eq!(Todo::table_name(), "todo");
        assert_eq!(Todo::key_field().unwrap().name, "id");
        assert!(validate_entity::<Todo>().is_ok());
    }

    #[test]
    fn test_missing_key_is_configuration_error() {
        let err = validate_entity::<Keyless>().unwrap_err();
        assert!(matches!(err, CrudMapError::Configuration(msg) if msg.contains("Keyless")));
    }

    #[test]
    fn test_column_clash_is_configuration_error() {
        let err = validate_entity::<Clash>().unwrap_err();
        assert!(matches!(err, CrudMapError::Configuration(msg) if msg.contains("created_at")));
    }
}

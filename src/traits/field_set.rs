use crate::error::{CrudMapError, Result};
use crate::naming;
use crate::types::{SqlValue, ValueError};

/// A registered field of `T`: its declared name plus value accessors.
pub struct Field<T> {
    pub name: &'static str,
    get: fn(&T) -> SqlValue,
    set: fn(&mut T, SqlValue) -> std::result::Result<(), ValueError>,
}

impl<T> Field<T> {
    pub const fn new(
        name: &'static str,
        get: fn(&T) -> SqlValue,
        set: fn(&mut T, SqlValue) -> std::result::Result<(), ValueError>,
    ) -> Self {
        Self { name, get, set }
    }

    /// Column this field maps to.
    pub fn column(&self) -> String {
        naming::column_name(self.name)
    }

    /// Current value of this field on `record`; `SqlValue::Null` when absent.
    pub fn read(&self, record: &T) -> SqlValue {
        (self.get)(record)
    }
}

impl<T: FieldSet> Field<T> {
    /// Stores `value` into this field of `record`.
    pub fn write(&self, record: &mut T, value: SqlValue) -> Result<()> {
        (self.set)(record, value).map_err(|source| CrudMapError::AttributeAccess {
            entity: T::type_name(),
            field: self.name,
            source,
        })
    }
}

impl<T> std::fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish()
    }
}

/// Static field metadata of a record type.
/// Implementations are normally generated with [`fields!`](crate::fields)
/// or [`entity!`](crate::entity), which wrap the struct declaration so every
/// field is registered in the order it is declared.
pub trait FieldSet: Sized + 'static {
    /// Simple name of the type, as written in source.
    fn type_name() -> &'static str;

    /// Every data-carrying field, in declaration order.
    fn fields() -> &'static [Field<Self>];

    /// Looks a field up by its declared name.
    fn field(name: &str) -> Option<&'static Field<Self>> {
        Self::fields().iter().find(|f| f.name == name)
    }

    /// Column names of all fields, in declaration order.
    fn column_names() -> Vec<String> {
        Self::fields().iter().map(Field::column).collect()
    }

    /// Fields of `self` currently holding a non-null value, with that value.
    fn present_values(&self) -> Vec<(&'static Field<Self>, SqlValue)> {
        Self::fields()
            .iter()
            .filter_map(|field| {
                let value = field.read(self);
                (!value.is_null()).then_some((field, value))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    crate::fields! {
        #[derive(Debug, Default)]
        struct Todo {
            id: Option<i32>,
            title: Option<String>,
            finished: Option<bool>,
            #[allow(non_snake_case)]
            createdAt: Option<NaiveDate>,
        }
    }

    #[test]
    fn test_columns_follow_declaration_order() {
        assert_eq!(Todo::type_name(), "Todo");
        assert_eq!(
            Todo::column_names(),
            vec!["id", "title", "finished", "created_at"]
        );
    }

    #[test]
    fn test_present_values_skip_null() {
        let todo = Todo {
            title: Some("test".to_string()),
            finished: Some(false),
            ..Default::default()
        };
        let present: Vec<_> = todo
            .present_values()
            .into_iter()
            .map(|(f, v)| (f.name, v))
            .collect();
        assert_eq!(
            present,
            vec![
                ("title", SqlValue::Text("test".to_string())),
                ("finished", SqlValue::Bool(false)),
            ]
        );
    }

    #[test]
    fn test_write_through_field() {
        let mut todo = Todo::default();
        Todo::field("id")
            .unwrap()
            .write(&mut todo, SqlValue::Int64(9))
            .unwrap();
        assert_eq!(todo.id, Some(9));
        assert!(Todo::field("missing").is_none());
    }
}

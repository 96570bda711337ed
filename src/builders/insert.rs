use crate::dialect::Dialect;
use crate::error::Result;
use crate::traits::Entity;
use crate::types::{ParamBinder, Statement};

/// INSERT of every entity field, in declaration order.
pub struct Insert<'a, E: Entity> {
    dialect: &'a dyn Dialect,
    entity: &'a E,
}

impl<'a, E: Entity> Insert<'a, E> {
    pub fn new(dialect: &'a dyn Dialect, entity: &'a E) -> Self {
        Self { dialect, entity }
    }

    /// Whether the rendered statement returns the generated key as a row.
    pub fn returns_key(&self) -> bool {
        self.dialect.returning(E::primary_key()).is_some()
    }

    pub fn build(&self) -> Result<Statement> {
        let key = E::key_field()?;
        let mut binder = ParamBinder::new(self.dialect);

        let values: Vec<String> = E::fields()
            .iter()
            .map(|field| {
                let value = field.read(self.entity);
                match self.dialect.absent_key_value() {
                    Some(literal) if field.name == key.name && value.is_null() => {
                        literal.to_string()
                    }
                    _ => binder.bind(field.name, value),
                }
            })
            .collect();

        let mut sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            E::table_name(),
            E::column_names().join(", "),
            values.join(", ")
        );
        if let Some(returning) = self.dialect.returning(&key.column()) {
            sql.push_str(&returning);
        }

        Ok(binder.finish(sql))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::fixtures::{created_at, deadline, sample};
    use crate::dialect::{Generic, Named, Postgres};
    use crate::types::SqlValue;

    #[test]
    fn test_postgres_insert_defaults_absent_key() {
        let todo = sample();
        let stmt = Insert::new(&Postgres, &todo).build().unwrap();

        assert_eq!(
            stmt.sql,
            "INSERT INTO todo (id, title, finished, created_at, deadline, finished_at) \
             VALUES (DEFAULT, $1, $2, $3, $4, $5) RETURNING id"
        );
        assert_eq!(
            stmt.values(),
            vec![
                SqlValue::Text("test".to_string()),
                SqlValue::Bool(false),
                SqlValue::Timestamp(created_at()),
                SqlValue::Date(deadline()),
                SqlValue::Null,
            ]
        );
        assert!(Insert::new(&Postgres, &todo).returns_key());
    }

    #[test]
    fn test_postgres_insert_binds_explicit_key() {
        let mut todo = sample();
        todo.id = Some(42);
        let stmt = Insert::new(&Postgres, &todo).build().unwrap();

        assert!(stmt.sql.contains("VALUES ($1, $2, $3, $4, $5, $6)"));
        assert_eq!(stmt.values()[0], SqlValue::Int32(42));
    }

    #[test]
    fn test_named_insert_binds_every_field_by_name() {
        let todo = sample();
        let stmt = Insert::new(&Named, &todo).build().unwrap();

        assert_eq!(
            stmt.sql,
            "INSERT INTO todo (id, title, finished, created_at, deadline, finished_at) \
             VALUES (#{id}, #{title}, #{finished}, #{createdAt}, #{deadline}, #{finishedAt})"
        );
        assert_eq!(
            stmt.param_names(),
            vec!["id", "title", "finished", "createdAt", "deadline", "finishedAt"]
        );
        assert_eq!(stmt.values()[0], SqlValue::Null);
        assert!(!Insert::new(&Generic, &todo).returns_key());
    }
}

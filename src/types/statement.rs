use crate::dialect::Dialect;
use crate::types::SqlValue;

/// A parameter value bound to the field name its placeholder stands for.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundParam {
    pub name: &'static str,
    pub value: SqlValue,
}

/// A generated SQL statement together with its ordered parameter bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<BoundParam>,
}

impl Statement {
    /// Positional parameter values, in placeholder order.
    pub fn values(&self) -> Vec<SqlValue> {
        self.params.iter().map(|p| p.value.clone()).collect()
    }

    /// Field names of the bound parameters, in placeholder order.
    pub fn param_names(&self) -> Vec<&'static str> {
        self.params.iter().map(|p| p.name).collect()
    }
}

/// Collects parameters while a statement is rendered and hands out
/// the dialect's placeholder for each one.
pub struct ParamBinder<'a> {
    dialect: &'a dyn Dialect,
    params: Vec<BoundParam>,
}

impl<'a> ParamBinder<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            dialect,
            params: Vec::new(),
        }
    }

    /// Binds `value` under `name` and returns the placeholder to splice into the SQL.
    pub fn bind(&mut self, name: &'static str, value: SqlValue) -> String {
        self.params.push(BoundParam { name, value });
        self.dialect.placeholder(self.params.len(), name)
    }

    pub fn finish(self, sql: String) -> Statement {
        Statement {
            sql,
            params: self.params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{Named, Postgres};

    #[test]
    fn test_binder_numbers_placeholders() {
        let mut binder = ParamBinder::new(&Postgres);
        assert_eq!(binder.bind("title", "a".into()), "$1");
        assert_eq!(binder.bind("id", SqlValue::Int32(1)), "$2");

        let stmt = binder.finish("UPDATE todo SET title = $1 WHERE id = $2".to_string());
        assert_eq!(stmt.param_names(), vec!["title", "id"]);
        assert_eq!(
            stmt.values(),
            vec![SqlValue::Text("a".to_string()), SqlValue::Int32(1)]
        );
    }

    #[test]
    fn test_binder_named_placeholders() {
        let mut binder = ParamBinder::new(&Named);
        assert_eq!(binder.bind("createdAt", SqlValue::Null), "#{createdAt}");
    }
}

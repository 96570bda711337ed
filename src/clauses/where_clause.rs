use crate::traits::{Field, FieldSet};
use crate::types::{ParamBinder, SqlValue};

/// Represents a WHERE clause condition built from equality predicates.
#[derive(Debug, Clone, PartialEq)]
pub enum WhereClause {
    /// column = value, bound under the field's name
    Eq {
        column: String,
        name: &'static str,
        value: SqlValue,
    },
    /// clause AND clause
    And(Box<WhereClause>, Box<WhereClause>),
}

impl WhereClause {
    /// Creates an equality condition on `field`: column = value
    pub fn eq<T, V: Into<SqlValue>>(field: &Field<T>, value: V) -> Self {
        WhereClause::Eq {
            column: field.column(),
            name: field.name,
            value: value.into(),
        }
    }

    /// Combines this clause with another using AND
    pub fn and(self, other: WhereClause) -> Self {
        WhereClause::And(Box::new(self), Box::new(other))
    }

    /// Builds the filter for a sparse criteria value: one equality per
    /// non-null field, in declaration order, joined with AND.
    /// `None` when nothing constrains the query, including a missing criteria.
    pub fn from_criteria<C: FieldSet>(criteria: Option<&C>) -> Option<Self> {
        criteria?
            .present_values()
            .into_iter()
            .map(|(field, value)| WhereClause::eq(field, value))
            .reduce(WhereClause::and)
    }

    /// Number of equality predicates in this clause.
    pub fn predicate_count(&self) -> usize {
        match self {
            WhereClause::Eq { .. } => 1,
            WhereClause::And(left, right) => left.predicate_count() + right.predicate_count(),
        }
    }

    /// Builds the SQL fragment, binding each value through `binder`.
    pub fn build_sql(&self, binder: &mut ParamBinder<'_>) -> String {
        match self {
            WhereClause::Eq {
                column,
                name,
                value,
            } => {
                let placeholder = binder.bind(*name, value.clone());
                format!("{} = {}", column, placeholder)
            }
            WhereClause::And(left, right) => {
                let left_sql = left.build_sql(binder);
                let right_sql = right.build_sql(binder);
                format!("{} AND {}", left_sql, right_sql)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{Named, Postgres};

    crate::fields! {
        #[derive(Default)]
        #[allow(non_snake_case)]
        struct TodoCriteria {
            title: Option<String>,
            finished: Option<bool>,
            createdAt: Option<i64>,
        }
    }

    fn render(clause: &WhereClause) -> (String, Vec<SqlValue>) {
        let mut binder = ParamBinder::new(&Postgres);
        let sql = clause.build_sql(&mut binder);
        (sql, binder.finish(String::new()).values())
    }

    #[test]
    fn test_eq_clause() {
        let clause = WhereClause::eq(TodoCriteria::field("title").unwrap(), "John");
        let (sql, params) = render(&clause);

        assert_eq!(sql, "title = $1");
        assert_eq!(params, vec![SqlValue::Text("John".to_string())]);
    }

    #[test]
    fn test_and_clause() {
        let clause = WhereClause::eq(TodoCriteria::field("title").unwrap(), "John")
            .and(WhereClause::eq(TodoCriteria::field("createdAt").unwrap(), 30i64));
        let (sql, params) = render(&clause);

        assert_eq!(sql, "title = $1 AND created_at = $2");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_empty_criteria_has_no_clause() {
        assert!(WhereClause::from_criteria(Some(&TodoCriteria::default())).is_none());
        assert!(WhereClause::from_criteria::<TodoCriteria>(None).is_none());
    }

    #[test]
    fn test_single_field_criteria() {
        let criteria = TodoCriteria {
            finished: Some(true),
            ..Default::default()
        };
        let clause = WhereClause::from_criteria(Some(&criteria)).unwrap();
        assert_eq!(clause.predicate_count(), 1);
        assert_eq!(render(&clause).0, "finished = $1");
    }

    #[test]
    fn test_criteria_keeps_declaration_order() {
        let criteria = TodoCriteria {
            title: Some("a".to_string()),
            finished: Some(false),
            createdAt: Some(5),
        };
        let clause = WhereClause::from_criteria(Some(&criteria)).unwrap();
        assert_eq!(clause.predicate_count(), 3);

        let mut binder = ParamBinder::new(&Named);
        assert_eq!(
            clause.build_sql(&mut binder),
            "title = #{title} AND finished = #{finished} AND created_at = #{createdAt}"
        );
    }
}

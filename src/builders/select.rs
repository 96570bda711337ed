use std::marker::PhantomData;

use crate::builders::where_key;
use crate::clauses::WhereClause;
use crate::dialect::Dialect;
use crate::error::Result;
use crate::traits::{Entity, FieldSet};
use crate::types::{PageRequest, ParamBinder, SqlValue, Statement};

/// SELECT of every entity column for the row with the given primary key.
pub struct FindOne<'a, E: Entity> {
    dialect: &'a dyn Dialect,
    id: SqlValue,
    _entity: PhantomData<E>,
}

impl<'a, E: Entity> FindOne<'a, E> {
    pub fn new(dialect: &'a dyn Dialect, id: impl Into<SqlValue>) -> Self {
        Self {
            dialect,
            id: id.into(),
            _entity: PhantomData,
        }
    }

    pub fn build(&self) -> Result<Statement> {
        let mut binder = ParamBinder::new(self.dialect);
        let mut sql = select_columns::<E>();
        sql.push_str(&where_key::<E>(&mut binder, self.id.clone())?);
        Ok(binder.finish(sql))
    }
}

/// SELECT of every entity column filtered by a sparse criteria value.
/// Can optionally be bounded by a page request.
pub struct SelectByCriteria<'a, E: Entity, C: FieldSet> {
    dialect: &'a dyn Dialect,
    criteria: Option<&'a C>,
    page: Option<PageRequest>,
    _entity: PhantomData<E>,
}

impl<'a, E: Entity, C: FieldSet> SelectByCriteria<'a, E, C> {
    pub fn new(dialect: &'a dyn Dialect, criteria: Option<&'a C>) -> Self {
        Self {
            dialect,
            criteria,
            page: None,
            _entity: PhantomData,
        }
    }

    /// Bound the result to the rows of `page`.
    pub fn page(mut self, page: PageRequest) -> Self {
        self.page = Some(page);
        self
    }

    pub fn build(&self) -> Statement {
        let mut binder = ParamBinder::new(self.dialect);
        let mut sql = select_columns::<E>();
        push_filter(&mut sql, &mut binder, self.criteria);

        if let Some(page) = self.page {
            sql.push_str(&self.dialect.limit_offset(page.size, page.offset));
        }

        binder.finish(sql)
    }
}

/// SELECT count(*) filtered by a sparse criteria value.
pub struct CountByCriteria<'a, E: Entity, C: FieldSet> {
    dialect: &'a dyn Dialect,
    criteria: Option<&'a C>,
    _entity: PhantomData<E>,
}

impl<'a, E: Entity, C: FieldSet> CountByCriteria<'a, E, C> {
    pub fn new(dialect: &'a dyn Dialect, criteria: Option<&'a C>) -> Self {
        Self {
            dialect,
            criteria,
            _entity: PhantomData,
        }
    }

    pub fn build(&self) -> Statement {
        let mut binder = ParamBinder::new(self.dialect);
        let mut sql = format!("SELECT count(*) FROM {}", E::table_name());
        push_filter(&mut sql, &mut binder, self.criteria);
        binder.finish(sql)
    }
}

fn select_columns<E: Entity>() -> String {
    format!(
        "SELECT {} FROM {}",
        E::column_names().join(", "),
        E::table_name()
    )
}

// No predicates means no WHERE at all: the query matches every row.
fn push_filter<C: FieldSet>(
    sql: &mut String,
    binder: &mut ParamBinder<'_>,
    criteria: Option<&C>,
) {
    if let Some(clause) = WhereClause::from_criteria(criteria) {
        sql.push_str(" WHERE ");
        sql.push_str(&clause.build_sql(binder));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::fixtures::Todo;
    use crate::dialect::{Named, Postgres};

    const COLUMNS: &str = "id, title, finished, created_at, deadline, finished_at";

    crate::fields! {
        #[derive(Default)]
        struct TitleCriteria {
            title: Option<String>,
        }
    }

    #[test]
    fn test_find_one() {
        let stmt = FindOne::<Todo>::new(&Postgres, 1).build().unwrap();
        assert_eq!(stmt.sql, format!("SELECT {} FROM todo WHERE id = $1", COLUMNS));
        assert_eq!(stmt.values(), vec![SqlValue::Int32(1)]);
    }

    #[test]
    fn test_select_without_criteria() {
        let stmt = SelectByCriteria::<Todo, Todo>::new(&Postgres, None).build();
        assert_eq!(stmt.sql, format!("SELECT {} FROM todo", COLUMNS));
        assert!(stmt.params.is_empty());

        let empty = Todo::default();
        let stmt = SelectByCriteria::<Todo, Todo>::new(&Postgres, Some(&empty)).build();
        assert_eq!(stmt.sql, format!("SELECT {} FROM todo", COLUMNS));
    }

    #[test]
    fn test_select_with_criteria_and_page() {
        let criteria = Todo {
            title: Some("test Edit".to_string()),
            finished: Some(true),
            ..Default::default()
        };
        let stmt = SelectByCriteria::<Todo, Todo>::new(&Postgres, Some(&criteria))
            .page(PageRequest::new(20, 10))
            .build();

        assert_eq!(
            stmt.sql,
            format!(
                "SELECT {} FROM todo WHERE title = $1 AND finished = $2 LIMIT 10 OFFSET 20",
                COLUMNS
            )
        );
        assert_eq!(
            stmt.values(),
            vec![SqlValue::Text("test Edit".to_string()), SqlValue::Bool(true)]
        );
    }

    #[test]
    fn test_count_with_separate_criteria_type() {
        let criteria = TitleCriteria {
            title: Some("test Edit".to_string()),
        };
        let stmt = CountByCriteria::<Todo, TitleCriteria>::new(&Named, Some(&criteria)).build();
        assert_eq!(stmt.sql, "SELECT count(*) FROM todo WHERE title = #{title}");
        assert_eq!(stmt.param_names(), vec!["title"]);
    }

    #[test]
    fn test_count_matches_all_without_predicates() {
        let stmt = CountByCriteria::<Todo, TitleCriteria>::new(&Postgres, None).build();
        assert_eq!(stmt.sql, "SELECT count(*) FROM todo");
        assert!(stmt.params.is_empty());
    }
}

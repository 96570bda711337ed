use std::marker::PhantomData;

use crate::builders::where_key;
use crate::dialect::Dialect;
use crate::error::Result;
use crate::traits::Entity;
use crate::types::{ParamBinder, SqlValue, Statement};

/// DELETE of the row with the given primary key.
pub struct Delete<'a, E: Entity> {
    dialect: &'a dyn Dialect,
    id: SqlValue,
    _entity: PhantomData<E>,
}

impl<'a, E: Entity> Delete<'a, E> {
    pub fn new(dialect: &'a dyn Dialect, id: impl Into<SqlValue>) -> Self {
        Self {
            dialect,
            id: id.into(),
            _entity: PhantomData,
        }
    }

    pub fn build(&self) -> Result<Statement> {
        let mut binder = ParamBinder::new(self.dialect);
        let mut sql = format!("DELETE FROM {}", E::table_name());
        sql.push_str(&where_key::<E>(&mut binder, self.id.clone())?);
        Ok(binder.finish(sql))
    }
}

use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::builders::{CountByCriteria, Delete, FindOne, Insert, SelectByCriteria, Update};
use crate::dialect::Dialect;
use crate::error::{CrudMapError, Result};
use crate::traits::{validate_entity, validate_fields, DatabaseDriver, Entity, FieldSet};
use crate::types::{
    ExecuteResult, FromSqlValue, Page, PageRequest, QueryResult, RawQueryResult, SqlValue,
    Statement,
};

/// Generic CRUD mapper for entity `E`, filtered by criteria `C`.
/// Created from a [`CrudClient`](crate::CrudClient) and used to run the
/// statements derived from `E`'s fields.
pub struct CrudMapper<E: Entity, C: FieldSet = E> {
    driver: Arc<dyn DatabaseDriver>,
    dialect: Arc<dyn Dialect>,
    _types: PhantomData<fn() -> (E, C)>,
}

impl<E: Entity, C: FieldSet> std::fmt::Debug for CrudMapper<E, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrudMapper").finish_non_exhaustive()
    }
}

impl<E: Entity, C: FieldSet> CrudMapper<E, C> {
    /// Create a mapper, rejecting field sets that cannot be mapped to columns.
    pub fn new(driver: Arc<dyn DatabaseDriver>, dialect: Arc<dyn Dialect>) -> Result<Self> {
        validate_entity::<E>()?;
        validate_fields::<C>()?;
        Ok(Self {
            driver,
            dialect,
            _types: PhantomData,
        })
    }

    /// Insert `entity` and write the store-generated key back into it.
    pub async fn create(&self, entity: &mut E) -> Result<()> {
        let key = E::key_field()?;
        let insert = Insert::new(self.dialect.as_ref(), &*entity);
        let returns_key = insert.returns_key();
        let stmt = insert.build()?;

        let generated = if returns_key {
            let mut row = QueryResult::from_raw(self.query(&stmt).await?).single_row()?;
            row.take(&key.column())?
        } else {
            match self.execute(&stmt).await?.last_insert_id {
                Some(id) => SqlValue::Int64(id),
                // the caller supplied the key itself
                None if !key.read(entity).is_null() => return Ok(()),
                None => return Err(CrudMapError::MissingGeneratedKey(E::table_name())),
            }
        };

        key.write(entity, generated)?;
        debug!(table = %E::table_name(), "crudmap.created");
        Ok(())
    }

    /// Update every column of the row keyed by `entity`'s primary key.
    /// Returns true if at least one row was affected.
    pub async fn update(&self, entity: &E) -> Result<bool> {
        let stmt = Update::new(self.dialect.as_ref(), entity).build()?;
        Ok(self.execute(&stmt).await?.rows_affected >= 1)
    }

    /// Delete the row with primary key `id`.
    /// Returns true if at least one row was affected.
    pub async fn delete(&self, id: impl Into<SqlValue>) -> Result<bool> {
        let stmt = Delete::<E>::new(self.dialect.as_ref(), id).build()?;
        Ok(self.execute(&stmt).await?.rows_affected >= 1)
    }

    /// Find the row with primary key `id`; `None` if there is none.
    pub async fn find_one(&self, id: impl Into<SqlValue>) -> Result<Option<E>> {
        let stmt = FindOne::<E>::new(self.dialect.as_ref(), id).build()?;
        QueryResult::from_raw(self.query(&stmt).await?)
            .optional_row()?
            .map(|row| row.decode())
            .transpose()
    }

    /// Count the rows matching `criteria`; `None` matches every row.
    pub async fn count_by_criteria(&self, criteria: Option<&C>) -> Result<u64> {
        let stmt = CountByCriteria::<E, C>::new(self.dialect.as_ref(), criteria).build();
        let raw = self.query(&stmt).await?;

        let actual = raw.rows.len();
        let value = raw
            .rows
            .into_iter()
            .next()
            .and_then(|row| row.into_iter().next())
            .ok_or(CrudMapError::UnexpectedRowCount {
                expected: 1,
                actual,
            })?;

        let count = i64::from_sql_value(value)
            .map_err(|e| CrudMapError::QueryFailed(format!("count(*) returned {}", e)))?;
        u64::try_from(count)
            .map_err(|_| CrudMapError::QueryFailed(format!("count(*) returned {}", count)))
    }

    /// Select the rows matching `criteria`, optionally bounded by `page`.
    pub async fn select_by_criteria(
        &self,
        criteria: Option<&C>,
        page: Option<PageRequest>,
    ) -> Result<Vec<E>> {
        let mut select = SelectByCriteria::<E, C>::new(self.dialect.as_ref(), criteria);
        if let Some(page) = page {
            select = select.page(page);
        }
        let stmt = select.build();

        QueryResult::from_raw(self.query(&stmt).await?)
            .rows()
            .into_iter()
            .map(|row| row.decode())
            .collect()
    }

    /// Find one page of the rows matching `criteria` together with the total
    /// number of matches. A zero total skips the row query.
    pub async fn find_page_by_criteria(
        &self,
        criteria: Option<&C>,
        page_request: PageRequest,
    ) -> Result<Page<E>> {
        let total = self.count_by_criteria(criteria).await?;
        if total == 0 {
            trace!(table = %E::table_name(), "crudmap.page.empty");
            return Ok(Page::empty(page_request));
        }

        let content = self
            .select_by_criteria(criteria, Some(page_request))
            .await?;
        Ok(Page::new(content, page_request, total))
    }

    async fn query(&self, stmt: &Statement) -> Result<RawQueryResult> {
        debug!(sql = %stmt.sql, params = stmt.params.len(), "crudmap.statement");
        self.driver.query(&stmt.sql, &stmt.values()).await
    }

    async fn execute(&self, stmt: &Statement) -> Result<ExecuteResult> {
        debug!(sql = %stmt.sql, params = stmt.params.len(), "crudmap.statement");
        self.driver.execute(&stmt.sql, &stmt.values()).await
    }
}

impl<E: Entity, C: FieldSet> Clone for CrudMapper<E, C> {
    fn clone(&self) -> Self {
        Self {
            driver: Arc::clone(&self.driver),
            dialect: Arc::clone(&self.dialect),
            _types: PhantomData,
        }
    }
}

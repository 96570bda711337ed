use crate::builders::where_key;
use crate::dialect::Dialect;
use crate::error::Result;
use crate::traits::Entity;
use crate::types::{ParamBinder, Statement};

/// UPDATE setting every field, primary key included, keyed on the primary key.
pub struct Update<'a, E: Entity> {
    dialect: &'a dyn Dialect,
    entity: &'a E,
}

impl<'a, E: Entity> Update<'a, E> {
    pub fn new(dialect: &'a dyn Dialect, entity: &'a E) -> Self {
        Self { dialect, entity }
    }

    pub fn build(&self) -> Result<Statement> {
        let key = E::key_field()?;
        let mut binder = ParamBinder::new(self.dialect);

        let assignments: Vec<String> = E::fields()
            .iter()
            .map(|field| {
                let placeholder = binder.bind(field.name, field.read(self.entity));
                format!("{} = {}", field.column(), placeholder)
            })
            .collect();

        let mut sql = format!("UPDATE {} SET {}", E::table_name(), assignments.join(", "));
        sql.push_str(&where_key::<E>(&mut binder, key.read(self.entity))?);

        Ok(binder.finish(sql))
    }
}

//! Statement builders deriving SQL from entity field metadata.
//!
//! Builders are pure: they only read the entity's registered fields and the
//! values handed to them, and render a [`Statement`](crate::types::Statement)
//! through a [`Dialect`](crate::dialect::Dialect).

mod delete;
mod insert;
mod select;
mod update;

pub use delete::Delete;
pub use insert::Insert;
pub use select::{CountByCriteria, FindOne, SelectByCriteria};
pub use update::Update;

use crate::error::Result;
use crate::traits::Entity;
use crate::types::{ParamBinder, SqlValue};

/// Renders ` WHERE <key column> = <placeholder>` binding `id` under the key's field name.
fn where_key<E: Entity>(binder: &mut ParamBinder<'_>, id: SqlValue) -> Result<String> {
    let key = E::key_field()?;
    let placeholder = binder.bind(key.name, id);
    Ok(format!(" WHERE {} = {}", key.column(), placeholder))
}

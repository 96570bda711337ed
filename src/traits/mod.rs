mod driver;
mod entity;
mod field_set;

pub use driver::DatabaseDriver;
pub use entity::{validate_entity, validate_fields, Entity};
pub use field_set::{Field, FieldSet};

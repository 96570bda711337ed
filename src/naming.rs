//! Table and column naming derived from Rust type and field names.

use heck::ToSnakeCase;

/// Table name for a type: its simple name, lower-cased, never pluralised.
pub fn table_name(type_name: &str) -> String {
    let simple = type_name.rsplit("::").next().unwrap_or(type_name);
    simple.to_lowercase()
}

/// Column name for a field: camelCase converted to lower snake_case.
pub fn column_name(field_name: &str) -> String {
    field_name.to_snake_case()
}

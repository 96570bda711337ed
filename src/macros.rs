/// Declares a struct and registers all of its fields, in declaration order,
/// as its [`FieldSet`](crate::traits::FieldSet).
///
/// Every field must be `Clone`, convert into [`SqlValue`](crate::types::SqlValue)
/// and implement [`FromSqlValue`](crate::types::FromSqlValue).
///
/// ```
/// crudmap::fields! {
///     #[derive(Debug, Default)]
///     pub struct TodoCriteria {
///         pub title: Option<String>,
///         pub finished: Option<bool>,
///     }
/// }
/// ```
///
/// The field list comes from the declaration itself; a struct declared
/// elsewhere cannot be registered with a hand-picked field list:
///
/// ```compile_fail
/// #[derive(Default)]
/// struct TodoCriteria {
///     title: Option<String>,
///     finished: Option<bool>,
/// }
///
/// crudmap::fields!(TodoCriteria { title });
/// ```
#[macro_export]
macro_rules! fields {
    (
        $(#[$meta:meta])*
        $vis:vis struct $ty:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $field_ty:ty
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $ty {
            $(
                $(#[$field_meta])*
                $field_vis $field: $field_ty,
            )+
        }

        $crate::__impl_field_set!($ty { $($field),+ });
    };
}

/// Declares a struct, registers all of its fields like [`fields!`](crate::fields)
/// and marks it as an [`Entity`](crate::traits::Entity) keyed by its `id` field.
///
/// ```
/// crudmap::entity! {
///     #[derive(Debug, Default)]
///     pub struct Todo {
///         pub id: Option<i32>,
///         pub title: Option<String>,
///     }
/// }
/// ```
///
/// Listing a subset of an existing struct's fields does not compile:
///
/// ```compile_fail
/// #[derive(Default)]
/// struct Todo {
///     id: Option<i32>,
///     title: Option<String>,
///     finished: Option<bool>,
/// }
///
/// crudmap::entity!(Todo { title, id });
/// ```
#[macro_export]
macro_rules! entity {
    (
        $(#[$meta:meta])*
        $vis:vis struct $ty:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $field_ty:ty
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $ty {
            $(
                $(#[$field_meta])*
                $field_vis $field: $field_ty,
            )+
        }

        $crate::__impl_field_set!($ty { $($field),+ });

        impl $crate::traits::Entity for $ty {}
    };
}

/// Implements `FieldSet` for `$ty` over the listed fields.
///
/// The listing must name every field of `$ty`; a partial one is rejected:
///
/// ```compile_fail
/// #[derive(Default)]
/// struct Todo {
///     id: Option<i32>,
///     title: Option<String>,
///     finished: Option<bool>,
/// }
///
/// crudmap::__impl_field_set!(Todo { title, id });
/// ```
#[doc(hidden)]
#[macro_export]
macro_rules! __impl_field_set {
    ($ty:ident { $($field:ident),+ }) => {
        const _: () = {
            // exhaustive: every field of the struct must be listed
            #[allow(dead_code)]
            fn all_fields_listed(record: &$ty) {
                let $ty { $($field: _),+ } = record;
            }
        };

        impl $crate::traits::FieldSet for $ty {
            fn type_name() -> &'static str {
                stringify!($ty)
            }

            fn fields() -> &'static [$crate::traits::Field<Self>] {
                const FIELDS: &[$crate::traits::Field<$ty>] = &[
                    $(
                        $crate::traits::Field::new(
                            stringify!($field),
                            |record: &$ty| {
                                $crate::types::SqlValue::from(::std::clone::Clone::clone(&record.$field))
                            },
                            |record: &mut $ty, value: $crate::types::SqlValue| {
                                record.$field = $crate::types::FromSqlValue::from_sql_value(value)?;
                                ::std::result::Result::Ok(())
                            },
                        ),
                    )+
                ];
                FIELDS
            }
        }
    };
}

//! Macros for defining table schemas.
//!
//! The [`define_table!`] macro generates a struct holding a [`Table`](crate::Table)
//! and one typed column field per database column.

/// Defines a table struct with typed column fields.
///
/// The generated struct derefs to [`Table`](crate::Table) and implements
/// [`ReadableTable`](crate::ReadableTable) and
/// [`WritableTable`](crate::WritableTable), so it can be used anywhere a
/// table is expected.
///
/// # Syntax
///
/// ```ignore
/// define_table!(
///     pub struct Users {
///         schema: "public",
///         table: "users",
///         columns: {
///             id: Integer => "id",
///             name: Text => "name"
///         }
///     }
/// );
/// ```
///
/// # Usage
///
/// ```rust
/// use sqlweave::{define_table, prelude::*};
///
/// define_table!(
///     pub struct Users {
///         schema: "public",
///         table: "users",
///         columns: {
///             id: Integer => "id",
///             name: Text => "name"
///         }
///     }
/// );
///
/// let users = Users::new();
/// let (sql, _) = users
///     .select(vec![(&users.name).into()])
///     .where_(users.id.eq(int(1)))
///     .sql()
///     .unwrap();
/// assert_eq!(sql, "SELECT users.name\nFROM public.users\nWHERE users.id = $1");
/// ```
#[macro_export]
macro_rules! define_table {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            schema: $schema:literal,
            table: $table:literal,
            columns: {
                $($field:ident: $kind:ty => $db_col:literal),* $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone)]
        $vis struct $name {
            table: $crate::Table,
            $(pub $field: $crate::expr::Col<$kind>,)*
        }

        impl $name {
            pub fn new() -> Self {
                $(let $field = $crate::expr::Col::<$kind>::new($db_col);)*
                let table = $crate::Table::new(
                    $schema,
                    $table,
                    vec![$($crate::expr::Column::from(&$field)),*],
                );
                Self {
                    table,
                    $($field,)*
                }
            }
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ::std::ops::Deref for $name {
            type Target = $crate::Table;

            fn deref(&self) -> &$crate::Table {
                &self.table
            }
        }

        impl $crate::Clause for $name {
            fn serialize(
                &self,
                statement: $crate::StatementType,
                out: &mut $crate::QueryData,
            ) -> $crate::error::Result<()> {
                $crate::Clause::serialize(&self.table, statement, out)
            }
        }

        impl $crate::ReadableTable for $name {
            fn to_table_ref(&self) -> $crate::table::TableRef {
                $crate::ReadableTable::to_table_ref(&self.table)
            }

            fn schema_name(&self) -> &str {
                $crate::ReadableTable::schema_name(&self.table)
            }

            fn table_name(&self) -> &str {
                $crate::ReadableTable::table_name(&self.table)
            }
        }

        impl $crate::WritableTable for $name {
            fn to_writable_ref(&self) -> $crate::table::WritableRef {
                $crate::WritableTable::to_writable_ref(&self.table)
            }
        }
    };
}

//! Modeling of tables. This is where statement preparation starts.
//!
//! Two capabilities are layered onto table-like nodes:
//!
//! - [`ReadableTable`]: produces SELECT statements and join trees. Implemented
//!   by [`Table`] and [`JoinTable`].
//! - [`WritableTable`]: produces INSERT, UPDATE, DELETE and LOCK statements.
//!   Implemented by [`Table`] only; a join result cannot be written to.

mod join;
mod plain;

use std::sync::Arc;

pub use join::{JoinSide, JoinTable, JoinType};
pub use plain::Table;

use crate::{
    clause::{Clause, Projection},
    expr::{Bool, Column, Expr},
    statement::{DeleteStatement, InsertStatement, LockStatement, SelectStatement, UpdateStatement},
};

/// Shared handle to a readable table node.
pub type TableRef = Arc<dyn ReadableTable>;

/// Shared handle to a writable table node.
pub type WritableRef = Arc<dyn WritableTable>;

/// Query-producing operations.
pub trait ReadableTable: Clause {
    /// Returns a shared handle to this node, used when it becomes the child of
    /// a join or the source of a statement.
    fn to_table_ref(&self) -> TableRef;

    /// Schema of a plain table; empty for join trees.
    fn schema_name(&self) -> &str;

    /// Name of a plain table; empty for join trees.
    fn table_name(&self) -> &str;

    /// Generates a SELECT statement reading from this table.
    fn select(&self, projections: Vec<Projection>) -> SelectStatement {
        SelectStatement::new(projections).from(self.to_table_ref())
    }

    /// Creates an inner join with `table` on `on_condition`.
    fn inner_join(&self, table: &dyn ReadableTable, on_condition: Expr<Bool>) -> JoinTable {
        self.join(table, JoinType::Inner, Some(on_condition))
    }

    /// Creates a left join with `table` on `on_condition`.
    fn left_join(&self, table: &dyn ReadableTable, on_condition: Expr<Bool>) -> JoinTable {
        self.join(table, JoinType::Left, Some(on_condition))
    }

    /// Creates a right join with `table` on `on_condition`.
    fn right_join(&self, table: &dyn ReadableTable, on_condition: Expr<Bool>) -> JoinTable {
        self.join(table, JoinType::Right, Some(on_condition))
    }

    fn full_join(&self, table: &dyn ReadableTable, on_condition: Expr<Bool>) -> JoinTable {
        self.join(table, JoinType::Full, Some(on_condition))
    }

    fn cross_join(&self, table: &dyn ReadableTable) -> JoinTable {
        self.join(table, JoinType::Cross, None)
    }

    fn join(
        &self,
        table: &dyn ReadableTable,
        join_type: JoinType,
        on_condition: Option<Expr<Bool>>,
    ) -> JoinTable {
        JoinTable::new(
            Some(self.to_table_ref()),
            Some(table.to_table_ref()),
            join_type,
            on_condition,
        )
    }
}

/// Mutation-producing operations.
pub trait WritableTable: Clause {
    fn to_writable_ref(&self) -> WritableRef;

    fn insert(&self, columns: Vec<Column>) -> InsertStatement {
        InsertStatement::new(self.to_writable_ref(), columns)
    }

    fn update(&self, columns: Vec<Column>) -> UpdateStatement {
        UpdateStatement::new(self.to_writable_ref(), columns)
    }

    fn delete(&self) -> DeleteStatement {
        DeleteStatement::new(self.to_writable_ref())
    }

    fn lock(&self) -> LockStatement {
        LockStatement::new(self.to_writable_ref())
    }
}

//! The statement builders.
//!
//! Each statement is created from a table capability and chained with
//! methods that add its clauses:
//!
//! - [`SelectStatement`] from [`ReadableTable::select`](crate::ReadableTable::select)
//! - [`InsertStatement`], [`UpdateStatement`], [`DeleteStatement`] and
//!   [`LockStatement`] from the [`WritableTable`](crate::WritableTable) methods
//!
//! All of them implement [`Statement`], which turns the builder into SQL text
//! and its bound values.
//!
//! # Example
//!
//! ```rust
//! use sqlweave::prelude::*;
//!
//! let id = IntegerColumn::new("id");
//! let name = StringColumn::new("name");
//! let users = Table::new("public", "users", vec![(&id).into(), (&name).into()]);
//!
//! let (sql, args) = users
//!     .select(vec![(&name).into()])
//!     .where_(id.eq(int(7)))
//!     .sql()
//!     .unwrap();
//!
//! assert_eq!(sql, "SELECT users.name\nFROM public.users\nWHERE users.id = $1");
//! assert_eq!(args, vec![Value::Int(7)]);
//! ```

pub mod clause;
pub mod delete;
pub mod insert;
pub mod lock;
pub mod select;
pub mod update;

pub use clause::{asc, desc, OrderByClause};
pub use delete::DeleteStatement;
pub use insert::InsertStatement;
pub use lock::{LockMode, LockStatement};
pub use select::SelectStatement;
pub use update::UpdateStatement;

use sqlweave_config::RenderConfig;
use tracing::debug;

use crate::{
    clause::{serialize_list, Projection, StatementType},
    error::Result,
    expr::{Bool, Expr},
    query_data::QueryData,
    value::Value,
};

/// A complete statement that can be rendered to SQL.
pub trait Statement {
    fn statement_type(&self) -> StatementType;

    /// Writes the whole statement into `out`.
    fn serialize_statement(&self, out: &mut QueryData) -> Result<()>;

    /// Renders the statement with the default configuration.
    fn sql(&self) -> Result<(String, Vec<Value>)> {
        self.sql_with(&RenderConfig::default())
    }

    fn sql_with(&self, config: &RenderConfig) -> Result<(String, Vec<Value>)> {
        let mut out = QueryData::with_config(config);
        self.serialize_statement(&mut out)?;
        let (sql, args) = out.finish()?;
        debug!(
            statement = %self.statement_type(),
            arguments = args.len(),
            "built statement"
        );
        Ok((sql, args))
    }

    /// Renders the statement with bound values inlined as literals.
    ///
    /// For logging only: the output is not safe to execute.
    fn debug_sql(&self) -> Result<String> {
        let mut out = QueryData::debug();
        self.serialize_statement(&mut out)?;
        Ok(out.finish()?.0)
    }
}

/// Writes `WHERE c1 AND c2 ...` on a new line when `conditions` is non-empty.
pub(crate) fn serialize_where(
    conditions: &[Expr<Bool>],
    statement: StatementType,
    out: &mut QueryData,
) -> Result<()> {
    if conditions.is_empty() {
        return Ok(());
    }
    out.next_line();
    out.write_string("WHERE ");
    serialize_list(conditions, " AND ", statement, out)
}

/// Writes `RETURNING p1, p2` on a new line when `projections` is non-empty.
pub(crate) fn serialize_returning(
    projections: &[Projection],
    statement: StatementType,
    out: &mut QueryData,
) -> Result<()> {
    if projections.is_empty() {
        return Ok(());
    }
    out.next_line();
    out.write_string("RETURNING ");
    serialize_list(projections, ", ", statement, out)
}

//! Error types for sqlweave.

use miette::Diagnostic;
use thiserror::Error;

use crate::{
    clause::StatementType,
    table::{JoinSide, JoinType},
};

/// Error raised while serializing a clause tree into SQL.
///
/// Every variant is a construction bug on the caller's side. Text written to
/// the [`QueryData`](crate::QueryData) before the error is not usable.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("{0} hand side of join operation is nil table")]
    #[diagnostic(
        code(sqlweave::nil_join_side),
        help("Construct the join from two tables, e.g. `t1.inner_join(&t2, cond)`")
    )]
    NilJoinSide(JoinSide),

    #[error("join condition is nil")]
    #[diagnostic(
        code(sqlweave::missing_join_condition),
        help("Only CROSS JOIN may omit its ON condition; {0} requires one")
    )]
    MissingJoinCondition(JoinType),

    #[error("IN list is empty")]
    #[diagnostic(
        code(sqlweave::empty_in_list),
        help("`x IN ()` is not valid SQL; pass at least one value")
    )]
    EmptyInList,

    #[error("no projections in SELECT statement")]
    #[diagnostic(
        code(sqlweave::empty_projections),
        help("Pass at least one column or expression to `select`")
    )]
    EmptyProjections,

    #[error("no columns listed for {0} statement")]
    #[diagnostic(
        code(sqlweave::empty_column_list),
        help("Pass the target columns to `insert` or `update`")
    )]
    EmptyColumnList(StatementType),

    #[error("no values set for INSERT statement")]
    #[diagnostic(
        code(sqlweave::missing_values),
        help("Add at least one row with `values`")
    )]
    MissingValues,

    #[error("{columns} columns but {values} values")]
    #[diagnostic(
        code(sqlweave::column_value_mismatch),
        help("Each row must provide exactly one value per listed column")
    )]
    ColumnValueMismatch { columns: usize, values: usize },

    #[error("{0} statement has no WHERE clause")]
    #[diagnostic(
        code(sqlweave::missing_where),
        help("Add a condition with `where_`; use `boolean(true)` to affect every row")
    )]
    MissingWhere(StatementType),

    #[error("statement binds {count} arguments, the limit is {max}")]
    #[diagnostic(
        code(sqlweave::too_many_arguments),
        help("Split the statement into smaller batches")
    )]
    TooManyArguments { count: usize, max: usize },
}

/// Result type alias for sqlweave operations.
pub type Result<T> = std::result::Result<T, BuildError>;

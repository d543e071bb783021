//! A type-segregated PostgreSQL statement builder.
//!
//! Tables, columns and expressions are composed as typed values and
//! serialized into SQL text with `$N` placeholders plus the ordered list of
//! values bound to them. The crate never talks to a database.
//!
//! # Overview
//!
//! - [`QueryData`] accumulates SQL text and bound values.
//! - [`Clause`] is the contract every serializable node implements.
//! - [`expr`] and [`func`] build typed expressions: columns, literals,
//!   operators, aggregates and other SQL functions.
//! - [`Table`] and [`JoinTable`] model the statement source, exposing the
//!   [`ReadableTable`] and (for plain tables) [`WritableTable`] capabilities.
//! - [`statement`] holds the SELECT, INSERT, UPDATE, DELETE and LOCK builders.

pub mod clause;
pub mod error;
pub mod expr;
pub mod func;
pub mod macros;
pub mod prelude;
pub mod query_data;
pub mod statement;
pub mod table;
pub mod traits;
pub mod value;

pub use clause::{Clause, Projection, StatementType};
pub use error::{BuildError, Result};
pub use expr::{Col, Column, Expr};
pub use query_data::QueryData;
pub use sqlweave_config::RenderConfig;
pub use statement::Statement;
pub use table::{JoinTable, JoinType, ReadableTable, Table, WritableTable};
pub use value::Value;

#[cfg(test)]
mod test_utils;

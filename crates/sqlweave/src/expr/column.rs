//! Table-qualified column references.
//!
//! A column's qualifier lives in a cell shared by every clone of the column,
//! so re-qualifying it (when its table is constructed or aliased) changes how
//! all existing references serialize.

use std::{
    marker::PhantomData,
    sync::{Arc, PoisonError, RwLock},
};

use crate::{
    clause::{Clause, Projection, StatementType},
    error::Result,
    expr::{
        kind::{Bool, Float, Integer, Kind, Text},
        Expr,
    },
    query_data::QueryData,
};

pub type IntegerColumn = Col<Integer>;
pub type FloatColumn = Col<Float>;
pub type BoolColumn = Col<Bool>;
pub type StringColumn = Col<Text>;

#[derive(Debug)]
struct ColumnInner {
    name: String,
    qualifier: RwLock<String>,
}

/// A kind-erased column handle.
#[derive(Debug, Clone)]
pub struct Column(Arc<ColumnInner>);

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Arc::new(ColumnInner {
            name: name.into(),
            qualifier: RwLock::new(String::new()),
        }))
    }

    /// The column name in the database.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Name of the table (or table alias) qualifying this column.
    pub fn table_name(&self) -> String {
        self.0
            .qualifier
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn set_table_name(&self, name: &str) {
        let mut qualifier = self
            .0
            .qualifier
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *qualifier = name.to_string();
    }

    /// Whether both handles refer to the same column.
    pub fn same_as(&self, other: &Column) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Clause for Column {
    fn serialize(&self, _statement: StatementType, out: &mut QueryData) -> Result<()> {
        let qualifier = self.table_name();
        if !qualifier.is_empty() {
            out.write_string(&qualifier);
            out.write_string(".");
        }
        out.write_string(self.name());
        Ok(())
    }
}

/// A typed reference to a table column.
///
/// # Example
///
/// ```rust
/// use sqlweave::{expr::IntegerColumn, Table};
///
/// let id = IntegerColumn::new("id");
/// let _users = Table::new("public", "users", vec![(&id).into()]);
/// assert_eq!(id.table_name(), "users");
/// ```
#[derive(Debug)]
pub struct Col<K> {
    column: Column,
    _kind: PhantomData<K>,
}

impl<K: Kind> Col<K> {
    /// Creates an unqualified column. It becomes qualified once passed to
    /// [`Table::new`](crate::Table::new).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            column: Column::new(name),
            _kind: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        self.column.name()
    }

    pub fn table_name(&self) -> String {
        self.column.table_name()
    }

    pub fn column(&self) -> &Column {
        &self.column
    }
}

impl<K> Clone for Col<K> {
    fn clone(&self) -> Self {
        Self {
            column: self.column.clone(),
            _kind: PhantomData,
        }
    }
}

impl<K: Kind> Clause for Col<K> {
    fn serialize(&self, statement: StatementType, out: &mut QueryData) -> Result<()> {
        self.column.serialize(statement, out)
    }
}

impl<K> From<Col<K>> for Column {
    fn from(col: Col<K>) -> Self {
        col.column
    }
}

impl<K> From<&Col<K>> for Column {
    fn from(col: &Col<K>) -> Self {
        col.column.clone()
    }
}

impl<K: Kind> From<Col<K>> for Expr<K> {
    fn from(col: Col<K>) -> Self {
        Expr::new(col)
    }
}

impl<K: Kind> From<&Col<K>> for Expr<K> {
    fn from(col: &Col<K>) -> Self {
        Expr::new(col.clone())
    }
}

impl<K: Kind> From<Col<K>> for Projection {
    fn from(col: Col<K>) -> Self {
        Projection::new(col)
    }
}

impl<K: Kind> From<&Col<K>> for Projection {
    fn from(col: &Col<K>) -> Self {
        Projection::new(col.clone())
    }
}

impl From<Column> for Projection {
    fn from(column: Column) -> Self {
        Projection::new(column)
    }
}

impl From<&Column> for Projection {
    fn from(column: &Column) -> Self {
        Projection::new(column.clone())
    }
}

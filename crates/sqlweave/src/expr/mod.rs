//! Typed expressions and the building blocks of conditions.

pub mod column;
pub mod kind;
pub mod literal;
pub mod ops;

use std::{marker::PhantomData, sync::Arc};

pub use column::{BoolColumn, Col, Column, FloatColumn, IntegerColumn, StringColumn};
pub use kind::{Any, Bool, Date, Float, Integer, Interval, Kind, Numeric, Text, Time, Timestamp};
pub use literal::{boolean, float, int, string, Literal, Null, Star, NULL, STAR};

use crate::{
    clause::{Clause, Projection, StatementType},
    error::Result,
    query_data::QueryData,
};

/// A shared clause node whose result is of kind `K`.
///
/// Cloning is cheap; clones refer to the same node.
pub struct Expr<K> {
    node: Arc<dyn Clause>,
    _kind: PhantomData<K>,
}

impl<K: Kind> Expr<K> {
    pub fn new<C: Clause + 'static>(clause: C) -> Self {
        Self {
            node: Arc::new(clause),
            _kind: PhantomData,
        }
    }
}

impl<K> Clone for Expr<K> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
            _kind: PhantomData,
        }
    }
}

impl<K: Kind> Clause for Expr<K> {
    fn serialize(&self, statement: StatementType, out: &mut QueryData) -> Result<()> {
        self.node.serialize(statement, out)
    }
}

impl<K: Kind> From<Expr<K>> for Projection {
    fn from(expr: Expr<K>) -> Self {
        Projection::from_arc(expr.node)
    }
}

impl<K: Kind> From<&Expr<K>> for Projection {
    fn from(expr: &Expr<K>) -> Self {
        Projection::from_arc(Arc::clone(&expr.node))
    }
}

impl<K: Kind> From<&Expr<K>> for Expr<K> {
    fn from(expr: &Expr<K>) -> Self {
        expr.clone()
    }
}

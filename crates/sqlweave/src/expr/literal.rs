//! Scalar literals.
//!
//! Every literal except [`NULL`] and [`STAR`] binds exactly one value.

use crate::{
    clause::{Clause, Projection, StatementType},
    error::Result,
    expr::{
        kind::{Bool, Float, Integer, Kind, Text},
        Expr,
    },
    query_data::QueryData,
    value::Value,
};

/// A bound literal value.
#[derive(Debug, Clone)]
pub struct Literal(Value);

impl Literal {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }
}

impl Clause for Literal {
    fn serialize(&self, _statement: StatementType, out: &mut QueryData) -> Result<()> {
        out.write_value(self.0.clone());
        Ok(())
    }
}

pub fn int(value: i64) -> Expr<Integer> {
    Expr::new(Literal::new(value))
}

pub fn float(value: f64) -> Expr<Float> {
    Expr::new(Literal::new(value))
}

pub fn string(value: impl Into<String>) -> Expr<Text> {
    Expr::new(Literal::new(value.into()))
}

pub fn boolean(value: bool) -> Expr<Bool> {
    Expr::new(Literal::new(value))
}

/// SQL `NULL`. Serializes as the keyword and binds nothing.
#[derive(Debug, Clone, Copy)]
pub struct Null;

pub const NULL: Null = Null;

impl Clause for Null {
    fn serialize(&self, _statement: StatementType, out: &mut QueryData) -> Result<()> {
        out.write_string("NULL");
        Ok(())
    }
}

impl From<Null> for Projection {
    fn from(null: Null) -> Self {
        Projection::new(null)
    }
}

impl<K: Kind> From<Null> for Expr<K> {
    fn from(null: Null) -> Self {
        Expr::new(null)
    }
}

/// The `*` in `COUNT(*)` and `SELECT *`.
#[derive(Debug, Clone, Copy)]
pub struct Star;

pub const STAR: Star = Star;

impl Clause for Star {
    fn serialize(&self, _statement: StatementType, out: &mut QueryData) -> Result<()> {
        out.write_string("*");
        Ok(())
    }
}

impl From<Star> for Projection {
    fn from(star: Star) -> Self {
        Projection::new(star)
    }
}

//! Mathematical functions.

use crate::{
    clause::Projection,
    expr::{Expr, Float, Integer, Numeric},
    func::{call, unary},
};

pub fn abs<K: Numeric>(expr: impl Into<Expr<K>>) -> Expr<K> {
    unary("ABS", expr.into())
}

pub fn sqrt<K: Numeric>(expr: impl Into<Expr<K>>) -> Expr<K> {
    unary("SQRT", expr.into())
}

pub fn cbrt<K: Numeric>(expr: impl Into<Expr<K>>) -> Expr<K> {
    unary("CBRT", expr.into())
}

pub fn ceil(expr: impl Into<Expr<Float>>) -> Expr<Float> {
    unary("CEIL", expr.into())
}

pub fn floor(expr: impl Into<Expr<Float>>) -> Expr<Float> {
    unary("FLOOR", expr.into())
}

pub fn sign(expr: impl Into<Expr<Float>>) -> Expr<Float> {
    unary("SIGN", expr.into())
}

/// Natural logarithm.
pub fn ln(expr: impl Into<Expr<Float>>) -> Expr<Float> {
    unary("LN", expr.into())
}

/// Base 10 logarithm.
pub fn log(expr: impl Into<Expr<Float>>) -> Expr<Float> {
    unary("LOG", expr.into())
}

/// `ROUND(expr)` or `ROUND(expr, precision)`.
pub fn round(expr: impl Into<Expr<Float>>, precision: Option<Expr<Integer>>) -> Expr<Float> {
    call("ROUND", with_precision(expr.into(), precision))
}

/// `TRUNC(expr)` or `TRUNC(expr, precision)`.
pub fn trunc(expr: impl Into<Expr<Float>>, precision: Option<Expr<Integer>>) -> Expr<Float> {
    call("TRUNC", with_precision(expr.into(), precision))
}

fn with_precision(expr: Expr<Float>, precision: Option<Expr<Integer>>) -> Vec<Projection> {
    let mut args = vec![expr.into()];
    if let Some(precision) = precision {
        args.push(precision.into());
    }
    args
}

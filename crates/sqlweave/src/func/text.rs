//! String functions.

use crate::{
    clause::Projection,
    expr::{Expr, Integer, Text},
    func::{call, unary, variadic},
};

pub fn lower(expr: impl Into<Expr<Text>>) -> Expr<Text> {
    unary("LOWER", expr.into())
}

pub fn upper(expr: impl Into<Expr<Text>>) -> Expr<Text> {
    unary("UPPER", expr.into())
}

/// Removes whitespace from both ends.
pub fn btrim(expr: impl Into<Expr<Text>>) -> Expr<Text> {
    unary("BTRIM", expr.into())
}

/// Number of characters.
pub fn length(expr: impl Into<Expr<Text>>) -> Expr<Integer> {
    unary("LENGTH", expr.into())
}

/// `CONCAT(first, rest...)`. Non-text operands are converted by the database.
pub fn concat(first: impl Into<Projection>, rest: Vec<Projection>) -> Expr<Text> {
    call("CONCAT", variadic(first.into(), rest))
}

//! Null-handling and comparison functions over operands of any kind.
//!
//! `NULL` operands render as the keyword and consume no placeholder.

use crate::{
    clause::Projection,
    expr::{Any, Expr},
    func::{call, variadic},
};

/// `COALESCE(first, rest...)`.
pub fn coalesce(first: impl Into<Projection>, rest: Vec<Projection>) -> Expr<Any> {
    call("COALESCE", variadic(first.into(), rest))
}

pub fn nullif(value: impl Into<Projection>, other: impl Into<Projection>) -> Expr<Any> {
    call("NULLIF", vec![value.into(), other.into()])
}

pub fn greatest(first: impl Into<Projection>, rest: Vec<Projection>) -> Expr<Any> {
    call("GREATEST", variadic(first.into(), rest))
}

pub fn least(first: impl Into<Projection>, rest: Vec<Projection>) -> Expr<Any> {
    call("LEAST", variadic(first.into(), rest))
}

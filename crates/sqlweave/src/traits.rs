//! Core traits that power the expression builder.
//!
//! These traits define the contract for:
//! - Comparing typed operands (`Expression`)
//! - Combining conditions (`BoolExpression`)

use crate::{
    clause::Projection,
    expr::{
        kind::{Bool, Kind},
        ops::{BinaryOp, InOp, LogicalOp, NotOp, NullOp},
        Col, Expr,
    },
};

/// A value of kind `K` that can take part in comparisons.
///
/// Implemented by [`Expr<K>`] and [`Col<K>`]. Operands of a comparison must
/// share a kind; [`NULL`](crate::expr::NULL) is accepted as any kind.
///
/// # Example
///
/// ```rust
/// use sqlweave::{expr::{int, IntegerColumn}, traits::Expression as _, QueryData, Clause, StatementType};
///
/// let downloads = IntegerColumn::new("downloads");
/// let cond = downloads.gt(int(100));
/// let mut out = QueryData::new();
/// cond.serialize(StatementType::Select, &mut out).unwrap();
/// assert_eq!(out.sql(), "downloads > $1");
/// ```
pub trait Expression<K: Kind> {
    fn to_expr(&self) -> Expr<K>;

    /// Creates a SQL `=` condition.
    fn eq(&self, rhs: impl Into<Expr<K>>) -> Expr<Bool> {
        compare(self.to_expr(), "=", rhs.into())
    }

    /// Creates a SQL `!=` condition.
    fn ne(&self, rhs: impl Into<Expr<K>>) -> Expr<Bool> {
        compare(self.to_expr(), "!=", rhs.into())
    }

    /// Creates a SQL `>` condition.
    fn gt(&self, rhs: impl Into<Expr<K>>) -> Expr<Bool> {
        compare(self.to_expr(), ">", rhs.into())
    }

    /// Creates a SQL `<` condition.
    fn lt(&self, rhs: impl Into<Expr<K>>) -> Expr<Bool> {
        compare(self.to_expr(), "<", rhs.into())
    }

    /// Creates a SQL `>=` condition.
    fn gte(&self, rhs: impl Into<Expr<K>>) -> Expr<Bool> {
        compare(self.to_expr(), ">=", rhs.into())
    }

    /// Creates a SQL `<=` condition.
    fn lte(&self, rhs: impl Into<Expr<K>>) -> Expr<Bool> {
        compare(self.to_expr(), "<=", rhs.into())
    }

    /// Creates a SQL `IN` condition.
    fn in_<I, R>(&self, values: I) -> Expr<Bool>
    where
        I: IntoIterator<Item = R>,
        R: Into<Expr<K>>,
    {
        let values = values.into_iter().map(|v| operand::<K>(v.into())).collect();
        Expr::new(InOp::new(self.to_expr().into(), values, false))
    }

    /// Creates a SQL `NOT IN` condition.
    fn not_in<I, R>(&self, values: I) -> Expr<Bool>
    where
        I: IntoIterator<Item = R>,
        R: Into<Expr<K>>,
    {
        let values = values.into_iter().map(|v| operand::<K>(v.into())).collect();
        Expr::new(InOp::new(self.to_expr().into(), values, true))
    }

    /// Creates a SQL `IS NULL` condition.
    fn is_null(&self) -> Expr<Bool> {
        Expr::new(NullOp::new(self.to_expr().into(), true))
    }

    /// Creates a SQL `IS NOT NULL` condition.
    fn is_not_null(&self) -> Expr<Bool> {
        Expr::new(NullOp::new(self.to_expr().into(), false))
    }
}

fn operand<K: Kind>(expr: Expr<K>) -> Projection {
    expr.into()
}

fn compare<K: Kind>(lhs: Expr<K>, op: &'static str, rhs: Expr<K>) -> Expr<Bool> {
    Expr::new(BinaryOp::new(lhs.into(), op, rhs.into()))
}

impl<K: Kind> Expression<K> for Expr<K> {
    fn to_expr(&self) -> Expr<K> {
        self.clone()
    }
}

impl<K: Kind> Expression<K> for Col<K> {
    fn to_expr(&self) -> Expr<K> {
        self.into()
    }
}

/// Combinators for boolean conditions.
pub trait BoolExpression: Expression<Bool> {
    /// Combines two conditions with `AND`.
    fn and(&self, other: impl Into<Expr<Bool>>) -> Expr<Bool> {
        logical(self.to_expr(), other.into(), "AND")
    }

    /// Combines two conditions with `OR`.
    fn or(&self, other: impl Into<Expr<Bool>>) -> Expr<Bool> {
        logical(self.to_expr(), other.into(), "OR")
    }

    /// Negates the condition.
    fn not(&self) -> Expr<Bool> {
        Expr::new(NotOp::new(self.to_expr().into()))
    }
}

fn logical(lhs: Expr<Bool>, rhs: Expr<Bool>, op: &'static str) -> Expr<Bool> {
    let lhs: Projection = lhs.into();
    Expr::new(LogicalOp::new(lhs, rhs.into(), op))
}

impl<T: Expression<Bool>> BoolExpression for T {}

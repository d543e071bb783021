//! SQL function builders.
//!
//! Each function is a constructor taking its operands and returning a typed
//! [`Expr`]. Functions serialize as `NAME(arg1, arg2, ...)`, or as the bare
//! `NAME` when called without operands (`CURRENT_DATE`).

pub mod aggregate;
pub mod conditional;
pub mod datetime;
pub mod math;
pub mod text;

pub use aggregate::*;
pub use conditional::*;
pub use datetime::*;
pub use math::*;
pub use text::*;

use crate::{
    clause::{serialize_list, Clause, Projection, StatementType},
    error::Result,
    expr::{Expr, Kind},
    query_data::QueryData,
};

/// A function call node.
pub struct FuncExpression {
    name: &'static str,
    args: Vec<Projection>,
}

impl FuncExpression {
    pub fn new(name: &'static str, args: Vec<Projection>) -> Self {
        Self {
            name,
            args,
        }
    }
}

impl Clause for FuncExpression {
    fn serialize(&self, statement: StatementType, out: &mut QueryData) -> Result<()> {
        out.write_string(self.name);
        if self.args.is_empty() {
            return Ok(());
        }
        out.write_string("(");
        serialize_list(&self.args, ", ", statement, out)?;
        out.write_string(")");
        Ok(())
    }
}

pub(crate) fn call<K: Kind>(name: &'static str, args: Vec<Projection>) -> Expr<K> {
    Expr::new(FuncExpression::new(name, args))
}

pub(crate) fn unary<A: Kind, K: Kind>(name: &'static str, arg: Expr<A>) -> Expr<K> {
    call(name, vec![arg.into()])
}

/// Builds the argument list of a function taking one or more operands.
pub(crate) fn variadic(first: Projection, rest: Vec<Projection>) -> Vec<Projection> {
    let mut args = Vec::with_capacity(rest.len() + 1);
    args.push(first);
    args.extend(rest);
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{expr::Any, test_utils::serialize, value::Value};

    #[test]
    fn test_zero_arguments_render_bare() {
        let expr: Expr<Any> = call("CURRENT_USER", vec![]);
        assert_eq!(serialize(&expr), ("CURRENT_USER".to_string(), vec![]));
    }

    #[test]
    fn test_nested_functions_number_left_to_right() {
        let inner: Expr<Any> = call(
            "F",
            vec![crate::expr::int(1).into(), crate::expr::int(2).into()],
        );
        let outer: Expr<Any> = call("G", vec![inner.into(), crate::expr::float(3.0).into()]);
        assert_eq!(
            serialize(&outer),
            (
                "G(F($1, $2), $3)".to_string(),
                vec![Value::Int(1), Value::Int(2), Value::Float(3.0)]
            )
        );
    }
}

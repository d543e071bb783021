//! Date and time expressions.

use crate::{
    clause::{Clause, StatementType},
    error::Result,
    expr::{literal::Literal, Date, Expr, Interval, Time, Timestamp},
    func::call,
    query_data::QueryData,
};

/// `INTERVAL $N`: keyword form, no parentheses.
pub struct IntervalExpression {
    value: Literal,
}

impl Clause for IntervalExpression {
    fn serialize(&self, statement: StatementType, out: &mut QueryData) -> Result<()> {
        out.write_string("INTERVAL ");
        self.value.serialize(statement, out)
    }
}

/// An interval literal such as `interval("3 days 2 hours")`.
pub fn interval(value: impl Into<String>) -> Expr<Interval> {
    Expr::new(IntervalExpression {
        value: Literal::new(value.into()),
    })
}

pub fn current_date() -> Expr<Date> {
    call("CURRENT_DATE", vec![])
}

pub fn current_time() -> Expr<Time> {
    call("CURRENT_TIME", vec![])
}

pub fn current_timestamp() -> Expr<Timestamp> {
    call("CURRENT_TIMESTAMP", vec![])
}

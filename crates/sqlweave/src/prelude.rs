//! Commonly used items, for glob import.

pub use crate::{
    clause::{Clause, Projection, StatementType},
    error::BuildError,
    expr::{
        boolean, float, int, string, Any, Bool, BoolColumn, Col, Column, Date, Expr, Float,
        FloatColumn, Integer, IntegerColumn, Interval, Kind, Numeric, StringColumn, Text, Time,
        Timestamp, NULL, STAR,
    },
    query_data::QueryData,
    statement::{asc, desc, LockMode, Statement},
    table::{JoinTable, JoinType, ReadableTable, Table, WritableTable},
    traits::{BoolExpression, Expression},
    value::Value,
};

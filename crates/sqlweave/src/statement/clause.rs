//! Clauses shared between statement types.

use crate::{
    clause::{Clause, Projection, StatementType},
    error::Result,
    query_data::QueryData,
};

/// An `ORDER BY` item.
#[derive(Clone)]
pub struct OrderByClause {
    expr: Projection,
    desc: bool,
}

impl Clause for OrderByClause {
    fn serialize(&self, statement: StatementType, out: &mut QueryData) -> Result<()> {
        self.expr.serialize(statement, out)?;
        out.write_string(if self.desc { " DESC" } else { " ASC" });
        Ok(())
    }
}

pub fn asc(expr: impl Into<Projection>) -> OrderByClause {
    OrderByClause {
        expr: expr.into(),
        desc: false,
    }
}

pub fn desc(expr: impl Into<Projection>) -> OrderByClause {
    OrderByClause {
        expr: expr.into(),
        desc: true,
    }
}

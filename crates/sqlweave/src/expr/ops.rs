//! SQL expression operators.
//!
//! These structs represent compound expressions like `a = b`, `a IN (...)`,
//! `(a AND b)`. Each implements [`Clause`] and serializes its operands in
//! left-to-right order, so placeholders are numbered as they appear.

use crate::{
    clause::{serialize_list, Clause, Projection, StatementType},
    error::{BuildError, Result},
    query_data::QueryData,
};

/// A binary comparison (e.g. `=`, `>`, `<=`).
pub struct BinaryOp {
    left: Projection,
    op: &'static str,
    right: Projection,
}

impl BinaryOp {
    pub fn new(left: Projection, op: &'static str, right: Projection) -> Self {
        Self {
            left,
            op,
            right,
        }
    }
}

impl Clause for BinaryOp {
    fn serialize(&self, statement: StatementType, out: &mut QueryData) -> Result<()> {
        self.left.serialize(statement, out)?;
        out.write_string(" ");
        out.write_string(self.op);
        out.write_string(" ");
        self.right.serialize(statement, out)
    }
}

/// Combines two boolean expressions with `AND` or `OR`.
pub struct LogicalOp {
    left: Projection,
    right: Projection,
    op: &'static str,
}

impl LogicalOp {
    pub fn new(left: Projection, right: Projection, op: &'static str) -> Self {
        Self {
            left,
            right,
            op,
        }
    }
}

impl Clause for LogicalOp {
    fn serialize(&self, statement: StatementType, out: &mut QueryData) -> Result<()> {
        out.write_string("(");
        self.left.serialize(statement, out)?;
        out.write_string(" ");
        out.write_string(self.op);
        out.write_string(" ");
        self.right.serialize(statement, out)?;
        out.write_string(")");
        Ok(())
    }
}

/// `NOT (expr)`.
pub struct NotOp {
    expr: Projection,
}

impl NotOp {
    pub fn new(expr: Projection) -> Self {
        Self {
            expr,
        }
    }
}

impl Clause for NotOp {
    fn serialize(&self, statement: StatementType, out: &mut QueryData) -> Result<()> {
        out.write_string("NOT (");
        self.expr.serialize(statement, out)?;
        out.write_string(")");
        Ok(())
    }
}

/// An `IS NULL` or `IS NOT NULL` check.
pub struct NullOp {
    expr: Projection,
    is_null: bool,
}

impl NullOp {
    pub fn new(expr: Projection, is_null: bool) -> Self {
        Self {
            expr,
            is_null,
        }
    }
}

impl Clause for NullOp {
    fn serialize(&self, statement: StatementType, out: &mut QueryData) -> Result<()> {
        self.expr.serialize(statement, out)?;
        let op = if self.is_null {
            " IS NULL"
        } else {
            " IS NOT NULL"
        };
        out.write_string(op);
        Ok(())
    }
}

/// An `IN` or `NOT IN` list.
pub struct InOp {
    expr: Projection,
    values: Vec<Projection>,
    negated: bool,
}

impl InOp {
    pub fn new(expr: Projection, values: Vec<Projection>, negated: bool) -> Self {
        Self {
            expr,
            values,
            negated,
        }
    }
}

impl Clause for InOp {
    fn serialize(&self, statement: StatementType, out: &mut QueryData) -> Result<()> {
        if self.values.is_empty() {
            return Err(BuildError::EmptyInList);
        }
        self.expr.serialize(statement, out)?;
        let op = if self.negated { " NOT IN (" } else { " IN (" };
        out.write_string(op);
        serialize_list(&self.values, ", ", statement, out)?;
        out.write_string(")");
        Ok(())
    }
}

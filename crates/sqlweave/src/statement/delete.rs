use crate::{
    clause::{Clause, Projection, StatementType},
    error::{BuildError, Result},
    expr::{Bool, Expr},
    query_data::QueryData,
    statement::{serialize_returning, serialize_where, Statement},
    table::WritableRef,
};

/// A DELETE statement. A WHERE condition is required.
#[derive(Clone)]
pub struct DeleteStatement {
    table: WritableRef,
    wheres: Vec<Expr<Bool>>,
    returning: Vec<Projection>,
}

impl DeleteStatement {
    pub fn new(table: WritableRef) -> Self {
        Self {
            table,
            wheres: Vec::new(),
            returning: Vec::new(),
        }
    }

    pub fn where_(mut self, condition: Expr<Bool>) -> Self {
        self.wheres.push(condition);
        self
    }

    pub fn returning(mut self, projections: Vec<Projection>) -> Self {
        self.returning.extend(projections);
        self
    }
}

impl Statement for DeleteStatement {
    fn statement_type(&self) -> StatementType {
        StatementType::Delete
    }

    fn serialize_statement(&self, out: &mut QueryData) -> Result<()> {
        self.serialize(StatementType::Delete, out)
    }
}

impl Clause for DeleteStatement {
    fn serialize(&self, statement: StatementType, out: &mut QueryData) -> Result<()> {
        if self.wheres.is_empty() {
            return Err(BuildError::MissingWhere(StatementType::Delete));
        }

        out.write_string("DELETE FROM ");
        self.table.serialize(statement, out)?;
        serialize_where(&self.wheres, statement, out)?;
        serialize_returning(&self.returning, statement, out)
    }
}

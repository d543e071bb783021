use crate::{
    clause::{Clause, Projection, StatementType},
    error::{BuildError, Result},
    expr::{Bool, Column, Expr},
    query_data::QueryData,
    statement::{serialize_returning, serialize_where, Statement},
    table::WritableRef,
};

/// An UPDATE statement. A WHERE condition is required.
#[derive(Clone)]
pub struct UpdateStatement {
    table: WritableRef,
    columns: Vec<Column>,
    values: Vec<Projection>,
    wheres: Vec<Expr<Bool>>,
    returning: Vec<Projection>,
}

impl UpdateStatement {
    pub fn new(table: WritableRef, columns: Vec<Column>) -> Self {
        Self {
            table,
            columns,
            values: vec![],
            wheres: vec![],
            returning: vec![],
        }
    }

    /// Sets the new values, one per column in order.
    pub fn set(mut self, values: Vec<Projection>) -> Self {
        self.values = values;
        self
    }

    /// Adds a WHERE condition. Multiple conditions are combined with `AND`.
    pub fn where_(mut self, condition: Expr<Bool>) -> Self {
        self.wheres.push(condition);
        self
    }

    pub fn returning(mut self, projections: Vec<Projection>) -> Self {
        self.returning.extend(projections);
        self
    }
}

impl Statement for UpdateStatement {
    fn statement_type(&self) -> StatementType {
        StatementType::Update
    }

    fn serialize_statement(&self, out: &mut QueryData) -> Result<()> {
        self.serialize(StatementType::Update, out)
    }
}

impl Clause for UpdateStatement {
    fn serialize(&self, statement: StatementType, out: &mut QueryData) -> Result<()> {
        if self.columns.is_empty() {
            return Err(BuildError::EmptyColumnList(StatementType::Update));
        }
        if self.columns.len() != self.values.len() {
            return Err(BuildError::ColumnValueMismatch {
                columns: self.columns.len(),
                values: self.values.len(),
            });
        }
        if self.wheres.is_empty() {
            return Err(BuildError::MissingWhere(StatementType::Update));
        }

        out.write_string("UPDATE ");
        self.table.serialize(statement, out)?;

        out.next_line();
        out.write_string("SET ");
        for (i, (column, value)) in self.columns.iter().zip(&self.values).enumerate() {
            if i > 0 {
                out.write_string(", ");
            }
            out.write_string(column.name());
            out.write_string(" = ");
            value.serialize(statement, out)?;
        }

        serialize_where(&self.wheres, statement, out)?;
        serialize_returning(&self.returning, statement, out)
    }
}

use crate::{
    clause::{serialize_list, Clause, Projection, StatementType},
    error::{BuildError, Result},
    expr::Column,
    query_data::QueryData,
    statement::{serialize_returning, Statement},
    table::WritableRef,
};

/// An INSERT statement.
///
/// Column names are written unqualified; every row passed to `values` must
/// provide one value per column.
#[derive(Clone)]
pub struct InsertStatement {
    table: WritableRef,
    columns: Vec<Column>,
    rows: Vec<Vec<Projection>>,
    returning: Vec<Projection>,
}

impl InsertStatement {
    pub fn new(table: WritableRef, columns: Vec<Column>) -> Self {
        Self {
            table,
            columns,
            rows: vec![],
            returning: vec![],
        }
    }

    /// Adds one row of values.
    pub fn values(mut self, row: Vec<Projection>) -> Self {
        self.rows.push(row);
        self
    }

    pub fn returning(mut self, projections: Vec<Projection>) -> Self {
        self.returning.extend(projections);
        self
    }
}

impl Statement for InsertStatement {
    fn statement_type(&self) -> StatementType {
        StatementType::Insert
    }

    fn serialize_statement(&self, out: &mut QueryData) -> Result<()> {
        self.serialize(StatementType::Insert, out)
    }
}

impl Clause for InsertStatement {
    fn serialize(&self, statement: StatementType, out: &mut QueryData) -> Result<()> {
        if self.columns.is_empty() {
            return Err(BuildError::EmptyColumnList(StatementType::Insert));
        }
        if self.rows.is_empty() {
            return Err(BuildError::MissingValues);
        }
        if let Some(row) = self.rows.iter().find(|row| row.len() != self.columns.len()) {
            return Err(BuildError::ColumnValueMismatch {
                columns: self.columns.len(),
                values: row.len(),
            });
        }

        out.write_string("INSERT INTO ");
        self.table.serialize(statement, out)?;

        let names: Vec<&str> = self.columns.iter().map(Column::name).collect();
        out.write_string(" (");
        out.write_string(&names.join(", "));
        out.write_string(")");

        out.next_line();
        out.write_string("VALUES ");
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                out.write_string(", ");
            }
            out.write_string("(");
            serialize_list(row, ", ", statement, out)?;
            out.write_string(")");
        }

        serialize_returning(&self.returning, statement, out)
    }
}

//! The SELECT statement builder.

use tracing::trace;

use crate::{
    clause::{serialize_list, Clause, Projection, StatementType},
    error::{BuildError, Result},
    expr::{int, Bool, Expr},
    query_data::QueryData,
    statement::{clause::OrderByClause, serialize_where, Statement},
    table::TableRef,
};

/// A SELECT statement.
///
/// Constructed via [`ReadableTable::select`](crate::ReadableTable::select),
/// then chained with `.where_()`, `.order_by()`, etc. `LIMIT` and `OFFSET`
/// values are bound like any other literal.
#[derive(Clone)]
pub struct SelectStatement {
    projections: Vec<Projection>,
    from: Option<TableRef>,
    wheres: Vec<Expr<Bool>>,
    group_by: Vec<Projection>,
    having: Vec<Expr<Bool>>,
    orders: Vec<OrderByClause>,
    limit: Option<u32>,
    offset: Option<u32>,
}

impl SelectStatement {
    /// Starts a statement without a FROM clause, e.g. `SELECT $1`.
    pub fn new(projections: Vec<Projection>) -> Self {
        Self {
            projections,
            from: None,
            wheres: vec![],
            group_by: vec![],
            having: vec![],
            orders: vec![],
            limit: None,
            offset: None,
        }
    }

    /// Sets the table (or join tree) to read from.
    pub fn from(mut self, table: TableRef) -> Self {
        self.from = Some(table);
        self
    }

    /// Adds a WHERE condition. Multiple conditions are combined with `AND`.
    pub fn where_(mut self, condition: Expr<Bool>) -> Self {
        self.wheres.push(condition);
        self
    }

    pub fn group_by(mut self, expressions: Vec<Projection>) -> Self {
        self.group_by.extend(expressions);
        self
    }

    /// Adds a HAVING condition. Multiple conditions are combined with `AND`.
    pub fn having(mut self, condition: Expr<Bool>) -> Self {
        self.having.push(condition);
        self
    }

    /// Adds ORDER BY items, see [`asc`](crate::statement::asc) and
    /// [`desc`](crate::statement::desc).
    pub fn order_by(mut self, orders: Vec<OrderByClause>) -> Self {
        self.orders.extend(orders);
        self
    }

    /// Limit the number of results
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set query offset
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set pagination params. Pages start at 1; page 0 is treated as page 1.
    /// The offset saturates at `u32::MAX`.
    pub fn page(mut self, page: u32, per_page: u32) -> Self {
        self.limit = Some(per_page);
        self.offset = Some(page.saturating_sub(1).saturating_mul(per_page));
        self
    }
}

impl Statement for SelectStatement {
    fn statement_type(&self) -> StatementType {
        StatementType::Select
    }

    fn serialize_statement(&self, out: &mut QueryData) -> Result<()> {
        self.serialize(StatementType::Select, out)
    }
}

impl Clause for SelectStatement {
    fn serialize(&self, statement: StatementType, out: &mut QueryData) -> Result<()> {
        if self.projections.is_empty() {
            return Err(BuildError::EmptyProjections);
        }

        trace!(projections = self.projections.len(), "serializing SELECT");
        out.write_string("SELECT ");
        serialize_list(&self.projections, ", ", statement, out)?;

        if let Some(table) = &self.from {
            out.next_line();
            out.write_string("FROM ");
            table.serialize(statement, out)?;
        }

        serialize_where(&self.wheres, statement, out)?;

        if !self.group_by.is_empty() {
            out.next_line();
            out.write_string("GROUP BY ");
            serialize_list(&self.group_by, ", ", statement, out)?;
        }

        if !self.having.is_empty() {
            out.next_line();
            out.write_string("HAVING ");
            serialize_list(&self.having, " AND ", statement, out)?;
        }

        if !self.orders.is_empty() {
            out.next_line();
            out.write_string("ORDER BY ");
            serialize_list(&self.orders, ", ", statement, out)?;
        }

        if let Some(limit) = self.limit {
            out.next_line();
            out.write_string("LIMIT ");
            int(i64::from(limit)).serialize(statement, out)?;
        }

        if let Some(offset) = self.offset {
            out.next_line();
            out.write_string("OFFSET ");
            int(i64::from(offset)).serialize(statement, out)?;
        }

        Ok(())
    }
}

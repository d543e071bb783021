use std::sync::{Arc, PoisonError, RwLock};

use crate::{
    clause::{Clause, StatementType},
    error::Result,
    expr::Column,
    query_data::QueryData,
    table::{ReadableTable, TableRef, WritableRef, WritableTable},
};

#[derive(Debug)]
struct TableInner {
    schema_name: String,
    name: String,
    alias: RwLock<Option<String>>,
    columns: Vec<Column>,
}

/// A database table.
///
/// Cloning is cheap; clones refer to the same table, so an alias set through
/// one handle is visible through all of them.
#[derive(Debug, Clone)]
pub struct Table(Arc<TableInner>);

impl Table {
    /// Creates a table and qualifies each of `columns` with its name.
    pub fn new(schema_name: impl Into<String>, name: impl Into<String>, columns: Vec<Column>) -> Self {
        let name = name.into();
        for column in &columns {
            column.set_table_name(&name);
        }

        Self(Arc::new(TableInner {
            schema_name: schema_name.into(),
            name,
            alias: RwLock::new(None),
            columns,
        }))
    }

    /// Renames the table within the statement (`AS alias`) and re-qualifies
    /// its columns, including those already used in expressions.
    ///
    /// An empty alias is ignored. Must not race with serialization of
    /// anything reading these columns.
    pub fn alias(&self, alias: &str) {
        if alias.is_empty() {
            return;
        }
        *self.0.alias.write().unwrap_or_else(PoisonError::into_inner) = Some(alias.to_string());

        for column in &self.0.columns {
            column.set_table_name(alias);
        }
    }

    pub fn alias_name(&self) -> Option<String> {
        self.0
            .alias
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn columns(&self) -> &[Column] {
        &self.0.columns
    }
}

impl Clause for Table {
    fn serialize(&self, statement: StatementType, out: &mut QueryData) -> Result<()> {
        if !self.0.schema_name.is_empty() {
            out.write_string(&self.0.schema_name);
            out.write_string(".");
        }
        out.write_string(&self.0.name);

        // LOCK TABLE does not accept an alias.
        if statement == StatementType::Lock {
            return Ok(());
        }
        if let Some(alias) = self.alias_name() {
            out.write_string(" AS ");
            out.write_string(&alias);
        }

        Ok(())
    }
}

impl ReadableTable for Table {
    fn to_table_ref(&self) -> TableRef {
        Arc::new(self.clone())
    }

    fn schema_name(&self) -> &str {
        &self.0.schema_name
    }

    fn table_name(&self) -> &str {
        &self.0.name
    }
}

impl WritableTable for Table {
    fn to_writable_ref(&self) -> WritableRef {
        Arc::new(self.clone())
    }
}

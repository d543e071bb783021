use std::fmt;

use crate::{
    clause::{Clause, StatementType},
    error::Result,
    query_data::QueryData,
    statement::Statement,
    table::WritableRef,
};

/// PostgreSQL table lock modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockMode {
    AccessShare,
    RowShare,
    RowExclusive,
    ShareUpdateExclusive,
    Share,
    ShareRowExclusive,
    Exclusive,
    AccessExclusive,
}

impl fmt::Display for LockMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self {
            Self::AccessShare => "ACCESS SHARE",
            Self::RowShare => "ROW SHARE",
            Self::RowExclusive => "ROW EXCLUSIVE",
            Self::ShareUpdateExclusive => "SHARE UPDATE EXCLUSIVE",
            Self::Share => "SHARE",
            Self::ShareRowExclusive => "SHARE ROW EXCLUSIVE",
            Self::Exclusive => "EXCLUSIVE",
            Self::AccessExclusive => "ACCESS EXCLUSIVE",
        };
        f.write_str(mode)
    }
}

/// A `LOCK TABLE` statement.
#[derive(Clone)]
pub struct LockStatement {
    table: WritableRef,
    mode: Option<LockMode>,
    nowait: bool,
}

impl LockStatement {
    pub fn new(table: WritableRef) -> Self {
        Self {
            table,
            mode: None,
            nowait: false,
        }
    }

    pub fn in_mode(mut self, mode: LockMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Fail immediately instead of waiting for conflicting locks.
    pub fn nowait(mut self) -> Self {
        self.nowait = true;
        self
    }
}

impl Statement for LockStatement {
    fn statement_type(&self) -> StatementType {
        StatementType::Lock
    }

    fn serialize_statement(&self, out: &mut QueryData) -> Result<()> {
        self.serialize(StatementType::Lock, out)
    }
}

impl Clause for LockStatement {
    fn serialize(&self, statement: StatementType, out: &mut QueryData) -> Result<()> {
        out.write_string("LOCK TABLE ");
        self.table.serialize(statement, out)?;

        if let Some(mode) = self.mode {
            out.write_string(&format!(" IN {mode} MODE"));
        }
        if self.nowait {
            out.write_string(" NOWAIT");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{table::WritableTable, test_utils::fixtures};

    #[test]
    fn test_lock() {
        let f = fixtures();
        assert_eq!(f.table1.lock().sql().unwrap().0, "LOCK TABLE db.table1");
        assert_eq!(
            f.table1
                .lock()
                .in_mode(LockMode::ShareRowExclusive)
                .nowait()
                .sql()
                .unwrap(),
            ("LOCK TABLE db.table1 IN SHARE ROW EXCLUSIVE MODE NOWAIT".to_string(), vec![])
        );
    }

    #[test]
    fn test_lock_aliased_table() {
        let f = fixtures();
        f.table1.alias("t");
        assert_eq!(
            f.table1.lock().in_mode(LockMode::Exclusive).sql().unwrap().0,
            "LOCK TABLE db.table1 IN EXCLUSIVE MODE"
        );
    }
}

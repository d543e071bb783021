//! The serialization contract shared by every node of a statement.

use std::{fmt, sync::Arc};

use crate::{error::Result, query_data::QueryData};

/// The kind of statement a clause is being serialized into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementType {
    Select,
    Insert,
    Update,
    Delete,
    Lock,
}

impl fmt::Display for StatementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Self::Select => "SELECT",
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Lock => "LOCK",
        };
        f.write_str(keyword)
    }
}

/// A node that can write itself into a [`QueryData`].
///
/// Implementors write keywords and identifiers with
/// [`QueryData::write_string`] and route every literal through
/// [`QueryData::bind_value`]. A node missing a required part returns an
/// error instead of writing partial text; errors from children are returned
/// unchanged.
pub trait Clause: Send + Sync {
    fn serialize(&self, statement: StatementType, out: &mut QueryData) -> Result<()>;
}

impl<C: Clause + ?Sized> Clause for Arc<C> {
    fn serialize(&self, statement: StatementType, out: &mut QueryData) -> Result<()> {
        (**self).serialize(statement, out)
    }
}

/// A kind-erased value-producing clause.
///
/// Used for SELECT lists and for the arguments of functions that accept
/// operands of any kind.
#[derive(Clone)]
pub struct Projection(Arc<dyn Clause>);

impl Projection {
    pub fn new<C: Clause + 'static>(clause: C) -> Self {
        Self(Arc::new(clause))
    }

    pub(crate) fn from_arc(clause: Arc<dyn Clause>) -> Self {
        Self(clause)
    }
}

impl Clause for Projection {
    fn serialize(&self, statement: StatementType, out: &mut QueryData) -> Result<()> {
        self.0.serialize(statement, out)
    }
}

/// Serializes `clauses` separated by `separator`.
pub(crate) fn serialize_list<C: Clause>(
    clauses: &[C],
    separator: &str,
    statement: StatementType,
    out: &mut QueryData,
) -> Result<()> {
    for (i, clause) in clauses.iter().enumerate() {
        if i > 0 {
            out.write_string(separator);
        }
        clause.serialize(statement, out)?;
    }
    Ok(())
}

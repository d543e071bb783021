use std::{fmt, sync::Arc};

use tracing::trace;

use crate::{
    clause::{Clause, StatementType},
    error::{BuildError, Result},
    expr::{Bool, Expr},
    query_data::QueryData,
    table::{ReadableTable, TableRef},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

impl JoinType {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Full => "FULL JOIN",
            Self::Cross => "CROSS JOIN",
        }
    }
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinSide {
    Left,
    Right,
}

impl fmt::Display for JoinSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

struct JoinInner {
    lhs: Option<TableRef>,
    rhs: Option<TableRef>,
    join_type: JoinType,
    on_condition: Option<Expr<Bool>>,
}

/// A join of two readable tables. Join trees are readable but not writable.
///
/// Any of the parts may be absent at construction; missing parts are
/// reported when the join is serialized.
#[derive(Clone)]
pub struct JoinTable(Arc<JoinInner>);

impl JoinTable {
    pub fn new(
        lhs: Option<TableRef>,
        rhs: Option<TableRef>,
        join_type: JoinType,
        on_condition: Option<Expr<Bool>>,
    ) -> Self {
        Self(Arc::new(JoinInner {
            lhs,
            rhs,
            join_type,
            on_condition,
        }))
    }

    pub fn join_type(&self) -> JoinType {
        self.0.join_type
    }
}

impl Clause for JoinTable {
    fn serialize(&self, statement: StatementType, out: &mut QueryData) -> Result<()> {
        let join = &self.0;
        trace!(join_type = %join.join_type, "serializing join");

        let lhs = join.lhs.as_ref().ok_or(BuildError::NilJoinSide(JoinSide::Left))?;
        lhs.serialize(statement, out)?;

        out.next_line();
        out.write_string(join.join_type.keyword());
        out.write_string(" ");

        let rhs = join.rhs.as_ref().ok_or(BuildError::NilJoinSide(JoinSide::Right))?;
        rhs.serialize(statement, out)?;

        match &join.on_condition {
            None if join.join_type != JoinType::Cross => {
                Err(BuildError::MissingJoinCondition(join.join_type))
            }
            None => Ok(()),
            Some(condition) => {
                out.write_string(" ON ");
                condition.serialize(statement, out)
            }
        }
    }
}

impl ReadableTable for JoinTable {
    fn to_table_ref(&self) -> TableRef {
        Arc::new(self.clone())
    }

    fn schema_name(&self) -> &str {
        ""
    }

    fn table_name(&self) -> &str {
        ""
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::{
        expr::{int, Integer},
        test_utils::{fixtures, serialize, try_serialize},
        traits::Expression as _,
        value::Value,
    };

    #[test]
    fn test_join_kinds() {
        let f = fixtures();
        let cond = f.table1.col_int.eq(&f.table2.col_int);

        let cases = [
            (f.table1.inner_join(&f.table2, cond.clone()), "INNER JOIN"),
            (f.table1.left_join(&f.table2, cond.clone()), "LEFT JOIN"),
            (f.table1.right_join(&f.table2, cond.clone()), "RIGHT JOIN"),
            (f.table1.full_join(&f.table2, cond.clone()), "FULL JOIN"),
        ];

        for (join, keyword) in cases {
            assert_eq!(
                serialize(&join).0,
                format!("db.table1\n{keyword} db.table2 ON table1.colInt = table2.colInt")
            );
        }

        let cross = f.table1.cross_join(&f.table2);
        assert_eq!(cross.join_type(), JoinType::Cross);
        assert_eq!(serialize(&cross).0, "db.table1\nCROSS JOIN db.table2");
    }

    #[test]
    fn test_nested_join_numbers_placeholders_in_order() {
        let f = fixtures();
        let join = f
            .table1
            .inner_join(&f.table2, f.table1.col_int.eq(int(1)))
            .left_join(&f.table3, f.table3.col_int.eq(int(2)));

        assert_eq!(
            serialize(&join),
            (
                "db.table1\nINNER JOIN db.table2 ON table1.colInt = $1\nLEFT JOIN db.table3 ON table3.colInt = $2"
                    .to_string(),
                vec![Value::Int(1), Value::Int(2)]
            )
        );
        assert_eq!(join.schema_name(), "");
        assert_eq!(join.table_name(), "");
    }

    #[test]
    fn test_missing_condition() {
        let f = fixtures();
        for join_type in [JoinType::Inner, JoinType::Left, JoinType::Right, JoinType::Full] {
            let join = JoinTable::new(
                Some(f.table1.to_table_ref()),
                Some(f.table2.to_table_ref()),
                join_type,
                None,
            );
            assert_eq!(
                try_serialize(&join),
                Err(BuildError::MissingJoinCondition(join_type))
            );
        }
    }

    #[test]
    fn test_cross_join_condition_is_emitted() {
        let f = fixtures();
        let join = JoinTable::new(
            Some(f.table1.to_table_ref()),
            Some(f.table2.to_table_ref()),
            JoinType::Cross,
            Some(f.table1.col_int.eq(&f.table2.col_int)),
        );
        assert_eq!(
            serialize(&join).0,
            "db.table1\nCROSS JOIN db.table2 ON table1.colInt = table2.colInt"
        );
    }

    struct CountingTable(Arc<AtomicUsize>);

    impl Clause for CountingTable {
        fn serialize(&self, _statement: StatementType, out: &mut QueryData) -> Result<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            out.write_string("counted");
            Ok(())
        }
    }

    impl ReadableTable for CountingTable {
        fn to_table_ref(&self) -> TableRef {
            Arc::new(CountingTable(Arc::clone(&self.0)))
        }

        fn schema_name(&self) -> &str {
            ""
        }

        fn table_name(&self) -> &str {
            ""
        }
    }

    #[test]
    fn test_nil_left_fails_before_right_side() {
        let calls = Arc::new(AtomicUsize::new(0));
        let rhs = CountingTable(Arc::clone(&calls));
        let join = JoinTable::new(None, Some(rhs.to_table_ref()), JoinType::Cross, None);

        let err = try_serialize(&join).unwrap_err();
        assert_eq!(err, BuildError::NilJoinSide(JoinSide::Left));
        assert_eq!(err.to_string(), "left hand side of join operation is nil table");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_nil_right_after_left() {
        let calls = Arc::new(AtomicUsize::new(0));
        let lhs = CountingTable(Arc::clone(&calls));
        let join = JoinTable::new(Some(lhs.to_table_ref()), None, JoinType::Inner, None);

        assert_eq!(
            try_serialize(&join),
            Err(BuildError::NilJoinSide(JoinSide::Right))
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_left_error_propagates_unchanged() {
        let f = fixtures();
        let broken = JoinTable::new(None, Some(f.table1.to_table_ref()), JoinType::Cross, None);
        let join = broken.inner_join(&f.table2, f.table1.col_int.eq(&f.table2.col_int));

        assert_eq!(
            try_serialize(&join),
            Err(BuildError::NilJoinSide(JoinSide::Left))
        );
    }

    #[test]
    fn test_right_error_propagates_before_condition() {
        let f = fixtures();
        let calls = Arc::new(AtomicUsize::new(0));
        let broken = JoinTable::new(None, Some(f.table2.to_table_ref()), JoinType::Cross, None);
        let join = JoinTable::new(
            Some(f.table1.to_table_ref()),
            Some(broken.to_table_ref()),
            JoinType::Inner,
            Some(Expr::new(CountingTable(Arc::clone(&calls)))),
        );

        assert_eq!(
            try_serialize(&join),
            Err(BuildError::NilJoinSide(JoinSide::Left))
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_condition_error_propagates() {
        let f = fixtures();
        let join = f
            .table1
            .inner_join(&f.table2, f.table1.col_int.in_(Vec::<Expr<Integer>>::new()));

        assert_eq!(try_serialize(&join), Err(BuildError::EmptyInList));
    }
}

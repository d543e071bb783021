use crate::{
    clause::{Clause, StatementType},
    define_table,
    error::Result,
    expr::{Bool, Float, Integer, Text},
    query_data::QueryData,
    value::Value,
};

define_table!(
    pub struct Table1 {
        schema: "db",
        table: "table1",
        columns: {
            col_int: Integer => "colInt",
            col_float: Float => "colFloat",
            col_string: Text => "colString",
            col_bool: Bool => "colBool",
        }
    }
);

define_table!(
    pub struct Table2 {
        schema: "db",
        table: "table2",
        columns: {
            col_int: Integer => "colInt",
            col_float: Float => "colFloat",
            col_string: Text => "colString",
            col_bool: Bool => "colBool",
        }
    }
);

define_table!(
    pub struct Table3 {
        schema: "db",
        table: "table3",
        columns: {
            col_int: Integer => "colInt",
        }
    }
);

pub struct Fixtures {
    pub table1: Table1,
    pub table2: Table2,
    pub table3: Table3,
}

/// Fresh tables for each test, so aliasing in one test cannot leak into another.
pub fn fixtures() -> Fixtures {
    Fixtures {
        table1: Table1::new(),
        table2: Table2::new(),
        table3: Table3::new(),
    }
}

pub fn try_serialize<C: Clause + ?Sized>(clause: &C) -> Result<(String, Vec<Value>)> {
    let mut out = QueryData::new();
    clause.serialize(StatementType::Select, &mut out)?;
    out.finish()
}

pub fn serialize<C: Clause + ?Sized>(clause: &C) -> (String, Vec<Value>) {
    try_serialize(clause).unwrap()
}

pub fn assert_clause_serialize<C: Clause + ?Sized>(clause: &C, query: &str, args: &[Value]) {
    let (sql, values) = serialize(clause);
    assert_eq!(sql, query);
    assert_eq!(values, args);
}

//! Aggregate functions.

use crate::{
    clause::Projection,
    expr::{Bool, Expr, Integer, Numeric},
    func::{call, unary},
};

/// `AVG(expr)`. The result kind follows the operand kind.
pub fn avg<K: Numeric>(expr: impl Into<Expr<K>>) -> Expr<K> {
    unary("AVG", expr.into())
}

pub fn min<K: Numeric>(expr: impl Into<Expr<K>>) -> Expr<K> {
    unary("MIN", expr.into())
}

pub fn max<K: Numeric>(expr: impl Into<Expr<K>>) -> Expr<K> {
    unary("MAX", expr.into())
}

pub fn sum<K: Numeric>(expr: impl Into<Expr<K>>) -> Expr<K> {
    unary("SUM", expr.into())
}

/// `COUNT(expr)`; `count(STAR)` renders `COUNT(*)`.
pub fn count(expr: impl Into<Projection>) -> Expr<Integer> {
    call("COUNT", vec![expr.into()])
}

pub fn bit_and(expr: impl Into<Expr<Integer>>) -> Expr<Integer> {
    unary("BIT_AND", expr.into())
}

pub fn bit_or(expr: impl Into<Expr<Integer>>) -> Expr<Integer> {
    unary("BIT_OR", expr.into())
}

pub fn bool_and(expr: impl Into<Expr<Bool>>) -> Expr<Bool> {
    unary("BOOL_AND", expr.into())
}

pub fn bool_or(expr: impl Into<Expr<Bool>>) -> Expr<Bool> {
    unary("BOOL_OR", expr.into())
}

/// `EVERY(expr)`, the SQL-standard spelling of `BOOL_AND`.
pub fn every(expr: impl Into<Expr<Bool>>) -> Expr<Bool> {
    unary("EVERY", expr.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        expr::{float, int, Float, STAR},
        test_utils::{assert_clause_serialize, fixtures},
        value::Value,
    };

    #[test]
    fn test_avg() {
        let f = fixtures();
        let result: Expr<Float> = avg(&f.table1.col_float);
        assert_clause_serialize(&result, "AVG(table1.colFloat)", &[]);

        let result: Expr<Integer> = avg(&f.table1.col_int);
        assert_clause_serialize(&result, "AVG(table1.colInt)", &[]);
    }

    #[test]
    fn test_bit_and_bool_aggregates() {
        let f = fixtures();
        assert_clause_serialize(&bit_and(&f.table1.col_int), "BIT_AND(table1.colInt)", &[]);
        assert_clause_serialize(&bit_or(&f.table1.col_int), "BIT_OR(table1.colInt)", &[]);
        assert_clause_serialize(&bool_and(&f.table1.col_bool), "BOOL_AND(table1.colBool)", &[]);
        assert_clause_serialize(&bool_or(&f.table1.col_bool), "BOOL_OR(table1.colBool)", &[]);
        assert_clause_serialize(&every(&f.table1.col_bool), "EVERY(table1.colBool)", &[]);
    }

    #[test]
    fn test_min_max_sum() {
        let f = fixtures();
        assert_clause_serialize(&min(&f.table1.col_float), "MIN(table1.colFloat)", &[]);
        assert_clause_serialize(&min(&f.table1.col_int), "MIN(table1.colInt)", &[]);

        assert_clause_serialize(&max(&f.table1.col_float), "MAX(table1.colFloat)", &[]);
        assert_clause_serialize(&max(float(11.2222)), "MAX($1)", &[Value::Float(11.2222)]);
        assert_clause_serialize(&max(&f.table1.col_int), "MAX(table1.colInt)", &[]);
        assert_clause_serialize(&max(int(11)), "MAX($1)", &[Value::Int(11)]);

        assert_clause_serialize(&sum(&f.table1.col_float), "SUM(table1.colFloat)", &[]);
        assert_clause_serialize(&sum(float(11.2222)), "SUM($1)", &[Value::Float(11.2222)]);
        assert_clause_serialize(&sum(int(11)), "SUM($1)", &[Value::Int(11)]);
    }

    #[test]
    fn test_count() {
        let f = fixtures();
        assert_clause_serialize(&count(STAR), "COUNT(*)", &[]);
        assert_clause_serialize(&count(&f.table1.col_float), "COUNT(table1.colFloat)", &[]);
        assert_clause_serialize(&count(float(11.2222)), "COUNT($1)", &[Value::Float(11.2222)]);
    }
}

//! Select Query Types - clause trees recorded by the builder

use serde_json::Value;

use elif_sieve::{JoinType, LogicalOperator, Operator, SortDirection};

/// A single predicate inside a WHERE, HAVING or ON list
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Compare {
        column: String,
        operator: Operator,
        value: Value,
    },
    Column {
        first: String,
        operator: Operator,
        second: String,
    },
    Date {
        column: String,
        operator: Operator,
        value: Value,
    },
    In {
        column: String,
        values: Vec<Value>,
        not: bool,
    },
    Between {
        column: String,
        range: [Value; 2],
        not: bool,
    },
    Null {
        column: String,
        not: bool,
    },
    Raw {
        sql: String,
        bindings: Vec<Value>,
    },
    JsonContains {
        column: String,
        value: Value,
        not: bool,
    },
    JsonContainsKey {
        column: String,
        not: bool,
    },
    JsonLength {
        column: String,
        operator: Operator,
        value: Value,
    },
    JsonOverlaps {
        column: String,
        value: Value,
        not: bool,
    },
    /// Parenthesized group
    Nested(Vec<Clause>),
}

/// Predicate plus the connective joining it to the previous one
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub boolean: LogicalOperator,
    pub predicate: Predicate,
}

impl Clause {
    pub fn new(boolean: LogicalOperator, predicate: Predicate) -> Self {
        Self { boolean, predicate }
    }
}

/// A joined table with its ON clauses
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub join_type: JoinType,
    pub table: String,
    pub on: Vec<Clause>,
}

/// ORDER BY entry
#[derive(Debug, Clone, PartialEq)]
pub enum Ordering {
    Column(String, SortDirection),
    /// Raw expression, already carrying its direction
    Raw(String, Vec<Value>),
}

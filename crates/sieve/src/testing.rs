//! Call-recording builder used by the unit tests

use serde_json::Value;

use crate::builder::{JoinCallback, JoinClause, NestedQuery, QueryBuilder};
use crate::types::{JoinType, LogicalOperator, Operator, SortDirection};

/// Records every delegated call as a compact string
#[derive(Debug, Default)]
pub(crate) struct RecordingBuilder {
    pub(crate) calls: Vec<String>,
}

impl RecordingBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn nested(build: NestedQuery<'_>) -> String {
        let mut inner = RecordingBuilder::new();
        build(&mut inner);
        inner.calls.join("; ")
    }
}

fn list(values: &[Value]) -> String {
    values
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl QueryBuilder for RecordingBuilder {
    fn where_compare(&mut self, column: &str, operator: Operator, value: &Value, boolean: LogicalOperator) {
        self.calls.push(format!("where({} {} {}, {})", column, operator, value, boolean));
    }

    fn where_column(&mut self, first: &str, operator: Operator, second: &str, boolean: LogicalOperator) {
        self.calls.push(format!("where_column({} {} {}, {})", first, operator, second, boolean));
    }

    fn where_date(&mut self, column: &str, operator: Operator, value: &Value, boolean: LogicalOperator) {
        self.calls.push(format!("where_date({} {} {}, {})", column, operator, value, boolean));
    }

    fn where_in(&mut self, column: &str, values: &[Value], boolean: LogicalOperator, not: bool) {
        self.calls.push(format!("where_in({}, [{}], {}, not={})", column, list(values), boolean, not));
    }

    fn where_between(&mut self, column: &str, range: &[Value; 2], boolean: LogicalOperator, not: bool) {
        self.calls.push(format!(
            "where_between({}, [{}], {}, not={})",
            column,
            list(range),
            boolean,
            not
        ));
    }

    fn where_null(&mut self, column: &str, boolean: LogicalOperator, not: bool) {
        self.calls.push(format!("where_null({}, {}, not={})", column, boolean, not));
    }

    fn where_raw(&mut self, sql: &str, bindings: &[Value], boolean: LogicalOperator) {
        self.calls.push(format!("where_raw({}, [{}], {})", sql, list(bindings), boolean));
    }

    fn where_json_contains(&mut self, column: &str, value: &Value, boolean: LogicalOperator, not: bool) {
        self.calls.push(format!("where_json_contains({}, {}, {}, not={})", column, value, boolean, not));
    }

    fn where_json_contains_key(&mut self, column: &str, boolean: LogicalOperator, not: bool) {
        self.calls.push(format!("where_json_contains_key({}, {}, not={})", column, boolean, not));
    }

    fn where_json_length(&mut self, column: &str, operator: Operator, value: &Value, boolean: LogicalOperator) {
        self.calls.push(format!("where_json_length({} {} {}, {})", column, operator, value, boolean));
    }

    fn where_json_overlaps(&mut self, column: &str, value: &Value, boolean: LogicalOperator, not: bool) {
        self.calls.push(format!("where_json_overlaps({}, {}, {}, not={})", column, value, boolean, not));
    }

    fn where_nested(&mut self, boolean: LogicalOperator, build: NestedQuery<'_>) {
        let inner = Self::nested(build);
        self.calls.push(format!("where_nested({}, [{}])", boolean, inner));
    }

    fn having(&mut self, column: &str, operator: Operator, value: &Value, boolean: LogicalOperator) {
        self.calls.push(format!("having({} {} {}, {})", column, operator, value, boolean));
    }

    fn having_nested(&mut self, boolean: LogicalOperator, build: NestedQuery<'_>) {
        let inner = Self::nested(build);
        self.calls.push(format!("having_nested({}, [{}])", boolean, inner));
    }

    fn when(&mut self, condition: bool, then: NestedQuery<'_>) {
        self.calls.push(format!("when({})", condition));
        if condition {
            then(self);
        }
    }

    fn join(&mut self, table: &str, join_type: JoinType, build: JoinCallback<'_>) {
        let mut clause = RecordingJoin::default();
        build(&mut clause);
        self.calls.push(format!(
            "join({}, {}, [{}])",
            table,
            join_type,
            clause.builder.calls.join("; ")
        ));
    }

    fn order_by(&mut self, column: &str, direction: SortDirection) {
        self.calls.push(format!("order_by({}, {})", column, direction));
    }

    fn order_by_raw(&mut self, sql: &str, bindings: &[Value]) {
        self.calls.push(format!("order_by_raw({}, [{}])", sql, list(bindings)));
    }
}

#[derive(Debug, Default)]
struct RecordingJoin {
    builder: RecordingBuilder,
}

impl JoinClause for RecordingJoin {
    fn on(&mut self, first: &str, operator: Operator, second: &str, boolean: LogicalOperator) {
        self.builder
            .calls
            .push(format!("on({} {} {}, {})", first, operator, second, boolean));
    }

    fn query(&mut self) -> &mut dyn QueryBuilder {
        &mut self.builder
    }
}

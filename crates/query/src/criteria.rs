//! Criteria support - lets `elif-sieve` criteria be replayed onto a `SelectQuery`

use serde_json::Value;
use tracing::warn;

use elif_sieve::{
    Criteria, JoinCallback, JoinClause, JoinType, LogicalOperator, NestedQuery, Operator, QueryBuilder,
    SortDirection,
};

use super::builder::SelectQuery;
use super::types::*;

impl SelectQuery {
    /// Apply joins, conditions and sorts of `criteria` to this query
    pub fn apply_criteria(mut self, criteria: &Criteria) -> Self {
        criteria.apply_on_builder(&mut self);
        self
    }

    fn push_where(&mut self, boolean: LogicalOperator, predicate: Predicate) {
        self.wheres.push(Clause::new(boolean, predicate));
    }

    fn collect_nested(build: NestedQuery<'_>) -> SelectQuery {
        let mut nested = SelectQuery::new();
        build(&mut nested);
        nested
    }
}

impl QueryBuilder for SelectQuery {
    fn where_compare(&mut self, column: &str, operator: Operator, value: &Value, boolean: LogicalOperator) {
        // `= NULL` never matches; equality against null means IS [NOT] NULL
        if value.is_null() {
            let not = match operator {
                Operator::Equal => Some(false),
                Operator::NotEqual | Operator::DbNotEqual => Some(true),
                _ => None,
            };
            if let Some(not) = not {
                self.where_null(column, boolean, not);
                return;
            }
        }

        self.push_where(
            boolean,
            Predicate::Compare {
                column: column.to_string(),
                operator,
                value: value.clone(),
            },
        );
    }

    fn where_column(&mut self, first: &str, operator: Operator, second: &str, boolean: LogicalOperator) {
        self.push_where(
            boolean,
            Predicate::Column {
                first: first.to_string(),
                operator,
                second: second.to_string(),
            },
        );
    }

    fn where_date(&mut self, column: &str, operator: Operator, value: &Value, boolean: LogicalOperator) {
        self.push_where(
            boolean,
            Predicate::Date {
                column: column.to_string(),
                operator,
                value: value.clone(),
            },
        );
    }

    fn where_in(&mut self, column: &str, values: &[Value], boolean: LogicalOperator, not: bool) {
        self.push_where(
            boolean,
            Predicate::In {
                column: column.to_string(),
                values: values.to_vec(),
                not,
            },
        );
    }

    fn where_between(&mut self, column: &str, range: &[Value; 2], boolean: LogicalOperator, not: bool) {
        self.push_where(
            boolean,
            Predicate::Between {
                column: column.to_string(),
                range: range.clone(),
                not,
            },
        );
    }

    fn where_null(&mut self, column: &str, boolean: LogicalOperator, not: bool) {
        self.push_where(
            boolean,
            Predicate::Null {
                column: column.to_string(),
                not,
            },
        );
    }

    fn where_raw(&mut self, sql: &str, bindings: &[Value], boolean: LogicalOperator) {
        self.push_where(
            boolean,
            Predicate::Raw {
                sql: sql.to_string(),
                bindings: bindings.to_vec(),
            },
        );
    }

    fn where_json_contains(&mut self, column: &str, value: &Value, boolean: LogicalOperator, not: bool) {
        self.push_where(
            boolean,
            Predicate::JsonContains {
                column: column.to_string(),
                value: value.clone(),
                not,
            },
        );
    }

    fn where_json_contains_key(&mut self, column: &str, boolean: LogicalOperator, not: bool) {
        self.push_where(
            boolean,
            Predicate::JsonContainsKey {
                column: column.to_string(),
                not,
            },
        );
    }

    fn where_json_length(&mut self, column: &str, operator: Operator, value: &Value, boolean: LogicalOperator) {
        self.push_where(
            boolean,
            Predicate::JsonLength {
                column: column.to_string(),
                operator,
                value: value.clone(),
            },
        );
    }

    fn where_json_overlaps(&mut self, column: &str, value: &Value, boolean: LogicalOperator, not: bool) {
        self.push_where(
            boolean,
            Predicate::JsonOverlaps {
                column: column.to_string(),
                value: value.clone(),
                not,
            },
        );
    }

    fn where_nested(&mut self, boolean: LogicalOperator, build: NestedQuery<'_>) {
        let nested = Self::collect_nested(build);
        if !nested.wheres.is_empty() {
            self.push_where(boolean, Predicate::Nested(nested.wheres));
        }
    }

    fn having(&mut self, column: &str, operator: Operator, value: &Value, boolean: LogicalOperator) {
        self.havings.push(Clause::new(
            boolean,
            Predicate::Compare {
                column: column.to_string(),
                operator,
                value: value.clone(),
            },
        ));
    }

    fn having_nested(&mut self, boolean: LogicalOperator, build: NestedQuery<'_>) {
        let nested = Self::collect_nested(build);
        if !nested.havings.is_empty() {
            self.havings.push(Clause::new(boolean, Predicate::Nested(nested.havings)));
        }
    }

    fn when(&mut self, condition: bool, then: NestedQuery<'_>) {
        if condition {
            then(self);
        }
    }

    fn join(&mut self, table: &str, join_type: JoinType, build: JoinCallback<'_>) {
        let mut clause = JoinQuery::default();
        build(&mut clause);
        if !clause.query.havings.is_empty() {
            warn!(
                "Dropping {} aggregation condition(s) on join '{}': HAVING is not allowed in ON",
                clause.query.havings.len(),
                table
            );
        }
        self.joins.push(Join {
            join_type,
            table: table.to_string(),
            on: clause.query.wheres,
        });
    }

    fn order_by(&mut self, column: &str, direction: SortDirection) {
        self.orders.push(Ordering::Column(column.to_string(), direction));
    }

    fn order_by_raw(&mut self, sql: &str, bindings: &[Value]) {
        self.orders.push(Ordering::Raw(sql.to_string(), bindings.to_vec()));
    }
}

/// ON clause under construction; extra conditions land next to the ON pairs
#[derive(Debug, Default)]
struct JoinQuery {
    query: SelectQuery,
}

impl JoinClause for JoinQuery {
    fn on(&mut self, first: &str, operator: Operator, second: &str, boolean: LogicalOperator) {
        self.query.where_column(first, operator, second, boolean);
    }

    fn query(&mut self) -> &mut dyn QueryBuilder {
        &mut self.query
    }
}

//! Query builder seam
//!
//! Criteria never generate SQL themselves. Every condition, join and sort maps
//! onto exactly one call of these traits, which the host framework's query
//! builder implements (see `elif-query` for the stock implementation).

use serde_json::Value;

use crate::types::{JoinType, LogicalOperator, Operator, SortDirection};

/// Callback receiving a nested builder for grouped conditions
pub type NestedQuery<'a> = &'a mut dyn FnMut(&mut dyn QueryBuilder);

/// Callback receiving the ON clause of a join
pub type JoinCallback<'a> = &'a mut dyn FnMut(&mut dyn JoinClause);

/// Operations a host query builder must expose to have criteria applied to it
pub trait QueryBuilder {
    /// `column <operator> value`
    fn where_compare(&mut self, column: &str, operator: Operator, value: &Value, boolean: LogicalOperator);

    /// Compare two columns
    fn where_column(&mut self, first: &str, operator: Operator, second: &str, boolean: LogicalOperator);

    /// Compare the date part of a column
    fn where_date(&mut self, column: &str, operator: Operator, value: &Value, boolean: LogicalOperator);

    fn where_in(&mut self, column: &str, values: &[Value], boolean: LogicalOperator, not: bool);

    fn where_between(&mut self, column: &str, range: &[Value; 2], boolean: LogicalOperator, not: bool);

    fn where_null(&mut self, column: &str, boolean: LogicalOperator, not: bool);

    /// Raw SQL fragment with `?` placeholders for its bindings
    fn where_raw(&mut self, sql: &str, bindings: &[Value], boolean: LogicalOperator);

    fn where_json_contains(&mut self, column: &str, value: &Value, boolean: LogicalOperator, not: bool);

    fn where_json_contains_key(&mut self, column: &str, boolean: LogicalOperator, not: bool);

    fn where_json_length(&mut self, column: &str, operator: Operator, value: &Value, boolean: LogicalOperator);

    fn where_json_overlaps(&mut self, column: &str, value: &Value, boolean: LogicalOperator, not: bool);

    /// Parenthesized group of WHERE predicates built by `build`
    fn where_nested(&mut self, boolean: LogicalOperator, build: NestedQuery<'_>);

    fn having(&mut self, column: &str, operator: Operator, value: &Value, boolean: LogicalOperator);

    /// Parenthesized group of HAVING predicates built by `build`
    fn having_nested(&mut self, boolean: LogicalOperator, build: NestedQuery<'_>);

    /// Run `then` against this builder only when `condition` holds
    fn when(&mut self, condition: bool, then: NestedQuery<'_>);

    fn join(&mut self, table: &str, join_type: JoinType, build: JoinCallback<'_>);

    fn order_by(&mut self, column: &str, direction: SortDirection);

    /// Raw ORDER BY expression with `?` placeholders for its bindings
    fn order_by_raw(&mut self, sql: &str, bindings: &[Value]);
}

/// ON clause of a join under construction
pub trait JoinClause {
    fn on(&mut self, first: &str, operator: Operator, second: &str, boolean: LogicalOperator);

    /// The clause seen as a builder, for extra conditions on the join
    fn query(&mut self) -> &mut dyn QueryBuilder;
}

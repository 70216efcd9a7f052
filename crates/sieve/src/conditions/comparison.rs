//! Comparison conditions: `field <operator> value` in its different flavours

use serde_json::Value;

use super::{Condition, ConditionKind};
use crate::builder::QueryBuilder;
use crate::error::SieveResult;
use crate::types::{IntoLogicalOperator, IntoOperator, LogicalOperator, Operator};

/// Which builder call a comparison is forwarded to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonTarget {
    /// `where_compare`
    Value,
    /// `having`
    Aggregation,
    /// `where_column`, the value holds the other column name
    Column,
    /// `where_date`
    Date,
    /// `where_json_length`
    JsonLength,
}

/// Compares a field against a value, another column, a date or a JSON length
#[derive(Debug, Clone)]
pub struct ComparisonCondition {
    pub field: String,
    pub operator: Operator,
    pub value: Value,
    pub boolean: LogicalOperator,
    pub target: ComparisonTarget,
}

impl ComparisonCondition {
    /// Plain WHERE comparison
    pub fn new(
        field: impl Into<String>,
        operator: impl IntoOperator,
        value: impl Into<Value>,
    ) -> SieveResult<Self> {
        Self::with_target(field, operator, value, ComparisonTarget::Value)
    }

    /// HAVING comparison on an aggregated column
    pub fn aggregation(
        field: impl Into<String>,
        operator: impl IntoOperator,
        value: impl Into<Value>,
    ) -> SieveResult<Self> {
        Self::with_target(field, operator, value, ComparisonTarget::Aggregation)
    }

    /// Column-to-column comparison
    pub fn column(
        first: impl Into<String>,
        operator: impl IntoOperator,
        second: impl Into<String>,
    ) -> SieveResult<Self> {
        Self::with_target(first, operator, Value::String(second.into()), ComparisonTarget::Column)
    }

    /// Compare the date part of a timestamp column
    pub fn date(
        field: impl Into<String>,
        operator: impl IntoOperator,
        value: impl Into<Value>,
    ) -> SieveResult<Self> {
        Self::with_target(field, operator, value, ComparisonTarget::Date)
    }

    /// Compare the length of a JSON array
    pub fn json_length(
        field: impl Into<String>,
        operator: impl IntoOperator,
        value: impl Into<Value>,
    ) -> SieveResult<Self> {
        Self::with_target(field, operator, value, ComparisonTarget::JsonLength)
    }

    fn with_target(
        field: impl Into<String>,
        operator: impl IntoOperator,
        value: impl Into<Value>,
        target: ComparisonTarget,
    ) -> SieveResult<Self> {
        Ok(Self {
            field: field.into(),
            operator: operator.into_operator()?,
            value: value.into(),
            boolean: LogicalOperator::And,
            target,
        })
    }

    /// Attach with OR instead of AND
    pub fn or(mut self) -> Self {
        self.boolean = LogicalOperator::Or;
        self
    }

    /// Set the connective, validating string input
    pub fn with_boolean(mut self, boolean: impl IntoLogicalOperator) -> SieveResult<Self> {
        self.boolean = boolean.into_logical_operator()?;
        Ok(self)
    }

    fn column_value(&self) -> String {
        match &self.value {
            Value::String(column) => column.clone(),
            other => other.to_string(),
        }
    }
}

impl Condition for ComparisonCondition {
    fn boolean(&self) -> LogicalOperator {
        self.boolean
    }

    fn kind(&self) -> ConditionKind {
        match self.target {
            ComparisonTarget::Aggregation => ConditionKind::Aggregation,
            _ => ConditionKind::Basic,
        }
    }

    fn apply(&self, builder: &mut dyn QueryBuilder) {
        match self.target {
            ComparisonTarget::Value => {
                builder.where_compare(&self.field, self.operator, &self.value, self.boolean)
            }
            ComparisonTarget::Aggregation => {
                builder.having(&self.field, self.operator, &self.value, self.boolean)
            }
            ComparisonTarget::Column => {
                builder.where_column(&self.field, self.operator, &self.column_value(), self.boolean)
            }
            ComparisonTarget::Date => {
                builder.where_date(&self.field, self.operator, &self.value, self.boolean)
            }
            ComparisonTarget::JsonLength => {
                builder.where_json_length(&self.field, self.operator, &self.value, self.boolean)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SieveError;
    use crate::testing::RecordingBuilder;

    #[test]
    fn where_comparison_forwards_to_where() {
        let condition = ComparisonCondition::new("users.id", "=", 1).unwrap();
        let mut builder = RecordingBuilder::new();
        condition.apply(&mut builder);
        assert_eq!(builder.calls, vec!["where(users.id = 1, and)"]);
        assert_eq!(condition.kind(), ConditionKind::Basic);
    }

    #[test]
    fn operator_is_normalized() {
        let condition = ComparisonCondition::new("users.name", "like", "%jo%").unwrap();
        assert_eq!(condition.operator, Operator::Like);
    }

    #[test]
    fn invalid_operator_is_rejected() {
        let err = ComparisonCondition::new("age", "INVALID", 18).unwrap_err();
        assert!(matches!(err, SieveError::InvalidOperator { ref operator } if operator == "INVALID"));
    }

    #[test]
    fn invalid_boolean_is_rejected() {
        let err = ComparisonCondition::new("age", ">", 18)
            .unwrap()
            .with_boolean("xor")
            .unwrap_err();
        assert!(matches!(err, SieveError::InvalidLogicalOperator { .. }));
    }

    #[test]
    fn aggregation_forwards_to_having() {
        let condition = ComparisonCondition::aggregation("salary", ">", 1000).unwrap().or();
        let mut builder = RecordingBuilder::new();
        condition.apply(&mut builder);
        assert_eq!(builder.calls, vec!["having(salary > 1000, or)"]);
        assert_eq!(condition.kind(), ConditionKind::Aggregation);
    }

    #[test]
    fn column_date_and_json_length_targets() {
        let mut builder = RecordingBuilder::new();
        ComparisonCondition::column("orders.created_at", ">", "orders.paid_at")
            .unwrap()
            .apply(&mut builder);
        ComparisonCondition::date("orders.date", ">=", "2023-01-01")
            .unwrap()
            .apply(&mut builder);
        ComparisonCondition::json_length("tags", ">", 2)
            .unwrap()
            .with_boolean("or")
            .unwrap()
            .apply(&mut builder);

        assert_eq!(
            builder.calls,
            vec![
                "where_column(orders.created_at > orders.paid_at, and)",
                "where_date(orders.date >= \"2023-01-01\", and)",
                "where_json_length(tags > 2, or)",
            ]
        );
    }
}

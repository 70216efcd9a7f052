use serde_json::Value;

use super::Condition;
use crate::builder::QueryBuilder;
use crate::error::SieveResult;
use crate::types::{IntoLogicalOperator, LogicalOperator};

/// Raw SQL predicate with `?` placeholders
#[derive(Debug, Clone)]
pub struct RawCondition {
    pub expression: String,
    pub bindings: Vec<Value>,
    pub boolean: LogicalOperator,
}

impl RawCondition {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            bindings: Vec::new(),
            boolean: LogicalOperator::And,
        }
    }

    pub fn with_bindings<V: Into<Value>>(
        expression: impl Into<String>,
        bindings: impl IntoIterator<Item = V>,
    ) -> Self {
        Self {
            bindings: bindings.into_iter().map(Into::into).collect(),
            ..Self::new(expression)
        }
    }

    pub fn or(mut self) -> Self {
        self.boolean = LogicalOperator::Or;
        self
    }

    pub fn with_boolean(mut self, boolean: impl IntoLogicalOperator) -> SieveResult<Self> {
        self.boolean = boolean.into_logical_operator()?;
        Ok(self)
    }
}

impl Condition for RawCondition {
    fn boolean(&self) -> LogicalOperator {
        self.boolean
    }

    fn apply(&self, builder: &mut dyn QueryBuilder) {
        builder.where_raw(&self.expression, &self.bindings, self.boolean);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingBuilder;

    #[test]
    fn raw_forwards_expression_and_bindings() {
        let mut builder = RecordingBuilder::new();
        RawCondition::with_bindings("salary > ? and bonus < ?", [1000, 50]).apply(&mut builder);
        RawCondition::new("archived is false").or().apply(&mut builder);
        assert_eq!(
            builder.calls,
            vec![
                "where_raw(salary > ? and bonus < ?, [1000, 50], and)",
                "where_raw(archived is false, [], or)",
            ]
        );
    }
}

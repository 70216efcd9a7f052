//! Set membership and range conditions

use serde_json::Value;

use super::Condition;
use crate::builder::QueryBuilder;
use crate::error::{SieveError, SieveResult};
use crate::types::{IntoLogicalOperator, LogicalOperator};

/// `field IN (...)`, or `NOT IN` when negated
#[derive(Debug, Clone)]
pub struct InCondition {
    pub field: String,
    pub values: Vec<Value>,
    pub boolean: LogicalOperator,
    pub not: bool,
}

impl InCondition {
    pub fn new<V: Into<Value>>(field: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self {
        Self {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
            boolean: LogicalOperator::And,
            not: false,
        }
    }

    pub fn not_in<V: Into<Value>>(field: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self {
        Self::new(field, values).negate()
    }

    pub fn negate(mut self) -> Self {
        self.not = true;
        self
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

impl Condition for InCondition {
    fn boolean(&self) -> LogicalOperator {
        self.boolean
    }

    fn apply(&self, builder: &mut dyn QueryBuilder) {
        builder.where_in(&self.field, &self.values, self.boolean, self.not);
    }
}

/// `field BETWEEN low AND high`, or `NOT BETWEEN` when negated
#[derive(Debug, Clone)]
pub struct BetweenCondition {
    pub field: String,
    pub values: [Value; 2],
    pub boolean: LogicalOperator,
    pub not: bool,
}

impl BetweenCondition {
    /// Build from exactly two bounds
    pub fn new(field: impl Into<String>, low: impl Into<Value>, high: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            values: [low.into(), high.into()],
            boolean: LogicalOperator::And,
            not: false,
        }
    }

    /// Build from a list that must hold exactly two values
    pub fn from_values<V: Into<Value>>(
        field: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> SieveResult<Self> {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        let values: [Value; 2] = values
            .try_into()
            .map_err(|rejected: Vec<Value>| SieveError::InvalidBetweenValues {
                count: rejected.len(),
            })?;
        let [low, high] = values;
        Ok(Self::new(field, low, high))
    }

    pub fn negate(mut self) -> Self {
        self.not = true;
        self
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

impl Condition for BetweenCondition {
    fn boolean(&self) -> LogicalOperator {
        self.boolean
    }

    fn apply(&self, builder: &mut dyn QueryBuilder) {
        builder.where_between(&self.field, &self.values, self.boolean, self.not);
    }
}

//! JSON column conditions
//!
//! Columns use the `column->key->nested` path syntax; the host builder is
//! responsible for translating it into its dialect.

use serde_json::Value;

use super::Condition;
use crate::builder::QueryBuilder;
use crate::error::SieveResult;
use crate::types::{IntoLogicalOperator, LogicalOperator};

/// JSON document at `field` contains `value`
#[derive(Debug, Clone)]
pub struct JsonContainsCondition {
    pub field: String,
    pub value: Value,
    pub boolean: LogicalOperator,
    pub not: bool,
}

impl JsonContainsCondition {
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            boolean: LogicalOperator::And,
            not: false,
        }
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

impl Condition for JsonContainsCondition {
    fn boolean(&self) -> LogicalOperator {
        self.boolean
    }

    fn apply(&self, builder: &mut dyn QueryBuilder) {
        builder.where_json_contains(&self.field, &self.value, self.boolean, self.not);
    }
}

/// The last segment of the `field` path exists as a key
#[derive(Debug, Clone)]
pub struct JsonContainsKeyCondition {
    pub field: String,
    pub boolean: LogicalOperator,
    pub not: bool,
}

impl JsonContainsKeyCondition {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            boolean: LogicalOperator::And,
            not: false,
        }
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

impl Condition for JsonContainsKeyCondition {
    fn boolean(&self) -> LogicalOperator {
        self.boolean
    }

    fn apply(&self, builder: &mut dyn QueryBuilder) {
        builder.where_json_contains_key(&self.field, self.boolean, self.not);
    }
}

/// JSON array at `field` shares at least one element with `value`
#[derive(Debug, Clone)]
pub struct JsonOverlapsCondition {
    pub field: String,
    pub value: Value,
    pub boolean: LogicalOperator,
    pub not: bool,
}

impl JsonOverlapsCondition {
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            boolean: LogicalOperator::And,
            not: false,
        }
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

impl Condition for JsonOverlapsCondition {
    fn boolean(&self) -> LogicalOperator {
        self.boolean
    }

    fn apply(&self, builder: &mut dyn QueryBuilder) {
        builder.where_json_overlaps(&self.field, &self.value, self.boolean, self.not);
    }
}

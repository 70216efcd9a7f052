use super::Condition;
use crate::builder::QueryBuilder;
use crate::error::SieveResult;
use crate::types::{IntoLogicalOperator, LogicalOperator};

/// `field IS NULL`, or `IS NOT NULL` when negated
#[derive(Debug, Clone)]
pub struct NullCondition {
    pub field: String,
    pub boolean: LogicalOperator,
    pub not: bool,
}

impl NullCondition {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            boolean: LogicalOperator::And,
            not: false,
        }
    }

    pub fn not_null(field: impl Into<String>) -> Self {
        Self::new(field).negate()
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

impl Condition for NullCondition {
    fn boolean(&self) -> LogicalOperator {
        self.boolean
    }

    fn apply(&self, builder: &mut dyn QueryBuilder) {
        builder.where_null(&self.field, self.boolean, self.not);
    }
}

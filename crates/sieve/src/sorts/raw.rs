use serde_json::Value;

use super::Sort;
use crate::builder::QueryBuilder;
use crate::error::SieveResult;
use crate::types::{IntoSortDirection, SortDirection};

/// Order by a raw SQL expression
#[derive(Debug, Clone, PartialEq)]
pub struct RawSort {
    expression: String,
    direction: SortDirection,
    bindings: Vec<Value>,
}

impl RawSort {
    pub fn new(expression: impl Into<String>, direction: impl IntoSortDirection) -> SieveResult<Self> {
        Ok(Self {
            expression: expression.into(),
            direction: direction.into_sort_direction()?,
            bindings: Vec::new(),
        })
    }

    pub fn with_bindings<V: Into<Value>>(mut self, bindings: impl IntoIterator<Item = V>) -> Self {
        self.bindings = bindings.into_iter().map(Into::into).collect();
        self
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn bindings(&self) -> &[Value] {
        &self.bindings
    }
}

impl Sort for RawSort {
    fn direction(&self) -> SortDirection {
        self.direction
    }

    fn apply(&self, builder: &mut dyn QueryBuilder) {
        let sql = format!("{} {}", self.expression, self.direction);
        builder.order_by_raw(&sql, &self.bindings);
    }
}

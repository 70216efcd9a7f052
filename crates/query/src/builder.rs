//! Select Query - Core builder implementation

use super::types::*;

/// SELECT query builder that criteria can be applied to
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectQuery {
    pub(crate) select_fields: Vec<String>,
    pub(crate) from_table: Option<String>,
    pub(crate) joins: Vec<Join>,
    pub(crate) wheres: Vec<Clause>,
    pub(crate) group_by: Vec<String>,
    pub(crate) havings: Vec<Clause>,
    pub(crate) orders: Vec<Ordering>,
    pub(crate) limit_count: Option<i64>,
    pub(crate) offset_value: Option<i64>,
    pub(crate) distinct: bool,
}

impl SelectQuery {
    /// Create an empty query without a FROM table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a query selecting from `table`
    pub fn table(table: &str) -> Self {
        Self {
            from_table: Some(table.to_string()),
            ..Self::default()
        }
    }

    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    pub fn wheres(&self) -> &[Clause] {
        &self.wheres
    }

    pub fn havings(&self) -> &[Clause] {
        &self.havings
    }

    pub fn orders(&self) -> &[Ordering] {
        &self.orders
    }
}

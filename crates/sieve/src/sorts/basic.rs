use super::Sort;
use crate::builder::QueryBuilder;
use crate::error::SieveResult;
use crate::types::{IntoSortDirection, SortDirection};

/// Order by a single column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicSort {
    field: String,
    direction: SortDirection,
}

impl BasicSort {
    /// Direction strings are trimmed and matched case-insensitively
    pub fn new(field: impl Into<String>, direction: impl IntoSortDirection) -> SieveResult<Self> {
        Ok(Self {
            field: field.into(),
            direction: direction.into_sort_direction()?,
        })
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

impl Sort for BasicSort {
    fn direction(&self) -> SortDirection {
        self.direction
    }

    fn field(&self) -> Option<&str> {
        Some(&self.field)
    }

    fn apply(&self, builder: &mut dyn QueryBuilder) {
        builder.order_by(&self.field, self.direction);
    }
}

//! Sorts - ORDER BY specifications

pub mod basic;
pub mod raw;

use std::fmt::Debug;

use crate::builder::QueryBuilder;
use crate::types::SortDirection;

pub use basic::BasicSort;
pub use raw::RawSort;

/// An ORDER BY clause that can be replayed onto a query builder
pub trait Sort: Debug + Send + Sync {
    fn direction(&self) -> SortDirection;

    /// Field a keyed sort is registered under; keyed sorts on the same field
    /// replace each other inside a criteria
    fn field(&self) -> Option<&str> {
        None
    }

    fn apply(&self, builder: &mut dyn QueryBuilder);
}

impl<S: Sort + ?Sized> Sort for Box<S> {
    fn direction(&self) -> SortDirection {
        (**self).direction()
    }

    fn field(&self) -> Option<&str> {
        (**self).field()
    }

    fn apply(&self, builder: &mut dyn QueryBuilder) {
        (**self).apply(builder)
    }
}

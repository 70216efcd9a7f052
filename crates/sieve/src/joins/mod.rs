//! Joins - table join specifications registered on a criteria by name

pub mod closure;
pub mod standard;

use std::fmt::Debug;

use crate::builder::QueryBuilder;
use crate::types::JoinType;

pub use closure::ClosureJoin;
pub use standard::StandardJoin;

/// A join that can be replayed onto a query builder
pub trait Join: Debug + Send + Sync {
    /// Registration key, defaults to the joined table
    fn name(&self) -> &str;

    fn table(&self) -> &str;

    fn join_type(&self) -> JoinType;

    fn apply(&self, builder: &mut dyn QueryBuilder);
}

impl<J: Join + ?Sized> Join for Box<J> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn table(&self) -> &str {
        (**self).table()
    }

    fn join_type(&self) -> JoinType {
        (**self).join_type()
    }

    fn apply(&self, builder: &mut dyn QueryBuilder) {
        (**self).apply(builder)
    }
}

//! Conditions - WHERE and HAVING predicates applied onto a query builder
//!
//! Each condition type forwards itself to a single [`QueryBuilder`] call.
//! [`GroupConditions`] nests other conditions inside a parenthesized group and
//! decides between WHERE and HAVING from the kind of its members.

pub mod comparison;
pub mod group;
pub mod json;
pub mod null;
pub mod range;
pub mod raw;
pub mod when;

use std::fmt::Debug;

use crate::builder::QueryBuilder;
use crate::types::LogicalOperator;

pub use comparison::{ComparisonCondition, ComparisonTarget};
pub use group::GroupConditions;
pub use json::{JsonContainsCondition, JsonContainsKeyCondition, JsonOverlapsCondition};
pub use null::NullCondition;
pub use range::{BetweenCondition, InCondition};
pub use raw::RawCondition;
pub use when::WhenCondition;

/// Whether a condition filters rows or aggregated groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionKind {
    /// Applied through WHERE
    Basic,
    /// Applied through HAVING
    Aggregation,
}

/// A predicate that can be replayed onto a query builder
pub trait Condition: Debug + Send + Sync {
    /// Connective joining this condition to the previous one
    fn boolean(&self) -> LogicalOperator;

    fn kind(&self) -> ConditionKind {
        ConditionKind::Basic
    }

    fn apply(&self, builder: &mut dyn QueryBuilder);
}

impl<C: Condition + ?Sized> Condition for Box<C> {
    fn boolean(&self) -> LogicalOperator {
        (**self).boolean()
    }

    fn kind(&self) -> ConditionKind {
        (**self).kind()
    }

    fn apply(&self, builder: &mut dyn QueryBuilder) {
        (**self).apply(builder)
    }
}

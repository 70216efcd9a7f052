//! # elif-sieve: Criteria composition for elif.rs
//!
//! Describe joins, conditions and sorts declaratively, then replay them onto
//! any query builder implementing [`QueryBuilder`]. Replay order is always
//! joins (by priority), conditions, sorts.
//!
//! ```ignore
//! let mut criteria = Criteria::new();
//! criteria
//!     .append_join(StandardJoin::new("users", "users.id", "=", "posts.user_id")?)
//!     .append_condition(ComparisonCondition::new("users.active", "=", true)?)
//!     .append_sort(BasicSort::desc("posts.created_at"));
//!
//! criteria.apply_on_builder(&mut query);
//! ```
//!
//! [`FilterService`] builds criteria from request query parameters.

pub mod builder;
pub mod conditions;
pub mod config;
pub mod criteria;
pub mod error;
pub mod filters;
pub mod joins;
pub mod sorts;
pub mod types;

#[cfg(test)]
mod testing;

pub use builder::{JoinCallback, JoinClause, NestedQuery, QueryBuilder};
pub use conditions::{
    BetweenCondition, ComparisonCondition, ComparisonTarget, Condition, ConditionKind, GroupConditions,
    InCondition, JsonContainsCondition, JsonContainsKeyCondition, JsonOverlapsCondition, NullCondition,
    RawCondition, WhenCondition,
};
pub use config::SieveConfig;
pub use criteria::{Criteria, DEFAULT_JOIN_PRIORITY};
pub use error::{SieveError, SieveResult};
pub use filters::{is_blank, Filter, FilterService, SortFactory, SortTarget};
pub use joins::{ClosureJoin, Join, StandardJoin};
pub use sorts::{BasicSort, RawSort, Sort};
pub use types::{
    IntoJoinType, IntoLogicalOperator, IntoOperator, IntoSortDirection, JoinType, LogicalOperator, Operator,
    SortDirection,
};

//! # elif-query: Select query builder for elif.rs
//!
//! A SELECT builder that implements the `elif-sieve` builder seam, so
//! criteria can be applied to it and rendered as parameterized PostgreSQL.

pub mod builder;
pub mod criteria;
pub mod select;
pub mod sql_generation;
pub mod types;

pub use builder::SelectQuery;
pub use types::{Clause, Join, Ordering, Predicate};

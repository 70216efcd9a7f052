//! Criteria - collects joins, conditions and sorts and replays them onto a builder
//!
//! Replay order is fixed: joins (ascending priority, ties in registration
//! order), then conditions (insertion order), then sorts (insertion order).

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::builder::QueryBuilder;
use crate::conditions::Condition;
use crate::config::SieveConfig;
use crate::joins::Join;
use crate::sorts::Sort;

/// Priority given to joins registered without an explicit one
pub const DEFAULT_JOIN_PRIORITY: i32 = 100;

#[derive(Debug)]
struct RegisteredJoin {
    priority: i32,
    join: Box<dyn Join>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum SortKey {
    Field(String),
    Appended(usize),
}

/// Composite of joins, conditions and sorts applied onto a query builder
#[derive(Debug)]
pub struct Criteria {
    joins: IndexMap<String, RegisteredJoin>,
    conditions: Vec<Box<dyn Condition>>,
    sorts: IndexMap<SortKey, Box<dyn Sort>>,
    appended_sorts: usize,
    default_join_priority: i32,
}

impl Default for Criteria {
    fn default() -> Self {
        Self::new()
    }
}

impl Criteria {
    pub fn new() -> Self {
        Self {
            joins: IndexMap::new(),
            conditions: Vec::new(),
            sorts: IndexMap::new(),
            appended_sorts: 0,
            default_join_priority: DEFAULT_JOIN_PRIORITY,
        }
    }

    /// Empty criteria using the configured default join priority
    pub fn with_config(config: &SieveConfig) -> Self {
        Self {
            default_join_priority: config.default_join_priority,
            ..Self::new()
        }
    }

    /// Register a join under its name with the default priority
    pub fn append_join(&mut self, join: impl Join + 'static) -> &mut Self {
        let priority = self.default_join_priority;
        self.append_join_with_priority(join, priority)
    }

    /// Register a join under its name; lower priorities are joined first.
    /// A join registered under an existing name replaces it.
    pub fn append_join_with_priority(&mut self, join: impl Join + 'static, priority: i32) -> &mut Self {
        let name = join.name().to_string();
        trace!("Registering join '{}' with priority {}", name, priority);
        self.joins.insert(
            name,
            RegisteredJoin {
                priority,
                join: Box::new(join),
            },
        );
        self
    }

    pub fn remove_join_if_exists(&mut self, name: &str) -> &mut Self {
        self.joins.shift_remove(name);
        self
    }

    pub fn join_exists(&self, name: &str) -> bool {
        self.joins.contains_key(name)
    }

    pub fn join_priority(&self, name: &str) -> Option<i32> {
        self.joins.get(name).map(|registered| registered.priority)
    }

    pub fn append_condition(&mut self, condition: impl Condition + 'static) -> &mut Self {
        self.conditions.push(Box::new(condition));
        self
    }

    /// Add a sort. Sorts keyed by a field replace an earlier sort on the same
    /// field in place; unkeyed sorts are always appended.
    pub fn append_sort(&mut self, sort: impl Sort + 'static) -> &mut Self {
        let key = match sort.field() {
            Some(field) => SortKey::Field(field.to_string()),
            None => {
                self.appended_sorts += 1;
                SortKey::Appended(self.appended_sorts)
            }
        };
        self.sorts.insert(key, Box::new(sort));
        self
    }

    /// Joins in the order they will be applied
    pub fn joins(&self) -> Vec<&dyn Join> {
        self.ordered_joins()
            .into_iter()
            .map(|registered| registered.join.as_ref())
            .collect()
    }

    pub fn conditions(&self) -> &[Box<dyn Condition>] {
        &self.conditions
    }

    pub fn sorts(&self) -> Vec<&dyn Sort> {
        self.sorts.values().map(|sort| sort.as_ref()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.joins.is_empty() && self.conditions.is_empty() && self.sorts.is_empty()
    }

    /// Apply joins, then conditions, then sorts
    pub fn apply_on_builder<'b, B: QueryBuilder>(&self, builder: &'b mut B) -> &'b mut B {
        debug!(
            "Applying criteria: {} joins, {} conditions, {} sorts",
            self.joins.len(),
            self.conditions.len(),
            self.sorts.len()
        );

        let query: &mut dyn QueryBuilder = &mut *builder;
        self.apply_joins(query)
            .apply_conditions(query, &self.conditions)
            .apply_sorts(query);

        builder
    }

    pub fn apply_joins(&self, builder: &mut dyn QueryBuilder) -> &Self {
        for registered in self.ordered_joins() {
            trace!(
                "Applying {} join '{}' (priority {})",
                registered.join.join_type(),
                registered.join.name(),
                registered.priority
            );
            registered.join.apply(builder);
        }
        self
    }

    pub fn apply_conditions(&self, builder: &mut dyn QueryBuilder, conditions: &[Box<dyn Condition>]) -> &Self {
        for condition in conditions {
            condition.apply(builder);
        }
        self
    }

    pub fn apply_sorts(&self, builder: &mut dyn QueryBuilder) -> &Self {
        for sort in self.sorts.values() {
            sort.apply(builder);
        }
        self
    }

    fn ordered_joins(&self) -> Vec<&RegisteredJoin> {
        let mut joins: Vec<&RegisteredJoin> = self.joins.values().collect();
        joins.sort_by_key(|registered| registered.priority);
        joins
    }
}

//! Filter service - turns request parameters into criteria

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::{debug, trace, warn};

use super::{is_blank, Filter};
use crate::config::SieveConfig;
use crate::criteria::Criteria;
use crate::error::SieveResult;
use crate::sorts::{BasicSort, Sort};
use crate::types::SortDirection;

/// Builds a sort for a resolved direction
pub type SortFactory = Arc<dyn Fn(SortDirection) -> Box<dyn Sort> + Send + Sync>;

/// What a sortable request field resolves to
#[derive(Clone)]
pub enum SortTarget {
    /// Order by this column
    Column(String),
    /// Build the sort with a custom factory
    Custom(SortFactory),
}

impl SortTarget {
    fn build(&self, direction: SortDirection) -> Box<dyn Sort> {
        match self {
            SortTarget::Column(column) => Box::new(match direction {
                SortDirection::Asc => BasicSort::asc(column.as_str()),
                SortDirection::Desc => BasicSort::desc(column.as_str()),
            }),
            SortTarget::Custom(factory) => factory(direction),
        }
    }
}

impl fmt::Debug for SortTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortTarget::Column(column) => f.debug_tuple("Column").field(column).finish(),
            SortTarget::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Applies registered filters and allowed sorts from request parameters
pub struct FilterService {
    config: SieveConfig,
    criteria: Criteria,
    parameters: Map<String, Value>,
    filters: IndexMap<String, Box<dyn Filter>>,
    sorts: IndexMap<String, SortTarget>,
}

impl FilterService {
    /// Create a service over the request's query parameters.
    /// Anything other than a JSON object is treated as no parameters.
    pub fn new(parameters: Value) -> Self {
        Self::with_config(parameters, SieveConfig::default())
    }

    pub fn with_config(parameters: Value, config: SieveConfig) -> Self {
        let parameters = match parameters {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                warn!("Ignoring non-object query parameters: {}", other);
                Map::new()
            }
        };

        Self {
            criteria: Criteria::with_config(&config),
            config,
            parameters,
            filters: IndexMap::new(),
            sorts: IndexMap::new(),
        }
    }

    /// Use an existing criteria instead of an empty one
    pub fn with_criteria(mut self, criteria: Criteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// Register a filter for the given query parameter
    pub fn filter(mut self, key: impl Into<String>, filter: impl Filter + 'static) -> Self {
        self.filters.insert(key.into(), Box::new(filter));
        self
    }

    /// Register a closure filter for the given query parameter
    pub fn filter_with<F>(self, key: impl Into<String>, filter: F) -> Self
    where
        F: Fn(&mut Criteria, &Value) -> SieveResult<()> + Send + Sync + 'static,
    {
        self.filter(key, filter)
    }

    /// Allow sorting by `key`, ordering by `column`
    pub fn sort(mut self, key: impl Into<String>, column: impl Into<String>) -> Self {
        self.sorts.insert(key.into(), SortTarget::Column(column.into()));
        self
    }

    /// Allow sorting by `key` with a custom sort factory
    pub fn sort_with<F>(mut self, key: impl Into<String>, factory: F) -> Self
    where
        F: Fn(SortDirection) -> Box<dyn Sort> + Send + Sync + 'static,
    {
        self.sorts.insert(key.into(), SortTarget::Custom(Arc::new(factory)));
        self
    }

    pub fn config(&self) -> &SieveConfig {
        &self.config
    }

    pub fn set_default_sort_direction(&mut self, direction: SortDirection) -> &mut Self {
        self.config.default_sort_direction = direction;
        self
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn criteria_mut(&mut self) -> &mut Criteria {
        &mut self.criteria
    }

    pub fn into_criteria(self) -> Criteria {
        self.criteria
    }

    /// Replace the criteria with an empty one
    pub fn fresh(&mut self) -> &mut Self {
        self.criteria = Criteria::with_config(&self.config);
        self
    }

    /// Apply every registered filter whose parameter has a non-blank value
    pub fn apply_filters(&mut self) -> SieveResult<&mut Self> {
        for (key, filter) in &self.filters {
            let value = match self.parameters.get(key) {
                Some(value) if !is_blank(value) => value,
                _ => {
                    trace!("Skipping filter '{}': no value in request", key);
                    continue;
                }
            };

            debug!("Applying filter '{}'", key);
            if let Err(error) = filter.apply(&mut self.criteria, value) {
                warn!("Filter '{}' failed: {}", key, error);
                return Err(error);
            }
        }
        Ok(self)
    }

    /// Append the requested sorts that are registered on this service
    pub fn apply_sorts(&mut self) -> &mut Self {
        if self.sorts.is_empty() {
            return self;
        }

        let requested = match self.parameters.get(&self.config.sorts_key) {
            Some(Value::Array(requested)) if !requested.is_empty() => requested,
            Some(other) if !is_blank(other) => {
                warn!(
                    "Ignoring '{}' parameter: expected a list of sorts",
                    self.config.sorts_key
                );
                return self;
            }
            _ => return self,
        };

        for entry in requested {
            let Some(field) = entry.get("field").and_then(Value::as_str).filter(|f| !f.is_empty()) else {
                debug!("Skipping sort without a field: {}", entry);
                continue;
            };
            let Some(target) = self.sorts.get(field) else {
                debug!("Skipping sort on unregistered field '{}'", field);
                continue;
            };

            let direction = Self::resolve_direction(entry.get("direction"), self.config.default_sort_direction);
            trace!("Sorting by '{}' {}", field, direction);
            self.criteria.append_sort(target.build(direction));
        }
        self
    }

    /// Requested directions match case-insensitively but are not trimmed
    fn resolve_direction(requested: Option<&Value>, fallback: SortDirection) -> SortDirection {
        match requested.and_then(Value::as_str) {
            Some(direction) => match direction.parse() {
                Ok(parsed) if direction.trim() == direction => parsed,
                _ => {
                    debug!("Invalid sort direction '{}', using {}", direction, fallback);
                    fallback
                }
            },
            None => fallback,
        }
    }
}

impl fmt::Debug for FilterService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterService")
            .field("config", &self.config)
            .field("criteria", &self.criteria)
            .field("parameters", &self.parameters)
            .field("filters", &self.filters.keys().collect::<Vec<_>>())
            .field("sorts", &self.sorts)
            .finish()
    }
}

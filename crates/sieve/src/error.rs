//! Error types for criteria construction and filter application
//!
//! Validation happens when a condition, join or sort is built. Replaying a
//! criteria onto a builder never fails.

use thiserror::Error;

use crate::types::{JoinType, LogicalOperator, Operator, SortDirection};

/// Result type alias for sieve operations
pub type SieveResult<T> = Result<T, SieveError>;

/// Errors raised while composing criteria
#[derive(Debug, Error)]
pub enum SieveError {
    #[error("Invalid operator: '{operator}'. Allowed operators are: {}", Operator::values().join(", "))]
    InvalidOperator { operator: String },

    #[error("Invalid logical operator: '{operator}'. Allowed operators are: {}", LogicalOperator::values().join(", "))]
    InvalidLogicalOperator { operator: String },

    #[error("Invalid join type: '{join_type}'. Valid types are: {}", JoinType::values().join(", "))]
    InvalidJoinType { join_type: String },

    #[error("Invalid sort direction: {direction}. Valid directions are: {}", SortDirection::values().join(", "))]
    InvalidSortDirection { direction: String },

    #[error("The group conditions cannot be empty.")]
    EmptyGroupConditions,

    #[error("Group conditions must be all aggregations or all non-aggregations, they cannot be mixed.")]
    MixedGroupConditions,

    #[error("Between condition requires exactly two values, got {count}.")]
    InvalidBetweenValues { count: usize },

    #[error("Filter '{key}' failed: {message}")]
    Filter { key: String, message: String },

    #[error("Invalid value for configuration field '{field}': '{value}'. Expected: {expected}")]
    InvalidConfigValue {
        field: String,
        value: String,
        expected: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SieveError {
    pub fn invalid_operator(operator: impl Into<String>) -> Self {
        Self::InvalidOperator {
            operator: operator.into(),
        }
    }

    pub fn invalid_logical_operator(operator: impl Into<String>) -> Self {
        Self::InvalidLogicalOperator {
            operator: operator.into(),
        }
    }

    pub fn invalid_join_type(join_type: impl Into<String>) -> Self {
        Self::InvalidJoinType {
            join_type: join_type.into(),
        }
    }

    pub fn invalid_sort_direction(direction: impl Into<String>) -> Self {
        Self::InvalidSortDirection {
            direction: direction.into(),
        }
    }

    /// Create a filter error for the given request key
    pub fn filter(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Filter {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration value error
    pub fn invalid_config_value(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Check if this error came from validating user supplied input
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            SieveError::Filter { .. } | SieveError::Json(_) | SieveError::Yaml(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_operator_lists_allowed_values() {
        let message = SieveError::invalid_operator("===").to_string();
        assert_eq!(
            message,
            "Invalid operator: '==='. Allowed operators are: =, !=, <>, >, <, >=, <=, LIKE, NOT LIKE"
        );
    }

    #[test]
    fn invalid_logical_operator_lists_allowed_values() {
        let message = SieveError::invalid_logical_operator("xor").to_string();
        assert_eq!(
            message,
            "Invalid logical operator: 'xor'. Allowed operators are: and, or"
        );
    }

    #[test]
    fn invalid_join_type_lists_valid_types() {
        let message = SieveError::invalid_join_type("OUTER").to_string();
        assert_eq!(
            message,
            "Invalid join type: 'OUTER'. Valid types are: INNER, LEFT, RIGHT"
        );
    }

    #[test]
    fn invalid_sort_direction_mentions_direction() {
        let message = SieveError::invalid_sort_direction("UP").to_string();
        assert!(message.starts_with("Invalid sort direction: UP"));
    }

    #[test]
    fn validation_classification() {
        assert!(SieveError::EmptyGroupConditions.is_validation());
        assert!(SieveError::InvalidBetweenValues { count: 3 }.is_validation());
        assert!(!SieveError::filter("name", "boom").is_validation());
    }
}

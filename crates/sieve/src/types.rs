//! Criteria Types - Operators, logical connectives, join types and sort directions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SieveError, SieveResult};

/// Comparison operators accepted by conditions and join constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equal,
    NotEqual,
    DbNotEqual,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
    Like,
    NotLike,
}

impl Operator {
    const ALL: [Operator; 9] = [
        Operator::Equal,
        Operator::NotEqual,
        Operator::DbNotEqual,
        Operator::GreaterThan,
        Operator::LessThan,
        Operator::GreaterThanOrEqual,
        Operator::LessThanOrEqual,
        Operator::Like,
        Operator::NotLike,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
            Operator::DbNotEqual => "<>",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThanOrEqual => "<=",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT LIKE",
        }
    }

    /// Canonical spelling of every operator
    pub fn values() -> Vec<&'static str> {
        Self::ALL.iter().map(Operator::as_str).collect()
    }

    /// Check whether the given string names an operator
    pub fn is_valid(operator: &str) -> bool {
        operator.parse::<Operator>().is_ok()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = SieveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.as_str() == normalized)
            .ok_or_else(|| SieveError::invalid_operator(s))
    }
}

/// Connective used to attach a condition to the ones before it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalOperator {
    #[default]
    And,
    Or,
}

impl LogicalOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOperator::And => "and",
            LogicalOperator::Or => "or",
        }
    }

    pub fn values() -> Vec<&'static str> {
        vec!["and", "or"]
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Logical operators are matched exactly, unlike the other vocabularies.
impl FromStr for LogicalOperator {
    type Err = SieveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "and" => Ok(LogicalOperator::And),
            "or" => Ok(LogicalOperator::Or),
            _ => Err(SieveError::invalid_logical_operator(s)),
        }
    }
}

/// Join types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JoinType {
    #[default]
    Inner,
    Left,
    Right,
}

impl JoinType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinType::Inner => "INNER",
            JoinType::Left => "LEFT",
            JoinType::Right => "RIGHT",
        }
    }

    pub fn values() -> Vec<&'static str> {
        vec!["INNER", "LEFT", "RIGHT"]
    }
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JoinType {
    type Err = SieveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "INNER" => Ok(JoinType::Inner),
            "LEFT" => Ok(JoinType::Left),
            "RIGHT" => Ok(JoinType::Right),
            _ => Err(SieveError::invalid_join_type(s)),
        }
    }
}

/// Order by direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    pub fn values() -> Vec<&'static str> {
        vec!["DESC", "ASC"]
    }

    /// Check whether the string names a direction, ignoring case and padding
    pub fn is_valid(direction: &str) -> bool {
        direction.parse::<SortDirection>().is_ok()
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = SieveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ASC" => Ok(SortDirection::Asc),
            "DESC" => Ok(SortDirection::Desc),
            _ => Err(SieveError::invalid_sort_direction(s.trim().to_uppercase())),
        }
    }
}

impl TryFrom<String> for SortDirection {
    type Error = SieveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SortDirection> for String {
    fn from(direction: SortDirection) -> Self {
        direction.as_str().to_string()
    }
}

/// Conversion into a validated [`Operator`]
pub trait IntoOperator {
    fn into_operator(self) -> SieveResult<Operator>;
}

impl IntoOperator for Operator {
    fn into_operator(self) -> SieveResult<Operator> {
        Ok(self)
    }
}

impl IntoOperator for &str {
    fn into_operator(self) -> SieveResult<Operator> {
        self.parse()
    }
}

impl IntoOperator for String {
    fn into_operator(self) -> SieveResult<Operator> {
        self.parse()
    }
}

/// Conversion into a validated [`LogicalOperator`]
pub trait IntoLogicalOperator {
    fn into_logical_operator(self) -> SieveResult<LogicalOperator>;
}

impl IntoLogicalOperator for LogicalOperator {
    fn into_logical_operator(self) -> SieveResult<LogicalOperator> {
        Ok(self)
    }
}

impl IntoLogicalOperator for &str {
    fn into_logical_operator(self) -> SieveResult<LogicalOperator> {
        self.parse()
    }
}

impl IntoLogicalOperator for String {
    fn into_logical_operator(self) -> SieveResult<LogicalOperator> {
        self.parse()
    }
}

/// Conversion into a validated [`JoinType`]
pub trait IntoJoinType {
    fn into_join_type(self) -> SieveResult<JoinType>;
}

impl IntoJoinType for JoinType {
    fn into_join_type(self) -> SieveResult<JoinType> {
        Ok(self)
    }
}

impl IntoJoinType for &str {
    fn into_join_type(self) -> SieveResult<JoinType> {
        self.parse()
    }
}

impl IntoJoinType for String {
    fn into_join_type(self) -> SieveResult<JoinType> {
        self.parse()
    }
}

/// Conversion into a validated [`SortDirection`]
pub trait IntoSortDirection {
    fn into_sort_direction(self) -> SieveResult<SortDirection>;
}

impl IntoSortDirection for SortDirection {
    fn into_sort_direction(self) -> SieveResult<SortDirection> {
        Ok(self)
    }
}

impl IntoSortDirection for &str {
    fn into_sort_direction(self) -> SieveResult<SortDirection> {
        self.parse()
    }
}

impl IntoSortDirection for String {
    fn into_sort_direction(self) -> SieveResult<SortDirection> {
        self.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_parsing_is_case_insensitive_and_trimmed() {
        assert_eq!(" like ".parse::<Operator>().unwrap(), Operator::Like);
        assert_eq!("not like".parse::<Operator>().unwrap(), Operator::NotLike);
        assert_eq!("<>".parse::<Operator>().unwrap(), Operator::DbNotEqual);
        assert!(Operator::is_valid(">="));
        assert!(!Operator::is_valid("=>"));
        assert!(!Operator::is_valid("IN"));
    }

    #[test]
    fn operator_values_in_declaration_order() {
        assert_eq!(
            Operator::values(),
            vec!["=", "!=", "<>", ">", "<", ">=", "<=", "LIKE", "NOT LIKE"]
        );
    }

    #[test]
    fn logical_operator_is_exact() {
        assert_eq!("or".parse::<LogicalOperator>().unwrap(), LogicalOperator::Or);
        assert!("OR".parse::<LogicalOperator>().is_err());
        assert!(" and".parse::<LogicalOperator>().is_err());
        assert_eq!(LogicalOperator::default(), LogicalOperator::And);
    }

    #[test]
    fn join_type_parsing() {
        assert_eq!(" left ".parse::<JoinType>().unwrap(), JoinType::Left);
        assert_eq!("Right".parse::<JoinType>().unwrap(), JoinType::Right);
        assert!("full".parse::<JoinType>().is_err());
        assert_eq!(JoinType::default(), JoinType::Inner);
    }

    #[test]
    fn sort_direction_parsing() {
        assert_eq!(" desc ".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert!(SortDirection::is_valid("Asc"));
        assert!(!SortDirection::is_valid("INVALID"));
        assert_eq!(SortDirection::default(), SortDirection::Asc);
        match "sideways".parse::<SortDirection>() {
            Err(SieveError::InvalidSortDirection { direction }) => assert_eq!(direction, "SIDEWAYS"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn sort_direction_serde_round_trips_through_strings() {
        let direction: SortDirection = serde_json::from_str("\"desc\"").unwrap();
        assert_eq!(direction, SortDirection::Desc);
        assert_eq!(serde_json::to_string(&direction).unwrap(), "\"DESC\"");
        assert!(serde_json::from_str::<SortDirection>("\"up\"").is_err());
    }
}

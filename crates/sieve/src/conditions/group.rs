//! Grouped conditions rendered inside parentheses
//!
//! A group is either entirely aggregation conditions (replayed through
//! `having_nested`) or entirely basic conditions (`where_nested`). Mixing the
//! two is rejected when the group is built.

use super::{Condition, ConditionKind};
use crate::builder::QueryBuilder;
use crate::error::{SieveError, SieveResult};
use crate::types::{IntoLogicalOperator, LogicalOperator};

/// A parenthesized group of conditions
#[derive(Debug)]
pub struct GroupConditions {
    conditions: Vec<Box<dyn Condition>>,
    boolean: LogicalOperator,
    kind: ConditionKind,
}

impl GroupConditions {
    /// Build a group, rejecting empty and mixed member lists
    pub fn new(conditions: Vec<Box<dyn Condition>>) -> SieveResult<Self> {
        if conditions.is_empty() {
            return Err(SieveError::EmptyGroupConditions);
        }

        let kind = Self::resolve_kind(&conditions)?;
        Ok(Self {
            conditions,
            boolean: LogicalOperator::And,
            kind,
        })
    }

    fn resolve_kind(conditions: &[Box<dyn Condition>]) -> SieveResult<ConditionKind> {
        let aggregations = conditions
            .iter()
            .filter(|condition| condition.kind() == ConditionKind::Aggregation)
            .count();

        match aggregations {
            0 => Ok(ConditionKind::Basic),
            n if n == conditions.len() => Ok(ConditionKind::Aggregation),
            _ => Err(SieveError::MixedGroupConditions),
        }
    }

    pub fn or(mut self) -> Self {
        self.boolean = LogicalOperator::Or;
        self
    }

    pub fn with_boolean(mut self, boolean: impl IntoLogicalOperator) -> SieveResult<Self> {
        self.boolean = boolean.into_logical_operator()?;
        Ok(self)
    }

    pub fn conditions(&self) -> &[Box<dyn Condition>] {
        &self.conditions
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl Condition for GroupConditions {
    fn boolean(&self) -> LogicalOperator {
        self.boolean
    }

    fn kind(&self) -> ConditionKind {
        self.kind
    }

    fn apply(&self, builder: &mut dyn QueryBuilder) {
        let conditions = &self.conditions;
        let mut build = |query: &mut dyn QueryBuilder| {
            for condition in conditions {
                condition.apply(query);
            }
        };

        match self.kind {
            ConditionKind::Aggregation => builder.having_nested(self.boolean, &mut build),
            ConditionKind::Basic => builder.where_nested(self.boolean, &mut build),
        }
    }
}

/// Build a [`GroupConditions`] from a list of heterogeneous conditions
///
/// ```ignore
/// let group = group![
///     ComparisonCondition::new("group1", "=", 1)?,
///     ComparisonCondition::new("group2", "=", 2)?.or(),
/// ]?;
/// ```
#[macro_export]
macro_rules! group {
    ($($condition:expr),* $(,)?) => {
        $crate::conditions::GroupConditions::new(vec![
            $(Box::new($condition) as Box<dyn $crate::conditions::Condition>),*
        ])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::{ComparisonCondition, NullCondition, WhenCondition};
    use crate::testing::RecordingBuilder;

    fn basic(field: &str, value: i64) -> ComparisonCondition {
        ComparisonCondition::new(field, "=", value).unwrap()
    }

    #[test]
    fn empty_group_is_rejected() {
        let err = GroupConditions::new(Vec::new()).unwrap_err();
        assert!(matches!(err, SieveError::EmptyGroupConditions));
    }

    #[test]
    fn mixed_group_is_rejected() {
        let err = crate::group![
            basic("status", 1),
            ComparisonCondition::aggregation("total", ">", 10).unwrap(),
        ]
        .unwrap_err();
        assert!(matches!(err, SieveError::MixedGroupConditions));
    }

    #[test]
    fn basic_group_applies_through_where_nested() {
        let group = crate::group![
            NullCondition::not_null("orders.confirmed"),
            ComparisonCondition::date("orders.date", ">=", "2023-01-01").unwrap().or(),
        ]
        .unwrap();

        let mut builder = RecordingBuilder::new();
        group.apply(&mut builder);

        assert_eq!(group.kind(), ConditionKind::Basic);
        assert_eq!(
            builder.calls,
            vec![
                "where_nested(and, [where_null(orders.confirmed, and, not=true); where_date(orders.date >= \"2023-01-01\", or)])"
            ]
        );
    }

    #[test]
    fn aggregation_group_applies_through_having_nested() {
        let group = crate::group![
            ComparisonCondition::aggregation("count", ">", 1).unwrap(),
            ComparisonCondition::aggregation("sum", "<", 100).unwrap().or(),
        ]
        .unwrap()
        .or();

        let mut builder = RecordingBuilder::new();
        group.apply(&mut builder);

        assert_eq!(group.kind(), ConditionKind::Aggregation);
        assert_eq!(
            builder.calls,
            vec!["having_nested(or, [having(count > 1, and); having(sum < 100, or)])"]
        );
    }

    #[test]
    fn groups_nest_recursively() {
        let group = crate::group![
            crate::group![basic("group1", 1), basic("group2", 2).or()].unwrap(),
            crate::group![basic("group3", 3), basic("group4", 4).or()].unwrap(),
            WhenCondition::new(
                true,
                crate::group![WhenCondition::new(true, basic("when", 10)), basic("group5", 5)]
                    .unwrap()
                    .or()
            ),
        ]
        .unwrap();

        let mut builder = RecordingBuilder::new();
        group.apply(&mut builder);

        assert_eq!(group.len(), 3);
        assert_eq!(
            builder.calls,
            vec![concat!(
                "where_nested(and, [",
                "where_nested(and, [where(group1 = 1, and); where(group2 = 2, or)]); ",
                "where_nested(and, [where(group3 = 3, and); where(group4 = 4, or)]); ",
                "when(true); ",
                "where_nested(or, [when(true); where(when = 10, and); where(group5 = 5, and)])",
                "])"
            )]
        );
    }

    #[test]
    fn with_boolean_validates_connective() {
        let group = crate::group![basic("a", 1)].unwrap().with_boolean("or").unwrap();
        assert_eq!(group.boolean(), LogicalOperator::Or);

        let err = crate::group![basic("a", 1)].unwrap().with_boolean("OR").unwrap_err();
        assert!(matches!(err, SieveError::InvalidLogicalOperator { .. }));
    }

    #[test]
    fn nested_aggregation_group_counts_as_aggregation() {
        let inner = crate::group![ComparisonCondition::aggregation("count", ">", 1).unwrap()].unwrap();
        let outer = crate::group![
            inner,
            ComparisonCondition::aggregation("sum", ">", 2).unwrap()
        ]
        .unwrap();
        assert_eq!(outer.kind(), ConditionKind::Aggregation);
    }
}

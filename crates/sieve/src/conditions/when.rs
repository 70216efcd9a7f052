use super::{Condition, ConditionKind};
use crate::builder::QueryBuilder;
use crate::types::LogicalOperator;

/// Applies the wrapped condition only when `verification` holds
#[derive(Debug)]
pub struct WhenCondition {
    pub verification: bool,
    pub condition: Box<dyn Condition>,
}

impl WhenCondition {
    pub fn new(verification: bool, condition: impl Condition + 'static) -> Self {
        Self {
            verification,
            condition: Box::new(condition),
        }
    }
}

impl Condition for WhenCondition {
    // The wrapped condition carries its own connective.
    fn boolean(&self) -> LogicalOperator {
        LogicalOperator::And
    }

    fn kind(&self) -> ConditionKind {
        self.condition.kind()
    }

    fn apply(&self, builder: &mut dyn QueryBuilder) {
        let condition = &self.condition;
        builder.when(self.verification, &mut |query: &mut dyn QueryBuilder| {
            condition.apply(query)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::ComparisonCondition;
    use crate::testing::RecordingBuilder;

    #[test]
    fn applies_inner_condition_only_when_verified() {
        let mut builder = RecordingBuilder::new();
        WhenCondition::new(true, ComparisonCondition::new("when", "=", 1).unwrap().or())
            .apply(&mut builder);
        WhenCondition::new(false, ComparisonCondition::new("skipped", "=", 2).unwrap())
            .apply(&mut builder);

        assert_eq!(
            builder.calls,
            vec!["when(true)", "where(when = 1, or)", "when(false)"]
        );
    }

    #[test]
    fn reports_kind_of_wrapped_condition() {
        let when = WhenCondition::new(true, ComparisonCondition::aggregation("total", ">", 5).unwrap());
        assert_eq!(when.kind(), ConditionKind::Aggregation);
        assert_eq!(when.boolean(), LogicalOperator::And);
    }
}

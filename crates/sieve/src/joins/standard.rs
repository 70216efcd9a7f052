use super::Join;
use crate::builder::{JoinClause, QueryBuilder};
use crate::conditions::Condition;
use crate::error::SieveResult;
use crate::types::{IntoJoinType, IntoOperator, JoinType, LogicalOperator, Operator};

/// `JOIN table ON first <operator> second`, plus any extra conditions
#[derive(Debug)]
pub struct StandardJoin {
    table: String,
    name: String,
    join_type: JoinType,
    pub first: String,
    pub operator: Operator,
    pub second: String,
    conditions: Vec<Box<dyn Condition>>,
}

impl StandardJoin {
    /// Inner join keyed by its table name
    pub fn new(
        table: impl Into<String>,
        first: impl Into<String>,
        operator: impl IntoOperator,
        second: impl Into<String>,
    ) -> SieveResult<Self> {
        let table = table.into();
        Ok(Self {
            name: table.clone(),
            table,
            join_type: JoinType::Inner,
            first: first.into(),
            operator: operator.into_operator()?,
            second: second.into(),
            conditions: Vec::new(),
        })
    }

    /// Set the join type, validating string input
    pub fn with_join_type(mut self, join_type: impl IntoJoinType) -> SieveResult<Self> {
        self.join_type = join_type.into_join_type()?;
        Ok(self)
    }

    pub fn left(mut self) -> Self {
        self.join_type = JoinType::Left;
        self
    }

    pub fn right(mut self) -> Self {
        self.join_type = JoinType::Right;
        self
    }

    /// Register under a name other than the table, e.g. for aliased tables
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Add a condition to the ON clause
    pub fn append_condition(mut self, condition: impl Condition + 'static) -> Self {
        self.conditions.push(Box::new(condition));
        self
    }

    pub fn conditions(&self) -> &[Box<dyn Condition>] {
        &self.conditions
    }
}

impl Join for StandardJoin {
    fn name(&self) -> &str {
        &self.name
    }

    fn table(&self) -> &str {
        &self.table
    }

    fn join_type(&self) -> JoinType {
        self.join_type
    }

    fn apply(&self, builder: &mut dyn QueryBuilder) {
        builder.join(&self.table, self.join_type, &mut |clause: &mut dyn JoinClause| {
            clause.on(&self.first, self.operator, &self.second, LogicalOperator::And);
            let query = clause.query();
            for condition in &self.conditions {
                condition.apply(query);
            }
        });
    }
}

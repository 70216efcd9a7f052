use std::fmt;
use std::sync::Arc;

use super::Join;
use crate::builder::{JoinClause, QueryBuilder};
use crate::error::SieveResult;
use crate::types::{IntoJoinType, JoinType};

type JoinBody = Arc<dyn Fn(&mut dyn JoinClause) + Send + Sync>;

/// Join whose ON clause is written by a caller supplied callback
#[derive(Clone)]
pub struct ClosureJoin {
    table: String,
    name: String,
    join_type: JoinType,
    body: JoinBody,
}

impl ClosureJoin {
    pub fn new<F>(table: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut dyn JoinClause) + Send + Sync + 'static,
    {
        let table = table.into();
        Self {
            name: table.clone(),
            table,
            join_type: JoinType::Inner,
            body: Arc::new(body),
        }
    }

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

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl fmt::Debug for ClosureJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClosureJoin")
            .field("table", &self.table)
            .field("name", &self.name)
            .field("join_type", &self.join_type)
            .finish_non_exhaustive()
    }
}

impl Join for ClosureJoin {
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
        let body = &self.body;
        builder.join(&self.table, self.join_type, &mut |clause: &mut dyn JoinClause| {
            (**body)(clause)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SieveError;
    use crate::testing::RecordingBuilder;
    use crate::types::{LogicalOperator, Operator};
    use serde_json::json;

    #[test]
    fn forwards_callback_to_join() {
        let join = ClosureJoin::new("user_info", |clause| {
            clause.on("users.id", Operator::Equal, "user_info.user_id", LogicalOperator::And);
            clause
                .query()
                .where_compare("user_info.active", Operator::Equal, &json!(1), LogicalOperator::And);
        })
        .with_join_type("left")
        .unwrap();

        let mut builder = RecordingBuilder::new();
        join.apply(&mut builder);

        assert_eq!(Join::name(&join), "user_info");
        assert_eq!(
            builder.calls,
            vec!["join(user_info, LEFT, [on(users.id = user_info.user_id, and); where(user_info.active = 1, and)])"]
        );
    }

    #[test]
    fn named_overrides_registration_key() {
        let join = ClosureJoin::new("users", |_| {}).named("authors").right();
        assert_eq!(Join::name(&join), "authors");
        assert_eq!(Join::table(&join), "users");
        assert_eq!(Join::join_type(&join), JoinType::Right);
    }

    #[test]
    fn invalid_join_type_is_rejected() {
        let err = ClosureJoin::new("user_info", |_| {})
            .with_join_type("cross")
            .unwrap_err();
        assert!(matches!(err, SieveError::InvalidJoinType { ref join_type } if join_type == "cross"));
    }
}

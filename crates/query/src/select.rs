//! Select Query SELECT, GROUP BY and pagination operations

use super::builder::SelectQuery;

impl SelectQuery {
    /// Add SELECT fields to the query
    pub fn select(mut self, fields: &str) -> Self {
        if fields == "*" {
            self.select_fields.push("*".to_string());
        } else {
            self.select_fields
                .extend(fields.split(',').map(|f| f.trim().to_string()).filter(|f| !f.is_empty()));
        }
        self
    }

    /// Add SELECT DISTINCT to the query
    pub fn select_distinct(mut self, fields: &str) -> Self {
        self.distinct = true;
        self.select(fields)
    }

    /// Add custom SELECT expression
    pub fn select_raw(mut self, expression: &str) -> Self {
        self.select_fields.push(expression.to_string());
        self
    }

    /// Set the FROM table
    pub fn from(mut self, table: &str) -> Self {
        self.from_table = Some(table.to_string());
        self
    }

    pub fn group_by(mut self, column: &str) -> Self {
        self.group_by.push(column.to_string());
        self
    }

    pub fn limit(mut self, count: i64) -> Self {
        self.limit_count = Some(count);
        self
    }

    pub fn offset(mut self, count: i64) -> Self {
        self.offset_value = Some(count);
        self
    }

    /// LIMIT + OFFSET for a 1-based page number
    pub fn paginate(mut self, per_page: i64, page: i64) -> Self {
        self.limit_count = Some(per_page);
        self.offset_value = Some((page.max(1) - 1) * per_page);
        self
    }
}

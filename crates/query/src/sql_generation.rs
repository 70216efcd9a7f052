//! Select Query SQL generation
//!
//! `to_sql_with_params` binds every value as a `$n` placeholder; `to_sql`
//! inlines the values and is meant for logging and tests. JSON columns use
//! the `column->key` path syntax and render with PostgreSQL operators.

use serde_json::Value;
use tracing::trace;

use elif_sieve::LogicalOperator;

use super::builder::SelectQuery;
use super::types::*;

/// Accumulates SQL text and, when binding, its parameters
struct SqlWriter {
    params: Vec<Value>,
    inline: bool,
}

impl SqlWriter {
    fn new(inline: bool) -> Self {
        Self {
            params: Vec::new(),
            inline,
        }
    }

    /// Placeholder for a bound value, or the formatted value when inlining
    fn bind(&mut self, value: &Value) -> String {
        if self.inline {
            format_value(value)
        } else {
            self.params.push(value.clone());
            format!("${}", self.params.len())
        }
    }

    /// Rewrite `?` placeholders of a raw fragment, consuming its bindings in order
    fn raw(&mut self, sql: &str, bindings: &[Value]) -> String {
        let mut bindings = bindings.iter();
        let mut rendered = String::with_capacity(sql.len());
        for ch in sql.chars() {
            match ch {
                '?' => match bindings.next() {
                    Some(value) => rendered.push_str(&self.bind(value)),
                    None => rendered.push('?'),
                },
                _ => rendered.push(ch),
            }
        }
        rendered
    }

    fn clauses(&mut self, clauses: &[Clause]) -> String {
        let mut sql = String::new();
        for clause in clauses {
            let predicate = self.predicate(&clause.predicate);
            if predicate.is_empty() {
                continue;
            }
            if !sql.is_empty() {
                sql.push_str(match clause.boolean {
                    LogicalOperator::And => " AND ",
                    LogicalOperator::Or => " OR ",
                });
            }
            sql.push_str(&predicate);
        }
        sql
    }

    fn predicate(&mut self, predicate: &Predicate) -> String {
        match predicate {
            Predicate::Compare {
                column,
                operator,
                value,
            } => {
                let column = json_path(column, true);
                format!("{} {} {}", column, operator, self.bind(value))
            }
            Predicate::Column {
                first,
                operator,
                second,
            } => format!("{} {} {}", first, operator, second),
            Predicate::Date {
                column,
                operator,
                value,
            } => format!("{} {} {}", date_column(column), operator, self.bind(value)),
            Predicate::In { column, values, not } => {
                if values.is_empty() {
                    // IN () never matches, NOT IN () always does
                    return if *not { "1 = 1".to_string() } else { "0 = 1".to_string() };
                }
                let placeholders: Vec<String> = values.iter().map(|v| self.bind(v)).collect();
                let keyword = if *not { "NOT IN" } else { "IN" };
                format!("{} {} ({})", json_path(column, true), keyword, placeholders.join(", "))
            }
            Predicate::Between { column, range, not } => {
                let keyword = if *not { "NOT BETWEEN" } else { "BETWEEN" };
                let low = self.bind(&range[0]);
                let high = self.bind(&range[1]);
                format!("{} {} {} AND {}", json_path(column, true), keyword, low, high)
            }
            Predicate::Null { column, not } => {
                let keyword = if *not { "IS NOT NULL" } else { "IS NULL" };
                format!("{} {}", json_path(column, true), keyword)
            }
            Predicate::Raw { sql, bindings } => self.raw(sql, bindings),
            Predicate::JsonContains { column, value, not } => {
                let sql = format!("({})::jsonb @> {}::jsonb", json_path(column, false), self.bind_json(value));
                negate(sql, *not)
            }
            Predicate::JsonContainsKey { column, not } => negate(json_contains_key(column), *not),
            Predicate::JsonLength {
                column,
                operator,
                value,
            } => format!(
                "jsonb_array_length(({})::jsonb) {} {}",
                json_path(column, false),
                operator,
                self.bind(value)
            ),
            Predicate::JsonOverlaps { column, value, not } => {
                let candidates = match value {
                    Value::Array(_) => value.clone(),
                    other => Value::Array(vec![other.clone()]),
                };
                let sql = format!(
                    "EXISTS (SELECT 1 FROM jsonb_array_elements(({})::jsonb) AS elem WHERE {}::jsonb @> elem)",
                    json_path(column, false),
                    self.bind_json(&candidates)
                );
                negate(sql, *not)
            }
            Predicate::Nested(clauses) => {
                let inner = self.clauses(clauses);
                if inner.is_empty() {
                    inner
                } else {
                    format!("({})", inner)
                }
            }
        }
    }

    /// JSON documents are bound as their serialized text
    fn bind_json(&mut self, value: &Value) -> String {
        self.bind(&Value::String(value.to_string()))
    }
}

fn negate(sql: String, not: bool) -> String {
    if not {
        format!("NOT {}", sql)
    } else {
        sql
    }
}

/// Render `column->a->b` as a PostgreSQL JSON path; the last step uses `->>`
/// when the value is compared as text
fn json_path(column: &str, as_text: bool) -> String {
    let mut segments = column.split("->");
    let base = segments.next().unwrap_or(column).trim();
    let keys: Vec<&str> = segments.map(str::trim).collect();
    if keys.is_empty() {
        return base.to_string();
    }

    let mut path = base.to_string();
    for (i, key) in keys.iter().enumerate() {
        let arrow = if as_text && i == keys.len() - 1 { "->>" } else { "->" };
        path.push_str(arrow);
        path.push_str(&json_key(key));
    }
    path
}

/// Date part of a column; JSON paths are parenthesized so the cast applies to the whole path
fn date_column(column: &str) -> String {
    if column.contains("->") {
        format!("({})::date", json_path(column, true))
    } else {
        format!("{}::date", column)
    }
}

fn json_key(key: &str) -> String {
    if !key.is_empty() && key.chars().all(|c| c.is_ascii_digit()) {
        key.to_string()
    } else {
        format!("'{}'", key.trim_matches(|c| c == '\'' || c == '"').replace('\'', "''"))
    }
}

/// `column->key` checks the parent object for `key`; a bare column only checks presence
fn json_contains_key(column: &str) -> String {
    match column.rsplit_once("->") {
        Some((parent, key)) => {
            let key = key.trim();
            let parent = json_path(parent, false);
            if !key.is_empty() && key.chars().all(|c| c.is_ascii_digit()) {
                format!(
                    "CASE WHEN jsonb_typeof(({})::jsonb) = 'array' THEN jsonb_array_length(({})::jsonb) > {} ELSE false END",
                    parent, parent, key
                )
            } else {
                format!("coalesce(({})::jsonb ? {}, false)", parent, json_key(key))
            }
        }
        None => format!("{} IS NOT NULL", column),
    }
}

/// Format a value for inlined SQL
pub(crate) fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{}'", s.replace('\'', "''")),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "NULL".to_string(),
        other => format!("'{}'", other.to_string().replace('\'', "''")),
    }
}

impl SelectQuery {
    /// Generate SQL with `$n` placeholders and return the bound parameters
    pub fn to_sql_with_params(&self) -> (String, Vec<Value>) {
        let mut writer = SqlWriter::new(false);
        let sql = self.build_select_sql(&mut writer);
        trace!("Generated SQL with {} parameters: {}", writer.params.len(), sql);
        (sql, writer.params)
    }

    /// Generate SQL with values inlined
    pub fn to_sql(&self) -> String {
        let mut writer = SqlWriter::new(true);
        self.build_select_sql(&mut writer)
    }

    fn build_select_sql(&self, writer: &mut SqlWriter) -> String {
        let mut sql = String::new();

        if self.distinct {
            sql.push_str("SELECT DISTINCT ");
        } else {
            sql.push_str("SELECT ");
        }

        if self.select_fields.is_empty() {
            sql.push('*');
        } else {
            sql.push_str(&self.select_fields.join(", "));
        }

        if let Some(table) = &self.from_table {
            sql.push_str(" FROM ");
            sql.push_str(table);
        }

        for join in &self.joins {
            sql.push_str(&format!(" {} JOIN {}", join.join_type, join.table));
            let on = writer.clauses(&join.on);
            if !on.is_empty() {
                sql.push_str(" ON ");
                sql.push_str(&on);
            }
        }

        let wheres = writer.clauses(&self.wheres);
        if !wheres.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&wheres);
        }

        if !self.group_by.is_empty() {
            sql.push_str(&format!(" GROUP BY {}", self.group_by.join(", ")));
        }

        let havings = writer.clauses(&self.havings);
        if !havings.is_empty() {
            sql.push_str(" HAVING ");
            sql.push_str(&havings);
        }

        if !self.orders.is_empty() {
            let orders: Vec<String> = self
                .orders
                .iter()
                .map(|order| match order {
                    Ordering::Column(column, direction) => format!("{} {}", json_path(column, true), direction),
                    Ordering::Raw(expression, bindings) => writer.raw(expression, bindings),
                })
                .collect();
            sql.push_str(" ORDER BY ");
            sql.push_str(&orders.join(", "));
        }

        if let Some(limit) = self.limit_count {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        if let Some(offset) = self.offset_value {
            sql.push_str(&format!(" OFFSET {}", offset));
        }

        sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_paths() {
        assert_eq!(json_path("options", true), "options");
        assert_eq!(json_path("options->language", true), "options->>'language'");
        assert_eq!(json_path("options->tags->0", false), "options->'tags'->0");
        assert_eq!(date_column("created_at"), "created_at::date");
        assert_eq!(date_column("meta->published"), "(meta->>'published')::date");
    }

    #[test]
    fn contains_key_variants() {
        assert_eq!(json_contains_key("meta->lang"), "coalesce((meta)::jsonb ? 'lang', false)");
        assert_eq!(
            json_contains_key("meta->tags->1"),
            "CASE WHEN jsonb_typeof((meta->'tags')::jsonb) = 'array' THEN jsonb_array_length((meta->'tags')::jsonb) > 1 ELSE false END"
        );
        assert_eq!(json_contains_key("meta"), "meta IS NOT NULL");
    }

    #[test]
    fn raw_placeholders_keep_extras() {
        let mut writer = SqlWriter::new(false);
        let sql = writer.raw("a = ? AND b = ? AND c = ?", &[json!(1), json!("x")]);
        assert_eq!(sql, "a = $1 AND b = $2 AND c = ?");
        assert_eq!(writer.params, vec![json!(1), json!("x")]);
    }

    #[test]
    fn inline_values_are_escaped() {
        assert_eq!(format_value(&json!("O'Brien")), "'O''Brien'");
        assert_eq!(format_value(&json!([1, 2])), "'[1,2]'");
        assert_eq!(format_value(&json!(null)), "NULL");
    }
}

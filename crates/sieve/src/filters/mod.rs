//! Request driven filters
//!
//! A [`FilterService`] maps query parameters onto criteria: registered filters
//! receive the value of their parameter, and requested sorts are resolved
//! against an allow-list.

pub mod service;

use serde_json::Value;

use crate::criteria::Criteria;
use crate::error::SieveResult;

pub use service::{FilterService, SortFactory, SortTarget};

/// Translates one query parameter value into criteria entries
pub trait Filter: Send + Sync {
    fn apply(&self, criteria: &mut Criteria, value: &Value) -> SieveResult<()>;
}

impl<F> Filter for F
where
    F: Fn(&mut Criteria, &Value) -> SieveResult<()> + Send + Sync,
{
    fn apply(&self, criteria: &mut Criteria, value: &Value) -> SieveResult<()> {
        self(criteria, value)
    }
}

/// Whether a parameter value counts as absent
///
/// Null, `false`, `0`, `""`, `"0"` and empty arrays or objects are blank.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty() || text == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_values() {
        for value in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!("0"), json!([]), json!({})] {
            assert!(is_blank(&value), "{} should be blank", value);
        }
        for value in [json!(true), json!(18), json!(" "), json!("John"), json!([0]), json!({ "a": 1 })] {
            assert!(!is_blank(&value), "{} should not be blank", value);
        }
    }
}

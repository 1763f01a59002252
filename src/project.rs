/// Record projection: pick the requested columns out of a fetched alias
/// record, in the requested order, rendered as CSV field text.
use serde_json::Value;

use crate::api::AliasRecord;
use crate::schema::{ColumnSpec, SchemaError};

/// Project one record into an ordered row of field strings.
///
/// Field rendering is fixed and locale-independent:
///
/// - strings pass through unchanged
/// - numbers use their canonical decimal form
/// - booleans render as `True` / `False`
/// - `null` renders as an empty field
/// - arrays and objects (e.g. `recipients`) render as compact JSON
///
/// # Errors
///
/// Returns `SchemaError::MissingField` when a requested column is absent
/// from the record.
pub fn project(record: &AliasRecord, spec: &ColumnSpec) -> Result<Vec<String>, SchemaError> {
    spec.columns()
        .iter()
        .map(|name| {
            record
                .get(name)
                .map(render_value)
                .ok_or_else(|| SchemaError::MissingField { name: name.clone() })
        })
        .collect()
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_owned(),
        Value::Bool(false) => "False".to_owned(),
        Value::Number(n) => n.to_string(),
        // recipients comes back as an array of objects
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> AliasRecord {
        let Value::Object(map) = json!({
            "id": "f1a2",
            "email": "a@x.io",
            "active": true,
            "emails_forwarded": 42,
            "description": null,
        }) else {
            unreachable!()
        };
        map
    }

    #[test]
    fn test_projection_follows_requested_order() {
        let spec = ColumnSpec::parse("email,id").unwrap();
        let row = project(&record(), &spec).unwrap();
        assert_eq!(row, ["a@x.io", "f1a2"]);
    }

    #[test]
    fn test_permutation_preserves_content() {
        let spec_a = ColumnSpec::parse("id,email,active").unwrap();
        let spec_b = ColumnSpec::parse("active,email,id").unwrap();
        let row_a = project(&record(), &spec_a).unwrap();
        let row_b = project(&record(), &spec_b).unwrap();
        assert_eq!(row_a, ["f1a2", "a@x.io", "True"]);
        assert_eq!(row_b, ["True", "a@x.io", "f1a2"]);
    }

    #[test]
    fn test_booleans_render_capitalized() {
        assert_eq!(render_value(&json!(true)), "True");
        assert_eq!(render_value(&json!(false)), "False");
    }

    #[test]
    fn test_numbers_render_canonically() {
        assert_eq!(render_value(&json!(42)), "42");
        assert_eq!(render_value(&json!(-1.5)), "-1.5");
    }

    #[test]
    fn test_null_renders_empty() {
        let spec = ColumnSpec::parse("description").unwrap();
        let row = project(&record(), &spec).unwrap();
        assert_eq!(row, [""]);
    }

    #[test]
    fn test_array_renders_as_compact_json() {
        assert_eq!(render_value(&json!(["a", "b"])), r#"["a","b"]"#);
    }

    #[test]
    fn test_missing_column_fails() {
        let spec = ColumnSpec::parse("id,recipients").unwrap();
        let result = project(&record(), &spec);
        assert!(matches!(
            result,
            Err(SchemaError::MissingField { name }) if name == "recipients"
        ));
    }
}

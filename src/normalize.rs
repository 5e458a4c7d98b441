//! Coercion of loose store values into stable string keys.
//!
//! The row store is schema-loose and has returned identifiers and category
//! labels as numbers or nested objects in some records. Everything downstream
//! — grouping maps, rendered list keys, URL construction — needs string keys,
//! so this boundary runs exactly once when rows are parsed into the typed
//! model ([`crate::types`]). After that, all code may assume plain strings.

use serde_json::Value;

/// Fallback when a structured value cannot be serialized at all.
const OPAQUE_FALLBACK: &str = "[object Object]";

/// Coerce any JSON value to a string key.
///
/// - `null` → empty string
/// - strings pass through unchanged
/// - numbers and booleans use their canonical text form
/// - objects and arrays serialize to compact JSON, falling back to a fixed
///   literal if serialization fails
///
/// Total: returns a string for every input.
pub fn normalize_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        structured => {
            serde_json::to_string(structured).unwrap_or_else(|_| OPAQUE_FALLBACK.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_is_empty() {
        assert_eq!(normalize_value(&Value::Null), "");
    }

    #[test]
    fn string_passes_through() {
        assert_eq!(normalize_value(&json!("Main Course")), "Main Course");
    }

    #[test]
    fn integer_to_text() {
        assert_eq!(normalize_value(&json!(42)), "42");
    }

    #[test]
    fn float_to_text() {
        assert_eq!(normalize_value(&json!(3.5)), "3.5");
    }

    #[test]
    fn bool_to_text() {
        assert_eq!(normalize_value(&json!(true)), "true");
    }

    #[test]
    fn object_serializes_to_json() {
        assert_eq!(normalize_value(&json!({"id": 7})), r#"{"id":7}"#);
    }

    #[test]
    fn array_serializes_to_json() {
        assert_eq!(normalize_value(&json!([1, "two"])), r#"[1,"two"]"#);
    }

    #[test]
    fn nested_object_is_stable() {
        let v = json!({"outer": {"inner": [1, 2]}});
        assert_eq!(normalize_value(&v), normalize_value(&v));
    }

    #[test]
    fn empty_string_stays_empty() {
        assert_eq!(normalize_value(&json!("")), "");
    }
}

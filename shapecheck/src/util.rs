//! Small helpers shared by schemas and message rendering.

use serde_json::{Map, Value};

/// Format `count` followed by the singular or plural word form.
///
/// The singular form is used only when `count` is exactly 1.
///
/// # Examples
///
/// ```rust
/// use shapecheck::util::pluralize;
///
/// assert_eq!(pluralize(1, "item", "items"), "1 item");
/// assert_eq!(pluralize(0, "item", "items"), "0 items");
/// assert_eq!(pluralize(2, "item", "items"), "2 items");
/// ```
pub fn pluralize(count: i64, singular: &str, plural: &str) -> String {
    let word = if count == 1 { singular } else { plural };
    format!("{} {}", count, word)
}

/// Borrow `value` as a plain object.
///
/// In the JSON value model every object is a plain key/value map whose only
/// ancestor is the object root, so this is a tag check: arrays, null and
/// primitives are not plain objects.
pub fn as_plain_object(value: &Value) -> Option<&Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Returns true if `value` is a plain object.
///
/// # Examples
///
/// ```rust
/// use shapecheck::util::is_plain_object;
/// use serde_json::json;
///
/// assert!(is_plain_object(&json!({})));
/// assert!(!is_plain_object(&json!(null)));
/// assert!(!is_plain_object(&json!([])));
/// ```
pub fn is_plain_object(value: &Value) -> bool {
    as_plain_object(value).is_some()
}

/// Name of the JSON type of `value`, as used in error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

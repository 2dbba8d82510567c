use crate::config::ValidationConfig;
use crate::error::ValidationError;
use crate::schema::{Input, Schema, present};
use serde_json::Value;

/// Accepts exactly one of a fixed list of JSON values.
///
/// # Example
/// ```rust
/// use shapecheck::prelude::*;
/// use serde_json::json;
///
/// let status = enumeration(["active", "inactive"]);
/// assert_eq!(status.parse(&json!("active")).unwrap(), json!("active"));
/// assert_eq!(status.parse(&json!("deleted")).unwrap_err().code, ErrorCode::InvalidEnum);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EnumSchema {
    options: Vec<Value>,
}

impl EnumSchema {
    /// A schema accepting exactly one of `values`.
    pub fn new<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            options: values.into_iter().map(Into::into).collect(),
        }
    }

    /// The accepted values.
    pub fn options(&self) -> &[Value] {
        &self.options
    }
}

impl Schema for EnumSchema {
    type Output = Value;
    type Present = Value;

    // yields the matching option, so `2.0` against an option `2` yields `2`
    fn check(&self, input: Input<'_>, _config: &ValidationConfig) -> Result<Value, ValidationError> {
        let value = present(input)?;
        self.options
            .iter()
            .find(|option| same_member(option, value))
            .cloned()
            .ok_or_else(|| ValidationError::invalid_enum(&self.options, value))
    }

    fn into_present(output: Value) -> Option<Value> {
        Some(output)
    }
}

/// JSON equality where numbers compare by value: `2` and `2.0` are the same member.
fn same_member(option: &Value, value: &Value) -> bool {
    match (option, value) {
        (Value::Number(a), Value::Number(b)) => {
            if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
                x == y
            } else if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
                x == y
            } else {
                a.as_f64() == b.as_f64()
            }
        }
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| same_member(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| same_member(x, y)))
        }
        _ => option == value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use serde_json::json;

    #[test]
    fn test_mixed_options() {
        let schema = EnumSchema::new([json!(1), json!("one"), Value::Null]);
        assert_eq!(schema.parse(&json!(1)).unwrap(), json!(1));
        assert_eq!(schema.parse(&json!(null)).unwrap(), Value::Null);

        let err = schema.parse(&json!("two")).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidEnum);
        assert_eq!(err.params["options"], json!([1, "one", null]));
        assert_eq!(err.params["received"], json!("two"));
    }

    #[test]
    fn test_numbers_compare_by_json_value() {
        let schema = EnumSchema::new([1, 2, 3]);
        assert!(schema.parse(&json!(2)).is_ok());
        assert!(schema.parse(&json!(2.5)).is_err());
    }

    #[test]
    fn test_whole_floats_match_integer_options() {
        let schema = EnumSchema::new([1, 2, 3]);
        assert_eq!(schema.parse(&json!(2.0)).unwrap(), json!(2));

        let floats = EnumSchema::new([0.5, 3.0]);
        assert_eq!(floats.parse(&json!(3)).unwrap(), json!(3.0));
        assert!(floats.parse(&json!(0.5)).is_ok());

        let nested = EnumSchema::new([json!({"v": [1]})]);
        assert_eq!(nested.parse(&json!({"v": [1.0]})).unwrap(), json!({"v": [1]}));
    }

    #[test]
    fn test_empty_enum_rejects_everything() {
        let schema = EnumSchema::new(Vec::<Value>::new());
        let err = schema.parse(&json!("a")).unwrap_err();
        assert_eq!(err.message, "Expected one of 0 values (), received \"a\"");
    }
}

//! The result of validating an input.
//!
//! [`ValidationResult`] is a two-variant tagged union: either the mapped
//! value or the [`ValidationError`] describing why validation failed.
//! It serializes as `{"ok": true, "value": ...}` or
//! `{"ok": false, "error": ...}`.
//!
//! # Example
//! ```rust
//! use shapecheck::{invalid, valid, ValidationError, ValidationResult};
//!
//! let ok: ValidationResult<u32> = valid(3);
//! assert!(ok.is_ok());
//! assert_eq!(ok.value(), Some(&3));
//!
//! let failed: ValidationResult<u32> = invalid(ValidationError::required("undefined"));
//! assert!(!failed.is_ok());
//! assert!(failed.into_result().is_err());
//! ```

use crate::error::ValidationError;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

/// Outcome of a validation: the mapped value or the error, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult<T> {
    /// Validation passed
    Valid(T),
    /// Validation failed
    Invalid(ValidationError),
}

impl<T> ValidationResult<T> {
    /// Create a successful validation result
    pub fn valid(value: T) -> Self {
        Self::Valid(value)
    }

    /// Create a failed validation result
    pub fn invalid(error: ValidationError) -> Self {
        Self::Invalid(error)
    }

    /// Check if validation passed
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Check if validation failed
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// The mapped value, if validation passed
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// The error, if validation failed
    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(error) => Some(error),
        }
    }

    /// Consume into the mapped value
    pub fn into_value(self) -> Option<T> {
        self.into_result().ok()
    }

    /// Consume into the error
    pub fn into_error(self) -> Option<ValidationError> {
        self.into_result().err()
    }

    /// Convert into a standard `Result` for `?` propagation
    pub fn into_result(self) -> Result<T, ValidationError> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(error) => Err(error),
        }
    }

    /// Map the value of a successful result
    pub fn map<U, F>(self, f: F) -> ValidationResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Valid(value) => ValidationResult::Valid(f(value)),
            Self::Invalid(error) => ValidationResult::Invalid(error),
        }
    }

    /// Chain a further validation onto a successful result
    pub fn and_then<U, F>(self, f: F) -> ValidationResult<U>
    where
        F: FnOnce(T) -> ValidationResult<U>,
    {
        match self {
            Self::Valid(value) => f(value),
            Self::Invalid(error) => ValidationResult::Invalid(error),
        }
    }
}

/// Create a successful validation result
pub fn valid<T>(value: T) -> ValidationResult<T> {
    ValidationResult::valid(value)
}

/// Create a failed validation result
pub fn invalid<T>(error: ValidationError) -> ValidationResult<T> {
    ValidationResult::invalid(error)
}

impl<T> From<Result<T, ValidationError>> for ValidationResult<T> {
    fn from(result: Result<T, ValidationError>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::Invalid(error),
        }
    }
}

impl<T> From<ValidationResult<T>> for Result<T, ValidationError> {
    fn from(result: ValidationResult<T>) -> Self {
        result.into_result()
    }
}

impl<T: Serialize> Serialize for ValidationResult<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        match self {
            Self::Valid(value) => {
                state.serialize_field("ok", &true)?;
                state.serialize_field("value", value)?;
            }
            Self::Invalid(error) => {
                state.serialize_field("ok", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields, bound = "T: Deserialize<'de>")]
struct Envelope<T> {
    ok: bool,
    // a present `null` is a value, only a missing field is `None`
    #[serde(default, deserialize_with = "present_field")]
    value: Option<T>,
    error: Option<ValidationError>,
}

fn present_field<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ValidationResult<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let envelope = Envelope::<T>::deserialize(deserializer)?;
        match (envelope.ok, envelope.value, envelope.error) {
            (true, Some(value), None) => Ok(Self::Valid(value)),
            (false, None, Some(error)) => Ok(Self::Invalid(error)),
            (true, _, _) => Err(de::Error::custom(
                "a successful result must carry a value and no error",
            )),
            (false, _, _) => Err(de::Error::custom(
                "a failed result must carry an error and no value",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use serde_json::{Value, json};

    #[test]
    fn test_accessors_are_exclusive() {
        let ok = ValidationResult::valid("x");
        assert!(ok.is_ok());
        assert!(ok.error().is_none());

        let failed: ValidationResult<&str> = invalid(ValidationError::required("null"));
        assert!(failed.is_err());
        assert!(failed.value().is_none());
        assert_eq!(failed.error().map(|e| e.code), Some(ErrorCode::Required));
    }

    #[test]
    fn test_map_and_then() {
        let doubled = valid(21).map(|n| n * 2);
        assert_eq!(doubled.into_value(), Some(42));

        let failed = valid(1).and_then(|_| invalid::<u8>(ValidationError::required("null")));
        assert_eq!(failed.into_error().map(|e| e.code), Some(ErrorCode::Required));
    }

    #[test]
    fn test_std_result_conversions() {
        let from_ok: ValidationResult<i32> = Ok(5).into();
        assert_eq!(from_ok, valid(5));

        let back: Result<i32, ValidationError> = invalid(ValidationError::required("x")).into();
        assert!(back.is_err());
    }

    #[test]
    fn test_serialize_envelope() {
        let ok = serde_json::to_value(valid(json!({"a": 1}))).unwrap();
        assert_eq!(ok, json!({"ok": true, "value": {"a": 1}}));

        let failed =
            serde_json::to_value(invalid::<i32>(ValidationError::required("undefined"))).unwrap();
        assert_eq!(failed["ok"], json!(false));
        assert_eq!(failed["error"]["code"], json!("required"));
        assert!(failed.get("value").is_none());
    }

    #[test]
    fn test_deserialize_envelope() {
        let ok: ValidationResult<String> =
            serde_json::from_value(json!({"ok": true, "value": "hi"})).unwrap();
        assert_eq!(ok, valid("hi".to_string()));

        let failed: ValidationResult<String> = serde_json::from_value(json!({
            "ok": false,
            "error": {"code": "invalid_type", "message": "Expected string, received number"}
        }))
        .unwrap();
        assert_eq!(failed.error().map(|e| e.code), Some(ErrorCode::InvalidType));
    }

    #[test]
    fn test_deserialize_rejects_mixed_shapes() {
        let both = serde_json::from_value::<ValidationResult<i32>>(json!({
            "ok": true,
            "value": 1,
            "error": {"code": "required", "message": "Required"}
        }));
        assert!(both.is_err());

        let neither = serde_json::from_value::<ValidationResult<i32>>(json!({"ok": false}));
        assert!(neither.is_err());

        let null_value: ValidationResult<Value> =
            serde_json::from_value(json!({"ok": true, "value": null})).unwrap();
        assert_eq!(null_value, valid(Value::Null));
    }
}

//! Error types for schema validation
//!
//! Every validation failure is represented by a single structured type,
//! [`ValidationError`], carrying one code from the closed [`ErrorCode`] set,
//! a rendered message, the location of the failing value and the
//! contextual parameters the message was rendered from.
//!
//! Composite schemas (arrays, objects, unions) nest the errors of their
//! children in [`ValidationError::issues`], each child carrying its own path.
//!
//! # Example
//! ```rust
//! use shapecheck::{ErrorCode, ValidationError};
//! use serde_json::json;
//!
//! let error = ValidationError::invalid_type("string", &json!(42)).at("name");
//! assert_eq!(error.code, ErrorCode::InvalidType);
//! assert_eq!(error.path_string(), "name");
//! assert_eq!(error.message, "Expected string, received number");
//! ```

use crate::message::default_message;
use crate::util::type_name;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Contextual parameters attached to an error and handed to message formatters.
pub type Params = Map<String, Value>;

/// The closed set of validation error codes.
///
/// Concrete schemas pick exactly one code per failure. The set is fixed so
/// that downstream code can match on it exhaustively.
///
/// When serialized, codes are lowercase snake_case strings
/// (e.g., `InvalidType` becomes `"invalid_type"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A value was absent or null where one is required
    Required,
    /// The value has the wrong primitive or structural type
    InvalidType,
    /// The value is not one of the allowed enumeration members
    InvalidEnum,
    /// One or more array items failed the item schema
    InvalidArrayItems,
    /// The value is not an object at all
    InvalidObject,
    /// The object's fields or keys do not match the expected shape
    InvalidObjectShape,
    /// The value matched none of the union's alternatives
    InvalidUnion,
    /// The string does not match a required pattern
    StringPattern,
}

impl ErrorCode {
    /// Every code, in declaration order.
    pub const ALL: [ErrorCode; 8] = [
        Self::Required,
        Self::InvalidType,
        Self::InvalidEnum,
        Self::InvalidArrayItems,
        Self::InvalidObject,
        Self::InvalidObjectShape,
        Self::InvalidUnion,
        Self::StringPattern,
    ];

    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::InvalidType => "invalid_type",
            Self::InvalidEnum => "invalid_enum",
            Self::InvalidArrayItems => "invalid_array_items",
            Self::InvalidObject => "invalid_object",
            Self::InvalidObjectShape => "invalid_object_shape",
            Self::InvalidUnion => "invalid_union",
            Self::StringPattern => "string_pattern",
        }
    }

    /// Returns true if errors with this code aggregate child errors.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            Self::InvalidArrayItems | Self::InvalidObjectShape | Self::InvalidUnion
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a string that is not one of the known error codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown validation error code '{0}'")]
pub struct UnknownErrorCode(pub String);

impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownErrorCode(s.to_string()))
    }
}

/// One step in the location of a nested value: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Array index
    Index(usize),
    /// Object key
    Key(String),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "[{}]", index),
            Self::Key(key) => f.write_str(key),
        }
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

/// Render a path as `user.tags[0].name`. The root path renders as an empty string.
pub fn format_path(path: &[PathSegment]) -> String {
    let mut rendered = String::new();
    for segment in path {
        match segment {
            PathSegment::Index(_) => {}
            PathSegment::Key(_) if rendered.is_empty() => {}
            PathSegment::Key(_) => rendered.push('.'),
        }
        rendered.push_str(&segment.to_string());
    }
    rendered
}

/// Structured validation failure.
///
/// # Example
/// ```rust
/// use shapecheck::{ErrorCode, ValidationError};
///
/// let error = ValidationError::required("null").at("email");
/// assert_eq!(error.code, ErrorCode::Required);
/// assert_eq!(error.to_string(), "[required] Required");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("[{code}] {message}")]
pub struct ValidationError {
    /// Failure category
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Location of the failing value, root first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<PathSegment>,
    /// Parameters the message was rendered from
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub params: Params,
    /// Child errors for composite schemas
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<ValidationError>,
}

impl ValidationError {
    /// Create an error whose message is the default message for `code`.
    pub fn new(code: ErrorCode, params: Params) -> Self {
        Self {
            code,
            message: default_message(code, &params),
            path: Vec::new(),
            params,
            issues: Vec::new(),
        }
    }

    /// Replace the message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach child errors.
    pub fn with_issues(mut self, issues: Vec<ValidationError>) -> Self {
        self.issues = issues;
        self
    }

    /// Prefix the path of this error and of every nested issue with `segment`.
    ///
    /// Composite schemas call this on child errors so that every error
    /// carries its full location from the root.
    pub fn at(mut self, segment: impl Into<PathSegment>) -> Self {
        self.prefix(&segment.into());
        self
    }

    fn prefix(&mut self, segment: &PathSegment) {
        self.path.insert(0, segment.clone());
        for issue in &mut self.issues {
            issue.prefix(segment);
        }
    }

    /// The path rendered as `a.b[0]`.
    pub fn path_string(&self) -> String {
        format_path(&self.path)
    }

    /// Errors without nested issues, depth first.
    ///
    /// For a composite error this is the list of concrete failures; for a
    /// leaf error it is the error itself.
    pub fn leaves(&self) -> Vec<&ValidationError> {
        if self.issues.is_empty() {
            return vec![self];
        }
        self.issues.iter().flat_map(|issue| issue.leaves()).collect()
    }

    /// Leaf errors grouped by rendered path.
    pub fn errors_by_path(&self) -> HashMap<String, Vec<&ValidationError>> {
        let mut map: HashMap<String, Vec<&ValidationError>> = HashMap::new();
        for error in self.leaves() {
            map.entry(error.path_string()).or_default().push(error);
        }
        map
    }

    /// Convert to a JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Convert to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    // Convenience constructors

    /// Create a REQUIRED error. `received` is `"undefined"` for absent values.
    pub fn required(received: &str) -> Self {
        let mut params = Params::new();
        params.insert("received".into(), received.into());
        Self::new(ErrorCode::Required, params)
    }

    /// Create an INVALID_TYPE error.
    pub fn invalid_type(expected: &str, received: &Value) -> Self {
        let mut params = Params::new();
        params.insert("expected".into(), expected.into());
        params.insert("received".into(), type_name(received).into());
        Self::new(ErrorCode::InvalidType, params)
    }

    /// Create an INVALID_ENUM error.
    pub fn invalid_enum(options: &[Value], received: &Value) -> Self {
        let mut params = Params::new();
        params.insert("options".into(), Value::Array(options.to_vec()));
        params.insert("received".into(), received.clone());
        Self::new(ErrorCode::InvalidEnum, params)
    }

    /// Create an INVALID_OBJECT error.
    pub fn invalid_object(received: &Value) -> Self {
        let mut params = Params::new();
        params.insert("received".into(), type_name(received).into());
        Self::new(ErrorCode::InvalidObject, params)
    }

    /// Create a STRING_PATTERN error.
    pub fn string_pattern(pattern: &str, flags: &str) -> Self {
        let mut params = Params::new();
        params.insert("pattern".into(), pattern.into());
        params.insert("flags".into(), flags.into());
        Self::new(ErrorCode::StringPattern, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_code_as_str_matches_serde() {
        for code in ErrorCode::ALL {
            let json = serde_json::to_value(code).unwrap();
            assert_eq!(json, json!(code.as_str()));
        }
    }

    #[test]
    fn test_code_from_str() {
        assert_eq!(
            "invalid_union".parse::<ErrorCode>().unwrap(),
            ErrorCode::InvalidUnion
        );
        let err = "too_small".parse::<ErrorCode>().unwrap_err();
        assert_eq!(err, UnknownErrorCode("too_small".to_string()));
    }

    #[test]
    fn test_composite_codes() {
        let composite: Vec<_> = ErrorCode::ALL
            .into_iter()
            .filter(|c| c.is_composite())
            .collect();
        assert_eq!(
            composite,
            vec![
                ErrorCode::InvalidArrayItems,
                ErrorCode::InvalidObjectShape,
                ErrorCode::InvalidUnion
            ]
        );
    }

    #[test]
    fn test_format_path() {
        let path = vec![
            PathSegment::from("user"),
            PathSegment::from("tags"),
            PathSegment::from(0),
            PathSegment::from("name"),
        ];
        assert_eq!(format_path(&path), "user.tags[0].name");
        assert_eq!(format_path(&[PathSegment::Index(2)]), "[2]");
        assert_eq!(format_path(&[]), "");
    }

    #[test]
    fn test_at_prefixes_nested_issues() {
        let child = ValidationError::invalid_type("number", &json!("x")).at("age");
        let parent = ValidationError::new(ErrorCode::InvalidObjectShape, Params::new())
            .with_issues(vec![child])
            .at(3)
            .at("users");

        assert_eq!(parent.path_string(), "users[3]");
        assert_eq!(parent.issues[0].path_string(), "users[3].age");
    }

    #[test]
    fn test_leaves_and_errors_by_path() {
        let error = ValidationError::new(ErrorCode::InvalidObjectShape, Params::new())
            .with_issues(vec![
                ValidationError::required("undefined").at("name"),
                ValidationError::invalid_type("string", &json!(1)).at("email"),
            ]);

        assert_eq!(error.leaves().len(), 2);
        let by_path = error.errors_by_path();
        assert_eq!(by_path["name"][0].code, ErrorCode::Required);
        assert_eq!(by_path["email"][0].code, ErrorCode::InvalidType);
    }

    #[test]
    fn test_display() {
        let error = ValidationError::invalid_object(&json!([]));
        assert_eq!(error.to_string(), "[invalid_object] Expected object, received array");
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let error = ValidationError::required("undefined");
        let json: Value = serde_json::from_str(&error.to_json()).unwrap();
        assert_eq!(json["code"], "required");
        assert!(json.get("path").is_none());
        assert!(json.get("issues").is_none());

        let parsed: ValidationError = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, error);
    }
}

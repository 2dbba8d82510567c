//! String, number, integer and boolean schemas.

use crate::config::ValidationConfig;
use crate::error::ValidationError;
use crate::message::{Message, format_message};
use crate::pattern::Pattern;
use crate::schema::{Input, Schema, present};
use tracing::trace;

#[derive(Debug, Clone)]
struct PatternRule {
    pattern: Pattern,
    message: Option<Message>,
}

/// Accepts strings, optionally constrained by patterns.
///
/// # Example
/// ```rust
/// use shapecheck::prelude::*;
/// use shapecheck::pattern::Pattern;
/// use serde_json::json;
///
/// let slug = string().pattern(Pattern::new("^[a-z0-9-]+$").unwrap());
/// assert!(slug.parse(&json!("hello-world")).is_ok());
/// assert_eq!(slug.parse(&json!("Hello World")).unwrap_err().code, ErrorCode::StringPattern);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringSchema {
    patterns: Vec<PatternRule>,
}

impl StringSchema {
    /// A string schema without constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the string to match `pattern`.
    pub fn pattern(self, pattern: Pattern) -> Self {
        self.push_pattern(pattern, None)
    }

    /// Require the string to match `pattern`, reporting `message` when it doesn't.
    ///
    /// Function messages receive the `pattern` and `flags` params.
    pub fn pattern_with_message(self, pattern: Pattern, message: impl Into<Message>) -> Self {
        self.push_pattern(pattern, Some(message.into()))
    }

    fn push_pattern(mut self, pattern: Pattern, message: Option<Message>) -> Self {
        self.patterns.push(PatternRule { pattern, message });
        self
    }

    /// The patterns checked, in order.
    pub fn patterns(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter().map(|rule| &rule.pattern)
    }
}

impl Schema for StringSchema {
    type Output = String;
    type Present = String;

    fn check(&self, input: Input<'_>, _config: &ValidationConfig) -> Result<String, ValidationError> {
        let value = present(input)?;
        let text = value
            .as_str()
            .ok_or_else(|| ValidationError::invalid_type("string", value))?;

        if let Some(rule) = self.patterns.iter().find(|rule| !rule.pattern.is_match(text)) {
            trace!(pattern = %rule.pattern, "String does not match pattern");
            let error = ValidationError::string_pattern(rule.pattern.source(), rule.pattern.flags());
            return Err(match &rule.message {
                Some(message) => {
                    let text = format_message(message, &error.params);
                    error.with_message(text)
                }
                None => error,
            });
        }
        Ok(text.to_string())
    }

    fn into_present(output: String) -> Option<String> {
        Some(output)
    }
}

/// Accepts JSON numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberSchema;

impl NumberSchema {
    /// A number schema.
    pub fn new() -> Self {
        Self
    }
}

impl Schema for NumberSchema {
    type Output = f64;
    type Present = f64;

    fn check(&self, input: Input<'_>, _config: &ValidationConfig) -> Result<f64, ValidationError> {
        let value = present(input)?;
        value
            .as_f64()
            .filter(|n| n.is_finite())
            .ok_or_else(|| ValidationError::invalid_type("number", value))
    }

    fn into_present(output: f64) -> Option<f64> {
        Some(output)
    }
}

/// Accepts whole numbers that fit in an `i64`, including floats like `3.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerSchema;

impl IntegerSchema {
    /// An integer schema.
    pub fn new() -> Self {
        Self
    }
}

// 2^63; every f64 below it in magnitude converts to i64 exactly
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

impl Schema for IntegerSchema {
    type Output = i64;
    type Present = i64;

    fn check(&self, input: Input<'_>, _config: &ValidationConfig) -> Result<i64, ValidationError> {
        let value = present(input)?;
        value
            .as_i64()
            .or_else(|| {
                value
                    .as_f64()
                    .filter(|n| n.fract() == 0.0 && n.abs() < I64_BOUND)
                    .map(|n| n as i64)
            })
            .ok_or_else(|| ValidationError::invalid_type("integer", value))
    }

    fn into_present(output: i64) -> Option<i64> {
        Some(output)
    }
}

/// Accepts `true` and `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanSchema;

impl BooleanSchema {
    /// A boolean schema.
    pub fn new() -> Self {
        Self
    }
}

impl Schema for BooleanSchema {
    type Output = bool;
    type Present = bool;

    fn check(&self, input: Input<'_>, _config: &ValidationConfig) -> Result<bool, ValidationError> {
        let value = present(input)?;
        value
            .as_bool()
            .ok_or_else(|| ValidationError::invalid_type("boolean", value))
    }

    fn into_present(output: bool) -> Option<bool> {
        Some(output)
    }
}

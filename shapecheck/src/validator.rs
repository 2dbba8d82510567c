//! The validator contract
//!
//! [`Validator`] is the narrow, object-safe interface exposing the two
//! calling conventions: [`validate`](Validator::validate), which always
//! returns a [`ValidationResult`], and [`parse`](Validator::parse), which
//! returns the error through `Result` for `?` propagation.
//!
//! Any schema is adapted with [`SchemaValidator`] (or
//! [`Schema::into_validator`]); plain functions of an [`Input`] are
//! validators too.
//!
//! # Example
//! ```rust
//! use shapecheck::prelude::*;
//! use serde_json::json;
//!
//! let validators: Vec<Box<dyn Validator<Option<String>>>> = vec![
//!     Box::new(string().optional().into_validator()),
//!     Box::new(string().nullable().into_validator()),
//! ];
//!
//! for validator in &validators {
//!     assert_eq!(validator.parse(Input::from(&json!("a"))).unwrap(), Some("a".to_string()));
//! }
//! ```

use crate::config::{ConfigValidationError, ValidationConfig};
use crate::error::ValidationError;
use crate::result::ValidationResult;
use crate::schema::{Input, Schema};
use tracing::debug;

/// Trait for anything that validates an [`Input`] into a `T`.
pub trait Validator<T> {
    /// Validate `input`. Never fails outward.
    fn validate(&self, input: Input<'_>) -> ValidationResult<T>;

    /// Validate `input`, returning the error for `?` propagation.
    ///
    /// Defined in terms of [`validate`](Validator::validate): it is `Ok`
    /// exactly when `validate` is valid, with the same value.
    fn parse(&self, input: Input<'_>) -> Result<T, ValidationError> {
        self.validate(input).into_result()
    }
}

impl<T, F> Validator<T> for F
where
    F: Fn(Input<'_>) -> ValidationResult<T>,
{
    fn validate(&self, input: Input<'_>) -> ValidationResult<T> {
        self(input)
    }
}

/// Adapts a [`Schema`] to the [`Validator`] contract under a fixed configuration.
#[derive(Debug, Clone)]
pub struct SchemaValidator<S> {
    schema: S,
    config: ValidationConfig,
}

impl<S: Schema> SchemaValidator<S> {
    /// Adapt `schema` using the default configuration.
    pub fn new(schema: S) -> Self {
        Self {
            schema,
            config: ValidationConfig::default(),
        }
    }

    /// Use `config` for every validation.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`ValidationConfig::validate`].
    pub fn with_config(mut self, config: ValidationConfig) -> Result<Self, ConfigValidationError> {
        config.validate().inspect_err(|e| debug!(error = %e, "Rejected validator config"))?;
        self.config = config;
        Ok(self)
    }

    /// The adapted schema.
    pub fn schema(&self) -> &S {
        &self.schema
    }

    /// The configuration used for every validation.
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl<S: Schema> Validator<S::Output> for SchemaValidator<S> {
    fn validate(&self, input: Input<'_>) -> ValidationResult<S::Output> {
        self.schema.validate_with(input, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UnknownKeys;
    use crate::error::ErrorCode;
    use crate::kinds::{number, object, string};
    use crate::result::{invalid, valid};
    use serde_json::json;

    #[test]
    fn test_schema_validator_matches_schema() {
        let validator = number().into_validator();
        let value = json!(4);
        assert_eq!(validator.validate(Input::from(&value)), valid(4.0));
        assert_eq!(validator.parse(Input::from(&value)).unwrap(), 4.0);

        let err = validator.parse(Input::Absent).unwrap_err();
        assert_eq!(err.code, ErrorCode::Required);
    }

    #[test]
    fn test_with_config_applies_to_every_call() {
        let validator = object()
            .field("id", number())
            .into_validator()
            .with_config(ValidationConfig::new().with_unknown_keys(UnknownKeys::Strict))
            .unwrap();

        let input = json!({"id": 1, "extra": true});
        let err = validator.parse(Input::from(&input)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidObjectShape);
        assert_eq!(validator.config().unknown_keys, UnknownKeys::Strict);
    }

    #[test]
    fn test_with_config_rejects_invalid_config() {
        let result = string()
            .into_validator()
            .with_config(ValidationConfig::new().with_max_issues(0));
        assert_eq!(result.unwrap_err(), ConfigValidationError::InvalidMaxIssues);
    }

    #[test]
    fn test_function_validator() {
        let non_empty = |input: Input<'_>| match input.value().and_then(|v| v.as_str()) {
            Some(s) if !s.is_empty() => valid(s.len()),
            _ => invalid(crate::ValidationError::required(input.received())),
        };

        let text = json!("abc");
        assert_eq!(non_empty.parse(Input::from(&text)).unwrap(), 3);
        assert!(non_empty.validate(Input::Absent).is_err());
    }
}

//! The schema contract
//!
//! Every schema kind implements [`Schema`]. A schema describes the shape it
//! expects and the value it produces after parsing (its `Output`, the
//! "mapped" type). The modifiers [`optional`](Schema::optional),
//! [`nullable`](Schema::nullable), [`nullish`](Schema::nullish) and
//! [`required`](Schema::required) wrap a schema in a new one whose output
//! type records what the wrapper accepts:
//!
//! | Call | Output |
//! |------|--------|
//! | `s.optional()` | `Option<M>`, `None` meaning absent |
//! | `s.nullable()` | `Option<M>`, `None` meaning null |
//! | `s.nullish()` | [`Maybe<M>`] |
//! | `s.required()` | `M` with null and absence excluded |
//!
//! Schemas are immutable descriptors. Modifiers consume the schema and
//! return a new value; clone first to keep the original. Wrappers check
//! their own dimension before delegating, so the most recently applied
//! modifier wins: `s.required().optional()` accepts absence again.
//!
//! # Example
//! ```rust
//! use shapecheck::prelude::*;
//! use serde_json::json;
//!
//! let name = string().optional();
//! assert_eq!(name.parse(Input::Absent).unwrap(), None);
//! assert_eq!(name.parse(&json!("Ada")).unwrap(), Some("Ada".to_string()));
//!
//! let strict_name = string().optional().required();
//! let err = strict_name.parse(&json!(null)).unwrap_err();
//! assert_eq!(err.code, ErrorCode::Required);
//! ```

use crate::config::ValidationConfig;
use crate::error::ValidationError;
use crate::modifiers::{
    NullableSchema, NullishSchema, OptionalSchema, RequiredParams, RequiredSchema,
};
use crate::result::ValidationResult;
use crate::util::type_name;
use crate::validator::SchemaValidator;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, trace};

/// A value handed to a schema: either absent or a JSON value (which may be null).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input<'a> {
    /// No value was provided
    Absent,
    /// A value was provided
    Present(&'a Value),
}

impl<'a> Input<'a> {
    /// Returns true if no value was provided.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns true if the value is an explicit null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Present(Value::Null))
    }

    /// Returns true if the value is absent or null.
    pub fn is_nullish(&self) -> bool {
        self.is_absent() || self.is_null()
    }

    /// The provided value, if any.
    pub fn value(&self) -> Option<&'a Value> {
        match self {
            Self::Absent => None,
            Self::Present(value) => Some(value),
        }
    }

    /// Type name used in error params: `"undefined"` for absent values.
    pub fn received(&self) -> &'static str {
        match self {
            Self::Absent => "undefined",
            Self::Present(value) => type_name(value),
        }
    }
}

impl<'a> From<&'a Value> for Input<'a> {
    fn from(value: &'a Value) -> Self {
        Self::Present(value)
    }
}

impl<'a> From<Option<&'a Value>> for Input<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }
}

/// Output of a nullish schema: absent, null, or a mapped value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    /// No value was provided
    Absent,
    /// An explicit null was provided
    Null,
    /// A value was provided and validated
    Present(T),
}

impl<T> Maybe<T> {
    /// Returns true for [`Maybe::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns true for [`Maybe::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true for [`Maybe::Present`].
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Borrow the contents.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Absent => Maybe::Absent,
            Self::Null => Maybe::Null,
            Self::Present(value) => Maybe::Present(value),
        }
    }

    /// Map the present value.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Maybe<U> {
        match self {
            Self::Absent => Maybe::Absent,
            Self::Null => Maybe::Null,
            Self::Present(value) => Maybe::Present(f(value)),
        }
    }

    /// Collapse absent and null into `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T: Into<Value>> From<Maybe<T>> for Value {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Present(value) => value.into(),
            Maybe::Absent | Maybe::Null => Value::Null,
        }
    }
}

/// Contract implemented by every schema kind.
///
/// Implementors supply [`check`](Schema::check) and
/// [`into_present`](Schema::into_present); everything else is provided.
///
/// # Example
///
/// ```rust
/// use shapecheck::prelude::*;
/// use serde_json::{json, Value};
///
/// /// Accepts any non-empty string and trims it.
/// #[derive(Debug, Clone)]
/// struct Trimmed;
///
/// impl Schema for Trimmed {
///     type Output = String;
///     type Present = String;
///
///     fn check(&self, input: Input<'_>, _config: &ValidationConfig) -> Result<String, ValidationError> {
///         let value = input.value().ok_or_else(|| ValidationError::required(input.received()))?;
///         value
///             .as_str()
///             .map(|s| s.trim().to_string())
///             .ok_or_else(|| ValidationError::invalid_type("string", value))
///     }
///
///     fn into_present(output: String) -> Option<String> {
///         Some(output)
///     }
/// }
///
/// assert_eq!(Trimmed.parse(&json!("  hi ")).unwrap(), "hi");
/// assert_eq!(Trimmed.nullable().parse(&Value::Null).unwrap(), None);
/// ```
pub trait Schema {
    /// The mapped type produced on success.
    type Output: Into<Value>;

    /// `Output` with null and absence excluded; the output of [`required`](Schema::required).
    type Present: Into<Value>;

    /// Validate `input` and produce the mapped value.
    ///
    /// Must be deterministic and must report failures with a code from the
    /// closed [`ErrorCode`](crate::ErrorCode) set.
    fn check(
        &self,
        input: Input<'_>,
        config: &ValidationConfig,
    ) -> Result<Self::Output, ValidationError>;

    /// Narrow an output to its present form, `None` when it stands for null or absence.
    fn into_present(output: Self::Output) -> Option<Self::Present>;

    /// Validate `input` and produce the mapped value as JSON, `None` meaning absent.
    ///
    /// Composite schemas use this to normalize children. Wrappers that can
    /// produce absence override it so that absence is not folded into null.
    fn check_json(
        &self,
        input: Input<'_>,
        config: &ValidationConfig,
    ) -> Result<Option<Value>, ValidationError> {
        self.check(input, config).map(|output| Some(output.into()))
    }

    /// Validate with the default configuration. Never fails outward.
    fn validate<'a>(&self, input: impl Into<Input<'a>>) -> ValidationResult<Self::Output>
    where
        Self: Sized,
    {
        self.validate_with(input, &ValidationConfig::default())
    }

    /// Validate with a custom configuration. Never fails outward.
    fn validate_with<'a>(
        &self,
        input: impl Into<Input<'a>>,
        config: &ValidationConfig,
    ) -> ValidationResult<Self::Output>
    where
        Self: Sized,
    {
        let input = input.into();
        if let Err(e) = config.validate() {
            debug!(error = %e, "Validating with an invalid config; composite errors keep one issue");
        }
        trace!(received = input.received(), "Validating input");
        match self.check(input, config) {
            Ok(output) => {
                trace!("Validation passed");
                ValidationResult::valid(output)
            }
            Err(error) => {
                debug!(
                    code = %error.code,
                    path = %error.path_string(),
                    issue_count = error.issues.len(),
                    "Validation failed"
                );
                ValidationResult::invalid(error)
            }
        }
    }

    /// Validate and return the mapped value, or the error for `?` propagation.
    ///
    /// `parse(x)` is `Ok(v)` exactly when `validate(x)` is valid with value `v`.
    fn parse<'a>(&self, input: impl Into<Input<'a>>) -> Result<Self::Output, ValidationError>
    where
        Self: Sized,
    {
        self.validate(input).into_result()
    }

    /// Also accept an absent value, mapped to `None`.
    fn optional(self) -> OptionalSchema<Self>
    where
        Self: Sized,
    {
        OptionalSchema::new(self)
    }

    /// Also accept null, mapped to `None`.
    fn nullable(self) -> NullableSchema<Self>
    where
        Self: Sized,
    {
        NullableSchema::new(self)
    }

    /// Also accept absence and null.
    fn nullish(self) -> NullishSchema<Self>
    where
        Self: Sized,
    {
        NullishSchema::new(self)
    }

    /// Reject absence and null with the default `required` message.
    fn required(self) -> RequiredSchema<Self>
    where
        Self: Sized,
    {
        RequiredSchema::new(self, RequiredParams::default())
    }

    /// Reject absence and null, reporting `params.message` when set.
    fn required_with(self, params: impl Into<RequiredParams>) -> RequiredSchema<Self>
    where
        Self: Sized,
    {
        RequiredSchema::new(self, params.into())
    }

    /// Erase the concrete type, for use as a child of composite schemas.
    fn boxed(self) -> Arc<dyn AnySchema>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Arc::new(self)
    }

    /// Adapt this schema to the [`Validator`](crate::Validator) contract.
    fn into_validator(self) -> SchemaValidator<Self>
    where
        Self: Sized,
    {
        SchemaValidator::new(self)
    }
}

/// Type-erased schema producing normalized JSON.
///
/// Implemented for every `Schema + Send + Sync`; composite schemas hold
/// their children as `Arc<dyn AnySchema>`.
pub trait AnySchema: Send + Sync {
    /// Validate `input`, producing normalized JSON or `None` for absence.
    fn check_any(
        &self,
        input: Input<'_>,
        config: &ValidationConfig,
    ) -> Result<Option<Value>, ValidationError>;
}

impl<S> AnySchema for S
where
    S: Schema + Send + Sync,
{
    fn check_any(
        &self,
        input: Input<'_>,
        config: &ValidationConfig,
    ) -> Result<Option<Value>, ValidationError> {
        self.check_json(input, config)
    }
}

/// Anything usable as a child schema: a concrete schema or an already erased one.
pub trait IntoAnySchema {
    /// Erase into a shared child schema.
    fn into_any(self) -> Arc<dyn AnySchema>;
}

impl<S> IntoAnySchema for S
where
    S: Schema + Send + Sync + 'static,
{
    fn into_any(self) -> Arc<dyn AnySchema> {
        Arc::new(self)
    }
}

impl IntoAnySchema for Arc<dyn AnySchema> {
    fn into_any(self) -> Arc<dyn AnySchema> {
        self
    }
}

/// Reject absence for base kinds; borrow the provided value otherwise.
pub(crate) fn present<'a>(input: Input<'a>) -> Result<&'a Value, ValidationError> {
    input
        .value()
        .ok_or_else(|| ValidationError::required(input.received()))
}

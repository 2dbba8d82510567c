//! Wrapper schemas produced by the optional/nullable/nullish/required modifiers.
//!
//! Each wrapper handles the absent and null states it is responsible for and
//! delegates everything else to the wrapped schema. Since the outermost
//! wrapper runs first, the last modifier applied decides how absence or
//! null is treated.

use crate::config::ValidationConfig;
use crate::error::ValidationError;
use crate::message::{Message, format_message};
use crate::schema::{Input, Maybe, Schema};
use serde_json::Value;
use tracing::trace;

/// Parameters for [`Schema::required_with`].
#[derive(Debug, Clone, Default)]
pub struct RequiredParams {
    /// Overrides the default `required` message. Function messages receive
    /// the error params (`received` is `"undefined"` or `"null"`).
    pub message: Option<Message>,
}

impl RequiredParams {
    /// Parameters with the default message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message reported for absent or null values.
    pub fn message(mut self, message: impl Into<Message>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl From<&str> for RequiredParams {
    fn from(message: &str) -> Self {
        Self::new().message(message)
    }
}

impl From<String> for RequiredParams {
    fn from(message: String) -> Self {
        Self::new().message(message)
    }
}

impl From<Message> for RequiredParams {
    fn from(message: Message) -> Self {
        Self::new().message(message)
    }
}

/// Accepts an absent value as `None`; see [`Schema::optional`].
#[derive(Debug, Clone)]
pub struct OptionalSchema<S> {
    inner: S,
}

impl<S> OptionalSchema<S> {
    /// Wrap `inner`.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// The wrapped schema.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: Schema> Schema for OptionalSchema<S> {
    type Output = Option<S::Output>;
    type Present = S::Present;

    fn check(
        &self,
        input: Input<'_>,
        config: &ValidationConfig,
    ) -> Result<Self::Output, ValidationError> {
        if input.is_absent() {
            trace!("Optional schema accepted absent value");
            return Ok(None);
        }
        self.inner.check(input, config).map(Some)
    }

    fn into_present(output: Self::Output) -> Option<Self::Present> {
        output.and_then(S::into_present)
    }

    fn check_json(
        &self,
        input: Input<'_>,
        config: &ValidationConfig,
    ) -> Result<Option<Value>, ValidationError> {
        if input.is_absent() {
            return Ok(None);
        }
        self.inner.check_json(input, config)
    }
}

/// Accepts null as `None`; see [`Schema::nullable`].
#[derive(Debug, Clone)]
pub struct NullableSchema<S> {
    inner: S,
}

impl<S> NullableSchema<S> {
    /// Wrap `inner`.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// The wrapped schema.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: Schema> Schema for NullableSchema<S> {
    type Output = Option<S::Output>;
    type Present = S::Present;

    fn check(
        &self,
        input: Input<'_>,
        config: &ValidationConfig,
    ) -> Result<Self::Output, ValidationError> {
        if input.is_null() {
            trace!("Nullable schema accepted null");
            return Ok(None);
        }
        self.inner.check(input, config).map(Some)
    }

    fn into_present(output: Self::Output) -> Option<Self::Present> {
        output.and_then(S::into_present)
    }

    fn check_json(
        &self,
        input: Input<'_>,
        config: &ValidationConfig,
    ) -> Result<Option<Value>, ValidationError> {
        if input.is_null() {
            return Ok(Some(Value::Null));
        }
        self.inner.check_json(input, config)
    }
}

/// Accepts both absence and null; see [`Schema::nullish`].
#[derive(Debug, Clone)]
pub struct NullishSchema<S> {
    inner: S,
}

impl<S> NullishSchema<S> {
    /// Wrap `inner`.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// The wrapped schema.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: Schema> Schema for NullishSchema<S> {
    type Output = Maybe<S::Output>;
    type Present = S::Present;

    fn check(
        &self,
        input: Input<'_>,
        config: &ValidationConfig,
    ) -> Result<Self::Output, ValidationError> {
        match input {
            Input::Absent => Ok(Maybe::Absent),
            Input::Present(Value::Null) => Ok(Maybe::Null),
            Input::Present(_) => self.inner.check(input, config).map(Maybe::Present),
        }
    }

    fn into_present(output: Self::Output) -> Option<Self::Present> {
        output.into_option().and_then(S::into_present)
    }

    fn check_json(
        &self,
        input: Input<'_>,
        config: &ValidationConfig,
    ) -> Result<Option<Value>, ValidationError> {
        match input {
            Input::Absent => Ok(None),
            Input::Present(Value::Null) => Ok(Some(Value::Null)),
            Input::Present(_) => self.inner.check_json(input, config),
        }
    }
}

/// Rejects absence and null with code `required`; see [`Schema::required`].
#[derive(Debug, Clone)]
pub struct RequiredSchema<S> {
    inner: S,
    params: RequiredParams,
}

impl<S> RequiredSchema<S> {
    /// Wrap `inner`.
    pub fn new(inner: S, params: RequiredParams) -> Self {
        Self { inner, params }
    }

    /// The wrapped schema.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn missing(&self, input: Input<'_>) -> ValidationError {
        trace!(received = input.received(), "Required schema rejected missing value");
        let error = ValidationError::required(input.received());
        match &self.params.message {
            Some(message) => {
                let text = format_message(message, &error.params);
                error.with_message(text)
            }
            None => error,
        }
    }
}

impl<S: Schema> Schema for RequiredSchema<S> {
    type Output = S::Present;
    type Present = S::Present;

    fn check(
        &self,
        input: Input<'_>,
        config: &ValidationConfig,
    ) -> Result<Self::Output, ValidationError> {
        if input.is_nullish() {
            return Err(self.missing(input));
        }
        let output = self.inner.check(input, config)?;
        S::into_present(output).ok_or_else(|| self.missing(input))
    }

    fn into_present(output: Self::Output) -> Option<Self::Present> {
        Some(output)
    }

    fn check_json(
        &self,
        input: Input<'_>,
        config: &ValidationConfig,
    ) -> Result<Option<Value>, ValidationError> {
        if input.is_nullish() {
            return Err(self.missing(input));
        }
        match self.inner.check_json(input, config)? {
            Some(Value::Null) | None => Err(self.missing(input)),
            present => Ok(present),
        }
    }
}

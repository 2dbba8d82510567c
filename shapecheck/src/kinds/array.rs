use super::aggregate;
use crate::config::ValidationConfig;
use crate::error::{ErrorCode, Params, ValidationError};
use crate::schema::{Input, Schema, present};
use tracing::trace;

/// Accepts arrays whose items all match the item schema.
///
/// Item failures are collected into one `invalid_array_items` error whose
/// issues carry the failing indices.
///
/// # Example
/// ```rust
/// use shapecheck::prelude::*;
/// use serde_json::json;
///
/// let tags = array(string());
/// assert_eq!(tags.parse(&json!(["a", "b"])).unwrap(), vec!["a", "b"]);
///
/// let err = tags.parse(&json!(["a", 1, 2])).unwrap_err();
/// assert_eq!(err.code, ErrorCode::InvalidArrayItems);
/// assert_eq!(err.issues[0].path_string(), "[1]");
/// ```
#[derive(Debug, Clone)]
pub struct ArraySchema<S> {
    item: S,
}

impl<S: Schema> ArraySchema<S> {
    /// An array schema whose items must match `item`.
    pub fn new(item: S) -> Self {
        Self { item }
    }

    /// The item schema.
    pub fn item(&self) -> &S {
        &self.item
    }
}

impl<S: Schema> Schema for ArraySchema<S> {
    type Output = Vec<S::Output>;
    type Present = Vec<S::Output>;

    fn check(
        &self,
        input: Input<'_>,
        config: &ValidationConfig,
    ) -> Result<Self::Output, ValidationError> {
        let value = present(input)?;
        let items = value
            .as_array()
            .ok_or_else(|| ValidationError::invalid_type("array", value))?;

        let mut output = Vec::with_capacity(items.len());
        let mut issues = Vec::new();
        for (index, item) in items.iter().enumerate() {
            match self.item.check(Input::Present(item), config) {
                Ok(mapped) => output.push(mapped),
                Err(error) => {
                    trace!(index, code = %error.code, "Array item failed validation");
                    issues.push(error.at(index));
                    if config.abort_early {
                        break;
                    }
                }
            }
        }

        if issues.is_empty() {
            Ok(output)
        } else {
            Err(aggregate(
                ErrorCode::InvalidArrayItems,
                issues,
                config,
                Params::new(),
            ))
        }
    }

    fn into_present(output: Self::Output) -> Option<Self::Present> {
        Some(output)
    }
}

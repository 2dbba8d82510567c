use super::aggregate;
use crate::config::ValidationConfig;
use crate::error::{ErrorCode, Params, ValidationError};
use crate::schema::{AnySchema, Input, IntoAnySchema, Schema};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Accepts a value matching any of its alternatives.
///
/// Alternatives are tried in order and the first success wins. When every
/// alternative fails, the error lists each alternative's failure.
///
/// # Example
/// ```rust
/// use shapecheck::prelude::*;
/// use serde_json::json;
///
/// let id = union([string().boxed(), integer().boxed()]);
/// assert_eq!(id.parse(&json!(7)).unwrap(), json!(7));
/// assert_eq!(id.parse(&json!("a-7")).unwrap(), json!("a-7"));
///
/// let err = id.parse(&json!(true)).unwrap_err();
/// assert_eq!(err.code, ErrorCode::InvalidUnion);
/// assert_eq!(err.issues.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct UnionSchema {
    alternatives: Vec<Arc<dyn AnySchema>>,
}

impl UnionSchema {
    /// A union of `alternatives`.
    pub fn new<I>(alternatives: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoAnySchema,
    {
        Self {
            alternatives: alternatives
                .into_iter()
                .map(IntoAnySchema::into_any)
                .collect(),
        }
    }

    /// Add another alternative, tried after the existing ones.
    pub fn or(mut self, alternative: impl IntoAnySchema) -> Self {
        self.alternatives.push(alternative.into_any());
        self
    }

    /// Number of alternatives.
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns true if the union has no alternatives and so rejects everything.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}

impl fmt::Debug for UnionSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnionSchema")
            .field("alternatives", &self.alternatives.len())
            .finish()
    }
}

impl Schema for UnionSchema {
    type Output = Value;
    type Present = Value;

    fn check(&self, input: Input<'_>, config: &ValidationConfig) -> Result<Value, ValidationError> {
        if input.is_absent() {
            return Err(ValidationError::required(input.received()));
        }

        let mut issues = Vec::with_capacity(self.alternatives.len());
        for (index, alternative) in self.alternatives.iter().enumerate() {
            match alternative.check_any(input, config) {
                Ok(mapped) => {
                    trace!(alternative = index, "Union alternative matched");
                    return Ok(mapped.unwrap_or(Value::Null));
                }
                Err(error) => issues.push(error),
            }
        }

        let mut params = Params::new();
        params.insert("received".into(), input.received().into());
        Err(aggregate(ErrorCode::InvalidUnion, issues, config, params))
    }

    fn into_present(output: Value) -> Option<Value> {
        (!output.is_null()).then_some(output)
    }
}

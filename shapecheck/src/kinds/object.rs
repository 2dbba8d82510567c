use super::aggregate;
use crate::config::{UnknownKeys, ValidationConfig};
use crate::error::{ErrorCode, Params, ValidationError};
use crate::schema::{AnySchema, Input, IntoAnySchema, Schema, present};
use crate::util::as_plain_object;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Accepts JSON objects with a known set of fields.
///
/// Fields are validated in declaration order. A field whose schema maps it
/// to absence (an absent optional field) is left out of the output. Keys
/// outside the shape are handled by the schema's own policy when set with
/// [`strict`](ObjectSchema::strict), [`strip`](ObjectSchema::strip) or
/// [`passthrough`](ObjectSchema::passthrough), and by
/// [`ValidationConfig::unknown_keys`] otherwise.
///
/// # Example
/// ```rust
/// use shapecheck::prelude::*;
/// use serde_json::json;
///
/// let user = object()
///     .field("name", string())
///     .field("age", integer().optional())
///     .strict();
///
/// let parsed = user.parse(&json!({"name": "Ada"})).unwrap();
/// assert_eq!(parsed["name"], "Ada");
/// assert!(!parsed.contains_key("age"));
///
/// let err = user.parse(&json!({"name": 1, "admin": true})).unwrap_err();
/// assert_eq!(err.code, ErrorCode::InvalidObjectShape);
/// assert_eq!(err.issues[0].path_string(), "name");
/// assert_eq!(err.params["unrecognized_keys"], json!(["admin"]));
/// ```
#[derive(Clone, Default)]
pub struct ObjectSchema {
    fields: Vec<(String, Arc<dyn AnySchema>)>,
    unknown_keys: Option<UnknownKeys>,
}

impl ObjectSchema {
    /// An object schema with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, replacing any earlier field with the same name.
    pub fn field(mut self, name: impl Into<String>, schema: impl IntoAnySchema) -> Self {
        let name = name.into();
        let schema = schema.into_any();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = schema,
            None => self.fields.push((name, schema)),
        }
        self
    }

    /// Reject unknown keys regardless of the configuration.
    pub fn strict(self) -> Self {
        self.with_unknown_keys(UnknownKeys::Strict)
    }

    /// Drop unknown keys regardless of the configuration.
    pub fn strip(self) -> Self {
        self.with_unknown_keys(UnknownKeys::Strip)
    }

    /// Keep unknown keys regardless of the configuration.
    pub fn passthrough(self) -> Self {
        self.with_unknown_keys(UnknownKeys::Passthrough)
    }

    fn with_unknown_keys(mut self, policy: UnknownKeys) -> Self {
        self.unknown_keys = Some(policy);
        self
    }

    /// Field names in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// The unknown-key policy set on this schema, if any.
    pub fn unknown_keys(&self) -> Option<UnknownKeys> {
        self.unknown_keys
    }

    fn is_known(&self, key: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == key)
    }
}

impl fmt::Debug for ObjectSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectSchema")
            .field("keys", &self.keys().collect::<Vec<_>>())
            .field("unknown_keys", &self.unknown_keys)
            .finish()
    }
}

impl Schema for ObjectSchema {
    type Output = Map<String, Value>;
    type Present = Map<String, Value>;

    fn check(
        &self,
        input: Input<'_>,
        config: &ValidationConfig,
    ) -> Result<Self::Output, ValidationError> {
        let value = present(input)?;
        let map = as_plain_object(value).ok_or_else(|| ValidationError::invalid_object(value))?;

        let mut output = Map::new();
        let mut issues = Vec::new();
        for (name, schema) in &self.fields {
            match schema.check_any(Input::from(map.get(name)), config) {
                Ok(Some(mapped)) => {
                    output.insert(name.clone(), mapped);
                }
                Ok(None) => {}
                Err(error) => {
                    trace!(field = %name, code = %error.code, "Object field failed validation");
                    issues.push(error.at(name.as_str()));
                    if config.abort_early {
                        break;
                    }
                }
            }
        }

        let mut unrecognized = Vec::new();
        match self.unknown_keys.unwrap_or(config.unknown_keys) {
            UnknownKeys::Strip => {}
            UnknownKeys::Passthrough => {
                for (key, extra) in map.iter().filter(|(key, _)| !self.is_known(key)) {
                    output.insert(key.clone(), extra.clone());
                }
            }
            UnknownKeys::Strict => {
                unrecognized.extend(
                    map.keys()
                        .filter(|key| !self.is_known(key))
                        .map(|key| Value::String(key.clone())),
                );
            }
        }

        if issues.is_empty() && unrecognized.is_empty() {
            return Ok(output);
        }

        let mut params = Params::new();
        if !unrecognized.is_empty() {
            trace!(count = unrecognized.len(), "Object has unrecognized keys");
            params.insert("unrecognized_keys".into(), Value::Array(unrecognized));
        }
        Err(aggregate(
            ErrorCode::InvalidObjectShape,
            issues,
            config,
            params,
        ))
    }

    fn into_present(output: Self::Output) -> Option<Self::Present> {
        Some(output)
    }
}

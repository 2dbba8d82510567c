//! Message resolution
//!
//! A [`Message`] is either literal text or a function of contextual
//! parameters. Literal text is returned unchanged: there is no templating
//! or escaping inside literal strings.
//!
//! # Example
//! ```rust
//! use shapecheck::{format_message, Message, Params};
//! use serde_json::json;
//!
//! let params: Params = json!({"value": "foo"}).as_object().cloned().unwrap();
//!
//! let literal: Message = Message::text("unknown error");
//! assert_eq!(format_message(&literal, &params), "unknown error");
//!
//! let computed: Message = Message::from_fn(|p: &Params| {
//!     format!("{} is invalid", p["value"].as_str().unwrap_or_default())
//! });
//! assert_eq!(format_message(&computed, &params), "foo is invalid");
//! ```

use crate::error::{ErrorCode, Params};
use crate::util::pluralize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Literal text or a function from parameters to text.
pub enum Message<P = Params> {
    /// Returned as-is
    Text(String),
    /// Invoked with the parameters
    Format(Arc<dyn Fn(&P) -> String + Send + Sync>),
}

impl<P> Message<P> {
    /// Create a literal message.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create a message computed from parameters.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&P) -> String + Send + Sync + 'static,
    {
        Self::Format(Arc::new(f))
    }

    /// Returns true if this message is literal text.
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Resolve the message against `params`.
    pub fn format(&self, params: &P) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Format(f) => f(params),
        }
    }
}

impl<P> Clone for Message<P> {
    fn clone(&self) -> Self {
        match self {
            Self::Text(text) => Self::Text(text.clone()),
            Self::Format(f) => Self::Format(Arc::clone(f)),
        }
    }
}

impl<P> fmt::Debug for Message<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Format(_) => f.write_str("Format(<fn>)"),
        }
    }
}

impl<P> From<&str> for Message<P> {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl<P> From<String> for Message<P> {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Resolve `message` against `params`.
pub fn format_message<P>(message: &Message<P>, params: &P) -> String {
    message.format(params)
}

/// The built-in English message for `code`, rendered from `params`.
pub fn default_message(code: ErrorCode, params: &Params) -> String {
    match code {
        ErrorCode::Required => "Required".to_string(),
        ErrorCode::InvalidType => format!(
            "Expected {}, received {}",
            param_text(params, "expected"),
            param_text(params, "received")
        ),
        ErrorCode::InvalidEnum => {
            let options = params
                .get("options")
                .and_then(Value::as_array)
                .map(|options| options.iter().map(Value::to_string).collect::<Vec<_>>())
                .unwrap_or_default();
            format!(
                "Expected one of {} ({}), received {}",
                pluralize(options.len() as i64, "value", "values"),
                options.join(" | "),
                params.get("received").map(Value::to_string).unwrap_or_default()
            )
        }
        ErrorCode::InvalidArrayItems => format!(
            "Array has {}",
            pluralize(param_count(params), "invalid item", "invalid items")
        ),
        ErrorCode::InvalidObject => {
            format!("Expected object, received {}", param_text(params, "received"))
        }
        ErrorCode::InvalidObjectShape => {
            let mut message = format!(
                "Object has {}",
                pluralize(param_count(params), "invalid field", "invalid fields")
            );
            let unrecognized: Vec<_> = params
                .get("unrecognized_keys")
                .and_then(Value::as_array)
                .map(|keys| keys.iter().filter_map(Value::as_str).collect())
                .unwrap_or_default();
            if !unrecognized.is_empty() {
                message.push_str(&format!(
                    "; unrecognized {}: {}",
                    if unrecognized.len() == 1 { "key" } else { "keys" },
                    unrecognized.join(", ")
                ));
            }
            message
        }
        ErrorCode::InvalidUnion => format!(
            "Value did not match any of {}",
            pluralize(param_count(params), "alternative", "alternatives")
        ),
        ErrorCode::StringPattern => format!(
            "String does not match pattern /{}/{}",
            param_text(params, "pattern"),
            param_text(params, "flags")
        ),
    }
}

/// String params render without quotes; anything else as JSON.
fn param_text(params: &Params, key: &str) -> String {
    match params.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => "unknown".to_string(),
    }
}

fn param_count(params: &Params) -> i64 {
    params.get("count").and_then(Value::as_i64).unwrap_or(0)
}

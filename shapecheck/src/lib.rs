#![warn(missing_docs)]
//! # shapecheck
//!
//! Runtime validation of JSON values against composable schemas.
//!
//! ## Overview
//!
//! A schema describes the shape it expects and the Rust value it produces.
//! Validation runs in one of two conventions:
//! - **`validate`** never fails outward and returns a [`ValidationResult`]
//! - **`parse`** returns `Result<T, ValidationError>` for `?` propagation
//!
//! Schemas are refined with the modifiers `optional`, `nullable`, `nullish`
//! and `required`, each of which changes the output type to record what it
//! accepts. Failures carry a code from the closed [`ErrorCode`] set, a
//! rendered message, the path of the failing value and the params the
//! message was rendered from.
//!
//! ## Quick Start
//!
//! ```rust
//! use shapecheck::prelude::*;
//! use serde_json::json;
//!
//! let signup = object()
//!     .field("username", string().pattern(Pattern::new("^[a-z0-9_]{3,}$").unwrap()))
//!     .field("age", integer().optional())
//!     .field("role", enumeration(["admin", "member"]))
//!     .field("tags", array(string()).nullish());
//!
//! let input = json!({"username": "ada", "role": "admin", "tags": null});
//! let parsed = signup.parse(&input).unwrap();
//! assert_eq!(parsed["username"], "ada");
//!
//! let result = signup.validate(&json!({"username": "A", "role": "root"}));
//! let error = result.error().unwrap();
//! assert_eq!(error.code, ErrorCode::InvalidObjectShape);
//!
//! let by_path = error.errors_by_path();
//! assert_eq!(by_path["username"][0].code, ErrorCode::StringPattern);
//! assert_eq!(by_path["role"][0].code, ErrorCode::InvalidEnum);
//! ```
//!
//! ## Modifiers
//!
//! The most recently applied modifier wins:
//!
//! ```rust
//! use shapecheck::prelude::*;
//! use serde_json::json;
//!
//! let loose = string().required().nullish();
//! assert_eq!(loose.parse(&json!(null)).unwrap(), Maybe::Null);
//!
//! let strict = string().nullish().required_with("Name is required");
//! let err = strict.parse(Input::Absent).unwrap_err();
//! assert_eq!(err.message, "Name is required");
//! ```
//!
//! ## Logging
//!
//! Validation passes emit `tracing` events: `trace` for each pass and for
//! composite children, `debug` for failures and `warn` for rejected
//! configuration or patterns. No subscriber is installed by this crate.

pub mod config;
pub mod error;
pub mod kinds;
pub mod message;
pub mod modifiers;
pub mod pattern;
pub mod result;
pub mod schema;
pub mod util;
pub mod validator;

#[cfg(test)]
mod tests;

// Public API
pub use config::{ConfigValidationError, UnknownKeys, ValidationConfig};
pub use error::{ErrorCode, Params, PathSegment, UnknownErrorCode, ValidationError, format_path};
pub use kinds::{
    ArraySchema, BooleanSchema, EnumSchema, IntegerSchema, NumberSchema, ObjectSchema,
    StringSchema, UnionSchema, array, boolean, enumeration, integer, number, object, string,
    union,
};
pub use message::{Message, default_message, format_message};
pub use modifiers::{NullableSchema, NullishSchema, OptionalSchema, RequiredParams, RequiredSchema};
pub use pattern::{Pattern, PatternError, Segment, merge_patterns};
pub use result::{ValidationResult, invalid, valid};
pub use schema::{AnySchema, Input, IntoAnySchema, Maybe, Schema};
pub use util::{is_plain_object, pluralize};
pub use validator::{SchemaValidator, Validator};

/// Prelude for convenient imports
///
/// ```rust
/// use shapecheck::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        ErrorCode,
        // Schemas
        Input,
        Maybe,
        // Messages
        Message,
        // Patterns
        Pattern,
        RequiredParams,
        Schema,
        SchemaValidator,
        // Configuration
        UnknownKeys,
        ValidationConfig,
        ValidationError,
        // Results
        ValidationResult,
        Validator,
        // Constructors
        array,
        boolean,
        enumeration,
        integer,
        invalid,
        number,
        object,
        string,
        union,
        valid,
    };
}

//! Concrete schema kinds.
//!
//! | Constructor | Output | Failure codes |
//! |-------------|--------|---------------|
//! | [`string()`] | `String` | `invalid_type`, `string_pattern` |
//! | [`number()`] | `f64` | `invalid_type` |
//! | [`integer()`] | `i64` | `invalid_type` |
//! | [`boolean()`] | `bool` | `invalid_type` |
//! | [`enumeration()`] | `Value` | `invalid_enum` |
//! | [`array()`] | `Vec<S::Output>` | `invalid_type`, `invalid_array_items` |
//! | [`object()`] | `Map<String, Value>` | `invalid_object`, `invalid_object_shape` |
//! | [`union()`] | `Value` | `invalid_union` |
//!
//! Every kind reports an absent value with `required`.

mod array;
mod enumeration;
mod object;
mod primitive;
mod union;

pub use array::ArraySchema;
pub use enumeration::EnumSchema;
pub use object::ObjectSchema;
pub use primitive::{BooleanSchema, IntegerSchema, NumberSchema, StringSchema};
pub use union::UnionSchema;

use crate::config::ValidationConfig;
use crate::error::{ErrorCode, Params, ValidationError};
use crate::schema::{IntoAnySchema, Schema};
use serde_json::Value;

/// A string schema.
pub fn string() -> StringSchema {
    StringSchema::new()
}

/// A finite number schema.
pub fn number() -> NumberSchema {
    NumberSchema::new()
}

/// An integer schema.
pub fn integer() -> IntegerSchema {
    IntegerSchema::new()
}

/// A boolean schema.
pub fn boolean() -> BooleanSchema {
    BooleanSchema::new()
}

/// A schema accepting exactly one of `values`.
pub fn enumeration<I, V>(values: I) -> EnumSchema
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    EnumSchema::new(values)
}

/// An array schema whose items must match `item`.
pub fn array<S: Schema>(item: S) -> ArraySchema<S> {
    ArraySchema::new(item)
}

/// An object schema with no fields yet; add them with [`ObjectSchema::field`].
pub fn object() -> ObjectSchema {
    ObjectSchema::new()
}

/// A union of `alternatives`; the first alternative that accepts the value wins.
pub fn union<I>(alternatives: I) -> UnionSchema
where
    I: IntoIterator,
    I::Item: IntoAnySchema,
{
    UnionSchema::new(alternatives)
}

/// Build a composite error from child `issues`, keeping at most
/// `config.max_issues` of them and never fewer than one.
pub(crate) fn aggregate(
    code: ErrorCode,
    mut issues: Vec<ValidationError>,
    config: &ValidationConfig,
    mut params: Params,
) -> ValidationError {
    let count = issues.len();
    let keep = config.max_issues.max(1);
    params.insert("count".into(), count.into());
    if count > keep {
        params.insert("truncated".into(), (count - keep).into());
        issues.truncate(keep);
    }
    ValidationError::new(code, params).with_issues(issues)
}

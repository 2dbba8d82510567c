//! Shared proptest strategies.

use proptest::prelude::*;
use serde_json::{Map, Value};

/// Any JSON scalar, null included. Numbers are integers so they survive
/// a trip through `f64` unchanged.
pub fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1_000_000i64..1_000_000).prop_map(Value::from),
        "[a-zA-Z0-9 _-]{0,12}".prop_map(Value::String),
    ]
}

/// Any JSON value, nested up to a few levels.
pub fn arb_json() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

/// Any JSON value except null.
pub fn arb_non_null() -> impl Strategy<Value = Value> {
    arb_json().prop_filter("value must not be null", |v| !v.is_null())
}

//! Helper tests - Property-based tests for pluralize and plain-object checks

use proptest::prelude::*;
use serde_json::{Value, json};

use super::strategies::arb_json;
use crate::util::{as_plain_object, is_plain_object, pluralize, type_name};

// =============================================================================
// Property-Based Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// **Property 11: Pluralize Picks The Form By Count**
    /// *For any* count, pluralize SHALL render the singular form exactly when
    /// the count is 1, prefixed by the count.
    #[test]
    fn prop_pluralize_form(
        count in any::<i64>(),
        singular in "[a-z]{1,10}",
        plural in "[a-z]{1,10}",
    ) {
        let rendered = pluralize(count, &singular, &plural);
        let word = if count == 1 { &singular } else { &plural };
        prop_assert_eq!(rendered, format!("{} {}", count, word));
    }

    /// **Property 12: Plain Objects Are JSON Objects**
    /// *For any* JSON value, `is_plain_object` SHALL be true exactly for
    /// objects, and `as_plain_object` SHALL borrow the same map.
    #[test]
    fn prop_plain_object_tag(value in arb_json()) {
        prop_assert_eq!(is_plain_object(&value), value.is_object());
        prop_assert_eq!(as_plain_object(&value), value.as_object());
        prop_assert_eq!(is_plain_object(&value), type_name(&value) == "object");
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[test]
fn test_pluralize_edge_counts() {
    assert_eq!(pluralize(1, "key", "keys"), "1 key");
    assert_eq!(pluralize(0, "key", "keys"), "0 keys");
    assert_eq!(pluralize(-1, "key", "keys"), "-1 keys");
}

#[test]
fn test_plain_object_rejects_non_objects() {
    for value in [Value::Null, json!([]), json!(""), json!(0), json!(false)] {
        assert!(!is_plain_object(&value), "{} is not a plain object", value);
    }
    assert!(is_plain_object(&json!({})));
    assert!(is_plain_object(&json!({"nested": {"a": 1}})));
}

//! Message tests - Property-based tests for message resolution

use proptest::prelude::*;
use serde_json::{Value, json};

use super::strategies::arb_json;
use crate::error::{ErrorCode, Params, ValidationError};
use crate::message::{Message, default_message, format_message};

fn params_from(value: Value) -> Params {
    match value {
        Value::Object(map) => map,
        other => {
            let mut params = Params::new();
            params.insert("value".into(), other);
            params
        }
    }
}

// =============================================================================
// Property-Based Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// **Property 9: Literal Messages Are Idempotent**
    /// *For any* literal message and any params, formatting SHALL return the
    /// literal unchanged, including text that looks like a template.
    #[test]
    fn prop_literal_message_unchanged(
        text in ".{0,40}",
        placeholder in "[a-z]{1,8}",
        params in arb_json(),
    ) {
        let params = params_from(params);
        let literal: Message = Message::text(text.clone());
        prop_assert_eq!(format_message(&literal, &params), text);

        let templated = format!("{{{}}} and ${{{}}}", placeholder, placeholder);
        let literal: Message = Message::from(templated.as_str());
        prop_assert_eq!(format_message(&literal, &params), templated);
    }

    /// **Property 10: Function Messages Are Invoked**
    /// *For any* params, a function message SHALL produce exactly what the
    /// function returns for those params.
    #[test]
    fn prop_function_message_invoked(value in arb_json()) {
        let params = params_from(json!({"value": value}));
        let message: Message = Message::from_fn(|p: &Params| format!("got {}", p["value"]));
        prop_assert_eq!(format_message(&message, &params), format!("got {}", params["value"]));
        prop_assert!(!message.is_literal());
    }

    /// Property: Default messages are never empty
    #[test]
    fn prop_default_messages_non_empty(params in arb_json(), code_idx in 0usize..8) {
        let code = ErrorCode::ALL[code_idx];
        let message = default_message(code, &params_from(params));
        prop_assert!(!message.is_empty());
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[test]
fn test_errors_render_default_messages() {
    assert_eq!(
        ValidationError::invalid_type("boolean", &json!([1])).message,
        "Expected boolean, received array"
    );
    assert_eq!(
        ValidationError::invalid_enum(&[json!("a")], &json!("b")).message,
        "Expected one of 1 value (\"a\"), received \"b\""
    );
    assert_eq!(
        ValidationError::string_pattern("^a$", "i").message,
        "String does not match pattern /^a$/i"
    );
}

#[test]
fn test_message_with_custom_params_type() {
    struct Limits {
        max: usize,
    }

    let message = Message::from_fn(|limits: &Limits| format!("at most {}", limits.max));
    assert_eq!(format_message(&message, &Limits { max: 3 }), "at most 3");
}

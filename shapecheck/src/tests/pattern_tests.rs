//! Pattern tests - Property-based tests for pattern merging

use proptest::prelude::*;

use crate::pattern::{Pattern, PatternError, SUPPORTED_FLAGS, Segment, merge_patterns};

fn first_appearance(flags: &[&str]) -> String {
    let mut merged = String::new();
    for flag in flags.iter().flat_map(|f| f.chars()) {
        if !merged.contains(flag) {
            merged.push(flag);
        }
    }
    merged
}

// =============================================================================
// Property-Based Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// **Property 13: Merge Concatenates Sources**
    /// *For any* literal fragments and patterns, the merged source SHALL be
    /// their concatenation in order, and the merged flags SHALL be the
    /// distinct operand flags in order of first appearance.
    #[test]
    fn prop_merge_concatenates(
        prefix in "[a-z0-9]{0,6}",
        middle in "[a-z0-9]{0,6}",
        left_flags in "[imsxUugy]{0,4}",
        right_flags in "[imsxUugy]{0,4}",
    ) {
        let left = Pattern::with_flags("[a-z]+", &left_flags).unwrap();
        let right = Pattern::with_flags("[0-9]*", &right_flags).unwrap();

        let merged = merge_patterns(&[
            Segment::from(prefix.as_str()),
            Segment::from(&left),
            Segment::from(middle.as_str()),
            Segment::from(&right),
        ])
        .unwrap();

        prop_assert_eq!(merged.source(), format!("{}[a-z]+{}[0-9]*", prefix, middle));
        prop_assert_eq!(merged.flags(), first_appearance(&[left.flags(), right.flags()]));
        prop_assert!(merged.flags().chars().all(|c| SUPPORTED_FLAGS.contains(c)));
    }

    /// Property: Literal-only merges carry no flags
    #[test]
    fn prop_literal_only_merge(parts in prop::collection::vec("[a-z]{0,5}", 0..5)) {
        let segments: Vec<Segment<'_>> = parts.iter().map(|p| Segment::from(p.as_str())).collect();
        let merged = merge_patterns(&segments).unwrap();
        prop_assert_eq!(merged.source(), parts.concat());
        prop_assert_eq!(merged.flags(), "");
        prop_assert!(merged.is_match(&parts.concat()));
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[test]
fn test_merge_reports_compile_errors() {
    let open = Pattern::new("(a").err();
    assert!(matches!(open, Some(PatternError::Compile(_))));

    let merged = merge_patterns(&[Segment::from("(a")]);
    assert!(matches!(merged, Err(PatternError::Compile(_))));
}

#[test]
fn test_unsupported_flag_rejected() {
    let result = Pattern::with_flags("a", "iq");
    assert!(matches!(result, Err(PatternError::UnsupportedFlag('q'))));
}

#[test]
fn test_merged_flags_apply() {
    let word = Pattern::with_flags("hello", "i").unwrap();
    let merged = merge_patterns(&[Segment::from("^"), Segment::from(&word), Segment::from("$")])
        .unwrap();
    assert!(merged.is_match("HELLO"));
    assert_eq!(merged.to_string(), "/^hello$/i");
}

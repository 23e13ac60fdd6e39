//! Property-based checks of the assertion primitives' range policies.

use georef_api::value::Value;
use georef_conformance::assert;
use proptest::prelude::*;

proptest! {
    #[test]
    fn ordered_finite_bounds_form_a_valid_range(
        a in -1.0e12..1.0e12f64,
        b in -1.0e12..1.0e12f64,
    ) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(assert::valid_range_f64("r", min, max).is_ok());
        if min < max {
            prop_assert!(assert::valid_range_f64("r", max, min).is_err());
        }
    }

    #[test]
    fn nan_bound_never_forms_a_valid_range(x in proptest::num::f64::ANY) {
        prop_assert!(assert::valid_range_f64("r", f64::NAN, x).is_err());
        prop_assert!(assert::valid_range_f64("r", x, f64::NAN).is_err());
    }

    #[test]
    fn between_agrees_with_the_comparison_operators(
        min in -1.0e6..1.0e6f64,
        span in 0.0..1.0e6f64,
        value in -3.0e6..3.0e6f64,
    ) {
        let max = min + span;
        let inside = value >= min && value <= max;
        prop_assert_eq!(assert::between_f64("b", min, max, value).is_ok(), inside);
    }

    #[test]
    fn nan_value_always_passes_membership(
        min in -1.0e6..1.0e6f64,
        span in 0.0..1.0e6f64,
    ) {
        prop_assert!(assert::between_f64("b", min, min + span, f64::NAN).is_ok());
        let bounds = (Value::Real(min), Value::Real(min + span));
        prop_assert!(assert::between(
            "b",
            Some(&bounds.0),
            Some(&bounds.1),
            &Value::Real(f64::NAN),
        ).is_ok());
    }

    #[test]
    fn occurrence_membership_is_exact(
        min in 0usize..10,
        span in 0usize..10,
        value in 0usize..40,
    ) {
        let max = min + span;
        let inside = value >= min && value <= max;
        prop_assert_eq!(assert::between_occurs("o", min, max, value).is_ok(), inside);
        prop_assert!(assert::valid_range_occurs("o", min, max).is_ok());
    }

    #[test]
    fn membership_in_a_set_matches_contains(
        members in proptest::collection::vec(-100i64..100, 0..8),
        candidate in -100i64..100,
    ) {
        let set: Vec<Value> = members.iter().copied().map(Value::Integer).collect();
        let value = Value::Integer(candidate);
        let is_member = members.contains(&candidate);
        prop_assert_eq!(
            assert::contains("c", Some(&set), &value).is_ok(),
            is_member
        );
        prop_assert!(assert::contains("c", None, &value).is_ok());
    }
}

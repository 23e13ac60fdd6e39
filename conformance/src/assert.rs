//! Assertion primitives.
//!
//! Atomic checks shared by all domain validators. Each primitive either
//! returns `Ok(())` or raises a [`ValidationError`] whose message
//! begins with the caller-supplied context; none of them return a
//! boolean. Validation code is written as a sequence of these calls
//! propagated with `?`.
//!
//! Floating-point policy: a NaN range *bound* always fails the
//! range-validity check (it can never be compared), while a NaN
//! *value* passes range-membership and set-membership silently — NaN
//! is treated as "unknown", not "violating".

use std::cmp::Ordering;
use std::fmt::Display;

use georef_api::value::{Value, ValueKind};

use crate::error::ValidationError;

/// Fails when the mandatory attribute is absent.
///
/// Callers honoring the `require_mandatory_attributes` strictness flag
/// gate this through the base validator rather than calling it
/// directly.
///
/// # Errors
///
/// [`ValidationError::MissingAttribute`] when `value` is `None`.
pub fn mandatory<T: ?Sized>(context: &str, value: Option<&T>) -> Result<(), ValidationError> {
    if value.is_none() {
        return Err(ValidationError::MissingAttribute {
            context: context.to_owned(),
        });
    }
    Ok(())
}

/// Fails when the mandatory collection is empty.
///
/// # Errors
///
/// [`ValidationError::MissingAttribute`] when `values` is empty.
pub fn mandatory_collection<T>(context: &str, values: &[T]) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::MissingAttribute {
            context: context.to_owned(),
        });
    }
    Ok(())
}

/// Fails when a forbidden attribute is present.
///
/// # Errors
///
/// [`ValidationError::Forbidden`] when `value` is `Some`.
pub fn forbidden<T: ?Sized>(context: &str, value: Option<&T>) -> Result<(), ValidationError> {
    if value.is_some() {
        return Err(ValidationError::Forbidden {
            context: context.to_owned(),
        });
    }
    Ok(())
}

/// Fails when a forbidden collection is non-empty.
///
/// # Errors
///
/// [`ValidationError::Forbidden`] when `values` has elements.
pub fn forbidden_collection<T>(context: &str, values: &[T]) -> Result<(), ValidationError> {
    if !values.is_empty() {
        return Err(ValidationError::Forbidden {
            context: context.to_owned(),
        });
    }
    Ok(())
}

/// Checks that two optional comparable bounds form a valid range.
///
/// Either bound absent means unbounded and always passes. Present
/// bounds must satisfy `minimum <= maximum`; an incomparable pair
/// (such as real values involving NaN) fails.
///
/// # Errors
///
/// [`ValidationError::InvalidRange`] when `minimum > maximum` or the
/// bounds are incomparable.
pub fn valid_range<T: PartialOrd + Display>(
    context: &str,
    minimum: Option<&T>,
    maximum: Option<&T>,
) -> Result<(), ValidationError> {
    if let (Some(min), Some(max)) = (minimum, maximum) {
        if !matches!(min.partial_cmp(max), Some(Ordering::Less | Ordering::Equal)) {
            return Err(ValidationError::InvalidRange {
                context: context.to_owned(),
                minimum: min.to_string(),
                maximum: max.to_string(),
            });
        }
    }
    Ok(())
}

/// Checks that two floating-point bounds form a valid range.
///
/// A NaN bound always fails: the range it delimits can never be
/// compared against. This is a deliberate policy, not leniency.
///
/// # Errors
///
/// [`ValidationError::InvalidRange`] when either bound is NaN or
/// `minimum > maximum`.
pub fn valid_range_f64(context: &str, minimum: f64, maximum: f64) -> Result<(), ValidationError> {
    if minimum.is_nan() || maximum.is_nan() || minimum > maximum {
        return Err(ValidationError::InvalidRange {
            context: context.to_owned(),
            minimum: minimum.to_string(),
            maximum: maximum.to_string(),
        });
    }
    Ok(())
}

/// Checks that two occurrence counts form a valid range.
///
/// # Errors
///
/// [`ValidationError::InvalidRange`] when `minimum > maximum`.
pub fn valid_range_occurs(
    context: &str,
    minimum: usize,
    maximum: usize,
) -> Result<(), ValidationError> {
    if minimum > maximum {
        return Err(ValidationError::InvalidRange {
            context: context.to_owned(),
            minimum: minimum.to_string(),
            maximum: maximum.to_string(),
        });
    }
    Ok(())
}

/// Checks that a comparable value lies inside [minimum … maximum].
///
/// Absent bounds are unbounded. The check fails only on a *definite*
/// ordering violation: a value incomparable to a bound (a NaN real)
/// passes silently. This method does not test the validity of the
/// range itself.
///
/// # Errors
///
/// [`ValidationError::OutOfRange`] when the value is definitely below
/// the minimum or above the maximum.
pub fn between<T: PartialOrd + Display>(
    context: &str,
    minimum: Option<&T>,
    maximum: Option<&T>,
    value: &T,
) -> Result<(), ValidationError> {
    let below = minimum
        .is_some_and(|min| matches!(value.partial_cmp(min), Some(Ordering::Less)));
    let above = maximum
        .is_some_and(|max| matches!(value.partial_cmp(max), Some(Ordering::Greater)));
    if below || above {
        return Err(ValidationError::OutOfRange {
            context: context.to_owned(),
            value: value.to_string(),
            minimum: minimum.map_or_else(|| "unbounded".to_owned(), ToString::to_string),
            maximum: maximum.map_or_else(|| "unbounded".to_owned(), ToString::to_string),
        });
    }
    Ok(())
}

/// Checks that a floating-point value lies inside [minimum … maximum].
///
/// A NaN value passes silently regardless of the bounds.
///
/// # Errors
///
/// [`ValidationError::OutOfRange`] when `value < minimum` or
/// `value > maximum`.
pub fn between_f64(
    context: &str,
    minimum: f64,
    maximum: f64,
    value: f64,
) -> Result<(), ValidationError> {
    if value < minimum || value > maximum {
        return Err(ValidationError::OutOfRange {
            context: context.to_owned(),
            value: value.to_string(),
            minimum: minimum.to_string(),
            maximum: maximum.to_string(),
        });
    }
    Ok(())
}

/// Checks that an occurrence count lies inside [minimum … maximum].
///
/// # Errors
///
/// [`ValidationError::OutOfRange`] when the count is outside the range.
pub fn between_occurs(
    context: &str,
    minimum: usize,
    maximum: usize,
    value: usize,
) -> Result<(), ValidationError> {
    if value < minimum || value > maximum {
        return Err(ValidationError::OutOfRange {
            context: context.to_owned(),
            value: value.to_string(),
            minimum: minimum.to_string(),
            maximum: maximum.to_string(),
        });
    }
    Ok(())
}

/// Checks that a value is a member of an optional valid-value set.
///
/// A `None` set means unrestricted and passes silently, and so does a
/// NaN value: like the range-membership checks, membership treats NaN
/// as "unknown", not "violating". Members are compared under
/// [`Value::same_as`] semantics.
///
/// # Errors
///
/// [`ValidationError::NotAMember`] when a set is declared and the
/// value is not among its members.
pub fn contains(
    context: &str,
    collection: Option<&[Value]>,
    value: &Value,
) -> Result<(), ValidationError> {
    if value.is_nan() {
        return Ok(());
    }
    if let Some(members) = collection {
        if !members.iter().any(|m| m.same_as(value)) {
            return Err(ValidationError::NotAMember {
                context: context.to_owned(),
                value: value.to_string(),
            });
        }
    }
    Ok(())
}

/// Checks that a value is an instance of the expected kind.
///
/// A `None` expected kind is unconstrained and passes silently. A
/// missing value fails when a kind was expected.
///
/// # Errors
///
/// [`ValidationError::KindMismatch`] when the value is absent or of a
/// different kind than expected.
pub fn kind_of(
    context: &str,
    expected: Option<ValueKind>,
    value: Option<&Value>,
) -> Result<(), ValidationError> {
    let Some(expected) = expected else {
        return Ok(());
    };
    match value {
        None => Err(ValidationError::KindMismatch {
            context: context.to_owned(),
            expected: expected.as_str(),
            actual: "none",
        }),
        Some(v) if v.kind() != expected => Err(ValidationError::KindMismatch {
            context: context.to_owned(),
            expected: expected.as_str(),
            actual: v.kind().as_str(),
        }),
        Some(_) => Ok(()),
    }
}

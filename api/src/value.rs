//! Typed parameter values.
//!
//! The underlying standard describes parameter values through a
//! reflective value-class; this crate renders that idiom as an explicit
//! type tag ([`ValueKind`]) paired with a tagged payload ([`Value`]).
//! "Is this value an instance of the declared class" becomes a kind
//! comparison, and range membership becomes kind-aware partial ordering.

use std::cmp::Ordering;

/// The declared type of a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    /// A true/false flag.
    Boolean,
    /// A signed integer.
    Integer,
    /// An IEEE 754 double-precision number.
    Real,
    /// A character string.
    Text,
}

impl ValueKind {
    /// Returns the lower-case label used in assertion messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Real => "real",
            ValueKind::Text => "text",
        }
    }
}

/// A concrete parameter value with its type tag.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// A true/false flag.
    Boolean(bool),
    /// A signed integer.
    Integer(i64),
    /// An IEEE 754 double-precision number.
    Real(f64),
    /// A character string.
    Text(String),
}

impl Value {
    /// The kind of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Integer(_) => ValueKind::Integer,
            Value::Real(_) => ValueKind::Real,
            Value::Text(_) => ValueKind::Text,
        }
    }

    /// The numeric payload, when this value is a real number.
    #[must_use]
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Real(v) => Some(*v),
            _ => None,
        }
    }

    /// True when this value is a real NaN.
    ///
    /// NaN is treated as "unknown" throughout validation: it never
    /// violates a range-membership check, while a NaN range *bound*
    /// always invalidates the range itself.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Real(v) if v.is_nan())
    }

    /// Equality with registry semantics: a real NaN compares equal to
    /// a real NaN, unlike `==`. The structural-equality helpers use
    /// this so that two descriptors declaring the same NaN default are
    /// not reported as disagreeing.
    #[must_use]
    pub fn same_as(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Real(a), Value::Real(b)) => a == b || (a.is_nan() && b.is_nan()),
            _ => self == other,
        }
    }
}

impl PartialOrd for Value {
    /// Orders two values of the same kind; values of different kinds
    /// are incomparable. `Real` follows IEEE semantics, so comparison
    /// with NaN yields `None`.
    fn partial_cmp(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Boolean(a), Value::Boolean(b)) => a.partial_cmp(b),
            (Value::Integer(a), Value::Integer(b)) => a.partial_cmp(b),
            (Value::Real(a), Value::Real(b)) => a.partial_cmp(b),
            (Value::Text(a), Value::Text(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Integer(v) => write!(f, "{v}"),
            Value::Real(v) => write!(f, "{v}"),
            Value::Text(v) => write!(f, "{v}"),
        }
    }
}

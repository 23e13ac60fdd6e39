//! The assertion-failure type raised by every validator.

use thiserror::Error;

/// A structural conformance violation.
///
/// Every variant's message begins with the context supplied by the
/// failing assertion, naming the interface and method contract that
/// was violated (e.g. `"ParameterDescriptor: default_value() out of
/// range."`). Validation code never catches these; they propagate to
/// whatever test harness invoked the entry point.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A mandatory attribute or collection was absent or empty.
    #[error("{context}")]
    MissingAttribute {
        /// The violated contract.
        context: String,
    },

    /// An attribute that shall not be provided was present.
    #[error("{context}")]
    Forbidden {
        /// The violated contract.
        context: String,
    },

    /// A value's kind does not match the declared kind.
    #[error("{context} expected a {expected} value but got {actual}")]
    KindMismatch {
        /// The violated contract.
        context: String,
        /// The declared kind.
        expected: &'static str,
        /// The kind actually found.
        actual: &'static str,
    },

    /// A [minimum … maximum] pair does not form a valid range.
    #[error("{context} invalid range [{minimum} … {maximum}]")]
    InvalidRange {
        /// The violated contract.
        context: String,
        /// The offending lower bound.
        minimum: String,
        /// The offending upper bound.
        maximum: String,
    },

    /// A value lies outside its declared range.
    #[error("{context} value {value} outside [{minimum} … {maximum}]")]
    OutOfRange {
        /// The violated contract.
        context: String,
        /// The offending value.
        value: String,
        /// The declared lower bound, or `-∞`/`unbounded`.
        minimum: String,
        /// The declared upper bound, or `∞`/`unbounded`.
        maximum: String,
    },

    /// A value is not a member of its declared valid-value set.
    #[error("{context} value {value} is not a member of the valid set")]
    NotAMember {
        /// The violated contract.
        context: String,
        /// The offending value.
        value: String,
    },

    /// Two access paths to the same information disagree, or an
    /// attribute contradicts another attribute of the same object.
    #[error("{context}")]
    Inconsistent {
        /// The violated contract.
        context: String,
    },

    /// A name or identifier is syntactically ill-formed.
    #[error("{context} {detail}")]
    MalformedName {
        /// The violated contract.
        context: String,
        /// What is wrong with the name.
        detail: String,
    },
}

impl ValidationError {
    /// The contract-naming message prefix this failure was raised with.
    #[must_use]
    pub fn context(&self) -> &str {
        match self {
            ValidationError::MissingAttribute { context }
            | ValidationError::Forbidden { context }
            | ValidationError::KindMismatch { context, .. }
            | ValidationError::InvalidRange { context, .. }
            | ValidationError::OutOfRange { context, .. }
            | ValidationError::NotAMember { context, .. }
            | ValidationError::Inconsistent { context }
            | ValidationError::MalformedName { context, .. } => context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_starts_with_context() {
        let e = ValidationError::OutOfRange {
            context: "ParameterDescriptor: default_value() out of range.".into(),
            value: "91".into(),
            minimum: "0".into(),
            maximum: "90".into(),
        };
        assert!(e
            .to_string()
            .starts_with("ParameterDescriptor: default_value() out of range."));
        assert!(e.to_string().contains("91"));
    }

    #[test]
    fn context_accessor_matches_all_variants() {
        let e = ValidationError::MissingAttribute {
            context: "x".into(),
        };
        assert_eq!(e.context(), "x");
    }
}

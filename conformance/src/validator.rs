//! Strictness configuration and the base validator state shared by
//! all domain validators.

use crate::assert;
use crate::error::ValidationError;

/// Strictness configuration for a validator container.
///
/// Built once and never mutated during a traversal: validators read
/// their configuration but hold no other per-call state. Disabling
/// `require_mandatory_attributes` relaxes presence checks only; kind
/// and range checks always run.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ValidatorConfig {
    /// Whether absence of a mandatory attribute or emptiness of a
    /// mandatory collection is a violation.
    pub require_mandatory_attributes: bool,
    /// Whether names and identifiers are checked against the
    /// standard's naming rules (well-formed code spaces, standard
    /// axis directions, the Greenwich meridian at longitude zero).
    pub enforce_standard_names: bool,
    /// Relative tolerance for floating-point consistency checks.
    pub tolerance: f64,
}

impl ValidatorConfig {
    /// The strict profile: every check enabled.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            require_mandatory_attributes: true,
            enforce_standard_names: true,
            tolerance: 1e-6,
        }
    }

    /// A relaxed profile for incomplete implementations: presence and
    /// naming checks are skipped, structural checks still run.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            require_mandatory_attributes: false,
            enforce_standard_names: false,
            tolerance: 1e-6,
        }
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self::strict()
    }
}

/// Configuration and domain label shared by every domain validator.
///
/// Holds no per-call state: all traversal context is passed as
/// arguments, so a validator can serve concurrent read-only calls.
#[derive(Debug, Clone)]
pub struct Validator {
    config: ValidatorConfig,
    domain: &'static str,
}

impl Validator {
    /// Creates the base state for a domain validator.
    #[must_use]
    pub fn new(config: ValidatorConfig, domain: &'static str) -> Self {
        Self { config, domain }
    }

    /// The configuration this validator was built with.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// The domain label this validator reports under.
    #[must_use]
    pub fn domain(&self) -> &'static str {
        self.domain
    }

    /// Checks a mandatory attribute, honoring the
    /// `require_mandatory_attributes` flag. A disabled check is a
    /// no-op, which is a deliberate policy distinction from "checked
    /// and passed".
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingAttribute`] when the flag is enabled
    /// and the value is absent.
    pub fn mandatory<T: ?Sized>(
        &self,
        context: &str,
        value: Option<&T>,
    ) -> Result<(), ValidationError> {
        if self.config.require_mandatory_attributes {
            assert::mandatory(context, value)?;
        }
        Ok(())
    }

    /// Checks a mandatory collection, honoring the
    /// `require_mandatory_attributes` flag.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingAttribute`] when the flag is enabled
    /// and the collection is empty.
    pub fn mandatory_collection<T>(
        &self,
        context: &str,
        values: &[T],
    ) -> Result<(), ValidationError> {
        if self.config.require_mandatory_attributes {
            assert::mandatory_collection(context, values)?;
        }
        Ok(())
    }
}

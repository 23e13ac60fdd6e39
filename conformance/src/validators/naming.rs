//! Validation of identifiers, generic names, and the generic
//! identified-object contract used as the dispatch fallback.

use std::sync::OnceLock;

use georef_api::naming::{GenericName, Identifier};
use georef_api::object::IdentifiedObject;
use regex::Regex;

use crate::container::ValidatorContainer;
use crate::error::ValidationError;
use crate::guard::Guard;
use crate::validator::{Validator, ValidatorConfig};

/// Code spaces are identifier-like tokens: a letter or underscore
/// followed by letters, digits and underscores.
fn codespace_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[\p{L}_][\p{L}\p{N}_]*$").ok())
        .as_ref()
}

/// The naming category of the validator registry.
///
/// Besides identifiers and generic names, this validator owns the
/// generic identified-object check every other validator falls back to
/// when dispatch recognizes no refinement.
pub trait ValidateNaming {
    /// Validates an identifier.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    fn validate_identifier(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn Identifier,
    ) -> Result<(), ValidationError>;

    /// Validates a generic name.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    fn validate_generic_name(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn GenericName,
    ) -> Result<(), ValidationError>;

    /// Validates the generic identified-object contract: name
    /// presence, identifier well-formedness, no empty aliases.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    fn validate_identified_object(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn IdentifiedObject,
    ) -> Result<(), ValidationError>;
}

/// Default implementation of the naming category.
#[derive(Debug, Clone)]
pub struct NamingValidator {
    base: Validator,
}

impl NamingValidator {
    /// Creates a naming validator with the given configuration.
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            base: Validator::new(config, "naming"),
        }
    }
}

impl ValidateNaming for NamingValidator {
    fn validate_identifier(
        &self,
        _container: &ValidatorContainer,
        _guard: &mut Guard,
        object: &dyn Identifier,
    ) -> Result<(), ValidationError> {
        let code = object.code();
        if code.trim().is_empty() {
            return Err(ValidationError::MalformedName {
                context: "Identifier: code() shall not be empty.".to_owned(),
                detail: "the code is empty or blank".to_owned(),
            });
        }
        if self.base.config().enforce_standard_names {
            if let (Some(space), Some(pattern)) = (object.code_space(), codespace_pattern()) {
                if !pattern.is_match(space) {
                    return Err(ValidationError::MalformedName {
                        context: "Identifier: code_space() shall be a well-formed identifier."
                            .to_owned(),
                        detail: format!("found {space:?}"),
                    });
                }
            }
        }
        Ok(())
    }

    fn validate_generic_name(
        &self,
        _container: &ValidatorContainer,
        _guard: &mut Guard,
        object: &dyn GenericName,
    ) -> Result<(), ValidationError> {
        let parts = object.parsed_names();
        self.base.mandatory_collection(
            "GenericName: parsed_names() shall not be empty.",
            &parts,
        )?;
        if parts.is_empty() {
            return Ok(());
        }
        if parts.iter().any(|p| p.trim().is_empty()) {
            return Err(ValidationError::MalformedName {
                context: "GenericName: parsed_names() shall not contain empty parts.".to_owned(),
                detail: format!("found {parts:?}"),
            });
        }
        if object.depth() != parts.len() {
            return Err(ValidationError::Inconsistent {
                context: "GenericName: depth() inconsistent with parsed_names().".to_owned(),
            });
        }
        if object.head().as_deref() != parts.first().map(String::as_str) {
            return Err(ValidationError::Inconsistent {
                context: "GenericName: head() inconsistent with parsed_names().".to_owned(),
            });
        }
        let tip = object.tip();
        if tip.as_deref() != parts.last().map(String::as_str) {
            return Err(ValidationError::Inconsistent {
                context: "GenericName: tip() inconsistent with parsed_names().".to_owned(),
            });
        }
        let path = object.to_full_path();
        if path.trim().is_empty() {
            return Err(ValidationError::MalformedName {
                context: "GenericName: to_full_path() shall not be empty.".to_owned(),
                detail: "the full path is empty or blank".to_owned(),
            });
        }
        if let Some(tip) = tip {
            if !path.ends_with(&tip) {
                return Err(ValidationError::Inconsistent {
                    context: "GenericName: to_full_path() shall end with tip().".to_owned(),
                });
            }
        }
        Ok(())
    }

    fn validate_identified_object(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn IdentifiedObject,
    ) -> Result<(), ValidationError> {
        let name = object.name();
        self.base
            .mandatory("IdentifiedObject: name() shall return a value.", name)?;
        if let Some(name) = name {
            self.validate_identifier(container, guard, name)?;
        }
        for identifier in object.identifiers() {
            self.validate_identifier(container, guard, identifier)?;
        }
        let aliases = object.aliases();
        if aliases.iter().any(|a| a.trim().is_empty()) {
            return Err(ValidationError::MalformedName {
                context: "IdentifiedObject: aliases() shall not contain empty names.".to_owned(),
                detail: format!("found {aliases:?}"),
            });
        }
        Ok(())
    }
}

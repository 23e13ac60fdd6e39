//! Conformance suite for implementations of the `georef-api` traits.
//!
//! This crate validates that an implementation of the geospatial
//! referencing data model honors the structural contracts the
//! interfaces document: mandatory attributes are present, value kinds
//! and ranges are coherent, and two access paths to the same logical
//! element agree with each other. A violation is reported as a
//! [`ValidationError`] whose message starts with the interface and
//! method at fault.
//!
//! Validators are grouped in a [`ValidatorContainer`], one per category
//! of the data model, all sharing one [`ValidatorConfig`]. The
//! container passed to every call is the only way validators reach
//! each other, so a harness can substitute a category and the whole
//! traversal sees the substitution. Cyclic object graphs are legal;
//! each top-level call tolerates them with a fresh [`guard::Guard`].
//!
//! # Entry Point
//!
//! The free functions at the crate root validate against a
//! process-wide default container:
//!
//! ```
//! use georef_conformance::{self as conformance, ValidationError};
//! use georef_api::Value;
//!
//! fn check(v: &Value) -> Result<(), ValidationError> {
//!     conformance::assert::kind_of(
//!         "Expected a real number.",
//!         Some(georef_api::ValueKind::Real),
//!         Some(v),
//!     )
//! }
//! assert!(check(&Value::Real(45.0)).is_ok());
//! assert!(check(&Value::Boolean(true)).is_err());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::sync::{Arc, OnceLock, RwLock};

use georef_api::crs::CoordinateReferenceSystem;
use georef_api::cs::CoordinateSystem;
use georef_api::datum::Datum;
use georef_api::naming::{GenericName, Identifier};
use georef_api::object::IdentifiedObject;
use georef_api::operation::CoordinateOperation;
use georef_api::parameter::{GeneralParameterDescriptor, GeneralParameterValue};

pub mod assert;
pub mod container;
pub mod error;
pub mod guard;
pub mod validator;
pub mod validators;

pub use container::ValidatorContainer;
pub use error::ValidationError;
pub use validator::{Validator, ValidatorConfig};

/// The process-wide default container behind the crate-root free
/// functions. Swappable so a test can tighten or relax the whole
/// suite at once.
fn default_slot() -> &'static RwLock<Arc<ValidatorContainer>> {
    static SLOT: OnceLock<RwLock<Arc<ValidatorContainer>>> = OnceLock::new();
    SLOT.get_or_init(|| RwLock::new(Arc::new(ValidatorContainer::default())))
}

/// The current process-wide default container.
#[must_use]
pub fn default_container() -> Arc<ValidatorContainer> {
    match default_slot().read() {
        Ok(slot) => Arc::clone(&slot),
        Err(poisoned) => Arc::clone(&poisoned.into_inner()),
    }
}

/// Replaces the process-wide default container, returning the previous
/// one. Validations already running keep the container they started
/// with.
pub fn set_default_container(container: Arc<ValidatorContainer>) -> Arc<ValidatorContainer> {
    let mut slot = match default_slot().write() {
        Ok(slot) => slot,
        Err(poisoned) => poisoned.into_inner(),
    };
    std::mem::replace(&mut *slot, container)
}

/// Restores the process-wide default container to a strict default.
pub fn reset_default_container() -> Arc<ValidatorContainer> {
    set_default_container(Arc::new(ValidatorContainer::default()))
}

/// Validates an identifier against the default container.
///
/// # Errors
///
/// Returns the first structural violation encountered.
pub fn validate_identifier(object: &dyn Identifier) -> Result<(), ValidationError> {
    default_container().validate_identifier(object)
}

/// Validates a generic name against the default container.
///
/// # Errors
///
/// Returns the first structural violation encountered.
pub fn validate_generic_name(object: &dyn GenericName) -> Result<(), ValidationError> {
    default_container().validate_generic_name(object)
}

/// Validates the generic identified-object contract against the
/// default container.
///
/// # Errors
///
/// Returns the first structural violation encountered.
pub fn validate_identified_object(object: &dyn IdentifiedObject) -> Result<(), ValidationError> {
    default_container().validate_identified_object(object)
}

/// Dispatches a parameter descriptor against the default container and
/// returns the number of specific validators invoked.
///
/// # Errors
///
/// Returns the first structural violation encountered.
pub fn validate_parameter_descriptor(
    object: &dyn GeneralParameterDescriptor,
) -> Result<usize, ValidationError> {
    default_container().dispatch_parameter_descriptor(object)
}

/// Dispatches a parameter value against the default container and
/// returns the number of specific validators invoked.
///
/// # Errors
///
/// Returns the first structural violation encountered.
pub fn validate_parameter_value(
    object: &dyn GeneralParameterValue,
) -> Result<usize, ValidationError> {
    default_container().dispatch_parameter_value(object)
}

/// Dispatches a coordinate system against the default container and
/// returns the number of specific validators invoked.
///
/// # Errors
///
/// Returns the first structural violation encountered.
pub fn validate_coordinate_system(
    object: &dyn CoordinateSystem,
) -> Result<usize, ValidationError> {
    default_container().dispatch_coordinate_system(object)
}

/// Dispatches a datum against the default container and returns the
/// number of specific validators invoked.
///
/// # Errors
///
/// Returns the first structural violation encountered.
pub fn validate_datum(object: &dyn Datum) -> Result<usize, ValidationError> {
    default_container().dispatch_datum(object)
}

/// Dispatches a coordinate reference system against the default
/// container and returns the number of specific validators invoked.
///
/// # Errors
///
/// Returns the first structural violation encountered.
pub fn validate_crs(object: &dyn CoordinateReferenceSystem) -> Result<usize, ValidationError> {
    default_container().dispatch_crs(object)
}

/// Dispatches a coordinate operation against the default container and
/// returns the number of specific validators invoked.
///
/// # Errors
///
/// Returns the first structural violation encountered.
pub fn validate_operation(object: &dyn CoordinateOperation) -> Result<usize, ValidationError> {
    default_container().dispatch_operation(object)
}

//! Validation of coordinate operations and their methods.

use georef_api::operation::{
    Conversion, CoordinateOperation, OperationForm, OperationMethod, Transformation,
};
use georef_api::parameter::descriptors_match;

use crate::assert;
use crate::container::ValidatorContainer;
use crate::error::ValidationError;
use crate::guard::{Guard, Realm};
use crate::validator::{Validator, ValidatorConfig};

/// The operation category of the validator registry.
pub trait ValidateOperations {
    /// Dispatches an operation to the checks for the refinement it
    /// declares, and returns the number of specific validators
    /// invoked. An opaque operation gets only the generic
    /// identified-object check.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    fn dispatch(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn CoordinateOperation,
    ) -> Result<usize, ValidationError>;

    /// Validates a conversion. The operation version shall not be
    /// provided.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    fn validate_conversion(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn Conversion,
    ) -> Result<(), ValidationError>;

    /// Validates a transformation. Source CRS, target CRS and the
    /// operation version are all mandatory.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    fn validate_transformation(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn Transformation,
    ) -> Result<(), ValidationError>;

    /// Validates an operation method.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    fn validate_method(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn OperationMethod,
    ) -> Result<(), ValidationError>;
}

/// Default implementation of the operation category.
#[derive(Debug, Clone)]
pub struct OperationValidator {
    base: Validator,
}

impl OperationValidator {
    /// Creates an operation validator with the given configuration.
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            base: Validator::new(config, "operation"),
        }
    }

    /// Checks shared by every operation refinement: the source and
    /// target reference systems, the method, and the coherence of the
    /// parameter values with the method's descriptors.
    fn validate_common(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn CoordinateOperation,
    ) -> Result<(), ValidationError> {
        container
            .naming
            .validate_identified_object(container, guard, object)?;
        if let Some(source) = object.source_crs() {
            container.crs.dispatch(container, guard, source)?;
        }
        if let Some(target) = object.target_crs() {
            container.crs.dispatch(container, guard, target)?;
        }
        let method = object.method();
        self.base.mandatory(
            "CoordinateOperation: method() shall return a value.",
            method,
        )?;
        if let Some(method) = method {
            self.validate_method(container, guard, method)?;
        }
        if let Some(values) = object.parameter_values() {
            container
                .parameter
                .validate_value_group(container, guard, values)?;
            // The values and the method must agree on the descriptors.
            if let (Some(declared), Some(expected)) =
                (values.descriptor(), method.and_then(|m| m.parameters()))
            {
                if !descriptors_match(declared, expected) {
                    return Err(ValidationError::Inconsistent {
                        context: "CoordinateOperation: parameter_values().descriptor() \
                                  inconsistent with method().parameters()."
                            .to_owned(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl ValidateOperations for OperationValidator {
    fn dispatch(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn CoordinateOperation,
    ) -> Result<usize, ValidationError> {
        match object.form() {
            Some(OperationForm::Conversion(operation)) => {
                self.validate_conversion(container, guard, operation)?;
                Ok(1)
            }
            Some(OperationForm::Transformation(operation)) => {
                self.validate_transformation(container, guard, operation)?;
                Ok(1)
            }
            None => {
                container
                    .naming
                    .validate_identified_object(container, guard, object)?;
                Ok(0)
            }
        }
    }

    fn validate_conversion(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn Conversion,
    ) -> Result<(), ValidationError> {
        if !guard.first_visit(Realm::Operation, object) {
            return Ok(());
        }
        self.validate_common(container, guard, object)?;
        assert::forbidden(
            "Conversion: operation_version() shall not be provided.",
            object.operation_version(),
        )?;
        Ok(())
    }

    fn validate_transformation(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn Transformation,
    ) -> Result<(), ValidationError> {
        if !guard.first_visit(Realm::Operation, object) {
            return Ok(());
        }
        self.validate_common(container, guard, object)?;
        self.base.mandatory(
            "Transformation: source_crs() shall return a value.",
            object.source_crs(),
        )?;
        self.base.mandatory(
            "Transformation: target_crs() shall return a value.",
            object.target_crs(),
        )?;
        self.base.mandatory(
            "Transformation: operation_version() shall return a value.",
            object.operation_version(),
        )?;
        Ok(())
    }

    fn validate_method(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn OperationMethod,
    ) -> Result<(), ValidationError> {
        if !guard.first_visit(Realm::Method, object) {
            return Ok(());
        }
        container
            .naming
            .validate_identified_object(container, guard, object)?;
        let parameters = object.parameters();
        self.base.mandatory(
            "OperationMethod: parameters() shall return a value.",
            parameters,
        )?;
        if let Some(parameters) = parameters {
            container
                .parameter
                .validate_descriptor_group(container, guard, parameters)?;
        }
        for (context, dimensions) in [
            (
                "OperationMethod: source_dimensions() shall be at least 1.",
                object.source_dimensions(),
            ),
            (
                "OperationMethod: target_dimensions() shall be at least 1.",
                object.target_dimensions(),
            ),
        ] {
            if dimensions == Some(0) {
                return Err(ValidationError::Inconsistent {
                    context: context.to_owned(),
                });
            }
        }
        Ok(())
    }
}

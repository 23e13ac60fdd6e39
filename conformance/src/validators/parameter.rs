//! Validation of parameter descriptors, parameter values, and their
//! group forms.

use georef_api::parameter::{
    descriptors_match, values_match, DescriptorForm, GeneralParameterDescriptor,
    GeneralParameterValue, ParamValueForm, ParameterDescriptor, ParameterDescriptorGroup,
    ParameterValue, ParameterValueGroup,
};

use crate::assert;
use crate::container::ValidatorContainer;
use crate::error::ValidationError;
use crate::guard::{Guard, Realm};
use crate::validator::{Validator, ValidatorConfig};

/// The parameter category of the validator registry.
pub trait ValidateParameters {
    /// Dispatches an abstract descriptor to the `validate` method for
    /// the refinement it declares, and returns the number of specific
    /// validators invoked. Zero is legal: an opaque descriptor gets
    /// only the generic identified-object check.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    fn dispatch_descriptor(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn GeneralParameterDescriptor,
    ) -> Result<usize, ValidationError>;

    /// Dispatches an abstract parameter value and returns the number
    /// of specific validators invoked. An opaque value falls back to
    /// dispatching its descriptor.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    fn dispatch_value(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn GeneralParameterValue,
    ) -> Result<usize, ValidationError>;

    /// Validates a single-valued parameter descriptor.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    fn validate_descriptor(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn ParameterDescriptor,
    ) -> Result<(), ValidationError>;

    /// Validates a parameter descriptor group.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    fn validate_descriptor_group(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn ParameterDescriptorGroup,
    ) -> Result<(), ValidationError>;

    /// Validates a single parameter value.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    fn validate_value(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn ParameterValue,
    ) -> Result<(), ValidationError>;

    /// Validates a parameter value group.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    fn validate_value_group(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn ParameterValueGroup,
    ) -> Result<(), ValidationError>;
}

/// Default implementation of the parameter category.
#[derive(Debug, Clone)]
pub struct ParameterValidator {
    base: Validator,
}

impl ParameterValidator {
    /// Creates a parameter validator with the given configuration.
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            base: Validator::new(config, "parameter"),
        }
    }
}

impl ValidateParameters for ParameterValidator {
    fn dispatch_descriptor(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn GeneralParameterDescriptor,
    ) -> Result<usize, ValidationError> {
        match object.form() {
            Some(DescriptorForm::Value(descriptor)) => {
                self.validate_descriptor(container, guard, descriptor)?;
                Ok(1)
            }
            Some(DescriptorForm::Group(group)) => {
                self.validate_descriptor_group(container, guard, group)?;
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

    fn dispatch_value(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn GeneralParameterValue,
    ) -> Result<usize, ValidationError> {
        match object.form() {
            Some(ParamValueForm::Value(value)) => {
                self.validate_value(container, guard, value)?;
                Ok(1)
            }
            Some(ParamValueForm::Group(group)) => {
                self.validate_value_group(container, guard, group)?;
                Ok(1)
            }
            None => {
                // An opaque value is at least required to describe itself.
                if let Some(descriptor) = object.general_descriptor() {
                    self.dispatch_descriptor(container, guard, descriptor)?;
                }
                Ok(0)
            }
        }
    }

    fn validate_descriptor(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn ParameterDescriptor,
    ) -> Result<(), ValidationError> {
        if !guard.first_visit(Realm::Descriptor, object) {
            return Ok(());
        }
        container
            .naming
            .validate_identified_object(container, guard, object)?;
        let kind = object.value_kind();
        self.base.mandatory(
            "ParameterDescriptor: value_kind() shall return a value.",
            kind.as_ref(),
        )?;
        if let Some(values) = object.valid_values() {
            for value in &values {
                assert::kind_of(
                    "ParameterDescriptor: valid_values() has an element of unexpected kind.",
                    kind,
                    Some(value),
                )?;
            }
        }
        let minimum = object.minimum_value();
        let maximum = object.maximum_value();
        if let Some(min) = &minimum {
            assert::kind_of(
                "ParameterDescriptor: minimum_value() has unexpected kind.",
                kind,
                Some(min),
            )?;
        }
        if let Some(max) = &maximum {
            assert::kind_of(
                "ParameterDescriptor: maximum_value() has unexpected kind.",
                kind,
                Some(max),
            )?;
        }
        assert::valid_range(
            "ParameterDescriptor: inconsistent minimum and maximum values.",
            minimum.as_ref(),
            maximum.as_ref(),
        )?;
        if let Some(default) = object.default_value() {
            assert::kind_of(
                "ParameterDescriptor: default_value() has unexpected kind.",
                kind,
                Some(&default),
            )?;
            assert::between(
                "ParameterDescriptor: default_value() out of range.",
                minimum.as_ref(),
                maximum.as_ref(),
                &default,
            )?;
        }
        assert::between_occurs(
            "ParameterDescriptor: minimum_occurs() shall return 0 or 1.",
            0,
            1,
            object.minimum_occurs(),
        )?;
        assert::between_occurs(
            "ParameterDescriptor: maximum_occurs() shall return exactly 1.",
            1,
            1,
            object.maximum_occurs(),
        )?;
        Ok(())
    }

    fn validate_descriptor_group(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn ParameterDescriptorGroup,
    ) -> Result<(), ValidationError> {
        if !guard.first_visit(Realm::Descriptor, object) {
            return Ok(());
        }
        container
            .naming
            .validate_identified_object(container, guard, object)?;
        // Empty groups are legal; mandatory_collection is deliberately
        // not applied here.
        for descriptor in object.descriptors() {
            self.dispatch_descriptor(container, guard, descriptor)?;
            let Some(code) = descriptor.name().map(|n| n.code().to_owned()) else {
                continue;
            };
            let by_name = object.descriptor(&code);
            self.base.mandatory(
                "ParameterDescriptorGroup: descriptor(name) shall return a value.",
                by_name,
            )?;
            if let Some(found) = by_name {
                if !descriptors_match(descriptor, found) {
                    return Err(ValidationError::Inconsistent {
                        context:
                            "ParameterDescriptorGroup: descriptor(name) inconsistent with \
                             descriptors()."
                                .to_owned(),
                    });
                }
            }
        }
        assert::valid_range_occurs(
            "ParameterDescriptorGroup: maximum_occurs() gives an inconsistent range.",
            object.minimum_occurs(),
            object.maximum_occurs(),
        )?;
        Ok(())
    }

    fn validate_value(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn ParameterValue,
    ) -> Result<(), ValidationError> {
        if !guard.first_visit(Realm::ParameterValue, object) {
            return Ok(());
        }
        let descriptor = object.descriptor();
        self.base
            .mandatory("ParameterValue: shall have a descriptor.", descriptor)?;
        if let Some(descriptor) = descriptor {
            self.validate_descriptor(container, guard, descriptor)?;
        }
        let Some(value) = object.value() else {
            return Ok(());
        };
        if let Some(descriptor) = descriptor {
            assert::kind_of(
                "ParameterValue: value() has unexpected kind.",
                descriptor.value_kind(),
                Some(&value),
            )?;
            if let Some(valid) = descriptor.valid_values() {
                assert::contains(
                    "ParameterValue: value() is not a member of valid_values().",
                    Some(&valid),
                    &value,
                )?;
            }
            assert::between(
                "ParameterValue: value() is out of bounds.",
                descriptor.minimum_value().as_ref(),
                descriptor.maximum_value().as_ref(),
                &value,
            )?;
        }
        Ok(())
    }

    fn validate_value_group(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn ParameterValueGroup,
    ) -> Result<(), ValidationError> {
        if !guard.first_visit(Realm::ParameterValue, object) {
            return Ok(());
        }
        let descriptor_group = object.descriptor();
        self.base.mandatory(
            "ParameterValueGroup: shall have a descriptor.",
            descriptor_group,
        )?;
        if let Some(group) = descriptor_group {
            self.validate_descriptor_group(container, guard, group)?;
        }
        for value in object.values() {
            self.dispatch_value(container, guard, value)?;
            let descriptor = value.general_descriptor();
            self.base
                .mandatory("GeneralParameterValue: expected a descriptor.", descriptor)?;
            let Some(descriptor) = descriptor else {
                continue;
            };
            let name = descriptor.name().map(|n| n.code().to_owned());
            self.base.mandatory(
                "GeneralParameterDescriptor: expected a name.",
                name.as_deref(),
            )?;
            let Some(code) = name else {
                continue;
            };
            if let Some(group) = descriptor_group {
                let by_name = group.descriptor(&code);
                self.base.mandatory(
                    "ParameterDescriptorGroup: descriptor(name) shall return a value.",
                    by_name,
                )?;
                if let Some(found) = by_name {
                    if !descriptors_match(descriptor, found) {
                        return Err(ValidationError::Inconsistent {
                            context:
                                "ParameterValueGroup: descriptor(name) inconsistent with \
                                 value.general_descriptor()."
                                    .to_owned(),
                        });
                    }
                }
            }
            if let Some(ParamValueForm::Value(_)) = value.form() {
                let by_name = object.parameter(&code);
                self.base.mandatory(
                    "ParameterValueGroup: parameter(name) shall return a value.",
                    by_name,
                )?;
                if let Some(found) = by_name {
                    if !values_match(value, found) {
                        return Err(ValidationError::Inconsistent {
                            context: "ParameterValueGroup: parameter(name) inconsistent with \
                                      values()."
                                .to_owned(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

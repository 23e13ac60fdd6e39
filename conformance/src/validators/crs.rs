//! Validation of coordinate reference systems.

use georef_api::crs::{
    CompoundCrs, CoordinateReferenceSystem, CrsForm, EngineeringCrs, GeodeticCrs, ProjectedCrs,
    TemporalCrs, VerticalCrs,
};
use georef_api::cs::CsForm;
use georef_api::datum::Datum;

use crate::container::ValidatorContainer;
use crate::error::ValidationError;
use crate::guard::{Guard, Realm};
use crate::validator::{Validator, ValidatorConfig};

/// The reference-system category of the validator registry.
pub trait ValidateReferenceSystems {
    /// Dispatches a CRS to the checks for the refinement it declares,
    /// and returns the number of specific validators invoked. An
    /// opaque CRS gets only the generic identified-object check.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    fn dispatch(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn CoordinateReferenceSystem,
    ) -> Result<usize, ValidationError>;

    /// Validates a geodetic CRS.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    fn validate_geodetic(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn GeodeticCrs,
    ) -> Result<(), ValidationError>;

    /// Validates a projected CRS, including its base CRS and the
    /// conversion from it.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    fn validate_projected(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn ProjectedCrs,
    ) -> Result<(), ValidationError>;

    /// Validates a vertical CRS.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    fn validate_vertical(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn VerticalCrs,
    ) -> Result<(), ValidationError>;

    /// Validates a temporal CRS.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    fn validate_temporal(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn TemporalCrs,
    ) -> Result<(), ValidationError>;

    /// Validates an engineering CRS.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    fn validate_engineering(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn EngineeringCrs,
    ) -> Result<(), ValidationError>;

    /// Validates a compound CRS and each of its components.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    fn validate_compound(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn CompoundCrs,
    ) -> Result<(), ValidationError>;
}

/// Default implementation of the reference-system category.
#[derive(Debug, Clone)]
pub struct CrsValidator {
    base: Validator,
}

impl CrsValidator {
    /// Creates a reference-system validator with the given configuration.
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            base: Validator::new(config, "crs"),
        }
    }

    /// Checks the coordinate system common to all non-compound CRSs,
    /// constraining its form and dimension when the refinement fixes
    /// them. `interface` names the CRS refinement in error messages.
    fn validate_coordinate_system(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn CoordinateReferenceSystem,
        allowed: &[CsForm],
        dimension: Option<usize>,
        interface: &'static str,
    ) -> Result<(), ValidationError> {
        let cs = object.coordinate_system();
        self.base.mandatory(
            &format!("{interface}: coordinate_system() shall return a value."),
            cs,
        )?;
        let Some(cs) = cs else {
            return Ok(());
        };
        container.cs.dispatch(container, guard, cs)?;
        if let Some(form) = cs.form() {
            if !allowed.is_empty() && !allowed.contains(&form) {
                return Err(ValidationError::Inconsistent {
                    context: format!(
                        "{interface}: coordinate_system() has an unexpected form."
                    ),
                });
            }
        }
        if let Some(expected) = dimension {
            if cs.dimension() != expected {
                return Err(ValidationError::Inconsistent {
                    context: format!(
                        "{interface}: coordinate_system() shall have {expected} dimension(s)."
                    ),
                });
            }
        }
        Ok(())
    }

    fn validate_datum(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        datum: Option<&dyn Datum>,
        context: &str,
    ) -> Result<(), ValidationError> {
        self.base.mandatory(context, datum)?;
        if let Some(datum) = datum {
            container.datum.dispatch(container, guard, datum)?;
        }
        Ok(())
    }
}

impl ValidateReferenceSystems for CrsValidator {
    fn dispatch(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn CoordinateReferenceSystem,
    ) -> Result<usize, ValidationError> {
        match object.form() {
            Some(CrsForm::Geodetic(crs)) => {
                self.validate_geodetic(container, guard, crs)?;
                Ok(1)
            }
            Some(CrsForm::Projected(crs)) => {
                self.validate_projected(container, guard, crs)?;
                Ok(1)
            }
            Some(CrsForm::Vertical(crs)) => {
                self.validate_vertical(container, guard, crs)?;
                Ok(1)
            }
            Some(CrsForm::Temporal(crs)) => {
                self.validate_temporal(container, guard, crs)?;
                Ok(1)
            }
            Some(CrsForm::Engineering(crs)) => {
                self.validate_engineering(container, guard, crs)?;
                Ok(1)
            }
            Some(CrsForm::Compound(crs)) => {
                self.validate_compound(container, guard, crs)?;
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

    fn validate_geodetic(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn GeodeticCrs,
    ) -> Result<(), ValidationError> {
        if !guard.first_visit(Realm::ReferenceSystem, object) {
            return Ok(());
        }
        container
            .naming
            .validate_identified_object(container, guard, object)?;
        self.validate_coordinate_system(
            container,
            guard,
            object,
            &[CsForm::Ellipsoidal, CsForm::Cartesian, CsForm::Spherical],
            None,
            "GeodeticCRS",
        )?;
        let datum = object.datum();
        self.base
            .mandatory("GeodeticCRS: datum() shall return a value.", datum)?;
        if let Some(datum) = datum {
            container.datum.validate_geodetic(container, guard, datum)?;
        }
        Ok(())
    }

    fn validate_projected(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn ProjectedCrs,
    ) -> Result<(), ValidationError> {
        if !guard.first_visit(Realm::ReferenceSystem, object) {
            return Ok(());
        }
        container
            .naming
            .validate_identified_object(container, guard, object)?;
        self.validate_coordinate_system(
            container,
            guard,
            object,
            &[CsForm::Cartesian],
            None,
            "ProjectedCRS",
        )?;
        if let Some(cs) = object.coordinate_system() {
            let dimension = cs.dimension();
            if !(2..=3).contains(&dimension) {
                return Err(ValidationError::Inconsistent {
                    context: "ProjectedCRS: the coordinate system shall have 2 or 3 dimensions."
                        .to_owned(),
                });
            }
        }
        let base = object.base_crs();
        self.base
            .mandatory("ProjectedCRS: base_crs() shall return a value.", base)?;
        if let Some(base) = base {
            self.validate_geodetic(container, guard, base)?;
        }
        let conversion = object.conversion_from_base();
        self.base.mandatory(
            "ProjectedCRS: conversion_from_base() shall return a value.",
            conversion,
        )?;
        if let Some(conversion) = conversion {
            container.operation.dispatch(container, guard, conversion)?;
        }
        Ok(())
    }

    fn validate_vertical(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn VerticalCrs,
    ) -> Result<(), ValidationError> {
        if !guard.first_visit(Realm::ReferenceSystem, object) {
            return Ok(());
        }
        container
            .naming
            .validate_identified_object(container, guard, object)?;
        self.validate_coordinate_system(
            container,
            guard,
            object,
            &[CsForm::Vertical],
            Some(1),
            "VerticalCRS",
        )?;
        self.validate_datum(
            container,
            guard,
            object.datum().map(|d| d as &dyn Datum),
            "VerticalCRS: datum() shall return a value.",
        )
    }

    fn validate_temporal(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn TemporalCrs,
    ) -> Result<(), ValidationError> {
        if !guard.first_visit(Realm::ReferenceSystem, object) {
            return Ok(());
        }
        container
            .naming
            .validate_identified_object(container, guard, object)?;
        self.validate_coordinate_system(
            container,
            guard,
            object,
            &[CsForm::Temporal],
            Some(1),
            "TemporalCRS",
        )?;
        self.validate_datum(
            container,
            guard,
            object.datum().map(|d| d as &dyn Datum),
            "TemporalCRS: datum() shall return a value.",
        )
    }

    fn validate_engineering(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn EngineeringCrs,
    ) -> Result<(), ValidationError> {
        if !guard.first_visit(Realm::ReferenceSystem, object) {
            return Ok(());
        }
        container
            .naming
            .validate_identified_object(container, guard, object)?;
        self.validate_coordinate_system(
            container,
            guard,
            object,
            &[],
            None,
            "EngineeringCRS",
        )?;
        self.validate_datum(
            container,
            guard,
            object.datum().map(|d| d as &dyn Datum),
            "EngineeringCRS: datum() shall return a value.",
        )
    }

    fn validate_compound(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn CompoundCrs,
    ) -> Result<(), ValidationError> {
        if !guard.first_visit(Realm::ReferenceSystem, object) {
            return Ok(());
        }
        container
            .naming
            .validate_identified_object(container, guard, object)?;
        let components = object.components();
        if components.len() < 2 {
            return Err(ValidationError::Inconsistent {
                context: "CompoundCRS: components() shall contain at least two elements."
                    .to_owned(),
            });
        }
        for component in components {
            self.dispatch(container, guard, component)?;
        }
        Ok(())
    }
}

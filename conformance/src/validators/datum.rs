//! Validation of datums, ellipsoids and prime meridians.

use georef_api::datum::{
    Datum, DatumForm, Ellipsoid, EngineeringDatum, GeodeticDatum, PrimeMeridian, TemporalDatum,
    VerticalDatum,
};

use crate::assert;
use crate::container::ValidatorContainer;
use crate::error::ValidationError;
use crate::guard::{Guard, Realm};
use crate::validator::{Validator, ValidatorConfig};

/// Unit symbols under which a prime meridian longitude is checked
/// against the ±180° range. Other angular units have other ranges the
/// harness cannot know without a unit-conversion service.
const DEGREE_SYMBOLS: [&str; 4] = ["°", "deg", "degree", "degrees"];

/// The datum category of the validator registry.
pub trait ValidateDatums {
    /// Dispatches a datum to the checks for the refinement it
    /// declares, and returns the number of specific validators
    /// invoked. An opaque datum gets only the generic
    /// identified-object check.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    fn dispatch(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn Datum,
    ) -> Result<usize, ValidationError>;

    /// Validates a geodetic datum and its ellipsoid and prime meridian.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    fn validate_geodetic(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn GeodeticDatum,
    ) -> Result<(), ValidationError>;

    /// Validates a vertical datum.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    fn validate_vertical(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn VerticalDatum,
    ) -> Result<(), ValidationError>;

    /// Validates a temporal datum. The origin is mandatory and the
    /// anchor point shall not be provided.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    fn validate_temporal(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn TemporalDatum,
    ) -> Result<(), ValidationError>;

    /// Validates an engineering datum.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    fn validate_engineering(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn EngineeringDatum,
    ) -> Result<(), ValidationError>;

    /// Validates an ellipsoid's defining parameters.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    fn validate_ellipsoid(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn Ellipsoid,
    ) -> Result<(), ValidationError>;

    /// Validates a prime meridian.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    fn validate_prime_meridian(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn PrimeMeridian,
    ) -> Result<(), ValidationError>;
}

/// Default implementation of the datum category.
#[derive(Debug, Clone)]
pub struct DatumValidator {
    base: Validator,
}

impl DatumValidator {
    /// Creates a datum validator with the given configuration.
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            base: Validator::new(config, "datum"),
        }
    }

    fn validate_common(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn Datum,
    ) -> Result<(), ValidationError> {
        container
            .naming
            .validate_identified_object(container, guard, object)?;
        if let Some(anchor) = object.anchor_point() {
            if anchor.trim().is_empty() {
                return Err(ValidationError::MalformedName {
                    context: "Datum: anchor_point() shall not be blank.".to_owned(),
                    detail: "found an empty anchor description".to_owned(),
                });
            }
        }
        Ok(())
    }
}

impl ValidateDatums for DatumValidator {
    fn dispatch(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn Datum,
    ) -> Result<usize, ValidationError> {
        match object.form() {
            Some(DatumForm::Geodetic(datum)) => {
                self.validate_geodetic(container, guard, datum)?;
                Ok(1)
            }
            Some(DatumForm::Vertical(datum)) => {
                self.validate_vertical(container, guard, datum)?;
                Ok(1)
            }
            Some(DatumForm::Temporal(datum)) => {
                self.validate_temporal(container, guard, datum)?;
                Ok(1)
            }
            Some(DatumForm::Engineering(datum)) => {
                self.validate_engineering(container, guard, datum)?;
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
        object: &dyn GeodeticDatum,
    ) -> Result<(), ValidationError> {
        if !guard.first_visit(Realm::Datum, object) {
            return Ok(());
        }
        self.validate_common(container, guard, object)?;
        let ellipsoid = object.ellipsoid();
        self.base.mandatory(
            "GeodeticDatum: ellipsoid() shall return a value.",
            ellipsoid,
        )?;
        if let Some(ellipsoid) = ellipsoid {
            self.validate_ellipsoid(container, guard, ellipsoid)?;
        }
        let meridian = object.prime_meridian();
        self.base.mandatory(
            "GeodeticDatum: prime_meridian() shall return a value.",
            meridian,
        )?;
        if let Some(meridian) = meridian {
            self.validate_prime_meridian(container, guard, meridian)?;
        }
        Ok(())
    }

    fn validate_vertical(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn VerticalDatum,
    ) -> Result<(), ValidationError> {
        if !guard.first_visit(Realm::Datum, object) {
            return Ok(());
        }
        self.validate_common(container, guard, object)
    }

    fn validate_temporal(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn TemporalDatum,
    ) -> Result<(), ValidationError> {
        if !guard.first_visit(Realm::Datum, object) {
            return Ok(());
        }
        self.validate_common(container, guard, object)?;
        self.base.mandatory(
            "TemporalDatum: origin() shall return a value.",
            object.origin().as_ref(),
        )?;
        assert::forbidden(
            "TemporalDatum: anchor_point() shall not be provided.",
            object.anchor_point(),
        )?;
        Ok(())
    }

    fn validate_engineering(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn EngineeringDatum,
    ) -> Result<(), ValidationError> {
        if !guard.first_visit(Realm::Datum, object) {
            return Ok(());
        }
        self.validate_common(container, guard, object)
    }

    fn validate_ellipsoid(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn Ellipsoid,
    ) -> Result<(), ValidationError> {
        if !guard.first_visit(Realm::Ellipsoid, object) {
            return Ok(());
        }
        container
            .naming
            .validate_identified_object(container, guard, object)?;
        self.base.mandatory(
            "Ellipsoid: axis_unit() shall return a value.",
            object.axis_unit(),
        )?;
        let semi_major = object.semi_major_axis();
        let semi_minor = object.semi_minor_axis();
        // The negated comparisons also catch NaN.
        if !(semi_major > 0.0) {
            return Err(ValidationError::Inconsistent {
                context: "Ellipsoid: semi_major_axis() shall be positive.".to_owned(),
            });
        }
        if !(semi_minor > 0.0 && semi_minor <= semi_major) {
            return Err(ValidationError::Inconsistent {
                context: "Ellipsoid: semi_minor_axis() shall be positive and not greater than \
                          the semi-major axis."
                    .to_owned(),
            });
        }
        if !(object.inverse_flattening() > 0.0) {
            return Err(ValidationError::Inconsistent {
                context: "Ellipsoid: inverse_flattening() shall be positive.".to_owned(),
            });
        }
        let tolerance = self.base.config().tolerance;
        let spherical = (semi_major - semi_minor).abs() <= tolerance * semi_major;
        if object.is_sphere() != spherical {
            return Err(ValidationError::Inconsistent {
                context: "Ellipsoid: is_sphere() inconsistent with the axis lengths.".to_owned(),
            });
        }
        Ok(())
    }

    fn validate_prime_meridian(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn PrimeMeridian,
    ) -> Result<(), ValidationError> {
        if !guard.first_visit(Realm::Meridian, object) {
            return Ok(());
        }
        container
            .naming
            .validate_identified_object(container, guard, object)?;
        let unit = object.angular_unit();
        self.base
            .mandatory("PrimeMeridian: angular_unit() shall return a value.", unit)?;
        let longitude = object.greenwich_longitude();
        let in_degrees =
            unit.is_some_and(|u| DEGREE_SYMBOLS.iter().any(|d| u.eq_ignore_ascii_case(d)));
        if in_degrees {
            assert::between_f64(
                "PrimeMeridian: greenwich_longitude() out of range.",
                -180.0,
                180.0,
                longitude,
            )?;
        }
        if self.base.config().enforce_standard_names {
            let named_greenwich = object
                .name()
                .is_some_and(|n| n.code().eq_ignore_ascii_case("greenwich"));
            if named_greenwich && longitude.abs() > self.base.config().tolerance {
                return Err(ValidationError::Inconsistent {
                    context: "PrimeMeridian: the Greenwich meridian shall be at longitude 0."
                        .to_owned(),
                });
            }
        }
        Ok(())
    }
}

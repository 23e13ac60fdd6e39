//! Validation of coordinate systems and their axes.

use georef_api::cs::{AxisDirection, CoordinateSystem, CoordinateSystemAxis, CsForm};

use crate::assert;
use crate::container::ValidatorContainer;
use crate::error::ValidationError;
use crate::guard::{Guard, Realm};
use crate::validator::{Validator, ValidatorConfig};

/// Axis directions allowed in an ellipsoidal coordinate system by the
/// standard's naming rules.
const ELLIPSOIDAL_DIRECTIONS: [AxisDirection; 6] = [
    AxisDirection::North,
    AxisDirection::South,
    AxisDirection::East,
    AxisDirection::West,
    AxisDirection::Up,
    AxisDirection::Down,
];

/// The coordinate-system category of the validator registry.
pub trait ValidateCoordinateSystems {
    /// Dispatches a coordinate system to the checks for the refinement
    /// it declares, and returns the number of specific validators
    /// invoked. An opaque system gets only the generic
    /// identified-object check.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    fn dispatch(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn CoordinateSystem,
    ) -> Result<usize, ValidationError>;

    /// Validates a single coordinate system axis.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    fn validate_axis(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn CoordinateSystemAxis,
    ) -> Result<(), ValidationError>;
}

/// Default implementation of the coordinate-system category.
#[derive(Debug, Clone)]
pub struct CsValidator {
    base: Validator,
}

impl CsValidator {
    /// Creates a coordinate-system validator with the given configuration.
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            base: Validator::new(config, "cs"),
        }
    }

    /// Permitted dimension range for a coordinate-system refinement.
    fn dimension_range(form: CsForm) -> (usize, usize) {
        match form {
            CsForm::Cartesian => (1, 3),
            CsForm::Ellipsoidal => (2, 3),
            CsForm::Spherical | CsForm::Cylindrical => (3, 3),
            CsForm::Polar => (2, 2),
            CsForm::Linear | CsForm::Vertical | CsForm::Temporal => (1, 1),
            CsForm::UserDefined => (1, usize::MAX),
        }
    }

    fn validate_coordinate_system(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn CoordinateSystem,
        form: CsForm,
    ) -> Result<(), ValidationError> {
        if !guard.first_visit(Realm::CoordinateSystem, object) {
            return Ok(());
        }
        container
            .naming
            .validate_identified_object(container, guard, object)?;
        let dimension = object.dimension();
        if dimension == 0 {
            return Err(ValidationError::Inconsistent {
                context: "CoordinateSystem: dimension() shall be at least 1.".to_owned(),
            });
        }
        let (lo, hi) = Self::dimension_range(form);
        assert::between_occurs(
            "CoordinateSystem: dimension() inconsistent with the declared form.",
            lo,
            hi,
            dimension,
        )?;
        let mut directions = Vec::with_capacity(dimension);
        for index in 0..dimension {
            let axis = object.axis(index);
            self.base
                .mandatory("CoordinateSystem: axis(index) shall return a value.", axis)?;
            let Some(axis) = axis else {
                continue;
            };
            self.validate_axis(container, guard, axis)?;
            if let Some(direction) = axis.direction() {
                directions.push(direction);
            }
        }
        // Two axes pointing the same or opposite ways span no extra
        // dimension. `Other` is exempt: several unknown orientations
        // are not provably colinear.
        for (i, a) in directions.iter().enumerate() {
            for b in &directions[i + 1..] {
                if *a == AxisDirection::Other || *b == AxisDirection::Other {
                    continue;
                }
                if a == b || a.opposite() == Some(*b) {
                    return Err(ValidationError::Inconsistent {
                        context: "CoordinateSystem: axis directions shall not be duplicated or \
                                  mutually opposite."
                            .to_owned(),
                    });
                }
            }
        }
        if form == CsForm::Ellipsoidal && self.base.config().enforce_standard_names {
            for direction in &directions {
                if !ELLIPSOIDAL_DIRECTIONS.contains(direction) {
                    return Err(ValidationError::Inconsistent {
                        context: "EllipsoidalCS: axis directions shall be north, south, east, \
                                  west, up or down."
                            .to_owned(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl ValidateCoordinateSystems for CsValidator {
    fn dispatch(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn CoordinateSystem,
    ) -> Result<usize, ValidationError> {
        match object.form() {
            Some(form) => {
                self.validate_coordinate_system(container, guard, object, form)?;
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

    fn validate_axis(
        &self,
        container: &ValidatorContainer,
        guard: &mut Guard,
        object: &dyn CoordinateSystemAxis,
    ) -> Result<(), ValidationError> {
        if !guard.first_visit(Realm::Axis, object) {
            return Ok(());
        }
        container
            .naming
            .validate_identified_object(container, guard, object)?;
        self.base.mandatory(
            "CoordinateSystemAxis: abbreviation() shall return a value.",
            object.abbreviation(),
        )?;
        self.base.mandatory(
            "CoordinateSystemAxis: direction() shall return a value.",
            object.direction().as_ref(),
        )?;
        self.base.mandatory(
            "CoordinateSystemAxis: unit() shall return a value.",
            object.unit(),
        )?;
        assert::valid_range_f64(
            "CoordinateSystemAxis: inconsistent minimum and maximum values.",
            object.minimum_value(),
            object.maximum_value(),
        )?;
        Ok(())
    }
}

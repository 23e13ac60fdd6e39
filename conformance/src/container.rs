//! The registry tying the domain validators together.

use georef_api::crs::{
    CompoundCrs, CoordinateReferenceSystem, EngineeringCrs, GeodeticCrs, ProjectedCrs,
    TemporalCrs, VerticalCrs,
};
use georef_api::cs::{CoordinateSystem, CoordinateSystemAxis};
use georef_api::datum::{
    Datum, Ellipsoid, EngineeringDatum, GeodeticDatum, PrimeMeridian, TemporalDatum,
    VerticalDatum,
};
use georef_api::naming::{GenericName, Identifier};
use georef_api::object::IdentifiedObject;
use georef_api::operation::{Conversion, CoordinateOperation, OperationMethod, Transformation};
use georef_api::parameter::{
    GeneralParameterDescriptor, GeneralParameterValue, ParameterDescriptor,
    ParameterDescriptorGroup, ParameterValue, ParameterValueGroup,
};

use crate::error::ValidationError;
use crate::guard::Guard;
use crate::validator::ValidatorConfig;
use crate::validators::{
    CrsValidator, CsValidator, DatumValidator, NamingValidator, OperationValidator,
    ParameterValidator, ValidateCoordinateSystems, ValidateDatums, ValidateNaming,
    ValidateOperations, ValidateParameters, ValidateReferenceSystems,
};

/// A complete set of domain validators sharing one configuration.
///
/// The fields are public so a harness can substitute a category with
/// its own implementation; validators reach each other only through
/// the container passed to every call, so a substitution is seen by
/// the whole traversal. Every public `validate_*` and `dispatch_*`
/// method is a top-level entry point and starts a fresh cycle guard.
pub struct ValidatorContainer {
    /// Identifiers, generic names, and the generic identified-object
    /// fallback.
    pub naming: Box<dyn ValidateNaming + Send + Sync>,
    /// Parameter descriptors and values.
    pub parameter: Box<dyn ValidateParameters + Send + Sync>,
    /// Coordinate systems and axes.
    pub cs: Box<dyn ValidateCoordinateSystems + Send + Sync>,
    /// Datums, ellipsoids and prime meridians.
    pub datum: Box<dyn ValidateDatums + Send + Sync>,
    /// Coordinate reference systems.
    pub crs: Box<dyn ValidateReferenceSystems + Send + Sync>,
    /// Coordinate operations and methods.
    pub operation: Box<dyn ValidateOperations + Send + Sync>,
    config: ValidatorConfig,
}

impl std::fmt::Debug for ValidatorContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorContainer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for ValidatorContainer {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

impl ValidatorContainer {
    /// Creates a container of default validators sharing the given
    /// configuration.
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            naming: Box::new(NamingValidator::new(config)),
            parameter: Box::new(ParameterValidator::new(config)),
            cs: Box::new(CsValidator::new(config)),
            datum: Box::new(DatumValidator::new(config)),
            crs: Box::new(CrsValidator::new(config)),
            operation: Box::new(OperationValidator::new(config)),
            config,
        }
    }

    /// The configuration the default validators were built with.
    ///
    /// Substituted validators are free to ignore it.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates an identifier.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    pub fn validate_identifier(&self, object: &dyn Identifier) -> Result<(), ValidationError> {
        let mut guard = Guard::default();
        self.naming.validate_identifier(self, &mut guard, object)
    }

    /// Validates a generic name.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    pub fn validate_generic_name(&self, object: &dyn GenericName) -> Result<(), ValidationError> {
        let mut guard = Guard::default();
        self.naming.validate_generic_name(self, &mut guard, object)
    }

    /// Validates the generic identified-object contract.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    pub fn validate_identified_object(
        &self,
        object: &dyn IdentifiedObject,
    ) -> Result<(), ValidationError> {
        let mut guard = Guard::default();
        self.naming
            .validate_identified_object(self, &mut guard, object)
    }

    /// Dispatches an abstract parameter descriptor and returns the
    /// number of specific validators invoked.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    pub fn dispatch_parameter_descriptor(
        &self,
        object: &dyn GeneralParameterDescriptor,
    ) -> Result<usize, ValidationError> {
        let mut guard = Guard::default();
        self.parameter.dispatch_descriptor(self, &mut guard, object)
    }

    /// Dispatches an abstract parameter value and returns the number
    /// of specific validators invoked.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    pub fn dispatch_parameter_value(
        &self,
        object: &dyn GeneralParameterValue,
    ) -> Result<usize, ValidationError> {
        let mut guard = Guard::default();
        self.parameter.dispatch_value(self, &mut guard, object)
    }

    /// Validates a single-valued parameter descriptor.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    pub fn validate_parameter_descriptor(
        &self,
        object: &dyn ParameterDescriptor,
    ) -> Result<(), ValidationError> {
        let mut guard = Guard::default();
        self.parameter.validate_descriptor(self, &mut guard, object)
    }

    /// Validates a parameter descriptor group.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    pub fn validate_parameter_descriptor_group(
        &self,
        object: &dyn ParameterDescriptorGroup,
    ) -> Result<(), ValidationError> {
        let mut guard = Guard::default();
        self.parameter
            .validate_descriptor_group(self, &mut guard, object)
    }

    /// Validates a single parameter value.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    pub fn validate_parameter_value(
        &self,
        object: &dyn ParameterValue,
    ) -> Result<(), ValidationError> {
        let mut guard = Guard::default();
        self.parameter.validate_value(self, &mut guard, object)
    }

    /// Validates a parameter value group.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    pub fn validate_parameter_value_group(
        &self,
        object: &dyn ParameterValueGroup,
    ) -> Result<(), ValidationError> {
        let mut guard = Guard::default();
        self.parameter
            .validate_value_group(self, &mut guard, object)
    }

    /// Dispatches a coordinate system and returns the number of
    /// specific validators invoked.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    pub fn dispatch_coordinate_system(
        &self,
        object: &dyn CoordinateSystem,
    ) -> Result<usize, ValidationError> {
        let mut guard = Guard::default();
        self.cs.dispatch(self, &mut guard, object)
    }

    /// Validates a single coordinate system axis.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    pub fn validate_axis(
        &self,
        object: &dyn CoordinateSystemAxis,
    ) -> Result<(), ValidationError> {
        let mut guard = Guard::default();
        self.cs.validate_axis(self, &mut guard, object)
    }

    /// Dispatches a datum and returns the number of specific
    /// validators invoked.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    pub fn dispatch_datum(&self, object: &dyn Datum) -> Result<usize, ValidationError> {
        let mut guard = Guard::default();
        self.datum.dispatch(self, &mut guard, object)
    }

    /// Validates a geodetic datum.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    pub fn validate_geodetic_datum(
        &self,
        object: &dyn GeodeticDatum,
    ) -> Result<(), ValidationError> {
        let mut guard = Guard::default();
        self.datum.validate_geodetic(self, &mut guard, object)
    }

    /// Validates a vertical datum.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    pub fn validate_vertical_datum(
        &self,
        object: &dyn VerticalDatum,
    ) -> Result<(), ValidationError> {
        let mut guard = Guard::default();
        self.datum.validate_vertical(self, &mut guard, object)
    }

    /// Validates a temporal datum.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    pub fn validate_temporal_datum(
        &self,
        object: &dyn TemporalDatum,
    ) -> Result<(), ValidationError> {
        let mut guard = Guard::default();
        self.datum.validate_temporal(self, &mut guard, object)
    }

    /// Validates an engineering datum.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    pub fn validate_engineering_datum(
        &self,
        object: &dyn EngineeringDatum,
    ) -> Result<(), ValidationError> {
        let mut guard = Guard::default();
        self.datum.validate_engineering(self, &mut guard, object)
    }

    /// Validates an ellipsoid.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    pub fn validate_ellipsoid(&self, object: &dyn Ellipsoid) -> Result<(), ValidationError> {
        let mut guard = Guard::default();
        self.datum.validate_ellipsoid(self, &mut guard, object)
    }

    /// Validates a prime meridian.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    pub fn validate_prime_meridian(
        &self,
        object: &dyn PrimeMeridian,
    ) -> Result<(), ValidationError> {
        let mut guard = Guard::default();
        self.datum.validate_prime_meridian(self, &mut guard, object)
    }

    /// Dispatches a coordinate reference system and returns the number
    /// of specific validators invoked.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    pub fn dispatch_crs(
        &self,
        object: &dyn CoordinateReferenceSystem,
    ) -> Result<usize, ValidationError> {
        let mut guard = Guard::default();
        self.crs.dispatch(self, &mut guard, object)
    }

    /// Validates a geodetic CRS.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    pub fn validate_geodetic_crs(&self, object: &dyn GeodeticCrs) -> Result<(), ValidationError> {
        let mut guard = Guard::default();
        self.crs.validate_geodetic(self, &mut guard, object)
    }

    /// Validates a projected CRS.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    pub fn validate_projected_crs(
        &self,
        object: &dyn ProjectedCrs,
    ) -> Result<(), ValidationError> {
        let mut guard = Guard::default();
        self.crs.validate_projected(self, &mut guard, object)
    }

    /// Validates a vertical CRS.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    pub fn validate_vertical_crs(&self, object: &dyn VerticalCrs) -> Result<(), ValidationError> {
        let mut guard = Guard::default();
        self.crs.validate_vertical(self, &mut guard, object)
    }

    /// Validates a temporal CRS.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    pub fn validate_temporal_crs(&self, object: &dyn TemporalCrs) -> Result<(), ValidationError> {
        let mut guard = Guard::default();
        self.crs.validate_temporal(self, &mut guard, object)
    }

    /// Validates an engineering CRS.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    pub fn validate_engineering_crs(
        &self,
        object: &dyn EngineeringCrs,
    ) -> Result<(), ValidationError> {
        let mut guard = Guard::default();
        self.crs.validate_engineering(self, &mut guard, object)
    }

    /// Validates a compound CRS.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    pub fn validate_compound_crs(&self, object: &dyn CompoundCrs) -> Result<(), ValidationError> {
        let mut guard = Guard::default();
        self.crs.validate_compound(self, &mut guard, object)
    }

    /// Dispatches a coordinate operation and returns the number of
    /// specific validators invoked.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    pub fn dispatch_operation(
        &self,
        object: &dyn CoordinateOperation,
    ) -> Result<usize, ValidationError> {
        let mut guard = Guard::default();
        self.operation.dispatch(self, &mut guard, object)
    }

    /// Validates a conversion.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    pub fn validate_conversion(&self, object: &dyn Conversion) -> Result<(), ValidationError> {
        let mut guard = Guard::default();
        self.operation.validate_conversion(self, &mut guard, object)
    }

    /// Validates a transformation.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    pub fn validate_transformation(
        &self,
        object: &dyn Transformation,
    ) -> Result<(), ValidationError> {
        let mut guard = Guard::default();
        self.operation
            .validate_transformation(self, &mut guard, object)
    }

    /// Validates an operation method.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation encountered.
    pub fn validate_operation_method(
        &self,
        object: &dyn OperationMethod,
    ) -> Result<(), ValidationError> {
        let mut guard = Guard::default();
        self.operation.validate_method(self, &mut guard, object)
    }
}

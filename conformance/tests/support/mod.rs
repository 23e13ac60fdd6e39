//! In-memory doubles of the capability interfaces.
//!
//! Minimal conformant implementations used as fixtures; individual
//! tests break specific contracts by wrapping or tweaking them.

#![allow(dead_code)]

use georef_api::crs::{
    CompoundCrs, CoordinateReferenceSystem, CrsForm, GeodeticCrs, ProjectedCrs, VerticalCrs,
};
use georef_api::cs::{AxisDirection, CoordinateSystem, CoordinateSystemAxis, CsForm};
use georef_api::datum::{
    Datum, DatumForm, Ellipsoid, GeodeticDatum, PrimeMeridian, VerticalDatum,
};
use georef_api::naming::Identifier;
use georef_api::object::IdentifiedObject;
use georef_api::operation::{
    Conversion, CoordinateOperation, OperationForm, OperationMethod, Transformation,
};
use georef_api::parameter::{
    DescriptorForm, GeneralParameterDescriptor, GeneralParameterValue, ParamValueForm,
    ParameterDescriptor, ParameterDescriptorGroup, ParameterValue, ParameterValueGroup,
};
use georef_api::value::{Value, ValueKind};

/// A plain identifier with an optional code space.
pub struct SimpleIdentifier {
    pub code: String,
    pub code_space: Option<String>,
}

impl SimpleIdentifier {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_owned(),
            code_space: Some("test".to_owned()),
        }
    }
}

impl Identifier for SimpleIdentifier {
    fn code(&self) -> &str {
        &self.code
    }

    fn code_space(&self) -> Option<&str> {
        self.code_space.as_deref()
    }
}

/// A single-valued real parameter descriptor.
pub struct SimpleDescriptor {
    pub name: SimpleIdentifier,
    pub kind: Option<ValueKind>,
    pub minimum: Option<Value>,
    pub maximum: Option<Value>,
    pub default: Option<Value>,
    pub minimum_occurs: usize,
    pub maximum_occurs: usize,
}

impl SimpleDescriptor {
    /// A real-valued descriptor bounded to [min … max].
    pub fn real(name: &str, min: f64, max: f64) -> Self {
        Self {
            name: SimpleIdentifier::new(name),
            kind: Some(ValueKind::Real),
            minimum: Some(Value::Real(min)),
            maximum: Some(Value::Real(max)),
            default: None,
            minimum_occurs: 0,
            maximum_occurs: 1,
        }
    }
}

impl IdentifiedObject for SimpleDescriptor {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }
}

impl GeneralParameterDescriptor for SimpleDescriptor {
    fn minimum_occurs(&self) -> usize {
        self.minimum_occurs
    }

    fn maximum_occurs(&self) -> usize {
        self.maximum_occurs
    }

    fn form(&self) -> Option<DescriptorForm<'_>> {
        Some(DescriptorForm::Value(self))
    }
}

impl ParameterDescriptor for SimpleDescriptor {
    fn value_kind(&self) -> Option<ValueKind> {
        self.kind
    }

    fn minimum_value(&self) -> Option<Value> {
        self.minimum.clone()
    }

    fn maximum_value(&self) -> Option<Value> {
        self.maximum.clone()
    }

    fn default_value(&self) -> Option<Value> {
        self.default.clone()
    }
}

/// A descriptor group backed by a vector, with a by-name index that
/// honors the two-access-path contract.
pub struct SimpleDescriptorGroup {
    pub name: SimpleIdentifier,
    pub entries: Vec<SimpleDescriptor>,
}

impl SimpleDescriptorGroup {
    pub fn new(name: &str, entries: Vec<SimpleDescriptor>) -> Self {
        Self {
            name: SimpleIdentifier::new(name),
            entries,
        }
    }
}

impl IdentifiedObject for SimpleDescriptorGroup {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }
}

impl GeneralParameterDescriptor for SimpleDescriptorGroup {
    fn minimum_occurs(&self) -> usize {
        1
    }

    fn maximum_occurs(&self) -> usize {
        1
    }

    fn form(&self) -> Option<DescriptorForm<'_>> {
        Some(DescriptorForm::Group(self))
    }
}

impl ParameterDescriptorGroup for SimpleDescriptorGroup {
    fn descriptors(&self) -> Vec<&dyn GeneralParameterDescriptor> {
        self.entries
            .iter()
            .map(|d| d as &dyn GeneralParameterDescriptor)
            .collect()
    }

    fn descriptor(&self, name: &str) -> Option<&dyn GeneralParameterDescriptor> {
        self.entries
            .iter()
            .find(|d| d.name.code == name)
            .map(|d| d as &dyn GeneralParameterDescriptor)
    }
}

/// A single parameter value paired with its descriptor.
pub struct SimpleParameter {
    pub descriptor: SimpleDescriptor,
    pub value: Option<Value>,
}

impl GeneralParameterValue for SimpleParameter {
    fn general_descriptor(&self) -> Option<&dyn GeneralParameterDescriptor> {
        Some(&self.descriptor)
    }

    fn form(&self) -> Option<ParamValueForm<'_>> {
        Some(ParamValueForm::Value(self))
    }
}

impl ParameterValue for SimpleParameter {
    fn descriptor(&self) -> Option<&dyn ParameterDescriptor> {
        Some(&self.descriptor)
    }

    fn value(&self) -> Option<Value> {
        self.value.clone()
    }
}

/// A value group whose by-name lookup is consistent with its list.
pub struct SimpleParameterGroup {
    pub descriptor: SimpleDescriptorGroup,
    pub parameters: Vec<SimpleParameter>,
}

impl GeneralParameterValue for SimpleParameterGroup {
    fn general_descriptor(&self) -> Option<&dyn GeneralParameterDescriptor> {
        Some(&self.descriptor)
    }

    fn form(&self) -> Option<ParamValueForm<'_>> {
        Some(ParamValueForm::Group(self))
    }
}

impl ParameterValueGroup for SimpleParameterGroup {
    fn descriptor(&self) -> Option<&dyn ParameterDescriptorGroup> {
        Some(&self.descriptor)
    }

    fn values(&self) -> Vec<&dyn GeneralParameterValue> {
        self.parameters
            .iter()
            .map(|p| p as &dyn GeneralParameterValue)
            .collect()
    }

    fn parameter(&self, name: &str) -> Option<&dyn ParameterValue> {
        self.parameters
            .iter()
            .find(|p| p.descriptor.name.code == name)
            .map(|p| p as &dyn ParameterValue)
    }
}

/// A coordinate system axis.
pub struct SimpleAxis {
    pub name: SimpleIdentifier,
    pub abbreviation: String,
    pub direction: AxisDirection,
    pub unit: String,
}

impl SimpleAxis {
    pub fn new(name: &str, abbreviation: &str, direction: AxisDirection, unit: &str) -> Self {
        Self {
            name: SimpleIdentifier::new(name),
            abbreviation: abbreviation.to_owned(),
            direction,
            unit: unit.to_owned(),
        }
    }
}

impl IdentifiedObject for SimpleAxis {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }
}

impl CoordinateSystemAxis for SimpleAxis {
    fn abbreviation(&self) -> Option<&str> {
        Some(&self.abbreviation)
    }

    fn direction(&self) -> Option<AxisDirection> {
        Some(self.direction)
    }

    fn unit(&self) -> Option<&str> {
        Some(&self.unit)
    }
}

/// A coordinate system backed by a vector of axes.
pub struct SimpleCs {
    pub name: SimpleIdentifier,
    pub form: CsForm,
    pub axes: Vec<SimpleAxis>,
}

impl SimpleCs {
    /// A 2-dimensional ellipsoidal system (latitude, longitude).
    pub fn ellipsoidal_2d() -> Self {
        Self {
            name: SimpleIdentifier::new("latlon"),
            form: CsForm::Ellipsoidal,
            axes: vec![
                SimpleAxis::new("latitude", "φ", AxisDirection::North, "°"),
                SimpleAxis::new("longitude", "λ", AxisDirection::East, "°"),
            ],
        }
    }

    /// A 1-dimensional vertical system (gravity-related height).
    pub fn vertical_1d() -> Self {
        Self {
            name: SimpleIdentifier::new("height"),
            form: CsForm::Vertical,
            axes: vec![SimpleAxis::new(
                "gravity-related height",
                "H",
                AxisDirection::Up,
                "m",
            )],
        }
    }

    /// A 2-dimensional cartesian system (easting, northing).
    pub fn cartesian_2d() -> Self {
        Self {
            name: SimpleIdentifier::new("easting_northing"),
            form: CsForm::Cartesian,
            axes: vec![
                SimpleAxis::new("easting", "E", AxisDirection::East, "m"),
                SimpleAxis::new("northing", "N", AxisDirection::North, "m"),
            ],
        }
    }
}

impl IdentifiedObject for SimpleCs {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }
}

impl CoordinateSystem for SimpleCs {
    fn dimension(&self) -> usize {
        self.axes.len()
    }

    fn axis(&self, index: usize) -> Option<&dyn CoordinateSystemAxis> {
        self.axes
            .get(index)
            .map(|a| a as &dyn CoordinateSystemAxis)
    }

    fn form(&self) -> Option<CsForm> {
        Some(self.form)
    }
}

/// An ellipsoid with WGS 84 defining parameters.
pub struct SimpleEllipsoid {
    pub name: SimpleIdentifier,
}

impl SimpleEllipsoid {
    pub fn wgs84() -> Self {
        Self {
            name: SimpleIdentifier::new("WGS 84"),
        }
    }
}

impl IdentifiedObject for SimpleEllipsoid {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }
}

impl Ellipsoid for SimpleEllipsoid {
    fn semi_major_axis(&self) -> f64 {
        6_378_137.0
    }

    fn semi_minor_axis(&self) -> f64 {
        6_356_752.314_245
    }

    fn inverse_flattening(&self) -> f64 {
        298.257_223_563
    }

    fn is_sphere(&self) -> bool {
        false
    }

    fn axis_unit(&self) -> Option<&str> {
        Some("m")
    }
}

/// The Greenwich prime meridian.
pub struct SimpleMeridian {
    pub name: SimpleIdentifier,
    pub longitude: f64,
}

impl SimpleMeridian {
    pub fn greenwich() -> Self {
        Self {
            name: SimpleIdentifier::new("Greenwich"),
            longitude: 0.0,
        }
    }
}

impl IdentifiedObject for SimpleMeridian {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }
}

impl PrimeMeridian for SimpleMeridian {
    fn greenwich_longitude(&self) -> f64 {
        self.longitude
    }

    fn angular_unit(&self) -> Option<&str> {
        Some("°")
    }
}

/// A geodetic datum owning its ellipsoid and prime meridian.
pub struct SimpleGeodeticDatum {
    pub name: SimpleIdentifier,
    pub ellipsoid: SimpleEllipsoid,
    pub meridian: SimpleMeridian,
}

impl SimpleGeodeticDatum {
    pub fn wgs84() -> Self {
        Self {
            name: SimpleIdentifier::new("World Geodetic System 1984"),
            ellipsoid: SimpleEllipsoid::wgs84(),
            meridian: SimpleMeridian::greenwich(),
        }
    }
}

impl IdentifiedObject for SimpleGeodeticDatum {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }
}

impl Datum for SimpleGeodeticDatum {
    fn form(&self) -> Option<DatumForm<'_>> {
        Some(DatumForm::Geodetic(self))
    }
}

impl GeodeticDatum for SimpleGeodeticDatum {
    fn ellipsoid(&self) -> Option<&dyn Ellipsoid> {
        Some(&self.ellipsoid)
    }

    fn prime_meridian(&self) -> Option<&dyn PrimeMeridian> {
        Some(&self.meridian)
    }
}

/// A geographic CRS over an ellipsoidal coordinate system.
pub struct SimpleGeodeticCrs {
    pub name: SimpleIdentifier,
    pub cs: SimpleCs,
    pub datum: SimpleGeodeticDatum,
}

impl SimpleGeodeticCrs {
    pub fn wgs84() -> Self {
        Self {
            name: SimpleIdentifier::new("WGS 84"),
            cs: SimpleCs::ellipsoidal_2d(),
            datum: SimpleGeodeticDatum::wgs84(),
        }
    }
}

impl IdentifiedObject for SimpleGeodeticCrs {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }
}

impl CoordinateReferenceSystem for SimpleGeodeticCrs {
    fn coordinate_system(&self) -> Option<&dyn CoordinateSystem> {
        Some(&self.cs)
    }

    fn form(&self) -> Option<CrsForm<'_>> {
        Some(CrsForm::Geodetic(self))
    }
}

impl GeodeticCrs for SimpleGeodeticCrs {
    fn datum(&self) -> Option<&dyn GeodeticDatum> {
        Some(&self.datum)
    }
}

/// A datum for gravity-related heights.
pub struct SimpleVerticalDatum {
    pub name: SimpleIdentifier,
}

impl SimpleVerticalDatum {
    pub fn mean_sea_level() -> Self {
        Self {
            name: SimpleIdentifier::new("Mean Sea Level"),
        }
    }
}

impl IdentifiedObject for SimpleVerticalDatum {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }
}

impl Datum for SimpleVerticalDatum {
    fn form(&self) -> Option<DatumForm<'_>> {
        Some(DatumForm::Vertical(self))
    }
}

impl VerticalDatum for SimpleVerticalDatum {}

/// A 1-dimensional CRS for gravity-related heights.
pub struct SimpleVerticalCrs {
    pub name: SimpleIdentifier,
    pub cs: SimpleCs,
    pub datum: SimpleVerticalDatum,
}

impl SimpleVerticalCrs {
    pub fn mean_sea_level_height() -> Self {
        Self {
            name: SimpleIdentifier::new("MSL height"),
            cs: SimpleCs::vertical_1d(),
            datum: SimpleVerticalDatum::mean_sea_level(),
        }
    }
}

impl IdentifiedObject for SimpleVerticalCrs {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }
}

impl CoordinateReferenceSystem for SimpleVerticalCrs {
    fn coordinate_system(&self) -> Option<&dyn CoordinateSystem> {
        Some(&self.cs)
    }

    fn form(&self) -> Option<CrsForm<'_>> {
        Some(CrsForm::Vertical(self))
    }
}

impl VerticalCrs for SimpleVerticalCrs {
    fn datum(&self) -> Option<&dyn VerticalDatum> {
        Some(&self.datum)
    }
}

/// A CRS concatenating boxed component CRSs.
pub struct SimpleCompoundCrs {
    pub name: SimpleIdentifier,
    pub components: Vec<Box<dyn CoordinateReferenceSystem>>,
}

impl IdentifiedObject for SimpleCompoundCrs {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }
}

impl CoordinateReferenceSystem for SimpleCompoundCrs {
    fn coordinate_system(&self) -> Option<&dyn CoordinateSystem> {
        None
    }

    fn form(&self) -> Option<CrsForm<'_>> {
        Some(CrsForm::Compound(self))
    }
}

impl CompoundCrs for SimpleCompoundCrs {
    fn components(&self) -> Vec<&dyn CoordinateReferenceSystem> {
        self.components.iter().map(|c| c.as_ref()).collect()
    }
}

/// An operation method with a by-vector descriptor group.
pub struct SimpleMethod {
    pub name: SimpleIdentifier,
    pub parameters: SimpleDescriptorGroup,
}

impl SimpleMethod {
    pub fn mercator() -> Self {
        Self {
            name: SimpleIdentifier::new("Mercator"),
            parameters: SimpleDescriptorGroup::new(
                "Mercator",
                vec![
                    SimpleDescriptor::real("central_meridian", -180.0, 180.0),
                    SimpleDescriptor::real("scale_factor", 0.0, 2.0),
                ],
            ),
        }
    }

    pub fn geocentric_translations() -> Self {
        Self {
            name: SimpleIdentifier::new("Geocentric translations"),
            parameters: SimpleDescriptorGroup::new(
                "Geocentric translations",
                vec![
                    SimpleDescriptor::real("X-axis translation", -1000.0, 1000.0),
                    SimpleDescriptor::real("Y-axis translation", -1000.0, 1000.0),
                    SimpleDescriptor::real("Z-axis translation", -1000.0, 1000.0),
                ],
            ),
        }
    }
}

impl IdentifiedObject for SimpleMethod {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }
}

impl OperationMethod for SimpleMethod {
    fn parameters(&self) -> Option<&dyn ParameterDescriptorGroup> {
        Some(&self.parameters)
    }

    fn source_dimensions(&self) -> Option<usize> {
        Some(2)
    }

    fn target_dimensions(&self) -> Option<usize> {
        Some(2)
    }
}

/// A projected CRS whose defining conversion is the object itself, so
/// the conversion's target CRS closes a reference cycle back to the
/// projection.
pub struct LoopingProjection {
    pub name: SimpleIdentifier,
    pub cs: SimpleCs,
    pub base: SimpleGeodeticCrs,
    pub method: SimpleMethod,
}

impl LoopingProjection {
    pub fn new() -> Self {
        Self {
            name: SimpleIdentifier::new("WGS 84 / World Mercator"),
            cs: SimpleCs::cartesian_2d(),
            base: SimpleGeodeticCrs::wgs84(),
            method: SimpleMethod::mercator(),
        }
    }
}

impl Default for LoopingProjection {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifiedObject for LoopingProjection {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }
}

impl CoordinateReferenceSystem for LoopingProjection {
    fn coordinate_system(&self) -> Option<&dyn CoordinateSystem> {
        Some(&self.cs)
    }

    fn form(&self) -> Option<CrsForm<'_>> {
        Some(CrsForm::Projected(self))
    }
}

impl ProjectedCrs for LoopingProjection {
    fn base_crs(&self) -> Option<&dyn GeodeticCrs> {
        Some(&self.base)
    }

    fn conversion_from_base(&self) -> Option<&dyn CoordinateOperation> {
        Some(self)
    }
}

impl CoordinateOperation for LoopingProjection {
    fn source_crs(&self) -> Option<&dyn CoordinateReferenceSystem> {
        Some(&self.base)
    }

    fn target_crs(&self) -> Option<&dyn CoordinateReferenceSystem> {
        Some(self)
    }

    fn method(&self) -> Option<&dyn OperationMethod> {
        Some(&self.method)
    }

    fn form(&self) -> Option<OperationForm<'_>> {
        Some(OperationForm::Conversion(self))
    }
}

impl Conversion for LoopingProjection {}

/// A datum shift between two geodetic CRSs. The source, target and
/// version fields are optional so tests can remove the mandatory ones.
pub struct SimpleTransformation {
    pub name: SimpleIdentifier,
    pub source: Option<SimpleGeodeticCrs>,
    pub target: Option<SimpleGeodeticCrs>,
    pub version: Option<String>,
    pub method: SimpleMethod,
}

impl SimpleTransformation {
    pub fn datum_shift() -> Self {
        Self {
            name: SimpleIdentifier::new("WGS 72 to WGS 84"),
            source: Some(SimpleGeodeticCrs::wgs84()),
            target: Some(SimpleGeodeticCrs::wgs84()),
            version: Some("EPSG 1237".to_owned()),
            method: SimpleMethod::geocentric_translations(),
        }
    }
}

impl IdentifiedObject for SimpleTransformation {
    fn name(&self) -> Option<&dyn Identifier> {
        Some(&self.name)
    }
}

impl CoordinateOperation for SimpleTransformation {
    fn source_crs(&self) -> Option<&dyn CoordinateReferenceSystem> {
        self.source
            .as_ref()
            .map(|c| c as &dyn CoordinateReferenceSystem)
    }

    fn target_crs(&self) -> Option<&dyn CoordinateReferenceSystem> {
        self.target
            .as_ref()
            .map(|c| c as &dyn CoordinateReferenceSystem)
    }

    fn operation_version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    fn method(&self) -> Option<&dyn OperationMethod> {
        Some(&self.method)
    }

    fn form(&self) -> Option<OperationForm<'_>> {
        Some(OperationForm::Transformation(self))
    }
}

impl Transformation for SimpleTransformation {}

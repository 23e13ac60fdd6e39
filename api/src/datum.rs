//! Datums: the relationship of a coordinate system to the Earth
//! (or, for engineering datums, to some local reference).

use std::time::SystemTime;

use crate::object::IdentifiedObject;

/// The known refinements of [`Datum`].
pub enum DatumForm<'a> {
    /// A datum relating a coordinate system to the Earth through an
    /// ellipsoid and a prime meridian.
    Geodetic(&'a dyn GeodeticDatum),
    /// A datum for gravity-related heights or depths.
    Vertical(&'a dyn VerticalDatum),
    /// A datum fixing the origin of a time axis.
    Temporal(&'a dyn TemporalDatum),
    /// A datum relating a coordinate system to a local reference.
    Engineering(&'a dyn EngineeringDatum),
}

/// Abstract datum capability.
pub trait Datum: IdentifiedObject {
    /// Description of the point(s) used to anchor the datum.
    fn anchor_point(&self) -> Option<&str> {
        None
    }

    /// Time after which this datum definition is valid.
    fn realization_epoch(&self) -> Option<SystemTime> {
        None
    }

    /// The refinement this datum satisfies, or `None` for an opaque
    /// implementation.
    fn form(&self) -> Option<DatumForm<'_>> {
        None
    }
}

/// A datum based on an ellipsoid and a prime meridian.
pub trait GeodeticDatum: Datum {
    /// The ellipsoid approximating the shape of the Earth.
    fn ellipsoid(&self) -> Option<&dyn Ellipsoid>;

    /// The meridian longitudes are measured from.
    fn prime_meridian(&self) -> Option<&dyn PrimeMeridian>;
}

/// A datum for gravity-related heights or depths.
pub trait VerticalDatum: Datum {}

/// A datum fixing the origin of a time axis.
pub trait TemporalDatum: Datum {
    /// The date and time origin of the time axis. Mandatory; `None`
    /// is a conformance violation.
    fn origin(&self) -> Option<SystemTime>;
}

/// A datum relating a coordinate system to a local reference such as
/// a construction site or a moving platform.
pub trait EngineeringDatum: Datum {}

/// A geometric figure that approximates the shape of the Earth.
pub trait Ellipsoid: IdentifiedObject {
    /// Length of the semi-major axis, in the axis unit.
    fn semi_major_axis(&self) -> f64;

    /// Length of the semi-minor axis, in the axis unit.
    fn semi_minor_axis(&self) -> f64;

    /// Inverse flattening of the ellipsoid. Infinity for a sphere.
    fn inverse_flattening(&self) -> f64;

    /// Whether the inverse flattening, rather than the semi-minor
    /// axis, is the defining parameter.
    fn is_ivf_definitive(&self) -> bool {
        false
    }

    /// Whether both axes have the same length.
    fn is_sphere(&self) -> bool;

    /// Symbol of the linear unit the axis lengths are expressed in.
    fn axis_unit(&self) -> Option<&str>;
}

/// The origin meridian from which longitude values are determined.
pub trait PrimeMeridian: IdentifiedObject {
    /// Longitude of this meridian relative to Greenwich, in the
    /// angular unit, positive eastward.
    fn greenwich_longitude(&self) -> f64;

    /// Symbol of the angular unit the longitude is expressed in.
    fn angular_unit(&self) -> Option<&str>;
}

//! Coordinate reference systems: a coordinate system bound to the
//! Earth (or another reference) through a datum.

use crate::cs::CoordinateSystem;
use crate::datum::{EngineeringDatum, GeodeticDatum, TemporalDatum, VerticalDatum};
use crate::object::IdentifiedObject;
use crate::operation::CoordinateOperation;

/// The known refinements of [`CoordinateReferenceSystem`].
pub enum CrsForm<'a> {
    /// A CRS based on a geodetic datum (geographic or geocentric).
    Geodetic(&'a dyn GeodeticCrs),
    /// A 2- or 3-dimensional CRS derived from a geodetic CRS by a map
    /// projection.
    Projected(&'a dyn ProjectedCrs),
    /// A 1-dimensional CRS for gravity-related heights or depths.
    Vertical(&'a dyn VerticalCrs),
    /// A 1-dimensional CRS for time.
    Temporal(&'a dyn TemporalCrs),
    /// A contextually local CRS.
    Engineering(&'a dyn EngineeringCrs),
    /// A CRS made of two or more independent component CRSs.
    Compound(&'a dyn CompoundCrs),
}

/// Abstract coordinate reference system capability.
pub trait CoordinateReferenceSystem: IdentifiedObject {
    /// The coordinate system of this CRS. Mandatory for all
    /// non-compound refinements; `None` is a conformance violation.
    fn coordinate_system(&self) -> Option<&dyn CoordinateSystem>;

    /// The refinement this CRS satisfies, or `None` for an opaque
    /// implementation.
    fn form(&self) -> Option<CrsForm<'_>> {
        None
    }
}

/// A CRS based on a geodetic datum.
///
/// Its coordinate system is ellipsoidal (geographic), cartesian or
/// spherical (geocentric).
pub trait GeodeticCrs: CoordinateReferenceSystem {
    /// The geodetic datum of this CRS.
    fn datum(&self) -> Option<&dyn GeodeticDatum>;
}

/// A CRS derived from a geodetic CRS by a map projection.
pub trait ProjectedCrs: CoordinateReferenceSystem {
    /// The geodetic CRS this projection is applied to.
    fn base_crs(&self) -> Option<&dyn GeodeticCrs>;

    /// The conversion (map projection) from the base CRS.
    fn conversion_from_base(&self) -> Option<&dyn CoordinateOperation>;
}

/// A 1-dimensional CRS for gravity-related heights or depths.
pub trait VerticalCrs: CoordinateReferenceSystem {
    /// The vertical datum of this CRS.
    fn datum(&self) -> Option<&dyn VerticalDatum>;
}

/// A 1-dimensional CRS for time.
pub trait TemporalCrs: CoordinateReferenceSystem {
    /// The temporal datum of this CRS.
    fn datum(&self) -> Option<&dyn TemporalDatum>;
}

/// A contextually local CRS based on an engineering datum.
pub trait EngineeringCrs: CoordinateReferenceSystem {
    /// The engineering datum of this CRS.
    fn datum(&self) -> Option<&dyn EngineeringDatum>;
}

/// A CRS made of two or more independent component CRSs.
///
/// A compound CRS has no single coordinate system or datum of its own;
/// its coordinate space is the concatenation of its components'.
pub trait CompoundCrs: CoordinateReferenceSystem {
    /// The ordered component CRSs.
    fn components(&self) -> Vec<&dyn CoordinateReferenceSystem>;
}

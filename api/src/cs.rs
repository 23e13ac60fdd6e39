//! Coordinate systems and their axes.

use crate::object::IdentifiedObject;

/// Direction of positive increments along a coordinate system axis.
///
/// Derived from the ISO 19111 axis-direction code list. Most
/// directions come in opposite pairs; [`Other`](AxisDirection::Other)
/// is its own opposite and the geocentric directions have none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisDirection {
    /// Unknown or unspecified axis orientation.
    Other,
    /// Axis positive direction is north.
    North,
    /// Approximately north-north-east.
    NorthNorthEast,
    /// Approximately north-east.
    NorthEast,
    /// Approximately east-north-east.
    EastNorthEast,
    /// Axis positive direction is π/2 radians clockwise from north.
    East,
    /// Approximately east-south-east.
    EastSouthEast,
    /// Approximately south-east.
    SouthEast,
    /// Approximately south-south-east.
    SouthSouthEast,
    /// Axis positive direction is π radians clockwise from north.
    South,
    /// Approximately south-south-west.
    SouthSouthWest,
    /// Approximately south-west.
    SouthWest,
    /// Approximately west-south-west.
    WestSouthWest,
    /// Axis positive direction is 3π/2 radians clockwise from north.
    West,
    /// Approximately west-north-west.
    WestNorthWest,
    /// Approximately north-west.
    NorthWest,
    /// Approximately north-north-west.
    NorthNorthWest,
    /// Axis positive direction is up relative to gravity.
    Up,
    /// Axis positive direction is down relative to gravity.
    Down,
    /// Axis positive direction is towards the future.
    Future,
    /// Axis positive direction is towards the past.
    Past,
    /// Axis positive direction is towards the intersection of the
    /// equator and the prime meridian.
    GeocentricX,
    /// Axis positive direction is π/2 radians east of the geocentric X axis.
    GeocentricY,
    /// Axis positive direction is towards the north pole.
    GeocentricZ,
}

impl AxisDirection {
    /// The direction opposite to this one, when one is defined.
    ///
    /// `Other` is defined as its own opposite; the geocentric
    /// directions have no opposite in the code list.
    #[must_use]
    pub fn opposite(self) -> Option<AxisDirection> {
        use AxisDirection::*;
        Some(match self {
            Other => Other,
            North => South,
            South => North,
            NorthNorthEast => SouthSouthWest,
            SouthSouthWest => NorthNorthEast,
            NorthEast => SouthWest,
            SouthWest => NorthEast,
            EastNorthEast => WestSouthWest,
            WestSouthWest => EastNorthEast,
            East => West,
            West => East,
            EastSouthEast => WestNorthWest,
            WestNorthWest => EastSouthEast,
            SouthEast => NorthWest,
            NorthWest => SouthEast,
            SouthSouthEast => NorthNorthWest,
            NorthNorthWest => SouthSouthEast,
            Up => Down,
            Down => Up,
            Future => Past,
            Past => Future,
            GeocentricX | GeocentricY | GeocentricZ => return None,
        })
    }
}

/// A single axis of a coordinate system.
pub trait CoordinateSystemAxis: IdentifiedObject {
    /// The abbreviation used for this axis (e.g. `"φ"`, `"X"`, `"h"`).
    fn abbreviation(&self) -> Option<&str>;

    /// Direction of positive increments along this axis.
    fn direction(&self) -> Option<AxisDirection>;

    /// Symbol of the unit coordinate values are expressed in.
    fn unit(&self) -> Option<&str>;

    /// Minimum coordinate value normally found on this axis.
    fn minimum_value(&self) -> f64 {
        f64::NEG_INFINITY
    }

    /// Maximum coordinate value normally found on this axis.
    fn maximum_value(&self) -> f64 {
        f64::INFINITY
    }
}

/// The known refinements of [`CoordinateSystem`].
///
/// The standard defines coordinate-system refinements as marker
/// interfaces constraining dimension and axis content; a plain tag is
/// enough to identify them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CsForm {
    /// 1-, 2- or 3-dimensional system with mutually perpendicular straight axes.
    Cartesian,
    /// 2- or 3-dimensional system of geodetic latitude, longitude and
    /// optionally ellipsoidal height.
    Ellipsoidal,
    /// 3-dimensional system of two angles and a radius.
    Spherical,
    /// 3-dimensional system of a polar base and a perpendicular straight axis.
    Cylindrical,
    /// 2-dimensional system of an angle and a radius.
    Polar,
    /// 1-dimensional system of a single straight axis.
    Linear,
    /// 1-dimensional system recording height or depth.
    Vertical,
    /// 1-dimensional system recording time.
    Temporal,
    /// A system that matches none of the standard refinements.
    UserDefined,
}

/// A set of axes spanning a coordinate space.
pub trait CoordinateSystem: IdentifiedObject {
    /// Number of axes in this coordinate system.
    fn dimension(&self) -> usize;

    /// The axis at the given index, or `None` when out of range.
    fn axis(&self, index: usize) -> Option<&dyn CoordinateSystemAxis>;

    /// The refinement this coordinate system satisfies, or `None` for
    /// an opaque implementation.
    fn form(&self) -> Option<CsForm> {
        None
    }
}

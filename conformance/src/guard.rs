//! Cycle tolerance for recursive graph traversal.
//!
//! Implementation object graphs may legally contain cycles — a
//! projected CRS references a conversion whose source CRS references
//! the projection's base. A [`Guard`] lives for one top-level
//! validation call and records every object already entered; a second
//! visit is a silent no-op, not a violation.

use std::collections::HashSet;

/// The validation category an object was visited under.
///
/// Addresses are only comparable within a category: a struct shares
/// its address with its first field, so a bare address could conflate
/// an object with an embedded object of a different category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Realm {
    /// Parameter descriptors (single or group).
    Descriptor,
    /// Parameter values (single or group).
    ParameterValue,
    /// Coordinate system axes.
    Axis,
    /// Coordinate systems.
    CoordinateSystem,
    /// Datums.
    Datum,
    /// Ellipsoids.
    Ellipsoid,
    /// Prime meridians.
    Meridian,
    /// Coordinate reference systems.
    ReferenceSystem,
    /// Coordinate operations.
    Operation,
    /// Operation methods.
    Method,
}

/// Visited-object set for a single top-level validation call.
#[derive(Debug, Default)]
pub struct Guard {
    visited: HashSet<(Realm, usize)>,
}

impl Guard {
    /// Records a visit. Returns `true` on the first visit of this
    /// object under this realm, `false` when the object was already
    /// entered (the caller must then skip it).
    pub fn first_visit<T: ?Sized>(&mut self, realm: Realm, object: &T) -> bool {
        let address = std::ptr::from_ref(object).cast::<()>() as usize;
        self.visited.insert((realm, address))
    }
}

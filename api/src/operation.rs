//! Coordinate operations: mathematical relations between two
//! coordinate reference systems.

use crate::crs::CoordinateReferenceSystem;
use crate::object::IdentifiedObject;
use crate::parameter::{ParameterDescriptorGroup, ParameterValueGroup};

/// The known refinements of [`CoordinateOperation`].
pub enum OperationForm<'a> {
    /// An operation fully defined by its parameter values, such as a
    /// map projection. Conversions carry no operation version.
    Conversion(&'a dyn Conversion),
    /// An empirically derived operation between two datums. The
    /// operation version identifying the derivation is mandatory.
    Transformation(&'a dyn Transformation),
}

/// Abstract coordinate operation capability.
pub trait CoordinateOperation: IdentifiedObject {
    /// The CRS coordinates are converted or transformed from.
    fn source_crs(&self) -> Option<&dyn CoordinateReferenceSystem> {
        None
    }

    /// The CRS coordinates are converted or transformed to.
    fn target_crs(&self) -> Option<&dyn CoordinateReferenceSystem> {
        None
    }

    /// Version of the parameter derivation. Mandatory for
    /// transformations, forbidden for conversions.
    fn operation_version(&self) -> Option<&str> {
        None
    }

    /// The algorithm used by this operation.
    fn method(&self) -> Option<&dyn OperationMethod> {
        None
    }

    /// The parameter values this operation applies its method with.
    fn parameter_values(&self) -> Option<&dyn ParameterValueGroup> {
        None
    }

    /// The refinement this operation satisfies, or `None` for an
    /// opaque implementation.
    fn form(&self) -> Option<OperationForm<'_>> {
        None
    }
}

/// An operation fully defined by its parameter values.
pub trait Conversion: CoordinateOperation {}

/// An empirically derived operation between two datums.
pub trait Transformation: CoordinateOperation {}

/// The algorithm applied by a coordinate operation.
pub trait OperationMethod: IdentifiedObject {
    /// Formula or procedure, possibly a citation to a publication.
    fn formula(&self) -> Option<&str> {
        None
    }

    /// The descriptors of the parameters this method expects.
    fn parameters(&self) -> Option<&dyn ParameterDescriptorGroup>;

    /// Number of source dimensions, when fixed by the method.
    fn source_dimensions(&self) -> Option<usize> {
        None
    }

    /// Number of target dimensions, when fixed by the method.
    fn target_dimensions(&self) -> Option<usize> {
        None
    }
}

//! The generic identified-object capability.

use crate::naming::Identifier;

/// Any domain entity exposing a name and optional identifiers.
///
/// This is the fallback surface validated when no more specific
/// capability applies: an object whose `form()` is `None` still gets
/// its name and identifiers checked.
///
/// The name is mandatory in the underlying standard; it is modeled as
/// `Option` here so that a non-conformant implementation returning
/// nothing can be detected and reported rather than made unrepresentable.
pub trait IdentifiedObject {
    /// The primary name of this object.
    fn name(&self) -> Option<&dyn Identifier>;

    /// Alternative identifiers, possibly from other authorities.
    fn identifiers(&self) -> Vec<&dyn Identifier> {
        Vec::new()
    }

    /// Alternative names by which this object is known.
    fn aliases(&self) -> Vec<String> {
        Vec::new()
    }

    /// Comments on or information about this object.
    fn remarks(&self) -> Option<&str> {
        None
    }
}

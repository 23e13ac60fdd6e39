//! Parameter descriptors and parameter values.
//!
//! A *descriptor* is the metadata describing a parameter (its value
//! kind, range and default); a *value* is a concrete setting paired
//! with its descriptor. Both sides come in single and group flavors,
//! joined under the `General*` abstractions the dispatch protocol
//! operates on.

use crate::object::IdentifiedObject;
use crate::value::{Value, ValueKind};

/// The known refinements of [`GeneralParameterDescriptor`].
pub enum DescriptorForm<'a> {
    /// A single-valued parameter descriptor.
    Value(&'a dyn ParameterDescriptor),
    /// A group of parameter descriptors.
    Group(&'a dyn ParameterDescriptorGroup),
}

/// Abstract definition of a parameter or group of parameters.
pub trait GeneralParameterDescriptor: IdentifiedObject {
    /// Minimum number of times values for this descriptor are required.
    fn minimum_occurs(&self) -> usize;

    /// Maximum number of times values for this descriptor can be included.
    fn maximum_occurs(&self) -> usize;

    /// The refinement this descriptor satisfies, or `None` for an
    /// opaque implementation that only supports the generic
    /// identified-object contract.
    fn form(&self) -> Option<DescriptorForm<'_>> {
        None
    }
}

/// Definition of a single-valued parameter.
pub trait ParameterDescriptor: GeneralParameterDescriptor {
    /// The kind of values described by this descriptor. Mandatory;
    /// `None` is a conformance violation.
    fn value_kind(&self) -> Option<ValueKind>;

    /// The set of permitted values, or `None` when unrestricted.
    fn valid_values(&self) -> Option<Vec<Value>> {
        None
    }

    /// The minimum permitted value, inclusive.
    fn minimum_value(&self) -> Option<Value> {
        None
    }

    /// The maximum permitted value, inclusive.
    fn maximum_value(&self) -> Option<Value> {
        None
    }

    /// The value used when none is supplied.
    fn default_value(&self) -> Option<Value> {
        None
    }
}

/// Definition of a group of related parameters.
pub trait ParameterDescriptorGroup: GeneralParameterDescriptor {
    /// The descriptors contained in this group, in declaration order.
    fn descriptors(&self) -> Vec<&dyn GeneralParameterDescriptor>;

    /// Looks up a contained descriptor by the code of its name.
    ///
    /// Must be consistent with
    /// [`descriptors`](ParameterDescriptorGroup::descriptors): looking
    /// up the name of a declared descriptor must return an equal
    /// descriptor.
    fn descriptor(&self, name: &str) -> Option<&dyn GeneralParameterDescriptor>;
}

/// The known refinements of [`GeneralParameterValue`].
pub enum ParamValueForm<'a> {
    /// A single parameter value.
    Value(&'a dyn ParameterValue),
    /// A group of parameter values.
    Group(&'a dyn ParameterValueGroup),
}

/// Abstract parameter value or group of parameter values.
pub trait GeneralParameterValue {
    /// The descriptor this value conforms to. Mandatory; `None` is a
    /// conformance violation.
    fn general_descriptor(&self) -> Option<&dyn GeneralParameterDescriptor>;

    /// The refinement this value satisfies, or `None` for an opaque
    /// implementation.
    fn form(&self) -> Option<ParamValueForm<'_>> {
        None
    }
}

/// A single parameter value.
pub trait ParameterValue: GeneralParameterValue {
    /// The descriptor of this parameter.
    fn descriptor(&self) -> Option<&dyn ParameterDescriptor>;

    /// The value, or `None` when not set.
    fn value(&self) -> Option<Value>;
}

/// A group of parameter values.
pub trait ParameterValueGroup: GeneralParameterValue {
    /// The descriptor of this group.
    fn descriptor(&self) -> Option<&dyn ParameterDescriptorGroup>;

    /// The values contained in this group.
    fn values(&self) -> Vec<&dyn GeneralParameterValue>;

    /// Looks up a contained single value by the code of its
    /// descriptor's name.
    ///
    /// Must be consistent with
    /// [`values`](ParameterValueGroup::values): looking up the name of
    /// a declared single value must return an equal value.
    fn parameter(&self, name: &str) -> Option<&dyn ParameterValue>;
}

/// Compares the names of two identified objects.
///
/// Names match when both are absent, or both are present with equal
/// codes and equal (possibly absent) code spaces.
#[must_use]
pub fn names_match(a: &dyn IdentifiedObject, b: &dyn IdentifiedObject) -> bool {
    match (a.name(), b.name()) {
        (None, None) => true,
        (Some(x), Some(y)) => x.code() == y.code() && x.code_space() == y.code_space(),
        _ => false,
    }
}

/// Structural equality between two descriptors.
///
/// The conformance invariants relating the two access paths of a group
/// (`descriptors()` versus `descriptor(name)`) are equals-consistency
/// requirements, not reference-identity requirements: an
/// implementation may hand out distinct but equal objects. Identical
/// references short-circuit; otherwise names, occurrence bounds and
/// the per-form attributes are compared, recursively for groups.
#[must_use]
pub fn descriptors_match(
    a: &dyn GeneralParameterDescriptor,
    b: &dyn GeneralParameterDescriptor,
) -> bool {
    if std::ptr::eq(
        (a as *const dyn GeneralParameterDescriptor).cast::<()>(),
        (b as *const dyn GeneralParameterDescriptor).cast::<()>(),
    ) {
        return true;
    }
    if a.minimum_occurs() != b.minimum_occurs() || a.maximum_occurs() != b.maximum_occurs() {
        return false;
    }
    if !names_match(a, b) {
        return false;
    }
    match (a.form(), b.form()) {
        (Some(DescriptorForm::Value(x)), Some(DescriptorForm::Value(y))) => {
            x.value_kind() == y.value_kind()
                && optional_values_match(x.minimum_value().as_ref(), y.minimum_value().as_ref())
                && optional_values_match(x.maximum_value().as_ref(), y.maximum_value().as_ref())
                && optional_values_match(x.default_value().as_ref(), y.default_value().as_ref())
                && value_sets_match(x.valid_values().as_deref(), y.valid_values().as_deref())
        }
        (Some(DescriptorForm::Group(x)), Some(DescriptorForm::Group(y))) => {
            let xs = x.descriptors();
            let ys = y.descriptors();
            xs.len() == ys.len()
                && xs
                    .iter()
                    .zip(ys.iter())
                    .all(|(m, n)| descriptors_match(*m, *n))
        }
        (None, None) => true,
        _ => false,
    }
}

/// Structural equality between two parameter values.
///
/// Same contract as [`descriptors_match`], extended to the value side:
/// equal values have equal descriptors and equal payloads.
#[must_use]
pub fn values_match(a: &dyn GeneralParameterValue, b: &dyn GeneralParameterValue) -> bool {
    if std::ptr::eq(
        (a as *const dyn GeneralParameterValue).cast::<()>(),
        (b as *const dyn GeneralParameterValue).cast::<()>(),
    ) {
        return true;
    }
    match (a.general_descriptor(), b.general_descriptor()) {
        (None, None) => {}
        (Some(x), Some(y)) => {
            if !descriptors_match(x, y) {
                return false;
            }
        }
        _ => return false,
    }
    match (a.form(), b.form()) {
        (Some(ParamValueForm::Value(x)), Some(ParamValueForm::Value(y))) => {
            optional_values_match(x.value().as_ref(), y.value().as_ref())
        }
        (Some(ParamValueForm::Group(x)), Some(ParamValueForm::Group(y))) => {
            let xs = x.values();
            let ys = y.values();
            xs.len() == ys.len() && xs.iter().zip(ys.iter()).all(|(m, n)| values_match(*m, *n))
        }
        (None, None) => true,
        _ => false,
    }
}

/// Comparison of two optional values under [`Value::same_as`]
/// semantics (a real NaN equals a real NaN).
fn optional_values_match(a: Option<&Value>, b: Option<&Value>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(x), Some(y)) => x.same_as(y),
        _ => false,
    }
}

/// Order-insensitive comparison of two optional valid-value sets.
fn value_sets_match(a: Option<&[Value]>, b: Option<&[Value]>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(xs), Some(ys)) => {
            xs.len() == ys.len()
                && xs.iter().all(|x| ys.iter().any(|y| x.same_as(y)))
                && ys.iter().all(|y| xs.iter().any(|x| x.same_as(y)))
        }
        _ => false,
    }
}

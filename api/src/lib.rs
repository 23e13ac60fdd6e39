//! Abstract capability interfaces for geospatial referencing objects.
//!
//! The `georef-api` crate defines the traits an implementation of a
//! geospatial referencing API exposes to the conformance harness:
//! identified objects, identifiers and generic names, parameter
//! descriptors and values, coordinate systems and axes, datums,
//! coordinate reference systems, and coordinate operations.
//!
//! Implementations are opaque to the harness beyond these traits.
//! Each abstract category carries a closed *form* enumeration
//! ([`parameter::DescriptorForm`], [`cs::CsForm`], [`crs::CrsForm`], …)
//! through which a concrete object declares which refinement of the
//! category it satisfies; `form()` returning `None` marks an opaque
//! object that only supports the generic identified-object contract.
//!
//! # Example
//!
//! ```
//! use georef_api::value::{Value, ValueKind};
//!
//! let v = Value::Real(45.0);
//! assert_eq!(v.kind(), ValueKind::Real);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod crs;
pub mod cs;
pub mod datum;
pub mod naming;
pub mod object;
pub mod operation;
pub mod parameter;
pub mod value;

pub use naming::{GenericName, Identifier};
pub use object::IdentifiedObject;
pub use value::{Value, ValueKind};

//! Domain validators, one per category of the data model.
//!
//! Each category is a trait so test harnesses can substitute their own
//! implementation in a [`ValidatorContainer`](crate::ValidatorContainer);
//! the `*Validator` structs are the default implementations. Validators
//! hold no traversal state: the registry and the cycle guard are passed
//! to every call.

pub mod crs;
pub mod cs;
pub mod datum;
pub mod naming;
pub mod operation;
pub mod parameter;

pub use crs::{CrsValidator, ValidateReferenceSystems};
pub use cs::{CsValidator, ValidateCoordinateSystems};
pub use datum::{DatumValidator, ValidateDatums};
pub use naming::{NamingValidator, ValidateNaming};
pub use operation::{OperationValidator, ValidateOperations};
pub use parameter::{ParameterValidator, ValidateParameters};

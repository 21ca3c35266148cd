//! Domain error types

mod domain_error;
mod mapping_error;
mod validation_error;

pub use domain_error::DomainError;
pub use mapping_error::MappingError;
pub use validation_error::{FieldViolation, ValidationError, ViolationKind};

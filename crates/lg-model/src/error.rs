//! Model errors.

use lg_core::LgError;
use thiserror::Error;

/// Result type for checked model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised by the checked model entry points.
///
/// The scalar kernels never fail; they propagate non-finite values instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Value out of the range where a closed form is defined.
    #[error("Value out of range for {what}: {value}")]
    OutOfRange { what: &'static str, value: f64 },
}

impl From<ModelError> for LgError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::OutOfRange { what, value } => LgError::InvalidArg {
                what: format!("model value out of range: {what} = {value}"),
            },
        }
    }
}

//! Error types for solver operations.

use lg_core::error::LgError;
use lg_model::ModelError;
use thiserror::Error;

/// Errors that can occur while locating equilibrium states.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Temperature outside the regime the entry point handles.
    #[error("Domain error: {what}")]
    Domain { what: String },

    #[error("Invalid input: {what}")]
    InvalidInput { what: String },

    #[error("Convergence failed: {what}")]
    ConvergenceFailed { what: String },

    /// Neither branch was admissible at a subcritical point.
    #[error("No equilibrium state found at temperature {temperature}, chemical potential {chem_pot}")]
    NoEquilibriumState { temperature: f64, chem_pot: f64 },

    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for LgError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::Domain { what } => LgError::InvalidArg {
                what: format!("domain: {what}"),
            },
            SolverError::InvalidInput { what } => LgError::InvalidArg { what },
            SolverError::ConvergenceFailed { what } => LgError::Invariant {
                what: format!("convergence: {what}"),
            },
            SolverError::NoEquilibriumState {
                temperature,
                chem_pot,
            } => LgError::Invariant {
                what: format!("no equilibrium state at T = {temperature}, mu = {chem_pot}"),
            },
            SolverError::Model(m) => m.into(),
        }
    }
}

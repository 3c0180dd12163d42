//! Error types for diagram construction and output.

use lg_core::LgError;
use lg_model::ModelError;
use lg_solver::SolverError;

/// Errors raised while building, rendering or writing a phase diagram.
#[derive(Debug, thiserror::Error)]
pub enum DiagramError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Solver failed at temperature {temperature}, chemical potential {chem_pot}: {source}")]
    Solver {
        temperature: f64,
        chem_pot: f64,
        #[source]
        source: SolverError,
    },

    #[error("Equilibrium error: {0}")]
    Equilibrium(#[from] SolverError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error(transparent)]
    Core(#[from] LgError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for lg-diagram operations.
pub type DiagramResult<T> = Result<T, DiagramError>;

//! Equilibrium-state solver for the mean-field lattice gas.
//!
//! Given a temperature and chemical potential, this crate finds the density
//! that minimizes the free energy of [`lg_model`]. Above the critical
//! temperature there is a single basin on `[0, 1]`. Below it, the gas and
//! liquid branches are searched separately on intervals bounded by the
//! closed-form metastability limits, and the branch with the lower free
//! energy is the equilibrium.

pub mod brent;
pub mod equilibrium;
pub mod error;

pub use brent::{BrentConfig, BrentResult, minimize_bounded};
pub use equilibrium::{
    Branch, EquilibriumSolver, Regime, State, find_equilibrium_state, find_subcritical_states,
    find_supercritical_state,
};
pub use error::{SolverError, SolverResult};

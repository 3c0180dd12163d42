//! lg-model: closed-form thermodynamics of the mean-field lattice gas.
//!
//! Provides:
//! - Free energy density and its first two density derivatives
//! - Metastability (spinodal) boundary densities and chemical potentials
//! - Sequence wrappers over the scalar kernels
//! - A checked [`MetastableWindow`] for subcritical temperatures
//!
//! Everything is dimensionless and normalized so the critical point sits at
//! `T = 1`, `mu = -2`, `rho = 0.5`.
//!
//! # Example
//!
//! ```
//! use lg_model::{free_energy, max_gas_density, min_liq_density};
//!
//! let f = free_energy(0.25, 0.8, -2.0);
//! assert!(f.is_finite());
//! assert!(max_gas_density(0.8) < min_liq_density(0.8));
//! ```

pub mod each;
pub mod error;
pub mod thermo;
pub mod window;

pub use each::{
    dfree_energy_each, ddfree_energy_each, free_energy_each, max_gas_chem_pot_each,
    max_gas_density_each, min_liq_chem_pot_each, min_liq_density_each,
};
pub use error::{ModelError, ModelResult};
pub use thermo::{
    CRITICAL_CHEM_POT, CRITICAL_DENSITY, CRITICAL_TEMPERATURE, dfree_energy, ddfree_energy,
    entropy, free_energy, is_locally_stable, max_gas_chem_pot, max_gas_density, min_liq_chem_pot,
    min_liq_density,
};
pub use window::MetastableWindow;

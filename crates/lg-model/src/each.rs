//! Sequence wrappers over the scalar kernels in [`crate::thermo`].
//!
//! Each function maps one scalar kernel over a slice; the kernels remain the
//! only place the formulas live.

use crate::thermo;
use lg_core::Real;

fn map(values: &[Real], f: impl Fn(Real) -> Real) -> Vec<Real> {
    values.iter().map(|&v| f(v)).collect()
}

/// [`thermo::free_energy`] at each density.
pub fn free_energy_each(densities: &[Real], t: Real, mu: Real) -> Vec<Real> {
    map(densities, |rho| thermo::free_energy(rho, t, mu))
}

/// [`thermo::dfree_energy`] at each density.
pub fn dfree_energy_each(densities: &[Real], t: Real, mu: Real) -> Vec<Real> {
    map(densities, |rho| thermo::dfree_energy(rho, t, mu))
}

/// [`thermo::ddfree_energy`] at each density.
pub fn ddfree_energy_each(densities: &[Real], t: Real, mu: Real) -> Vec<Real> {
    map(densities, |rho| thermo::ddfree_energy(rho, t, mu))
}

/// [`thermo::max_gas_density`] at each temperature.
pub fn max_gas_density_each(temperatures: &[Real]) -> Vec<Real> {
    map(temperatures, thermo::max_gas_density)
}

/// [`thermo::min_liq_density`] at each temperature.
pub fn min_liq_density_each(temperatures: &[Real]) -> Vec<Real> {
    map(temperatures, thermo::min_liq_density)
}

/// [`thermo::max_gas_chem_pot`] at each temperature.
pub fn max_gas_chem_pot_each(temperatures: &[Real]) -> Vec<Real> {
    map(temperatures, thermo::max_gas_chem_pot)
}

/// [`thermo::min_liq_chem_pot`] at each temperature.
pub fn min_liq_chem_pot_each(temperatures: &[Real]) -> Vec<Real> {
    map(temperatures, thermo::min_liq_chem_pot)
}

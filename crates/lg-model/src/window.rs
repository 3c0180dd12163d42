//! Checked bundle of the subcritical metastability boundaries.

use crate::error::{ModelError, ModelResult};
use crate::thermo::{
    CRITICAL_TEMPERATURE, max_gas_chem_pot, max_gas_density, min_liq_chem_pot, min_liq_density,
};
use lg_core::Real;

/// Metastability limits of both branches at one subcritical temperature.
///
/// The gas branch exists for `chem_pot <= max_gas_chem_pot` with densities in
/// `[0, max_gas_density]`; the liquid branch exists for
/// `chem_pot >= min_liq_chem_pot` with densities in `[min_liq_density, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetastableWindow {
    pub temperature: Real,
    pub max_gas_density: Real,
    pub min_liq_density: Real,
    pub max_gas_chem_pot: Real,
    pub min_liq_chem_pot: Real,
}

impl MetastableWindow {
    /// Evaluate the window; requires `0 < t < 1`.
    pub fn at(t: Real) -> ModelResult<Self> {
        if !(t > 0.0 && t < CRITICAL_TEMPERATURE) {
            return Err(ModelError::OutOfRange {
                what: "subcritical temperature",
                value: t,
            });
        }
        Ok(Self {
            temperature: t,
            max_gas_density: max_gas_density(t),
            min_liq_density: min_liq_density(t),
            max_gas_chem_pot: max_gas_chem_pot(t),
            min_liq_chem_pot: min_liq_chem_pot(t),
        })
    }

    /// Whether both branches are admissible at `chem_pot`.
    pub fn is_coexistence(&self, chem_pot: Real) -> bool {
        chem_pot >= self.min_liq_chem_pot && chem_pot <= self.max_gas_chem_pot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_at_subcritical_temperature() {
        let w = MetastableWindow::at(0.8).unwrap();
        assert!(w.max_gas_density < w.min_liq_density);
        assert!(w.min_liq_chem_pot < w.max_gas_chem_pot);
        assert!(w.is_coexistence(-2.0));
        assert!(!w.is_coexistence(-3.0));
        assert!(!w.is_coexistence(-1.0));
    }

    #[test]
    fn window_rejects_degenerate_temperatures() {
        for t in [0.0, -0.1, 1.0, 1.5, Real::NAN] {
            let err = MetastableWindow::at(t).unwrap_err();
            assert!(matches!(err, ModelError::OutOfRange { .. }));
        }
    }
}

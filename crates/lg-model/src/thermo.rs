//! Scalar kernels of the mean-field lattice-gas free energy.
//!
//! The free energy density at density `rho`, temperature `t` and chemical
//! potential `mu` is
//!
//! ```text
//! F(rho) = -rho (2 rho + mu) - t S(rho)
//! S(rho) = -rho ln(rho) - (1 - rho) ln(1 - rho)
//! ```
//!
//! Below the critical temperature `F` has two convex basins separated by a
//! concave (spinodal) region. The boundary densities and chemical potentials
//! of that region are available in closed form, so callers never need to
//! differentiate numerically or search globally.

use lg_core::{Real, xlogy};

/// Critical temperature; the model is normalized so this is exactly one.
pub const CRITICAL_TEMPERATURE: Real = 1.0;

/// Chemical potential at the critical point.
pub const CRITICAL_CHEM_POT: Real = -2.0;

/// Density at the critical point.
pub const CRITICAL_DENSITY: Real = 0.5;

/// Binary mixing entropy, with `0 ln 0 = 0` at both endpoints.
#[inline]
pub fn entropy(rho: Real) -> Real {
    -xlogy(rho, rho) - xlogy(1.0 - rho, 1.0 - rho)
}

/// Free energy density `F(rho; t, mu)`.
///
/// Finite on the closed interval `[0, 1]`.
#[inline]
pub fn free_energy(rho: Real, t: Real, mu: Real) -> Real {
    let energy = -rho * (2.0 * rho + mu);
    energy - t * entropy(rho)
}

/// First density derivative `dF/drho`.
///
/// Diverges at `rho = 0` and `rho = 1`; keep `rho` strictly interior.
#[inline]
pub fn dfree_energy(rho: Real, t: Real, mu: Real) -> Real {
    let energy = -4.0 * rho - mu;
    let entropy = -rho.ln() + (1.0 - rho).ln();
    energy - t * entropy
}

/// Second density derivative `d2F/drho2`. Independent of `mu`.
#[inline]
pub fn ddfree_energy(rho: Real, t: Real, _mu: Real) -> Real {
    -4.0 + t / (rho * (1.0 - rho))
}

/// Whether `F` is locally convex at `rho`, i.e. outside the spinodal region.
#[inline]
pub fn is_locally_stable(rho: Real, t: Real) -> bool {
    ddfree_energy(rho, t, CRITICAL_CHEM_POT) > 0.0
}

/// Largest density on the gas-like metastable branch: `(1 - sqrt(1 - t)) / 2`.
///
/// Evaluated as `t / (2 (1 + sqrt(1 - t)))` to avoid cancellation at small
/// `t`. Equals `0.5` at `t = 1`; NaN above.
#[inline]
pub fn max_gas_density(t: Real) -> Real {
    let rt = (1.0 - t).sqrt();
    0.5 * t / (1.0 + rt)
}

/// Smallest density on the liquid-like metastable branch: `(1 + sqrt(1 - t)) / 2`.
#[inline]
pub fn min_liq_density(t: Real) -> Real {
    let rt = (1.0 - t).sqrt();
    0.5 * (1.0 + rt)
}

/// Chemical potential at which the gas branch reaches [`max_gas_density`].
///
/// `-2 + 2 sqrt(1 - t) + t ln((2 - t - 2 sqrt(1 - t)) / t)`. The log argument
/// equals `t / (1 + sqrt(1 - t))^2`; its logarithm is taken term by term so
/// subnormal `t` stays finite. Requires `0 < t < 1` for a finite, meaningful
/// value; `t <= 0` yields NaN.
#[inline]
pub fn max_gas_chem_pot(t: Real) -> Real {
    let rt = (1.0 - t).sqrt();
    let one_plus = 1.0 + rt;
    -2.0 + 2.0 * rt + t * (t.ln() - 2.0 * one_plus.ln())
}

/// Chemical potential at which the liquid branch reaches [`min_liq_density`].
///
/// `-2 - 2 sqrt(1 - t) + t ln((2 - t + 2 sqrt(1 - t)) / t)`, the mirror image
/// of [`max_gas_chem_pot`] about `mu = -2`.
#[inline]
pub fn min_liq_chem_pot(t: Real) -> Real {
    let rt = (1.0 - t).sqrt();
    let one_plus = 1.0 + rt;
    -2.0 - 2.0 * rt + t * (2.0 * one_plus.ln() - t.ln())
}

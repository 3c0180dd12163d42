//! Regime-aware equilibrium search.
//!
//! Above the critical temperature the free energy is convex on `[0, 1]` and a
//! single bounded minimization finds the equilibrium. Below it, each branch is
//! searched only when the chemical potential admits it, on the interval
//! between the pure phase and that branch's spinodal density, where the free
//! energy is convex again. Competing candidates are ranked by free energy.

use crate::brent::{BrentConfig, minimize_bounded};
use crate::error::{SolverError, SolverResult};
use lg_core::{Real, ensure_finite};
use lg_model::{
    CRITICAL_TEMPERATURE, free_energy, max_gas_chem_pot, max_gas_density, min_liq_chem_pot,
    min_liq_density,
};
use tracing::debug;

/// Branch of the free-energy landscape a state was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Branch {
    Supercritical,
    Gas,
    Liquid,
}

impl Branch {
    pub fn label(self) -> &'static str {
        match self {
            Self::Supercritical => "supercritical",
            Self::Gas => "gas",
            Self::Liquid => "liquid",
        }
    }
}

/// Thermodynamic regime of a temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// `t >= 1`: a single minimum.
    Supercritical,
    /// `t < 1`: up to two competing minima.
    Subcritical,
}

impl Regime {
    pub fn classify(t: Real) -> Self {
        if t >= CRITICAL_TEMPERATURE {
            Self::Supercritical
        } else {
            Self::Subcritical
        }
    }
}

/// A local free-energy minimum.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    pub density: Real,
    pub free_energy: Real,
    pub branch: Branch,
}

/// Equilibrium solver with configurable minimizer settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct EquilibriumSolver {
    pub config: BrentConfig,
}

impl EquilibriumSolver {
    pub fn new(config: BrentConfig) -> Self {
        Self { config }
    }

    fn find_state(
        &self,
        t: Real,
        mu: Real,
        branch: Branch,
        bounds: (Real, Real),
    ) -> SolverResult<State> {
        let (lower, upper) = bounds;
        let result = minimize_bounded(|rho| free_energy(rho, t, mu), lower, upper, &self.config)?;
        debug!(
            t,
            mu,
            branch = branch.label(),
            density = result.x,
            free_energy = result.fx,
            "located branch minimum"
        );
        Ok(State {
            density: result.x,
            free_energy: result.fx,
            branch,
        })
    }

    /// Single-basin search on `[0, 1]`. Requires `t >= 1`.
    ///
    /// At `(1, -2)` the free energy is flat to fourth order around
    /// `density = 0.5`, and the located density is accurate to about `1e-4`
    /// rather than `1e-6`. See [`BrentConfig`].
    pub fn supercritical_state(&self, t: Real, mu: Real) -> SolverResult<State> {
        check_inputs(t, mu)?;
        if t < CRITICAL_TEMPERATURE {
            return Err(SolverError::Domain {
                what: format!("no supercritical state for temperature {t} < 1"),
            });
        }
        self.find_state(t, mu, Branch::Supercritical, (0.0, 1.0))
    }

    /// Every admissible branch minimum, gas first. Requires `t <= 1`.
    ///
    /// A branch whose threshold chemical potential is not finite (`t <= 0`)
    /// is treated as inadmissible, so the result may be empty.
    pub fn subcritical_states(&self, t: Real, mu: Real) -> SolverResult<Vec<State>> {
        check_inputs(t, mu)?;
        if t > CRITICAL_TEMPERATURE {
            return Err(SolverError::Domain {
                what: format!("no subcritical state for temperature {t} > 1"),
            });
        }

        let mut states = Vec::with_capacity(2);

        let gas_limit = max_gas_chem_pot(t);
        if gas_limit.is_finite() && mu <= gas_limit {
            states.push(self.find_state(t, mu, Branch::Gas, (0.0, max_gas_density(t)))?);
        }

        let liq_limit = min_liq_chem_pot(t);
        if liq_limit.is_finite() && mu >= liq_limit {
            states.push(self.find_state(t, mu, Branch::Liquid, (min_liq_density(t), 1.0))?);
        }

        Ok(states)
    }

    /// Global free-energy minimum at `(t, mu)`.
    ///
    /// Ties between branches keep the gas state.
    pub fn equilibrium_state(&self, t: Real, mu: Real) -> SolverResult<State> {
        if Regime::classify(t) == Regime::Supercritical {
            return self.supercritical_state(t, mu);
        }

        let states = self.subcritical_states(t, mu)?;
        let selected = states
            .into_iter()
            .reduce(|best, candidate| {
                if candidate.free_energy < best.free_energy {
                    candidate
                } else {
                    best
                }
            })
            .ok_or(SolverError::NoEquilibriumState {
                temperature: t,
                chem_pot: mu,
            })?;

        debug!(
            t,
            mu,
            branch = selected.branch.label(),
            density = selected.density,
            "selected equilibrium branch"
        );
        Ok(selected)
    }
}

fn check_inputs(t: Real, mu: Real) -> SolverResult<()> {
    for (value, what) in [(t, "temperature"), (mu, "chemical potential")] {
        ensure_finite(value, what).map_err(|e| SolverError::InvalidInput {
            what: e.to_string(),
        })?;
    }
    Ok(())
}

/// Equilibrium state for `t >= 1`; see [`EquilibriumSolver::supercritical_state`].
pub fn find_supercritical_state(t: Real, mu: Real) -> SolverResult<State> {
    EquilibriumSolver::default().supercritical_state(t, mu)
}

/// Branch candidates for `t <= 1`; see [`EquilibriumSolver::subcritical_states`].
pub fn find_subcritical_states(t: Real, mu: Real) -> SolverResult<Vec<State>> {
    EquilibriumSolver::default().subcritical_states(t, mu)
}

/// Global equilibrium state; see [`EquilibriumSolver::equilibrium_state`].
pub fn find_equilibrium_state(t: Real, mu: Real) -> SolverResult<State> {
    EquilibriumSolver::default().equilibrium_state(t, mu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lg_model::dfree_energy;

    #[test]
    fn regime_classification() {
        assert_eq!(Regime::classify(1.0), Regime::Supercritical);
        assert_eq!(Regime::classify(1.3), Regime::Supercritical);
        assert_eq!(Regime::classify(0.999), Regime::Subcritical);
    }

    #[test]
    fn supercritical_symmetric_point() {
        let state = find_supercritical_state(1.2, -2.0).unwrap();
        assert_eq!(state.branch, Branch::Supercritical);
        assert!((state.density - 0.5).abs() < 1e-6);
        assert!(state.free_energy.is_finite());
    }

    #[test]
    fn supercritical_rejects_low_temperature() {
        let err = find_supercritical_state(0.9, -2.0).unwrap_err();
        assert!(matches!(err, SolverError::Domain { .. }));
    }

    #[test]
    fn subcritical_rejects_high_temperature() {
        let err = find_subcritical_states(1.1, -2.0).unwrap_err();
        assert!(matches!(err, SolverError::Domain { .. }));
    }

    #[test]
    fn subcritical_accepts_critical_temperature() {
        let states = find_subcritical_states(1.0, -2.0).unwrap();
        assert_eq!(states.len(), 2);
        assert_eq!(states[0].branch, Branch::Gas);
        assert_eq!(states[1].branch, Branch::Liquid);
    }

    #[test]
    fn gas_only_below_liquid_threshold() {
        let states = find_subcritical_states(0.8, -3.0).unwrap();
        assert_eq!(states.len(), 1);
        assert_eq!(states[0].branch, Branch::Gas);
        assert!(states[0].density < max_gas_density(0.8));
        // Interior minimum: derivative vanishes
        assert!(dfree_energy(states[0].density, 0.8, -3.0).abs() < 1e-5);
    }

    #[test]
    fn liquid_only_above_gas_threshold() {
        let states = find_subcritical_states(0.8, -1.0).unwrap();
        assert_eq!(states.len(), 1);
        assert_eq!(states[0].branch, Branch::Liquid);
        assert!(states[0].density > min_liq_density(0.8));
    }

    #[test]
    fn coexistence_picks_lower_free_energy() {
        let states = find_subcritical_states(0.8, -1.95).unwrap();
        assert_eq!(states.len(), 2);
        let (gas, liq) = (states[0], states[1]);
        assert!(liq.free_energy < gas.free_energy);

        let eq = find_equilibrium_state(0.8, -1.95).unwrap();
        assert_eq!(eq, liq);

        let eq = find_equilibrium_state(0.8, -2.05).unwrap();
        assert_eq!(eq.branch, Branch::Gas);
    }

    #[test]
    fn degenerate_temperature_has_no_state() {
        let states = find_subcritical_states(0.0, -2.0).unwrap();
        assert!(states.is_empty());

        let err = find_equilibrium_state(0.0, -2.0).unwrap_err();
        assert!(matches!(err, SolverError::NoEquilibriumState { .. }));

        let err = find_equilibrium_state(-0.5, -2.0).unwrap_err();
        assert!(matches!(err, SolverError::NoEquilibriumState { .. }));
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        let err = find_equilibrium_state(f64::NAN, -2.0).unwrap_err();
        assert!(matches!(err, SolverError::InvalidInput { .. }));
        let err = find_equilibrium_state(0.8, f64::INFINITY).unwrap_err();
        assert!(matches!(err, SolverError::InvalidInput { .. }));
    }

    #[test]
    fn custom_config_is_honoured() {
        let solver = EquilibriumSolver::new(BrentConfig {
            x_abs_tol: 1e-10,
            max_evaluations: 2,
        });
        let err = solver.equilibrium_state(1.2, -2.0).unwrap_err();
        assert!(matches!(err, SolverError::ConvergenceFailed { .. }));
    }
}

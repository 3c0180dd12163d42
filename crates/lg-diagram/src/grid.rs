//! Equilibrium density over a temperature by chemical-potential mesh.

use crate::config::DiagramConfig;
use crate::error::{DiagramError, DiagramResult};
use lg_core::{LgError, LgResult, Real};
use lg_solver::EquilibriumSolver;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Cell-centre coordinates: `min + (max - min) / n * (i + 0.5)` for `i < n`.
pub fn midpoint_axis(min: Real, max: Real, n: usize) -> Vec<Real> {
    let width = (max - min) / n as Real;
    (0..n).map(|i| min + width * (0.5 + i as Real)).collect()
}

/// Cell-edge coordinates: `min + (max - min) / n * i` for `i <= n`.
pub fn edge_axis(min: Real, max: Real, n: usize) -> Vec<Real> {
    let width = (max - min) / n as Real;
    let mut edges: Vec<Real> = (0..=n).map(|i| min + width * i as Real).collect();
    // Ensure exact endpoint
    edges[n] = max;
    edges
}

/// Equilibrium density sampled at cell centres.
///
/// `density[i][j]` belongs to `temperature[i]` and `chem_pot[j]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseArray {
    pub temperature: Vec<Real>,
    pub chem_pot: Vec<Real>,
    pub density: Vec<Vec<Real>>,
}

impl PhaseArray {
    /// Evaluate the mesh with the default solver.
    pub fn build(config: &DiagramConfig) -> DiagramResult<Self> {
        Self::build_with(config, &EquilibriumSolver::default())
    }

    /// Evaluate the mesh, one temperature row per parallel task.
    pub fn build_with(config: &DiagramConfig, solver: &EquilibriumSolver) -> DiagramResult<Self> {
        config.validate()?;

        let temperature = midpoint_axis(
            config.min_temperature,
            config.max_temperature,
            config.num_temperature_pts,
        );
        let chem_pot = midpoint_axis(
            config.min_chem_pot,
            config.max_chem_pot,
            config.num_chem_pot_pts,
        );

        let density = temperature
            .par_iter()
            .map(|&t| {
                chem_pot
                    .iter()
                    .map(|&mu| {
                        solver
                            .equilibrium_state(t, mu)
                            .map(|state| state.density)
                            .map_err(|source| DiagramError::Solver {
                                temperature: t,
                                chem_pot: mu,
                                source,
                            })
                    })
                    .collect::<DiagramResult<Vec<Real>>>()
            })
            .collect::<DiagramResult<Vec<Vec<Real>>>>()?;

        info!(
            temperatures = temperature.len(),
            chem_pots = chem_pot.len(),
            "phase array evaluated"
        );

        Ok(Self {
            temperature,
            chem_pot,
            density,
        })
    }

    /// `(temperature points, chemical-potential points)`
    pub fn shape(&self) -> (usize, usize) {
        (self.temperature.len(), self.chem_pot.len())
    }

    /// One density row per temperature and one value per chemical potential.
    pub fn check_shape(&self) -> LgResult<()> {
        let n_mu = self.chem_pot.len();
        if self.density.len() != self.temperature.len() {
            return Err(LgError::Invariant {
                what: format!(
                    "{} density rows for {} temperatures",
                    self.density.len(),
                    self.temperature.len()
                ),
            });
        }
        if let Some((i, row)) = self.density.iter().enumerate().find(|(_, r)| r.len() != n_mu) {
            return Err(LgError::Invariant {
                what: format!("density row {i} has {} values, expected {n_mu}", row.len()),
            });
        }
        Ok(())
    }

    pub fn density_at(&self, i_temperature: usize, i_chem_pot: usize) -> Option<Real> {
        self.density.get(i_temperature)?.get(i_chem_pot).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_axis_centres_cells() {
        let axis = midpoint_axis(0.5, 1.5, 4);
        let expected = [0.625, 0.875, 1.125, 1.375];
        assert_eq!(axis.len(), 4);
        for (a, e) in axis.iter().zip(expected) {
            assert!((a - e).abs() < 1e-12);
        }
    }

    #[test]
    fn edge_axis_includes_both_ends() {
        let axis = edge_axis(0.5, 1.0, 5);
        assert_eq!(axis.len(), 6);
        assert_eq!(axis[0], 0.5);
        assert_eq!(axis[5], 1.0);
    }

    #[test]
    fn small_mesh_has_expected_layout() {
        let config = DiagramConfig {
            num_temperature_pts: 3,
            num_chem_pot_pts: 5,
            ..DiagramConfig::default()
        };
        let array = PhaseArray::build(&config).unwrap();
        assert_eq!(array.shape(), (3, 5));
        assert_eq!(array.density.len(), 3);
        assert!(array.density.iter().all(|row| row.len() == 5));
        assert!(array.density_at(2, 4).is_some());
        assert!(array.density_at(3, 0).is_none());
    }

    #[test]
    fn ragged_array_fails_shape_check() {
        let mut array = PhaseArray {
            temperature: vec![0.6, 0.8],
            chem_pot: vec![-2.1, -1.9],
            density: vec![vec![0.1, 0.9], vec![0.2, 0.8]],
        };
        array.check_shape().unwrap();

        array.density[1].pop();
        assert!(matches!(array.check_shape(), Err(LgError::Invariant { .. })));

        array.density.pop();
        assert!(matches!(array.check_shape(), Err(LgError::Invariant { .. })));
    }

    #[test]
    fn invalid_config_fails_before_solving() {
        let config = DiagramConfig {
            num_temperature_pts: 0,
            ..DiagramConfig::default()
        };
        assert!(matches!(
            PhaseArray::build(&config),
            Err(DiagramError::Config(_))
        ));
    }

    #[test]
    fn solver_failure_reports_mesh_point() {
        let config = DiagramConfig {
            min_temperature: -1.0,
            max_temperature: -0.5,
            num_temperature_pts: 2,
            num_chem_pot_pts: 2,
            ..DiagramConfig::default()
        };
        let err = PhaseArray::build(&config).unwrap_err();
        match err {
            DiagramError::Solver { temperature, .. } => assert!(temperature < 0.0),
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn midpoints_lie_between_edges(
            min in -5.0_f64..5.0,
            span in 0.01_f64..10.0,
            n in 1_usize..200,
        ) {
            let max = min + span;
            let mids = midpoint_axis(min, max, n);
            let edges = edge_axis(min, max, n);
            prop_assert_eq!(mids.len(), n);
            prop_assert_eq!(edges.len(), n + 1);
            for (i, mid) in mids.iter().enumerate() {
                prop_assert!(*mid > edges[i] && *mid < edges[i + 1]);
            }
        }
    }
}

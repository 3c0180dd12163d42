//! Guide lines drawn over the phase diagram.

use crate::config::DiagramConfig;
use crate::grid::edge_axis;
use lg_core::Real;
use lg_model::{
    CRITICAL_CHEM_POT, CRITICAL_TEMPERATURE, max_gas_chem_pot_each, min_liq_chem_pot_each,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// Polyline in `(temperature, chem_pot)` coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideLine {
    pub name: String,
    pub style: LineStyle,
    pub points: Vec<(Real, Real)>,
}

impl GuideLine {
    fn new(name: &str, style: LineStyle, points: Vec<(Real, Real)>) -> Self {
        Self {
            name: name.to_string(),
            style,
            points,
        }
    }
}

/// The four guide lines of the diagram.
///
/// The critical lines meet at the critical point; the metastable boundaries
/// fan out from it towards low temperature and enclose the coexistence
/// region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideLines {
    pub critical_chem_pot: GuideLine,
    pub critical_temperature: GuideLine,
    pub gas_metastable: GuideLine,
    pub liq_metastable: GuideLine,
}

impl GuideLines {
    pub fn for_config(config: &DiagramConfig) -> Self {
        let critical_chem_pot = GuideLine::new(
            "critical chemical potential",
            LineStyle::Solid,
            if config.min_temperature < CRITICAL_TEMPERATURE {
                vec![
                    (config.min_temperature, CRITICAL_CHEM_POT),
                    (CRITICAL_TEMPERATURE, CRITICAL_CHEM_POT),
                ]
            } else {
                Vec::new()
            },
        );

        let critical_temperature = GuideLine::new(
            "critical temperature",
            LineStyle::Solid,
            vec![
                (CRITICAL_TEMPERATURE, config.min_chem_pot),
                (CRITICAL_TEMPERATURE, config.max_chem_pot),
            ],
        );

        let subcritical = if config.min_temperature < CRITICAL_TEMPERATURE {
            edge_axis(
                config.min_temperature,
                CRITICAL_TEMPERATURE,
                (config.num_chem_pot_pts / 2).max(1),
            )
        } else {
            Vec::new()
        };
        let gas_metastable = GuideLine::new(
            "gas metastable boundary",
            LineStyle::Dashed,
            finite_points(&subcritical, &max_gas_chem_pot_each(&subcritical)),
        );
        let liq_metastable = GuideLine::new(
            "liquid metastable boundary",
            LineStyle::Dashed,
            finite_points(&subcritical, &min_liq_chem_pot_each(&subcritical)),
        );

        Self {
            critical_chem_pot,
            critical_temperature,
            gas_metastable,
            liq_metastable,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &GuideLine> {
        [
            &self.critical_chem_pot,
            &self.critical_temperature,
            &self.gas_metastable,
            &self.liq_metastable,
        ]
        .into_iter()
    }
}

fn finite_points(temperatures: &[Real], chem_pots: &[Real]) -> Vec<(Real, Real)> {
    temperatures
        .iter()
        .zip(chem_pots)
        .filter(|(t, mu)| **t > 0.0 && mu.is_finite())
        .map(|(&t, &mu)| (t, mu))
        .collect()
}

//! Complete phase diagram: mesh and guide lines, rendered on demand.

use crate::config::DiagramConfig;
use crate::error::DiagramResult;
use crate::grid::PhaseArray;
use crate::guides::GuideLines;
use crate::render::{Raster, render};
use lg_solver::EquilibriumSolver;

#[derive(Debug, Clone)]
pub struct PhaseDiagram {
    pub config: DiagramConfig,
    pub array: PhaseArray,
    pub guides: GuideLines,
}

impl PhaseDiagram {
    pub fn build(config: &DiagramConfig) -> DiagramResult<Self> {
        Self::build_with(config, &EquilibriumSolver::default())
    }

    pub fn build_with(config: &DiagramConfig, solver: &EquilibriumSolver) -> DiagramResult<Self> {
        let array = PhaseArray::build_with(config, solver)?;
        let guides = GuideLines::for_config(config);
        Ok(Self {
            config: config.clone(),
            array,
            guides,
        })
    }

    /// Rasterize the mesh, with guide lines when the config asks for them.
    pub fn render(&self) -> DiagramResult<Raster> {
        let guides = self.config.guide_lines.then_some(&self.guides);
        render(&self.array, guides, &self.config)
    }
}

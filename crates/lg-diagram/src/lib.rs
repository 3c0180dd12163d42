//! lg-diagram: phase diagrams of the lattice gas over a temperature and
//! chemical-potential mesh.
//!
//! Provides:
//! - [`DiagramConfig`]: mesh bounds, resolution and rendering options (YAML/JSON)
//! - [`PhaseArray`]: equilibrium density on the mesh, evaluated in parallel
//! - [`GuideLines`]: critical lines and metastable boundaries
//! - [`Raster`]: rendered image of the diagram (binary PPM)
//! - [`output`]: JSON export with a content-hashed manifest

pub mod config;
pub mod diagram;
pub mod error;
pub mod grid;
pub mod guides;
pub mod output;
pub mod render;

pub use config::{ColormapKind, DiagramConfig, MAX_IMAGE_PIXELS};
pub use diagram::PhaseDiagram;
pub use error::{DiagramError, DiagramResult};
pub use grid::{PhaseArray, edge_axis, midpoint_axis};
pub use guides::{GuideLine, GuideLines, LineStyle};
pub use output::{
    DiagramManifest, OutputPaths, config_hash, load_manifest, load_phase_array, write_outputs,
};
pub use render::{Raster, Rgb, render};

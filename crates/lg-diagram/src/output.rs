//! Writing diagrams to disk.
//!
//! A diagram directory holds `phase_array.json`, `manifest.json` and
//! optionally `phase_diagram.ppm`. The manifest identifies the configuration
//! by a content hash so identical runs can be recognized.

use crate::config::DiagramConfig;
use crate::error::DiagramResult;
use crate::grid::PhaseArray;
use crate::render::Raster;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const ARRAY_FILE: &str = "phase_array.json";
pub const MANIFEST_FILE: &str = "manifest.json";
pub const IMAGE_FILE: &str = "phase_diagram.ppm";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagramManifest {
    pub config_hash: String,
    pub created_at: String,
    pub generator_version: String,
    pub shape: (usize, usize),
    pub config: DiagramConfig,
}

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub array: PathBuf,
    pub manifest: PathBuf,
    pub image: Option<PathBuf>,
}

/// SHA-256 of the canonical JSON form of `config`, hex encoded.
pub fn config_hash(config: &DiagramConfig) -> DiagramResult<String> {
    let mut hasher = Sha256::new();
    hasher.update(serde_json::to_string(config)?.as_bytes());
    hasher.update(env!("CARGO_PKG_VERSION").as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

pub fn write_outputs(
    dir: &Path,
    config: &DiagramConfig,
    array: &PhaseArray,
    image: Option<&Raster>,
) -> DiagramResult<OutputPaths> {
    fs::create_dir_all(dir)?;

    let array_path = dir.join(ARRAY_FILE);
    fs::write(&array_path, serde_json::to_string(array)?)?;

    let manifest = DiagramManifest {
        config_hash: config_hash(config)?,
        created_at: chrono::Utc::now().to_rfc3339(),
        generator_version: env!("CARGO_PKG_VERSION").to_string(),
        shape: array.shape(),
        config: config.clone(),
    };
    let manifest_path = dir.join(MANIFEST_FILE);
    fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)?;

    let image_path = match image {
        Some(raster) => {
            let path = dir.join(IMAGE_FILE);
            raster.write_ppm(&path)?;
            Some(path)
        }
        None => None,
    };

    info!(dir = %dir.display(), hash = %manifest.config_hash, "diagram written");

    Ok(OutputPaths {
        array: array_path,
        manifest: manifest_path,
        image: image_path,
    })
}

/// Load a phase array written by [`write_outputs`], rejecting ragged data.
pub fn load_phase_array(path: &Path) -> DiagramResult<PhaseArray> {
    let content = fs::read_to_string(path)?;
    let array: PhaseArray = serde_json::from_str(&content)?;
    array.check_shape()?;
    Ok(array)
}

pub fn load_manifest(path: &Path) -> DiagramResult<DiagramManifest> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

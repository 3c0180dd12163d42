//! Diagram configuration.

use crate::error::{DiagramError, DiagramResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound on the rendered image size, in pixels.
pub const MAX_IMAGE_PIXELS: usize = 1 << 26;

/// Sequential colormap used to encode density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColormapKind {
    #[default]
    Blues,
    Greys,
}

/// Mesh bounds, resolution and rendering options.
///
/// Every field has a default, so a config file only needs the values it
/// changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DiagramConfig {
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub num_temperature_pts: usize,
    pub min_chem_pot: f64,
    pub max_chem_pot: f64,
    pub num_chem_pot_pts: usize,
    /// Edge length of one mesh cell in the rendered image
    pub pixels_per_cell: usize,
    pub colormap: ColormapKind,
    /// Draw critical lines and metastable boundaries over the image
    pub guide_lines: bool,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            min_temperature: 0.5,
            max_temperature: 1.5,
            num_temperature_pts: 100,
            min_chem_pot: -2.5,
            max_chem_pot: -1.5,
            num_chem_pot_pts: 100,
            pixels_per_cell: 4,
            colormap: ColormapKind::Blues,
            guide_lines: true,
        }
    }
}

impl DiagramConfig {
    pub fn validate(&self) -> DiagramResult<()> {
        check_range("temperature", self.min_temperature, self.max_temperature)?;
        check_range("chemical potential", self.min_chem_pot, self.max_chem_pot)?;
        if self.num_temperature_pts == 0 {
            return Err(DiagramError::Config(
                "num_temperature_pts must be at least 1".to_string(),
            ));
        }
        if self.num_chem_pot_pts == 0 {
            return Err(DiagramError::Config(
                "num_chem_pot_pts must be at least 1".to_string(),
            ));
        }
        if self.pixels_per_cell == 0 {
            return Err(DiagramError::Config(
                "pixels_per_cell must be at least 1".to_string(),
            ));
        }
        self.image_size()?;
        Ok(())
    }

    /// `(width, height)` of the rendered image, bounded by [`MAX_IMAGE_PIXELS`].
    pub fn image_size(&self) -> DiagramResult<(usize, usize)> {
        image_size(
            self.num_temperature_pts,
            self.num_chem_pot_pts,
            self.pixels_per_cell,
        )
    }

    /// Load from a `.yaml`/`.yml` or `.json` file and validate.
    pub fn load(path: &Path) -> DiagramResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: DiagramConfig = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            other => {
                return Err(DiagramError::Config(format!(
                    "unsupported config extension: {}",
                    other.unwrap_or("<none>")
                )));
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn save_yaml(&self, path: &Path) -> DiagramResult<()> {
        self.validate()?;
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

pub(crate) fn image_size(
    n_temperature: usize,
    n_chem_pot: usize,
    pixels_per_cell: usize,
) -> DiagramResult<(usize, usize)> {
    let width = n_temperature.checked_mul(pixels_per_cell);
    let height = n_chem_pot.checked_mul(pixels_per_cell);
    match (width, height) {
        (Some(w), Some(h)) if w.checked_mul(h).is_some_and(|n| n <= MAX_IMAGE_PIXELS) => {
            Ok((w, h))
        }
        _ => Err(DiagramError::Config(format!(
            "image of {n_temperature} x {n_chem_pot} cells at {pixels_per_cell} pixels per cell \
             exceeds {MAX_IMAGE_PIXELS} pixels"
        ))),
    }
}

fn check_range(what: &str, min: f64, max: f64) -> DiagramResult<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(DiagramError::Config(format!(
            "{what} bounds must be finite (got {min}, {max})"
        )));
    }
    if min >= max {
        return Err(DiagramError::Config(format!(
            "{what} minimum {min} must be below maximum {max}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = DiagramConfig::default();
        config.validate().unwrap();
        assert_eq!(config.num_temperature_pts, 100);
        assert_eq!(config.colormap, ColormapKind::Blues);
    }

    #[test]
    fn partial_yaml_uses_defaults() {
        let yaml = "num_temperature_pts: 20\ncolormap: greys\n";
        let config: DiagramConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.num_temperature_pts, 20);
        assert_eq!(config.colormap, ColormapKind::Greys);
        assert_eq!(config.min_chem_pot, -2.5);
        assert!(config.guide_lines);
    }

    #[test]
    fn rejects_oversized_image() {
        let config = DiagramConfig {
            num_temperature_pts: 2,
            num_chem_pot_pts: 2,
            pixels_per_cell: usize::MAX / 2,
            ..DiagramConfig::default()
        };
        assert!(matches!(config.validate(), Err(DiagramError::Config(_))));

        let config = DiagramConfig {
            num_temperature_pts: 10_000,
            num_chem_pot_pts: 10_000,
            pixels_per_cell: 1,
            ..DiagramConfig::default()
        };
        assert!(matches!(config.validate(), Err(DiagramError::Config(_))));
    }

    #[test]
    fn image_size_scales_with_cells() {
        let config = DiagramConfig::default();
        assert_eq!(config.image_size().unwrap(), (400, 400));
    }

    #[test]
    fn rejects_inverted_bounds() {
        let config = DiagramConfig {
            min_temperature: 1.5,
            max_temperature: 0.5,
            ..DiagramConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("temperature"));
    }

    #[test]
    fn rejects_empty_mesh() {
        let config = DiagramConfig {
            num_chem_pot_pts: 0,
            ..DiagramConfig::default()
        };
        assert!(matches!(config.validate(), Err(DiagramError::Config(_))));
    }

    #[test]
    fn rejects_non_finite_bounds() {
        let config = DiagramConfig {
            max_chem_pot: f64::INFINITY,
            ..DiagramConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

//! Raster rendering of a phase array with its guide lines.
//!
//! Density maps to color with `vmin = 0`, `vmax = 1`. The image origin is the
//! lower-left corner: temperature grows to the right, chemical potential
//! upwards.

use crate::config::{ColormapKind, DiagramConfig, image_size};
use crate::error::DiagramResult;
use crate::grid::PhaseArray;
use crate::guides::{GuideLine, GuideLines, LineStyle};
use lg_core::Real;
use std::io::Write;
use std::path::Path;

pub type Rgb = [u8; 3];

const GUIDE_COLOR: Rgb = [128, 128, 128];
const MISSING_COLOR: Rgb = [255, 0, 255];
/// Dash and gap length along a dashed line, in pixels.
const DASH_PIXELS: usize = 6;

// Nine-step sequential palettes, light to dark.
const BLUES: [Rgb; 9] = [
    [247, 251, 255],
    [222, 235, 247],
    [198, 219, 239],
    [158, 202, 225],
    [107, 174, 214],
    [66, 146, 198],
    [33, 113, 181],
    [8, 81, 156],
    [8, 48, 107],
];
const GREYS: [Rgb; 9] = [
    [255, 255, 255],
    [240, 240, 240],
    [217, 217, 217],
    [189, 189, 189],
    [150, 150, 150],
    [115, 115, 115],
    [82, 82, 82],
    [37, 37, 37],
    [0, 0, 0],
];

impl ColormapKind {
    fn palette(self) -> &'static [Rgb; 9] {
        match self {
            Self::Blues => &BLUES,
            Self::Greys => &GREYS,
        }
    }

    /// Color for `value`, clamped to `[0, 1]`, interpolated linearly
    /// between palette stops.
    pub fn sample(self, value: Real) -> Rgb {
        if value.is_nan() {
            return MISSING_COLOR;
        }
        let palette = self.palette();
        let scaled = value.clamp(0.0, 1.0) * (palette.len() - 1) as Real;
        let lo = (scaled.floor() as usize).min(palette.len() - 2);
        let frac = scaled - lo as Real;
        let (a, b) = (palette[lo], palette[lo + 1]);
        let mut out = [0u8; 3];
        for c in 0..3 {
            let v = a[c] as Real + frac * (b[c] as Real - a[c] as Real);
            out[c] = v.round() as u8;
        }
        out
    }
}

/// Row-major RGB image, row 0 at the top.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pub width: usize,
    pub height: usize,
    pixels: Vec<Rgb>,
}

impl Raster {
    pub fn new(width: usize, height: usize, fill: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    /// Set a pixel; coordinates outside the image are ignored.
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    /// Binary PPM (`P6`) encoding.
    pub fn to_ppm(&self) -> Vec<u8> {
        let header = format!("P6\n{} {}\n255\n", self.width, self.height);
        let mut bytes = Vec::with_capacity(header.len() + self.pixels.len() * 3);
        bytes.extend_from_slice(header.as_bytes());
        for pixel in &self.pixels {
            bytes.extend_from_slice(pixel);
        }
        bytes
    }

    pub fn write_ppm(&self, path: &Path) -> std::io::Result<()> {
        let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
        file.write_all(&self.to_ppm())?;
        file.flush()
    }
}

/// Maps `(temperature, chem_pot)` to fractional pixel coordinates.
struct Viewport {
    t_min: Real,
    t_span: Real,
    mu_min: Real,
    mu_span: Real,
    width: Real,
    height: Real,
}

impl Viewport {
    fn new(config: &DiagramConfig, raster: &Raster) -> Self {
        Self {
            t_min: config.min_temperature,
            t_span: config.max_temperature - config.min_temperature,
            mu_min: config.min_chem_pot,
            mu_span: config.max_chem_pot - config.min_chem_pot,
            width: raster.width as Real,
            height: raster.height as Real,
        }
    }

    fn to_pixel(&self, (t, mu): (Real, Real)) -> (Real, Real) {
        let x = (t - self.t_min) / self.t_span * self.width;
        let y = self.height - (mu - self.mu_min) / self.mu_span * self.height;
        (x, y)
    }
}

/// Render the density grid, and the guide lines when given.
///
/// Fails with [`DiagramError::Config`](crate::DiagramError::Config) when the
/// image would exceed [`MAX_IMAGE_PIXELS`](crate::MAX_IMAGE_PIXELS).
pub fn render(
    array: &PhaseArray,
    guides: Option<&GuideLines>,
    config: &DiagramConfig,
) -> DiagramResult<Raster> {
    let cell = config.pixels_per_cell.max(1);
    let (n_t, n_mu) = array.shape();
    let (width, height) = image_size(n_t, n_mu, cell)?;
    let mut raster = Raster::new(width, height, MISSING_COLOR);

    for (i, row) in array.density.iter().enumerate() {
        for (j, &rho) in row.iter().enumerate() {
            let color = config.colormap.sample(rho);
            // chem_pot index j counts up from the bottom edge
            let top = (n_mu - 1 - j) * cell;
            for y in top..top + cell {
                for x in i * cell..(i + 1) * cell {
                    raster.set(x, y, color);
                }
            }
        }
    }

    if let Some(guides) = guides {
        let viewport = Viewport::new(config, &raster);
        for line in guides.iter() {
            draw_line(&mut raster, &viewport, line);
        }
    }

    Ok(raster)
}

fn draw_line(raster: &mut Raster, viewport: &Viewport, line: &GuideLine) {
    let mut walked = 0usize;
    for segment in line.points.windows(2) {
        let (x0, y0) = viewport.to_pixel(segment[0]);
        let (x1, y1) = viewport.to_pixel(segment[1]);
        let (dx, dy) = (x1 - x0, y1 - y0);
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;

        for k in 0..=steps {
            let s = k as Real / steps as Real;
            let visible = match line.style {
                LineStyle::Solid => true,
                LineStyle::Dashed => (walked / DASH_PIXELS) % 2 == 0,
            };
            walked += 1;
            if !visible {
                continue;
            }
            let (x, y) = (x0 + s * dx, y0 + s * dy);
            if x < 0.0 || y < 0.0 {
                continue;
            }
            // The far edge belongs to the last pixel
            let px = (x.floor() as usize).min(raster.width.saturating_sub(1));
            let py = (y.floor() as usize).min(raster.height.saturating_sub(1));
            if x <= raster.width as Real && y <= raster.height as Real {
                raster.set(px, py, GUIDE_COLOR);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_array(n_t: usize, n_mu: usize, value: Real) -> PhaseArray {
        PhaseArray {
            temperature: vec![0.0; n_t],
            chem_pot: vec![0.0; n_mu],
            density: vec![vec![value; n_mu]; n_t],
        }
    }

    #[test]
    fn colormap_endpoints() {
        assert_eq!(ColormapKind::Blues.sample(0.0), BLUES[0]);
        assert_eq!(ColormapKind::Blues.sample(1.0), BLUES[8]);
        assert_eq!(ColormapKind::Greys.sample(1.0), [0, 0, 0]);
        // Out-of-range values clamp
        assert_eq!(ColormapKind::Blues.sample(-0.5), BLUES[0]);
        assert_eq!(ColormapKind::Blues.sample(1.5), BLUES[8]);
        assert_eq!(ColormapKind::Blues.sample(Real::NAN), MISSING_COLOR);
    }

    #[test]
    fn colormap_is_monotone_in_lightness() {
        let mut last = u32::MAX;
        for k in 0..=20 {
            let [r, g, b] = ColormapKind::Greys.sample(k as Real / 20.0);
            let sum = r as u32 + g as u32 + b as u32;
            assert!(sum <= last);
            last = sum;
        }
    }

    #[test]
    fn origin_is_lower_left() {
        let mut array = uniform_array(2, 2, 0.0);
        // Highest chem_pot of the first temperature is the top-left cell
        array.density[0][1] = 1.0;
        let config = DiagramConfig {
            pixels_per_cell: 3,
            ..DiagramConfig::default()
        };
        let raster = render(&array, None, &config).unwrap();
        assert_eq!((raster.width, raster.height), (6, 6));
        assert_eq!(raster.get(0, 0), Some(BLUES[8]));
        assert_eq!(raster.get(0, 5), Some(BLUES[0]));
        assert_eq!(raster.get(5, 0), Some(BLUES[0]));
        assert_eq!(raster.get(6, 0), None);
    }

    #[test]
    fn guide_lines_are_drawn() {
        let config = DiagramConfig {
            num_temperature_pts: 10,
            num_chem_pot_pts: 10,
            pixels_per_cell: 2,
            ..DiagramConfig::default()
        };
        let array = uniform_array(10, 10, 0.0);
        let guides = GuideLines::for_config(&config);
        let raster = render(&array, Some(&guides), &config).unwrap();
        // Critical temperature line is the vertical line at t = 1, mid image
        assert_eq!(raster.get(10, 3), Some(GUIDE_COLOR));
        // Critical chem-pot line is horizontal at mu = -2, mid image
        assert_eq!(raster.get(2, 10), Some(GUIDE_COLOR));
    }

    #[test]
    fn oversized_image_is_an_error() {
        let array = uniform_array(2, 2, 0.5);
        let config = DiagramConfig {
            pixels_per_cell: usize::MAX / 2,
            ..DiagramConfig::default()
        };
        assert!(matches!(
            render(&array, None, &config),
            Err(crate::DiagramError::Config(_))
        ));
    }

    #[test]
    fn ppm_header_and_size() {
        let raster = Raster::new(3, 2, [1, 2, 3]);
        let bytes = raster.to_ppm();
        let header = b"P6\n3 2\n255\n";
        assert!(bytes.starts_with(header));
        assert_eq!(bytes.len(), header.len() + 3 * 2 * 3);
        assert_eq!(&bytes[header.len()..header.len() + 3], &[1, 2, 3]);
    }
}

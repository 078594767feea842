//! Every tunable of the generator, with the shipped asset as default.

use crate::effects::blur::kernel_radius;
use crate::foundation::core::{Rgb8, Rgba8};
use crate::foundation::error::{OrreryError, OrreryResult};

/// Every constant the generator consumes.
///
/// `Default` reproduces the Taragam-3 asset: a 1024 px canvas, a 720 px
/// planet, rings at 470/380 px tilted 20 degrees and a terminator at 30
/// degrees, with patch seed 1337 and noise seed 4242.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlanetConfig {
    /// Side length of the square output, in pixels.
    pub canvas_size: u32,
    /// Diameter of the planet disc, in pixels.
    pub planet_diameter: u32,
    /// Base radial colouring.
    pub gradient: GradientConfig,
    /// Horizontal atmospheric bands.
    pub bands: BandConfig,
    /// Randomly placed tinted ellipses.
    pub patches: PatchConfig,
    /// Fine grain texture.
    pub noise: NoiseConfig,
    /// Day/night shading.
    pub terminator: TerminatorConfig,
    /// Ring system geometry and colour.
    pub rings: RingConfig,
    /// Near/far ring split.
    pub occlusion: OcclusionConfig,
}

/// Inner (centre) and outer (corner) colours of the base gradient.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GradientConfig {
    /// Colour at the canvas centre.
    pub inner: Rgb8,
    /// Colour at the canvas corners.
    pub outer: Rgb8,
}

/// Bands start at `start * size` and repeat every `step * size`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BandConfig {
    /// Number of bands.
    pub count: u32,
    /// Top of the first band as a fraction of the canvas size.
    pub start: f64,
    /// Distance between band tops as a fraction of the canvas size.
    pub step: f64,
    /// Band height as a fraction of the canvas size.
    pub thickness: f64,
    /// Fill colour, normally with a low alpha.
    pub color: Rgba8,
}

/// Palette entry chosen when a patch's hue is below `below`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteEntry {
    /// Exclusive upper bound on the hue for this entry.
    pub below: f64,
    /// Patch colour.
    pub color: Rgb8,
}

/// Random elliptical patches. Ranges are inclusive `[min, max]`; positional
/// ranges are fractions of the canvas size.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PatchConfig {
    /// Number of patches.
    pub count: u32,
    /// Seed of the placement generator.
    pub seed: u64,
    /// Range of patch centres on both axes.
    pub center_range: [f64; 2],
    /// Range of horizontal semi-axes.
    pub rx_range: [f64; 2],
    /// Range of vertical semi-axes.
    pub ry_range: [f64; 2],
    /// Range of per-patch alpha.
    pub alpha_range: [u8; 2],
    /// Hue-keyed colours, checked in order.
    pub palette: Vec<PaletteEntry>,
    /// Softening applied to the whole patch layer.
    pub blur_sigma: f32,
}

/// Grayscale noise overlay.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoiseConfig {
    /// Seed of the noise generator.
    pub seed: u64,
    /// Smallest drawn value.
    pub low: u8,
    /// Largest drawn value.
    pub high: u8,
    /// Smoothing applied after drawing.
    pub blur_sigma: f32,
    /// Overlay alpha as a fraction of the noise value.
    pub alpha_scale: f64,
}

/// Shadow brightness is `floor + span * (1 - x / (w - 1))`, rotated by
/// `angle_deg` and applied as black at `opacity`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TerminatorConfig {
    /// Counter-clockwise rotation of the shading gradient, degrees.
    pub angle_deg: f64,
    /// Brightness retained at the right edge.
    pub floor: f64,
    /// Brightness added toward the left edge.
    pub span: f64,
    /// Overlay alpha as a fraction of the gradient value.
    pub opacity: f64,
}

/// Ring system drawn flat, then tilted.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RingConfig {
    /// Outer radius, pixels.
    pub outer_radius: u32,
    /// Inner radius, pixels.
    pub inner_radius: u32,
    /// Vertical compression of the outer ellipse and band outlines.
    pub flatten: f64,
    /// Vertical compression of the inner cut.
    pub inner_flatten: f64,
    /// Counter-clockwise tilt, degrees.
    pub tilt_deg: f64,
    /// Ring body colour.
    pub color: Rgba8,
    /// Number of band outlines between the radii.
    pub band_count: u32,
    /// Band outline colour.
    pub band_color: Rgb8,
    /// Alphas alternated by even/odd band index.
    pub band_alphas: [u8; 2],
    /// Outline width, pixels.
    pub band_stroke: u32,
    /// Anti-aliasing blur after rotation.
    pub blur_sigma: f32,
}

/// Softening of the disc mask used for the front ring layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OcclusionConfig {
    /// Blur applied to the disc before it gates the front layer.
    pub front_blur_sigma: f32,
}

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            canvas_size: 1024,
            planet_diameter: 720,
            gradient: GradientConfig::default(),
            bands: BandConfig::default(),
            patches: PatchConfig::default(),
            noise: NoiseConfig::default(),
            terminator: TerminatorConfig::default(),
            rings: RingConfig::default(),
            occlusion: OcclusionConfig::default(),
        }
    }
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            inner: Rgb8::new(180, 210, 255),
            outer: Rgb8::new(235, 245, 255),
        }
    }
}

impl Default for BandConfig {
    fn default() -> Self {
        Self {
            count: 6,
            start: 0.15,
            step: 0.12,
            thickness: 0.04,
            color: Rgba8::new(180, 200, 240, 36),
        }
    }
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            count: 18,
            seed: 1337,
            center_range: [0.2, 0.8],
            rx_range: [0.04, 0.12],
            ry_range: [0.03, 0.10],
            alpha_range: [40, 80],
            palette: vec![
                PaletteEntry {
                    below: 0.5,
                    color: Rgb8::new(120, 150, 180),
                },
                PaletteEntry {
                    below: 1.0,
                    color: Rgb8::new(150, 130, 110),
                },
            ],
            blur_sigma: 3.0,
        }
    }
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: 4242,
            low: 0,
            high: 55,
            blur_sigma: 1.4,
            alpha_scale: 0.7,
        }
    }
}

impl Default for TerminatorConfig {
    fn default() -> Self {
        Self {
            angle_deg: 30.0,
            floor: 0.25,
            span: 0.75,
            opacity: 0.6,
        }
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            outer_radius: 470,
            inner_radius: 380,
            flatten: 0.38,
            inner_flatten: 0.36,
            tilt_deg: 20.0,
            color: Rgba8::new(210, 220, 230, 90),
            band_count: 6,
            band_color: Rgb8::new(185, 195, 210),
            band_alphas: [26, 14],
            band_stroke: 2,
            blur_sigma: 0.8,
        }
    }
}

impl Default for OcclusionConfig {
    fn default() -> Self {
        Self {
            front_blur_sigma: 4.0,
        }
    }
}

fn check_range<T: PartialOrd + std::fmt::Debug>(name: &str, r: [T; 2]) -> OrreryResult<()> {
    if r[0] > r[1] {
        return Err(OrreryError::validation(format!(
            "{name} is empty: {:?} > {:?}",
            r[0], r[1]
        )));
    }
    Ok(())
}

fn check_fraction(name: &str, v: f64) -> OrreryResult<()> {
    if !v.is_finite() || !(0.0..=1.0).contains(&v) {
        return Err(OrreryError::validation(format!(
            "{name} must be within [0, 1], got {v}"
        )));
    }
    Ok(())
}

fn check_sigma(name: &str, v: f32, canvas_size: u32) -> OrreryResult<()> {
    if !v.is_finite() || v < 0.0 {
        return Err(OrreryError::validation(format!(
            "{name} must be finite and >= 0, got {v}"
        )));
    }
    if kernel_radius(v) > canvas_size {
        return Err(OrreryError::validation(format!(
            "{name} {v} blurs wider than the {canvas_size} px canvas"
        )));
    }
    Ok(())
}

fn check_angle(name: &str, v: f64) -> OrreryResult<()> {
    if !v.is_finite() {
        return Err(OrreryError::validation(format!("{name} must be finite")));
    }
    Ok(())
}

impl PatchConfig {
    /// Ranges and palette the patch sampler draws from. Checked again by the
    /// surface stage, which can run without a full [`PlanetConfig`].
    pub fn check_sampling(&self) -> OrreryResult<()> {
        check_range("patches.center_range", self.center_range)?;
        check_range("patches.rx_range", self.rx_range)?;
        check_range("patches.ry_range", self.ry_range)?;
        check_range("patches.alpha_range", self.alpha_range)?;
        for (name, range) in [
            ("patches.center_range", self.center_range),
            ("patches.rx_range", self.rx_range),
            ("patches.ry_range", self.ry_range),
        ] {
            check_fraction(name, range[0])?;
            check_fraction(name, range[1])?;
        }
        if self.palette.is_empty() {
            return Err(OrreryError::validation("patches.palette must not be empty"));
        }
        Ok(())
    }
}

impl PlanetConfig {
    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(s: &str) -> OrreryResult<Self> {
        serde_json::from_str(s).map_err(|e| OrreryError::serde(format!("planet config: {e}")))
    }

    /// Full configuration as indented JSON.
    pub fn to_json_pretty(&self) -> OrreryResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| OrreryError::serde(e.to_string()))
    }

    /// Reject degenerate geometry before any pixel work starts.
    pub fn validate(&self) -> OrreryResult<()> {
        if self.canvas_size == 0 {
            return Err(OrreryError::validation("canvas_size must be > 0"));
        }
        if self.planet_diameter == 0 {
            return Err(OrreryError::validation("planet_diameter must be > 0"));
        }
        if self.planet_diameter > self.canvas_size {
            return Err(OrreryError::validation(format!(
                "planet_diameter {} exceeds canvas_size {}",
                self.planet_diameter, self.canvas_size
            )));
        }

        let r = &self.rings;
        if r.inner_radius == 0 {
            return Err(OrreryError::validation("rings.inner_radius must be > 0"));
        }
        if r.inner_radius >= r.outer_radius {
            return Err(OrreryError::validation(format!(
                "rings.inner_radius {} must be < rings.outer_radius {}",
                r.inner_radius, r.outer_radius
            )));
        }
        if u64::from(self.planet_diameter) >= 2 * u64::from(r.outer_radius) {
            return Err(OrreryError::validation(format!(
                "planet_diameter {} hides rings of outer radius {}",
                self.planet_diameter, r.outer_radius
            )));
        }
        if !(r.flatten.is_finite() && r.flatten > 0.0 && r.flatten <= 1.0) {
            return Err(OrreryError::validation("rings.flatten must be within (0, 1]"));
        }
        if !(r.inner_flatten.is_finite() && r.inner_flatten > 0.0 && r.inner_flatten <= 1.0) {
            return Err(OrreryError::validation(
                "rings.inner_flatten must be within (0, 1]",
            ));
        }
        if r.band_stroke == 0 {
            return Err(OrreryError::validation("rings.band_stroke must be > 0"));
        }
        check_angle("rings.tilt_deg", r.tilt_deg)?;
        check_sigma("rings.blur_sigma", r.blur_sigma, self.canvas_size)?;

        let b = &self.bands;
        check_fraction("bands.start", b.start)?;
        check_fraction("bands.step", b.step)?;
        check_fraction("bands.thickness", b.thickness)?;

        let p = &self.patches;
        p.check_sampling()?;
        check_sigma("patches.blur_sigma", p.blur_sigma, self.canvas_size)?;

        let n = &self.noise;
        check_range("noise bounds", [n.low, n.high])?;
        check_fraction("noise.alpha_scale", n.alpha_scale)?;
        check_sigma("noise.blur_sigma", n.blur_sigma, self.canvas_size)?;

        let t = &self.terminator;
        check_angle("terminator.angle_deg", t.angle_deg)?;
        check_fraction("terminator.floor", t.floor)?;
        check_fraction("terminator.span", t.span)?;
        check_fraction("terminator.opacity", t.opacity)?;
        if t.floor + t.span > 1.0 {
            return Err(OrreryError::validation(
                "terminator.floor + terminator.span must not exceed 1",
            ));
        }

        check_sigma(
            "occlusion.front_blur_sigma",
            self.occlusion.front_blur_sigma,
            self.canvas_size,
        )?;
        Ok(())
    }

    /// Same asset at a different resolution: pixel-valued geometry and blur
    /// radii scale with the canvas, fractions and seeds are untouched.
    pub fn scaled_to(&self, canvas_size: u32) -> Self {
        let k = f64::from(canvas_size) / f64::from(self.canvas_size.max(1));
        let px = |v: u32| (f64::from(v) * k).round() as u32;
        let sigma = |v: f32| (f64::from(v) * k) as f32;

        let mut out = self.clone();
        out.canvas_size = canvas_size;
        out.planet_diameter = px(self.planet_diameter);
        out.rings.outer_radius = px(self.rings.outer_radius);
        out.rings.inner_radius = px(self.rings.inner_radius);
        out.rings.band_stroke = px(self.rings.band_stroke).max(1);
        out.rings.blur_sigma = sigma(self.rings.blur_sigma);
        out.patches.blur_sigma = sigma(self.patches.blur_sigma);
        out.occlusion.front_blur_sigma = sigma(self.occlusion.front_blur_sigma);
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/planet/config.rs"]
mod tests;

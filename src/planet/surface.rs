//! Banded surface with random elliptical patches.

use rand::Rng;

use crate::effects::composite::LayerStack;
use crate::foundation::core::{Rect, Rgb8, SeededRng};
use crate::foundation::error::{OrreryError, OrreryResult};
use crate::foundation::math::trunc_u8;
use crate::planet::config::{BandConfig, PaletteEntry, PatchConfig};
use crate::raster::canvas::Canvas;
use crate::raster::draw::ellipse_bbox;
use crate::raster::mask::Mask;

fn frac_px(size: u32, frac: f64) -> i64 {
    (f64::from(size) * frac) as i64
}

/// Semi-transparent horizontal bands at regular vertical intervals.
pub fn band_layer(size: u32, cfg: &BandConfig) -> Canvas {
    let mut layer = Canvas::new(size, size);
    let thickness = frac_px(size, cfg.thickness);
    for i in 0..cfg.count {
        let y0 = frac_px(size, cfg.start + cfg.step * f64::from(i));
        let y1 = y0 + thickness;
        layer.fill_rect(
            Rect::new(0.0, y0 as f64, f64::from(size), y1 as f64),
            cfg.color,
        );
    }
    layer
}

/// First palette colour whose bound exceeds `hue`, falling back to the last.
pub fn palette_color(palette: &[PaletteEntry], hue: f64) -> Option<Rgb8> {
    palette
        .iter()
        .find(|e| hue < e.below)
        .or_else(|| palette.last())
        .map(|e| e.color)
}

/// One patch as drawn from the generator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Patch {
    /// Centre column.
    pub cx: i64,
    /// Centre row.
    pub cy: i64,
    /// Horizontal radius in pixels.
    pub rx: i64,
    /// Vertical radius in pixels.
    pub ry: i64,
    /// Hue draw in `[0, 1)`.
    pub hue: f64,
    /// Patch opacity.
    pub alpha: u8,
}

fn draw_in(rng: &mut SeededRng, size: u32, range: [f64; 2]) -> i64 {
    let lo = frac_px(size, range[0]);
    let hi = frac_px(size, range[1]);
    rng.random_range(lo..=hi)
}

/// Draw `cfg.count` patches. Per patch the generator is consumed in a fixed
/// order: centre x, centre y, rx, ry, hue, alpha.
///
/// Reversed or out-of-range sampling ranges are a validation error and leave
/// `rng` untouched.
pub fn draw_patches(
    rng: &mut SeededRng,
    size: u32,
    cfg: &PatchConfig,
) -> OrreryResult<Vec<Patch>> {
    cfg.check_sampling()?;
    let patches = (0..cfg.count)
        .map(|_| {
            let cx = draw_in(rng, size, cfg.center_range);
            let cy = draw_in(rng, size, cfg.center_range);
            let rx = draw_in(rng, size, cfg.rx_range);
            let ry = draw_in(rng, size, cfg.ry_range);
            let hue = rng.random::<f64>();
            let alpha = rng.random_range(cfg.alpha_range[0]..=cfg.alpha_range[1]);
            Patch {
                cx,
                cy,
                rx,
                ry,
                hue,
                alpha,
            }
        })
        .collect();
    Ok(patches)
}

/// Tinted elliptical patches on a transparent layer, softened as a whole.
pub fn patch_layer(rng: &mut SeededRng, size: u32, cfg: &PatchConfig) -> OrreryResult<Canvas> {
    let mut layer = Canvas::new(size, size);
    for patch in draw_patches(rng, size, cfg)? {
        let color = palette_color(&cfg.palette, patch.hue)
            .ok_or_else(|| OrreryError::validation("patch palette is empty"))?;
        layer.fill_ellipse(
            ellipse_bbox(patch.cx, patch.cy, patch.rx, patch.ry),
            color.with_alpha(patch.alpha),
        );
    }
    layer.blur(cfg.blur_sigma)
}

/// Noise as a gray layer whose alpha is the noise value times `alpha_scale`.
pub fn noise_layer(noise: &Mask, alpha_scale: f64) -> OrreryResult<Canvas> {
    let alpha = noise.map(|v| trunc_u8(f64::from(v) * alpha_scale));
    Canvas::from_gray_alpha(noise, &alpha)
}

/// Layer order of the textured surface, bottom first.
pub const SURFACE_LAYERS: [&str; 3] = ["bands", "patches", "noise"];

/// Build the full-canvas planet surface: bands, patches and noise composited
/// in that order over `gradient`.
#[tracing::instrument(level = "debug", skip_all, fields(size = gradient.width()))]
pub fn compose_surface(
    gradient: &Canvas,
    noise: &Mask,
    bands: &BandConfig,
    patches: &PatchConfig,
    noise_alpha_scale: f64,
    rng: &mut SeededRng,
) -> OrreryResult<Canvas> {
    let size = gradient.width();
    if gradient.height() != size {
        return Err(OrreryError::validation("surface canvas must be square"));
    }
    let [bands_name, patches_name, noise_name] = SURFACE_LAYERS;
    let stack = LayerStack::new(size, size)
        .with(bands_name, band_layer(size, bands))?
        .with(patches_name, patch_layer(rng, size, patches)?)?
        .with(noise_name, noise_layer(noise, noise_alpha_scale)?)?;
    tracing::debug!(layers = ?stack.names(), "surface layers ready");
    stack.flatten_onto(gradient.clone())
}

#[cfg(test)]
#[path = "../../tests/unit/planet/surface.rs"]
mod tests;

//! Disc masks and the terminator shadow.

use rayon::prelude::*;

use crate::effects::composite::alpha_composite;
use crate::foundation::core::Rgb8;
use crate::foundation::error::{OrreryError, OrreryResult};
use crate::foundation::math::trunc_u8;
use crate::planet::config::TerminatorConfig;
use crate::raster::canvas::Canvas;
use crate::raster::mask::Mask;
use crate::transform::rotate::rotate_mask;

/// Disc of `diameter` centred on a `width x height` raster.
pub fn disc_mask(width: u32, height: u32, diameter: u32) -> Mask {
    Mask::disc(
        width,
        height,
        i64::from(width / 2),
        i64::from(height / 2),
        i64::from(diameter / 2),
    )
}

/// Copy of `canvas` whose alpha is the centred disc of `diameter`.
pub fn mask_circle(canvas: &Canvas, diameter: u32) -> OrreryResult<Canvas> {
    canvas.with_alpha(&disc_mask(canvas.width(), canvas.height(), diameter))
}

/// Unrotated shading field: `floor + span * (1 - x / (w - 1))` scaled to 255.
pub fn terminator_gradient(width: u32, height: u32, cfg: &TerminatorConfig) -> Mask {
    let denom = f64::from(width.saturating_sub(1));
    let row: Vec<u8> = (0..width)
        .map(|x| {
            let t = if denom > 0.0 { f64::from(x) / denom } else { 0.0 };
            trunc_u8(255.0 * (cfg.floor + cfg.span * (1.0 - t)))
        })
        .collect();

    let mut m = Mask::new(width, height);
    if width > 0 {
        m.data_mut()
            .par_chunks_mut(width as usize)
            .for_each(|dst| dst.copy_from_slice(&row));
    }
    m
}

/// Darken `canvas` with a rotated directional gradient, then clip to the disc.
#[tracing::instrument(level = "debug", skip(canvas), fields(size = canvas.width()))]
pub fn terminator_shadow(
    canvas: &Canvas,
    diameter: u32,
    cfg: &TerminatorConfig,
) -> OrreryResult<Canvas> {
    if canvas.width() == 0 || canvas.height() == 0 {
        return Err(OrreryError::validation("terminator canvas must be non-empty"));
    }
    let grad = rotate_mask(
        &terminator_gradient(canvas.width(), canvas.height(), cfg),
        cfg.angle_deg,
    );
    let opacity = cfg.opacity;
    let shade_alpha = grad.map(|v| trunc_u8(f64::from(v) * opacity));
    let shade = Canvas::from_color_alpha(Rgb8::new(0, 0, 0), &shade_alpha)?;
    let shaded = alpha_composite(canvas, &shade)?;
    mask_circle(&shaded, diameter)
}

#[cfg(test)]
#[path = "../../tests/unit/planet/shading.rs"]
mod tests;

//! The tilted ring: a flat annulus drawn band by band, then rotated.

use crate::effects::composite::alpha_composite;
use crate::foundation::error::{OrreryError, OrreryResult};
use crate::planet::config::RingConfig;
use crate::raster::canvas::Canvas;
use crate::raster::draw::ellipse_bbox;
use crate::raster::mask::Mask;
use crate::transform::rotate::rotate_canvas;

fn squash(radius: i64, flatten: f64) -> i64 {
    (radius as f64 * flatten) as i64
}

fn check_radii(cfg: &RingConfig) -> OrreryResult<()> {
    if cfg.inner_radius == 0 {
        return Err(OrreryError::validation("ring inner_radius must be > 0"));
    }
    if cfg.inner_radius >= cfg.outer_radius {
        return Err(OrreryError::validation(format!(
            "ring inner_radius ({}) must be smaller than outer_radius ({})",
            cfg.inner_radius, cfg.outer_radius
        )));
    }
    Ok(())
}

/// Radius of band outline `i`, evenly spaced between the ring radii.
pub fn band_radius(cfg: &RingConfig, i: u32) -> i64 {
    let (inner, outer) = (i64::from(cfg.inner_radius), i64::from(cfg.outer_radius));
    let t = (f64::from(i) + 0.5) / f64::from(cfg.band_count.max(1));
    inner + ((outer - inner) as f64 * t) as i64
}

fn band_outlines(size: u32, cfg: &RingConfig) -> Canvas {
    let c = i64::from(size / 2);
    let mut layer = Canvas::new(size, size);
    for i in 0..cfg.band_count {
        let r = band_radius(cfg, i);
        let alpha = cfg.band_alphas[(i % 2) as usize];
        layer.stroke_ellipse(
            ellipse_bbox(c, c, r, squash(r, cfg.flatten)),
            cfg.band_stroke,
            cfg.band_color.with_alpha(alpha),
        );
    }
    layer
}

/// The untilted, unblurred ring: outer ellipse, inner cut, band outlines.
pub fn draw_flat_ring(size: u32, cfg: &RingConfig) -> OrreryResult<Canvas> {
    check_radii(cfg)?;
    let c = i64::from(size / 2);
    let (outer, inner) = (i64::from(cfg.outer_radius), i64::from(cfg.inner_radius));

    let mut ring = Canvas::new(size, size);
    ring.fill_ellipse(
        ellipse_bbox(c, c, outer, squash(outer, cfg.flatten)),
        cfg.color,
    );

    let mut cut = Mask::new(size, size);
    cut.fill_ellipse(
        ellipse_bbox(c, c, inner, squash(inner, cfg.inner_flatten)),
        255,
    );
    let ring = ring.with_alpha(&ring.alpha().subtract(&cut)?)?;

    alpha_composite(&ring, &band_outlines(size, cfg))
}

/// Tilted, softened ring layer on a transparent `size x size` canvas.
#[tracing::instrument(level = "debug", skip(cfg), fields(tilt = cfg.tilt_deg))]
pub fn render_rings(size: u32, cfg: &RingConfig) -> OrreryResult<Canvas> {
    if size == 0 {
        return Err(OrreryError::validation("ring canvas size must be > 0"));
    }
    let flat = draw_flat_ring(size, cfg)?;
    rotate_canvas(&flat, cfg.tilt_deg).blur(cfg.blur_sigma)
}

#[cfg(test)]
#[path = "../../tests/unit/planet/rings.rs"]
mod tests;

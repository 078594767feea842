//! Splitting the ring layer around the planet disc.
//!
//! The back half loses everything the disc covers with a hard edge. The front
//! half keeps ring coverage over the disc, gated by a softened copy of the disc
//! so the overlap fades in. Front coverage is capped at what the back half
//! gave up, so the two halves never hold more than the original ring.

use crate::effects::composite::LayerStack;
use crate::foundation::error::OrreryResult;
use crate::raster::canvas::Canvas;
use crate::raster::mask::Mask;

/// Ring layer divided into the parts drawn behind and in front of the planet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RingSplit {
    /// Ring with the disc cut out.
    pub back: Canvas,
    /// Ring coverage that passes over the disc.
    pub front: Canvas,
}

/// Split `rings` by `disc`, softening the front gate with `front_blur_sigma`.
///
/// Unlike a plain `ring * blur(disc)`, the front gate is clipped to the disc,
/// so its soft fringe outside the planet is dropped and `back + front <= ring`.
#[tracing::instrument(level = "debug", skip(rings, disc))]
pub fn split_rings(rings: &Canvas, disc: &Mask, front_blur_sigma: f32) -> OrreryResult<RingSplit> {
    let ring_alpha = rings.alpha();
    let back_alpha = ring_alpha.subtract(disc)?;
    let budget = ring_alpha.subtract(&back_alpha)?;
    let front_alpha = ring_alpha
        .multiply(&disc.blur(front_blur_sigma)?)?
        .intersect(&budget)?;

    Ok(RingSplit {
        back: rings.with_alpha(&back_alpha)?,
        front: rings.with_alpha(&front_alpha)?,
    })
}

/// Layer order of the final frame, bottom first.
pub const OCCLUSION_LAYERS: [&str; 3] = ["ring-back", "planet", "ring-front"];

/// Stack back ring, planet and front ring in draw order.
pub fn occlusion_stack(split: RingSplit, planet: Canvas) -> OrreryResult<LayerStack> {
    let [back, body, front] = OCCLUSION_LAYERS;
    LayerStack::new(planet.width(), planet.height())
        .with(back, split.back)?
        .with(body, planet)?
        .with(front, split.front)
}

/// Composite the split ring around `planet` onto a transparent canvas.
#[tracing::instrument(level = "debug", skip_all)]
pub fn compose_occluded(split: RingSplit, planet: Canvas) -> OrreryResult<Canvas> {
    occlusion_stack(split, planet)?.flatten()
}

#[cfg(test)]
#[path = "../../tests/unit/planet/occlusion.rs"]
mod tests;

//! The render pipeline from configuration to composed frame.

use crate::foundation::core::seeded_rng;
use crate::foundation::error::OrreryResult;
use crate::generate::gradient::radial_gradient;
use crate::generate::noise::noise_field;
use crate::planet::config::PlanetConfig;
use crate::planet::occlusion::{RingSplit, compose_occluded, split_rings};
use crate::planet::rings::render_rings;
use crate::planet::shading::{disc_mask, mask_circle, terminator_shadow};
use crate::planet::surface::compose_surface;
use crate::raster::canvas::Canvas;
use crate::raster::mask::Mask;

/// Every intermediate product of one render, in pipeline order.
///
/// Kept together so tests and tooling can inspect a stage without re-running
/// the ones before it.
#[derive(Clone, Debug)]
pub struct PlanetLayers {
    /// Radial background gradient.
    pub gradient: Canvas,
    /// Blurred noise field.
    pub noise: Mask,
    /// Bands and patches before shading.
    pub surface: Canvas,
    /// Shaded surface clipped to the disc.
    pub planet: Canvas,
    /// Tilted ring before occlusion.
    pub rings: Canvas,
    /// Ring part behind the planet.
    pub back_rings: Canvas,
    /// Ring part in front of the planet.
    pub front_rings: Canvas,
    /// Final frame.
    pub composed: Canvas,
}

/// Run the whole pipeline and keep every intermediate layer.
///
/// Pipeline:
/// 1. radial gradient and seeded noise field
/// 2. banded, patched, noisy surface over the gradient
/// 3. disc mask and terminator shading
/// 4. tilted ring layer
/// 5. ring split and back/planet/front composite
#[tracing::instrument(level = "info", skip(cfg), fields(size = cfg.canvas_size))]
pub fn render_layers(cfg: &PlanetConfig) -> OrreryResult<PlanetLayers> {
    cfg.validate()?;
    let size = cfg.canvas_size;

    let gradient = radial_gradient(size, cfg.gradient.inner, cfg.gradient.outer)?;
    let noise = noise_field(
        size,
        cfg.noise.seed,
        cfg.noise.low,
        cfg.noise.high,
        cfg.noise.blur_sigma,
    )?;

    let mut patch_rng = seeded_rng(cfg.patches.seed);
    let surface = compose_surface(
        &gradient,
        &noise,
        &cfg.bands,
        &cfg.patches,
        cfg.noise.alpha_scale,
        &mut patch_rng,
    )?;

    let planet = terminator_shadow(
        &mask_circle(&surface, cfg.planet_diameter)?,
        cfg.planet_diameter,
        &cfg.terminator,
    )?;

    let rings = render_rings(size, &cfg.rings)?;
    let disc = disc_mask(size, size, cfg.planet_diameter);
    let RingSplit { back, front } =
        split_rings(&rings, &disc, cfg.occlusion.front_blur_sigma)?;

    let composed = compose_occluded(
        RingSplit {
            back: back.clone(),
            front: front.clone(),
        },
        planet.clone(),
    )?;
    tracing::debug!("planet composed");

    Ok(PlanetLayers {
        gradient,
        noise,
        surface,
        planet,
        rings,
        back_rings: back,
        front_rings: front,
        composed,
    })
}

/// Render the final composed asset.
pub fn render_planet(cfg: &PlanetConfig) -> OrreryResult<Canvas> {
    Ok(render_layers(cfg)?.composed)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;

//! Orrery generates a ringed gas-giant asset as an RGBA PNG.
//!
//! Everything is procedural and seeded, so one [`PlanetConfig`] always yields
//! the same pixels:
//!
//! - Build a [`PlanetConfig`] (defaults, JSON, or [`PlanetConfig::scaled_to`])
//! - Render with [`render_planet`] or inspect stages with [`render_layers`]
//! - Write the PNG and an optional catalog copy through [`OutputTargets`]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;

pub(crate) mod effects;
/// PNG encoding and output targets.
pub mod encode;
pub(crate) mod generate;
/// Planet stages: configuration, surface, shading, rings, occlusion.
pub mod planet;
pub(crate) mod raster;
/// End-to-end pipeline.
pub mod render;
pub(crate) mod transform;

pub use crate::foundation::core::{Affine, Point, Rect, Rgb8, Rgba8, SeededRng, Vec2, seeded_rng};
pub use crate::foundation::error::{OrreryError, OrreryResult};

pub use crate::effects::blur::gaussian_blur;
pub use crate::effects::composite::{Layer, LayerStack, alpha_composite, over};
pub use crate::encode::catalog::{Contents, ImageSet};
pub use crate::encode::png::{encode_png, write_atomic, write_png_atomic};
pub use crate::encode::sink::{OutputReport, OutputTargets, sha256_hex};
pub use crate::generate::gradient::radial_gradient;
pub use crate::generate::noise::{noise_field, noise_field_with};
pub use crate::planet::config::{
    BandConfig, GradientConfig, NoiseConfig, OcclusionConfig, PaletteEntry, PatchConfig,
    PlanetConfig, RingConfig, TerminatorConfig,
};
pub use crate::planet::occlusion::{RingSplit, compose_occluded, split_rings};
pub use crate::planet::rings::{draw_flat_ring, render_rings};
pub use crate::planet::shading::{mask_circle, terminator_shadow};
pub use crate::planet::surface::compose_surface;
pub use crate::raster::canvas::Canvas;
pub use crate::raster::mask::Mask;
pub use crate::render::pipeline::{PlanetLayers, render_layers, render_planet};
pub use crate::transform::rotate::{rotate_canvas, rotate_mask};

use rayon::prelude::*;

use crate::foundation::core::{Rgb8, canvas_center};
use crate::foundation::error::{OrreryError, OrreryResult};
use crate::foundation::math::trunc_u8;
use crate::raster::canvas::Canvas;

/// Opaque radial gradient from `inner` at the centre to `outer` at the
/// corners.
///
/// `t = min(1, dist / max_dist)` where `max_dist` is the centre-to-corner
/// distance; each channel is `inner * (1 - t) + outer * t` truncated.
#[tracing::instrument(level = "debug")]
pub fn radial_gradient(size: u32, inner: Rgb8, outer: Rgb8) -> OrreryResult<Canvas> {
    if size == 0 {
        return Err(OrreryError::validation("gradient size must be > 0"));
    }
    let center = canvas_center(size);
    let max_dist = (2.0 * center.x * center.x).sqrt();
    let inner = [f64::from(inner.r), f64::from(inner.g), f64::from(inner.b)];
    let outer = [f64::from(outer.r), f64::from(outer.g), f64::from(outer.b)];

    let mut canvas = Canvas::new(size, size);
    canvas
        .data_mut()
        .par_chunks_mut(size as usize * 4)
        .enumerate()
        .for_each(|(y, row)| {
            let dy = y as f64 - center.y;
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let dx = x as f64 - center.x;
                let t = if max_dist > 0.0 {
                    ((dx * dx + dy * dy).sqrt() / max_dist).min(1.0)
                } else {
                    0.0
                };
                for c in 0..3 {
                    px[c] = trunc_u8(inner[c] * (1.0 - t) + outer[c] * t);
                }
                px[3] = 255;
            }
        });
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/generate/gradient.rs"]
mod tests;

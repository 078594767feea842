use rand::Rng;

use crate::foundation::core::{SeededRng, seeded_rng};
use crate::foundation::error::{OrreryError, OrreryResult};
use crate::raster::mask::Mask;

/// Seeded uniform grayscale noise, smoothed with a Gaussian blur.
///
/// Values are drawn row major from `rng`, uniformly over `low..=high`.
pub fn noise_field_with(
    rng: &mut SeededRng,
    size: u32,
    low: u8,
    high: u8,
    blur_sigma: f32,
) -> OrreryResult<Mask> {
    if size == 0 {
        return Err(OrreryError::validation("noise size must be > 0"));
    }
    if low > high {
        return Err(OrreryError::validation(format!(
            "noise bounds are empty: low {low} > high {high}"
        )));
    }
    let n = size as usize * size as usize;
    let data = (0..n)
        .map(|_| rng.random_range(u32::from(low)..=u32::from(high)) as u8)
        .collect();
    Mask::from_raw(size, size, data)?.blur(blur_sigma)
}

/// [`noise_field_with`] using a fresh generator for `seed`.
#[tracing::instrument(level = "debug")]
pub fn noise_field(size: u32, seed: u64, low: u8, high: u8, blur_sigma: f32) -> OrreryResult<Mask> {
    let mut rng = seeded_rng(seed);
    noise_field_with(&mut rng, size, low, high, blur_sigma)
}

#[cfg(test)]
#[path = "../../tests/unit/generate/noise.rs"]
mod tests;

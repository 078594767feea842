use rayon::prelude::*;

use crate::foundation::error::{OrreryError, OrreryResult};
use crate::foundation::math::buffer_len;

/// Kernel half-width for a Gaussian of standard deviation `sigma` (3 sigma).
pub fn kernel_radius(sigma: f32) -> u32 {
    if sigma <= 0.0 {
        0
    } else {
        (3.0 * sigma).ceil() as u32
    }
}

/// Separable Gaussian blur over an interleaved `channels`-wide u8 raster.
///
/// Edges clamp. `sigma == 0` is the identity. A kernel radius wider than the
/// raster is rejected. Weights are quantized to Q16 and renormalized so a
/// constant image is left untouched.
pub fn gaussian_blur(
    src: &[u8],
    width: u32,
    height: u32,
    channels: usize,
    sigma: f32,
) -> OrreryResult<Vec<u8>> {
    let expected_len = buffer_len(width, height, channels)?;
    if src.len() != expected_len {
        return Err(OrreryError::evaluation(
            "gaussian_blur expects src matching width*height*channels",
        ));
    }
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(OrreryError::validation("blur sigma must be finite and >= 0"));
    }
    let radius = kernel_radius(sigma);
    if radius == 0 || expected_len == 0 {
        return Ok(src.to_vec());
    }
    if radius > width.max(height) {
        return Err(OrreryError::validation(format!(
            "blur radius {radius} (sigma {sigma}) exceeds raster extent {width}x{height}"
        )));
    }

    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];

    horizontal_pass(src, &mut tmp, width, channels, &kernel);
    vertical_pass(&tmp, &mut out, width, height, channels, &kernel);
    Ok(out)
}

fn gaussian_kernel_q16(radius: u32, sigma: f32) -> OrreryResult<Vec<u32>> {
    if radius == 0 {
        return Ok(vec![1 << 16]);
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(OrreryError::validation("blur sigma must be > 0"));
    }

    let r = radius as i32;
    let mut weights_f = Vec::<f64>::with_capacity((2 * r + 1) as usize);
    let mut sum = 0.0f64;
    let sigma = sigma as f64;
    let denom = 2.0 * sigma * sigma;
    for i in -r..=r {
        let x = i as f64;
        let w = (-x * x / denom).exp();
        weights_f.push(w);
        sum += w;
    }
    if sum <= 0.0 {
        return Err(OrreryError::evaluation("gaussian kernel sum is zero"));
    }

    let mut weights = Vec::<u32>::with_capacity(weights_f.len());
    let mut acc: i64 = 0;
    for &wf in &weights_f {
        let q = ((wf / sum) * 65536.0).round() as i64;
        let q = q.clamp(0, 65536);
        weights.push(q as u32);
        acc += q;
    }
    let delta = 65536 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        let new_mid = (i64::from(weights[mid]) + delta).clamp(0, 65536);
        weights[mid] = new_mid as u32;
    }

    Ok(weights)
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], width: u32, channels: usize, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    let row_len = width as usize * channels;
    dst.par_chunks_mut(row_len)
        .zip(src.par_chunks(row_len))
        .for_each(|(dst_row, src_row)| {
            let mut acc = vec![0u64; channels];
            for x in 0..w {
                acc.fill(0);
                for (ki, &kw) in k.iter().enumerate() {
                    let sx = (x + ki as i32 - radius).clamp(0, w - 1);
                    let idx = sx as usize * channels;
                    for c in 0..channels {
                        acc[c] += u64::from(kw) * u64::from(src_row[idx + c]);
                    }
                }
                let out_idx = x as usize * channels;
                for c in 0..channels {
                    dst_row[out_idx + c] = q16_to_u8(acc[c]);
                }
            }
        });
}

fn vertical_pass(
    src: &[u8],
    dst: &mut [u8],
    width: u32,
    height: u32,
    channels: usize,
    k: &[u32],
) {
    let radius = (k.len() / 2) as i32;
    let h = height as i32;
    let row_len = width as usize * channels;
    dst.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, dst_row)| {
            let y = y as i32;
            for (i, out) in dst_row.iter_mut().enumerate() {
                let mut acc = 0u64;
                for (ki, &kw) in k.iter().enumerate() {
                    let sy = (y + ki as i32 - radius).clamp(0, h - 1);
                    acc += u64::from(kw) * u64::from(src[sy as usize * row_len + i]);
                }
                *out = q16_to_u8(acc);
            }
        });
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    (v.min(255)) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blur.rs"]
mod tests;

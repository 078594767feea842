//! Whole-raster rotation about the canvas centre with bicubic resampling.
//!
//! Angles are degrees, counter-clockwise as seen on screen (y grows down).
//! The output keeps the input dimensions; samples that fall outside the
//! source read as zero, so corners uncovered by the rotation become
//! transparent (canvas) or excluded (mask).

use rayon::prelude::*;

use crate::foundation::core::{Affine, Point, Vec2};
use crate::foundation::math::round_u8;
use crate::raster::canvas::Canvas;
use crate::raster::mask::Mask;

/// Keys cubic convolution parameter.
const CUBIC_A: f64 = -0.5;

fn cubic_weight(t: f64) -> f64 {
    let t = t.abs();
    if t < 1.0 {
        ((CUBIC_A + 2.0) * t - (CUBIC_A + 3.0)) * t * t + 1.0
    } else if t < 2.0 {
        ((CUBIC_A * t - 5.0 * CUBIC_A) * t + 8.0 * CUBIC_A) * t - 4.0 * CUBIC_A
    } else {
        0.0
    }
}

fn is_identity_angle(angle_deg: f64) -> bool {
    angle_deg.rem_euclid(360.0) == 0.0
}

/// Maps destination pixel centres back to source coordinates.
fn inverse_map(width: u32, height: u32, angle_deg: f64) -> Affine {
    let c = Vec2::new(f64::from(width) / 2.0, f64::from(height) / 2.0);
    Affine::translate(c) * Affine::rotate(angle_deg.to_radians()) * Affine::translate(-c)
}

struct Taps {
    x0: i64,
    y0: i64,
    wx: [f64; 4],
    wy: [f64; 4],
}

fn taps_at(inv: Affine, x: u32, y: u32) -> Taps {
    let p = inv * Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
    let (sx, sy) = (p.x - 0.5, p.y - 0.5);
    let (fx, fy) = (sx.floor(), sy.floor());
    let (tx, ty) = (sx - fx, sy - fy);
    let mut wx = [0.0; 4];
    let mut wy = [0.0; 4];
    for i in 0..4 {
        let o = i as f64 - 1.0;
        wx[i] = cubic_weight(tx - o);
        wy[i] = cubic_weight(ty - o);
    }
    Taps {
        x0: fx as i64 - 1,
        y0: fy as i64 - 1,
        wx,
        wy,
    }
}

/// Accumulate `sample(ix, iy, weight)` over the in-bounds taps.
fn for_each_tap(taps: &Taps, width: u32, height: u32, mut sample: impl FnMut(usize, f64)) {
    for (j, wy) in taps.wy.iter().enumerate() {
        let sy = taps.y0 + j as i64;
        if sy < 0 || sy >= i64::from(height) {
            continue;
        }
        for (i, wx) in taps.wx.iter().enumerate() {
            let sx = taps.x0 + i as i64;
            if sx < 0 || sx >= i64::from(width) {
                continue;
            }
            sample(sy as usize * width as usize + sx as usize, wx * wy);
        }
    }
}

/// Rotate a mask by `angle_deg` about its centre.
pub fn rotate_mask(src: &Mask, angle_deg: f64) -> Mask {
    if is_identity_angle(angle_deg) {
        return src.clone();
    }
    let (w, h) = (src.width(), src.height());
    let inv = inverse_map(w, h, angle_deg);
    let data = src.data();
    let mut out = Mask::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }
    out.data_mut()
        .par_chunks_mut(w as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, dst) in row.iter_mut().enumerate() {
                let taps = taps_at(inv, x as u32, y as u32);
                let mut acc = 0.0;
                for_each_tap(&taps, w, h, |i, wt| acc += wt * f64::from(data[i]));
                *dst = round_u8(acc);
            }
        });
    out
}

/// Rotate a canvas by `angle_deg` about its centre.
///
/// Interpolation runs on premultiplied colour so fully transparent
/// neighbours do not pull colour toward black.
pub fn rotate_canvas(src: &Canvas, angle_deg: f64) -> Canvas {
    if is_identity_angle(angle_deg) {
        return src.clone();
    }
    let (w, h) = (src.width(), src.height());
    let inv = inverse_map(w, h, angle_deg);
    let data = src.data();
    let mut out = Canvas::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }
    out.data_mut()
        .par_chunks_mut(w as usize * 4)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, dst) in row.chunks_exact_mut(4).enumerate() {
                let taps = taps_at(inv, x as u32, y as u32);
                let mut acc = [0.0f64; 4];
                for_each_tap(&taps, w, h, |i, wt| {
                    let px = &data[i * 4..i * 4 + 4];
                    let a = f64::from(px[3]);
                    acc[3] += wt * a;
                    for c in 0..3 {
                        acc[c] += wt * f64::from(px[c]) * a / 255.0;
                    }
                });
                let a = acc[3].clamp(0.0, 255.0);
                let out_a = round_u8(a);
                if out_a == 0 {
                    dst.fill(0);
                    continue;
                }
                for c in 0..3 {
                    dst[c] = round_u8(acc[c].clamp(0.0, a) * 255.0 / a);
                }
                dst[3] = out_a;
            }
        });
    out
}

#[cfg(test)]
#[path = "../../tests/unit/transform/rotate.rs"]
mod tests;

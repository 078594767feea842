//! Single-channel coverage raster and its saturating operations.

use rayon::prelude::*;

use crate::effects::blur::gaussian_blur;
use crate::foundation::core::Rect;
use crate::foundation::error::{OrreryError, OrreryResult};
use crate::foundation::math::{buffer_len, mul_div255_u8};
use crate::raster::draw;

/// Single-channel coverage raster.
///
/// `0` excludes a pixel, `255` includes it fully, anything between is a
/// partial blend weight. Every binary operation requires equal dimensions and
/// saturates into `0..=255`:
///
/// | op          | result                 |
/// |-------------|------------------------|
/// | `invert`    | `255 - a`              |
/// | `subtract`  | `max(0, a - b)`        |
/// | `multiply`  | `round(a * b / 255)`   |
/// | `intersect` | `min(a, b)`            |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Mask {
    /// All-zero mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, 0)
    }

    /// Every value set to `value`.
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self {
            width,
            height,
            data: vec![value; width as usize * height as usize],
        }
    }

    /// Wrap a row-major buffer of exactly `width * height` bytes.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> OrreryResult<Self> {
        if data.len() != buffer_len(width, height, 1)? {
            return Err(OrreryError::evaluation("mask data must be width*height bytes"));
        }
        Ok(Self::from_raw_unchecked(width, height, data))
    }

    pub(crate) fn from_raw_unchecked(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        Self {
            width,
            height,
            data,
        }
    }

    /// `255` inside the circle of `radius` around `(cx, cy)`, `0` elsewhere.
    pub fn disc(width: u32, height: u32, cx: i64, cy: i64, radius: i64) -> Self {
        let mut m = Self::new(width, height);
        m.fill_ellipse(draw::circle_bbox(cx, cy, radius), 255);
        m
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major values.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable view of [`Mask::data`].
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Value at `(x, y)`; panics when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Overwrite `(x, y)`; panics when out of bounds.
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        let w = self.width as usize;
        self.data[y as usize * w + x as usize] = value;
    }

    /// Number of pixels equal to `value`.
    #[cfg(test)]
    pub(crate) fn count(&self, value: u8) -> usize {
        self.data.iter().filter(|&&v| v == value).count()
    }

    pub(crate) fn ensure_same_size(&self, width: u32, height: u32, op: &str) -> OrreryResult<()> {
        if self.width != width || self.height != height {
            return Err(OrreryError::evaluation(format!(
                "{op} expects {}x{} masks, got {width}x{height}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Set every pixel of the ellipse inscribed in `bbox` to `value`.
    pub fn fill_ellipse(&mut self, bbox: Rect, value: u8) {
        let (w, h) = (self.width, self.height);
        draw::for_each_in_ellipse(bbox, w, h, |x, y| self.set(x, y, value));
    }

    /// Apply `f` to every value.
    pub fn map(&self, f: impl Fn(u8) -> u8 + Sync) -> Mask {
        let data = self.data.par_iter().map(|&v| f(v)).collect();
        Self::from_raw_unchecked(self.width, self.height, data)
    }

    /// `255 - a`.
    pub fn invert(&self) -> Mask {
        self.map(|v| 255 - v)
    }

    fn zip_with(&self, other: &Mask, op: &str, f: impl Fn(u8, u8) -> u8 + Sync) -> OrreryResult<Mask> {
        self.ensure_same_size(other.width, other.height, op)?;
        let data = self
            .data
            .par_iter()
            .zip(other.data.par_iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Self::from_raw_unchecked(self.width, self.height, data))
    }

    /// `max(0, a - b)`.
    pub fn subtract(&self, other: &Mask) -> OrreryResult<Mask> {
        self.zip_with(other, "subtract", |a, b| a.saturating_sub(b))
    }

    /// `round(a * b / 255)`.
    pub fn multiply(&self, other: &Mask) -> OrreryResult<Mask> {
        self.zip_with(other, "multiply", |a, b| {
            mul_div255_u8(u16::from(a), u16::from(b))
        })
    }

    /// `min(a, b)`.
    pub fn intersect(&self, other: &Mask) -> OrreryResult<Mask> {
        self.zip_with(other, "intersect", |a, b| a.min(b))
    }

    /// Separable Gaussian blur of the values.
    pub fn blur(&self, sigma: f32) -> OrreryResult<Mask> {
        let data = gaussian_blur(&self.data, self.width, self.height, 1, sigma)?;
        Ok(Self::from_raw_unchecked(self.width, self.height, data))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/mask.rs"]
mod tests;

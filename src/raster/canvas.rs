//! Straight-alpha RGBA8 raster.

use rayon::prelude::*;

use crate::effects::blur::gaussian_blur;
use crate::foundation::core::{Rect, Rgb8, Rgba8};
use crate::foundation::error::{OrreryError, OrreryResult};
use crate::foundation::math::buffer_len;
use crate::raster::draw;
use crate::raster::mask::Mask;

/// RGBA8 raster with straight (non-premultiplied) alpha, row major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    /// Fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgba8::TRANSPARENT)
    }

    /// Every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Rgba8) -> Self {
        let n = width as usize * height as usize;
        Self {
            width,
            height,
            data: color.to_array().repeat(n),
        }
    }

    /// Wrap a row-major RGBA8 buffer of exactly `width * height * 4` bytes.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> OrreryResult<Self> {
        if data.len() != buffer_len(width, height, 4)? {
            return Err(OrreryError::evaluation(
                "canvas data must be width*height*4 bytes",
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build an RGBA canvas from a gray channel used for r, g and b plus an
    /// independent alpha channel.
    pub fn from_gray_alpha(gray: &Mask, alpha: &Mask) -> OrreryResult<Self> {
        gray.ensure_same_size(alpha.width(), alpha.height(), "from_gray_alpha")?;
        let data = gray
            .data()
            .iter()
            .zip(alpha.data())
            .flat_map(|(&g, &a)| [g, g, g, a])
            .collect();
        Self::from_raw(gray.width(), gray.height(), data)
    }

    /// Solid colour whose alpha is taken from `alpha`.
    pub fn from_color_alpha(color: Rgb8, alpha: &Mask) -> OrreryResult<Self> {
        let data = alpha
            .data()
            .iter()
            .flat_map(|&a| [color.r, color.g, color.b, a])
            .collect();
        Self::from_raw(alpha.width(), alpha.height(), data)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable view of [`Canvas::data`].
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Give up the pixel buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    fn idx(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Pixel at `(x, y)`; panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        let i = self.idx(x, y);
        Rgba8::from_array([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Overwrite pixel `(x, y)`; panics when out of bounds.
    pub fn put_pixel(&mut self, x: u32, y: u32, color: Rgba8) {
        let i = self.idx(x, y);
        self.data[i..i + 4].copy_from_slice(&color.to_array());
    }

    pub(crate) fn ensure_same_size(&self, width: u32, height: u32, op: &str) -> OrreryResult<()> {
        if self.width != width || self.height != height {
            return Err(OrreryError::evaluation(format!(
                "{op} expects {}x{} rasters, got {width}x{height}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Copy of the alpha channel.
    pub fn alpha(&self) -> Mask {
        let data = self.data.chunks_exact(4).map(|px| px[3]).collect();
        Mask::from_raw_unchecked(self.width, self.height, data)
    }

    /// Copy of this canvas with the alpha channel replaced by `alpha`.
    pub fn with_alpha(&self, alpha: &Mask) -> OrreryResult<Canvas> {
        self.ensure_same_size(alpha.width(), alpha.height(), "with_alpha")?;
        let mut out = self.clone();
        out.data
            .par_chunks_exact_mut(4)
            .zip(alpha.data().par_iter())
            .for_each(|(px, &a)| px[3] = a);
        Ok(out)
    }

    /// Overwrite the inclusive rectangle `bbox` with `color` (no blending).
    pub fn fill_rect(&mut self, bbox: Rect, color: Rgba8) {
        let (w, h) = (self.width, self.height);
        draw::for_each_in_rect(bbox, w, h, |x, y| self.put_pixel(x, y, color));
    }

    /// Overwrite the ellipse inscribed in `bbox` with `color` (no blending).
    pub fn fill_ellipse(&mut self, bbox: Rect, color: Rgba8) {
        let (w, h) = (self.width, self.height);
        draw::for_each_in_ellipse(bbox, w, h, |x, y| self.put_pixel(x, y, color));
    }

    /// Overwrite an inward-growing ellipse outline with `color`.
    pub fn stroke_ellipse(&mut self, bbox: Rect, stroke: u32, color: Rgba8) {
        let (w, h) = (self.width, self.height);
        draw::for_each_on_ellipse_outline(bbox, stroke, w, h, |x, y| {
            self.put_pixel(x, y, color)
        });
    }

    /// Gaussian blur in premultiplied space, so transparent surroundings do
    /// not bleed black into coloured edges.
    pub fn blur(&self, sigma: f32) -> OrreryResult<Canvas> {
        let premul = premultiply(&self.data);
        let blurred = gaussian_blur(&premul, self.width, self.height, 4, sigma)?;
        Canvas::from_raw(self.width, self.height, unpremultiply(&blurred))
    }
}

pub(crate) fn premultiply(straight: &[u8]) -> Vec<u8> {
    let mut out = straight.to_vec();
    out.par_chunks_exact_mut(4).for_each(|px| {
        let a = u32::from(px[3]);
        for c in &mut px[..3] {
            *c = ((u32::from(*c) * a + 127) / 255) as u8;
        }
    });
    out
}

pub(crate) fn unpremultiply(premul: &[u8]) -> Vec<u8> {
    let mut out = premul.to_vec();
    out.par_chunks_exact_mut(4).for_each(|px| {
        let a = u32::from(px[3]);
        if a == 0 {
            px[..3].fill(0);
            return;
        }
        for c in &mut px[..3] {
            *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    });
    out
}

#[cfg(test)]
#[path = "../../tests/unit/raster/canvas.rs"]
mod tests;

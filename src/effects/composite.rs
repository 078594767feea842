use rayon::prelude::*;

use crate::foundation::error::{OrreryError, OrreryResult};
use crate::raster::canvas::Canvas;

/// One straight-alpha pixel as `[r, g, b, a]`.
pub type StraightRgba8 = [u8; 4];

/// Straight-alpha "over": `src` placed on top of `dst`.
///
/// Colour is the alpha-weighted average of both inputs and the result alpha is
/// `sa + da * (1 - sa)`, all in integer arithmetic scaled by 255.
pub fn over(dst: StraightRgba8, src: StraightRgba8) -> StraightRgba8 {
    let sa = u32::from(src[3]);
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let blend = u32::from(dst[3]) * (255 - sa);
    let out_a255 = sa * 255 + blend;
    if out_a255 == 0 {
        return [0, 0, 0, 0];
    }

    let src_w = sa * 255;
    let mut out = [0u8; 4];
    for i in 0..3 {
        let num = u32::from(src[i]) * src_w + u32::from(dst[i]) * blend + out_a255 / 2;
        out[i] = (num / out_a255).min(255) as u8;
    }
    out[3] = ((out_a255 + 127) / 255).min(255) as u8;
    out
}

/// [`over`] applied pixelwise across two equal-length RGBA8 buffers.
pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> OrreryResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(OrreryError::evaluation(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    dst.par_chunks_exact_mut(4)
        .zip(src.par_chunks_exact(4))
        .for_each(|(d, s)| {
            let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
            d.copy_from_slice(&out);
        });
    Ok(())
}

/// Composite `src` over `dst`, returning a new canvas.
pub fn alpha_composite(dst: &Canvas, src: &Canvas) -> OrreryResult<Canvas> {
    dst.ensure_same_size(src.width(), src.height(), "alpha_composite")?;
    let mut out = dst.clone();
    over_in_place(out.data_mut(), src.data())?;
    Ok(out)
}

/// A named layer in a [`LayerStack`].
#[derive(Clone, Debug)]
pub struct Layer {
    /// Label used in size-mismatch errors and [`LayerStack::names`].
    pub name: &'static str,
    /// Layer pixels.
    pub canvas: Canvas,
}

/// Ordered list of layers flattened bottom to top with [`over`].
///
/// The stack owns its layers so the order in which they are pushed is exactly
/// the order in which they are composited.
#[derive(Clone, Debug)]
pub struct LayerStack {
    width: u32,
    height: u32,
    layers: Vec<Layer>,
}

impl LayerStack {
    /// Empty stack whose layers must all be `width` x `height`.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            layers: Vec::new(),
        }
    }

    /// Append `canvas` on top; size mismatches are evaluation errors.
    pub fn push(&mut self, name: &'static str, canvas: Canvas) -> OrreryResult<()> {
        canvas
            .ensure_same_size(self.width, self.height, name)
            .map_err(|_| {
                OrreryError::evaluation(format!(
                    "layer '{name}' is {}x{}, stack expects {}x{}",
                    canvas.width(),
                    canvas.height(),
                    self.width,
                    self.height
                ))
            })?;
        self.layers.push(Layer { name, canvas });
        Ok(())
    }

    /// Builder form of [`LayerStack::push`].
    pub fn with(mut self, name: &'static str, canvas: Canvas) -> OrreryResult<Self> {
        self.push(name, canvas)?;
        Ok(self)
    }

    /// Layer names, bottom first.
    pub fn names(&self) -> Vec<&'static str> {
        self.layers.iter().map(|l| l.name).collect()
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// True when no layer has been pushed.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Fold every layer onto a transparent canvas.
    pub fn flatten(&self) -> OrreryResult<Canvas> {
        self.flatten_onto(Canvas::new(self.width, self.height))
    }

    /// Fold every layer onto `base`.
    pub fn flatten_onto(&self, base: Canvas) -> OrreryResult<Canvas> {
        base.ensure_same_size(self.width, self.height, "layer stack base")?;
        let mut acc = base;
        for layer in &self.layers {
            tracing::trace!(layer = layer.name, "composite layer");
            over_in_place(acc.data_mut(), layer.canvas.data())?;
        }
        Ok(acc)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;

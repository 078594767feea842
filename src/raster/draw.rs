//! Scanline coverage for the few primitives the generator draws.
//!
//! Bounding boxes are inclusive pixel coordinates: `[x0, y0, x1, y1]` covers
//! columns `x0..=x1` and rows `y0..=y1`. Pixel `(x, y)` is sampled at its
//! integer coordinate. Callers receive every covered in-bounds pixel once.

use crate::foundation::core::{Point, Rect};

fn clamp_span(lo: f64, hi: f64, limit: u32) -> Option<(u32, u32)> {
    if limit == 0 {
        return None;
    }
    let lo = lo.ceil().max(0.0);
    let hi = hi.floor().min(f64::from(limit - 1));
    if lo > hi {
        return None;
    }
    Some((lo as u32, hi as u32))
}

/// Visit every pixel of the inclusive rectangle `bbox`, clipped to the raster.
pub fn for_each_in_rect(bbox: Rect, width: u32, height: u32, mut plot: impl FnMut(u32, u32)) {
    let Some((x0, x1)) = clamp_span(bbox.x0, bbox.x1, width) else {
        return;
    };
    let Some((y0, y1)) = clamp_span(bbox.y0, bbox.y1, height) else {
        return;
    };
    for y in y0..=y1 {
        for x in x0..=x1 {
            plot(x, y);
        }
    }
}

fn semi_axes(bbox: Rect) -> (Point, f64, f64) {
    let a = (bbox.width().abs() / 2.0).max(0.5);
    let b = (bbox.height().abs() / 2.0).max(0.5);
    (bbox.center(), a, b)
}

fn inside(p: Point, c: Point, a: f64, b: f64) -> bool {
    let dx = (p.x - c.x) / a;
    let dy = (p.y - c.y) / b;
    dx * dx + dy * dy <= 1.0
}

/// Visit every pixel inside the ellipse inscribed in `bbox`.
pub fn for_each_in_ellipse(bbox: Rect, width: u32, height: u32, mut plot: impl FnMut(u32, u32)) {
    let (c, a, b) = semi_axes(bbox);
    let Some((y0, y1)) = clamp_span(c.y - b, c.y + b, height) else {
        return;
    };
    for y in y0..=y1 {
        let dy = (f64::from(y) - c.y) / b;
        let rem = 1.0 - dy * dy;
        if rem < 0.0 {
            continue;
        }
        let half = a * rem.sqrt();
        let Some((x0, x1)) = clamp_span(c.x - half, c.x + half, width) else {
            continue;
        };
        for x in x0..=x1 {
            if inside(Point::new(f64::from(x), f64::from(y)), c, a, b) {
                plot(x, y);
            }
        }
    }
}

/// Visit the pixels of an ellipse outline `stroke` pixels wide, growing inward
/// from the boundary of the ellipse inscribed in `bbox`.
pub fn for_each_on_ellipse_outline(
    bbox: Rect,
    stroke: u32,
    width: u32,
    height: u32,
    mut plot: impl FnMut(u32, u32),
) {
    let (c, a, b) = semi_axes(bbox);
    let w = f64::from(stroke);
    let (ia, ib) = (a - w, b - w);
    for_each_in_ellipse(bbox, width, height, |x, y| {
        let p = Point::new(f64::from(x), f64::from(y));
        if ia <= 0.0 || ib <= 0.0 || !inside(p, c, ia, ib) {
            plot(x, y);
        }
    });
}

/// Inclusive bounding box of a circle of radius `r` around `(cx, cy)`.
pub fn circle_bbox(cx: i64, cy: i64, r: i64) -> Rect {
    ellipse_bbox(cx, cy, r, r)
}

/// Inclusive bounding box of an axis-aligned ellipse with integer semi-axes.
pub fn ellipse_bbox(cx: i64, cy: i64, rx: i64, ry: i64) -> Rect {
    Rect::new(
        (cx - rx) as f64,
        (cy - ry) as f64,
        (cx + rx) as f64,
        (cy + ry) as f64,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/raster/draw.rs"]
mod tests;

use crate::foundation::error::{OrreryError, OrreryResult};

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Byte length of a `width * height * channels` buffer, or an error on overflow.
pub(crate) fn buffer_len(width: u32, height: u32, channels: usize) -> OrreryResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(channels))
        .ok_or_else(|| OrreryError::evaluation("raster buffer size overflow"))
}

/// Float to u8 by truncation toward zero after clamping, the conversion every
/// generator stage uses.
pub(crate) fn trunc_u8(v: f64) -> u8 {
    v.clamp(0.0, 255.0) as u8
}

/// Float to u8 with round-half-up, used when resampling.
pub(crate) fn round_u8(v: f64) -> u8 {
    (v + 0.5).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;

//! HSV <-> RGB565 conversion
//!
//! Hue, saturation and value are all normalized to `[0, 1]`. Hue is circular:
//! every hue this module produces lies in `[0, 1)`.
//!
//! Packing truncates each channel to its bit width. The sector math leaves
//! float noise on values that should land exactly on a channel step, so a
//! scaled channel within [`QUANT_TOLERANCE`] of the next step is counted as
//! that step. With it, every RGB565 value survives `to_hsv` -> `to_rgb565`
//! unchanged.

use serde::{Deserialize, Serialize};

use crate::color_utils::{pack_rgb565, rgb565_channels, BLUE_MAX, GREEN_MAX, RED_MAX};

/// Fraction of one channel step absorbed when truncating
pub const QUANT_TOLERANCE: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    pub fn to_rgb565(self) -> u16 {
        hsv_to_rgb565(self.h, self.s, self.v)
    }

    /// Saturation below `epsilon` means the hue carries no information
    pub fn is_achromatic(&self, epsilon: f32) -> bool {
        self.s < epsilon
    }
}

/// Wrap any hue into `[0, 1)`. Non-finite hues map to 0.
pub fn wrap_hue(h: f32) -> f32 {
    if !h.is_finite() {
        return 0.0;
    }

    let wrapped = h - libm::floorf(h);
    // Tiny negative inputs round up to exactly 1.0
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

/// Unpack an RGB565 color into normalized HSV
pub fn rgb565_to_hsv(color: u16) -> Hsv {
    let (r5, g6, b5) = rgb565_channels(color);
    let r = r5 as f32 / RED_MAX as f32;
    let g = g6 as f32 / GREEN_MAX as f32;
    let b = b5 as f32 / BLUE_MAX as f32;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    if delta == 0.0 {
        // Achromatic: hue is undefined, fixed to 0
        return Hsv::new(0.0, s, v);
    }

    let sector = if max == r {
        (g - b) / delta
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsv::new(wrap_hue(sector / 6.0), s, v)
}

/// Expand normalized HSV into an RGB565 color.
///
/// Hue is wrapped, saturation and value are clamped to `[0, 1]` and NaN
/// components are treated as 0.
pub fn hsv_to_rgb565(h: f32, s: f32, v: f32) -> u16 {
    let h = wrap_hue(h);
    let s = clamp_unit(s);
    let v = clamp_unit(v);

    let h6 = h * 6.0;
    let floor = libm::floorf(h6);
    let f = h6 - floor;
    let sector = (floor as i32).rem_euclid(6);

    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    pack_rgb565(
        quantize(r, RED_MAX),
        quantize(g, GREEN_MAX),
        quantize(b, BLUE_MAX),
    )
}

fn clamp_unit(x: f32) -> f32 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

fn quantize(channel: f32, max: u16) -> u8 {
    let scaled = channel * max as f32 + QUANT_TOLERANCE;
    (scaled as u16).min(max) as u8
}

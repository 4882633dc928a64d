//! Gradient generators for gauge and chart widgets
//!
//! Both generators return a fresh buffer owned by the caller. A request that
//! cannot produce a meaningful gradient (no samples for a shade, fewer than
//! two for a blend) yields an empty buffer rather than a partial one.

use heapless::Vec as FixedVec;

use crate::colors::Color;
use crate::config::GradientConfig;
use crate::hsv::{hsv_to_rgb565, wrap_hue, Hsv};

pub type Gradient = Vec<Color>;

/// Brightness ramp of a single fully saturated hue, from v = 0.3 up to 1.0
pub fn shade_gradient(hue: f32, count: usize) -> Gradient {
    shade_gradient_with(hue, count, &GradientConfig::default())
}

pub fn shade_gradient_with(hue: f32, count: usize, config: &GradientConfig) -> Gradient {
    if count == 0 {
        log::debug!("shade gradient requested with no samples");
        return Vec::new();
    }

    (0..count)
        .map(|i| shade_sample(hue, i, count, config))
        .collect()
}

/// Allocation-free [`shade_gradient`]. `None` when `count` exceeds `N`.
pub fn shade_gradient_fixed<const N: usize>(hue: f32, count: usize) -> Option<FixedVec<Color, N>> {
    if count > N {
        log::warn!("shade gradient of {} samples does not fit in {}", count, N);
        return None;
    }

    let config = GradientConfig::default();
    let mut out = FixedVec::new();
    for i in 0..count {
        out.push(shade_sample(hue, i, count, &config)).ok()?;
    }
    Some(out)
}

fn shade_sample(hue: f32, index: usize, count: usize, config: &GradientConfig) -> Color {
    let v = step(config.shade_min_value, config.shade_max_value, index, count);
    Color(hsv_to_rgb565(hue, config.shade_saturation, v))
}

/// Hue-aware blend from `start` to `end`, both endpoints included.
///
/// Hue travels the shorter way around the color wheel. A gray endpoint takes
/// the hue of the other endpoint so the blend does not sweep through
/// unrelated hues. Gray means a quantized 8-bit gray (see [`Color::is_gray`])
/// or a saturation below the configured epsilon.
pub fn blend_colors(start: Color, end: Color, count: usize) -> Gradient {
    blend_colors_with(start, end, count, &GradientConfig::default())
}

pub fn blend_colors_with(
    start: Color,
    end: Color,
    count: usize,
    config: &GradientConfig,
) -> Gradient {
    match BlendPath::new(start, end, count, config.achromatic_epsilon) {
        Some(path) => (0..count).map(|i| path.sample(i)).collect(),
        None => Vec::new(),
    }
}

/// Allocation-free [`blend_colors`]. `None` when `count` exceeds `N`.
pub fn blend_colors_fixed<const N: usize>(
    start: Color,
    end: Color,
    count: usize,
) -> Option<FixedVec<Color, N>> {
    if count > N {
        log::warn!("blend of {} samples does not fit in {}", count, N);
        return None;
    }

    let mut out = FixedVec::new();
    let epsilon = GradientConfig::default().achromatic_epsilon;
    if let Some(path) = BlendPath::new(start, end, count, epsilon) {
        for i in 0..count {
            out.push(path.sample(i)).ok()?;
        }
    }
    Some(out)
}

/// Signed hue difference taking the shorter arc, in `[-0.5, 0.5]`
pub fn shortest_hue_delta(from: f32, to: f32) -> f32 {
    let dh = to - from;
    if dh > 0.5 {
        dh - 1.0
    } else if dh < -0.5 {
        dh + 1.0
    } else {
        dh
    }
}

struct BlendPath {
    first: Color,
    last: Color,
    start: Hsv,
    end: Hsv,
    hue_delta: f32,
    count: usize,
}

impl BlendPath {
    fn new(start: Color, end: Color, count: usize, epsilon: f32) -> Option<Self> {
        if count < 2 {
            log::debug!("blend of {} to {} needs at least 2 samples, got {}", start, end, count);
            return None;
        }

        let original_from = start.to_hsv();
        let original_to = end.to_hsv();
        let mut from = original_from;
        let mut to = original_to;

        if start.is_gray() || from.is_achromatic(epsilon) {
            from.h = to.h;
        }
        if end.is_gray() || to.is_achromatic(epsilon) {
            to.h = from.h;
        }

        Some(Self {
            // Endpoints keep their own hue even when it was borrowed for the path
            first: Color::from_hsv(original_from),
            last: Color::from_hsv(original_to),
            start: from,
            end: to,
            hue_delta: shortest_hue_delta(from.h, to.h),
            count,
        })
    }

    fn sample(&self, index: usize) -> Color {
        let last = self.count - 1;
        if index == 0 {
            return self.first;
        }
        if index >= last {
            return self.last;
        }

        let t = index as f32 / last as f32;
        let h = wrap_hue(self.start.h + self.hue_delta * t);
        let s = lerp(self.start.s, self.end.s, t);
        let v = lerp(self.start.v, self.end.v, t);
        Color(hsv_to_rgb565(h, s, v))
    }
}

/// `index` of `count` evenly spaced values from `from` to `to`. Both ends are
/// hit exactly; a single sample sits at `from`.
fn step(from: f32, to: f32, index: usize, count: usize) -> f32 {
    if count <= 1 || index == 0 {
        return from;
    }
    let last = count - 1;
    if index >= last {
        return to;
    }
    lerp(from, to, index as f32 / last as f32)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

//! Panel Color - RGB565/HSV color handling for embedded control-panel displays
//!
//! Hardware-independent color conversion, gradient generation and gauge
//! palettes. Everything here runs on the host; display drivers consume the
//! packed [`Color`] values (or `embedded_graphics` `Rgb565`) directly.

pub mod color_utils;
pub mod colors;
pub mod config;
pub mod gradient;
pub mod hsv;
pub mod logging;
pub mod palette;

#[cfg(test)]
mod tests;

pub use colors::Color;
pub use config::{Config, GradientConfig, PaletteConfig, PaletteKind};
pub use gradient::{blend_colors, shade_gradient, Gradient};
pub use hsv::{hsv_to_rgb565, rgb565_to_hsv, Hsv};
pub use palette::GaugePalette;

// Packed RGB565 color type and named color definitions

use anyhow::{bail, Context, Result};
use core::fmt;
use core::str::FromStr;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics_core::pixelcolor::raw::{RawData, RawU16};
use serde::{Deserialize, Serialize};

use crate::color_utils;
use crate::hsv::{self, Hsv};

/// A 16-bit RGB565 color, R:G:B = 5:6:5 from the most significant bit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u16);

impl Color {
    // Basic colors
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xFFFF);
    pub const RED: Color = Color(0xF800);
    pub const GREEN: Color = Color(0x07E0);
    pub const BLUE: Color = Color(0x001F);
    pub const YELLOW: Color = Color(0xFFE0);
    pub const CYAN: Color = Color(0x07FF);
    pub const MAGENTA: Color = Color(0xF81F);
    pub const ORANGE: Color = Color(0xFD20);
    pub const GRAY: Color = Color(0x8410);
    pub const DARK_GRAY: Color = Color(0x4208);
    pub const LIGHT_GRAY: Color = Color(0xC618);

    // Status colors used by gauges and charts
    pub const PRIMARY_BLUE: Color = Color(0x3D7F);
    pub const SUCCESS_GREEN: Color = Color(0x2746);
    pub const WARNING_AMBER: Color = Color(0xFDE0);
    pub const ERROR_RED: Color = Color(0xE986);
    pub const ACCENT_ORANGE: Color = Color(0xFBE0);
    pub const CHART_GRID: Color = Color(0x2124);

    pub const fn raw(self) -> u16 {
        self.0
    }

    pub fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        Color(color_utils::rgb888_to_rgb565(r, g, b))
    }

    pub fn to_rgb888(self) -> (u8, u8, u8) {
        color_utils::rgb565_to_rgb888(self.0)
    }

    /// Raw 5/6/5-bit fields
    pub fn channels(self) -> (u8, u8, u8) {
        color_utils::rgb565_channels(self.0)
    }

    pub fn to_hsv(self) -> Hsv {
        hsv::rgb565_to_hsv(self.0)
    }

    pub fn from_hsv(hsv: Hsv) -> Self {
        Color(hsv::hsv_to_rgb565(hsv.h, hsv.s, hsv.v))
    }

    /// Gray as far as RGB565 can express it. Quantization leaves packed grays
    /// with a small saturation, so `to_hsv` alone cannot tell.
    pub fn is_gray(self) -> bool {
        color_utils::is_quantized_gray(self.0)
    }

    /// `#RRGGBB` form of the RGB888 expansion
    pub fn to_hex_string(self) -> String {
        let (r, g, b) = self.to_rgb888();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Parse `#RRGGBB` (RGB888, quantized) or `0xNNNN` (raw RGB565)
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();

        if let Some(raw) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            if raw.is_empty() || raw.len() > 4 || !is_hex(raw) {
                bail!("RGB565 literal '{}' must have 1 to 4 hex digits", text);
            }
            let value = u16::from_str_radix(raw, 16)
                .with_context(|| format!("invalid RGB565 literal '{}'", text))?;
            return Ok(Color(value));
        }

        let hex = text.strip_prefix('#').unwrap_or(text);
        if hex.len() != 6 || !is_hex(hex) {
            bail!("color '{}' is not in #RRGGBB form", text);
        }
        let rgb = u32::from_str_radix(hex, 16)
            .with_context(|| format!("invalid hex color '{}'", text))?;

        Ok(Color::from_rgb888(
            (rgb >> 16) as u8,
            (rgb >> 8) as u8,
            rgb as u8,
        ))
    }
}

// `from_str_radix` alone lets a leading sign through
fn is_hex(digits: &str) -> bool {
    digits.bytes().all(|b| b.is_ascii_hexdigit())
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse(s)
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Color(raw)
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl From<Color> for Rgb565 {
    fn from(color: Color) -> Self {
        Rgb565::from(RawU16::new(color.0))
    }
}

impl From<Rgb565> for Color {
    fn from(color: Rgb565) -> Self {
        Color(RawU16::from(color).into_inner())
    }
}

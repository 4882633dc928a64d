/// RGB565 packing and pixel-level color manipulation
///
/// These helpers work on raw packed values so they can be handed straight to
/// a display driver. Nothing here touches hardware.

pub const RED_MAX: u16 = 0x1F;
pub const GREEN_MAX: u16 = 0x3F;
pub const BLUE_MAX: u16 = 0x1F;

/// Convert RGB888 to RGB565 by keeping the high-order bits of each channel
pub fn rgb888_to_rgb565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | ((b as u16 & 0xF8) >> 3)
}

/// Widen a packed color to RGB888, filling the low bits from the high ones
/// so that full-scale fields map to 0xFF
pub fn rgb565_to_rgb888(color: u16) -> (u8, u8, u8) {
    let (r, g, b) = rgb565_channels(color);
    (widen(r, 5), widen(g, 6), widen(b, 5))
}

fn widen(field: u8, bits: u32) -> u8 {
    let shifted = field << (8 - bits);
    shifted | (shifted >> bits)
}

/// Split a packed color into its raw 5/6/5-bit fields
pub fn rgb565_channels(color: u16) -> (u8, u8, u8) {
    let r = ((color >> 11) & RED_MAX) as u8;
    let g = ((color >> 5) & GREEN_MAX) as u8;
    let b = (color & BLUE_MAX) as u8;
    (r, g, b)
}

/// Pack raw 5/6/5-bit fields. Out-of-range bits are masked off.
pub fn pack_rgb565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 & RED_MAX) << 11) | ((g as u16 & GREEN_MAX) << 5) | (b as u16 & BLUE_MAX)
}

/// True when the packed value is what `rgb888_to_rgb565` makes of an 8-bit
/// gray. Green carries one extra bit, so its top five bits must match.
pub fn is_quantized_gray(color: u16) -> bool {
    let (r, g, b) = rgb565_channels(color);
    r == b && g >> 1 == r
}

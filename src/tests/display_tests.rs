use crate::colors::Color;
use crate::config::Config;
use crate::gradient::{blend_colors, shade_gradient};
use crate::palette::palettes_from_config;
use embedded_graphics::mock_display::MockDisplay;
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

/// Draw one 4x4 cell per gradient entry along the top row
fn draw_bar(display: &mut MockDisplay<Rgb565>, colors: &[Color]) {
    for (i, color) in colors.iter().enumerate() {
        Rectangle::new(Point::new(i as i32 * 4, 0), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::from(*color)))
            .draw(display)
            .unwrap();
    }
}

#[test]
fn test_gradient_bar_reaches_display_unchanged() {
    let colors = blend_colors(Color::GREEN, Color::RED, 8);
    let mut display = MockDisplay::new();
    draw_bar(&mut display, &colors);

    for (i, color) in colors.iter().enumerate() {
        let pixel = display.get_pixel(Point::new(i as i32 * 4 + 1, 2));
        assert_eq!(pixel.map(Color::from), Some(*color));
    }
    assert_eq!(display.get_pixel(Point::new(0, 0)), Some(Rgb565::GREEN));
    assert_eq!(display.get_pixel(Point::new(31, 3)), Some(Rgb565::RED));
    assert_eq!(display.get_pixel(Point::new(32, 0)), None);
}

#[test]
fn test_shade_bar_gets_brighter_left_to_right() {
    let colors = shade_gradient(0.0, 6);
    let mut display = MockDisplay::new();
    draw_bar(&mut display, &colors);

    let reds: Vec<u8> = (0..6)
        .filter_map(|i| display.get_pixel(Point::new(i * 4, 0)))
        .map(|pixel| pixel.r())
        .collect();
    assert_eq!(reds.len(), 6);
    for pair in reds.windows(2) {
        assert!(pair[0] <= pair[1], "{reds:?}");
    }
    assert_eq!(*reds.last().unwrap(), Rgb565::MAX_R);
}

#[test]
fn test_gauge_needle_color_tracks_reading() {
    let palettes = palettes_from_config(&Config::default()).unwrap();
    let temperature = &palettes[0];

    let cold = temperature.color_for(5.0);
    let hot = temperature.color_for(95.0);

    // Green end is cold, red end is hot
    let (cold_r, cold_g, _) = cold.channels();
    let (hot_r, hot_g, _) = hot.channels();
    assert!(cold_g as f32 / 63.0 > cold_r as f32 / 31.0);
    assert!(hot_r as f32 / 31.0 > hot_g as f32 / 63.0);
}

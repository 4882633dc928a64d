use crate::color_utils::{rgb565_channels, rgb888_to_rgb565};
use crate::colors::Color;
use crate::gradient::{blend_colors, shade_gradient, shortest_hue_delta};
use crate::hsv::{hsv_to_rgb565, rgb565_to_hsv};
use proptest::prelude::*;
use quickcheck_macros::quickcheck;

fn hue_in_range(h: f32) -> bool {
    (0.0..1.0).contains(&h)
}

proptest! {
    #[test]
    fn prop_packing_arbitrary_floats_never_escapes_ranges(
        h in proptest::num::f32::ANY,
        s in proptest::num::f32::ANY,
        v in proptest::num::f32::ANY,
    ) {
        let packed = hsv_to_rgb565(h, s, v);
        let hsv = rgb565_to_hsv(packed);
        prop_assert!(hue_in_range(hsv.h));
        prop_assert!((0.0..=1.0).contains(&hsv.s));
        prop_assert!((0.0..=1.0).contains(&hsv.v));
        // Once quantized, further round trips are stable
        prop_assert_eq!(hsv.to_rgb565(), packed);
    }

    #[test]
    fn prop_blend_keeps_length_and_endpoints(
        start in any::<u16>(),
        end in any::<u16>(),
        count in 2usize..48,
    ) {
        let blend = blend_colors(Color(start), Color(end), count);
        prop_assert_eq!(blend.len(), count);
        prop_assert_eq!(blend[0], Color(start));
        prop_assert_eq!(blend[count - 1], Color(end));
        for color in &blend {
            prop_assert!(hue_in_range(color.to_hsv().h));
        }
    }

    #[test]
    fn prop_blend_of_one_color_is_flat(color in any::<u16>(), count in 2usize..24) {
        let blend = blend_colors(Color(color), Color(color), count);
        prop_assert!(blend.iter().all(|c| *c == Color(color)));
    }

    #[test]
    fn prop_shade_brightness_is_monotonic(hue in 0.0f32..1.0, count in 1usize..40) {
        let values: Vec<f32> = shade_gradient(hue, count).iter().map(|c| c.to_hsv().v).collect();
        prop_assert_eq!(values.len(), count);
        for pair in values.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn prop_saturated_blend_stays_on_short_arc(
        from in 0.0f32..1.0,
        to in 0.0f32..1.0,
        count in 3usize..24,
    ) {
        let start = Color(hsv_to_rgb565(from, 1.0, 1.0));
        let end = Color(hsv_to_rgb565(to, 1.0, 1.0));
        let start_h = start.to_hsv().h;
        let arc = shortest_hue_delta(start_h, end.to_hsv().h);
        // Half-turn blends have two equally short arcs
        prop_assume!(arc.abs() < 0.45);

        let low = arc.min(0.0) - 0.02;
        let high = arc.max(0.0) + 0.02;
        for color in blend_colors(start, end, count) {
            let along = shortest_hue_delta(start_h, color.to_hsv().h);
            prop_assert!(along >= low && along <= high, "{} off arc: {} not in {}..{}", color, along, low, high);
        }
    }
}

#[quickcheck]
fn prop_rgb888_packing_keeps_high_bits(r: u8, g: u8, b: u8) -> bool {
    let packed = rgb888_to_rgb565(r, g, b);
    packed == rgb888_to_rgb565(r, g, b) && rgb565_channels(packed) == (r >> 3, g >> 2, b >> 3)
}

#[quickcheck]
fn prop_decoded_hue_is_normalized(raw: u16) -> bool {
    hue_in_range(rgb565_to_hsv(raw).h)
}

#[quickcheck]
fn prop_short_blends_are_empty(start: u16, end: u16, count: bool) -> bool {
    blend_colors(Color(start), Color(end), count as usize).is_empty()
}

//! Brand palette and the supply colour ramp.
//!
//! Served countries shade from light green (fewest supplies) to navy (most),
//! the hero palette. Countries without supply data stay neutral grey and
//! only darken slightly under the pointer.

use crate::content::SUPPLY_RANGE;
use glam::DVec3;
use ratatui::style::Color;

pub const BRAND_GREEN: (u8, u8, u8) = (124, 184, 124); // #7CB87C
pub const BRAND_NAVY: (u8, u8, u8) = (31, 58, 140); // #1F3A8C
pub const BRAND_RED: (u8, u8, u8) = (220, 38, 38); // #DC2626
pub const BRAND_BLUE: (u8, u8, u8) = (91, 141, 238); // #5B8DEE, hover outline

pub const NO_DATA_GREY: (u8, u8, u8) = (209, 213, 219); // #D1D5DB
pub const NO_DATA_GREY_HOVER: (u8, u8, u8) = (156, 163, 175); // #9CA3AF

pub const TEXT_MUTED: (u8, u8, u8) = (156, 163, 175);
pub const TEXT_FAINT: (u8, u8, u8) = (107, 114, 128);
pub const BORDER_GREY: (u8, u8, u8) = (75, 85, 99);

pub fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Per-channel linear mix of two colours, rounded to the nearest integer
/// channel value. `t` outside [0,1] is clamped.
pub fn mix(low: (u8, u8, u8), high: (u8, u8, u8), t: f64) -> Color {
    let low = DVec3::new(low.0 as f64, low.1 as f64, low.2 as f64);
    let high = DVec3::new(high.0 as f64, high.1 as f64, high.2 as f64);
    let c = low.lerp(high, t.clamp(0.0, 1.0));
    Color::Rgb(
        c.x.round() as u8,
        c.y.round() as u8,
        c.z.round() as u8,
    )
}

/// Colour for a served country's supply count: green at the fixed lower
/// bound, navy at the upper, interpolated between. Counts outside the fixed
/// range saturate at the endpoints rather than extrapolating past them.
pub fn supply_color(supplies: u32) -> Color {
    let (lo, hi) = SUPPLY_RANGE;
    let t = (supplies as f64 - lo as f64) / (hi as f64 - lo as f64);
    mix(BRAND_GREEN, BRAND_NAVY, t)
}

/// Fill for a country with no supply data; hover feedback only, the grey
/// carries no data meaning.
pub fn no_data_color(hovered: bool) -> Color {
    if hovered {
        rgb(NO_DATA_GREY_HOVER)
    } else {
        rgb(NO_DATA_GREY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SUPPLY_RANGE;

    fn channels(c: Color) -> (u8, u8, u8) {
        match c {
            Color::Rgb(r, g, b) => (r, g, b),
            _ => panic!("expected an RGB colour"),
        }
    }

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(channels(supply_color(SUPPLY_RANGE.0)), BRAND_GREEN);
        assert_eq!(channels(supply_color(SUPPLY_RANGE.1)), BRAND_NAVY);
    }

    #[test]
    fn out_of_range_counts_saturate() {
        assert_eq!(channels(supply_color(0)), BRAND_GREEN);
        assert_eq!(channels(supply_color(1)), BRAND_GREEN);
        assert_eq!(channels(supply_color(u32::MAX)), BRAND_NAVY);
    }

    #[test]
    fn interior_values_sit_between_endpoints() {
        let (lo, hi) = SUPPLY_RANGE;
        for s in [lo + 1, (lo + hi) / 2, hi - 1] {
            let (r, g, b) = channels(supply_color(s));
            assert!(r <= BRAND_GREEN.0 && r >= BRAND_NAVY.0);
            assert!(g <= BRAND_GREEN.1 && g >= BRAND_NAVY.1);
            assert!(b >= BRAND_GREEN.2 && b <= BRAND_NAVY.2);
        }
    }

    #[test]
    fn midpoint_mix_rounds_per_channel() {
        assert_eq!(channels(mix((0, 0, 0), (255, 10, 1), 0.5)), (128, 5, 1));
    }

    #[test]
    fn ramp_is_monotonic_toward_navy() {
        let (lo, hi) = SUPPLY_RANGE;
        let mut prev_r = 255u8;
        for s in (lo..=hi).step_by(((hi - lo) / 16) as usize) {
            let (r, _, _) = channels(supply_color(s));
            assert!(r <= prev_r, "red channel should fall as supplies rise");
            prev_r = r;
        }
    }

    #[test]
    fn no_data_hover_only_darkens_grey() {
        assert_eq!(channels(no_data_color(false)), NO_DATA_GREY);
        assert_eq!(channels(no_data_color(true)), NO_DATA_GREY_HOVER);
    }
}

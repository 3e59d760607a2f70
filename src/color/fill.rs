//! Span fill algorithms.
//!
//! Every function here takes a forward-ordered `&mut [Rgb]` span. Direction
//! handling (reversed ranges, mirrored gradient stops) is the caller's
//! responsibility; [`crate::PixelView`] does exactly that.

use smart_leds::hsv::hsv2rgb;

use crate::color::{Hsv, Rgb};

/// Saturation used by [`fill_rainbow`], tuned for LED strips.
const RAINBOW_SATURATION: u8 = 240;

/// Hue direction for gradient calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientDirection {
    /// Hue always increments
    Forward,
    /// Hue always decrements
    Backward,
    /// Take the shorter way around the hue circle
    Shortest,
    /// Take the longer way around the hue circle
    Longest,
}

/// Fill the span with a single color
pub fn fill_solid(leds: &mut [Rgb], color: Rgb) {
    leds.fill(color);
}

/// Fill the span with a hue ramp starting at `initial_hue`, stepping by
/// `hue_delta` per pixel.
pub fn fill_rainbow(leds: &mut [Rgb], initial_hue: u8, hue_delta: u8) {
    let mut hue = initial_hue;
    for led in leds.iter_mut() {
        *led = hsv2rgb(Hsv {
            hue,
            sat: RAINBOW_SATURATION,
            val: 255,
        });
        hue = hue.wrapping_add(hue_delta);
    }
}

/// Fill gradient using fixed-point 8.24 arithmetic (ported from `FastLED`)
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::cast_possible_wrap
)]
pub fn fill_gradient(
    leds: &mut [Rgb],
    start_pos: usize,
    start_color: Hsv,
    end_pos: usize,
    end_color: Hsv,
    direction: GradientDirection,
) {
    if leds.is_empty() {
        return;
    }

    // Ensure proper ordering
    let (start_pos, end_pos, mut start_color, mut end_color) = if end_pos < start_pos
    {
        (end_pos, start_pos, end_color, start_color)
    } else {
        (start_pos, end_pos, start_color, end_color)
    };

    // Handle black/white edge cases for hue
    if end_color.val == 0 || end_color.sat == 0 {
        end_color.hue = start_color.hue;
    }
    if start_color.val == 0 || start_color.sat == 0 {
        start_color.hue = end_color.hue;
    }

    // Calculate distances in 8.7 fixed-point
    let sat_distance87 =
        (i16::from(end_color.sat) - i16::from(start_color.sat)) << 7;
    let val_distance87 =
        (i16::from(end_color.val) - i16::from(start_color.val)) << 7;

    let hue_delta = end_color.hue.wrapping_sub(start_color.hue);

    // Determine actual direction based on hue delta
    let actual_direction = match direction {
        GradientDirection::Shortest => {
            if hue_delta > 127 {
                GradientDirection::Backward
            } else {
                GradientDirection::Forward
            }
        }
        GradientDirection::Longest => {
            if hue_delta < 128 {
                GradientDirection::Backward
            } else {
                GradientDirection::Forward
            }
        }
        other => other,
    };

    let hue_distance87: i16 = if actual_direction == GradientDirection::Forward {
        i16::from(hue_delta) << 7
    } else {
        let backward_delta = 256u16.wrapping_sub(u16::from(hue_delta)) as u8;
        -((i16::from(backward_delta)) << 7)
    };

    let pixel_distance = end_pos.saturating_sub(start_pos);
    let divisor = if pixel_distance == 0 {
        1
    } else {
        pixel_distance as i32
    };

    // Calculate 8.23 fixed-point deltas
    let hue_delta823 = ((i32::from(hue_distance87) * 65536) / divisor) * 2;
    let sat_delta823 = ((i32::from(sat_distance87) * 65536) / divisor) * 2;
    let val_delta823 = ((i32::from(val_distance87) * 65536) / divisor) * 2;

    // Initialize 8.24 accumulators
    let mut hue824 = u32::from(start_color.hue) << 24;
    let mut sat824 = u32::from(start_color.sat) << 24;
    let mut val824 = u32::from(start_color.val) << 24;

    let end_pos = end_pos.min(leds.len() - 1);
    for led in leds.iter_mut().take(end_pos + 1).skip(start_pos) {
        *led = hsv2rgb(Hsv {
            hue: (hue824 >> 24) as u8,
            sat: (sat824 >> 24) as u8,
            val: (val824 >> 24) as u8,
        });
        hue824 = hue824.wrapping_add(hue_delta823 as u32);
        sat824 = sat824.wrapping_add(sat_delta823 as u32);
        val824 = val824.wrapping_add(val_delta823 as u32);
    }
}

/// Fill a two-color gradient across the whole span
pub fn fill_gradient_two(
    leds: &mut [Rgb],
    c1: Hsv,
    c2: Hsv,
    direction: GradientDirection,
) {
    if leds.is_empty() {
        return;
    }
    let last = leds.len() - 1;
    fill_gradient(leds, 0, c1, last, c2, direction);
}

/// Fill a three-color gradient, the middle color at the span's center
pub fn fill_gradient_three(
    leds: &mut [Rgb],
    c1: Hsv,
    c2: Hsv,
    c3: Hsv,
    direction: GradientDirection,
) {
    if leds.is_empty() {
        return;
    }

    let len = leds.len();
    let half = len / 2;
    let last = len - 1;

    fill_gradient(leds, 0, c1, half, c2, direction);
    if last > half {
        fill_gradient(leds, half, c2, last, c3, direction);
    }
}

/// Fill a four-color gradient, middle colors at one and two thirds
pub fn fill_gradient_four(
    leds: &mut [Rgb],
    c1: Hsv,
    c2: Hsv,
    c3: Hsv,
    c4: Hsv,
    direction: GradientDirection,
) {
    if leds.is_empty() {
        return;
    }

    let len = leds.len();
    let one_third = len / 3;
    let two_thirds = (len * 2) / 3;
    let last = len - 1;

    fill_gradient(leds, 0, c1, one_third, c2, direction);
    if two_thirds > one_third {
        fill_gradient(leds, one_third, c2, two_thirds, c3, direction);
    }
    if last > two_thirds {
        fill_gradient(leds, two_thirds, c3, last, c4, direction);
    }
}

/// Fill gradient interpolating straight through RGB space, using the same
/// 8.24 fixed-point scheme as the HSV variant.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::cast_possible_wrap
)]
pub fn fill_gradient_rgb(
    leds: &mut [Rgb],
    start_pos: usize,
    start_color: Rgb,
    end_pos: usize,
    end_color: Rgb,
) {
    if leds.is_empty() {
        return;
    }

    let (start_pos, end_pos, start_color, end_color) = if end_pos < start_pos {
        (end_pos, start_pos, end_color, start_color)
    } else {
        (start_pos, end_pos, start_color, end_color)
    };

    let r_distance87 = (i16::from(end_color.r) - i16::from(start_color.r)) << 7;
    let g_distance87 = (i16::from(end_color.g) - i16::from(start_color.g)) << 7;
    let b_distance87 = (i16::from(end_color.b) - i16::from(start_color.b)) << 7;

    let pixel_distance = end_pos.saturating_sub(start_pos);
    let divisor = if pixel_distance == 0 {
        1
    } else {
        pixel_distance as i32
    };

    let r_delta823 = ((i32::from(r_distance87) * 65536) / divisor) * 2;
    let g_delta823 = ((i32::from(g_distance87) * 65536) / divisor) * 2;
    let b_delta823 = ((i32::from(b_distance87) * 65536) / divisor) * 2;

    let mut r824 = u32::from(start_color.r) << 24;
    let mut g824 = u32::from(start_color.g) << 24;
    let mut b824 = u32::from(start_color.b) << 24;

    let end_pos = end_pos.min(leds.len() - 1);
    for led in leds.iter_mut().take(end_pos + 1).skip(start_pos) {
        *led = Rgb {
            r: (r824 >> 24) as u8,
            g: (g824 >> 24) as u8,
            b: (b824 >> 24) as u8,
        };
        r824 = r824.wrapping_add(r_delta823 as u32);
        g824 = g824.wrapping_add(g_delta823 as u32);
        b824 = b824.wrapping_add(b_delta823 as u32);
    }
}

/// Fill a two-color RGB-space gradient across the whole span
pub fn fill_gradient_rgb_two(leds: &mut [Rgb], c1: Rgb, c2: Rgb) {
    if leds.is_empty() {
        return;
    }
    let last = leds.len() - 1;
    fill_gradient_rgb(leds, 0, c1, last, c2);
}

/// Fill a three-color RGB-space gradient, middle color at the center
pub fn fill_gradient_rgb_three(leds: &mut [Rgb], c1: Rgb, c2: Rgb, c3: Rgb) {
    if leds.is_empty() {
        return;
    }

    let len = leds.len();
    let half = len / 2;
    let last = len - 1;

    fill_gradient_rgb(leds, 0, c1, half, c2);
    if last > half {
        fill_gradient_rgb(leds, half, c2, last, c3);
    }
}

/// Fill a four-color RGB-space gradient, middle colors at one and two thirds
pub fn fill_gradient_rgb_four(leds: &mut [Rgb], c1: Rgb, c2: Rgb, c3: Rgb, c4: Rgb) {
    if leds.is_empty() {
        return;
    }

    let len = leds.len();
    let one_third = len / 3;
    let two_thirds = (len * 2) / 3;
    let last = len - 1;

    fill_gradient_rgb(leds, 0, c1, one_third, c2);
    if two_thirds > one_third {
        fill_gradient_rgb(leds, one_third, c2, two_thirds, c3);
    }
    if last > two_thirds {
        fill_gradient_rgb(leds, two_thirds, c3, last, c4);
    }
}

use crate::color::{Rgb, add_colors, scale_color};

/// One-dimensional blur across the span.
///
/// `blur_amount` of 0 leaves the span untouched; 255 spreads each pixel
/// almost entirely into its neighbors. Each pixel keeps `255 - blur_amount`
/// of its light and seeps half the remainder into each neighbor.
pub fn blur1d(leds: &mut [Rgb], blur_amount: u8) {
    let keep = 255 - blur_amount;
    let seep = blur_amount >> 1;
    let mut carryover = Rgb { r: 0, g: 0, b: 0 };

    for i in 0..leds.len() {
        let mut cur = leds[i];
        let part = scale_color(cur, seep);
        cur = scale_color(cur, keep);
        cur = add_colors(cur, carryover);
        if i > 0 {
            leds[i - 1] = add_colors(leds[i - 1], part);
        }
        leds[i] = cur;
        carryover = part;
    }
}

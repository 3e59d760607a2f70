pub use smart_leds::hsv::hsv2rgb;

use crate::{
    color::Rgb,
    math8::{blend8, qadd8, qsub8, scale8, scale8_video},
};

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Add two RGB colors with per-channel saturation
#[inline]
pub const fn add_colors(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: qadd8(a.r, b.r),
        g: qadd8(a.g, b.g),
        b: qadd8(a.b, b.b),
    }
}

/// Subtract an RGB color from another with per-channel saturation
#[inline]
pub const fn sub_colors(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: qsub8(a.r, b.r),
        g: qsub8(a.g, b.g),
        b: qsub8(a.b, b.b),
    }
}

/// Per-channel maximum of two RGB colors
#[inline]
pub fn max_colors(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: a.r.max(b.r),
        g: a.g.max(b.g),
        b: a.b.max(b.b),
    }
}

/// Per-channel minimum of two RGB colors
#[inline]
pub fn min_colors(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: a.r.min(b.r),
        g: a.g.min(b.g),
        b: a.b.min(b.b),
    }
}

/// Scale every channel down by a factor (0-255 = 0.0-1.0)
///
/// May drive a dim channel to zero; see [`scale_color_video`] for the
/// variant that keeps lit channels lit.
#[inline]
pub const fn scale_color(color: Rgb, scale: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, scale),
        g: scale8(color.g, scale),
        b: scale8(color.b, scale),
    }
}

/// Video-safe scale-down: a nonzero channel never reaches zero
#[inline]
pub const fn scale_color_video(color: Rgb, scale: u8) -> Rgb {
    Rgb {
        r: scale8_video(color.r, scale),
        g: scale8_video(color.g, scale),
        b: scale8_video(color.b, scale),
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

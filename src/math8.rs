//! 8-bit fixed-point math helpers.
//!
//! Integer-only arithmetic suitable for embedded targets. A scale factor of
//! 0-255 represents 0.0-1.0.

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Video-safe variant of [`scale8`]: a nonzero value scaled by a nonzero
/// factor never reaches zero.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8_video(value: u8, scale: u8) -> u8 {
    if value == 0 {
        return 0;
    }
    let nonzero = if scale != 0 { 1 } else { 0 };
    (((value as u16 * scale as u16) >> 8) as u8) + nonzero
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

/// Saturating 8-bit addition
#[inline]
pub const fn qadd8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Saturating 8-bit subtraction
#[inline]
pub const fn qsub8(a: u8, b: u8) -> u8 {
    a.saturating_sub(b)
}

/// Saturating 8-bit multiplication
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn qmul8(a: u8, b: u8) -> u8 {
    let product = a as u16 * b as u16;
    if product > 255 { 255 } else { product as u8 }
}

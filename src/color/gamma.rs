use crate::color::Rgb;

/// Gamma-correct a single 8-bit brightness, video-safe: a nonzero input
/// never corrects to zero.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless
)]
fn apply_gamma_video(brightness: u8, gamma: f32) -> u8 {
    let orig = f32::from(brightness) / 255.0;
    let adj = libm::powf(orig, gamma) * 255.0;
    let mut result = adj as u8;
    if brightness > 0 && result == 0 {
        result = 1;
    }
    result
}

/// Apply the same gamma to every channel of every pixel in the span
pub fn napply_gamma_video(leds: &mut [Rgb], gamma: f32) {
    napply_gamma_video_rgb(leds, gamma, gamma, gamma);
}

/// Apply a per-channel gamma to every pixel in the span
pub fn napply_gamma_video_rgb(
    leds: &mut [Rgb],
    gamma_r: f32,
    gamma_g: f32,
    gamma_b: f32,
) {
    for led in leds.iter_mut() {
        led.r = apply_gamma_video(led.r, gamma_r);
        led.g = apply_gamma_video(led.g, gamma_g);
        led.b = apply_gamma_video(led.b, gamma_b);
    }
}

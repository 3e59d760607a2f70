mod blur;
mod fill;
mod gamma;
mod utils;

pub use blur::blur1d;
pub use fill::{
    GradientDirection, fill_gradient, fill_gradient_four, fill_gradient_rgb,
    fill_gradient_rgb_four, fill_gradient_rgb_three, fill_gradient_rgb_two,
    fill_gradient_three, fill_gradient_two, fill_rainbow, fill_solid,
};
pub use gamma::{napply_gamma_video, napply_gamma_video_rgb};
use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use utils::{
    add_colors, blend_colors, hsv2rgb, max_colors, min_colors, rgb_from_u32,
    scale_color, scale_color_video, sub_colors,
};

pub type Rgb = RGB8;
pub type Hsv = HSV;

//! Directional pixel views.
//!
//! A [`PixelView`] is a non-owning window over a contiguous range of LEDs
//! that can be walked forward or in reverse. Logical index 0 is always the
//! first element of the view, whichever direction it runs; batch fills are
//! re-oriented so a mirrored range renders a mirror image of the same
//! pattern, not a scrambled one.

use core::ops::{Index, IndexMut};

use crate::{
    color::{
        self, GradientDirection, Hsv, Rgb, add_colors, blend_colors, max_colors,
        min_colors, scale_color, scale_color_video, sub_colors,
    },
    iter::{Iter, IterMut},
    math8::qmul8,
};

/// A directional view over a mutable span of pixels.
///
/// The slice always covers exactly the addressed physical range, lowest
/// address first; `reversed` flips the logical walk order. Views borrow
/// their storage, so validity and exclusive mutation are enforced by the
/// borrow checker rather than by caller discipline.
#[derive(Debug)]
pub struct PixelView<'a> {
    pixels: &'a mut [Rgb],
    reversed: bool,
}

impl<'a> PixelView<'a> {
    /// Forward view over the whole slice
    pub fn new(pixels: &'a mut [Rgb]) -> Self {
        Self {
            pixels,
            reversed: false,
        }
    }

    /// View over the inclusive range `start..=end` of the slice.
    ///
    /// `start > end` produces a reverse view whose logical first element is
    /// physical index `start`; `start == end` is a forward view of one
    /// element. Panics if either bound is out of range.
    pub fn range(pixels: &'a mut [Rgb], start: usize, end: usize) -> Self {
        if start <= end {
            Self {
                pixels: &mut pixels[start..=end],
                reversed: false,
            }
        } else {
            Self {
                pixels: &mut pixels[end..=start],
                reversed: true,
            }
        }
    }

    /// Number of addressable elements
    pub const fn len(&self) -> usize {
        self.pixels.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Whether logical order runs against physical order
    pub const fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Physical index of logical index `i`
    const fn physical(&self, i: usize) -> usize {
        if self.reversed {
            self.pixels.len() - 1 - i
        } else {
            i
        }
    }

    /// Copy of the pixel at logical index `i`
    pub fn get(&self, i: usize) -> Rgb {
        self.pixels[self.physical(i)]
    }

    /// Sub-view over the inclusive logical range `start..=end`.
    ///
    /// Indices are relative to this view's own addressing, so slicing a
    /// reversed view composes; `start > end` mirrors the sub-range.
    pub fn slice(&mut self, start: usize, end: usize) -> PixelView<'_> {
        let a = self.physical(start);
        let b = self.physical(end);
        PixelView::range(self.pixels, a, b)
    }

    /// Same elements, opposite walk order.
    ///
    /// Reversing twice restores the original element order.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            pixels: self.pixels,
            reversed: !self.reversed,
        }
    }

    /// Forward-ordered span of the underlying pixels.
    ///
    /// When the view is reversed, element order here differs from logical
    /// order; index 0 is the lowest physical address, not `get(0)`.
    pub const fn as_slice(&self) -> &[Rgb] {
        &*self.pixels
    }

    /// Mutable forward-ordered span of the underlying pixels
    pub const fn as_mut_slice(&mut self) -> &mut [Rgb] {
        &mut *self.pixels
    }

    /// Iterate in logical order
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&*self.pixels, self.reversed)
    }

    /// Iterate mutably in logical order
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut::new(&mut *self.pixels, self.reversed)
    }

    /// True iff any element has any nonzero channel
    pub fn is_lit(&self) -> bool {
        self.pixels
            .iter()
            .any(|led| led.r != 0 || led.g != 0 || led.b != 0)
    }

    fn apply(&mut self, f: impl Fn(Rgb) -> Rgb) -> &mut Self {
        for led in self.pixels.iter_mut() {
            *led = f(*led);
        }
        self
    }

    /// Pairwise combine with `rhs`, logical index against logical index,
    /// truncating to the shorter view. The longer view's tail is untouched.
    fn zip_apply(
        &mut self,
        rhs: &PixelView<'_>,
        f: impl Fn(Rgb, Rgb) -> Rgb,
    ) -> &mut Self {
        for (dst, src) in self.iter_mut().zip(rhs.iter()) {
            *dst = f(*dst, *src);
        }
        self
    }

    /// Set every element to `color`
    pub fn fill(&mut self, color: Rgb) -> &mut Self {
        self.pixels.fill(color);
        self
    }

    /// Copy elements pairwise from `rhs`, truncating to the shorter view
    pub fn copy_from(&mut self, rhs: &PixelView<'_>) -> &mut Self {
        self.zip_apply(rhs, |_, src| src)
    }

    /// Saturating add `value` to every channel of every element
    pub fn add_scalar(&mut self, value: u8) -> &mut Self {
        let rhs = Rgb {
            r: value,
            g: value,
            b: value,
        };
        self.apply(|led| add_colors(led, rhs))
    }

    /// Saturating subtract `value` from every channel of every element
    pub fn sub_scalar(&mut self, value: u8) -> &mut Self {
        let rhs = Rgb {
            r: value,
            g: value,
            b: value,
        };
        self.apply(|led| sub_colors(led, rhs))
    }

    /// Saturating pairwise add
    pub fn add(&mut self, rhs: &PixelView<'_>) -> &mut Self {
        self.zip_apply(rhs, add_colors)
    }

    /// Saturating pairwise subtract
    pub fn sub(&mut self, rhs: &PixelView<'_>) -> &mut Self {
        self.zip_apply(rhs, sub_colors)
    }

    /// Saturating increment of every channel
    pub fn incr(&mut self) -> &mut Self {
        self.add_scalar(1)
    }

    /// Saturating decrement of every channel
    pub fn decr(&mut self) -> &mut Self {
        self.sub_scalar(1)
    }

    /// Divide every channel by `divisor`
    pub fn div_scalar(&mut self, divisor: u8) -> &mut Self {
        self.apply(|led| Rgb {
            r: led.r / divisor,
            g: led.g / divisor,
            b: led.b / divisor,
        })
    }

    /// Shift every channel right by `bits`
    pub fn shr(&mut self, bits: u8) -> &mut Self {
        self.apply(|led| Rgb {
            r: led.r >> bits,
            g: led.g >> bits,
            b: led.b >> bits,
        })
    }

    /// Saturating multiply of every channel by `factor`
    pub fn mul_scalar(&mut self, factor: u8) -> &mut Self {
        self.apply(|led| Rgb {
            r: qmul8(led.r, factor),
            g: qmul8(led.g, factor),
            b: qmul8(led.b, factor),
        })
    }

    /// Scale every element down by `scale` (0-255 = 0.0-1.0); dim channels
    /// may reach zero
    pub fn scale_down(&mut self, scale: u8) -> &mut Self {
        self.apply(|led| scale_color(led, scale))
    }

    /// Video-safe scale-down: a lit channel never goes fully dark
    pub fn scale_down_video(&mut self, scale: u8) -> &mut Self {
        self.apply(|led| scale_color_video(led, scale))
    }

    /// Dim by `fade` out of 255, allowing channels to reach zero
    pub fn fade_to_black_by(&mut self, fade: u8) -> &mut Self {
        self.scale_down(255 - fade)
    }

    /// Dim by `fade` out of 255, keeping lit channels lit
    pub fn fade_light_by(&mut self, fade: u8) -> &mut Self {
        self.scale_down_video(255 - fade)
    }

    /// Raise every channel to at least `value`
    pub fn or_scalar(&mut self, value: u8) -> &mut Self {
        let rhs = Rgb {
            r: value,
            g: value,
            b: value,
        };
        self.or_color(rhs)
    }

    /// Per-channel maximum with `color`
    pub fn or_color(&mut self, color: Rgb) -> &mut Self {
        self.apply(|led| max_colors(led, color))
    }

    /// Pairwise per-channel maximum
    pub fn or_view(&mut self, rhs: &PixelView<'_>) -> &mut Self {
        self.zip_apply(rhs, max_colors)
    }

    /// Cap every channel at `value`
    pub fn and_scalar(&mut self, value: u8) -> &mut Self {
        let rhs = Rgb {
            r: value,
            g: value,
            b: value,
        };
        self.and_color(rhs)
    }

    /// Per-channel minimum with `color`
    pub fn and_color(&mut self, color: Rgb) -> &mut Self {
        self.apply(|led| min_colors(led, color))
    }

    /// Pairwise per-channel minimum
    pub fn and_view(&mut self, rhs: &PixelView<'_>) -> &mut Self {
        self.zip_apply(rhs, min_colors)
    }

    /// Move every element `amount`/255 of the way toward `color`
    pub fn blend(&mut self, color: Rgb, amount: u8) -> &mut Self {
        self.apply(|led| blend_colors(led, color, amount))
    }

    /// Move each element toward its pair in `rhs`, truncating to the
    /// shorter view
    pub fn blend_with(&mut self, rhs: &PixelView<'_>, amount: u8) -> &mut Self {
        self.zip_apply(rhs, |a, b| blend_colors(a, b, amount))
    }

    /// Fill the view with a single color
    pub fn fill_solid(&mut self, color: Rgb) -> &mut Self {
        color::fill_solid(self.pixels, color);
        self
    }

    /// Fill the view with a hue ramp.
    ///
    /// The ramp starts from the lowest physical address regardless of view
    /// direction, matching solid fills: the lit result is the same whether
    /// the range was addressed ascending or descending.
    pub fn fill_rainbow(&mut self, initial_hue: u8, hue_delta: u8) -> &mut Self {
        color::fill_rainbow(self.pixels, initial_hue, hue_delta);
        self
    }

    /// Gradient from `c1` at logical start to `c2` at logical end.
    ///
    /// On a reversed view the stops are swapped before delegation, so the
    /// gradient still runs `c1` to `c2` when read through the view.
    pub fn fill_gradient(
        &mut self,
        c1: Hsv,
        c2: Hsv,
        direction: GradientDirection,
    ) -> &mut Self {
        if self.reversed {
            color::fill_gradient_two(self.pixels, c2, c1, direction);
        } else {
            color::fill_gradient_two(self.pixels, c1, c2, direction);
        }
        self
    }

    /// Three-stop gradient, `c2` at the view's center
    pub fn fill_gradient_three(
        &mut self,
        c1: Hsv,
        c2: Hsv,
        c3: Hsv,
        direction: GradientDirection,
    ) -> &mut Self {
        if self.reversed {
            color::fill_gradient_three(self.pixels, c3, c2, c1, direction);
        } else {
            color::fill_gradient_three(self.pixels, c1, c2, c3, direction);
        }
        self
    }

    /// Four-stop gradient, `c2`/`c3` at one and two thirds
    pub fn fill_gradient_four(
        &mut self,
        c1: Hsv,
        c2: Hsv,
        c3: Hsv,
        c4: Hsv,
        direction: GradientDirection,
    ) -> &mut Self {
        if self.reversed {
            color::fill_gradient_four(self.pixels, c4, c3, c2, c1, direction);
        } else {
            color::fill_gradient_four(self.pixels, c1, c2, c3, c4, direction);
        }
        self
    }

    /// RGB-space gradient from `c1` at logical start to `c2` at logical end
    pub fn fill_gradient_rgb(&mut self, c1: Rgb, c2: Rgb) -> &mut Self {
        if self.reversed {
            color::fill_gradient_rgb_two(self.pixels, c2, c1);
        } else {
            color::fill_gradient_rgb_two(self.pixels, c1, c2);
        }
        self
    }

    /// Three-stop RGB-space gradient
    pub fn fill_gradient_rgb_three(
        &mut self,
        c1: Rgb,
        c2: Rgb,
        c3: Rgb,
    ) -> &mut Self {
        if self.reversed {
            color::fill_gradient_rgb_three(self.pixels, c3, c2, c1);
        } else {
            color::fill_gradient_rgb_three(self.pixels, c1, c2, c3);
        }
        self
    }

    /// Four-stop RGB-space gradient
    pub fn fill_gradient_rgb_four(
        &mut self,
        c1: Rgb,
        c2: Rgb,
        c3: Rgb,
        c4: Rgb,
    ) -> &mut Self {
        if self.reversed {
            color::fill_gradient_rgb_four(self.pixels, c4, c3, c2, c1);
        } else {
            color::fill_gradient_rgb_four(self.pixels, c1, c2, c3, c4);
        }
        self
    }

    /// One-dimensional blur across the view
    pub fn blur1d(&mut self, blur_amount: u8) -> &mut Self {
        color::blur1d(self.pixels, blur_amount);
        self
    }

    /// Video-safe gamma correction of every element
    pub fn apply_gamma_video(&mut self, gamma: f32) -> &mut Self {
        color::napply_gamma_video(self.pixels, gamma);
        self
    }

    /// Video-safe gamma correction with separate per-channel gammas
    pub fn apply_gamma_video_rgb(
        &mut self,
        gamma_r: f32,
        gamma_g: f32,
        gamma_b: f32,
    ) -> &mut Self {
        color::napply_gamma_video_rgb(self.pixels, gamma_r, gamma_g, gamma_b);
        self
    }
}

/// Identity equality: same storage, same extent, same direction.
///
/// Equal contents in different storage never compare equal.
impl PartialEq for PixelView<'_> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.pixels.as_ptr(), other.pixels.as_ptr())
            && self.pixels.len() == other.pixels.len()
            && self.reversed == other.reversed
    }
}

impl Eq for PixelView<'_> {}

impl Index<usize> for PixelView<'_> {
    type Output = Rgb;

    fn index(&self, i: usize) -> &Rgb {
        &self.pixels[self.physical(i)]
    }
}

impl IndexMut<usize> for PixelView<'_> {
    fn index_mut(&mut self, i: usize) -> &mut Rgb {
        let p = self.physical(i);
        &mut self.pixels[p]
    }
}

impl<'a> IntoIterator for &'a PixelView<'_> {
    type Item = &'a Rgb;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut PixelView<'_> {
    type Item = &'a mut Rgb;
    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> IterMut<'a> {
        self.iter_mut()
    }
}

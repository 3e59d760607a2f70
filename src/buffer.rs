use crate::{color::Rgb, view::PixelView};

const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Fixed-capacity pixel buffer
///
/// Owns exactly N pixels, zero-initialized, with no heap allocation; views
/// borrow its storage and are valid for as long as the borrow lives. N is
/// fixed at compile time, there is no resize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer<const N: usize> {
    pixels: [Rgb; N],
}

impl<const N: usize> PixelBuffer<N> {
    /// Create a buffer with all pixels dark
    pub const fn new() -> Self {
        Self { pixels: [BLACK; N] }
    }

    /// Full-extent forward view over the buffer
    pub fn view(&mut self) -> PixelView<'_> {
        PixelView::new(&mut self.pixels)
    }

    /// Directional view over the inclusive range `start..=end`.
    ///
    /// `start > end` yields a reverse view; see [`PixelView::range`].
    pub fn range(&mut self, start: usize, end: usize) -> PixelView<'_> {
        PixelView::range(&mut self.pixels, start, end)
    }

    pub const fn as_slice(&self) -> &[Rgb] {
        &self.pixels
    }

    pub const fn as_mut_slice(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

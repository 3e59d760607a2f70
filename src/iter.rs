//! Direction-aware pixel iterators.
//!
//! Wrap the slice iterators and draw from the back when the bound view is
//! reversed, so every step is +1 in the view's logical order.

use core::iter::FusedIterator;
use core::slice;

use crate::color::Rgb;

/// Immutable traversal of a [`crate::PixelView`] in logical order
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, Rgb>,
    reversed: bool,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(pixels: &'a [Rgb], reversed: bool) -> Self {
        Self {
            inner: pixels.iter(),
            reversed,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Rgb;

    fn next(&mut self) -> Option<&'a Rgb> {
        if self.reversed {
            self.inner.next_back()
        } else {
            self.inner.next()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.reversed {
            self.inner.next()
        } else {
            self.inner.next_back()
        }
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

/// Mutable traversal of a [`crate::PixelView`] in logical order
#[derive(Debug)]
pub struct IterMut<'a> {
    inner: slice::IterMut<'a, Rgb>,
    reversed: bool,
}

impl<'a> IterMut<'a> {
    pub(crate) fn new(pixels: &'a mut [Rgb], reversed: bool) -> Self {
        Self {
            inner: pixels.iter_mut(),
            reversed,
        }
    }
}

impl<'a> Iterator for IterMut<'a> {
    type Item = &'a mut Rgb;

    fn next(&mut self) -> Option<&'a mut Rgb> {
        if self.reversed {
            self.inner.next_back()
        } else {
            self.inner.next()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for IterMut<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.reversed {
            self.inner.next()
        } else {
            self.inner.next_back()
        }
    }
}

impl ExactSizeIterator for IterMut<'_> {}
impl FusedIterator for IterMut<'_> {}

//! Directional pixel views for 1D LED strips.
//!
//! The core type is [`PixelView`]: a non-owning, directional window over a
//! contiguous run of pixels. Views can be sliced and reversed without
//! copying, and every batch fill is re-oriented through a reversed view so
//! a mirrored range renders a correct mirror of the same pattern.
//!
//! [`PixelBuffer`] is a fixed-capacity, zero-allocation owner for the
//! backing storage; the [`color`] module holds the forward-span fill,
//! blur, and gamma algorithms the view delegates to.

#![no_std]

pub mod buffer;
pub mod color;
pub mod iter;
pub mod math8;
pub mod view;

pub use buffer::PixelBuffer;
pub use color::{GradientDirection, Hsv, Rgb};
pub use iter::{Iter, IterMut};
pub use view::PixelView;

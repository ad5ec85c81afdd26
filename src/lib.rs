//! # pixblit
//!
//! *Packed pixels, keyed blits, clipped rectangles.*
//!
//! A compile-time parameterized packed ARGB pixel codec (think 16-bit
//! ARGB1555) with an alpha-keyed compositing primitive, plus the integer
//! [`Pos`] and [`Rect`] types used to clip blits against surfaces.
//!
//! The batch operations ([`PixelBase::set_line_if_alpha`],
//! [`PixelBase::mask_rgb`]) are SIMD-optimized for x86-64 AVX2, ARM NEON and
//! WASM SIMD128 with automatic fallback to scalar code. Every tier produces
//! exactly the scalar result.
//!
//! ```rust
//! use pixblit::{Pixel, Pos, Rect};
//!
//! let red = Pixel::from_argb(255, 255, 0, 0);
//! assert_eq!(red.word(), 0xFC00);
//!
//! let mut line = [Pixel::default(); 4];
//! let src = [red, Pixel::from_argb(0, 0, 255, 0), red, Pixel::default()];
//! Pixel::set_line_if_alpha(&mut line, &src).unwrap();
//! assert_eq!(line, [red, Pixel::default(), red, Pixel::default()]);
//!
//! let clip = Rect::new(Pos::new(0, 0), 10, 10) & Rect::new(Pos::new(5, 5), 10, 10);
//! assert_eq!(clip, Rect::new(Pos::new(5, 5), 5, 5));
//! ```
//!
//! ## Feature flags
//!
//! - **`rgb`**: conversions between packed pixels and [`rgb`] crate
//!   `Rgba<u8>` / `Bgra<u8>` values.
//! - **`imgref`**: clipped blits between [`imgref`] images.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

use core::fmt;

mod kernel;
mod pixel;
mod pos;
mod rect;
pub mod surface;

pub use pixel::*;
pub use pos::Pos;
pub use rect::Rect;

#[cfg(feature = "rgb")]
pub mod typed_rgb;

#[cfg(feature = "imgref")]
pub mod img;

/// A buffer did not have the shape an operation needs.
///
/// Channel layout mistakes never show up here: those are rejected when the
/// pixel type is instantiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SizeError {
    /// The source line holds fewer pixels than the destination line.
    PixelCountMismatch,
    /// A row stride is narrower than the row, or the buffer is too short
    /// for `(height - 1) * stride + width` pixels.
    InvalidStride,
    /// A surface dimension does not fit the `i32` coordinate space.
    DimensionOverflow,
}

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelCountMismatch => f.write_str("source line is shorter than destination line"),
            Self::InvalidStride => f.write_str("stride or buffer length does not cover the surface"),
            Self::DimensionOverflow => f.write_str("surface dimension exceeds i32 coordinates"),
        }
    }
}

impl core::error::Error for SizeError {}

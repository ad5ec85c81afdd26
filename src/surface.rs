//! Clipped, strided alpha-keyed blits over flat pixel buffers.
//!
//! A surface here is a `&[P]` / `&mut [P]` plus `width`, `height` and
//! `stride`, all in pixels. `stride` is the distance between the starts of
//! consecutive rows and must be ≥ `width`. Pixels between `width` and
//! `stride` are never read or written. The buffer must hold at least
//! `(height - 1) * stride + width` pixels.
//!
//! ```rust
//! use pixblit::{Pixel, Pos, Rect, surface};
//!
//! let mut screen = vec![Pixel::default(); 8 * 4];
//! let sprite = vec![Pixel::from_argb(255, 255, 255, 255); 3 * 3];
//!
//! // Half the sprite hangs off the left edge.
//! let touched = surface::blit_if_alpha(
//!     &mut screen, 8, 4, 8,
//!     &sprite, 3, 3, 3,
//!     Pos::new(-1, 2),
//! ).unwrap();
//! assert_eq!(touched, Rect::new(Pos::new(0, 2), 2, 2));
//! ```

use log::trace;

use crate::{KeyedPixel, Pos, Rect, SizeError};

// ===========================================================================
// Validation helpers
// ===========================================================================

#[inline]
fn check_strided(len: usize, width: usize, height: usize, stride: usize) -> Result<(), SizeError> {
    if width > stride {
        return Err(SizeError::InvalidStride);
    }
    if width == 0 || height == 0 {
        return Ok(());
    }
    let total = (height - 1)
        .checked_mul(stride)
        .ok_or(SizeError::InvalidStride)?
        .checked_add(width)
        .ok_or(SizeError::InvalidStride)?;
    if len < total {
        return Err(SizeError::InvalidStride);
    }
    Ok(())
}

#[inline]
fn dim(v: usize) -> Result<i32, SizeError> {
    i32::try_from(v).map_err(|_| SizeError::DimensionOverflow)
}

/// The part of a `src_width` × `src_height` image placed at `at` that lands
/// inside a `dst_width` × `dst_height` surface, in destination coordinates.
pub fn clip_placement(
    dst_width: usize,
    dst_height: usize,
    src_width: usize,
    src_height: usize,
    at: Pos,
) -> Result<Rect, SizeError> {
    let bounds = Rect::from_size(dim(dst_width)?, dim(dst_height)?);
    let placed = Rect::new(at, dim(src_width)?, dim(src_height)?);
    Ok(bounds & placed)
}

/// Offset of `clip`'s origin inside an image whose top-left sits at `at`.
/// `clip` must come from [`clip_placement`] with the same `at`.
#[inline]
pub(crate) fn source_origin(clip: Rect, at: Pos) -> (usize, usize) {
    (
        (clip.left() - i64::from(at.x)) as usize,
        (clip.top() - i64::from(at.y)) as usize,
    )
}

// ===========================================================================
// Public API
// ===========================================================================

/// Alpha-keyed copy of `src` onto `dst` with `src`'s top-left at `at`.
///
/// Only the part of `src` that overlaps `dst` is touched; each clipped row
/// goes through [`set_line_if_alpha`](crate::PixelBase::set_line_if_alpha).
/// Returns the destination rectangle that was processed, which is
/// [`Rect::EMPTY`] when nothing overlaps.
#[allow(clippy::too_many_arguments)]
pub fn blit_if_alpha<P: KeyedPixel>(
    dst: &mut [P],
    dst_width: usize,
    dst_height: usize,
    dst_stride: usize,
    src: &[P],
    src_width: usize,
    src_height: usize,
    src_stride: usize,
    at: Pos,
) -> Result<Rect, SizeError> {
    check_strided(dst.len(), dst_width, dst_height, dst_stride)?;
    check_strided(src.len(), src_width, src_height, src_stride)?;
    let clip = clip_placement(dst_width, dst_height, src_width, src_height, at)?;
    if clip.is_empty() {
        trace!("blit at {at} misses the {dst_width}x{dst_height} surface");
        return Ok(Rect::EMPTY);
    }
    let (sx, sy) = source_origin(clip, at);
    let (dx, dy) = (clip.pos.x as usize, clip.pos.y as usize);
    let (w, h) = (clip.w as usize, clip.h as usize);
    for row in 0..h {
        let d = &mut dst[(dy + row) * dst_stride + dx..][..w];
        let s = &src[(sy + row) * src_stride + sx..][..w];
        P::set_line_if_alpha(d, s)?;
    }
    Ok(clip)
}

/// Clears the alpha field of every pixel inside `rect`, clipped to the
/// surface. Returns the rectangle actually processed.
pub fn mask_rgb_rect<P: KeyedPixel>(
    buf: &mut [P],
    width: usize,
    height: usize,
    stride: usize,
    rect: Rect,
) -> Result<Rect, SizeError> {
    check_strided(buf.len(), width, height, stride)?;
    let clip = Rect::from_size(dim(width)?, dim(height)?) & rect;
    if clip.is_empty() {
        trace!("alpha mask {rect:?} misses the {width}x{height} surface");
        return Ok(Rect::EMPTY);
    }
    let (x, y) = (clip.pos.x as usize, clip.pos.y as usize);
    let (w, h) = (clip.w as usize, clip.h as usize);
    for row in 0..h {
        P::mask_rgb(&mut buf[(y + row) * stride + x..][..w]);
    }
    Ok(clip)
}

// ===========================================================================
// Tests
// ===========================================================================

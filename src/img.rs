//! Clipped alpha-keyed blits between [`imgref`] images.
//!
//! Same semantics as [`surface`](crate::surface), with widths, heights and
//! strides taken from the images themselves.
//!
//! ```rust
//! use imgref::ImgVec;
//! use pixblit::{Pixel, Pos, Rect, img};
//!
//! let mut screen = ImgVec::new(vec![Pixel::default(); 16 * 16], 16, 16);
//! let sprite = ImgVec::new(vec![Pixel::from_argb(255, 0, 255, 0); 4 * 4], 4, 4);
//!
//! let touched = img::blit_img_if_alpha(screen.as_mut(), sprite.as_ref(), Pos::new(14, -1)).unwrap();
//! assert_eq!(touched, Rect::new(Pos::new(14, 0), 2, 3));
//! ```

use imgref::{ImgRef, ImgRefMut};
use log::trace;

use crate::surface::{clip_placement, source_origin};
use crate::{KeyedPixel, Pos, Rect, SizeError};

/// Alpha-keyed copy of `src` onto `dst` with `src`'s top-left at `at`.
///
/// Returns the destination rectangle that was processed, [`Rect::EMPTY`]
/// when the images do not overlap.
pub fn blit_img_if_alpha<P: KeyedPixel>(
    mut dst: ImgRefMut<'_, P>,
    src: ImgRef<'_, P>,
    at: Pos,
) -> Result<Rect, SizeError> {
    let clip = clip_placement(dst.width(), dst.height(), src.width(), src.height(), at)?;
    if clip.is_empty() {
        trace!(
            "image blit at {at} misses the {}x{} destination",
            dst.width(),
            dst.height()
        );
        return Ok(Rect::EMPTY);
    }
    let (sx, sy) = source_origin(clip, at);
    let (dx, dy) = (clip.pos.x as usize, clip.pos.y as usize);
    let (w, h) = (clip.w as usize, clip.h as usize);
    let src = src.sub_image(sx, sy, w, h);
    let mut dst = dst.sub_image_mut(dx, dy, w, h);
    for (d, s) in dst.rows_mut().zip(src.rows()) {
        P::set_line_if_alpha(d, s)?;
    }
    Ok(clip)
}

/// Clears the alpha field of every pixel in `img`. Stride padding is left
/// alone.
pub fn mask_rgb_img<P: KeyedPixel>(mut img: ImgRefMut<'_, P>) {
    for row in img.rows_mut() {
        P::mask_rgb(row);
    }
}

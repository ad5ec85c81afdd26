//! Conversions between packed pixels and [`rgb`] crate 8-bit color types.
//!
//! Packing goes through [`PixelBase::from_argb`], so channels are truncated
//! to the layout's precision. Unpacking returns the stored bits shifted back
//! to 8 bits with the dropped low bits zero.
//!
//! ```rust
//! use rgb::Rgba;
//! use pixblit::Pixel;
//!
//! let p = Pixel::from(Rgba::new(255u8, 130, 7, 255));
//! assert_eq!(p.word(), 0xFC00 | (16 << 5));
//! assert_eq!(p.to_rgba(), Rgba::new(248, 128, 0, 128));
//! ```
//!
//! Alpha comes back as `128` for a 1-bit alpha field: the set bit lands in
//! the top bit of the 8-bit value.
//!
//! # Whole lines
//!
//! ```rust
//! use rgb::Rgba;
//! use pixblit::{Pixel, typed_rgb};
//!
//! let src = vec![Rgba::new(255u8, 0, 0, 255); 64];
//! let mut line = vec![Pixel::default(); 64];
//! typed_rgb::encode_rgba_line(&src, &mut line).unwrap();
//! assert!(line.iter().all(|p| p.word() == 0xFC00));
//! ```

use rgb::{Bgra, Rgba};

use crate::{PixelBase, SizeError, Word};

impl<
    W: Word,
    const AB: u32,
    const AS: u32,
    const RB: u32,
    const RS: u32,
    const GB: u32,
    const GS: u32,
    const BB: u32,
    const BS: u32,
> PixelBase<W, AB, AS, RB, RS, GB, GS, BB, BS>
{
    /// Unpacks to `Rgba<u8>`.
    #[inline]
    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba::new(self.red(), self.green(), self.blue(), self.alpha())
    }

    /// Unpacks to `Bgra<u8>`.
    #[inline]
    pub fn to_bgra(self) -> Bgra<u8> {
        Bgra {
            b: self.blue(),
            g: self.green(),
            r: self.red(),
            a: self.alpha(),
        }
    }
}

impl<
    W: Word,
    const AB: u32,
    const AS: u32,
    const RB: u32,
    const RS: u32,
    const GB: u32,
    const GS: u32,
    const BB: u32,
    const BS: u32,
> From<Rgba<u8>> for PixelBase<W, AB, AS, RB, RS, GB, GS, BB, BS>
{
    #[inline]
    fn from(c: Rgba<u8>) -> Self {
        Self::from_argb(c.a, c.r, c.g, c.b)
    }
}

impl<
    W: Word,
    const AB: u32,
    const AS: u32,
    const RB: u32,
    const RS: u32,
    const GB: u32,
    const GS: u32,
    const BB: u32,
    const BS: u32,
> From<Bgra<u8>> for PixelBase<W, AB, AS, RB, RS, GB, GS, BB, BS>
{
    #[inline]
    fn from(c: Bgra<u8>) -> Self {
        Self::from_argb(c.a, c.r, c.g, c.b)
    }
}

#[inline]
fn check_len(src: usize, dst: usize) -> Result<(), SizeError> {
    if src != dst {
        Err(SizeError::PixelCountMismatch)
    } else {
        Ok(())
    }
}

/// Packs a line of `Rgba<u8>` into `dst`. Lengths must match.
pub fn encode_rgba_line<
    W: Word,
    const AB: u32,
    const AS: u32,
    const RB: u32,
    const RS: u32,
    const GB: u32,
    const GS: u32,
    const BB: u32,
    const BS: u32,
>(
    src: &[Rgba<u8>],
    dst: &mut [PixelBase<W, AB, AS, RB, RS, GB, GS, BB, BS>],
) -> Result<(), SizeError> {
    check_len(src.len(), dst.len())?;
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = s.into();
    }
    Ok(())
}

/// Unpacks a line of packed pixels into `dst`. Lengths must match.
pub fn decode_rgba_line<
    W: Word,
    const AB: u32,
    const AS: u32,
    const RB: u32,
    const RS: u32,
    const GB: u32,
    const GS: u32,
    const BB: u32,
    const BS: u32,
>(
    src: &[PixelBase<W, AB, AS, RB, RS, GB, GS, BB, BS>],
    dst: &mut [Rgba<u8>],
) -> Result<(), SizeError> {
    check_len(src.len(), dst.len())?;
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = s.to_rgba();
    }
    Ok(())
}

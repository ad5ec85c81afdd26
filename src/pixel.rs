// ---------------------------------------------------------------------------
// Packed ARGB pixel codec.
//
// The channel layout is a set of const generic parameters. Layout validation
// is a const assertion that every constructor touches, so a bad layout fails
// the build at the point of instantiation.
// ---------------------------------------------------------------------------

use core::fmt;
use core::hash::Hash;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

use bytemuck::{Pod, TransparentWrapper};

use crate::SizeError;
use crate::kernel;

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// Storage word of a packed pixel: `u8`, `u16` or `u32`.
pub trait Word:
    sealed::Sealed
    + Pod
    + Eq
    + Hash
    + Default
    + fmt::Debug
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitAndAssign
    + BitOrAssign
{
    /// Width of the word in bits.
    const BITS: u32;

    /// Keeps the low `BITS` bits of `v`.
    fn truncate(v: u32) -> Self;

    fn widen(self) -> u32;
}

impl Word for u8 {
    const BITS: u32 = u8::BITS;

    #[inline(always)]
    fn truncate(v: u32) -> Self {
        v as u8
    }

    #[inline(always)]
    fn widen(self) -> u32 {
        u32::from(self)
    }
}

impl Word for u16 {
    const BITS: u32 = u16::BITS;

    #[inline(always)]
    fn truncate(v: u32) -> Self {
        v as u16
    }

    #[inline(always)]
    fn widen(self) -> u32 {
        u32::from(self)
    }
}

impl Word for u32 {
    const BITS: u32 = u32::BITS;

    #[inline(always)]
    fn truncate(v: u32) -> Self {
        v
    }

    #[inline(always)]
    fn widen(self) -> u32 {
        self
    }
}

#[inline(always)]
const fn field_mask(bits: u32, shift: u32) -> u32 {
    (((1u64 << bits) - 1) << shift) as u32
}

#[inline(always)]
const fn quantize(v: u8, bits: u32, shift: u32) -> u32 {
    ((v as u32) >> (8 - bits)) << shift
}

#[inline(always)]
const fn extract(word: u32, bits: u32, shift: u32) -> u8 {
    (((word >> shift) & field_mask(bits, 0)) << (8 - bits)) as u8
}

/// A packed ARGB pixel stored in one `W` word.
///
/// `AB`/`AS` are the alpha channel's bit width and shift, followed by the
/// same pair for red, green and blue. Every channel needs at least one and at
/// most eight bits, fields must fit inside `W` and must not overlap.
/// Instantiating a layout that breaks any of these rules does not compile:
///
/// ```compile_fail
/// // Zero-width alpha channel.
/// let _ = pixblit::PixelBase::<u16, 0, 15, 5, 10, 5, 5, 5, 0>::new(0);
/// ```
///
/// ```compile_fail
/// // 1 + 6 + 5 + 5 bits do not fit in a u16.
/// let _ = pixblit::PixelBase::<u16, 1, 16, 6, 10, 5, 5, 5, 0>::new(0);
/// ```
///
/// The type is `#[repr(transparent)]` over `W`, so a `&[PixelBase]` is a
/// `&[W]` and batch operations run directly over the words.
#[derive(Clone, Copy, PartialEq, Eq, Hash, TransparentWrapper)]
#[repr(transparent)]
pub struct PixelBase<
    W: Word,
    const AB: u32,
    const AS: u32,
    const RB: u32,
    const RS: u32,
    const GB: u32,
    const GS: u32,
    const BB: u32,
    const BS: u32,
> {
    word: W,
}

/// 16-bit ARGB1555: alpha at bit 15, red 10..=14, green 5..=9, blue 0..=4.
pub type Pixel = PixelBase<u16, 1, 15, 5, 10, 5, 5, 5, 0>;

/// Alias for [`Pixel`].
pub type Argb1555 = Pixel;

/// 16-bit ARGB4444.
pub type Argb4444 = PixelBase<u16, 4, 12, 4, 8, 4, 4, 4, 0>;

/// 32-bit ARGB8888, alpha in the top byte.
pub type Argb8888 = PixelBase<u32, 8, 24, 8, 16, 8, 8, 8, 0>;

/// 8-bit ARGB2222.
pub type Argb2222 = PixelBase<u8, 2, 6, 2, 4, 2, 2, 2, 0>;

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
    const LAYOUT_OK: () = {
        assert!(
            AB + RB + GB + BB <= W::BITS,
            "ARGB bit widths do not fit the storage word"
        );
        assert!(
            AB != 0 && RB != 0 && GB != 0 && BB != 0,
            "every channel needs at least 1 bit"
        );
        assert!(
            AB <= 8 && RB <= 8 && GB <= 8 && BB <= 8,
            "channels are encoded from 8-bit values and cannot be wider"
        );
        assert!(
            AS + AB <= W::BITS && RS + RB <= W::BITS && GS + GB <= W::BITS && BS + BB <= W::BITS,
            "a channel field extends past the storage word"
        );
        let (a, r, g, b) = (
            field_mask(AB, AS),
            field_mask(RB, RS),
            field_mask(GB, GS),
            field_mask(BB, BS),
        );
        assert!(
            a & r == 0 && a & g == 0 && a & b == 0 && r & g == 0 && r & b == 0 && g & b == 0,
            "channel fields overlap"
        );
    };

    /// Bits of the alpha field.
    pub const ALPHA_MASK: u32 = {
        let () = Self::LAYOUT_OK;
        field_mask(AB, AS)
    };

    /// Union of the red, green and blue fields.
    pub const RGB_MASK: u32 = {
        let () = Self::LAYOUT_OK;
        field_mask(RB, RS) | field_mask(GB, GS) | field_mask(BB, BS)
    };

    /// Wraps a raw storage word.
    #[inline(always)]
    pub const fn new(word: W) -> Self {
        let () = Self::LAYOUT_OK;
        Self { word }
    }

    /// The raw storage word.
    #[inline(always)]
    pub fn word(self) -> W {
        self.word
    }

    /// Pixel with only the alpha field set.
    #[inline(always)]
    pub fn alpha_mask() -> Self {
        Self::new(W::truncate(Self::ALPHA_MASK))
    }

    /// Pixel with every color field set and alpha clear.
    #[inline(always)]
    pub fn rgb_mask() -> Self {
        Self::new(W::truncate(Self::RGB_MASK))
    }

    /// True when any bit is set. This is a "slot is populated" test, not a
    /// color test.
    #[inline(always)]
    pub fn is_nonzero(self) -> bool {
        self.word != W::default()
    }

    /// True when the alpha field is nonzero.
    #[inline(always)]
    pub fn has_alpha(self) -> bool {
        self.word.widen() & Self::ALPHA_MASK != 0
    }

    /// Replaces `self` with `src` when `src` has a nonzero alpha field.
    ///
    /// Binary alpha test, no blending.
    #[inline(always)]
    pub fn set_if_alpha(&mut self, src: Self) -> &mut Self {
        if src.has_alpha() {
            *self = src;
        }
        self
    }

    /// Packs 8-bit channels.
    ///
    /// Each channel keeps its top bits: it is shifted right by
    /// `8 - channel_bits` before being moved into place. Low bits are
    /// dropped, not rounded.
    #[inline]
    pub fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        let word = quantize(a, AB, AS) | quantize(r, RB, RS) | quantize(g, GB, GS) | quantize(b, BB, BS);
        Self::new(W::truncate(word))
    }

    /// Alpha expanded back to 8 bits; the bits lost when packing read as zero.
    #[inline]
    pub fn alpha(self) -> u8 {
        extract(self.word.widen(), AB, AS)
    }

    #[inline]
    pub fn red(self) -> u8 {
        extract(self.word.widen(), RB, RS)
    }

    #[inline]
    pub fn green(self) -> u8 {
        extract(self.word.widen(), GB, GS)
    }

    #[inline]
    pub fn blue(self) -> u8 {
        extract(self.word.widen(), BB, BS)
    }

    /// Applies [`set_if_alpha`](Self::set_if_alpha) to `dst[i]` with
    /// `src[i]` for every pixel of `dst`.
    ///
    /// `src` may be longer than `dst`; the extra pixels are ignored. The
    /// result is identical to the per-pixel loop whichever SIMD tier runs.
    pub fn set_line_if_alpha(dst: &mut [Self], src: &[Self]) -> Result<(), SizeError> {
        let src = src.get(..dst.len()).ok_or(SizeError::PixelCountMismatch)?;
        kernel::set_if_alpha_words(
            <Self as TransparentWrapper<W>>::peel_slice_mut(dst),
            <Self as TransparentWrapper<W>>::peel_slice(src),
            Self::ALPHA_MASK,
        );
        Ok(())
    }

    /// Clears the alpha field of every pixel, leaving color bits untouched.
    pub fn mask_rgb(buf: &mut [Self]) {
        kernel::and_words(
            <Self as TransparentWrapper<W>>::peel_slice_mut(buf),
            Self::RGB_MASK,
        );
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
> Default for PixelBase<W, AB, AS, RB, RS, GB, GS, BB, BS>
{
    #[inline(always)]
    fn default() -> Self {
        Self::new(W::default())
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
> fmt::Debug for PixelBase<W, AB, AS, RB, RS, GB, GS, BB, BS>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PixelBase({:#x})", self.word.widen())
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
> BitOr for PixelBase<W, AB, AS, RB, RS, GB, GS, BB, BS>
{
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self::new(self.word | rhs.word)
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
> BitAnd for PixelBase<W, AB, AS, RB, RS, GB, GS, BB, BS>
{
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self::new(self.word & rhs.word)
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
> BitOrAssign for PixelBase<W, AB, AS, RB, RS, GB, GS, BB, BS>
{
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.word |= rhs.word;
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
> BitAndAssign for PixelBase<W, AB, AS, RB, RS, GB, GS, BB, BS>
{
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        self.word &= rhs.word;
    }
}

/// Packed pixel formats that support alpha-keyed line operations.
///
/// Implemented by every [`PixelBase`] instantiation; lets surface-level code
/// stay generic over the layout.
pub trait KeyedPixel: Copy + Default + Eq + fmt::Debug {
    /// See [`PixelBase::set_line_if_alpha`].
    fn set_line_if_alpha(dst: &mut [Self], src: &[Self]) -> Result<(), SizeError>;

    /// See [`PixelBase::mask_rgb`].
    fn mask_rgb(buf: &mut [Self]);
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
> KeyedPixel for PixelBase<W, AB, AS, RB, RS, GB, GS, BB, BS>
{
    #[inline]
    fn set_line_if_alpha(dst: &mut [Self], src: &[Self]) -> Result<(), SizeError> {
        Self::set_line_if_alpha(dst, src)
    }

    #[inline]
    fn mask_rgb(buf: &mut [Self]) {
        Self::mask_rgb(buf)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb1555_layout() {
        assert_eq!(Pixel::ALPHA_MASK, 0x8000);
        assert_eq!(Pixel::RGB_MASK, 0x7FFF);
        assert_eq!(Pixel::alpha_mask().word(), 0x8000);
        assert_eq!(Pixel::rgb_mask().word(), 0x7FFF);
        assert_eq!(core::mem::size_of::<Pixel>(), core::mem::size_of::<u16>());
    }

    #[test]
    fn argb1555_factory() {
        assert_eq!(Pixel::from_argb(255, 255, 0, 0).word(), 0xFC00);
        assert_eq!(Pixel::from_argb(0, 0, 255, 0).word(), 0x03E0);
        assert_eq!(Pixel::from_argb(0, 0, 0, 0).word(), 0x0000);
        assert_eq!(Pixel::from_argb(0, 0, 0, 255).word(), 0x001F);
        assert_eq!(Pixel::from_argb(128, 0, 0, 0).word(), 0x8000);
        assert_eq!(Pixel::from_argb(127, 0, 0, 0).word(), 0x0000);
    }

    #[test]
    fn factory_truncates_low_bits() {
        // 5-bit channels drop the low 3 bits: 0xF8..=0xFF all collapse.
        for v in 0xF8..=0xFFu8 {
            assert_eq!(Pixel::from_argb(0, v, 0, 0), Pixel::from_argb(0, 0xF8, 0, 0));
        }
        assert_ne!(Pixel::from_argb(0, 0xF7, 0, 0), Pixel::from_argb(0, 0xF8, 0, 0));
    }

    #[test]
    fn channel_round_trip_argb1555() {
        for v in 0..=255u8 {
            let px = Pixel::from_argb(v, v, v, v);
            assert_eq!(px.red(), v & 0xF8, "red v={v}");
            assert_eq!(px.green(), v & 0xF8, "green v={v}");
            assert_eq!(px.blue(), v & 0xF8, "blue v={v}");
            assert_eq!(px.alpha(), v & 0x80, "alpha v={v}");
        }
        for v in (0..=255u8).step_by(8) {
            assert_eq!(Pixel::from_argb(0, v, 0, 0).red(), v);
        }
    }

    #[test]
    fn channel_round_trip_other_layouts() {
        for v in 0..=255u8 {
            assert_eq!(Argb8888::from_argb(v, v, v, v).word(), u32::from_ne_bytes([v; 4]));
            let px = Argb4444::from_argb(v, 0, v, 0);
            assert_eq!(px.alpha(), v & 0xF0);
            assert_eq!(px.green(), v & 0xF0);
            assert_eq!(px.red(), 0);
            let px = Argb2222::from_argb(0, v, 0, v);
            assert_eq!(px.red(), v & 0xC0);
            assert_eq!(px.blue(), v & 0xC0);
        }
        assert_eq!(Argb8888::from_argb(0x11, 0x22, 0x33, 0x44).word(), 0x1122_3344);
    }

    #[test]
    fn nonzero_is_any_bit() {
        assert!(!Pixel::default().is_nonzero());
        assert!(Pixel::new(1).is_nonzero());
        assert!(Pixel::new(0x8000).is_nonzero());
        assert!(!Pixel::new(0x7FFF).has_alpha());
    }

    #[test]
    fn bit_ops() {
        let a = Pixel::new(0xF0F0);
        let b = Pixel::new(0x0FF0);
        assert_eq!((a | b).word(), 0xFFF0);
        assert_eq!((a & b).word(), 0x00F0);
        let mut c = a;
        c |= b;
        assert_eq!(c.word(), 0xFFF0);
        c &= Pixel::rgb_mask();
        assert_eq!(c.word(), 0x7FF0);
    }

    #[test]
    fn set_if_alpha_gates_on_source() {
        let opaque = Pixel::from_argb(255, 0, 255, 0);
        let clear = Pixel::from_argb(0, 255, 255, 255);
        for dst_word in [0u16, 0x1234, 0x8000, 0xFFFF] {
            let mut dst = Pixel::new(dst_word);
            dst.set_if_alpha(clear);
            assert_eq!(dst.word(), dst_word);
            dst.set_if_alpha(opaque);
            assert_eq!(dst, opaque);
        }
        // Any nonzero alpha value counts, not just full coverage.
        let mut dst = Argb4444::default();
        dst.set_if_alpha(Argb4444::new(0x1ABC));
        assert_eq!(dst.word(), 0x1ABC);
    }

    #[test]
    fn set_line_requires_enough_source() {
        let mut dst = [Pixel::default(); 4];
        let src = [Pixel::alpha_mask(); 3];
        assert_eq!(
            Pixel::set_line_if_alpha(&mut dst, &src),
            Err(SizeError::PixelCountMismatch)
        );
        assert_eq!(dst, [Pixel::default(); 4]);

        let long = [Pixel::alpha_mask(); 6];
        Pixel::set_line_if_alpha(&mut dst, &long).unwrap();
        assert_eq!(dst, [Pixel::alpha_mask(); 4]);
    }

    #[test]
    fn empty_lines() {
        let mut dst: [Pixel; 0] = [];
        Pixel::set_line_if_alpha(&mut dst, &[]).unwrap();
        Pixel::mask_rgb(&mut dst);
    }

    #[test]
    fn debug_shows_hex_word() {
        let s = alloc::format!("{:?}", Pixel::new(0xFC00));
        assert_eq!(s, "PixelBase(0xfc00)");
    }
}

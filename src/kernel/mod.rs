// ---------------------------------------------------------------------------
// Line kernels behind the packed pixel batch operations.
//
// Architecture: #[rite] row functions contain the SIMD loops over the byte
// view of a word slice. #[arcane] wrappers are the incant! dispatch targets.
// The storage word only matters for the lane width of the alpha compare;
// masks travel as a 32-bit pattern replicated across lanes.
// ---------------------------------------------------------------------------

use archmage::incant;

use crate::pixel::Word;

mod scalar;
use scalar::*;

#[cfg(target_arch = "x86_64")]
mod avx2;
#[cfg(target_arch = "x86_64")]
use avx2::*;

#[cfg(target_arch = "aarch64")]
mod neon;
#[cfg(target_arch = "aarch64")]
use neon::*;

#[cfg(target_arch = "wasm32")]
mod wasm;
#[cfg(target_arch = "wasm32")]
use wasm::*;


/// Lane width of the storage word, in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LaneWidth {
    U8,
    U16,
    U32,
}

impl LaneWidth {
    #[inline(always)]
    fn of<W: Word>() -> Self {
        match W::BITS {
            8 => Self::U8,
            16 => Self::U16,
            _ => Self::U32,
        }
    }

    /// Repeats a lane-sized mask across a 32-bit pattern.
    #[inline(always)]
    fn replicate(self, mask: u32) -> u32 {
        match self {
            Self::U8 => (mask & 0xFF).wrapping_mul(0x0101_0101),
            Self::U16 => (mask & 0xFFFF) | (mask << 16),
            Self::U32 => mask,
        }
    }
}

// ===========================================================================
// Scalar helpers shared by every tier's remainder pass
// ===========================================================================

#[inline(always)]
fn select_words<W: Word>(dst: &mut [W], src: &[W], alpha: W) {
    for (d, &s) in dst.iter_mut().zip(src) {
        if s & alpha != W::default() {
            *d = s;
        }
    }
}

/// Per-pixel alpha-keyed copy over word bytes. `dst` and `src` start on a
/// word boundary and hold the same number of bytes.
#[inline(always)]
fn select_tail(dst: &mut [u8], src: &[u8], lanes: LaneWidth, alpha_mask: u32) {
    match lanes {
        LaneWidth::U8 => select_words::<u8>(dst, src, alpha_mask as u8),
        LaneWidth::U16 => select_words::<u16>(
            bytemuck::cast_slice_mut(dst),
            bytemuck::cast_slice(src),
            alpha_mask as u16,
        ),
        LaneWidth::U32 => select_words::<u32>(
            bytemuck::cast_slice_mut(dst),
            bytemuck::cast_slice(src),
            alpha_mask,
        ),
    }
}

/// ANDs a replicated 32-bit pattern into word bytes. `buf` must start on a
/// 4-byte boundary of the original slice.
#[inline(always)]
fn and_tail(buf: &mut [u8], pattern: u32) {
    for (b, m) in buf.iter_mut().zip(pattern.to_ne_bytes().into_iter().cycle()) {
        *b &= m;
    }
}

// ===========================================================================
// Entry points
// ===========================================================================

/// `dst[i] = src[i]` wherever `src[i] & alpha_mask != 0`.
pub(crate) fn set_if_alpha_words<W: Word>(dst: &mut [W], src: &[W], alpha_mask: u32) {
    debug_assert_eq!(dst.len(), src.len());
    let lanes = LaneWidth::of::<W>();
    let d: &mut [u8] = bytemuck::cast_slice_mut(dst);
    let s: &[u8] = bytemuck::cast_slice(src);
    incant!(
        set_if_alpha_impl(d, s, lanes, alpha_mask),
        [v3, arm_v2, wasm128, scalar]
    );
}

/// `buf[i] &= mask` for every word.
pub(crate) fn and_words<W: Word>(buf: &mut [W], mask: u32) {
    let pattern = LaneWidth::of::<W>().replicate(mask);
    let b: &mut [u8] = bytemuck::cast_slice_mut(buf);
    incant!(and_impl(b, pattern), [v3, arm_v2, wasm128, scalar]);
}

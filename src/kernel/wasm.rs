use core::arch::wasm32::{i8x16_eq, i16x8_eq, i32x4_eq, u32x4_splat, v128_and, v128_bitselect};

use archmage::prelude::*;
use safe_unaligned_simd::wasm32::{v128_load, v128_store};

use super::{LaneWidth, and_tail, select_tail};

// ===========================================================================
// WASM SIMD128: rite row implementations
// ===========================================================================

#[rite]
pub(super) fn set_if_alpha_row_wasm128(
    _token: Wasm128Token,
    dst: &mut [u8],
    src: &[u8],
    lanes: LaneWidth,
    alpha_mask: u32,
) {
    let alpha = u32x4_splat(lanes.replicate(alpha_mask));
    let zero = u32x4_splat(0);
    let n = dst.len().min(src.len());
    let mut i = 0;
    while i + 16 <= n {
        let s: &[u8; 16] = src[i..i + 16].try_into().unwrap();
        let sv = v128_load(s);
        let d_in: &[u8; 16] = dst[i..i + 16].try_into().unwrap();
        let dv = v128_load(d_in);
        let keyed = v128_and(sv, alpha);
        let keep = match lanes {
            LaneWidth::U8 => i8x16_eq(keyed, zero),
            LaneWidth::U16 => i16x8_eq(keyed, zero),
            LaneWidth::U32 => i32x4_eq(keyed, zero),
        };
        let d: &mut [u8; 16] = (&mut dst[i..i + 16]).try_into().unwrap();
        v128_store(d, v128_bitselect(dv, sv, keep));
        i += 16;
    }
    select_tail(&mut dst[i..n], &src[i..n], lanes, alpha_mask);
}

#[rite]
pub(super) fn and_row_wasm128(_token: Wasm128Token, buf: &mut [u8], pattern: u32) {
    let mask = u32x4_splat(pattern);
    let n = buf.len();
    let mut i = 0;
    while i + 16 <= n {
        let arr: &[u8; 16] = buf[i..i + 16].try_into().unwrap();
        let v = v128_load(arr);
        let out: &mut [u8; 16] = (&mut buf[i..i + 16]).try_into().unwrap();
        v128_store(out, v128_and(v, mask));
        i += 16;
    }
    and_tail(&mut buf[i..], pattern);
}

// WASM arcane wrappers
#[arcane]
pub(super) fn set_if_alpha_impl_wasm128(
    t: Wasm128Token,
    dst: &mut [u8],
    src: &[u8],
    lanes: LaneWidth,
    alpha_mask: u32,
) {
    set_if_alpha_row_wasm128(t, dst, src, lanes, alpha_mask);
}

#[arcane]
pub(super) fn and_impl_wasm128(t: Wasm128Token, buf: &mut [u8], pattern: u32) {
    and_row_wasm128(t, buf, pattern);
}

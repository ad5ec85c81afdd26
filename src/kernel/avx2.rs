use archmage::prelude::*;
use safe_unaligned_simd::x86_64::{_mm256_loadu_si256, _mm256_storeu_si256};

use super::{LaneWidth, and_tail, select_tail};

// ===========================================================================
// x86-64 AVX2: rite row implementations
// ===========================================================================

#[rite]
pub(super) fn set_if_alpha_row_v3(
    _token: X64V3Token,
    dst: &mut [u8],
    src: &[u8],
    lanes: LaneWidth,
    alpha_mask: u32,
) {
    let alpha = _mm256_set1_epi32(lanes.replicate(alpha_mask) as i32);
    let zero = _mm256_setzero_si256();
    let n = dst.len().min(src.len());
    let mut i = 0;
    while i + 32 <= n {
        let s: &[u8; 32] = src[i..i + 32].try_into().unwrap();
        let sv = _mm256_loadu_si256(s);
        let d_in: &[u8; 32] = dst[i..i + 32].try_into().unwrap();
        let dv = _mm256_loadu_si256(d_in);
        let keyed = _mm256_and_si256(sv, alpha);
        // All-ones in lanes whose source alpha is zero: those keep dst.
        let keep = match lanes {
            LaneWidth::U8 => _mm256_cmpeq_epi8(keyed, zero),
            LaneWidth::U16 => _mm256_cmpeq_epi16(keyed, zero),
            LaneWidth::U32 => _mm256_cmpeq_epi32(keyed, zero),
        };
        let out = _mm256_blendv_epi8(sv, dv, keep);
        let d: &mut [u8; 32] = (&mut dst[i..i + 32]).try_into().unwrap();
        _mm256_storeu_si256(d, out);
        i += 32;
    }
    select_tail(&mut dst[i..n], &src[i..n], lanes, alpha_mask);
}

#[rite]
pub(super) fn and_row_v3(_token: X64V3Token, buf: &mut [u8], pattern: u32) {
    let mask = _mm256_set1_epi32(pattern as i32);
    let n = buf.len();
    let mut i = 0;
    while i + 32 <= n {
        let arr: &[u8; 32] = buf[i..i + 32].try_into().unwrap();
        let v = _mm256_loadu_si256(arr);
        let out: &mut [u8; 32] = (&mut buf[i..i + 32]).try_into().unwrap();
        _mm256_storeu_si256(out, _mm256_and_si256(v, mask));
        i += 32;
    }
    and_tail(&mut buf[i..], pattern);
}

// x86-64 arcane wrappers
#[arcane]
pub(super) fn set_if_alpha_impl_v3(
    t: X64V3Token,
    dst: &mut [u8],
    src: &[u8],
    lanes: LaneWidth,
    alpha_mask: u32,
) {
    set_if_alpha_row_v3(t, dst, src, lanes, alpha_mask);
}

#[arcane]
pub(super) fn and_impl_v3(t: X64V3Token, buf: &mut [u8], pattern: u32) {
    and_row_v3(t, buf, pattern);
}

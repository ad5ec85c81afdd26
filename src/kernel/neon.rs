use core::arch::aarch64::{
    uint8x16_t, vandq_u8, vbslq_u8, vceqq_u8, vceqq_u16, vceqq_u32, vdupq_n_u8, vdupq_n_u16,
    vdupq_n_u32, vreinterpretq_u8_u16, vreinterpretq_u8_u32, vreinterpretq_u16_u8,
    vreinterpretq_u32_u8,
};

use archmage::prelude::*;
use safe_unaligned_simd::aarch64::{vld1q_u8, vst1q_u8};

use super::{LaneWidth, and_tail, select_tail};

// ===========================================================================
// ARM NEON: rite row implementations
// ===========================================================================

#[rite]
fn zero_lanes_arm_v2(_token: Arm64V2Token, v: uint8x16_t, lanes: LaneWidth) -> uint8x16_t {
    match lanes {
        LaneWidth::U8 => vceqq_u8(v, vdupq_n_u8(0)),
        LaneWidth::U16 => vreinterpretq_u8_u16(vceqq_u16(vreinterpretq_u16_u8(v), vdupq_n_u16(0))),
        LaneWidth::U32 => vreinterpretq_u8_u32(vceqq_u32(vreinterpretq_u32_u8(v), vdupq_n_u32(0))),
    }
}

#[rite]
pub(super) fn set_if_alpha_row_arm_v2(
    token: Arm64V2Token,
    dst: &mut [u8],
    src: &[u8],
    lanes: LaneWidth,
    alpha_mask: u32,
) {
    let alpha = vreinterpretq_u8_u32(vdupq_n_u32(lanes.replicate(alpha_mask)));
    let n = dst.len().min(src.len());
    let mut i = 0;
    while i + 16 <= n {
        let s: &[u8; 16] = src[i..i + 16].try_into().unwrap();
        let sv = vld1q_u8(s);
        let d_in: &[u8; 16] = dst[i..i + 16].try_into().unwrap();
        let dv = vld1q_u8(d_in);
        let keep = zero_lanes_arm_v2(token, vandq_u8(sv, alpha), lanes);
        let d: &mut [u8; 16] = (&mut dst[i..i + 16]).try_into().unwrap();
        vst1q_u8(d, vbslq_u8(keep, dv, sv));
        i += 16;
    }
    select_tail(&mut dst[i..n], &src[i..n], lanes, alpha_mask);
}

#[rite]
pub(super) fn and_row_arm_v2(_token: Arm64V2Token, buf: &mut [u8], pattern: u32) {
    let mask = vreinterpretq_u8_u32(vdupq_n_u32(pattern));
    let n = buf.len();
    let mut i = 0;
    while i + 16 <= n {
        let arr: &[u8; 16] = buf[i..i + 16].try_into().unwrap();
        let v = vld1q_u8(arr);
        let out: &mut [u8; 16] = (&mut buf[i..i + 16]).try_into().unwrap();
        vst1q_u8(out, vandq_u8(v, mask));
        i += 16;
    }
    and_tail(&mut buf[i..], pattern);
}

// ARM arcane wrappers
#[arcane]
pub(super) fn set_if_alpha_impl_arm_v2(
    t: Arm64V2Token,
    dst: &mut [u8],
    src: &[u8],
    lanes: LaneWidth,
    alpha_mask: u32,
) {
    set_if_alpha_row_arm_v2(t, dst, src, lanes, alpha_mask);
}

#[arcane]
pub(super) fn and_impl_arm_v2(t: Arm64V2Token, buf: &mut [u8], pattern: u32) {
    and_row_arm_v2(t, buf, pattern);
}

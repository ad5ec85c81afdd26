use archmage::prelude::*;

use super::{LaneWidth, and_tail, select_tail};

// ===========================================================================
// Scalar reference implementations (dispatch targets for incant!)
// ===========================================================================

pub(super) fn set_if_alpha_impl_scalar(
    _token: ScalarToken,
    dst: &mut [u8],
    src: &[u8],
    lanes: LaneWidth,
    alpha_mask: u32,
) {
    select_tail(dst, src, lanes, alpha_mask);
}

pub(super) fn and_impl_scalar(_token: ScalarToken, buf: &mut [u8], pattern: u32) {
    and_tail(buf, pattern);
}

//! Integer 2D coordinate.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// The order key packs both components into one u64.
const _: () = assert!(i32::BITS == 32, "Pos ordering assumes 32-bit components");

/// A 2D integer coordinate or offset.
///
/// Arithmetic wraps on overflow. Division truncates toward zero and panics on
/// a zero divisor, like the integer operators.
///
/// `Pos` is totally ordered by [`order_key`](Pos::order_key): `x` first, then
/// `y`, both compared as unsigned 32-bit values. This is only meant as a
/// stable key for sorted containers; negative components sort after
/// positive ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `x` in the high 32 bits, `y` in the low 32 bits, both reinterpreted
    /// as unsigned.
    #[inline]
    pub const fn order_key(self) -> u64 {
        ((self.x as u32 as u64) << 32) | self.y as u32 as u64
    }
}

impl Ord for Pos {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.order_key().cmp(&other.order_key())
    }
}

impl PartialOrd for Pos {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {}, {} ]", self.x, self.y)
    }
}

impl Add for Pos {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x.wrapping_add(rhs.x), self.y.wrapping_add(rhs.y))
    }
}

impl Sub for Pos {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x.wrapping_sub(rhs.x), self.y.wrapping_sub(rhs.y))
    }
}

/// Componentwise product.
impl Mul for Pos {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x.wrapping_mul(rhs.x), self.y.wrapping_mul(rhs.y))
    }
}

/// Scales both components.
impl Mul<i32> for Pos {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x.wrapping_mul(rhs), self.y.wrapping_mul(rhs))
    }
}

impl Mul<Pos> for i32 {
    type Output = Pos;

    #[inline]
    fn mul(self, rhs: Pos) -> Pos {
        Pos::new(self.wrapping_mul(rhs.x), self.wrapping_mul(rhs.y))
    }
}

impl Div<i32> for Pos {
    type Output = Self;

    #[inline]
    fn div(self, rhs: i32) -> Self {
        Self::new(self.x.wrapping_div(rhs), self.y.wrapping_div(rhs))
    }
}

impl Neg for Pos {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(self.x.wrapping_neg(), self.y.wrapping_neg())
    }
}

impl AddAssign for Pos {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Pos {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Pos {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<i32> for Pos {
    #[inline]
    fn mul_assign(&mut self, rhs: i32) {
        *self = *self * rhs;
    }
}

impl DivAssign<i32> for Pos {
    #[inline]
    fn div_assign(&mut self, rhs: i32) {
        *self = *self / rhs;
    }
}

impl From<(i32, i32)> for Pos {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

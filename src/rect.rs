//! Axis-aligned integer rectangle used for clipping.

use core::ops::{Add, AddAssign, BitAnd, BitAndAssign, Sub, SubAssign};

use crate::Pos;

/// An axis-aligned rectangle: top-left `pos` plus `w` × `h`.
///
/// A rectangle with `w <= 0` or `h <= 0` is empty. [`intersect`](Rect::intersect)
/// never produces negative dimensions: an empty intersection is always
/// [`Rect::EMPTY`].
///
/// Edges are computed in `i64`, so `pos.x + w` never overflows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub pos: Pos,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// The canonical empty rectangle: origin `(0, 0)`, zero size.
    pub const EMPTY: Self = Self::new(Pos::ORIGIN, 0, 0);

    #[inline]
    pub const fn new(pos: Pos, w: i32, h: i32) -> Self {
        Self { pos, w, h }
    }

    /// A `w` × `h` rectangle at the origin.
    #[inline]
    pub const fn from_size(w: i32, h: i32) -> Self {
        Self::new(Pos::ORIGIN, w, h)
    }

    #[inline]
    pub const fn left(&self) -> i64 {
        self.pos.x as i64
    }

    #[inline]
    pub const fn top(&self) -> i64 {
        self.pos.y as i64
    }

    /// Exclusive right edge.
    #[inline]
    pub const fn right(&self) -> i64 {
        self.pos.x as i64 + self.w as i64
    }

    /// Exclusive bottom edge.
    #[inline]
    pub const fn bottom(&self) -> i64 {
        self.pos.y as i64 + self.h as i64
    }

    /// `(w, h)` as a [`Pos`].
    #[inline]
    pub const fn size(&self) -> Pos {
        Pos::new(self.w, self.h)
    }

    #[inline]
    pub const fn is_non_empty(&self) -> bool {
        self.w > 0 && self.h > 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        !self.is_non_empty()
    }

    /// True when `p` lies inside (right and bottom edges excluded).
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        let (x, y) = (i64::from(p.x), i64::from(p.y));
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }

    /// The overlapping region of `self` and `other`, or [`Rect::EMPTY`].
    pub fn intersect(&self, other: &Rect) -> Rect {
        let left = self.left().max(other.left());
        let right = self.right().min(other.right());
        let top = self.top().max(other.top());
        let bottom = self.bottom().min(other.bottom());
        let (w, h) = (right - left, bottom - top);
        if w <= 0 || h <= 0 {
            return Rect::EMPTY;
        }
        // left/top are one of the input origins; w/h are bounded by the
        // narrower input, so everything fits back into i32.
        Rect::new(Pos::new(left as i32, top as i32), w as i32, h as i32)
    }
}

impl Add<Pos> for Rect {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Pos) -> Self {
        Self::new(self.pos + rhs, self.w, self.h)
    }
}

impl Sub<Pos> for Rect {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Pos) -> Self {
        Self::new(self.pos - rhs, self.w, self.h)
    }
}

impl AddAssign<Pos> for Rect {
    #[inline]
    fn add_assign(&mut self, rhs: Pos) {
        self.pos += rhs;
    }
}

impl SubAssign<Pos> for Rect {
    #[inline]
    fn sub_assign(&mut self, rhs: Pos) {
        self.pos -= rhs;
    }
}

/// Intersection.
impl BitAnd for Rect {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        self.intersect(&rhs)
    }
}

impl BitAndAssign for Rect {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersect(&rhs);
    }
}

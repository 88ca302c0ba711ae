use std::{
    fmt::{Display, Formatter},
    ops::{Add, Mul, Neg, Sub},
};

use derive_more::From;

use crate::grid::Grid;

pub type PointTy = isize;

/// A 2D integer coordinate.
///
/// Points are plain values: every operation returns a new point and leaves the
/// receiver untouched. No range is enforced, a point only relates to a grid
/// through [`within`][`Self::within`].
#[derive(Debug, Copy, Clone, Default)]
#[derive(PartialEq, Eq, Hash, Ord, PartialOrd)]
#[derive(From)]
pub struct Point {
    pub x: PointTy,
    pub y: PointTy,
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Point {
    pub const fn new(x: PointTy, y: PointTy) -> Self {
        Point { x, y }
    }

    /// Translates by a displacement given as components.
    pub const fn translate_by(self, dx: PointTy, dy: PointTy) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Translates by a displacement given as another point, treated as a
    /// vector rather than an absolute target. Same as `self + vector`.
    pub const fn translate_by_vector(self, vector: Point) -> Point {
        self.translate_by(vector.x, vector.y)
    }

    /// [`translate_by`][`Self::translate_by`], returning `None` on overflow
    pub const fn checked_translate_by(self, dx: PointTy, dy: PointTy) -> Option<Point> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Point::new(x, y)),
            _ => None,
        }
    }

    pub const fn checked_translate_by_vector(self, vector: Point) -> Option<Point> {
        self.checked_translate_by(vector.x, vector.y)
    }

    /// Whether this point addresses a cell of `grid`, i.e.
    /// `0 <= x < grid.width()` and `0 <= y < grid.height()`.
    pub fn within<T>(self, grid: &Grid<T>) -> bool {
        grid.dims().contains(self)
    }

    pub const fn manhattan_mag(self) -> usize {
        self.x.unsigned_abs() + self.y.unsigned_abs()
    }

    pub fn manhattan_to(self, other: Point) -> usize {
        (self - other).manhattan_mag()
    }

    pub const fn neighbors(self) -> [Point; 4] {
        [
            Point::new(self.x + 1, self.y),
            Point::new(self.x, self.y + 1),
            Point::new(self.x - 1, self.y),
            Point::new(self.x, self.y - 1),
        ]
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        self.translate_by_vector(rhs)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        // Not `self + (-rhs)`, negating MIN overflows even when the difference fits
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<PointTy> for Point {
    type Output = Point;
    fn mul(self, rhs: PointTy) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

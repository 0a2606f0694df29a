//! Geometry types for grid extents and table layout.
//!
//! Everything in `trellis` is measured in character cells, so the only
//! primitive needed is [`Point`]: an unsigned (column, row) pair used both
//! as a 2D extent (grid width/height) and as a cell span.

use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A 2D extent or coordinate in character cells.
///
/// `x` is the column axis, `y` the row axis.
///
/// # Examples
///
/// ```
/// use trellis_core::geometry::Point;
///
/// let size = Point::new(17, 3);
/// assert_eq!(size + Point::new(1, 1), Point::new(18, 4));
/// assert_eq!(size.swapped(), Point::new(3, 17));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// The x component (columns).
    pub x: usize,
    /// The y component (rows).
    pub y: usize,
}

impl Point {
    /// The zero extent.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// The unit extent, the default span of a single cell.
    pub const ONE: Self = Self { x: 1, y: 1 };

    /// Creates a new point.
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the point with its axes exchanged.
    #[inline]
    pub const fn swapped(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }

    /// Returns the number of cells in an extent of this size.
    #[inline]
    pub const fn area(self) -> usize {
        self.x * self.y
    }

    /// Returns whether either axis is zero.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.x == 0 || self.y == 0
    }

    /// Returns the component-wise maximum of two points.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
        }
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x.saturating_sub(rhs.x),
            y: self.y.saturating_sub(rhs.y),
        }
    }
}

impl SubAssign for Point {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl From<(usize, usize)> for Point {
    #[inline]
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (usize, usize) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

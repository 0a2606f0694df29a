//! Axis specifications and normalized ranges for grid slicing.
//!
//! Slicing a [`Grid`](crate::Grid) takes a [`GridIndex`]: one [`AxisSpec`]
//! per axis. A spec is either a single position or a (start, stop, step)
//! span; either form may use negative indices counting from the end, and
//! out-of-range endpoints clamp to bounds rather than erroring.
//!
//! Normalizing a spec against an axis length produces an [`AxisRange`]:
//! an absolute (offset, step, length) triple into the root storage.
//! Ranges compose, so slicing a view re-normalizes against the *view's*
//! extent and maps back to root coordinates.
//!
//! # The `-1` shorthand
//!
//! A single position `i` selects the half-open span `[i, i+1)`, except
//! `i == -1`, which selects the open-ended span `[len-1, end)`: "last
//! element to end". This asymmetry is part of the indexing contract.

use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

/// One axis of a grid index: a single position or a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSpec {
    /// A single position; negative values count from the end.
    At(isize),
    /// A half-open span with an optional step.
    Span {
        /// Start position, `None` meaning the axis start (or end, when the
        /// step is negative).
        start: Option<isize>,
        /// Stop position (exclusive), `None` meaning the axis end (or
        /// start, when the step is negative).
        stop: Option<isize>,
        /// Step between selected positions; must be non-zero.
        step: isize,
    },
}

impl AxisSpec {
    /// The full axis.
    pub const fn full() -> Self {
        Self::Span {
            start: None,
            stop: None,
            step: 1,
        }
    }

    /// A single position.
    pub const fn at(i: isize) -> Self {
        Self::At(i)
    }

    /// A half-open span with unit step.
    pub fn span(start: impl Into<Option<isize>>, stop: impl Into<Option<isize>>) -> Self {
        Self::Span {
            start: start.into(),
            stop: stop.into(),
            step: 1,
        }
    }

    /// Returns this spec with the given step.
    ///
    /// A single position becomes its equivalent span first, so
    /// `AxisSpec::at(-1).step(-1)` walks from the last element backwards.
    pub fn step(self, step: isize) -> Self {
        let (start, stop, _) = self.canonical();
        Self::Span { start, stop, step }
    }

    /// Lowers the spec to (start, stop, step), applying the `-1`
    /// single-position shorthand.
    fn canonical(self) -> (Option<isize>, Option<isize>, isize) {
        match self {
            Self::At(i) => {
                let stop = if i == -1 { None } else { Some(i + 1) };
                (Some(i), stop, 1)
            }
            Self::Span { start, stop, step } => (start, stop, step),
        }
    }

    /// Normalizes this spec against an axis of the given length.
    ///
    /// Follows standard slice normalization: negative indices count from
    /// the end, endpoints clamp to bounds, and a negative step walks the
    /// axis backwards.
    ///
    /// # Panics
    ///
    /// Panics if the step is zero.
    pub fn normalize(self, len: usize) -> AxisRange {
        let (start, stop, step) = self.canonical();
        assert!(step != 0, "axis step cannot be zero");
        let n = len as isize;

        if step > 0 {
            let start = start.map_or(0, |i| clamp_endpoint(i, n, 0, n));
            let stop = stop.map_or(n, |i| clamp_endpoint(i, n, 0, n));
            let len = if stop > start {
                ((stop - start + step - 1) / step) as usize
            } else {
                0
            };
            AxisRange { start, step, len }
        } else {
            let start = start.map_or(n - 1, |i| clamp_endpoint(i, n, -1, n - 1));
            let stop = stop.map_or(-1, |i| clamp_endpoint(i, n, -1, n - 1));
            let m = -step;
            let len = if start > stop {
                ((start - stop + m - 1) / m) as usize
            } else {
                0
            };
            AxisRange { start, step, len }
        }
    }
}

fn clamp_endpoint(i: isize, n: isize, lo: isize, hi: isize) -> isize {
    let i = if i < 0 { i + n } else { i };
    i.clamp(lo, hi)
}

impl From<isize> for AxisSpec {
    #[inline]
    fn from(i: isize) -> Self {
        Self::At(i)
    }
}

impl From<Range<isize>> for AxisSpec {
    #[inline]
    fn from(r: Range<isize>) -> Self {
        Self::span(r.start, r.end)
    }
}

impl From<RangeFrom<isize>> for AxisSpec {
    #[inline]
    fn from(r: RangeFrom<isize>) -> Self {
        Self::span(r.start, None)
    }
}

impl From<RangeTo<isize>> for AxisSpec {
    #[inline]
    fn from(r: RangeTo<isize>) -> Self {
        Self::span(None, r.end)
    }
}

impl From<RangeFull> for AxisSpec {
    #[inline]
    fn from(_: RangeFull) -> Self {
        Self::full()
    }
}

/// A normalized axis range: absolute start offset, step, and length.
///
/// Produced by [`AxisSpec::normalize`]; the `i`-th selected position is
/// `start + i * step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRange {
    /// Absolute start offset along the parent axis.
    pub start: isize,
    /// Step between selected positions.
    pub step: isize,
    /// Number of selected positions.
    pub len: usize,
}

impl AxisRange {
    /// The identity range over an axis of the given length.
    pub const fn full(len: usize) -> Self {
        Self {
            start: 0,
            step: 1,
            len,
        }
    }

    /// Maps a position within this range to the parent axis.
    #[inline]
    pub fn index(self, i: usize) -> usize {
        debug_assert!(i < self.len);
        (self.start + (i as isize) * self.step) as usize
    }

    /// Composes with an inner range that was normalized against
    /// `self.len`, yielding a range over the same parent axis.
    pub fn compose(self, inner: AxisRange) -> AxisRange {
        AxisRange {
            start: self.start + inner.start * self.step,
            step: self.step * inner.step,
            len: inner.len,
        }
    }
}

/// A two-axis grid index.
///
/// Converts from a single axis spec (selecting columns, with the row axis
/// left full) or from an `(x, y)` pair of specs:
///
/// ```
/// use trellis_grid::GridIndex;
///
/// let _cols: GridIndex = (1..3).into(); // columns 1..3, all rows
/// let _cell: GridIndex = (0, -1).into(); // first column, last row
/// let _block: GridIndex = (1..-1, ..2).into(); // interior columns, top rows
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridIndex {
    /// Column axis spec.
    pub x: AxisSpec,
    /// Row axis spec.
    pub y: AxisSpec,
}

impl GridIndex {
    /// Creates an index from per-axis specs.
    pub fn new(x: impl Into<AxisSpec>, y: impl Into<AxisSpec>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl<X: Into<AxisSpec>, Y: Into<AxisSpec>> From<(X, Y)> for GridIndex {
    #[inline]
    fn from((x, y): (X, Y)) -> Self {
        Self::new(x, y)
    }
}

impl From<isize> for GridIndex {
    #[inline]
    fn from(x: isize) -> Self {
        Self::new(x, AxisSpec::full())
    }
}

impl From<Range<isize>> for GridIndex {
    #[inline]
    fn from(x: Range<isize>) -> Self {
        Self::new(x, AxisSpec::full())
    }
}

impl From<RangeFrom<isize>> for GridIndex {
    #[inline]
    fn from(x: RangeFrom<isize>) -> Self {
        Self::new(x, AxisSpec::full())
    }
}

impl From<RangeTo<isize>> for GridIndex {
    #[inline]
    fn from(x: RangeTo<isize>) -> Self {
        Self::new(x, AxisSpec::full())
    }
}

impl From<RangeFull> for GridIndex {
    #[inline]
    fn from(x: RangeFull) -> Self {
        Self::new(x, AxisSpec::full())
    }
}

impl From<AxisSpec> for GridIndex {
    #[inline]
    fn from(x: AxisSpec) -> Self {
        Self::new(x, AxisSpec::full())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(spec: impl Into<AxisSpec>, len: usize) -> (isize, isize, usize) {
        let r = spec.into().normalize(len);
        (r.start, r.step, r.len)
    }

    #[test]
    fn test_normalize_full() {
        assert_eq!(range(.., 5), (0, 1, 5));
        assert_eq!(range(.., 0), (0, 1, 0));
    }

    #[test]
    fn test_normalize_basic_span() {
        assert_eq!(range(1..3, 5), (1, 1, 2));
        assert_eq!(range(2.., 5), (2, 1, 3));
        assert_eq!(range(..4, 5), (0, 1, 4));
    }

    #[test]
    fn test_normalize_negative_endpoints() {
        assert_eq!(range(1..-1, 5), (1, 1, 3));
        assert_eq!(range(-2.., 5), (3, 1, 2));
        assert_eq!(range(..-3, 5), (0, 1, 2));
    }

    #[test]
    fn test_normalize_clamps_out_of_range() {
        assert_eq!(range(0..99, 5), (0, 1, 5));
        assert_eq!(range(-99..3, 5), (0, 1, 3));
        assert_eq!(range(7..9, 5), (5, 1, 0));
    }

    #[test]
    fn test_normalize_single_position() {
        assert_eq!(range(2, 5), (2, 1, 1));
        assert_eq!(range(-2, 5), (3, 1, 1));
    }

    #[test]
    fn test_minus_one_is_open_ended() {
        // -1 means [len-1, end), not [len-1, 0).
        assert_eq!(range(-1, 5), (4, 1, 1));
        assert_eq!(range(-1, 1), (0, 1, 1));
    }

    #[test]
    fn test_normalize_step() {
        assert_eq!(range(AxisSpec::full().step(2), 5), (0, 2, 3));
        assert_eq!(range(AxisSpec::span(1, None).step(2), 6), (1, 2, 3));
    }

    #[test]
    fn test_normalize_negative_step() {
        assert_eq!(range(AxisSpec::full().step(-1), 5), (4, -1, 5));
        assert_eq!(range(AxisSpec::span(3, 0).step(-1), 5), (3, -1, 3));
        assert_eq!(range(AxisSpec::full().step(-2), 5), (4, -2, 3));
    }

    #[test]
    #[should_panic(expected = "step cannot be zero")]
    fn test_zero_step_panics() {
        AxisSpec::full().step(0).normalize(5);
    }

    #[test]
    fn test_compose() {
        // Outer range selects [2, 4, 6] of a length-8 axis.
        let outer = AxisSpec::span(2, None).step(2).normalize(8);
        assert_eq!((outer.start, outer.step, outer.len), (2, 2, 3));

        // Inner slice [1..] of that view selects [4, 6].
        let inner = AxisSpec::span(1, None).normalize(outer.len);
        let composed = outer.compose(inner);
        assert_eq!((composed.start, composed.step, composed.len), (4, 2, 2));
        assert_eq!(composed.index(0), 4);
        assert_eq!(composed.index(1), 6);
    }

    #[test]
    fn test_compose_relative_to_view_not_root() {
        // Slicing a view is relative to the view: [1..3] of [3..8] is [4..6].
        let outer = AxisSpec::span(3, 8).normalize(10);
        let inner = AxisSpec::span(1, 3).normalize(outer.len);
        let composed = outer.compose(inner);
        assert_eq!((composed.start, composed.step, composed.len), (4, 1, 2));
    }
}

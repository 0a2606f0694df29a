//! The generic 2D cell buffer and its borrowed views.

use std::fmt::{self, Write as _};
use std::ops::BitOr;

use trellis_core::error::SizeError;
use trellis_core::geometry::Point;

use crate::axis::{AxisRange, GridIndex};

/// A generic rectangular store of cells.
///
/// Cells are stored column-major: `(x, y)` maps to `data[x * height + y]`,
/// so a column is contiguous. A `Grid` is always a *root*: it owns its
/// backing storage. Windows into that storage are expressed as borrowed
/// views ([`GridView`], [`GridViewMut`]) that alias the root's cells and
/// never copy; a write through a mutable view is immediately visible when
/// reading the root.
///
/// # Coordinate System
///
/// - (0, 0) is the top-left corner
/// - X increases to the right (columns)
/// - Y increases downward (rows)
///
/// # Examples
///
/// ```
/// use trellis_grid::Grid;
///
/// let mut grid = Grid::full((4, 2), '.');
/// grid.slice_mut((1..3, ..)).fill('#');
/// assert_eq!(grid.to_text(), ".##.\n.##.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    /// Cell storage, column-major.
    data: Vec<T>,

    /// Width in columns.
    width: usize,

    /// Height in rows.
    height: usize,
}

impl<T> Grid<T> {
    /// Creates a grid of the given extent with every cell set to `value`.
    ///
    /// Cells are independent clones; mutating one never affects another.
    pub fn full(size: impl Into<Point>, value: T) -> Self
    where
        T: Clone,
    {
        let size = size.into();
        Self {
            data: vec![value; size.area()],
            width: size.x,
            height: size.y,
        }
    }

    /// Returns the grid width in columns.
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height in rows.
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the grid extent.
    #[inline]
    pub const fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Returns true if either axis is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    /// Converts (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(x * self.height + y)
        } else {
            None
        }
    }

    /// Gets a reference to the cell at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.index_of(x, y).map(|i| &self.data[i])
    }

    /// Gets a mutable reference to the cell at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        self.index_of(x, y).map(|i| &mut self.data[i])
    }

    /// Returns a slice of the underlying column-major cell storage.
    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.data
    }

    /// Returns a mutable slice of the underlying column-major cell storage.
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns a shared view of the whole grid.
    pub fn view(&self) -> GridView<'_, T> {
        GridView {
            data: &self.data,
            stride: self.height,
            x: AxisRange::full(self.width),
            y: AxisRange::full(self.height),
        }
    }

    /// Returns a mutable view of the whole grid.
    pub fn view_mut(&mut self) -> GridViewMut<'_, T> {
        GridViewMut {
            stride: self.height,
            x: AxisRange::full(self.width),
            y: AxisRange::full(self.height),
            data: &mut self.data,
        }
    }

    /// Returns a shared view of the selected region.
    ///
    /// The index converts from a single axis spec (columns, all rows) or
    /// an `(x, y)` pair; endpoints clamp to bounds.
    pub fn slice(&self, index: impl Into<GridIndex>) -> GridView<'_, T> {
        self.view().sliced(index.into())
    }

    /// Returns a mutable view of the selected region.
    pub fn slice_mut(&mut self, index: impl Into<GridIndex>) -> GridViewMut<'_, T> {
        self.view_mut().sliced(index.into())
    }

    /// Returns the single cell of a 1x1 grid.
    ///
    /// Fails with [`SizeError::NotSingleton`] for any other extent.
    pub fn item(&self) -> Result<&T, SizeError> {
        if self.width == 1 && self.height == 1 {
            Ok(&self.data[0])
        } else {
            Err(SizeError::NotSingleton {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Returns a new grid with the axes exchanged.
    pub fn transpose(&self) -> Self
    where
        T: Clone,
    {
        let mut data = Vec::with_capacity(self.data.len());
        for nx in 0..self.height {
            for ny in 0..self.width {
                data.push(self.data[ny * self.height + nx].clone());
            }
        }
        Self {
            data,
            width: self.height,
            height: self.width,
        }
    }

    /// Tiles the grid `times.x` times along columns and `times.y` times
    /// along rows, producing an independent enlarged grid.
    pub fn repeat(&self, times: impl Into<Point>) -> Self
    where
        T: Clone,
    {
        let times = times.into();
        let width = self.width * times.x;
        let height = self.height * times.y;
        let mut data = Vec::with_capacity(width * height);
        for x in 0..width {
            for y in 0..height {
                data.push(self.data[(x % self.width) * self.height + y % self.height].clone());
            }
        }
        Self {
            data,
            width,
            height,
        }
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Result<Self, SizeError>
    where
        T: Clone,
    {
        if self.size() != other.size() {
            return Err(SizeError::ShapeMismatch {
                expected_width: self.width,
                expected_height: self.height,
                actual_width: other.width,
                actual_height: other.height,
            });
        }
        if self.is_empty() {
            return Ok(self.clone());
        }
        let data = self
            .data
            .iter()
            .cloned()
            .zip(other.data.iter().cloned())
            .map(|(a, b)| f(a, b))
            .collect();
        Ok(Self {
            data,
            width: self.width,
            height: self.height,
        })
    }

    /// Element-wise bitwise OR of two grids of identical shape.
    ///
    /// A shape mismatch is a [`SizeError`]; combining two empty grids
    /// short-circuits to an empty copy.
    pub fn bit_or(&self, other: &Self) -> Result<Self, SizeError>
    where
        T: BitOr<Output = T> + Clone,
    {
        self.zip_with(other, |a, b| a | b)
    }

    /// Element-wise bitwise AND of two grids of identical shape.
    pub fn bit_and(&self, other: &Self) -> Result<Self, SizeError>
    where
        T: std::ops::BitAnd<Output = T> + Clone,
    {
        self.zip_with(other, |a, b| a & b)
    }

    /// Overwrites every cell of the selected region with `value`.
    pub fn fill_region(&mut self, index: impl Into<GridIndex>, value: T)
    where
        T: Clone,
    {
        self.slice_mut(index).fill(value);
    }

    /// Broadcast-assigns `src` into the selected region.
    ///
    /// See [`GridViewMut::assign`] for the broadcast rules.
    pub fn assign(&mut self, index: impl Into<GridIndex>, src: &Grid<T>) -> Result<(), SizeError>
    where
        T: Clone,
    {
        self.slice_mut(index).assign(src)
    }

    /// Places `src` into this grid with its top-left corner at `at`.
    ///
    /// The source must fit; the backing storage is never grown by a write.
    pub fn paste(&mut self, at: impl Into<Point>, src: &Grid<T>) -> Result<(), SizeError>
    where
        T: Clone,
    {
        self.view_mut().paste(at, src)
    }

    /// Renders the grid as newline-separated rows, stringifying each cell.
    ///
    /// Rows are iterated outer, columns inner, so the output reads the way
    /// the grid displays.
    pub fn to_text(&self) -> String
    where
        T: fmt::Display,
    {
        let mut out = String::new();
        for y in 0..self.height {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..self.width {
                let _ = write!(out, "{}", self.data[x * self.height + y]);
            }
        }
        out
    }
}

impl Grid<char> {
    /// Builds a character grid from newline-separated text.
    ///
    /// Lines are padded with spaces to the longest line, so the result is
    /// rectangular: width is the longest line, height the line count, and
    /// indexing is `(column, row)`.
    pub fn from_text(s: &str) -> Self {
        let rows: Vec<Vec<char>> = s.split('\n').map(|l| l.chars().collect()).collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let height = rows.len();
        let mut data = Vec::with_capacity(width * height);
        for x in 0..width {
            for row in &rows {
                data.push(row.get(x).copied().unwrap_or(' '));
            }
        }
        Self {
            data,
            width,
            height,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// A shared window into a [`Grid`]'s storage.
///
/// Holds a reference to the root's cells plus one normalized range per
/// axis; re-slicing composes ranges relative to the *current* view.
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a, T> {
    data: &'a [T],
    stride: usize,
    x: AxisRange,
    y: AxisRange,
}

impl<'a, T> GridView<'a, T> {
    /// Returns the view width in columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.x.len
    }

    /// Returns the view height in rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.y.len
    }

    /// Returns the view extent.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.x.len, self.y.len)
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        self.x.index(x) * self.stride + self.y.index(y)
    }

    /// Gets a reference to the cell at view coordinates (x, y).
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x < self.width() && y < self.height() {
            Some(&self.data[self.offset(x, y)])
        } else {
            None
        }
    }

    /// Returns the single cell of a 1x1 view, else a [`SizeError`].
    pub fn item(&self) -> Result<&T, SizeError> {
        if self.width() == 1 && self.height() == 1 {
            Ok(&self.data[self.offset(0, 0)])
        } else {
            Err(SizeError::NotSingleton {
                width: self.width(),
                height: self.height(),
            })
        }
    }

    /// Re-slices relative to this view.
    pub fn slice(&self, index: impl Into<GridIndex>) -> GridView<'_, T> {
        let index = index.into();
        GridView {
            data: self.data,
            stride: self.stride,
            x: self.x.compose(index.x.normalize(self.x.len)),
            y: self.y.compose(index.y.normalize(self.y.len)),
        }
    }

    fn sliced(self, index: GridIndex) -> GridView<'a, T> {
        GridView {
            data: self.data,
            stride: self.stride,
            x: self.x.compose(index.x.normalize(self.x.len)),
            y: self.y.compose(index.y.normalize(self.y.len)),
        }
    }

    /// Copies the viewed region into an independent grid.
    pub fn to_grid(&self) -> Grid<T>
    where
        T: Clone,
    {
        let (w, h) = (self.width(), self.height());
        let mut data = Vec::with_capacity(w * h);
        for x in 0..w {
            for y in 0..h {
                data.push(self.data[self.offset(x, y)].clone());
            }
        }
        Grid {
            data,
            width: w,
            height: h,
        }
    }

    /// Renders the viewed region as newline-separated rows.
    pub fn to_text(&self) -> String
    where
        T: fmt::Display,
    {
        let mut out = String::new();
        for y in 0..self.height() {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..self.width() {
                let _ = write!(out, "{}", self.data[self.offset(x, y)]);
            }
        }
        out
    }
}

/// A mutable window into a [`Grid`]'s storage.
///
/// Borrows the root exclusively for its lifetime, which is what makes
/// aliased writes sound: overlapping views can never be live and written
/// concurrently, and once this view is released every write is visible
/// through the root or any later view.
#[derive(Debug)]
pub struct GridViewMut<'a, T> {
    data: &'a mut [T],
    stride: usize,
    x: AxisRange,
    y: AxisRange,
}

impl<'a, T> GridViewMut<'a, T> {
    /// Returns the view width in columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.x.len
    }

    /// Returns the view height in rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.y.len
    }

    /// Returns the view extent.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.x.len, self.y.len)
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        self.x.index(x) * self.stride + self.y.index(y)
    }

    /// Gets a reference to the cell at view coordinates (x, y).
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x < self.width() && y < self.height() {
            let i = self.offset(x, y);
            Some(&self.data[i])
        } else {
            None
        }
    }

    /// Gets a mutable reference to the cell at view coordinates (x, y).
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if x < self.width() && y < self.height() {
            let i = self.offset(x, y);
            Some(&mut self.data[i])
        } else {
            None
        }
    }

    /// Re-slices relative to this view, sharing the borrow.
    pub fn slice(&self, index: impl Into<GridIndex>) -> GridView<'_, T> {
        let index = index.into();
        GridView {
            data: &*self.data,
            stride: self.stride,
            x: self.x.compose(index.x.normalize(self.x.len)),
            y: self.y.compose(index.y.normalize(self.y.len)),
        }
    }

    /// Re-slices mutably relative to this view.
    pub fn slice_mut(&mut self, index: impl Into<GridIndex>) -> GridViewMut<'_, T> {
        let index = index.into();
        GridViewMut {
            x: self.x.compose(index.x.normalize(self.x.len)),
            y: self.y.compose(index.y.normalize(self.y.len)),
            stride: self.stride,
            data: &mut *self.data,
        }
    }

    fn sliced(self, index: GridIndex) -> GridViewMut<'a, T> {
        GridViewMut {
            x: self.x.compose(index.x.normalize(self.x.len)),
            y: self.y.compose(index.y.normalize(self.y.len)),
            stride: self.stride,
            data: self.data,
        }
    }

    /// Overwrites every cell in the view with `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        for x in 0..self.width() {
            for y in 0..self.height() {
                let i = self.offset(x, y);
                self.data[i] = value.clone();
            }
        }
    }

    /// ORs `value` into every cell in the view.
    pub fn or_fill(&mut self, value: T)
    where
        T: BitOr<Output = T> + Copy,
    {
        for x in 0..self.width() {
            for y in 0..self.height() {
                let i = self.offset(x, y);
                self.data[i] = self.data[i] | value;
            }
        }
    }

    /// Broadcast-assigns `src` into the view.
    ///
    /// Each axis of the source must either match the view's extent
    /// exactly or be 1, in which case the source is tiled along that axis.
    /// Tiling writes independent clones; destination cells never alias a
    /// shared source cell. Any other shape is a [`SizeError`].
    pub fn assign(&mut self, src: &Grid<T>) -> Result<(), SizeError>
    where
        T: Clone,
    {
        let (w, h) = (self.width(), self.height());
        let (sw, sh) = (src.width(), src.height());
        if (sw != w && sw != 1) || (sh != h && sh != 1) {
            return Err(SizeError::ShapeMismatch {
                expected_width: w,
                expected_height: h,
                actual_width: sw,
                actual_height: sh,
            });
        }
        if w == 0 || h == 0 {
            return Ok(());
        }
        for x in 0..w {
            for y in 0..h {
                let i = self.offset(x, y);
                self.data[i] = src.data[(x % sw) * sh + y % sh].clone();
            }
        }
        Ok(())
    }

    /// Places `src` into the view with its top-left corner at `at`.
    ///
    /// A source that extends past the view is a [`SizeError`]; a write
    /// never grows the backing storage.
    pub fn paste(&mut self, at: impl Into<Point>, src: &Grid<T>) -> Result<(), SizeError>
    where
        T: Clone,
    {
        let at = at.into();
        if at.x + src.width() > self.width() || at.y + src.height() > self.height() {
            return Err(SizeError::DoesNotFit {
                src_width: src.width(),
                src_height: src.height(),
                x: at.x,
                y: at.y,
                dst_width: self.width(),
                dst_height: self.height(),
            });
        }
        for x in 0..src.width() {
            for y in 0..src.height() {
                let i = self.offset(at.x + x, at.y + y);
                self.data[i] = src.data[x * src.height() + y].clone();
            }
        }
        Ok(())
    }

    /// Copies the viewed region into an independent grid.
    pub fn to_grid(&self) -> Grid<T>
    where
        T: Clone,
    {
        let (w, h) = (self.width(), self.height());
        let mut data = Vec::with_capacity(w * h);
        for x in 0..w {
            for y in 0..h {
                data.push(self.data[self.offset(x, y)].clone());
            }
        }
        Grid {
            data,
            width: w,
            height: h,
        }
    }
}

//! Generic 2D cell buffer with slice views and broadcast assignment.
//!
//! A [`Grid`] is a rectangular, column-major store of cells. Regions are
//! addressed with numpy-flavored [`GridIndex`] slices (negative indices,
//! clamped endpoints, steps) and come back as borrowed views that alias
//! the root's storage; writes through a [`GridViewMut`] land directly in
//! the root. Whole-region writes support broadcast: a source axis of
//! extent 1 tiles across the destination.
//!
//! # Examples
//!
//! ```
//! use trellis_grid::Grid;
//!
//! let mut canvas = Grid::full((6, 3), '.');
//! canvas.slice_mut((1..-1, 1..-1)).fill('#');
//! canvas.fill_region((0, 0), '+');
//! assert_eq!(
//!     canvas.to_text(),
//!     "+.....\n\
//!      .####.\n\
//!      ......",
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod axis;
pub mod grid;

pub use axis::{AxisRange, AxisSpec, GridIndex};
pub use grid::{Grid, GridView, GridViewMut};

pub use trellis_core::error::SizeError;
pub use trellis_core::geometry::Point;

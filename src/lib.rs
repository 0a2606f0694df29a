//! Trellis: styled, boxed, monospaced table rendering
//!
//! Trellis turns a table description, rows of cells with spans and
//! cascading styles, into a monospaced text block with box-drawing
//! borders, suitable for terminals and log streams. It is built on:
//! - A generic 2D buffer with numpy-style slicing, aliasing views, and
//!   broadcast assignment
//! - A span-aware layout solver for row and column sizes
//! - Border-connectivity accumulation with automatic junction glyphs
//! - Optional 24-bit ANSI coloring with a visible-width measurer
//!
//! # Example
//!
//! ```
//! use trellis::prelude::*;
//!
//! let table = Table::new()
//!     .row(["item", "qty"])
//!     .row([
//!         Cel::new("bolts").styled(StylePatch::new().fg(Color::CYAN)),
//!         Cel::new("40").styled(StylePatch::new().halign(HAlign::Right)),
//!     ]);
//! println!("{table}");
//! ```

pub use trellis_core as core;
pub use trellis_grid as grid;
pub use trellis_table as table;

pub mod prelude {
    //! The most commonly used trellis types.
    pub use trellis_core::color::Color;
    pub use trellis_core::error::{ConstructionError, Error, Result, SizeError};
    pub use trellis_core::geometry::Point;
    pub use trellis_core::style::{Edges, HAlign, Style, StylePatch, VAlign};
    pub use trellis_grid::{Grid, GridIndex};
    pub use trellis_table::{BorderGlyphs, Cel, CellContent, Row, Table};
}

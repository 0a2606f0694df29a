//! Styled table layout and box-drawing rendering.
//!
//! A [`Table`] is built from rows of cells, each carrying optional style
//! overrides that cascade cell → row → table. Rendering solves per-row
//! and per-column sizes under multi-cell spans, paints every cell's text
//! and border-connectivity flags into a shared character grid, and
//! resolves each border junction to the right box-drawing glyph.
//!
//! # Examples
//!
//! ```
//! use trellis_table::{BorderGlyphs, Cel, Table};
//!
//! let table = Table::new()
//!     .border_glyphs(BorderGlyphs::ASCII)
//!     .row(["name", "qty"])
//!     .row([Cel::new("bolts"), Cel::new("40")]);
//! println!("{}", table.render().unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod border;
pub mod cel;
mod layout;
pub mod row;
pub mod table;

pub use border::{BorderGlyphs, Connectivity};
pub use cel::{Cel, CellContent};
pub use row::Row;
pub use table::Table;

pub use trellis_core::color::Color;
pub use trellis_core::error::{ConstructionError, Error, Result, SizeError};
pub use trellis_core::style::{Edges, HAlign, Style, StylePatch, VAlign};

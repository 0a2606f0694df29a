//! Core types for `trellis`.
//!
//! This crate provides the foundation the grid and table crates build on:
//!
//! - [`geometry`]: the [`Point`] extent/coordinate pair
//! - [`style`]: edge records, alignment enums, resolved styles and partial
//!   style patches with cell → row → table cascading
//! - [`color`]: 24-bit terminal colors, ANSI escape generation and stripping
//! - [`error`]: error types shared across the workspace
//!
//! # Examples
//!
//! Building a partial style and resolving it against fallbacks:
//!
//! ```
//! use trellis_core::style::{HAlign, Style, StylePatch};
//!
//! let cell = StylePatch::new().padding(1);
//! let row = StylePatch::new().halign(HAlign::Right);
//! let table = Style::table_default();
//!
//! let resolved = cell.cascade(&row, &table);
//! assert_eq!(resolved.padding.left, 1);
//! assert_eq!(resolved.halign, HAlign::Right);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod color;
pub mod error;
pub mod geometry;
pub mod style;

// Re-export commonly used types at the crate root for convenience
pub use color::{Color, RESET};
pub use error::{ConstructionError, Error, Result, SizeError};
pub use geometry::Point;
pub use style::{Edges, HAlign, Style, StylePatch, VAlign};

//! Error types for trellis operations.

use thiserror::Error;

/// Error type for grid shape violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SizeError {
    /// Two grids (or a target region and a source) disagree on shape and
    /// the source cannot be broadcast to match.
    #[error("shape mismatch: expected {expected_width}x{expected_height}, got {actual_width}x{actual_height}")]
    ShapeMismatch {
        /// Width of the target region.
        expected_width: usize,
        /// Height of the target region.
        expected_height: usize,
        /// Width of the offending source.
        actual_width: usize,
        /// Height of the offending source.
        actual_height: usize,
    },

    /// `item()` was called on a region that is not exactly 1x1.
    #[error("expected a 1x1 region, got {width}x{height}")]
    NotSingleton {
        /// Width of the region.
        width: usize,
        /// Height of the region.
        height: usize,
    },

    /// A pasted source block extends past the target's bounds.
    #[error(
        "a {src_width}x{src_height} block does not fit at ({x}, {y}) in a {dst_width}x{dst_height} grid"
    )]
    DoesNotFit {
        /// Width of the source block.
        src_width: usize,
        /// Height of the source block.
        src_height: usize,
        /// Destination x coordinate.
        x: usize,
        /// Destination y coordinate.
        y: usize,
        /// Width of the destination.
        dst_width: usize,
        /// Height of the destination.
        dst_height: usize,
    },
}

/// Error type for malformed table descriptions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// A cell's horizontal span extends past the table's column count.
    #[error(
        "cell at row {row}, column {col} spans {span} columns but the table is {cols} columns wide"
    )]
    SpanOutOfBounds {
        /// Row index of the offending cell.
        row: usize,
        /// Column index of the offending cell.
        col: usize,
        /// The cell's horizontal span.
        span: usize,
        /// The table's column count.
        cols: usize,
    },

    /// A cell declared a span with a zero axis.
    #[error("cell at row {row}, column {col} has a zero span")]
    ZeroSpan {
        /// Row index of the offending cell.
        row: usize,
        /// Column index of the offending cell.
        col: usize,
    },
}

/// Umbrella error type for trellis operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A grid shape violation.
    #[error(transparent)]
    Size(#[from] SizeError),

    /// A malformed table description.
    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

/// Result type alias using the umbrella [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

//! The layout solver: per-row and per-column character sizes.
//!
//! Cells declare a minimum footprint (text extent plus padding and border
//! thickness); the solver distributes those minimums across the rows and
//! columns each cell spans. Smaller spans are settled first, so a wide
//! spanning cell only tops up slack that single-span cells have not
//! already fixed, and sizes grow monotonically: a later cell can grow a
//! slot but never shrink one.

use smallvec::{smallvec, SmallVec};

use trellis_core::error::ConstructionError;

use crate::table::Table;

/// Solved per-row and per-column sizes, in character cells, excluding the
/// shared border lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RcSizes {
    pub rows: SmallVec<[usize; 16]>,
    pub cols: SmallVec<[usize; 16]>,
}

/// Distributes a required total across span slots.
///
/// If the slots already cover `total`, nothing changes. Otherwise the
/// deficit is split evenly, with the remainder handed out one unit at a
/// time to the earliest slots. The tie-break is fixed so layout is
/// deterministic.
pub(crate) fn divvy(total: usize, sizes: &mut [usize]) {
    if sizes.is_empty() {
        return;
    }
    let deficit = total.saturating_sub(sizes.iter().sum());
    let each = deficit / sizes.len();
    let remainder = deficit % sizes.len();
    for (i, size) in sizes.iter_mut().enumerate() {
        *size += each + usize::from(i < remainder);
    }
}

/// Solves row and column sizes for a table.
///
/// Cells are processed in ascending span order (columns first, then
/// rows; ties keep construction order). A zero span on either axis and a
/// horizontal span past the table's column count are construction
/// errors; a vertical span past the last row is not, since the table's
/// logical height already accounts for the overflow.
pub(crate) fn solve(table: &Table) -> Result<RcSizes, ConstructionError> {
    let size = table.size();
    let mut rows: SmallVec<[usize; 16]> = smallvec![0; size.y];
    let mut cols: SmallVec<[usize; 16]> = smallvec![0; size.x];

    struct Entry<'a> {
        r: usize,
        c: usize,
        cel: &'a crate::cel::Cel,
    }

    let mut entries = Vec::new();
    for (r, row) in table.rows.iter().enumerate() {
        let mut c = 0;
        for cel in row {
            if cel.span.x == 0 || cel.span.y == 0 {
                return Err(ConstructionError::ZeroSpan { row: r, col: c });
            }
            entries.push(Entry { r, c, cel });
            c += cel.span.x;
        }
    }
    entries.sort_by_key(|e| (e.cel.span.x, e.cel.span.y));

    for entry in entries {
        let span = entry.cel.span;
        if entry.c + span.x > size.x {
            return Err(ConstructionError::SpanOutOfBounds {
                row: entry.r,
                col: entry.c,
                span: span.x,
                cols: size.x,
            });
        }
        let style = entry
            .cel
            .style
            .cascade(&table.rows[entry.r].style, &table.style);
        let min = entry.cel.min_size(&style, &table.glyphs);
        divvy(min.x, &mut cols[entry.c..entry.c + span.x]);
        divvy(min.y, &mut rows[entry.r..entry.r + span.y]);
    }
    Ok(RcSizes { rows, cols })
}

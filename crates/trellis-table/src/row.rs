//! Table rows: an ordered run of cells plus row-level style fallbacks.

use trellis_core::error::SizeError;
use trellis_core::style::{Style, StylePatch};
use trellis_grid::Grid;

use crate::border::{BorderGlyphs, Connectivity};
use crate::cel::Cel;
use crate::layout::RcSizes;

/// One row of a table.
///
/// Owns its cells and a [`StylePatch`] consulted as the middle level of
/// the style cascade: a cell field left unset falls back to the row, then
/// to the table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub(crate) cells: Vec<Cel>,
    pub(crate) style: StylePatch,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a cell, builder-style.
    pub fn cell(mut self, cel: impl Into<Cel>) -> Self {
        self.cells.push(cel.into());
        self
    }

    /// Sets the row's style overrides.
    pub fn styled(mut self, style: StylePatch) -> Self {
        self.style = style;
        self
    }

    /// Appends a cell.
    pub fn push(&mut self, cel: impl Into<Cel>) {
        self.cells.push(cel.into());
    }

    /// Number of cells (not column slots; a spanning cell counts once).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over the row's cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cel> {
        self.cells.iter()
    }

    /// Paints every cell of this row into the table's output grids.
    ///
    /// Each cell's footprint covers the columns and rows it spans plus
    /// one border unit on the right and bottom, so adjacent footprints
    /// overlap exactly on shared border lines and their connectivity
    /// flags accumulate there.
    pub(crate) fn paint(
        &self,
        chars: &mut Grid<char>,
        mask: &mut Grid<Connectivity>,
        deco: &mut Grid<String>,
        table_style: &Style,
        glyphs: &BorderGlyphs,
        sizes: &RcSizes,
        r: usize,
    ) -> Result<(), SizeError> {
        let bw = glyphs.w;
        let bh = glyphs.h;
        let y: usize = sizes.rows[..r].iter().sum();
        let mut c = 0;
        for cel in &self.cells {
            let span = cel.span;
            let x: usize = sizes.cols[..c].iter().sum();
            let w: usize = sizes.cols[c..c + span.x].iter().sum::<usize>() + bw;
            let h: usize = sizes.rows[r..r + span.y].iter().sum::<usize>() + bh;
            let (xi, yi) = (x as isize, y as isize);
            let (wi, hi) = (w as isize, h as isize);

            let style = cel.style.cascade(&self.style, table_style);
            cel.paint(
                &style,
                chars.slice_mut((xi..xi + wi, yi..yi + hi)),
                mask.slice_mut((xi..xi + wi, yi..yi + hi)),
                // One wider: escape column i precedes character column i.
                deco.slice_mut((xi..xi + wi + 1, yi..yi + hi)),
                glyphs,
            )?;
            c += span.x;
        }
        Ok(())
    }
}

impl<C: Into<Cel>, const N: usize> From<[C; N]> for Row {
    fn from(cells: [C; N]) -> Self {
        cells.into_iter().collect()
    }
}

impl<C: Into<Cel>> FromIterator<C> for Row {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(Into::into).collect(),
            style: StylePatch::new(),
        }
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Cel;
    type IntoIter = std::slice::Iter<'a, Cel>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cel::CellContent;

    #[test]
    fn test_from_array_converts_values() {
        let row = Row::from(["a", "b"]);
        assert_eq!(row.len(), 2);
        assert_eq!(row.cells[1].content, CellContent::Text("b".to_string()));
    }

    #[test]
    fn test_builder() {
        let row = Row::new().cell("x").cell(Cel::gap());
        assert_eq!(row.len(), 2);
        assert_eq!(row.cells[1].content, CellContent::Gap);
    }
}

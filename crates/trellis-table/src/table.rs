//! The table: construction surface, render pipeline, and output cache.

use std::fmt;

use once_cell::unsync::OnceCell;

use trellis_core::color::RESET;
use trellis_core::error::{Error, Result};
use trellis_core::geometry::Point;
use trellis_core::style::{Style, StylePatch};
use trellis_grid::Grid;

use crate::border::{BorderGlyphs, Connectivity};
use crate::cel::{Cel, CellContent};
use crate::layout;
use crate::row::Row;

/// The character and escape grids produced by one render.
#[derive(Debug, Clone)]
struct Rendering {
    chars: Grid<char>,
    deco: Grid<String>,
}

/// A styled table of rows and cells.
///
/// Rendering is a pure function of the table description: cascade styles,
/// solve row/column sizes, let every cell paint its text and border
/// connectivity flags into sub-views of the output grids, resolve each
/// accumulated mask to a box-drawing glyph, stringify. The result is
/// cached for the table's lifetime; mutating the table after the first
/// render leaves the cache stale rather than invalidating it.
///
/// # Examples
///
/// ```
/// use trellis_table::Table;
///
/// let table = Table::new().row(["A", "B"]);
/// assert_eq!(
///     table.render().unwrap(),
///     "┌───────┬───────┐\n\
///      │   A   │   B   │\n\
///      └───────┴───────┘",
/// );
/// ```
#[derive(Debug)]
pub struct Table {
    pub(crate) rows: Vec<Row>,
    pub(crate) glyphs: BorderGlyphs,
    pub(crate) style: Style,
    cache: OnceCell<Rendering>,
}

impl Table {
    /// Creates an empty table with box-drawing borders and the system
    /// default style: all borders on, padding (3, 0), top-left
    /// alignment, no colors.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            glyphs: BorderGlyphs::BOX,
            style: Style::table_default(),
            cache: OnceCell::new(),
        }
    }

    /// Appends a row built from anything convertible to cells.
    pub fn row<I>(mut self, cells: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Cel>,
    {
        self.rows.push(cells.into_iter().collect());
        self
    }

    /// Appends a pre-built [`Row`], keeping its row-level style.
    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Applies table-level style overrides on top of the system defaults.
    pub fn styled(mut self, style: StylePatch) -> Self {
        self.style = style.cascade(&StylePatch::new(), &Style::table_default());
        self
    }

    /// Sets the border glyph set.
    pub fn border_glyphs(mut self, glyphs: BorderGlyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Returns the table's rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The table's logical extent in (columns, rows).
    ///
    /// Width is the widest row's occupied column slots. Height is the
    /// row count, extended by any cell whose vertical span reaches past
    /// the last row.
    pub fn size(&self) -> Point {
        let mut w = 0;
        let mut h = self.rows.len();
        for (r, row) in self.rows.iter().rev().enumerate() {
            let mut rw = 0;
            for cel in row {
                rw += cel.span.x;
                if cel.span.y > r + 1 {
                    h += cel.span.y - (r + 1);
                }
            }
            w = w.max(rw);
        }
        Point::new(w, h)
    }

    /// Renders the table, with color escapes where styles specify them.
    ///
    /// For an uncolored table this equals [`render_plain`].
    ///
    /// [`render_plain`]: Table::render_plain
    pub fn render(&self) -> Result<String> {
        self.rendering().map(|r| r.stringify())
    }

    /// Renders the table without any color escapes.
    pub fn render_plain(&self) -> Result<String> {
        self.rendering().map(|r| r.chars.to_text())
    }

    /// The rendered character grid, without color escapes.
    ///
    /// This is what a parent table embeds when this table is nested.
    pub fn grid(&self) -> Result<&Grid<char>> {
        self.rendering().map(|r| &r.chars)
    }

    fn rendering(&self) -> Result<&Rendering> {
        self.cache.get_or_try_init(|| self.render_grids())
    }

    fn render_grids(&self) -> Result<Rendering> {
        let sizes = layout::solve(self)?;
        let width: usize = sizes.cols.iter().sum();
        let height: usize = sizes.rows.iter().sum();
        let bw = self.glyphs.w;
        let bh = self.glyphs.h;

        let mut chars = Grid::full((width + bw, height + bh), ' ');
        let mut mask = Grid::full((width + bw, height + bh), Connectivity::empty());
        // One column wider: escape column i precedes character column i,
        // and the final column closes the line.
        let mut deco = Grid::full((width + bw + 1, height + bh), String::new());

        for (r, row) in self.rows.iter().enumerate() {
            row.paint(
                &mut chars,
                &mut mask,
                &mut deco,
                &self.style,
                &self.glyphs,
                &sizes,
                r,
            )?;
        }

        for (cell, &con) in chars.cells_mut().iter_mut().zip(mask.cells()) {
            if let Some(glyph) = self.glyphs.resolve(con) {
                *cell = glyph;
            }
        }
        Ok(Rendering { chars, deco })
    }
}

impl Rendering {
    /// Interleaves escape and character columns into the final text.
    ///
    /// Lines that carry any escape are closed with a reset so color
    /// never bleeds past the table's right edge.
    fn stringify(&self) -> String {
        let mut out = String::new();
        for y in 0..self.chars.height() {
            if y > 0 {
                out.push('\n');
            }
            let mut line_has_escape = false;
            for x in 0..=self.chars.width() {
                if let Some(escape) = self.deco.get(x, y) {
                    if !escape.is_empty() {
                        line_has_escape = true;
                        out.push_str(escape);
                    }
                }
                if let Some(&ch) = self.chars.get(x, y) {
                    out.push(ch);
                }
            }
            if line_has_escape && !out.ends_with(RESET) {
                out.push_str(RESET);
            }
        }
        out
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render().map_err(|_| fmt::Error)?)
    }
}

impl TryFrom<&Table> for CellContent {
    type Error = Error;

    fn try_from(table: &Table) -> Result<Self> {
        Ok(Self::SubGrid(table.grid()?.clone()))
    }
}

impl TryFrom<&Table> for Cel {
    type Error = Error;

    fn try_from(table: &Table) -> Result<Self> {
        CellContent::try_from(table).map(Cel::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use trellis_core::color::{strip_ansi, Color};
    use trellis_core::error::ConstructionError;
    use trellis_core::style::{HAlign, VAlign};

    #[test]
    fn test_render_two_cells() {
        let table = Table::new().row(["A", "B"]);
        assert_eq!(
            table.render().unwrap(),
            "┌───────┬───────┐\n\
             │   A   │   B   │\n\
             └───────┴───────┘",
        );
    }

    #[test]
    fn test_render_ascii_preset() {
        let table = Table::new().row(["A", "B"]).border_glyphs(BorderGlyphs::ASCII);
        assert_eq!(
            table.render().unwrap(),
            "+-------+-------+\n\
             |   A   |   B   |\n\
             +-------+-------+",
        );
    }

    #[test]
    fn test_render_horizontal_span() {
        let table = Table::new()
            .row([Cel::new("a").span((2, 1))])
            .row(["b", "c"]);
        assert_eq!(
            table.render().unwrap(),
            "┌───────────────┐\n\
             │   a           │\n\
             ├───────┬───────┤\n\
             │   b   │   c   │\n\
             └───────┴───────┘",
        );
    }

    #[test]
    fn test_render_vertical_span_with_gap() {
        let table = Table::new()
            .row([Cel::new("a").span((1, 2)), Cel::new("b")])
            .row([Cel::gap(), Cel::new("c")]);
        assert_eq!(
            table.render().unwrap(),
            "┌───────┬───────┐\n\
             │   a   │   b   │\n\
             │       ├───────┤\n\
             │       │   c   │\n\
             └───────┴───────┘",
        );
    }

    #[test]
    fn test_render_vertical_overflow_extends_height() {
        let table = Table::new().row([Cel::new("a").span((1, 2))]);
        assert_eq!(table.size(), Point::new(1, 2));
        // The cell's minimum height splits across both logical rows.
        assert_eq!(
            table.render().unwrap(),
            "┌───────┐\n\
             │   a   │\n\
             └───────┘",
        );
    }

    #[test]
    fn test_render_gap_draws_nothing() {
        let table = Table::new().row([Cel::new("A"), Cel::gap()]);
        assert_eq!(
            table.render().unwrap(),
            "┌───────┐\n\
             │   A   │\n\
             └───────┘",
        );
    }

    #[test]
    fn test_render_nested_table() {
        let inner = Table::new().row(["x"]);
        let table = Table::new().row([Cel::try_from(&inner).unwrap()]);
        assert_eq!(
            table.render().unwrap(),
            "┌───────────────┐\n\
             │   ┌───────┐   │\n\
             │   │   x   │   │\n\
             │   └───────┘   │\n\
             └───────────────┘",
        );
    }

    #[test]
    fn test_render_alignment() {
        let table = Table::new()
            .row(["aa", "bb"])
            .row([Cel::new("c")
                .span((2, 1))
                .styled(StylePatch::new().halign(HAlign::Right))]);
        assert_eq!(
            table.render().unwrap(),
            "┌────────┬────────┐\n\
             │   aa   │   bb   │\n\
             ├────────┴────────┤\n\
             │             c   │\n\
             └─────────────────┘",
        );
    }

    #[test]
    fn test_render_multiline_and_valign_bottom() {
        let table = Table::new().row([
            Cel::new("l1\nl2"),
            Cel::new("v").styled(StylePatch::new().valign(VAlign::Bottom)),
        ]);
        assert_eq!(
            table.render().unwrap(),
            "┌────────┬───────┐\n\
             │   l1   │       │\n\
             │   l2   │   v   │\n\
             └────────┴───────┘",
        );
    }

    #[test]
    fn test_render_row_style_cascades() {
        let mut table = Table::new().row(["wide", "x"]);
        table.push_row(
            Row::from(["a", "b"]).styled(StylePatch::new().halign(HAlign::Right)),
        );
        assert_eq!(
            table.render().unwrap(),
            "┌──────────┬───────┐\n\
             │   wide   │   x   │\n\
             ├──────────┼───────┤\n\
             │      a   │   b   │\n\
             └──────────┴───────┘",
        );
    }

    #[test]
    fn test_render_foreground_color() {
        let table = Table::new().row([Cel::new("A").styled(StylePatch::new().fg(Color::RED))]);
        let out = table.render().unwrap();
        assert_eq!(
            out,
            "┌───────┐\n\
             │\u{1b}[38;2;255;0;0m   A   │\u{1b}[0m\n\
             └───────┘",
        );
        assert_eq!(strip_ansi(&out), table.render_plain().unwrap());
    }

    #[test]
    fn test_render_escape_carrying_value() {
        // Escapes inside a cell's text take no layout space; they pass
        // through to the output at the column where they occurred.
        let table = Table::new().row([Cel::new(format!(
            "{}ok{}",
            Color::RED.to_ansi_fg(),
            RESET
        ))]);
        let out = table.render().unwrap();
        assert_eq!(
            out,
            "┌────────┐\n\
             │   \u{1b}[38;2;255;0;0mok\u{1b}[0m   │\u{1b}[0m\n\
             └────────┘",
        );
        assert_eq!(strip_ansi(&out), table.render_plain().unwrap());
    }

    #[test]
    fn test_render_border_color_strips_to_plain() {
        let table = Table::new()
            .styled(StylePatch::new().border_fg(Color::CYAN))
            .row(["A", "B"]);
        let out = table.render().unwrap();
        assert_ne!(out, table.render_plain().unwrap());
        assert_eq!(strip_ansi(&out), table.render_plain().unwrap());
    }

    #[test]
    fn test_render_is_idempotent() {
        let table = Table::new()
            .row(["one", "two"])
            .row([Cel::new("three").span((2, 1))]);
        assert_eq!(table.render().unwrap(), table.render().unwrap());
    }

    #[test]
    fn test_render_zero_span_fails_before_output() {
        let table = Table::new().row([Cel::new("x").span((0, 1))]);
        assert_eq!(
            table.render().unwrap_err(),
            Error::Construction(ConstructionError::ZeroSpan { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_display_matches_render() {
        let table = Table::new().row(["A"]);
        assert_eq!(table.to_string(), table.render().unwrap());
    }

    #[test]
    fn test_size() {
        let table = Table::new()
            .row(["a", "b", "c"])
            .row([Cel::new("d").span((2, 1))]);
        assert_eq!(table.size(), Point::new(3, 2));
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new();
        assert_eq!(table.size(), Point::ZERO);
        assert_eq!(table.render().unwrap(), " ");
    }
}

//! Table cells: content, span, and the per-cell paint step.

use trellis_core::color::{extract_escapes, visible_width, RESET};
use trellis_core::error::SizeError;
use trellis_core::geometry::Point;
use trellis_core::style::{HAlign, Style, StylePatch, VAlign};
use trellis_grid::{Grid, GridViewMut};

use crate::border::{BorderGlyphs, Connectivity};

/// What a cell displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    /// Plain (possibly multi-line, possibly color-escaped) text.
    Text(String),
    /// A placeholder occupying a column slot without drawing anything:
    /// no text, no borders, no colors.
    Gap,
    /// A pre-rendered character grid, typically a nested table.
    SubGrid(Grid<char>),
}

impl From<&str> for CellContent {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellContent {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Grid<char>> for CellContent {
    fn from(grid: Grid<char>) -> Self {
        Self::SubGrid(grid)
    }
}

/// A single cell of a table.
///
/// Carries its content, the number of columns and rows it spans, and a
/// partial style resolved against the row and table at render time.
///
/// # Examples
///
/// ```
/// use trellis_table::Cel;
/// use trellis_core::style::{HAlign, StylePatch};
///
/// let header = Cel::new("total")
///     .span((2, 1))
///     .styled(StylePatch::new().halign(HAlign::Middle));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Cel {
    pub(crate) content: CellContent,
    pub(crate) span: Point,
    pub(crate) style: StylePatch,
}

impl Cel {
    /// Creates a cell from anything convertible to [`CellContent`].
    pub fn new(content: impl Into<CellContent>) -> Self {
        Self {
            content: content.into(),
            span: Point::ONE,
            style: StylePatch::new(),
        }
    }

    /// Creates a gap: one column slot with no content, borders, or
    /// colors. Used under a vertical span from the row above or to skip
    /// a position on purpose.
    pub fn gap() -> Self {
        Self {
            content: CellContent::Gap,
            span: Point::ONE,
            style: StylePatch::new().padding(0).border(false).no_fg().no_bg(),
        }
    }

    /// Sets the number of (columns, rows) this cell spans.
    pub fn span(mut self, span: impl Into<Point>) -> Self {
        self.span = span.into();
        self
    }

    /// Sets the cell's style overrides.
    pub fn styled(mut self, style: StylePatch) -> Self {
        self.style = style;
        self
    }

    fn content_text(&self) -> String {
        match &self.content {
            CellContent::Text(s) => s.clone(),
            CellContent::Gap => String::new(),
            CellContent::SubGrid(grid) => grid.to_text(),
        }
    }

    /// Minimum footprint under the given resolved style: visible text
    /// extent plus padding, plus border thickness on any axis where a
    /// border is enabled.
    pub(crate) fn min_size(&self, style: &Style, glyphs: &BorderGlyphs) -> Point {
        let text = self.content_text();
        let lines: Vec<&str> = text.split('\n').collect();
        let w = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0);
        let h = lines.len();
        Point::new(
            w + style.padding.left
                + style.padding.right
                + usize::from(style.border.left || style.border.right) * glyphs.w,
            h + style.padding.top
                + style.padding.bottom
                + usize::from(style.border.top || style.border.bottom) * glyphs.h,
        )
    }

    /// Paints this cell into its screen footprint.
    ///
    /// `chars`, `mask`, and `deco` are sub-views of the table's output,
    /// connectivity, and escape grids, already sized to the cell's
    /// footprint (`deco` one column wider, since escape column `i`
    /// precedes character column `i`). Borders contribute connectivity
    /// flags only; glyph selection happens in the table-wide resolution
    /// pass once every neighbor has painted.
    pub(crate) fn paint(
        &self,
        style: &Style,
        mut chars: GridViewMut<'_, char>,
        mut mask: GridViewMut<'_, Connectivity>,
        mut deco: GridViewMut<'_, String>,
        glyphs: &BorderGlyphs,
    ) -> Result<(), SizeError> {
        use Connectivity as C;

        let bw = glyphs.w as isize;
        let bh = glyphs.h as isize;

        let mut border_color = String::new();
        if let Some(c) = style.border_bg {
            border_color.push_str(&c.to_ansi_bg());
        }
        if let Some(c) = style.border_fg {
            border_color.push_str(&c.to_ansi_fg());
        }

        if bh > 0 {
            if style.border.top {
                mask.slice_mut((1..-1, ..bh)).or_fill(C::LEFT | C::RIGHT);
                mask.slice_mut((0, ..bh)).or_fill(C::RIGHT);
                mask.slice_mut((-1, ..bh)).or_fill(C::LEFT);
                if !border_color.is_empty() {
                    deco.slice_mut((0, ..bh)).fill(border_color.clone());
                    deco.slice_mut((-2, ..bh)).fill(RESET.to_string());
                }
            }
            if style.border.bottom {
                mask.slice_mut((1..-1, -bh..)).or_fill(C::LEFT | C::RIGHT);
                mask.slice_mut((0, -bh..)).or_fill(C::RIGHT);
                mask.slice_mut((-1, -bh..)).or_fill(C::LEFT);
                if !border_color.is_empty() {
                    deco.slice_mut((0, -bh..)).fill(border_color.clone());
                    deco.slice_mut((-2, -bh..)).fill(RESET.to_string());
                }
            }
        }
        if bw > 0 {
            if style.border.left {
                mask.slice_mut((..bw, 1..-1)).or_fill(C::UP | C::DOWN);
                mask.slice_mut((..bw, 0)).or_fill(C::DOWN);
                mask.slice_mut((..bw, -1)).or_fill(C::UP);
                if !border_color.is_empty() {
                    deco.slice_mut((0, 1..-1)).fill(border_color.clone());
                    deco.slice_mut((bw, 1..-1)).fill(RESET.to_string());
                }
            }
            if style.border.right {
                mask.slice_mut((-bw.., 1..-1)).or_fill(C::UP | C::DOWN);
                mask.slice_mut((-bw.., 0)).or_fill(C::DOWN);
                mask.slice_mut((-bw.., -1)).or_fill(C::UP);
                if !border_color.is_empty() {
                    // The closing reset comes from the neighbor's left
                    // border or the end of the line.
                    deco.slice_mut((-bw - 1, ..)).fill(border_color.clone());
                }
            }
        }

        let text = self.content_text();
        let text = match style.halign {
            HAlign::Left => text,
            HAlign::Middle => pad_lines(&text, center_line),
            HAlign::Right => pad_lines(&text, rjust_line),
        };
        // Escapes are zero-width on screen, so they live in the escape
        // grid, not the character grid: the painted block must be exactly
        // as wide as the solver measured it.
        let mut plain = String::new();
        let mut escapes: Vec<(usize, usize, String)> = Vec::new();
        for (row, line) in text.split('\n').enumerate() {
            if row > 0 {
                plain.push('\n');
            }
            let (stripped, cols) = extract_escapes(line);
            plain.push_str(&stripped);
            escapes.extend(cols.into_iter().map(|(col, e)| (col, row, e)));
        }
        let content = Grid::from_text(&plain);

        let gw = chars.width() as isize;
        let gh = chars.height() as isize;
        let x = match style.halign {
            HAlign::Left => style.padding.left as isize + bw,
            HAlign::Middle => (gw - content.width() as isize) / 2,
            HAlign::Right => {
                gw - content.width() as isize - style.padding.right as isize - bw
            }
        };
        let y = match style.valign {
            VAlign::Top => style.padding.top as isize + bh,
            VAlign::Middle => (gh - content.height() as isize) / 2,
            VAlign::Bottom => {
                gh - content.height() as isize - style.padding.bottom as isize - bh
            }
        };

        let mut content_color = String::new();
        if let Some(c) = style.bg {
            content_color.push_str(&c.to_ansi_bg());
        }
        if let Some(c) = style.fg {
            content_color.push_str(&c.to_ansi_fg());
        }
        if !content_color.is_empty() {
            deco.slice_mut((bw, bh..-bh)).fill(content_color);
            deco.slice_mut((-bw, bh..-bh)).fill(RESET.to_string());
        }

        let px = x.max(0) as usize;
        let py = y.max(0) as usize;
        for (col, row, escape) in escapes {
            if let Some(slot) = deco.get_mut(px + col, py + row) {
                slot.push_str(&escape);
            }
        }
        chars.paste((px, py), &content)
    }
}

impl From<CellContent> for Cel {
    fn from(content: CellContent) -> Self {
        Self::new(content)
    }
}

impl From<&str> for Cel {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Cel {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<Grid<char>> for Cel {
    fn from(grid: Grid<char>) -> Self {
        Self::new(grid)
    }
}

fn pad_lines(s: &str, pad: fn(&str, usize) -> String) -> String {
    let width = s.split('\n').map(visible_width).max().unwrap_or(0);
    s.split('\n')
        .map(|l| pad(l, width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn center_line(line: &str, width: usize) -> String {
    let slack = width.saturating_sub(visible_width(line));
    let left = slack / 2;
    format!(
        "{}{}{}",
        " ".repeat(left),
        line,
        " ".repeat(slack - left)
    )
}

fn rjust_line(line: &str, width: usize) -> String {
    let slack = width.saturating_sub(visible_width(line));
    format!("{}{}", " ".repeat(slack), line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn resolved(patch: StylePatch) -> Style {
        patch.cascade(&StylePatch::new(), &Style::table_default())
    }

    #[test]
    fn test_min_size_default_style() {
        // 1 char + padding (3, 3) + one border unit on each axis.
        let cel = Cel::new("A");
        let size = cel.min_size(&Style::table_default(), &BorderGlyphs::BOX);
        assert_eq!(size, Point::new(8, 2));
    }

    #[test]
    fn test_min_size_multiline() {
        let cel = Cel::new("ab\ncdef");
        let size = cel.min_size(&Style::table_default(), &BorderGlyphs::BOX);
        assert_eq!(size, Point::new(11, 3));
    }

    #[test]
    fn test_min_size_ignores_escapes() {
        let red = trellis_core::color::Color::RED;
        let cel = Cel::new(format!("{}ok{}", red.to_ansi_fg(), RESET));
        let plain = Cel::new("ok");
        let style = Style::table_default();
        assert_eq!(
            cel.min_size(&style, &BorderGlyphs::BOX),
            plain.min_size(&style, &BorderGlyphs::BOX)
        );
    }

    #[test]
    fn test_min_size_gap() {
        let gap = Cel::gap();
        let style = resolved(gap.style);
        assert_eq!(gap.min_size(&style, &BorderGlyphs::BOX), Point::new(0, 1));
    }

    #[test]
    fn test_gap_style_blocks_everything() {
        let style = resolved(Cel::gap().style);
        assert!(!style.border.left && !style.border.top);
        assert_eq!(style.padding.left, 0);
        assert_eq!(style.fg, None);
    }

    #[test]
    fn test_alignment_padding() {
        assert_eq!(pad_lines("ab\ncdef", center_line), " ab \ncdef");
        assert_eq!(pad_lines("ab\ncdef", rjust_line), "  ab\ncdef");
    }

    #[test]
    fn test_center_extra_space_goes_right() {
        assert_eq!(center_line("a", 4), " a  ");
    }
}

//! Cell styling: edge records, alignment, and the style cascade.
//!
//! A fully resolved [`Style`] carries padding, border switches, alignment,
//! and four optional color slots. Cells and rows hold a partial
//! [`StylePatch`] instead; at render time each field is resolved
//! independently by falling back from cell → row → table defaults
//! ([`StylePatch::cascade`]).
//!
//! # Examples
//!
//! ```
//! use trellis_core::style::{Edges, HAlign, Style, StylePatch};
//!
//! // Shorthand edge values: one value, (horizontal, vertical), or all four.
//! let uniform: Edges<usize> = 2.into();
//! assert_eq!((uniform.left, uniform.top), (2, 2));
//!
//! let hv: Edges<usize> = (3, 0).into();
//! assert_eq!((hv.left, hv.top, hv.right, hv.bottom), (3, 0, 3, 0));
//!
//! // Cascade: the nearest explicit value wins.
//! let cell = StylePatch::new();
//! let row = StylePatch::new().halign(HAlign::Right);
//! let resolved = cell.cascade(&row, &Style::table_default());
//! assert_eq!(resolved.halign, HAlign::Right);
//! ```

use crate::color::Color;

/// A per-side record of some value: left, top, right, bottom.
///
/// Shorthand conversions mirror the construction surface: a single value
/// applies to all four sides, a pair is (horizontal, vertical), and a
/// 4-tuple is (left, top, right, bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Edges<V> {
    /// Left side value.
    pub left: V,
    /// Top side value.
    pub top: V,
    /// Right side value.
    pub right: V,
    /// Bottom side value.
    pub bottom: V,
}

impl<V> Edges<V> {
    /// Creates an edge record from explicit per-side values.
    #[inline]
    pub const fn new(left: V, top: V, right: V, bottom: V) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

impl<V: Copy> Edges<V> {
    /// Creates an edge record with the same value on all four sides.
    #[inline]
    pub const fn splat(v: V) -> Self {
        Self::new(v, v, v, v)
    }

    /// Creates an edge record from a horizontal and a vertical value.
    #[inline]
    pub const fn symmetric(horizontal: V, vertical: V) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }
}

impl<V: Copy> From<V> for Edges<V> {
    #[inline]
    fn from(v: V) -> Self {
        Self::splat(v)
    }
}

impl<V: Copy> From<(V, V)> for Edges<V> {
    #[inline]
    fn from((horizontal, vertical): (V, V)) -> Self {
        Self::symmetric(horizontal, vertical)
    }
}

impl<V> From<(V, V, V, V)> for Edges<V> {
    #[inline]
    fn from((left, top, right, bottom): (V, V, V, V)) -> Self {
        Self::new(left, top, right, bottom)
    }
}

/// Horizontal alignment of cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HAlign {
    /// Flush left (the table default).
    #[default]
    Left,
    /// Centered.
    Middle,
    /// Flush right.
    Right,
}

/// Vertical alignment of cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VAlign {
    /// Flush top (the table default).
    #[default]
    Top,
    /// Centered.
    Middle,
    /// Flush bottom.
    Bottom,
}

/// A fully resolved style, with every field populated.
///
/// Color slots remain `Option`: `None` means "emit no escape sequence",
/// not "unspecified".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Interior padding on each side, in character cells.
    pub padding: Edges<usize>,
    /// Whether to draw the border line on each side.
    pub border: Edges<bool>,
    /// Horizontal alignment of content.
    pub halign: HAlign,
    /// Vertical alignment of content.
    pub valign: VAlign,
    /// Content foreground color.
    pub fg: Option<Color>,
    /// Content background color.
    pub bg: Option<Color>,
    /// Border foreground color.
    pub border_fg: Option<Color>,
    /// Border background color.
    pub border_bg: Option<Color>,
}

impl Style {
    /// The system defaults applied at the table level: all borders on,
    /// padding (3, 0), top-left alignment, no colors.
    pub const fn table_default() -> Self {
        Self {
            padding: Edges::symmetric(3, 0),
            border: Edges::splat(true),
            halign: HAlign::Left,
            valign: VAlign::Top,
            fg: None,
            bg: None,
            border_fg: None,
            border_bg: None,
        }
    }
}

/// A partially specified style; every field is optional.
///
/// Unset fields fall through to the next level of the cascade. The color
/// slots are tri-state: unset (inherit), explicitly uncolored (via the
/// `no_*` builders), or set to a color, so an element can suppress a
/// color it would otherwise inherit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StylePatch {
    /// Interior padding override.
    pub padding: Option<Edges<usize>>,
    /// Border switch override.
    pub border: Option<Edges<bool>>,
    /// Horizontal alignment override.
    pub halign: Option<HAlign>,
    /// Vertical alignment override.
    pub valign: Option<VAlign>,
    /// Content foreground override (`Some(None)` = explicitly uncolored).
    pub fg: Option<Option<Color>>,
    /// Content background override.
    pub bg: Option<Option<Color>>,
    /// Border foreground override.
    pub border_fg: Option<Option<Color>>,
    /// Border background override.
    pub border_bg: Option<Option<Color>>,
}

impl StylePatch {
    /// Creates an empty patch; every field inherits.
    #[inline]
    pub const fn new() -> Self {
        Self {
            padding: None,
            border: None,
            halign: None,
            valign: None,
            fg: None,
            bg: None,
            border_fg: None,
            border_bg: None,
        }
    }

    /// Sets the interior padding. Accepts a single value, a
    /// (horizontal, vertical) pair, or a (l, t, r, b) 4-tuple.
    pub fn padding(mut self, padding: impl Into<Edges<usize>>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    /// Sets the border switches, with the same shorthand as [`padding`].
    ///
    /// [`padding`]: StylePatch::padding
    pub fn border(mut self, border: impl Into<Edges<bool>>) -> Self {
        self.border = Some(border.into());
        self
    }

    /// Sets the horizontal alignment.
    pub fn halign(mut self, halign: HAlign) -> Self {
        self.halign = Some(halign);
        self
    }

    /// Sets the vertical alignment.
    pub fn valign(mut self, valign: VAlign) -> Self {
        self.valign = Some(valign);
        self
    }

    /// Sets the content foreground color.
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(Some(color));
        self
    }

    /// Sets the content background color.
    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(Some(color));
        self
    }

    /// Sets the border foreground color.
    pub fn border_fg(mut self, color: Color) -> Self {
        self.border_fg = Some(Some(color));
        self
    }

    /// Sets the border background color.
    pub fn border_bg(mut self, color: Color) -> Self {
        self.border_bg = Some(Some(color));
        self
    }

    /// Explicitly marks the content foreground as uncolored, blocking
    /// inheritance from the row or table.
    pub fn no_fg(mut self) -> Self {
        self.fg = Some(None);
        self
    }

    /// Explicitly marks the content background as uncolored.
    pub fn no_bg(mut self) -> Self {
        self.bg = Some(None);
        self
    }

    /// Resolves this patch against a row patch and the table's resolved
    /// style, field by field: the nearest explicit value wins.
    pub fn cascade(&self, row: &StylePatch, table: &Style) -> Style {
        Style {
            padding: self.padding.or(row.padding).unwrap_or(table.padding),
            border: self.border.or(row.border).unwrap_or(table.border),
            halign: self.halign.or(row.halign).unwrap_or(table.halign),
            valign: self.valign.or(row.valign).unwrap_or(table.valign),
            fg: self.fg.or(row.fg).unwrap_or(table.fg),
            bg: self.bg.or(row.bg).unwrap_or(table.bg),
            border_fg: self
                .border_fg
                .or(row.border_fg)
                .unwrap_or(table.border_fg),
            border_bg: self
                .border_bg
                .or(row.border_bg)
                .unwrap_or(table.border_bg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_shorthand() {
        let one: Edges<usize> = 5.into();
        assert_eq!(one, Edges::new(5, 5, 5, 5));

        let two: Edges<usize> = (3, 0).into();
        assert_eq!(two, Edges::new(3, 0, 3, 0));

        let four: Edges<bool> = (true, false, true, true).into();
        assert_eq!(four, Edges::new(true, false, true, true));
    }

    #[test]
    fn test_cascade_prefers_nearest() {
        // No explicit halign on the cell, row says right, table says left:
        // the row wins.
        let cell = StylePatch::new();
        let row = StylePatch::new().halign(HAlign::Right);
        let table = Style::table_default();
        assert_eq!(table.halign, HAlign::Left);

        let resolved = cell.cascade(&row, &table);
        assert_eq!(resolved.halign, HAlign::Right);

        // An explicit cell value beats both.
        let cell = StylePatch::new().halign(HAlign::Middle);
        let resolved = cell.cascade(&row, &table);
        assert_eq!(resolved.halign, HAlign::Middle);
    }

    #[test]
    fn test_cascade_fills_table_defaults() {
        let resolved = StylePatch::new().cascade(&StylePatch::new(), &Style::table_default());
        assert_eq!(resolved.padding, Edges::symmetric(3, 0));
        assert_eq!(resolved.border, Edges::splat(true));
        assert_eq!(resolved.valign, VAlign::Top);
        assert_eq!(resolved.fg, None);
    }

    #[test]
    fn test_cascade_explicit_uncolored_blocks_inheritance() {
        let row = StylePatch::new().fg(Color::RED);
        let table = Style::table_default();

        let inheriting = StylePatch::new().cascade(&row, &table);
        assert_eq!(inheriting.fg, Some(Color::RED));

        let blocked = StylePatch::new().no_fg().cascade(&row, &table);
        assert_eq!(blocked.fg, None);
    }

    #[test]
    fn test_patch_builder_padding_arities() {
        let p = StylePatch::new().padding(1);
        assert_eq!(p.padding, Some(Edges::splat(1)));

        let p = StylePatch::new().padding((2, 0));
        assert_eq!(p.padding, Some(Edges::symmetric(2, 0)));

        let p = StylePatch::new().padding((1, 2, 3, 4));
        assert_eq!(p.padding, Some(Edges::new(1, 2, 3, 4)));
    }
}

//! Border connectivity flags and box-drawing glyph sets.
//!
//! Each character cell of a rendered table accumulates a [`Connectivity`]
//! mask recording which directions a border line must extend from that
//! point. Neighboring cells OR their contributions into shared edges, so
//! a junction "discovers" its shape from the cells around it. A final
//! pass maps every nonzero mask to a glyph from the active
//! [`BorderGlyphs`] set.

use bitflags::bitflags;

bitflags! {
    /// Directions a border line extends from a character cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Connectivity: u8 {
        /// A line continues to the left.
        const LEFT = 1 << 0;
        /// A line continues upward.
        const UP = 1 << 1;
        /// A line continues to the right.
        const RIGHT = 1 << 2;
        /// A line continues downward.
        const DOWN = 1 << 3;
    }
}

/// A complete set of border-drawing glyphs plus line thickness.
///
/// The eleven glyphs cover every junction shape a rectangular table can
/// produce. `w` and `h` are the thickness of vertical and horizontal
/// border lines in character cells.
///
/// Sets are plain values; swapping one changes only how borders look,
/// never where they go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    /// Width of vertical border lines.
    pub w: usize,
    /// Height of horizontal border lines.
    pub h: usize,
    /// Vertical line `│`.
    pub vertical: char,
    /// Horizontal line `─`.
    pub horizontal: char,
    /// Top-left corner `┌`.
    pub top_left: char,
    /// Top-right corner `┐`.
    pub top_right: char,
    /// Bottom-left corner `└`.
    pub bottom_left: char,
    /// Bottom-right corner `┘`.
    pub bottom_right: char,
    /// Downward tee `┬`.
    pub tee_down: char,
    /// Upward tee `┴`.
    pub tee_up: char,
    /// Rightward tee `├`.
    pub tee_right: char,
    /// Leftward tee `┤`.
    pub tee_left: char,
    /// Four-way junction `┼`.
    pub cross: char,
}

impl BorderGlyphs {
    /// ASCII-only borders using `|`, `-`, and `+`.
    pub const ASCII: Self = Self {
        w: 1,
        h: 1,
        vertical: '|',
        horizontal: '-',
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        tee_down: '+',
        tee_up: '+',
        tee_right: '+',
        tee_left: '+',
        cross: '+',
    };

    /// Unicode box-drawing borders (the default).
    pub const BOX: Self = Self {
        w: 1,
        h: 1,
        vertical: '│',
        horizontal: '─',
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        tee_down: '┬',
        tee_up: '┴',
        tee_right: '├',
        tee_left: '┤',
        cross: '┼',
    };

    /// Box-drawing borders with rounded corners.
    pub const ROUNDED: Self = Self {
        w: 1,
        h: 1,
        vertical: '│',
        horizontal: '─',
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        tee_down: '┬',
        tee_up: '┴',
        tee_right: '├',
        tee_left: '┤',
        cross: '┼',
    };

    /// Double-line box-drawing borders.
    pub const DOUBLE: Self = Self {
        w: 1,
        h: 1,
        vertical: '║',
        horizontal: '═',
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        tee_down: '╦',
        tee_up: '╩',
        tee_right: '╠',
        tee_left: '╣',
        cross: '╬',
    };

    /// Heavy-line box-drawing borders.
    pub const HEAVY: Self = Self {
        w: 1,
        h: 1,
        vertical: '┃',
        horizontal: '━',
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
        tee_down: '┳',
        tee_up: '┻',
        tee_right: '┣',
        tee_left: '┫',
        cross: '╋',
    };

    /// Maps a connectivity mask to the glyph drawn at that cell.
    ///
    /// Checked in fixed precedence order, first match wins: the 4-way
    /// junction, the four tees, straight lines, the four corners, then a
    /// catch-all on any horizontal or vertical flag. An empty mask is
    /// `None`: the cell keeps its background or content character.
    pub fn resolve(&self, mask: Connectivity) -> Option<char> {
        use Connectivity as C;

        let glyph = if mask == C::all() {
            self.cross
        } else if mask == C::LEFT | C::RIGHT | C::DOWN {
            self.tee_down
        } else if mask == C::RIGHT | C::UP | C::DOWN {
            self.tee_right
        } else if mask == C::LEFT | C::UP | C::DOWN {
            self.tee_left
        } else if mask == C::LEFT | C::RIGHT | C::UP {
            self.tee_up
        } else if mask == C::UP | C::DOWN {
            self.vertical
        } else if mask == C::LEFT | C::RIGHT {
            self.horizontal
        } else if mask == C::RIGHT | C::DOWN {
            self.top_left
        } else if mask == C::LEFT | C::DOWN {
            self.top_right
        } else if mask == C::RIGHT | C::UP {
            self.bottom_left
        } else if mask == C::LEFT | C::UP {
            self.bottom_right
        } else if mask.intersects(C::LEFT | C::RIGHT) {
            self.horizontal
        } else if mask.intersects(C::UP | C::DOWN) {
            self.vertical
        } else {
            return None;
        };
        Some(glyph)
    }
}

impl Default for BorderGlyphs {
    fn default() -> Self {
        Self::BOX
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Connectivity as C;

    #[test]
    fn test_resolve_junctions() {
        let g = BorderGlyphs::BOX;
        assert_eq!(g.resolve(C::all()), Some('┼'));
        assert_eq!(g.resolve(C::LEFT | C::RIGHT | C::DOWN), Some('┬'));
        assert_eq!(g.resolve(C::LEFT | C::RIGHT | C::UP), Some('┴'));
        assert_eq!(g.resolve(C::RIGHT | C::UP | C::DOWN), Some('├'));
        assert_eq!(g.resolve(C::LEFT | C::UP | C::DOWN), Some('┤'));
    }

    #[test]
    fn test_resolve_lines_and_corners() {
        let g = BorderGlyphs::BOX;
        assert_eq!(g.resolve(C::UP | C::DOWN), Some('│'));
        assert_eq!(g.resolve(C::LEFT | C::RIGHT), Some('─'));
        assert_eq!(g.resolve(C::RIGHT | C::DOWN), Some('┌'));
        assert_eq!(g.resolve(C::LEFT | C::DOWN), Some('┐'));
        assert_eq!(g.resolve(C::RIGHT | C::UP), Some('└'));
        assert_eq!(g.resolve(C::LEFT | C::UP), Some('┘'));
    }

    #[test]
    fn test_resolve_single_flags_fall_back_to_lines() {
        let g = BorderGlyphs::BOX;
        assert_eq!(g.resolve(C::LEFT), Some('─'));
        assert_eq!(g.resolve(C::RIGHT), Some('─'));
        assert_eq!(g.resolve(C::UP), Some('│'));
        assert_eq!(g.resolve(C::DOWN), Some('│'));
    }

    #[test]
    fn test_resolve_empty_mask() {
        assert_eq!(BorderGlyphs::BOX.resolve(C::empty()), None);
    }

    #[test]
    fn test_resolve_is_preset_independent() {
        assert_eq!(BorderGlyphs::ASCII.resolve(C::all()), Some('+'));
        assert_eq!(
            BorderGlyphs::ASCII.resolve(C::LEFT | C::RIGHT),
            Some('-')
        );
        assert_eq!(BorderGlyphs::DOUBLE.resolve(C::all()), Some('╬'));
        assert_eq!(
            BorderGlyphs::ROUNDED.resolve(C::RIGHT | C::DOWN),
            Some('╭')
        );
    }
}

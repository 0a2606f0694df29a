//! 24-bit terminal colors and ANSI escape utilities.
//!
//! Colors decorate rendered tables with SGR escape sequences; the
//! companion [`strip_ansi`] / [`visible_width`] functions let the layout
//! engine measure decorated text by its on-screen width rather than its
//! byte length.
//!
//! # Examples
//!
//! ```
//! use trellis_core::color::{strip_ansi, visible_width, Color, RESET};
//!
//! let red = Color::from_hex(0xFF0000);
//! let decorated = format!("{}error{}", red.to_ansi_fg(), RESET);
//!
//! assert_eq!(strip_ansi(&decorated), "error");
//! assert_eq!(visible_width(&decorated), 5);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use unicode_width::UnicodeWidthStr;

/// The SGR reset sequence, returning the terminal to default attributes.
pub const RESET: &str = "\x1b[0m";

static SGR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[\d+(?:;\d+)*m").expect("valid SGR pattern"));

/// A 24-bit RGB color.
///
/// # Examples
///
/// ```
/// use trellis_core::color::Color;
///
/// let orange = Color::rgb(255, 128, 0);
/// assert_eq!(orange, Color::from_hex(0xFF8000));
/// assert_eq!(orange.to_ansi_fg(), "\x1b[38;2;255;128;0m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Pure black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Pure red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Pure green.
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Pure blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Yellow.
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    /// Cyan.
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    /// Magenta.
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);

    /// Creates a color from 8-bit channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a packed `0xRRGGBB` value.
    #[inline]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Returns the foreground escape sequence for this color.
    ///
    /// Uses 24-bit true color format: `\x1b[38;2;R;G;Bm`.
    pub fn to_ansi_fg(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// Returns the background escape sequence for this color.
    ///
    /// Uses 24-bit true color format: `\x1b[48;2;R;G;Bm`.
    pub fn to_ansi_bg(&self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Color {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

/// Removes all SGR escape sequences from a string.
pub fn strip_ansi(s: &str) -> std::borrow::Cow<'_, str> {
    SGR_PATTERN.replace_all(s, "")
}

/// Splits one line into its visible text and the SGR escapes it carries.
///
/// Each escape is tagged with the visible column where it sat; adjacent
/// escapes merge into one entry. The returned text contains no escapes,
/// so its [`width`](UnicodeWidthStr::width) equals the line's visible
/// width.
pub fn extract_escapes(line: &str) -> (String, Vec<(usize, String)>) {
    let mut plain = String::new();
    let mut escapes: Vec<(usize, String)> = Vec::new();
    let mut last = 0;
    for m in SGR_PATTERN.find_iter(line) {
        plain.push_str(&line[last..m.start()]);
        let col = plain.width();
        match escapes.last_mut() {
            Some((c, e)) if *c == col => e.push_str(m.as_str()),
            _ => escapes.push((col, m.as_str().to_string())),
        }
        last = m.end();
    }
    plain.push_str(&line[last..]);
    (plain, escapes)
}

/// Measures the visible terminal width of a string.
///
/// SGR escape sequences contribute nothing; everything else is measured in
/// terminal columns, so wide (CJK) characters count as two.
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let c = Color::from_hex(0xFF8000);
        assert_eq!(c, Color::rgb(255, 128, 0));
    }

    #[test]
    fn test_ansi_escapes() {
        assert_eq!(Color::RED.to_ansi_fg(), "\x1b[38;2;255;0;0m");
        assert_eq!(Color::BLUE.to_ansi_bg(), "\x1b[48;2;0;0;255m");
    }

    #[test]
    fn test_strip_ansi() {
        let s = format!("{}hi{}", Color::GREEN.to_ansi_fg(), RESET);
        assert_eq!(strip_ansi(&s), "hi");
        assert_eq!(strip_ansi("plain"), "plain");
    }

    #[test]
    fn test_visible_width() {
        assert_eq!(visible_width("hello"), 5);
        assert_eq!(visible_width(""), 0);
        let s = format!("{}ab{}", Color::RED.to_ansi_bg(), RESET);
        assert_eq!(visible_width(&s), 2);
    }

    #[test]
    fn test_extract_escapes() {
        let s = format!("{}ok{}", Color::RED.to_ansi_fg(), RESET);
        let (plain, escapes) = extract_escapes(&s);
        assert_eq!(plain, "ok");
        assert_eq!(
            escapes,
            vec![
                (0, "\x1b[38;2;255;0;0m".to_string()),
                (2, RESET.to_string()),
            ]
        );
    }

    #[test]
    fn test_extract_escapes_merges_adjacent() {
        let s = format!("{}{}x", Color::RED.to_ansi_fg(), Color::BLUE.to_ansi_bg());
        let (plain, escapes) = extract_escapes(&s);
        assert_eq!(plain, "x");
        assert_eq!(
            escapes,
            vec![(0, "\x1b[38;2;255;0;0m\x1b[48;2;0;0;255m".to_string())]
        );
    }

    #[test]
    fn test_extract_escapes_plain_passthrough() {
        let (plain, escapes) = extract_escapes("plain");
        assert_eq!(plain, "plain");
        assert!(escapes.is_empty());
    }

    #[test]
    fn test_visible_width_wide_chars() {
        assert_eq!(visible_width("日本"), 4);
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::from_hex(0x00FF7F).to_string(), "#00ff7f");
    }
}

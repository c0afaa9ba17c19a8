//! Text measurement and color conversion helpers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// Grays map onto the 24-step grayscale ramp, everything else onto the
/// 6x6x6 color cube.
///
/// # Example
///
/// ```rust
/// use betboard::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// Display width of a string in terminal columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Truncates a string to fit within a maximum display width, adding `…` if needed.
///
/// # Example
///
/// ```rust
/// use betboard::truncate_to_width;
///
/// assert_eq!(truncate_to_width("TeamA", 10), "TeamA");
/// assert_eq!(truncate_to_width("Premier League", 8), "Premier…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    // Reserve 1 column for the ellipsis
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

/// Pads `s` with spaces on the right up to `width` columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

/// Pads `s` with spaces on the left up to `width` columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", " ".repeat(fill), s)
}

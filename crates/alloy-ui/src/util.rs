//! Utility functions for terminal text layout and color conversion.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::variant::TextAlignment;

/// Points covered by one terminal column when mapping layout metrics.
pub const POINTS_PER_COLUMN: f32 = 8.0;

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// # Example
///
/// ```rust
/// use alloy_ui::rgb_to_ansi256;
///
/// // Pure red maps to ANSI 196
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
///
/// // Pure green maps to ANSI 46
/// assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
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

/// Parses `#RRGGBB` or `#RRGGBBAA` into RGBA bytes.
///
/// Missing alpha is treated as fully opaque.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if !digits.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();

    match digits.len() {
        6 => Some((byte(0)?, byte(2)?, byte(4)?, 255)),
        8 => Some((byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

/// Converts a length in points to whole terminal columns, rounding up.
pub fn points_to_columns(points: f32) -> usize {
    if points <= 0.0 {
        0
    } else {
        (points / POINTS_PER_COLUMN).ceil() as usize
    }
}

/// Truncates a string to fit within a maximum display width, adding ellipsis if needed.
///
/// Uses Unicode width calculations for proper handling of CJK and other wide characters.
/// If the string fits within `max_width`, it is returned unchanged. If truncation is
/// needed, characters are removed from the end and replaced with `…` (ellipsis).
///
/// # Example
///
/// ```rust
/// use alloy_ui::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Hello", 10), "Hello");
/// assert_eq!(truncate_to_width("Hello World", 6), "Hello…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
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

/// Pads a string with spaces to `width` display columns.
///
/// Strings already at or beyond `width` are returned unchanged. Centered text
/// puts the odd column on the trailing side.
///
/// # Example
///
/// ```rust
/// use alloy_ui::{pad_to_width, TextAlignment};
///
/// assert_eq!(pad_to_width("ok", 6, TextAlignment::Center), "  ok  ");
/// assert_eq!(pad_to_width("ok", 4, TextAlignment::Trailing), "  ok");
/// ```
pub fn pad_to_width(s: &str, width: usize, alignment: TextAlignment) -> String {
    let gap = width.saturating_sub(s.width());
    if gap == 0 {
        return s.to_string();
    }

    let (before, after) = match alignment {
        TextAlignment::Leading => (0, gap),
        TextAlignment::Center => (gap / 2, gap - gap / 2),
        TextAlignment::Trailing => (gap, 0),
    };
    format!("{}{}{}", " ".repeat(before), s, " ".repeat(after))
}

/// Display width of a string in terminal columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

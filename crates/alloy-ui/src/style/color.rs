//! RGBA colors.

use serde::{Serialize, Serializer};
use std::fmt;

/// An RGBA color with channels in the `0.0..=1.0` range.
///
/// Colors serialize as hex strings: `#RRGGBB` when opaque and `#RRGGBBAA`
/// otherwise, so rendering layers that consume JSON get a compact, familiar
/// representation.
///
/// # Example
///
/// ```rust
/// use alloy_ui::style::Color;
///
/// let blue = Color::from_rgb(0.0, 0.47, 0.84);
/// assert_eq!(blue.to_hex(), "#0078D6");
/// assert!(Color::CLEAR.is_clear());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::from_rgb(0.0, 0.0, 0.0);
    pub const CLEAR: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.0);

    /// Creates an opaque color.
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a color with an explicit alpha channel.
    pub const fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Returns true if the color is fully transparent.
    pub fn is_clear(&self) -> bool {
        self.a <= 0.0
    }

    /// Converts the color channels to 8-bit values, ignoring alpha.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (channel(self.r), channel(self.g), channel(self.b))
    }

    /// Formats the color as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        if self.a >= 1.0 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, channel(self.a))
        }
    }
}

fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex_opaque() {
        assert_eq!(Color::WHITE.to_hex(), "#FFFFFF");
        assert_eq!(Color::from_rgb(0.0, 0.47, 0.84).to_hex(), "#0078D6");
    }

    #[test]
    fn test_to_hex_clear_includes_alpha() {
        assert_eq!(Color::CLEAR.to_hex(), "#00000000");
    }

    #[test]
    fn test_to_rgb8_clamps() {
        let out_of_range = Color::from_rgb(-0.5, 1.5, 0.5);
        assert_eq!(out_of_range.to_rgb8(), (0, 255, 128));
    }

    #[test]
    fn test_serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::BLACK).unwrap();
        assert_eq!(json, "\"#000000\"");
    }
}

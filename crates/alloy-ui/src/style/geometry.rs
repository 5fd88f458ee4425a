//! Spacing and stroke primitives.

use serde::Serialize;

use super::Color;

/// Insets applied around content, in points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EdgeInsets {
    pub top: f32,
    pub leading: f32,
    pub bottom: f32,
    pub trailing: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets::uniform(0.0);

    pub const fn new(top: f32, leading: f32, bottom: f32, trailing: f32) -> Self {
        Self {
            top,
            leading,
            bottom,
            trailing,
        }
    }

    /// Same inset on every edge.
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Vertical insets, horizontal insets.
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn horizontal(&self) -> f32 {
        self.leading + self.trailing
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// A stroke drawn around a component's bounds.
///
/// A zero width means no border is drawn, whatever the color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    pub const NONE: Border = Border {
        width: 0.0,
        color: Color::CLEAR,
    };

    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }

    pub fn is_visible(&self) -> bool {
        self.width > 0.0 && !self.color.is_clear()
    }
}

impl Default for Border {
    fn default() -> Self {
        Self::NONE
    }
}

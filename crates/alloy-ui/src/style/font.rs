//! Font descriptors.

use serde::Serialize;

use super::Color;

/// System font weights, lightest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Regular,
    Medium,
    Semibold,
    Bold,
}

/// A system font at a given point size and weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FontDescriptor {
    pub size: f32,
    pub weight: FontWeight,
}

impl FontDescriptor {
    pub const fn system(size: f32, weight: FontWeight) -> Self {
        Self { size, weight }
    }

    /// Whether the weight reads as emphasized (semibold or heavier).
    pub fn is_emphasized(&self) -> bool {
        self.weight >= FontWeight::Semibold
    }
}

/// Font and color for a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextAttributes {
    pub font: FontDescriptor,
    pub color: Color,
}

impl TextAttributes {
    pub const fn new(font: FontDescriptor, color: Color) -> Self {
        Self { font, color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emphasis_threshold() {
        assert!(!FontDescriptor::system(16.0, FontWeight::Regular).is_emphasized());
        assert!(!FontDescriptor::system(18.0, FontWeight::Medium).is_emphasized());
        assert!(FontDescriptor::system(22.0, FontWeight::Semibold).is_emphasized());
        assert!(FontDescriptor::system(28.0, FontWeight::Bold).is_emphasized());
    }
}

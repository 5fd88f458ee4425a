//! Design tokens shared by every resolver.
//!
//! Resolvers never spell out raw numbers; they pick from these scales so a
//! palette or typography change lands in one place.

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use crate::style::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const CLEAR: Color = Color::CLEAR;

    // Brand
    pub const AUTODESK_BLUE: Color = Color::from_rgb(0.0, 0.47, 0.84); // #0078D6
    pub const AUTODESK_BLACK: Color = Color::from_rgb(0.11, 0.11, 0.11); // #1C1C1C

    // Grays, darkest first
    pub const GRAY: Color = Color::from_rgb(0.45, 0.45, 0.45);
    pub const LIGHT_GRAY: Color = Color::from_rgb(0.67, 0.67, 0.67);
    pub const BORDER_GRAY: Color = Color::from_rgb(0.8, 0.8, 0.8);
    pub const DISABLED_GRAY: Color = Color::from_rgb(0.9, 0.9, 0.9);
    pub const SURFACE_GRAY: Color = Color::from_rgb(0.95, 0.95, 0.95);
    pub const FILL_GRAY: Color = Color::from_rgb(0.97, 0.97, 0.97);

    // Semantic
    pub const ERROR_RED: Color = Color::from_rgb(0.85, 0.16, 0.16);
    pub const SUCCESS_GREEN: Color = Color::from_rgb(0.18, 0.66, 0.29);
}

// ============================================================================
// Opacity
// ============================================================================

pub mod opacity {
    pub const OPAQUE: f32 = 1.0;
    pub const DISABLED: f32 = 0.5;
    pub const HEADER_SHADOW: f32 = 0.1;
}

// ============================================================================
// Spacing
// ============================================================================

pub mod spacing {
    /// Default padding around container content (navigation header).
    pub const STANDARD: f32 = 16.0;
}

// ============================================================================
// Border
// ============================================================================

pub mod border {
    pub const NONE: f32 = 0.0;
    pub const THIN: f32 = 1.0;
}

// ============================================================================
// Corner Radius
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const FIELD: f32 = 6.0;
    pub const CONTROL: f32 = 8.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    use crate::style::{FontDescriptor, FontWeight};

    pub const TITLE: FontDescriptor = FontDescriptor::system(28.0, FontWeight::Bold);
    pub const HEADLINE: FontDescriptor = FontDescriptor::system(22.0, FontWeight::Semibold);
    pub const SUBHEADLINE: FontDescriptor = FontDescriptor::system(18.0, FontWeight::Medium);
    pub const BODY: FontDescriptor = FontDescriptor::system(16.0, FontWeight::Regular);
    pub const CAPTION: FontDescriptor = FontDescriptor::system(14.0, FontWeight::Regular);
    pub const FOOTNOTE: FontDescriptor = FontDescriptor::system(12.0, FontWeight::Regular);

    /// Navigation header title.
    pub const NAV_TITLE: FontDescriptor = FontDescriptor::system(20.0, FontWeight::Semibold);
    /// Label shown above a text field.
    pub const FIELD_LABEL: FontDescriptor = FontDescriptor::system(14.0, FontWeight::Medium);
    /// Validation message shown below a text field.
    pub const FIELD_MESSAGE: FontDescriptor = FontDescriptor::system(12.0, FontWeight::Regular);
}

//! Button resolution.

use crate::style::{Color, EdgeInsets};
use crate::tokens::{opacity, palette, radius};
use crate::variant::{ButtonSize, ButtonStyle};

use super::ResolvedAppearance;

pub const DISABLED_BACKGROUND: Color = palette::DISABLED_GRAY;
pub const DISABLED_TEXT: Color = palette::LIGHT_GRAY;

pub fn background(style: ButtonStyle) -> Color {
    match style {
        ButtonStyle::Primary => palette::AUTODESK_BLUE,
        ButtonStyle::Secondary => palette::SURFACE_GRAY,
        ButtonStyle::Tertiary => palette::CLEAR,
        ButtonStyle::Danger => palette::ERROR_RED,
    }
}

pub fn text_color(style: ButtonStyle) -> Color {
    match style {
        ButtonStyle::Primary => palette::WHITE,
        ButtonStyle::Secondary => palette::AUTODESK_BLACK,
        ButtonStyle::Tertiary => palette::AUTODESK_BLUE,
        ButtonStyle::Danger => palette::WHITE,
    }
}

pub fn padding(size: ButtonSize) -> EdgeInsets {
    match size {
        ButtonSize::Small => EdgeInsets::symmetric(6.0, 12.0),
        ButtonSize::Medium => EdgeInsets::symmetric(10.0, 20.0),
        ButtonSize::Large => EdgeInsets::symmetric(14.0, 28.0),
    }
}

pub fn min_width(size: ButtonSize) -> f32 {
    match size {
        ButtonSize::Small => 60.0,
        ButtonSize::Medium => 100.0,
        ButtonSize::Large => 140.0,
    }
}

pub fn min_height(size: ButtonSize) -> f32 {
    match size {
        ButtonSize::Small => 28.0,
        ButtonSize::Medium => 40.0,
        ButtonSize::Large => 52.0,
    }
}

/// Resolves a button.
///
/// A disabled button always uses the disabled fill and text colors, whatever
/// its style, and is drawn at half opacity.
pub fn resolve(style: ButtonStyle, size: ButtonSize, enabled: bool) -> ResolvedAppearance {
    let (background, foreground, alpha) = if enabled {
        (background(style), text_color(style), opacity::OPAQUE)
    } else {
        (DISABLED_BACKGROUND, DISABLED_TEXT, opacity::DISABLED)
    };

    ResolvedAppearance {
        background,
        foreground,
        corner_radius: radius::CONTROL,
        padding: padding(size),
        min_width: Some(min_width(size)),
        min_height: Some(min_height(size)),
        opacity: alpha,
        ..ResolvedAppearance::neutral()
    }
}

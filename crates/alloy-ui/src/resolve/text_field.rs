//! Text field resolution.
//!
//! Override precedence when a field is both disabled and in error: the fill
//! comes from the disabled state and the border from the error state, so the
//! error stays visible on a read-only field.

use crate::style::{Border, Color, EdgeInsets, TextAttributes};
use crate::tokens::{border, palette, radius, typography};
use crate::variant::TextFieldStyle;

use super::{ComponentState, ResolvedAppearance};

pub const BORDER_COLOR: Color = palette::BORDER_GRAY;
pub const DISABLED_BACKGROUND: Color = palette::SURFACE_GRAY;
pub const DISABLED_BORDER: Color = palette::DISABLED_GRAY;
pub const ERROR_BORDER: Color = palette::ERROR_RED;

pub const LABEL: TextAttributes =
    TextAttributes::new(typography::FIELD_LABEL, palette::AUTODESK_BLACK);
pub const MESSAGE: TextAttributes = TextAttributes::new(typography::FIELD_MESSAGE, ERROR_BORDER);

pub fn padding(style: TextFieldStyle) -> EdgeInsets {
    match style {
        TextFieldStyle::Standard => EdgeInsets::symmetric(10.0, 12.0),
        TextFieldStyle::Filled => EdgeInsets::symmetric(12.0, 14.0),
        TextFieldStyle::Minimal => EdgeInsets::symmetric(8.0, 4.0),
    }
}

pub fn background(style: TextFieldStyle) -> Color {
    match style {
        TextFieldStyle::Standard => palette::WHITE,
        TextFieldStyle::Filled => palette::FILL_GRAY,
        TextFieldStyle::Minimal => palette::CLEAR,
    }
}

pub fn border_width(style: TextFieldStyle) -> f32 {
    match style {
        TextFieldStyle::Standard => border::THIN,
        TextFieldStyle::Filled => border::NONE,
        TextFieldStyle::Minimal => border::THIN,
    }
}

pub fn corner_radius(style: TextFieldStyle) -> f32 {
    match style {
        TextFieldStyle::Standard => radius::FIELD,
        TextFieldStyle::Filled => radius::CONTROL,
        TextFieldStyle::Minimal => radius::NONE,
    }
}

/// Resolves a text field from its style and state.
pub fn resolve(style: TextFieldStyle, state: &ComponentState) -> ResolvedAppearance {
    let fill = if state.enabled {
        background(style)
    } else {
        DISABLED_BACKGROUND
    };

    let stroke = match (state.active_error(), state.enabled) {
        (Some(_), _) => ERROR_BORDER,
        (None, true) => BORDER_COLOR,
        (None, false) => DISABLED_BORDER,
    };

    ResolvedAppearance {
        background: fill,
        foreground: palette::AUTODESK_BLACK,
        corner_radius: corner_radius(style),
        border: Border::new(border_width(style), stroke),
        padding: padding(style),
        label: Some(LABEL),
        message: state.active_error().map(|_| MESSAGE),
        ..ResolvedAppearance::neutral()
    }
}

//! Navigation container resolution.

use crate::style::{Color, EdgeInsets, TextAttributes};
use crate::tokens::{opacity, palette, spacing, typography};
use crate::variant::NavigationStyle;

use super::{HeaderBar, ResolvedAppearance};

pub const ACCENT: Color = palette::AUTODESK_BLUE;

pub const HEADER: HeaderBar = HeaderBar {
    title: TextAttributes::new(typography::NAV_TITLE, palette::AUTODESK_BLACK),
    background: palette::WHITE,
    padding: EdgeInsets::uniform(spacing::STANDARD),
    shadow_opacity: opacity::HEADER_SHADOW,
};

pub fn accent(_style: NavigationStyle) -> Color {
    ACCENT
}

pub fn bar_tint(style: NavigationStyle) -> Color {
    match style {
        NavigationStyle::Autodesk => palette::WHITE,
        NavigationStyle::Standard => palette::FILL_GRAY,
        NavigationStyle::Compact => palette::WHITE,
    }
}

/// Whether the style replaces the platform bar with the branded header.
pub fn is_branded(style: NavigationStyle) -> bool {
    matches!(style, NavigationStyle::Autodesk)
}

/// Resolves a navigation container.
///
/// The header bar is present only for the branded style with a non-empty
/// title; an empty title never produces an empty bar.
pub fn resolve(style: NavigationStyle, title: &str) -> ResolvedAppearance {
    let header = (is_branded(style) && !title.is_empty()).then_some(HEADER);

    ResolvedAppearance {
        background: palette::WHITE,
        accent: Some(accent(style)),
        bar_tint: Some(bar_tint(style)),
        system_bar_hidden: is_branded(style),
        header,
        ..ResolvedAppearance::neutral()
    }
}

//! Text view resolution.

use crate::style::{Color, FontDescriptor};
use crate::tokens::{palette, typography};
use crate::variant::{ColorToken, TextStyle};

use super::ResolvedAppearance;

pub fn font(style: TextStyle) -> FontDescriptor {
    match style {
        TextStyle::Title => typography::TITLE,
        TextStyle::Headline => typography::HEADLINE,
        TextStyle::Subheadline => typography::SUBHEADLINE,
        TextStyle::Body => typography::BODY,
        TextStyle::Caption => typography::CAPTION,
        TextStyle::Footnote => typography::FOOTNOTE,
    }
}

pub fn color(token: ColorToken) -> Color {
    match token {
        ColorToken::Primary => palette::AUTODESK_BLACK,
        ColorToken::Secondary => palette::GRAY,
        ColorToken::Tertiary => palette::LIGHT_GRAY,
        ColorToken::Accent => palette::AUTODESK_BLUE,
        ColorToken::Error => palette::ERROR_RED,
        ColorToken::Success => palette::SUCCESS_GREEN,
    }
}

pub fn resolve(style: TextStyle, token: ColorToken) -> ResolvedAppearance {
    ResolvedAppearance {
        foreground: color(token),
        font: Some(font(style)),
        ..ResolvedAppearance::neutral()
    }
}

//! Style resolution: semantic variants to concrete appearance.
//!
//! Every resolver here is a pure function. Given the same [`Variant`], size
//! and [`ComponentState`], [`resolve`] returns a bit-identical
//! [`ResolvedAppearance`]; nothing is cached, logged or read from the
//! environment.
//!
//! The per-kind modules expose their lookup tables as free functions so the
//! tables can be inspected and tested one attribute at a time:
//!
//! - [`button`]: style to colors, size to padding and minimum frame
//! - [`text_field`]: style to padding, fill, border and radius, with
//!   disabled and error overrides
//! - [`text_view`]: style to font, color token to RGB
//! - [`navigation`]: style to accent and bar tint, plus the header bar rule
//!
//! # Example
//!
//! ```rust
//! use alloy_ui::resolve::{resolve, ComponentState};
//! use alloy_ui::{ButtonSize, ButtonStyle, Variant};
//!
//! let appearance = resolve(
//!     Variant::Button(ButtonStyle::Primary),
//!     Some(ButtonSize::Medium),
//!     &ComponentState::new(),
//! );
//! assert_eq!(appearance.min_width, Some(100.0));
//! ```

pub mod button;
pub mod navigation;
pub mod text_field;
pub mod text_view;

use serde::Serialize;

use crate::style::{Border, Color, EdgeInsets, FontDescriptor, TextAttributes};
use crate::tokens::{opacity, palette};
use crate::variant::{ButtonSize, Variant};

/// Transient, per-instance state supplied by the caller.
///
/// For a navigation container, `text` carries the title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentState {
    pub enabled: bool,
    pub error_message: Option<String>,
    pub text: String,
}

impl ComponentState {
    /// Enabled, no error, empty text.
    pub fn new() -> Self {
        Self {
            enabled: true,
            error_message: None,
            text: String::new(),
        }
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_error_message(mut self, message: Option<impl Into<String>>) -> Self {
        self.error_message = message.map(Into::into);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// The error message, if one is set and non-empty.
    ///
    /// An empty message does not put a component into the error state.
    pub fn active_error(&self) -> Option<&str> {
        self.error_message
            .as_deref()
            .filter(|message| !message.is_empty())
    }
}

impl Default for ComponentState {
    fn default() -> Self {
        Self::new()
    }
}

/// The branded header bar drawn above navigation content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeaderBar {
    pub title: TextAttributes,
    pub background: Color,
    pub padding: EdgeInsets,
    pub shadow_opacity: f32,
}

/// Concrete attributes handed to the rendering layer.
///
/// Attributes that do not apply to a component kind keep their neutral value
/// (`None`, zero, or clear).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedAppearance {
    pub background: Color,
    pub foreground: Color,
    pub corner_radius: f32,
    pub border: Border,
    pub padding: EdgeInsets,
    pub min_width: Option<f32>,
    pub min_height: Option<f32>,
    pub font: Option<FontDescriptor>,
    pub opacity: f32,
    /// Text drawn above the component (text field label).
    pub label: Option<TextAttributes>,
    /// Text drawn below the component (text field error message).
    pub message: Option<TextAttributes>,
    pub accent: Option<Color>,
    pub bar_tint: Option<Color>,
    pub system_bar_hidden: bool,
    pub header: Option<HeaderBar>,
}

impl ResolvedAppearance {
    pub(crate) const fn neutral() -> Self {
        Self {
            background: palette::CLEAR,
            foreground: palette::AUTODESK_BLACK,
            corner_radius: 0.0,
            border: Border::NONE,
            padding: EdgeInsets::ZERO,
            min_width: None,
            min_height: None,
            font: None,
            opacity: opacity::OPAQUE,
            label: None,
            message: None,
            accent: None,
            bar_tint: None,
            system_bar_hidden: false,
            header: None,
        }
    }
}

/// Resolves any variant to its appearance.
///
/// `size` only affects buttons; a button without a size resolves as
/// [`ButtonSize::Medium`].
pub fn resolve(
    variant: Variant,
    size: Option<ButtonSize>,
    state: &ComponentState,
) -> ResolvedAppearance {
    match variant {
        Variant::Button(style) => button::resolve(style, size.unwrap_or_default(), state.enabled),
        Variant::TextField(style) => text_field::resolve(style, state),
        Variant::TextView { style, color } => text_view::resolve(style, color),
        Variant::NavigationContainer(style) => navigation::resolve(style, &state.text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::{ButtonStyle, NavigationStyle, TextFieldStyle};

    #[test]
    fn test_active_error_ignores_empty_message() {
        let state = ComponentState::new().with_error_message(Some(""));
        assert_eq!(state.active_error(), None);

        let state = ComponentState::new().with_error_message(Some("Required"));
        assert_eq!(state.active_error(), Some("Required"));

        let state = ComponentState::new().with_error_message(None::<String>);
        assert_eq!(state.active_error(), None);
    }

    #[test]
    fn test_missing_size_resolves_as_medium() {
        let state = ComponentState::new();
        let variant = Variant::Button(ButtonStyle::Secondary);
        assert_eq!(
            resolve(variant, None, &state),
            resolve(variant, Some(ButtonSize::Medium), &state)
        );
    }

    #[test]
    fn test_size_ignored_for_non_buttons() {
        let state = ComponentState::new().with_text("Home");
        let variant = Variant::NavigationContainer(NavigationStyle::Autodesk);
        assert_eq!(
            resolve(variant, Some(ButtonSize::Large), &state),
            resolve(variant, None, &state)
        );
    }

    #[test]
    fn test_dispatches_text_field_state() {
        let state = ComponentState::new().with_error_message(Some("Invalid email"));
        let appearance = resolve(Variant::TextField(TextFieldStyle::Standard), None, &state);
        assert_eq!(appearance.border.color, palette::ERROR_RED);
    }
}

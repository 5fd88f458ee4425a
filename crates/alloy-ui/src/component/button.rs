//! Button component.

use crate::resolve::{self, ComponentState, ResolvedAppearance};
use crate::variant::{ButtonSize, ButtonStyle, Variant};

use super::{Body, Content, View};

/// A tappable button with a text label.
///
/// Setters consume and return the button, so configurations are plain values
/// that can be cloned and varied without aliasing.
///
/// # Example
///
/// ```rust
/// use alloy_ui::{Button, ButtonSize, ButtonStyle, View};
///
/// let delete = Button::new("Delete")
///     .style(ButtonStyle::Danger)
///     .size(ButtonSize::Small);
/// let submit = Button::new("Submit").enabled(false);
///
/// assert!(!submit.is_enabled());
/// assert_eq!(delete.resolve().min_width, Some(60.0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Button {
    label: String,
    style: ButtonStyle,
    size: ButtonSize,
    state: ComponentState,
}

impl Button {
    /// Creates an enabled, primary, medium button.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: ButtonStyle::default(),
            size: ButtonSize::default(),
            state: ComponentState::new(),
        }
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.state.enabled = enabled;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_enabled(&self) -> bool {
        self.state.enabled
    }

    pub fn variant(&self) -> Variant {
        Variant::Button(self.style)
    }
}

impl View for Button {
    fn resolve(&self) -> ResolvedAppearance {
        resolve::resolve(self.variant(), Some(self.size), &self.state)
    }

    fn content(&self) -> Content<'_> {
        Content {
            variant: self.variant(),
            accessibility_label: &self.label,
            body: Body::Button {
                label: &self.label,
                enabled: self.state.enabled,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::button::{DISABLED_BACKGROUND, DISABLED_TEXT};

    #[test]
    fn test_setters_leave_original_untouched() {
        let base = Button::new("Save");
        let danger = base.clone().style(ButtonStyle::Danger);

        assert_eq!(base.variant(), Variant::Button(ButtonStyle::Primary));
        assert_eq!(danger.variant(), Variant::Button(ButtonStyle::Danger));
    }

    #[test]
    fn test_disabled_button_resolves_disabled_tokens() {
        let button = Button::new("Submit")
            .style(ButtonStyle::Secondary)
            .enabled(false);
        let appearance = button.resolve();
        assert_eq!(appearance.background, DISABLED_BACKGROUND);
        assert_eq!(appearance.foreground, DISABLED_TEXT);
    }

    #[test]
    fn test_content_carries_label_and_state() {
        let button = Button::new("More Info").enabled(false);
        let content = button.content();
        assert_eq!(content.accessibility_label, "More Info");
        assert_eq!(
            content.body,
            Body::Button {
                label: "More Info",
                enabled: false
            }
        );
    }
}

//! Text field component.

use crate::resolve::{self, ComponentState, ResolvedAppearance};
use crate::variant::{TextFieldStyle, Variant};

use super::{Body, Content, View};

/// A single-line text input with optional label and validation message.
///
/// The field owns a copy of its bound text; the host application updates it
/// through [`TextField::text`] and reads it back with [`TextField::value`].
///
/// # Example
///
/// ```rust
/// use alloy_ui::{TextField, TextFieldStyle, View};
///
/// let email = TextField::new("")
///     .placeholder("user@example.com")
///     .label("Email")
///     .style(TextFieldStyle::Filled)
///     .error_message(Some("Invalid email address"));
///
/// assert!(email.resolve().message.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct TextField {
    placeholder: String,
    label: String,
    style: TextFieldStyle,
    secure: bool,
    state: ComponentState,
}

impl TextField {
    /// Creates an enabled, standard field bound to `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            placeholder: String::new(),
            label: String::new(),
            style: TextFieldStyle::default(),
            secure: false,
            state: ComponentState::new().with_text(text),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.state.text = text.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the label shown above the field.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn style(mut self, style: TextFieldStyle) -> Self {
        self.style = style;
        self
    }

    /// Masks the entered text (password entry).
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.state.enabled = enabled;
        self
    }

    /// Sets or clears the validation message.
    pub fn error_message(mut self, message: Option<impl Into<String>>) -> Self {
        self.state.error_message = message.map(Into::into);
        self
    }

    pub fn value(&self) -> &str {
        &self.state.text
    }

    pub fn state(&self) -> &ComponentState {
        &self.state
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    pub fn variant(&self) -> Variant {
        Variant::TextField(self.style)
    }

    /// The label, or the placeholder when no label is set.
    pub fn accessibility_label(&self) -> &str {
        if self.label.is_empty() {
            &self.placeholder
        } else {
            &self.label
        }
    }
}

impl View for TextField {
    fn resolve(&self) -> ResolvedAppearance {
        resolve::resolve(self.variant(), None, &self.state)
    }

    fn content(&self) -> Content<'_> {
        Content {
            variant: self.variant(),
            accessibility_label: self.accessibility_label(),
            body: Body::TextField {
                text: &self.state.text,
                placeholder: &self.placeholder,
                label: &self.label,
                secure: self.secure,
                enabled: self.state.enabled,
                error_message: self.state.active_error(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::text_field::ERROR_BORDER;

    #[test]
    fn test_accessibility_label_falls_back_to_placeholder() {
        let field = TextField::new("").placeholder("Enter name");
        assert_eq!(field.accessibility_label(), "Enter name");
        assert_eq!(field.content().accessibility_label, "Enter name");

        let labelled = field.label("User Name");
        assert_eq!(labelled.accessibility_label(), "User Name");
    }

    #[test]
    fn test_error_message_sets_error_border() {
        let field = TextField::new("not-an-email").error_message(Some("Invalid email"));
        assert_eq!(field.resolve().border.color, ERROR_BORDER);
    }

    #[test]
    fn test_clearing_error_message() {
        let field = TextField::new("a@b.c")
            .error_message(Some("Invalid email"))
            .error_message(None::<String>);
        assert_eq!(field.state().error_message, None);
        assert_eq!(field.resolve().message, None);
    }

    #[test]
    fn test_empty_error_message_is_not_forwarded() {
        let field = TextField::new("x").error_message(Some(""));
        match field.content().body {
            Body::TextField { error_message, .. } => assert_eq!(error_message, None),
            other => panic!("Expected text field body, got {:?}", other),
        }
    }

    #[test]
    fn test_text_rebinding() {
        let field = TextField::new("old").secure(true).text("new");
        assert_eq!(field.value(), "new");
        assert!(field.is_secure());
    }
}

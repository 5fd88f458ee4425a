//! Text view component.

use crate::resolve::{self, ComponentState, ResolvedAppearance};
use crate::variant::{ColorToken, TextAlignment, TextStyle, Variant};

use super::{Body, Content, View};

/// Static text in one of the design-system type styles.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct TextView {
    text: String,
    style: TextStyle,
    color: ColorToken,
    alignment: TextAlignment,
}

impl TextView {
    /// Creates body text in the primary color, leading-aligned.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
            color: ColorToken::default(),
            alignment: TextAlignment::default(),
        }
    }

    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn color(mut self, color: ColorToken) -> Self {
        self.color = color;
        self
    }

    pub fn alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn variant(&self) -> Variant {
        Variant::TextView {
            style: self.style,
            color: self.color,
        }
    }
}

impl View for TextView {
    fn resolve(&self) -> ResolvedAppearance {
        resolve::resolve(self.variant(), None, &ComponentState::new())
    }

    fn content(&self) -> Content<'_> {
        Content {
            variant: self.variant(),
            accessibility_label: &self.text,
            body: Body::TextView {
                text: &self.text,
                alignment: self.alignment,
            },
        }
    }
}

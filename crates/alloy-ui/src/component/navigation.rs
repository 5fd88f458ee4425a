//! Navigation container component.

use tracing::trace;

use crate::resolve::{self, ComponentState, ResolvedAppearance};
use crate::variant::{NavigationStyle, Variant};

use super::{Body, Component, Content, RenderLayer, View};

/// A screen container with an optional branded header bar.
///
/// # Example
///
/// ```rust
/// use alloy_ui::{Button, NavigationContainer, NavigationStyle, TextView, View};
///
/// let screen = NavigationContainer::new()
///     .title("Dashboard")
///     .style(NavigationStyle::Autodesk)
///     .child(TextView::new("Welcome to Autodesk"))
///     .child(Button::new("Open Project"));
///
/// assert!(screen.resolve().header.is_some());
/// assert_eq!(screen.children().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct NavigationContainer {
    style: NavigationStyle,
    show_back_button: bool,
    state: ComponentState,
    children: Vec<Component>,
}

impl NavigationContainer {
    /// Creates an untitled, branded container with a back button.
    pub fn new() -> Self {
        Self {
            style: NavigationStyle::default(),
            show_back_button: true,
            state: ComponentState::new(),
            children: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.state.text = title.into();
        self
    }

    pub fn style(mut self, style: NavigationStyle) -> Self {
        self.style = style;
        self
    }

    pub fn show_back_button(mut self, show: bool) -> Self {
        self.show_back_button = show;
        self
    }

    /// Appends a component to the container body.
    pub fn child(mut self, child: impl Into<Component>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(&self) -> &[Component] {
        &self.children
    }

    pub fn title_text(&self) -> &str {
        &self.state.text
    }

    pub fn variant(&self) -> Variant {
        Variant::NavigationContainer(self.style)
    }
}

impl Default for NavigationContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl View for NavigationContainer {
    fn resolve(&self) -> ResolvedAppearance {
        resolve::resolve(self.variant(), None, &self.state)
    }

    fn content(&self) -> Content<'_> {
        Content {
            variant: self.variant(),
            accessibility_label: &self.state.text,
            body: Body::NavigationContainer {
                title: &self.state.text,
                show_back_button: self.show_back_button,
            },
        }
    }

    fn compose<L: RenderLayer>(&self, layer: &mut L) -> Result<L::Output, L::Error> {
        let children = self
            .children
            .iter()
            .map(|child| child.compose(layer))
            .collect::<Result<Vec<_>, _>>()?;

        let appearance = self.resolve();
        let content = self.content();
        trace!(
            variant = %content.variant,
            children = children.len(),
            "composing container"
        );
        layer.draw(&content, &appearance, children)
    }
}

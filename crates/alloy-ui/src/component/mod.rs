//! Component wrappers and the rendering-layer contract.
//!
//! A component holds its configuration (variant, size, strings, state) and
//! nothing else. Rendering is a single pass through [`View::compose`]:
//!
//! 1. The component resolves its appearance, exactly once.
//! 2. It borrows its configuration as [`Content`].
//! 3. It hands both, unmodified, to a [`RenderLayer`].
//!
//! Containers compose their children first and pass the children's outputs
//! along with their own content, so a layer builds its output bottom-up.
//!
//! # Example
//!
//! ```rust
//! use alloy_ui::{Button, ButtonSize, ButtonStyle, OutputMode, TerminalLayer, View};
//!
//! let save = Button::new("Save")
//!     .style(ButtonStyle::Primary)
//!     .size(ButtonSize::Medium);
//!
//! let mut layer = TerminalLayer::new(OutputMode::Text).unwrap();
//! let output = save.compose(&mut layer).unwrap();
//! assert!(output.contains("Save"));
//! ```

mod button;
mod navigation;
mod text_field;
mod text_view;

pub use button::Button;
pub use navigation::NavigationContainer;
pub use text_field::TextField;
pub use text_view::TextView;

use serde::Serialize;
use tracing::trace;

use crate::resolve::ResolvedAppearance;
use crate::variant::{ComponentKind, TextAlignment, Variant};

/// Raw content of a component, borrowed for the duration of a render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Content<'a> {
    pub variant: Variant,
    /// Label exposed to assistive technologies.
    pub accessibility_label: &'a str,
    pub body: Body<'a>,
}

/// Kind-specific content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Body<'a> {
    Button {
        label: &'a str,
        enabled: bool,
    },
    TextField {
        text: &'a str,
        placeholder: &'a str,
        label: &'a str,
        secure: bool,
        enabled: bool,
        error_message: Option<&'a str>,
    },
    TextView {
        text: &'a str,
        alignment: TextAlignment,
    },
    NavigationContainer {
        title: &'a str,
        show_back_button: bool,
    },
}

impl Content<'_> {
    pub fn kind(&self) -> ComponentKind {
        self.variant.kind()
    }
}

/// The rendering layer: turns resolved components into output.
///
/// Implementations receive exactly the attributes the resolver produced and
/// must not expect any other source of styling.
pub trait RenderLayer {
    type Output;
    type Error;

    /// Draws one component.
    ///
    /// `children` holds the already-drawn outputs of a container's body, in
    /// order; it is empty for leaf components.
    fn draw(
        &mut self,
        content: &Content<'_>,
        appearance: &ResolvedAppearance,
        children: Vec<Self::Output>,
    ) -> Result<Self::Output, Self::Error>;
}

/// A renderable component.
pub trait View {
    /// Resolves this component's appearance from its current configuration.
    fn resolve(&self) -> ResolvedAppearance;

    /// Borrows this component's raw content.
    fn content(&self) -> Content<'_>;

    /// Resolves once and forwards the result to `layer`.
    fn compose<L: RenderLayer>(&self, layer: &mut L) -> Result<L::Output, L::Error> {
        let appearance = self.resolve();
        let content = self.content();
        trace!(variant = %content.variant, "composing component");
        layer.draw(&content, &appearance, Vec::new())
    }
}

/// Any design-system component.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Button(Button),
    TextField(TextField),
    TextView(TextView),
    NavigationContainer(NavigationContainer),
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Button(_) => ComponentKind::Button,
            Component::TextField(_) => ComponentKind::TextField,
            Component::TextView(_) => ComponentKind::TextView,
            Component::NavigationContainer(_) => ComponentKind::NavigationContainer,
        }
    }
}

impl View for Component {
    fn resolve(&self) -> ResolvedAppearance {
        match self {
            Component::Button(c) => c.resolve(),
            Component::TextField(c) => c.resolve(),
            Component::TextView(c) => c.resolve(),
            Component::NavigationContainer(c) => c.resolve(),
        }
    }

    fn content(&self) -> Content<'_> {
        match self {
            Component::Button(c) => c.content(),
            Component::TextField(c) => c.content(),
            Component::TextView(c) => c.content(),
            Component::NavigationContainer(c) => c.content(),
        }
    }

    fn compose<L: RenderLayer>(&self, layer: &mut L) -> Result<L::Output, L::Error> {
        match self {
            Component::Button(c) => c.compose(layer),
            Component::TextField(c) => c.compose(layer),
            Component::TextView(c) => c.compose(layer),
            Component::NavigationContainer(c) => c.compose(layer),
        }
    }
}

impl From<Button> for Component {
    fn from(button: Button) -> Self {
        Component::Button(button)
    }
}

impl From<TextField> for Component {
    fn from(field: TextField) -> Self {
        Component::TextField(field)
    }
}

impl From<TextView> for Component {
    fn from(text: TextView) -> Self {
        Component::TextView(text)
    }
}

impl From<NavigationContainer> for Component {
    fn from(navigation: NavigationContainer) -> Self {
        Component::NavigationContainer(navigation)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::convert::Infallible;

    use super::*;

    /// Records every draw call; each output is the index of its draw.
    #[derive(Default)]
    pub(crate) struct RecordingLayer {
        pub(crate) draws: Vec<(Variant, ResolvedAppearance, Vec<usize>)>,
    }

    impl RenderLayer for RecordingLayer {
        type Output = usize;
        type Error = Infallible;

        fn draw(
            &mut self,
            content: &Content<'_>,
            appearance: &ResolvedAppearance,
            children: Vec<usize>,
        ) -> Result<usize, Infallible> {
            self.draws
                .push((content.variant, appearance.clone(), children));
            Ok(self.draws.len() - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingLayer;
    use super::*;
    use crate::variant::ButtonStyle;

    #[test]
    fn test_compose_forwards_resolved_appearance_unmodified() {
        let button = Button::new("Delete").style(ButtonStyle::Danger);
        let mut layer = RecordingLayer::default();
        button.compose(&mut layer).unwrap();

        assert_eq!(layer.draws.len(), 1);
        let (variant, appearance, children) = &layer.draws[0];
        assert_eq!(*variant, Variant::Button(ButtonStyle::Danger));
        assert_eq!(*appearance, button.resolve());
        assert!(children.is_empty());
    }

    #[test]
    fn test_component_delegates_to_wrapper() {
        let text = TextView::new("Hello");
        let component = Component::from(text.clone());
        assert_eq!(component.kind(), ComponentKind::TextView);
        assert_eq!(component.resolve(), text.resolve());
        assert_eq!(component.content(), text.content());
    }

    #[test]
    fn test_content_serializes_untagged_body() {
        let button = Button::new("Save");
        let json = serde_json::to_value(button.content()).unwrap();
        assert_eq!(json["variant"]["kind"], "button");
        assert_eq!(json["body"]["label"], "Save");
        assert_eq!(json["accessibility_label"], "Save");
    }
}

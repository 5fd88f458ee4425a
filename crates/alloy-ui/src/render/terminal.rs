//! Terminal rendering layer.

use minijinja::Environment;
use serde::Serialize;
use tracing::debug;

use super::error::RenderError;
use super::filters::register_filters;
use super::output::OutputMode;
use crate::component::{Body, Content, RenderLayer};
use crate::resolve::ResolvedAppearance;
use crate::util::{display_width, points_to_columns, truncate_to_width};
use crate::variant::{ComponentKind, TextAlignment};

/// Width used when none is given, in columns.
pub const DEFAULT_WIDTH: usize = 40;

const BUTTON_TEMPLATE: &str = concat!(
    r#"[{{ content.body.label | pad_to(layout.inner_cols, "center")"#,
    r#" | paint(appearance.foreground, appearance.background, layout.emphasis) }}]"#,
);

const TEXT_FIELD_TEMPLATE: &str = concat!(
    "{% if content.body.label %}",
    "{{ content.body.label | paint(appearance.label.color) | nl }}",
    "{% endif %}",
    "{{ layout.edge | paint(appearance.border.color) }}",
    "{{ layout.display | pad_to(layout.inner_cols)",
    " | paint(appearance.foreground, appearance.background, layout.emphasis) }}",
    "{{ layout.edge | paint(appearance.border.color) }}",
    "{% if content.body.error_message %}",
    "\n{{ content.body.error_message | paint(appearance.message.color) }}",
    "{% endif %}",
);

const TEXT_VIEW_TEMPLATE: &str = concat!(
    "{{ content.body.text | pad_to(layout.inner_cols, content.body.alignment)",
    " | paint(appearance.foreground, none, layout.emphasis) }}",
);

const NAVIGATION_TEMPLATE: &str = concat!(
    "{% if appearance.header %}",
    "{% if content.body.show_back_button %}",
    r#"{{ "<" | paint(appearance.header.title.color, appearance.header.background) }} "#,
    "{% endif %}",
    r#"{{ content.body.title | paint(appearance.header.title.color, appearance.header.background, "bold") | nl }}"#,
    "{{ layout.rule | paint(appearance.accent) }}",
    "{% if children %}\n{% endif %}",
    "{% endif %}",
    "{% for child in children %}{{ child }}{% if not loop.last %}\n{% endif %}{% endfor %}",
);

fn template_source(kind: ComponentKind) -> &'static str {
    match kind {
        ComponentKind::Button => BUTTON_TEMPLATE,
        ComponentKind::TextField => TEXT_FIELD_TEMPLATE,
        ComponentKind::TextView => TEXT_VIEW_TEMPLATE,
        ComponentKind::NavigationContainer => NAVIGATION_TEMPLATE,
    }
}

/// Terminal geometry derived from the resolved appearance.
#[derive(Debug, Default, Serialize)]
struct Layout {
    inner_cols: usize,
    emphasis: &'static str,
    display: String,
    edge: &'static str,
    rule: String,
}

#[derive(Serialize)]
struct Frame<'a, 'c> {
    content: &'a Content<'c>,
    appearance: &'a ResolvedAppearance,
    children: &'a [String],
    layout: Layout,
}

#[derive(Serialize)]
struct JsonNode<'a, 'c> {
    content: &'a Content<'c>,
    appearance: &'a ResolvedAppearance,
    children: Vec<serde_json::Value>,
}

/// A [`RenderLayer`] that draws components as terminal text.
///
/// Each component kind has a built-in template. Layout metrics in points are
/// mapped to columns (see [`crate::util::POINTS_PER_COLUMN`]), colors to the
/// ANSI 256-color palette.
///
/// # Example
///
/// ```rust
/// use alloy_ui::{OutputMode, TerminalLayer, TextField, View};
///
/// let field = TextField::new("")
///     .label("Email")
///     .placeholder("user@example.com")
///     .error_message(Some("Invalid email"));
///
/// let mut layer = TerminalLayer::new(OutputMode::Text).unwrap();
/// let output = field.compose(&mut layer).unwrap();
/// assert!(output.starts_with("Email\n"));
/// assert!(output.ends_with("Invalid email"));
/// ```
pub struct TerminalLayer {
    env: Environment<'static>,
    mode: OutputMode,
    width: usize,
}

impl TerminalLayer {
    /// Creates a layer of [`DEFAULT_WIDTH`] columns.
    pub fn new(mode: OutputMode) -> Result<Self, RenderError> {
        Self::with_width(mode, DEFAULT_WIDTH)
    }

    /// Creates a layer that lays out fields and rules across `width` columns.
    pub fn with_width(mode: OutputMode, width: usize) -> Result<Self, RenderError> {
        let mut env = Environment::new();
        register_filters(&mut env, mode);
        for kind in ComponentKind::ALL {
            env.add_template(kind.name(), template_source(*kind))?;
        }

        debug!(%mode, width, "terminal layer ready");
        Ok(Self { env, mode, width })
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn layout(&self, content: &Content<'_>, appearance: &ResolvedAppearance) -> Layout {
        let emphasis = if appearance.opacity < 1.0 {
            "dim"
        } else if appearance.font.is_some_and(|font| font.is_emphasized()) {
            "bold"
        } else {
            ""
        };

        match &content.body {
            Body::Button { label, .. } => {
                let padded =
                    display_width(label) + points_to_columns(appearance.padding.horizontal());
                let minimum = appearance.min_width.map_or(0, points_to_columns);
                Layout {
                    inner_cols: padded.max(minimum),
                    emphasis,
                    ..Layout::default()
                }
            }
            Body::TextField {
                text,
                placeholder,
                secure,
                ..
            } => {
                let inner_cols = self.width.saturating_sub(2);
                let (display, emphasis) = if text.is_empty() {
                    (placeholder.to_string(), "dim")
                } else if *secure {
                    ("•".repeat(text.chars().count()), emphasis)
                } else {
                    (text.to_string(), emphasis)
                };
                Layout {
                    inner_cols,
                    emphasis,
                    display: truncate_to_width(&display, inner_cols),
                    edge: if appearance.border.is_visible() { "|" } else { " " },
                    ..Layout::default()
                }
            }
            Body::TextView { alignment, .. } => Layout {
                inner_cols: match alignment {
                    TextAlignment::Leading => 0,
                    TextAlignment::Center | TextAlignment::Trailing => self.width,
                },
                emphasis,
                ..Layout::default()
            },
            Body::NavigationContainer { .. } => Layout {
                rule: "-".repeat(self.width),
                ..Layout::default()
            },
        }
    }

    fn draw_json(
        &self,
        content: &Content<'_>,
        appearance: &ResolvedAppearance,
        children: Vec<String>,
    ) -> Result<String, RenderError> {
        let children = children
            .iter()
            .map(|child| serde_json::from_str(child))
            .collect::<Result<Vec<serde_json::Value>, _>>()?;
        let node = JsonNode {
            content,
            appearance,
            children,
        };
        Ok(serde_json::to_string_pretty(&node)?)
    }
}

impl RenderLayer for TerminalLayer {
    type Output = String;
    type Error = RenderError;

    fn draw(
        &mut self,
        content: &Content<'_>,
        appearance: &ResolvedAppearance,
        children: Vec<String>,
    ) -> Result<String, RenderError> {
        if self.mode.is_json() {
            return self.draw_json(content, appearance, children);
        }

        let frame = Frame {
            content,
            appearance,
            children: &children,
            layout: self.layout(content, appearance),
        };
        let template = self.env.get_template(content.kind().name())?;
        let body = template.render(&frame)?;

        if self.mode.is_debug() {
            Ok(format!("[{tag}]{body}[/{tag}]", tag = content.variant))
        } else {
            Ok(body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Button, NavigationContainer, TextField, TextView, View};
    use crate::variant::{ButtonSize, ButtonStyle, NavigationStyle, TextStyle};

    fn text_layer() -> TerminalLayer {
        TerminalLayer::new(OutputMode::Text).unwrap()
    }

    #[test]
    fn test_every_kind_has_a_template() {
        let layer = text_layer();
        for kind in ComponentKind::ALL {
            assert!(layer.env.get_template(kind.name()).is_ok(), "{kind}");
        }
    }

    #[test]
    fn test_button_text_padded_to_min_width() {
        let output = Button::new("Save")
            .size(ButtonSize::Medium)
            .compose(&mut text_layer())
            .unwrap();
        // 100pt minimum width maps to 13 columns, label is centered inside brackets
        assert_eq!(output, format!("[{}]", "    Save     "));
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn test_button_grows_past_min_width_for_long_labels() {
        let output = Button::new("Download the full report")
            .size(ButtonSize::Small)
            .compose(&mut text_layer())
            .unwrap();
        // 24 label columns plus 24pt of horizontal padding (3 columns)
        assert_eq!(display_width(&output), 24 + 3 + 2);
    }

    #[test]
    fn test_term_mode_emits_ansi() {
        let mut layer = TerminalLayer::new(OutputMode::Term).unwrap();
        let output = Button::new("Delete")
            .style(ButtonStyle::Danger)
            .compose(&mut layer)
            .unwrap();
        assert!(output.contains("\x1b["));
        assert!(output.contains("Delete"));
    }

    #[test]
    fn test_debug_mode_wraps_in_variant_tags() {
        let mut layer = TerminalLayer::new(OutputMode::Debug).unwrap();
        let output = TextView::new("Hello")
            .style(TextStyle::Headline)
            .compose(&mut layer)
            .unwrap();
        assert_eq!(output, "[text-view.headline]Hello[/text-view.headline]");
    }

    #[test]
    fn test_text_field_placeholder_and_border() {
        let output = TextField::new("")
            .placeholder("Enter name")
            .compose(&mut TerminalLayer::with_width(OutputMode::Text, 14).unwrap())
            .unwrap();
        assert_eq!(output, "|Enter name  |");
    }

    #[test]
    fn test_text_field_never_wider_than_frame() {
        let output = TextField::new("abc")
            .compose(&mut TerminalLayer::with_width(OutputMode::Text, 2).unwrap())
            .unwrap();
        assert_eq!(output, "||");
    }

    #[test]
    fn test_text_field_secure_masks_text() {
        let output = TextField::new("hunter2")
            .secure(true)
            .compose(&mut text_layer())
            .unwrap();
        assert!(output.contains("•••••••"));
        assert!(!output.contains("hunter2"));
    }

    #[test]
    fn test_filled_text_field_has_no_border_edges() {
        let output = TextField::new("value")
            .style(crate::variant::TextFieldStyle::Filled)
            .compose(&mut TerminalLayer::with_width(OutputMode::Text, 9).unwrap())
            .unwrap();
        assert_eq!(output, " value   ");
    }

    #[test]
    fn test_navigation_header_and_children() {
        let screen = NavigationContainer::new()
            .title("Settings")
            .style(NavigationStyle::Autodesk)
            .child(TextView::new("Profile"))
            .child(TextView::new("Sign Out"));
        let output = screen
            .compose(&mut TerminalLayer::with_width(OutputMode::Text, 8).unwrap())
            .unwrap();
        assert_eq!(output, "< Settings\n--------\nProfile\nSign Out");
    }

    #[test]
    fn test_navigation_without_title_has_no_header() {
        let screen = NavigationContainer::new().child(TextView::new("Body"));
        let output = screen.compose(&mut text_layer()).unwrap();
        assert_eq!(output, "Body");
    }

    #[test]
    fn test_navigation_without_back_button() {
        let screen = NavigationContainer::new()
            .title("Detail")
            .show_back_button(false);
        let output = screen
            .compose(&mut TerminalLayer::with_width(OutputMode::Text, 4).unwrap())
            .unwrap();
        assert_eq!(output, "Detail\n----");
    }

    #[test]
    fn test_json_mode_nests_children() {
        let screen = NavigationContainer::new()
            .title("Home")
            .child(Button::new("Go"));
        let mut layer = TerminalLayer::new(OutputMode::Json).unwrap();
        let output = screen.compose(&mut layer).unwrap();

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["content"]["variant"]["kind"], "navigation-container");
        assert_eq!(json["appearance"]["accent"], "#0078D6");
        assert_eq!(json["children"][0]["content"]["body"]["label"], "Go");
        assert_eq!(json["children"][0]["appearance"]["min_width"], 100.0);
    }
}

//! Demo screens built from Alloy components.

use alloy_ui::{
    Button, ButtonSize, ButtonStyle, ColorToken, Component, NavigationContainer, NavigationStyle,
    TerminalLayer, TextField, TextFieldStyle, TextStyle, TextView, View,
};
use anyhow::Context;
use serde_json::{json, Value};

/// Every variant of every component, one section per kind.
///
/// In JSON mode the result is a single array of
/// `{"section": .., "components": [..]}` objects rather than one document
/// per component.
pub fn catalog(layer: &mut TerminalLayer) -> anyhow::Result<String> {
    let sections = [
        ("Buttons", buttons()),
        ("Disabled buttons", disabled_buttons()),
        ("Text fields", text_fields()),
        ("Text styles", text_styles()),
        ("Text colors", text_colors()),
        ("Navigation", navigation()),
    ];

    if layer.mode().is_json() {
        return catalog_json(layer, &sections);
    }

    let mut blocks = Vec::with_capacity(sections.len());
    for (heading, components) in &sections {
        let mut lines = vec![TextView::new(*heading)
            .style(TextStyle::Title)
            .compose(layer)
            .with_context(|| format!("failed to render heading {heading}"))?];
        for component in components {
            lines.push(compose_component(component, layer)?);
        }
        blocks.push(lines.join("\n"));
    }

    Ok(blocks.join("\n\n"))
}

fn catalog_json(
    layer: &mut TerminalLayer,
    sections: &[(&str, Vec<Component>)],
) -> anyhow::Result<String> {
    let mut entries = Vec::with_capacity(sections.len());
    for (heading, components) in sections {
        let nodes = components
            .iter()
            .map(|component| {
                let rendered = compose_component(component, layer)?;
                serde_json::from_str::<Value>(&rendered)
                    .with_context(|| format!("invalid JSON for {}", component.content().variant))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        entries.push(json!({ "section": heading, "components": nodes }));
    }

    serde_json::to_string_pretty(&entries).context("failed to serialize catalog")
}

fn compose_component(component: &Component, layer: &mut TerminalLayer) -> anyhow::Result<String> {
    component
        .compose(layer)
        .with_context(|| format!("failed to render {}", component.content().variant))
}

fn buttons() -> Vec<Component> {
    ButtonStyle::ALL
        .iter()
        .flat_map(|&style| {
            ButtonSize::ALL.iter().map(move |&size| {
                Component::from(Button::new(format!("{style} {size}")).style(style).size(size))
            })
        })
        .collect()
}

fn disabled_buttons() -> Vec<Component> {
    ButtonStyle::ALL
        .iter()
        .map(|&style| Component::from(Button::new(style.name()).style(style).enabled(false)))
        .collect()
}

fn text_fields() -> Vec<Component> {
    let mut fields: Vec<Component> = TextFieldStyle::ALL
        .iter()
        .map(|&style| {
            Component::from(
                TextField::new("")
                    .label(format!("{style} field"))
                    .placeholder("Enter text")
                    .style(style),
            )
        })
        .collect();

    fields.push(
        TextField::new("john@")
            .label("Email")
            .error_message(Some("Invalid email address"))
            .into(),
    );
    fields.push(
        TextField::new("secret")
            .label("Password")
            .secure(true)
            .into(),
    );
    fields.push(
        TextField::new("ID-4471")
            .label("System Generated ID")
            .enabled(false)
            .into(),
    );
    fields
}

fn text_styles() -> Vec<Component> {
    TextStyle::ALL
        .iter()
        .map(|&style| Component::from(TextView::new(style.name()).style(style)))
        .collect()
}

fn text_colors() -> Vec<Component> {
    ColorToken::ALL
        .iter()
        .map(|&color| Component::from(TextView::new(color.name()).color(color)))
        .collect()
}

fn navigation() -> Vec<Component> {
    NavigationStyle::ALL
        .iter()
        .map(|&style| {
            Component::from(
                NavigationContainer::new()
                    .title(format!("{style} navigation"))
                    .style(style)
                    .child(TextView::new("Content").color(ColorToken::Secondary)),
            )
        })
        .collect()
}

/// Profile settings: account details, preferences and account actions.
pub fn profile() -> NavigationContainer {
    NavigationContainer::new()
        .title("Settings")
        .style(NavigationStyle::Autodesk)
        .child(TextView::new("Profile Information").style(TextStyle::Headline))
        .child(TextField::new("John Doe").label("Username").enabled(false))
        .child(TextField::new("john@example.com").label("Email").enabled(false))
        .child(TextView::new("Preferences").style(TextStyle::Headline))
        .child(TextView::new("Enable Notifications: on"))
        .child(TextView::new("Dark Mode: off"))
        .child(Button::new("Edit Profile").style(ButtonStyle::Secondary))
        .child(Button::new("Change Password").style(ButtonStyle::Tertiary))
        .child(Button::new("Sign Out").style(ButtonStyle::Danger))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_ui::OutputMode;

    #[test]
    fn test_catalog_renders_every_section() {
        let mut layer = TerminalLayer::new(OutputMode::Text).unwrap();
        let output = catalog(&mut layer).unwrap();
        for heading in ["Buttons", "Text fields", "Text styles", "Text colors", "Navigation"] {
            assert!(output.contains(heading), "missing {heading}");
        }
        assert!(output.contains("danger large"));
        assert!(output.contains("Invalid email address"));
        assert!(!output.contains("secret"));
    }

    #[test]
    fn test_catalog_json_is_one_document() {
        let mut layer = TerminalLayer::new(OutputMode::Json).unwrap();
        let output = catalog(&mut layer).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        let sections = json.as_array().unwrap();
        assert_eq!(sections.len(), 6);
        assert_eq!(sections[0]["section"], "Buttons");
        assert_eq!(
            sections[0]["components"].as_array().unwrap().len(),
            ButtonStyle::ALL.len() * ButtonSize::ALL.len()
        );
        let navigation = &sections[5]["components"][0];
        assert_eq!(navigation["children"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_profile_screen_structure() {
        let screen = profile();
        assert_eq!(screen.title_text(), "Settings");
        assert_eq!(screen.children().len(), 9);
        assert!(screen.resolve().header.is_some());
    }
}

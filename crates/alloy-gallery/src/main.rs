//! Terminal gallery for the Alloy design system.
//!
//! Renders demo screens or a single configured component:
//!
//! ```text
//! alloy-gallery catalog
//! alloy-gallery --output debug profile
//! alloy-gallery button "Delete" --style danger --size small
//! alloy-gallery field --label Email --error "Invalid email"
//! ```

mod screens;

use alloy_ui::{
    Button, ButtonSize, ButtonStyle, ColorToken, OutputMode, TerminalLayer, TextAlignment,
    TextField, TextFieldStyle, TextStyle, TextView, View,
};
use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "alloy-gallery", version, about = "Render Alloy components in the terminal")]
struct Cli {
    /// Output mode: auto, term, text, debug, or json
    #[arg(long, global = true, default_value = "auto")]
    output: OutputMode,

    /// Width in columns used for text fields and header rules
    #[arg(long, global = true, default_value_t = alloy_ui::render::DEFAULT_WIDTH)]
    width: usize,

    #[command(subcommand)]
    screen: Screen,
}

#[derive(Debug, Subcommand)]
enum Screen {
    /// Every variant of every component
    Catalog,
    /// A profile settings screen
    Profile,
    /// A single button
    Button {
        label: String,
        #[arg(long, default_value = "primary")]
        style: ButtonStyle,
        #[arg(long, default_value = "medium")]
        size: ButtonSize,
        #[arg(long)]
        disabled: bool,
    },
    /// A single text field
    Field {
        #[arg(long, default_value = "")]
        text: String,
        #[arg(long, default_value = "")]
        placeholder: String,
        #[arg(long, default_value = "")]
        label: String,
        #[arg(long, default_value = "standard")]
        style: TextFieldStyle,
        #[arg(long)]
        secure: bool,
        #[arg(long)]
        disabled: bool,
        #[arg(long)]
        error: Option<String>,
    },
    /// A single text view
    Text {
        text: String,
        #[arg(long, default_value = "body")]
        style: TextStyle,
        #[arg(long, default_value = "primary")]
        color: ColorToken,
        #[arg(long, default_value = "leading")]
        align: TextAlignment,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn compose<V: View>(view: &V, layer: &mut TerminalLayer) -> anyhow::Result<String> {
    view.compose(layer).context("failed to render component")
}

/// Renders the selected screen with a layer built from the global flags.
fn run(cli: Cli) -> anyhow::Result<String> {
    let mut layer = TerminalLayer::with_width(cli.output, cli.width)
        .context("failed to set up terminal layer")?;

    match cli.screen {
        Screen::Catalog => screens::catalog(&mut layer),
        Screen::Profile => compose(&screens::profile(), &mut layer),
        Screen::Button {
            label,
            style,
            size,
            disabled,
        } => {
            let button = Button::new(label)
                .style(style)
                .size(size)
                .enabled(!disabled);
            compose(&button, &mut layer)
        }
        Screen::Field {
            text,
            placeholder,
            label,
            style,
            secure,
            disabled,
            error,
        } => {
            let field = TextField::new(text)
                .placeholder(placeholder)
                .label(label)
                .style(style)
                .secure(secure)
                .enabled(!disabled)
                .error_message(error);
            compose(&field, &mut layer)
        }
        Screen::Text {
            text,
            style,
            color,
            align,
        } => {
            let view = TextView::new(text)
                .style(style)
                .color(color)
                .alignment(align);
            compose(&view, &mut layer)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    debug!(output = %cli.output, width = cli.width, screen = ?cli.screen, "starting gallery");

    let output = run(cli)?;
    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_variant_names() {
        let cli = Cli::try_parse_from([
            "alloy-gallery",
            "--output",
            "text",
            "button",
            "Delete",
            "--style",
            "danger",
            "--size",
            "small",
        ])
        .unwrap();
        assert_eq!(cli.output, OutputMode::Text);
        match cli.screen {
            Screen::Button {
                label,
                style,
                size,
                disabled,
            } => {
                assert_eq!(label, "Delete");
                assert_eq!(style, ButtonStyle::Danger);
                assert_eq!(size, ButtonSize::Small);
                assert!(!disabled);
            }
            other => panic!("Expected button screen, got {:?}", other),
        }
    }

    fn run_args(args: &[&str]) -> String {
        let argv = std::iter::once("alloy-gallery").chain(args.iter().copied());
        run(Cli::try_parse_from(argv).unwrap()).unwrap()
    }

    #[test]
    fn test_width_applies_to_text_alignment() {
        let output = run_args(&[
            "--output", "text", "--width", "10", "text", "hi", "--align", "trailing",
        ]);
        assert_eq!(output, "        hi");
    }

    #[test]
    fn test_width_applies_to_fields() {
        let output = run_args(&["--output", "text", "--width", "8", "field", "--text", "abc"]);
        assert_eq!(output, "|abc   |");
    }

    #[test]
    fn test_catalog_json_parses() {
        let output = run_args(&["--output", "json", "catalog"]);
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(json.is_array());
    }

    #[test]
    fn test_rejects_unknown_variant() {
        let result = Cli::try_parse_from(["alloy-gallery", "button", "x", "--style", "loud"]);
        assert!(result.is_err());
    }
}

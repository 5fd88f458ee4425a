//! MiniJinja filter registration.

use console::Style;
use minijinja::{Environment, Value};

use super::output::OutputMode;
use crate::util::{pad_to_width, parse_hex, rgb_to_ansi256};
use crate::variant::TextAlignment;

/// Registers the terminal layer's filters on a minijinja environment.
pub(crate) fn register_filters(env: &mut Environment<'static>, mode: OutputMode) {
    let use_color = mode.should_use_color();

    // {{ text | paint(fg, bg, emphasis) }} with hex colors; every argument is optional
    // and fully transparent colors are skipped.
    env.add_filter(
        "paint",
        move |value: Value,
              fg: Option<String>,
              bg: Option<String>,
              emphasis: Option<String>|
              -> String {
            let text = value.to_string();
            if use_color {
                paint(&text, fg.as_deref(), bg.as_deref(), emphasis.as_deref())
            } else {
                text
            }
        },
    );

    // {{ text | pad_to(width, "center") }}, alignment defaults to leading.
    env.add_filter(
        "pad_to",
        |value: Value, width: usize, align: Option<String>| -> String {
            let alignment = align
                .as_deref()
                .and_then(|name| name.parse::<TextAlignment>().ok())
                .unwrap_or_default();
            pad_to_width(&value.to_string(), width, alignment)
        },
    );

    env.add_filter("nl", |value: Value| -> String { format!("{}\n", value) });
}

fn paint(text: &str, fg: Option<&str>, bg: Option<&str>, emphasis: Option<&str>) -> String {
    let mut style = Style::new().force_styling(true);
    if let Some(index) = fg.and_then(ansi_index) {
        style = style.color256(index);
    }
    if let Some(index) = bg.and_then(ansi_index) {
        style = style.on_color256(index);
    }
    style = match emphasis {
        Some("bold") => style.bold(),
        Some("dim") => style.dim(),
        _ => style,
    };
    style.apply_to(text).to_string()
}

fn ansi_index(hex: &str) -> Option<u8> {
    let (r, g, b, a) = parse_hex(hex)?;
    (a > 0).then(|| rgb_to_ansi256((r, g, b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(mode: OutputMode, source: &str) -> String {
        let mut env = Environment::new();
        register_filters(&mut env, mode);
        env.render_str(source, minijinja::context! {}).unwrap()
    }

    #[test]
    fn test_paint_plain_when_color_disabled() {
        let out = render(OutputMode::Text, r##"{{ "hi" | paint("#D92929", "#FFFFFF", "bold") }}"##);
        assert_eq!(out, "hi");
    }

    #[test]
    fn test_paint_emits_ansi_in_term_mode() {
        let out = render(OutputMode::Term, r##"{{ "hi" | paint("#FF0000") }}"##);
        assert!(out.contains("\x1b[38;5;196m"));
        assert!(out.contains("hi"));
    }

    #[test]
    fn test_paint_skips_transparent_background() {
        let out = render(OutputMode::Term, r##"{{ "hi" | paint(none, "#00000000") }}"##);
        assert!(!out.contains("48;5"));
    }

    #[test]
    fn test_pad_to_alignment() {
        assert_eq!(render(OutputMode::Text, r#"[{{ "ab" | pad_to(4, "center") }}]"#), "[ ab ]");
        assert_eq!(render(OutputMode::Text, r#"[{{ "ab" | pad_to(4) }}]"#), "[ab  ]");
    }

    #[test]
    fn test_nl_filter() {
        assert_eq!(render(OutputMode::Text, r#"{{ "x" | nl }}"#), "x\n");
    }
}

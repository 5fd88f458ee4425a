//! Output mode selection for the terminal layer.

use std::fmt;
use std::str::FromStr;

use crate::variant::UnknownVariant;

/// How the terminal layer writes components.
///
/// `Auto` styles output only when stdout supports colors; the other modes
/// are fixed regardless of the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// ANSI colors when stdout supports them, plain text otherwise
    #[default]
    Auto,
    /// Always emit ANSI colors
    Term,
    /// Plain text, no escapes
    Text,
    /// Plain text wrapped in `[kind.style]...[/kind.style]` tags
    Debug,
    /// Content and resolved appearance as JSON
    Json,
}

impl OutputMode {
    pub const ALL: &'static [OutputMode] = &[
        OutputMode::Auto,
        OutputMode::Term,
        OutputMode::Text,
        OutputMode::Debug,
        OutputMode::Json,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OutputMode::Auto => "auto",
            OutputMode::Term => "term",
            OutputMode::Text => "text",
            OutputMode::Debug => "debug",
            OutputMode::Json => "json",
        }
    }

    /// Whether ANSI escape codes should be emitted.
    pub fn should_use_color(self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::Debug | OutputMode::Json => false,
        }
    }

    pub fn is_debug(self) -> bool {
        matches!(self, OutputMode::Debug)
    }

    pub fn is_json(self) -> bool {
        matches!(self, OutputMode::Json)
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        OutputMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                UnknownVariant::new(
                    "output mode",
                    s,
                    OutputMode::ALL.iter().map(|mode| mode.name()).collect(),
                )
            })
    }
}

//! # Alloy UI
//!
//! Design-system components whose look is decided by pure style resolution.
//!
//! Each component kind has closed enumerations of style options. A resolver
//! maps a selection plus the component's state to a [`ResolvedAppearance`]:
//! concrete colors, padding, radius, border and font. A component wrapper
//! holds the configuration, resolves once per render pass, and hands the
//! result to a [`RenderLayer`].
//!
//! ## Components
//!
//! | Component | Variants |
//! |-----------|----------|
//! | [`Button`] | [`ButtonStyle`] × [`ButtonSize`], enabled flag |
//! | [`TextField`] | [`TextFieldStyle`], enabled flag, error message |
//! | [`TextView`] | [`TextStyle`] × [`ColorToken`], [`TextAlignment`] |
//! | [`NavigationContainer`] | [`NavigationStyle`], title, back button |
//!
//! ## Quick Start
//!
//! ```rust
//! use alloy_ui::{
//!     render, Button, ButtonStyle, NavigationContainer, OutputMode, TextField, TextView,
//!     TextStyle,
//! };
//!
//! let screen = NavigationContainer::new()
//!     .title("Dashboard")
//!     .child(TextView::new("Welcome").style(TextStyle::Headline))
//!     .child(TextField::new("").label("Project").placeholder("Untitled"))
//!     .child(Button::new("Open").style(ButtonStyle::Primary));
//!
//! let output = render(&screen, OutputMode::Text).unwrap();
//! assert!(output.starts_with("< Dashboard"));
//! ```
//!
//! ## Resolution without components
//!
//! The resolvers are usable on their own, for hosts that bring their own
//! widgets:
//!
//! ```rust
//! use alloy_ui::resolve::{resolve, ComponentState};
//! use alloy_ui::{TextFieldStyle, Variant};
//!
//! let state = ComponentState::new().with_error_message(Some("Invalid email"));
//! let appearance = resolve(Variant::TextField(TextFieldStyle::Standard), None, &state);
//! assert_eq!(appearance.border.color.to_hex(), "#D92929");
//! ```

pub mod component;
pub mod render;
pub mod resolve;
pub mod style;
pub mod tokens;
pub mod util;
pub mod variant;

pub use component::{
    Body, Button, Component, Content, NavigationContainer, RenderLayer, TextField, TextView, View,
};
pub use render::{render, OutputMode, RenderError, TerminalLayer};
pub use resolve::{resolve, ComponentState, HeaderBar, ResolvedAppearance};
pub use style::{Border, Color, EdgeInsets, FontDescriptor, FontWeight, TextAttributes};
pub use util::{pad_to_width, rgb_to_ansi256, truncate_to_width};
pub use variant::{
    ButtonSize, ButtonStyle, ColorToken, ComponentKind, NavigationStyle, TextAlignment,
    TextFieldStyle, TextStyle, UnknownVariant, Variant,
};

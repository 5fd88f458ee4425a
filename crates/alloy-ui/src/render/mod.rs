//! Reference rendering layer for terminals.
//!
//! [`TerminalLayer`] implements [`RenderLayer`](crate::RenderLayer) by
//! running each component through a built-in minijinja template. The
//! [`OutputMode`] decides whether colors are applied, stripped, replaced by
//! debug tags, or bypassed entirely in favor of JSON.

mod error;
mod filters;
mod output;
mod terminal;

pub use error::RenderError;
pub use output::OutputMode;
pub use terminal::{TerminalLayer, DEFAULT_WIDTH};

use crate::component::View;

/// Renders a single component (and its children) in the given mode.
///
/// # Example
///
/// ```rust
/// use alloy_ui::{render, OutputMode, TextView};
///
/// let output = render(&TextView::new("Hello, world!"), OutputMode::Text).unwrap();
/// assert_eq!(output, "Hello, world!");
/// ```
pub fn render<V: View>(view: &V, mode: OutputMode) -> Result<String, RenderError> {
    let mut layer = TerminalLayer::new(mode)?;
    view.compose(&mut layer)
}

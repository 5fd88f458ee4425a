//! Concrete visual primitives produced by style resolution.
//!
//! This module provides the value types a rendering layer consumes:
//!
//! - [`Color`]: An RGBA color in the `0.0..=1.0` range
//! - [`EdgeInsets`]: Padding around content, in points
//! - [`Border`]: Stroke width and color
//! - [`FontDescriptor`] and [`FontWeight`]: System font size and weight
//! - [`TextAttributes`]: A font paired with a color
//!
//! None of these types carry meaning on their own. Semantic choices live in
//! [`crate::variant`], and [`crate::resolve`] maps one onto the other.

mod color;
mod font;
mod geometry;

pub use color::Color;
pub use font::{FontDescriptor, FontWeight, TextAttributes};
pub use geometry::{Border, EdgeInsets};

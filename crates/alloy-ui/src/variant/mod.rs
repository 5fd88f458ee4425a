//! Closed variant enumerations for every component kind.
//!
//! Each enumeration is a fixed set of named options. Adding an option is a
//! source change: every resolver matches exhaustively, so a member without a
//! resolver entry fails to compile rather than falling back at runtime.
//!
//! All enumerations share the same surface:
//!
//! - `ALL`: every member in declaration order
//! - `name()`: a stable kebab-case name
//! - [`Display`](std::fmt::Display) and [`FromStr`] using that name
//!
//! [`Variant`] ties a style selection to its [`ComponentKind`] as a tagged
//! union, so a button style can never be paired with a text field.

mod error;

pub use error::UnknownVariant;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
        default = $default:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable kebab-case name of this member.
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|member| member.name().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| {
                        UnknownVariant::new(
                            $kind,
                            s,
                            $name::ALL.iter().map(|member| member.name()).collect(),
                        )
                    })
            }
        }
    };
}

closed_enum! {
    /// The four component kinds of the design system.
    pub enum ComponentKind as "component kind" {
        Button => "button",
        TextField => "text-field",
        TextView => "text-view",
        NavigationContainer => "navigation-container",
    }
    default = TextView;
}

closed_enum! {
    /// Visual emphasis of a button.
    pub enum ButtonStyle as "button style" {
        /// Main action
        Primary => "primary",
        /// Secondary action
        Secondary => "secondary",
        /// Low emphasis action
        Tertiary => "tertiary",
        /// Destructive action
        Danger => "danger",
    }
    default = Primary;
}

closed_enum! {
    /// Button size class.
    pub enum ButtonSize as "button size" {
        Small => "small",
        Medium => "medium",
        Large => "large",
    }
    default = Medium;
}

closed_enum! {
    /// Text field decoration.
    pub enum TextFieldStyle as "text field style" {
        /// Bordered input
        Standard => "standard",
        /// Filled background, no border
        Filled => "filled",
        /// Transparent background
        Minimal => "minimal",
    }
    default = Standard;
}

closed_enum! {
    /// Typographic role of a text view.
    pub enum TextStyle as "text style" {
        Title => "title",
        Headline => "headline",
        Subheadline => "subheadline",
        Body => "body",
        Caption => "caption",
        Footnote => "footnote",
    }
    default = Body;
}

closed_enum! {
    /// Semantic text color, independent of component kind.
    pub enum ColorToken as "color token" {
        Primary => "primary",
        Secondary => "secondary",
        Tertiary => "tertiary",
        Accent => "accent",
        Error => "error",
        Success => "success",
    }
    default = Primary;
}

closed_enum! {
    /// Horizontal alignment of multi-line text.
    pub enum TextAlignment as "text alignment" {
        Leading => "leading",
        Center => "center",
        Trailing => "trailing",
    }
    default = Leading;
}

closed_enum! {
    /// Navigation container presentation.
    pub enum NavigationStyle as "navigation style" {
        /// Branded header bar replacing the system bar
        Autodesk => "autodesk",
        /// Platform navigation bar
        Standard => "standard",
        /// Platform navigation bar for small screens and modals
        Compact => "compact",
    }
    default = Autodesk;
}

/// A style selection tagged with the component kind it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "style", rename_all = "kebab-case")]
pub enum Variant {
    Button(ButtonStyle),
    TextField(TextFieldStyle),
    TextView { style: TextStyle, color: ColorToken },
    NavigationContainer(NavigationStyle),
}

static ALL_VARIANTS: Lazy<Vec<Variant>> = Lazy::new(|| {
    let buttons = ButtonStyle::ALL.iter().copied().map(Variant::Button);
    let fields = TextFieldStyle::ALL.iter().copied().map(Variant::TextField);
    let texts = TextStyle::ALL.iter().flat_map(|&style| {
        ColorToken::ALL
            .iter()
            .map(move |&color| Variant::TextView { style, color })
    });
    let navigation = NavigationStyle::ALL
        .iter()
        .copied()
        .map(Variant::NavigationContainer);

    buttons.chain(fields).chain(texts).chain(navigation).collect()
});

impl Variant {
    /// Every variant of every component kind.
    ///
    /// Text views contribute one entry per (style, color) pair.
    pub fn all() -> &'static [Variant] {
        &ALL_VARIANTS
    }

    /// The component kind this variant styles.
    pub fn kind(&self) -> ComponentKind {
        match self {
            Variant::Button(_) => ComponentKind::Button,
            Variant::TextField(_) => ComponentKind::TextField,
            Variant::TextView { .. } => ComponentKind::TextView,
            Variant::NavigationContainer(_) => ComponentKind::NavigationContainer,
        }
    }

    /// Name of the style member, without the kind.
    pub fn style_name(&self) -> &'static str {
        match self {
            Variant::Button(style) => style.name(),
            Variant::TextField(style) => style.name(),
            Variant::TextView { style, .. } => style.name(),
            Variant::NavigationContainer(style) => style.name(),
        }
    }
}

impl fmt::Display for Variant {
    /// Formats as `kind.style`, e.g. `button.primary`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.kind(), self.style_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for style in ButtonStyle::ALL {
            assert_eq!(style.name().parse::<ButtonStyle>().unwrap(), *style);
        }
        for token in ColorToken::ALL {
            assert_eq!(token.to_string().parse::<ColorToken>().unwrap(), *token);
        }
    }

    #[test]
    fn test_from_str_ignores_case_and_whitespace() {
        assert_eq!(" Danger ".parse::<ButtonStyle>().unwrap(), ButtonStyle::Danger);
        assert_eq!(
            "NAVIGATION-CONTAINER".parse::<ComponentKind>().unwrap(),
            ComponentKind::NavigationContainer
        );
    }

    #[test]
    fn test_from_str_unknown_lists_expected() {
        let err = "huge".parse::<ButtonSize>().unwrap_err();
        assert_eq!(err.kind, "button size");
        assert_eq!(err.name, "huge");
        assert_eq!(err.expected, vec!["small", "medium", "large"]);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ButtonStyle::default(), ButtonStyle::Primary);
        assert_eq!(ButtonSize::default(), ButtonSize::Medium);
        assert_eq!(TextFieldStyle::default(), TextFieldStyle::Standard);
        assert_eq!(TextStyle::default(), TextStyle::Body);
        assert_eq!(ColorToken::default(), ColorToken::Primary);
        assert_eq!(NavigationStyle::default(), NavigationStyle::Autodesk);
        assert_eq!(TextAlignment::default(), TextAlignment::Leading);
    }

    #[test]
    fn test_all_variants_cover_every_kind() {
        let all = Variant::all();
        assert_eq!(all.len(), 4 + 3 + 6 * 6 + 3);
        for kind in ComponentKind::ALL {
            assert!(all.iter().any(|variant| variant.kind() == *kind));
        }
    }

    #[test]
    fn test_variant_display() {
        assert_eq!(Variant::Button(ButtonStyle::Primary).to_string(), "button.primary");
        let text = Variant::TextView {
            style: TextStyle::Caption,
            color: ColorToken::Error,
        };
        assert_eq!(text.to_string(), "text-view.caption");
    }

    #[test]
    fn test_variant_serializes_with_kind_tag() {
        let json = serde_json::to_value(Variant::TextField(TextFieldStyle::Filled)).unwrap();
        assert_eq!(json["kind"], "text-field");
        assert_eq!(json["style"], "filled");
    }
}

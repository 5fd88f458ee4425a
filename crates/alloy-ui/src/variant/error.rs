//! Variant parsing errors.

/// Error returned when a name does not match any member of a variant set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{name}' (expected one of: {})", .expected.join(", "))]
pub struct UnknownVariant {
    /// The enumeration that was being parsed, e.g. "button style"
    pub kind: &'static str,
    /// The name that failed to match
    pub name: String,
    /// Every accepted name
    pub expected: Vec<&'static str>,
}

impl UnknownVariant {
    pub(crate) fn new(kind: &'static str, name: &str, expected: Vec<&'static str>) -> Self {
        Self {
            kind,
            name: name.to_string(),
            expected,
        }
    }
}

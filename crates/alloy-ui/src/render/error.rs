//! Rendering errors.

/// Error returned by the terminal layer.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A component template failed to compile or render
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
    /// Content or appearance could not be serialized to JSON
    #[error("failed to serialize component: {0}")]
    Json(#[from] serde_json::Error),
}

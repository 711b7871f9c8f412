//! Error types for map document rendering.

/// Errors that can occur while rendering or mounting a [`MapDocument`].
///
/// [`MapDocument`]: crate::render::MapDocument
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The page template failed to load or render.
    #[error("template error: {source}")]
    Template {
        /// The underlying template error.
        #[from]
        source: minijinja::Error,
    },

    /// The document could not be serialized for embedding in the page.
    #[error("serialization error: {source}")]
    Serialize {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },

    /// Writing the page to its sink failed.
    #[error("write error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

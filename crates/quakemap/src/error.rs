//! Error types for the quakemap binary.
//!
//! [`AppError`] is the top-level error type that wraps every failure mode
//! of a run so `main` can report it in one place.

/// Top-level error for one pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: config::ConfigError,
    },

    /// Fetching or decoding the feed failed.
    #[error("fetch error: {source}")]
    Fetch {
        /// The underlying fetch error.
        #[from]
        source: quakemap_feed::FetchError,
    },

    /// Rendering or writing the map page failed.
    #[error("render error: {source}")]
    Render {
        /// The underlying render error.
        #[from]
        source: quakemap_map::RenderError,
    },

    /// The output file could not be created.
    #[error("output error on {path}: {source}")]
    Output {
        /// The output path.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

//! Error types for the engine binary.
//!
//! [`EngineError`] wraps every failure mode of startup and output, so
//! `main` can propagate with `?`.

/// Top-level error for the engine binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: kismet_core::config::ConfigError,
    },

    /// The world could not be built from the configuration.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: kismet_core::world::WorldError,
    },

    /// The history could not be serialized.
    #[error("output error: {source}")]
    Output {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}

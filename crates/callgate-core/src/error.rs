//! Error types for the callgate core.
//!
//! `InvocationError` is what a wrapped object's method raises. The registry
//! never wraps or recovers it: `CallableObject::call` hands it back exactly as
//! the target produced it.

#[derive(Debug, thiserror::Error)]
pub enum InvocationError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Method failed: {0}")]
    Failed(String),

    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    #[error("No fallback handler for method: {0}")]
    NoFallback(String),
}

/// Errors raised while loading a callable configuration document.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(String),
}

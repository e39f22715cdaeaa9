//! Error types for glue rendering.

use thiserror::Error;

/// Failures while rendering host-page glue.
#[derive(Debug, Error)]
pub enum GlueError {
    /// Anchor ids must be usable both as element ids and inside scripts.
    #[error("invalid anchor id '{id}'")]
    InvalidAnchorId {
        /// Id supplied by the caller.
        id: String,
    },
    /// The bundle namespace must be a plain JavaScript identifier.
    #[error("invalid bundle namespace '{namespace}'")]
    InvalidNamespace {
        /// Namespace supplied by configuration.
        namespace: String,
    },
    /// The props bundle could not be serialised.
    #[error("failed to serialise props bundle")]
    Serialize {
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience alias for glue results.
pub type Result<T> = std::result::Result<T, GlueError>;

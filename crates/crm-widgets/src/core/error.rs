//! Errors raised at the mount boundary.

use thiserror::Error;

/// Failures a mount call can report to the host page.
///
/// Malformed props are not errors; they degrade to widget defaults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    /// The anchor did not resolve to an element.
    #[error("mount target not found: '{selector}'")]
    MountTargetNotFound {
        /// Selector (or description of the value) supplied as anchor.
        selector: String,
    },
    /// No factory is registered under the requested name.
    #[error("unknown widget kind '{kind}'")]
    UnknownWidget {
        /// Name supplied by the caller.
        kind: String,
    },
    /// A factory was registered twice under the same name.
    #[error("widget kind '{kind}' is already registered")]
    DuplicateWidget {
        /// Name registered twice.
        kind: String,
    },
}

impl MountError {
    /// Stable name surfaced as the JS error `name`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MountTargetNotFound { .. } => "MountTargetNotFound",
            Self::UnknownWidget { .. } => "UnknownWidget",
            Self::DuplicateWidget { .. } => "DuplicateWidget",
        }
    }
}

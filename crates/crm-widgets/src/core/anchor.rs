//! Mount points and the document they are resolved against.

use crate::core::error::MountError;

/// Read access to the page a widget is mounted into.
///
/// The wasm build implements this over `web_sys::Document`; tests use an
/// in-memory tree.
pub trait Document {
    /// Element handle a widget renders into.
    type Node;

    /// First node matching `selector`, if any.
    fn query(&self, selector: &str) -> Option<Self::Node>;

    /// Flag `node` as holding a widget so page scans skip it.
    fn mark_mounted(&self, node: &Self::Node);
}

/// Where a widget should be mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anchor<N> {
    /// CSS selector resolved against the document at mount time.
    Selector(String),
    /// Element reference handed over by the host page.
    Node(N),
}

impl<N> Anchor<N> {
    /// Resolve the anchor to a node. Selectors are looked up once; there is
    /// no retry or polling.
    ///
    /// # Errors
    ///
    /// Returns [`MountError::MountTargetNotFound`] when the selector is blank
    /// or matches nothing.
    pub fn resolve<D>(self, document: &D) -> Result<N, MountError>
    where
        D: Document<Node = N>,
    {
        match self {
            Self::Node(node) => Ok(node),
            Self::Selector(selector) => {
                let trimmed = selector.trim();
                if trimmed.is_empty() {
                    return Err(MountError::MountTargetNotFound { selector });
                }
                document
                    .query(trimmed)
                    .ok_or(MountError::MountTargetNotFound { selector })
            }
        }
    }
}

impl<N> From<&str> for Anchor<N> {
    fn from(selector: &str) -> Self {
        Self::Selector(selector.to_string())
    }
}

impl<N> From<String> for Anchor<N> {
    fn from(selector: String) -> Self {
        Self::Selector(selector)
    }
}

//! Resource identifiers as they appear in props bundles and form posts.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Identifier of a server-side resource.
///
/// The server embeds integer ids while form posts carry strings, so both
/// shapes are accepted. Two ids refer to the same resource when their form
/// values match, see [`ResourceId::same_resource`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    /// Numeric id as emitted by the server.
    Number(i64),
    /// Textual id, e.g. echoed back from a form.
    Text(String),
}

impl ResourceId {
    /// Value posted back to the server for this id.
    #[must_use]
    pub fn form_value(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value.trim().to_string(),
        }
    }

    /// Whether both ids name the same resource regardless of representation.
    #[must_use]
    pub fn same_resource(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            _ => self.form_value() == other.form_value(),
        }
    }
}

impl Display for ResourceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.form_value())
    }
}

impl From<i64> for ResourceId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ResourceId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

//! Registry names and exported entry points for each widget type.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Widget types the bundle knows how to mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetKind {
    /// Single-choice selector over a list of resources.
    ResourceSelect,
    /// Table of related resources with row selection and actions.
    ResourceTable,
    /// Date input driven by an open configuration bundle.
    DatePicker,
}

impl WidgetKind {
    /// Every widget kind, in registration order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::ResourceSelect, Self::ResourceTable, Self::DatePicker]
    }

    /// Registry name used in `data-crm-widget` attributes and generic mount calls.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ResourceSelect => "resource-select",
            Self::ResourceTable => "resource-table",
            Self::DatePicker => "date-picker",
        }
    }

    /// Name of the function the bundle exports for this kind.
    #[must_use]
    pub const fn entry_point(self) -> &'static str {
        match self {
            Self::ResourceSelect => "createResourceSelect",
            Self::ResourceTable => "createResourceTable",
            Self::DatePicker => "createDatePicker",
        }
    }

    /// Resolve a registry name back to its kind.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|kind| kind.as_str() == name.trim())
    }
}

impl Display for WidgetKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known widget kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown widget kind '{name}'")]
pub struct ParseWidgetKindError {
    /// Name supplied by the caller.
    pub name: String,
}

impl FromStr for WidgetKind {
    type Err = ParseWidgetKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseWidgetKindError {
            name: s.to_string(),
        })
    }
}

//! Props for the resource selector widget.

use serde::{Deserialize, Serialize};

use crate::decode::{FieldReader, PropsBundle};
use crate::id::ResourceId;

/// One selectable resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceOption {
    /// Resource id posted when this option is chosen.
    pub id: ResourceId,
    /// Text shown to the user.
    #[serde(alias = "title", default)]
    pub label: String,
    /// Resource type name, informational only.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

impl ResourceOption {
    /// Build an option without a type tag.
    #[must_use]
    pub fn new(id: impl Into<ResourceId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            resource_type: None,
        }
    }
}

/// Props bundle for `resource-select`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSelectBundle {
    /// Form field name carried by the `<select>`.
    #[serde(default)]
    pub name: String,
    /// Options in display order.
    #[serde(default)]
    pub options: Vec<ResourceOption>,
    /// Id selected on first render, if any.
    #[serde(default)]
    pub initial_selection: Option<ResourceId>,
}

impl ResourceSelectBundle {
    /// The option matching `initial_selection`, ignoring dangling ids.
    #[must_use]
    pub fn selected_option(&self) -> Option<&ResourceOption> {
        let selection = self.initial_selection.as_ref()?;
        self.options
            .iter()
            .find(|option| option.id.same_resource(selection))
    }
}

impl PropsBundle for ResourceSelectBundle {
    fn read(reader: &mut FieldReader<'_>) -> Self {
        Self {
            name: reader.or_default("name", &[]),
            options: reader.list("options", &[]),
            initial_selection: reader.optional("initialSelection", &["initial_selection", "value"]),
        }
    }
}

//! Props for the resource table widget.

use serde::{Deserialize, Serialize};

use crate::decode::{FieldReader, PropsBundle};
use crate::id::ResourceId;

/// One related resource listed in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Resource id posted when the row is selected.
    pub id: ResourceId,
    /// Display title of the resource.
    #[serde(alias = "label", default)]
    pub title: String,
}

impl TableRow {
    /// Build a row.
    #[must_use]
    pub fn new(id: impl Into<ResourceId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Props bundle for `resource-table`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceTableBundle {
    /// Form field the table belongs to; prefixes every form input it manages.
    #[serde(default)]
    pub field_name: String,
    /// Type name of the listed resources, shown in the header.
    #[serde(default)]
    pub resource_type: String,
    /// Rows in display order.
    #[serde(default)]
    pub rows: Vec<TableRow>,
}

impl PropsBundle for ResourceTableBundle {
    fn read(reader: &mut FieldReader<'_>) -> Self {
        Self {
            field_name: reader.or_default("fieldName", &["field_name", "name"]),
            resource_type: reader.or_default("resourceType", &["resource_type", "type"]),
            rows: reader.list("rows", &["value"]),
        }
    }
}

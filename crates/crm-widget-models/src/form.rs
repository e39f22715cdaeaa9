//! Form-field conventions shared with the server.
//!
//! A field posts its value under its own name. Extra arguments for the same
//! field are posted as `"{field}.{argument}"`, and multi-valued arguments
//! are joined with `,`.

use crate::id::ResourceId;

/// Separator between a field name and one of its arguments.
pub const ARGUMENT_SEPARATOR: char = '.';

/// Separator used when several ids are posted in one argument.
pub const ID_SEPARATOR: char = ',';

/// Argument carrying the selected table rows.
pub const SELECTED_ARGUMENT: &str = "selected";

/// Argument naming the table action a submit button triggers.
pub const ACTION_ARGUMENT: &str = "action";

/// Form input name for an argument of `field`.
#[must_use]
pub fn argument_name(field: &str, argument: &str) -> String {
    format!("{field}{ARGUMENT_SEPARATOR}{argument}")
}

/// Join ids into a single form value.
#[must_use]
pub fn join_ids<'a>(ids: impl IntoIterator<Item = &'a ResourceId>) -> String {
    ids.into_iter()
        .map(ResourceId::form_value)
        .collect::<Vec<_>>()
        .join(&ID_SEPARATOR.to_string())
}

/// Split a joined form value back into ids, dropping empty segments.
#[must_use]
pub fn split_ids(value: &str) -> Vec<ResourceId> {
    value
        .split(ID_SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(ResourceId::from)
        .collect()
}

/// Actions a resource table can ask the server to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    /// Create a new related resource and return to this form.
    CreateNew,
    /// Detach the selected rows.
    RemoveSelected,
}

impl TableAction {
    /// Value posted by the submit button.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateNew => "create_new",
            Self::RemoveSelected => "remove_selected",
        }
    }
}

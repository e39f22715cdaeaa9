//! Selection state and view model for the resource table.

use std::collections::BTreeSet;

use crm_widget_models::form::{ACTION_ARGUMENT, ID_SEPARATOR, SELECTED_ARGUMENT, argument_name};
use crm_widget_models::{ResourceTableBundle, TableRow};

/// Selected rows, keyed by the row's form value.
pub type Selection = BTreeSet<String>;

/// One rendered table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRowView {
    /// Form value of the row id.
    pub value: String,
    /// Display title.
    pub title: String,
    /// Whether the row checkbox is ticked.
    pub selected: bool,
}

/// Everything the table renders for a given selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableView {
    /// Field the table is scoped to.
    pub field_name: String,
    /// Header text.
    pub resource_type: String,
    /// Name of the hidden input carrying the selection.
    pub selected_input_name: String,
    /// Selected ids joined in row order.
    pub selected_value: String,
    /// Name shared by the action submit buttons.
    pub action_input_name: String,
    /// Rows in display order.
    pub rows: Vec<TableRowView>,
    /// Whether every row is selected (false for an empty table).
    pub all_selected: bool,
    /// Message shown instead of rows when the table is empty.
    pub empty_message: Option<String>,
    /// Whether the remove action is unavailable.
    pub remove_disabled: bool,
}

/// Toggle the presence of `id` in the selection.
#[must_use]
pub fn toggle_selection(selection: &Selection, id: &str) -> Selection {
    let mut next = selection.clone();
    if !next.remove(id) {
        next.insert(id.to_string());
    }
    next
}

/// Select every row, or clear when every row is already selected.
#[must_use]
pub fn select_all_or_clear(selection: &Selection, rows: &[TableRow]) -> Selection {
    let all: Selection = rows.iter().map(|row| row.id.form_value()).collect();
    if !all.is_empty() && all.is_subset(selection) {
        Selection::new()
    } else {
        all
    }
}

/// Selected ids in row order, joined for the form post.
#[must_use]
pub fn selected_form_value(rows: &[TableRow], selection: &Selection) -> String {
    rows.iter()
        .map(|row| row.id.form_value())
        .filter(|value| selection.contains(value))
        .collect::<Vec<_>>()
        .join(&ID_SEPARATOR.to_string())
}

/// Build the view for `selection`. Ids no longer present in `rows` are ignored.
#[must_use]
pub fn table_view(bundle: &ResourceTableBundle, selection: &Selection) -> TableView {
    let rows: Vec<TableRowView> = bundle
        .rows
        .iter()
        .map(|row| {
            let value = row.id.form_value();
            TableRowView {
                selected: selection.contains(&value),
                value,
                title: row.title.clone(),
            }
        })
        .collect();
    let selected_value = selected_form_value(&bundle.rows, selection);
    let all_selected = !rows.is_empty() && rows.iter().all(|row| row.selected);
    let empty_message = rows.is_empty().then(|| empty_state_text(&bundle.resource_type));
    TableView {
        field_name: bundle.field_name.clone(),
        resource_type: bundle.resource_type.clone(),
        selected_input_name: argument_name(&bundle.field_name, SELECTED_ARGUMENT),
        remove_disabled: selected_value.is_empty(),
        selected_value,
        action_input_name: argument_name(&bundle.field_name, ACTION_ARGUMENT),
        rows,
        all_selected,
        empty_message,
    }
}

fn empty_state_text(resource_type: &str) -> String {
    if resource_type.trim().is_empty() {
        "No entries".to_string()
    } else {
        format!("No {resource_type} entries")
    }
}

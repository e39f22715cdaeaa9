//! View model for the resource selector.

use crm_widget_models::ResourceSelectBundle;

/// Option count above which the selector shows a filter input.
pub const FILTER_THRESHOLD: usize = 8;

/// One rendered `<option>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOptionView {
    /// Posted value (the resource id).
    pub value: String,
    /// Visible label.
    pub label: String,
    /// Whether this option is the current selection.
    pub selected: bool,
}

/// Everything the selector renders for a given state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectView {
    /// Form field name of the `<select>`.
    pub name: String,
    /// Whether the empty placeholder option is selected.
    pub placeholder_selected: bool,
    /// Options visible under the current filter.
    pub options: Vec<SelectOptionView>,
    /// Whether the filter input is shown at all.
    pub show_filter: bool,
}

/// Initial selection as a form value, ignoring ids that match no option.
#[must_use]
pub fn initial_value(bundle: &ResourceSelectBundle) -> Option<String> {
    bundle.selected_option().map(|option| option.id.form_value())
}

/// Case-insensitive substring match; an empty filter matches everything.
#[must_use]
pub fn matches_filter(label: &str, filter: &str) -> bool {
    let filter = filter.trim();
    filter.is_empty() || label.to_lowercase().contains(&filter.to_lowercase())
}

/// Build the view for `selected` (a form value) under `filter`.
///
/// The selected option stays visible even when the filter excludes it, so
/// filtering never silently changes what the form posts.
#[must_use]
pub fn select_view(
    bundle: &ResourceSelectBundle,
    selected: Option<&str>,
    filter: &str,
) -> SelectView {
    let show_filter = bundle.options.len() > FILTER_THRESHOLD;
    let filter = if show_filter { filter } else { "" };
    let mut any_selected = false;
    let options = bundle
        .options
        .iter()
        .filter_map(|option| {
            let value = option.id.form_value();
            let is_selected = !any_selected && selected == Some(value.as_str());
            if !is_selected && !matches_filter(&option.label, filter) {
                return None;
            }
            any_selected |= is_selected;
            Some(SelectOptionView {
                value,
                label: option.label.clone(),
                selected: is_selected,
            })
        })
        .collect();
    SelectView {
        name: bundle.name.clone(),
        placeholder_selected: !any_selected,
        options,
        show_filter,
    }
}

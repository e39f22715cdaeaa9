//! Resource table: related resources with row selection and form actions.
//!
//! # Design
//! - Selection lives in the component; the form sees it through the hidden
//!   `{field}.selected` input, joined in row order.
//! - Actions are plain submit buttons named `{field}.action`, so the server
//!   handles them in the same post as every other field.

use crate::core::table::{Selection, select_all_or_clear, table_view, toggle_selection};
use crm_widget_models::ResourceTableBundle;
use crm_widget_models::form::TableAction;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ResourceTableProps {
    pub(crate) bundle: ResourceTableBundle,
}

#[function_component(ResourceTable)]
pub(crate) fn resource_table(props: &ResourceTableProps) -> Html {
    let selection = use_state(Selection::new);
    let view = table_view(&props.bundle, &selection);

    let on_toggle_all = {
        let selection = selection.clone();
        let rows = props.bundle.rows.clone();
        Callback::from(move |_event: Event| {
            selection.set(select_all_or_clear(&selection, &rows));
        })
    };

    let empty_row = view
        .empty_message
        .clone()
        .map(|message| {
            html! {
                <tr>
                    <td colspan="2" class="text-muted text-center">{message}</td>
                </tr>
            }
        })
        .unwrap_or_default();

    html! {
        <div class="crm-resource-table" data-field={view.field_name.clone()}>
            <input
                type="hidden"
                name={view.selected_input_name.clone()}
                value={view.selected_value.clone()}
            />
            <table class="table table-sm align-middle">
                <thead>
                    <tr>
                        <th class="w-auto">
                            <input
                                type="checkbox"
                                class="form-check-input"
                                aria-label="Select all"
                                checked={view.all_selected}
                                disabled={view.rows.is_empty()}
                                onchange={on_toggle_all}
                            />
                        </th>
                        <th>{view.resource_type.clone()}</th>
                    </tr>
                </thead>
                <tbody>
                    {empty_row}
                    {for view.rows.iter().map(|row| {
                        let onchange = {
                            let selection = selection.clone();
                            let id = row.value.clone();
                            Callback::from(move |_event: Event| {
                                selection.set(toggle_selection(&selection, &id));
                            })
                        };
                        html! {
                            <tr class={classes!(row.selected.then_some("table-active"))}>
                                <td>
                                    <input
                                        type="checkbox"
                                        class="form-check-input"
                                        aria-label={format!("Select {}", row.title)}
                                        checked={row.selected}
                                        onchange={onchange}
                                    />
                                </td>
                                <td>{row.title.clone()}</td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
            <div class="btn-group btn-group-sm" role="group">
                <button
                    type="submit"
                    class="btn btn-outline-primary"
                    name={view.action_input_name.clone()}
                    value={TableAction::CreateNew.as_str()}
                >
                    {"Create new"}
                </button>
                <button
                    type="submit"
                    class="btn btn-outline-danger"
                    name={view.action_input_name.clone()}
                    value={TableAction::RemoveSelected.as_str()}
                    disabled={view.remove_disabled}
                >
                    {"Remove selected"}
                </button>
            </div>
        </div>
    }
}

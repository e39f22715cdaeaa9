//! Resource selector: a named `<select>` over server-provided resources.
//!
//! # Design
//! - The `<select>` carries the field name, so the form posts the chosen id
//!   (or `""`) without any hidden input.
//! - Long option lists get a filter input; the current choice stays visible.

use crate::core::select::{initial_value, select_view};
use crm_widget_models::ResourceSelectBundle;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ResourceSelectProps {
    pub(crate) bundle: ResourceSelectBundle,
}

#[function_component(ResourceSelect)]
pub(crate) fn resource_select(props: &ResourceSelectProps) -> Html {
    let selected = {
        let bundle = props.bundle.clone();
        use_state(move || initial_value(&bundle))
    };
    let filter = use_state(String::new);
    let view = select_view(&props.bundle, selected.as_deref(), filter.as_str());

    let onchange = {
        let selected = selected.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                let value = target.value();
                selected.set((!value.is_empty()).then_some(value));
            }
        })
    };
    let oninput = {
        let filter = filter.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                filter.set(input.value());
            }
        })
    };

    let filter_input = view
        .show_filter
        .then(|| {
            html! {
                <input
                    type="search"
                    class="form-control form-control-sm mb-1"
                    placeholder="Filter"
                    aria-label="Filter options"
                    value={(*filter).clone()}
                    oninput={oninput}
                />
            }
        })
        .unwrap_or_default();

    html! {
        <div class="crm-resource-select">
            {filter_input}
            <select class="form-select" name={view.name.clone()} onchange={onchange}>
                <option value="" selected={view.placeholder_selected}>{"(none)"}</option>
                {for view.options.iter().map(|option| html! {
                    <option value={option.value.clone()} selected={option.selected}>
                        {option.label.clone()}
                    </option>
                })}
            </select>
        </div>
    }
}

//! Date picker: a native date input driven by an open config bundle.

use crate::core::date::{can_clear, date_input_view};
use crm_widget_models::DatePickerConfig;
use gloo::console;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct DatePickerProps {
    pub(crate) config: DatePickerConfig,
}

#[function_component(DatePicker)]
pub(crate) fn date_picker(props: &DatePickerProps) -> Html {
    let view = date_input_view(&props.config);
    let value = {
        let initial = view.initial_value.clone();
        use_state(move || initial)
    };
    let input_ref = use_node_ref();

    {
        let input_ref = input_ref.clone();
        use_effect_with_deps(
            move |attributes: &Vec<(String, String)>| {
                if let Some(input) = input_ref.cast::<web_sys::Element>() {
                    for (name, value) in attributes {
                        if let Err(err) = input.set_attribute(name, value) {
                            console::warn!("date picker attribute rejected", name.as_str(), err);
                        }
                    }
                }
                || ()
            },
            view.attributes.clone(),
        );
    }

    let oninput = {
        let value = value.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                value.set(input.value());
            }
        })
    };
    let onclear = {
        let value = value.clone();
        Callback::from(move |_event: MouseEvent| value.set(String::new()))
    };

    let label = view
        .label
        .clone()
        .map(|text| html! { <label class="form-label">{text}</label> })
        .unwrap_or_default();

    html! {
        <div class="crm-date-picker">
            {label}
            <div class="input-group">
                <input
                    type="date"
                    class="form-control"
                    name={view.name.clone()}
                    value={(*value).clone()}
                    min={view.min.clone()}
                    max={view.max.clone()}
                    placeholder={view.placeholder.clone()}
                    required={view.required}
                    disabled={view.disabled}
                    oninput={oninput}
                    ref={input_ref}
                />
                <button
                    type="button"
                    class="btn btn-outline-secondary"
                    aria-label="Clear date"
                    disabled={!can_clear(&view, value.as_str())}
                    onclick={onclear}
                >
                    {"Clear"}
                </button>
            </div>
        </div>
    }
}

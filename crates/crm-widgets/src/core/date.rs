//! View model for the date picker.

use crm_widget_models::DatePickerConfig;
use crm_widget_models::date::format_date;

/// Static attributes of the rendered `<input type="date">`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateInputView {
    /// Form field name.
    pub name: Option<String>,
    /// Value on first render (`""` for no date).
    pub initial_value: String,
    /// Lower bound as `YYYY-MM-DD`.
    pub min: Option<String>,
    /// Upper bound as `YYYY-MM-DD`.
    pub max: Option<String>,
    /// Placeholder text.
    pub placeholder: Option<String>,
    /// Label rendered above the input.
    pub label: Option<String>,
    /// Whether a value is required.
    pub required: bool,
    /// Whether the input is disabled.
    pub disabled: bool,
    /// Extra attributes forwarded from the config.
    pub attributes: Vec<(String, String)>,
}

/// Build the input view for `config`.
#[must_use]
pub fn date_input_view(config: &DatePickerConfig) -> DateInputView {
    DateInputView {
        name: config.name.clone().filter(|name| !name.trim().is_empty()),
        initial_value: config.value_text(),
        min: config.min.map(format_date),
        max: config.max.map(format_date),
        placeholder: config.placeholder.clone(),
        label: config.label.clone(),
        required: config.required,
        disabled: config.disabled,
        attributes: config.passthrough_attributes(),
    }
}

/// Whether the clear button can be used for `current`.
#[must_use]
pub const fn can_clear(view: &DateInputView, current: &str) -> bool {
    !view.disabled && !current.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crm_widget_models::decode_bundle;
    use serde_json::json;

    #[test]
    fn arbitrary_config_is_reflected() {
        let config = decode_bundle::<DatePickerConfig>(json!({
            "name": "start_date",
            "value": "2024-05-17T09:30:00",
            "min": "2024-01-01",
            "label": "Start",
            "data-week-start": "monday"
        }))
        .bundle;
        let view = date_input_view(&config);
        assert_eq!(view.name.as_deref(), Some("start_date"));
        assert_eq!(view.initial_value, "2024-05-17");
        assert_eq!(view.min.as_deref(), Some("2024-01-01"));
        assert_eq!(view.max, None);
        assert_eq!(view.label.as_deref(), Some("Start"));
        assert_eq!(
            view.attributes,
            vec![("data-week-start".to_string(), "monday".to_string())]
        );
    }

    #[test]
    fn omitted_fields_fall_back_to_defaults() {
        let decoded = decode_bundle::<DatePickerConfig>(json!({ "name": "end_date" }));
        assert!(decoded.is_clean());
        let view = date_input_view(&decoded.bundle);
        assert_eq!(view.initial_value, "");
        assert_eq!(view.min, None);
        assert_eq!(view.placeholder, None);
        assert!(!view.required);
        assert!(!view.disabled);
        assert!(view.attributes.is_empty());
    }

    #[test]
    fn blank_name_is_not_rendered() {
        let config = DatePickerConfig {
            name: Some("  ".into()),
            ..DatePickerConfig::default()
        };
        assert_eq!(date_input_view(&config).name, None);
    }

    #[test]
    fn clear_requires_a_value_and_an_enabled_input() {
        let mut view = date_input_view(&DatePickerConfig::default());
        assert!(!can_clear(&view, ""));
        assert!(can_clear(&view, "2024-01-01"));
        view.disabled = true;
        assert!(!can_clear(&view, "2024-01-01"));
    }
}

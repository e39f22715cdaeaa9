//! Open configuration bundle for the date picker widget.
//!
//! # Design
//! - Known keys drive the `<input type="date">`; every other key is kept
//!   verbatim and forwarded as an attribute when it is safe to do so.
//! - Dates are ISO `YYYY-MM-DD`. Date-time strings are reduced to their date
//!   because the server stores `DateTime` columns but edits whole days.
//! - An empty value means "no date", matching how the server clears the field.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::decode::{FieldReader, PropsBundle};

/// Date format used on the wire and by `<input type="date">`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const KNOWN_KEYS: [&str; 8] = [
    "name",
    "value",
    "min",
    "max",
    "placeholder",
    "label",
    "required",
    "disabled",
];

const RESERVED_ATTRIBUTES: [&str; 9] = [
    "type",
    "name",
    "value",
    "min",
    "max",
    "placeholder",
    "required",
    "disabled",
    "class",
];

/// Props bundle for `date-picker`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatePickerConfig {
    /// Form field name of the input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Initial date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<NaiveDate>,
    /// Earliest selectable date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<NaiveDate>,
    /// Latest selectable date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<NaiveDate>,
    /// Placeholder text for browsers without a native date control.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Visible label rendered above the input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Whether the field must be filled before submit.
    #[serde(default)]
    pub required: bool,
    /// Whether the input is read-only for this user.
    #[serde(default)]
    pub disabled: bool,
    /// Keys this crate does not interpret, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DatePickerConfig {
    /// Initial value as posted by the form (`""` when unset).
    #[must_use]
    pub fn value_text(&self) -> String {
        self.value.map(format_date).unwrap_or_default()
    }

    /// Extra keys that can be set as attributes on the input, sorted by key.
    ///
    /// Strings and numbers are forwarded as-is and `true` becomes an empty
    /// (present) attribute. `false`, `null`, arrays, objects, reserved names,
    /// event handlers and invalid attribute names are skipped.
    #[must_use]
    pub fn passthrough_attributes(&self) -> Vec<(String, String)> {
        let mut attributes: Vec<(String, String)> = self
            .extra
            .iter()
            .filter(|(key, _)| is_forwardable_attribute(key))
            .filter_map(|(key, value)| {
                let rendered = match value {
                    Value::String(text) => text.clone(),
                    Value::Number(number) => number.to_string(),
                    Value::Bool(true) => String::new(),
                    _ => return None,
                };
                Some((key.clone(), rendered))
            })
            .collect();
        attributes.sort_by(|a, b| a.0.cmp(&b.0));
        attributes
    }
}

impl PropsBundle for DatePickerConfig {
    fn read(reader: &mut FieldReader<'_>) -> Self {
        let name = reader.optional("name", &[]);
        let value = read_date(reader, "value");
        let mut min = read_date(reader, "min");
        let mut max = read_date(reader, "max");
        if let (Some(lower), Some(upper)) = (min, max)
            && lower > upper
        {
            reader.report("min", format!("{lower} is after max {upper}; bounds ignored"));
            min = None;
            max = None;
        }
        let extra = reader
            .fields()
            .iter()
            .filter(|(key, _)| !KNOWN_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Self {
            name,
            value,
            min,
            max,
            placeholder: reader.optional("placeholder", &[]),
            label: reader.optional("label", &[]),
            required: reader.or_default("required", &[]),
            disabled: reader.or_default("disabled", &[]),
            extra,
        }
    }
}

/// Parse an ISO date or date-time string, keeping only the date.
///
/// Returns `None` for empty input and for anything unparseable.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }
    let (day, rest) = raw.split_at_checked(10)?;
    if rest.starts_with(['T', ' ']) {
        return NaiveDate::parse_from_str(day, DATE_FORMAT).ok();
    }
    None
}

/// Format a date the way `<input type="date">` expects.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn read_date(reader: &mut FieldReader<'_>, key: &str) -> Option<NaiveDate> {
    let raw: String = reader.optional(key, &[])?;
    let parsed = parse_date(&raw);
    if parsed.is_none() && !raw.trim().is_empty() {
        reader.report(key, format!("'{raw}' is not an ISO date"));
    }
    parsed
}

fn is_forwardable_attribute(key: &str) -> bool {
    let mut chars = key.chars();
    let valid_name = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'));
    if !valid_name {
        return false;
    }
    let lower = key.to_ascii_lowercase();
    !lower.starts_with("on") && !RESERVED_ATTRIBUTES.contains(&lower.as_str())
}

//! Lenient decoding of props bundles.
//!
//! # Design
//! - A mount never fails because of its props: missing or mistyped fields
//!   fall back to their defaults and are reported as [`PropsProblem`]s.
//! - List fields decode element by element so one bad row does not empty
//!   the whole widget.
//! - Missing fields and explicit `null` are not problems.

use std::fmt::{self, Display, Formatter};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A field that could not be decoded and was replaced by its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropsProblem {
    /// Path of the offending field, e.g. `options[2]`.
    pub field: String,
    /// Human-readable reason.
    pub message: String,
}

impl PropsProblem {
    pub(crate) fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl Display for PropsProblem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

/// Outcome of [`decode_bundle`]: always a usable bundle plus what was dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    /// The decoded bundle with defaults substituted for bad fields.
    pub bundle: T,
    /// Fields that were replaced by defaults.
    pub problems: Vec<PropsProblem>,
}

impl<T> Decoded<T> {
    /// Whether the payload decoded without substitutions.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }
}

/// A props bundle that can be assembled field by field from a JSON object.
pub trait PropsBundle: Default {
    /// Build the bundle from the object's fields, recording problems on `reader`.
    fn read(reader: &mut FieldReader<'_>) -> Self;
}

/// Decode `value` into `T`, never failing.
#[must_use]
pub fn decode_bundle<T: PropsBundle>(value: Value) -> Decoded<T> {
    let mut problems = Vec::new();
    let bundle = match value {
        Value::Object(fields) => {
            let mut reader = FieldReader::new(&fields, &mut problems);
            T::read(&mut reader)
        }
        Value::Null => {
            problems.push(PropsProblem::new("", "props bundle missing"));
            T::default()
        }
        other => {
            problems.push(PropsProblem::new(
                "",
                format!("expected an object, found {}", json_kind(&other)),
            ));
            T::default()
        }
    };
    Decoded { bundle, problems }
}

/// Typed access to the fields of a props object.
pub struct FieldReader<'a> {
    fields: &'a Map<String, Value>,
    problems: &'a mut Vec<PropsProblem>,
}

impl<'a> FieldReader<'a> {
    pub(crate) const fn new(
        fields: &'a Map<String, Value>,
        problems: &'a mut Vec<PropsProblem>,
    ) -> Self {
        Self { fields, problems }
    }

    /// All raw fields of the object.
    #[must_use]
    pub const fn fields(&self) -> &'a Map<String, Value> {
        self.fields
    }

    /// Record a problem found while post-processing decoded fields.
    pub fn report(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.problems.push(PropsProblem::new(field, message));
    }

    /// Decode an optional field, trying `key` then each alias.
    pub fn optional<T: DeserializeOwned>(&mut self, key: &str, aliases: &[&str]) -> Option<T> {
        let (name, raw) = self.lookup(key, aliases)?;
        if raw.is_null() {
            return None;
        }
        match serde_json::from_value(raw.clone()) {
            Ok(value) => Some(value),
            Err(err) => {
                self.report(name, err.to_string());
                None
            }
        }
    }

    /// Decode a field or fall back to `T::default()`.
    pub fn or_default<T: DeserializeOwned + Default>(&mut self, key: &str, aliases: &[&str]) -> T {
        self.optional(key, aliases).unwrap_or_default()
    }

    /// Decode a list field element by element, skipping bad elements.
    pub fn list<T: DeserializeOwned>(&mut self, key: &str, aliases: &[&str]) -> Vec<T> {
        let Some((name, raw)) = self.lookup(key, aliases) else {
            return Vec::new();
        };
        let items = match raw {
            Value::Array(items) => items,
            Value::Null => return Vec::new(),
            other => {
                self.report(
                    name,
                    format!("expected an array, found {}", json_kind(other)),
                );
                return Vec::new();
            }
        };
        let mut decoded = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match serde_json::from_value(item.clone()) {
                Ok(value) => decoded.push(value),
                Err(err) => self.report(format!("{name}[{index}]"), err.to_string()),
            }
        }
        decoded
    }

    fn lookup(&self, key: &str, aliases: &[&str]) -> Option<(String, &'a Value)> {
        std::iter::once(key)
            .chain(aliases.iter().copied())
            .find_map(|name| self.fields.get(name).map(|value| (name.to_string(), value)))
    }
}

pub(crate) const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

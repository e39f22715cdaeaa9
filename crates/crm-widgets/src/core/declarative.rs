//! Props lookup for anchors declared in markup and mounted by a page scan.
//!
//! An anchor carries its props either inline (`data-crm-props`) or by
//! reference to a `<script type="application/json">` element
//! (`data-crm-props-ref`). Problems never stop the mount: the widget gets a
//! `null` bundle and renders its defaults.

use serde_json::Value;

/// Where a declared anchor keeps its props bundle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeclaredProps {
    /// JSON text from the anchor's own attribute.
    Inline(String),
    /// JSON text of the referenced script element, `None` when it is missing.
    Reference {
        /// Referenced element id.
        id: String,
        /// Text content of the element.
        text: Option<String>,
    },
    /// The anchor declares no props.
    Missing,
}

impl DeclaredProps {
    /// Pick the props source from the anchor's attributes. Inline props win.
    ///
    /// `lookup` is only called when the anchor references a script element.
    pub fn from_attributes(
        inline: Option<String>,
        reference: Option<String>,
        lookup: impl FnOnce(&str) -> Option<String>,
    ) -> Self {
        match (inline, reference) {
            (Some(text), _) => Self::Inline(text),
            (None, Some(id)) => {
                let text = lookup(&id);
                Self::Reference { id, text }
            }
            (None, None) => Self::Missing,
        }
    }

    /// Parse the bundle, returning `null` plus a problem description on failure.
    #[must_use]
    pub fn into_value(self) -> (Value, Option<String>) {
        match self {
            Self::Inline(text) => parse_or_null(&text, "inline props"),
            Self::Reference { id, text: Some(text) } => {
                parse_or_null(&text, &format!("props script '#{id}'"))
            }
            Self::Reference { id, text: None } => (
                Value::Null,
                Some(format!("props script '#{id}' not found")),
            ),
            Self::Missing => (Value::Null, None),
        }
    }
}

/// Parse a props bundle from JSON text.
///
/// # Errors
///
/// Returns the parser message when `text` is not valid JSON.
pub fn parse_props_text(text: &str) -> Result<Value, String> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|err| err.to_string())
}

fn parse_or_null(text: &str, source: &str) -> (Value, Option<String>) {
    match parse_props_text(text) {
        Ok(value) => (value, None),
        Err(err) => (Value::Null, Some(format!("{source} are not valid JSON: {err}"))),
    }
}

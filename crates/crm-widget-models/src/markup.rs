//! Attribute names shared by the declarative glue and the bundle's page scan.

/// Names the widget kind on an anchor element.
pub const WIDGET_ATTRIBUTE: &str = "data-crm-widget";

/// Inline JSON props bundle on an anchor element.
pub const PROPS_ATTRIBUTE: &str = "data-crm-props";

/// Id of a `<script type="application/json">` element holding the props bundle.
pub const PROPS_REF_ATTRIBUTE: &str = "data-crm-props-ref";

/// Set by the bundle once an anchor holds a widget instance.
pub const MOUNTED_ATTRIBUTE: &str = "data-crm-mounted";

/// CSS selector matching anchors that still wait for a widget.
#[must_use]
pub fn pending_anchor_selector() -> String {
    format!("[{WIDGET_ATTRIBUTE}]:not([{MOUNTED_ATTRIBUTE}])")
}

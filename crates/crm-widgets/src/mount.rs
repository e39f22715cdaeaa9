//! Browser entry points: the default registry and its `wasm-bindgen` exports.
//!
//! # Design
//! - Each widget kind has one exported function (`createResourceSelect`, ...)
//!   so templated glue can call it directly.
//! - The same factories back `WidgetRegistryHandle`, an explicit registry
//!   object for callers that prefer not to rely on module-level functions.
//! - Errors cross the boundary as thrown JS `Error`s named after the
//!   [`MountError`] variant; props problems are logged and never thrown.

use crate::components::{
    DatePicker, DatePickerProps, ResourceSelect, ResourceSelectProps, ResourceTable,
    ResourceTableProps,
};
use crate::core::declarative::parse_props_text;
use crate::core::{
    Anchor, DeclaredPage, Document, MountError, WidgetRegistry, mount_declared as scan_page,
};
use crm_widget_models::markup::{MOUNTED_ATTRIBUTE, pending_anchor_selector};
use crm_widget_models::{
    DatePickerConfig, PropsBundle, ResourceSelectBundle, ResourceTableBundle, WidgetKind,
    decode_bundle,
};
use gloo::console;
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

thread_local! {
    static DEFAULT_REGISTRY: WidgetRegistry<Element> = default_registry();
}

/// The page document as seen by the registry.
struct DomDocument {
    inner: web_sys::Document,
}

impl DomDocument {
    fn current() -> Self {
        Self {
            inner: gloo::utils::document(),
        }
    }
}

impl Document for DomDocument {
    type Node = Element;

    fn query(&self, selector: &str) -> Option<Element> {
        self.inner.query_selector(selector).ok().flatten()
    }

    fn mark_mounted(&self, node: &Element) {
        if let Err(err) = node.set_attribute(MOUNTED_ATTRIBUTE, "true") {
            console::warn!("could not mark anchor as mounted", err);
        }
    }
}

impl DeclaredPage for DomDocument {
    fn pending_anchors(&self) -> Vec<Element> {
        let anchors = match self.inner.query_selector_all(&pending_anchor_selector()) {
            Ok(anchors) => anchors,
            Err(err) => {
                console::error!("declared widget scan failed", err);
                return Vec::new();
            }
        };
        (0..anchors.length())
            .filter_map(|index| anchors.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn element_text(&self, id: &str) -> Option<String> {
        self.inner
            .get_element_by_id(id)
            .and_then(|element| element.text_content())
    }
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        let js_err = js_sys::Error::new(&err.to_string());
        js_err.set_name(err.name());
        js_err.into()
    }
}

fn default_registry() -> WidgetRegistry<Element> {
    let mut registry = WidgetRegistry::new();
    let outcome = registry
        .register(WidgetKind::ResourceSelect.as_str(), mount_resource_select)
        .and_then(|r| r.register(WidgetKind::ResourceTable.as_str(), mount_resource_table))
        .and_then(|r| r.register(WidgetKind::DatePicker.as_str(), mount_date_picker));
    if let Err(err) = outcome {
        console::error!("widget registration failed", err.to_string());
    }
    registry
}

fn mount_resource_select(anchor: Element, props: Value) {
    let bundle = decode_logged::<ResourceSelectBundle>(WidgetKind::ResourceSelect, props);
    yew::Renderer::<ResourceSelect>::with_root_and_props(anchor, ResourceSelectProps { bundle })
        .render();
}

fn mount_resource_table(anchor: Element, props: Value) {
    let bundle = decode_logged::<ResourceTableBundle>(WidgetKind::ResourceTable, props);
    yew::Renderer::<ResourceTable>::with_root_and_props(anchor, ResourceTableProps { bundle })
        .render();
}

fn mount_date_picker(anchor: Element, props: Value) {
    let config = decode_logged::<DatePickerConfig>(WidgetKind::DatePicker, props);
    yew::Renderer::<DatePicker>::with_root_and_props(anchor, DatePickerProps { config }).render();
}

fn decode_logged<T: PropsBundle>(kind: WidgetKind, props: Value) -> T {
    let decoded = decode_bundle::<T>(props);
    for problem in &decoded.problems {
        console::warn!(format!("{kind}: props bundle problem, using default: {problem}"));
    }
    decoded.bundle
}

fn anchor_from_js(value: JsValue) -> Result<Anchor<Element>, MountError> {
    if let Some(selector) = value.as_string() {
        return Ok(Anchor::Selector(selector));
    }
    value
        .dyn_into::<Element>()
        .map(Anchor::Node)
        .map_err(|other| MountError::MountTargetNotFound {
            selector: format!("{other:?}"),
        })
}

/// Convert a props argument to JSON. Strings are parsed as JSON text, other
/// values go through `JSON.stringify`; anything unusable becomes `null`.
fn props_from_js(value: &JsValue) -> Value {
    if value.is_undefined() || value.is_null() {
        return Value::Null;
    }
    let text = value.as_string().or_else(|| {
        js_sys::JSON::stringify(value).ok().map(String::from)
    });
    match text.as_deref().map(parse_props_text) {
        Some(Ok(json)) => json,
        Some(Err(err)) => {
            console::warn!("props bundle is not valid JSON", err);
            Value::Null
        }
        None => {
            console::warn!("props bundle could not be serialised");
            Value::Null
        }
    }
}

fn mount_js(
    registry: &WidgetRegistry<Element>,
    document: &DomDocument,
    kind: &str,
    anchor: JsValue,
    props: &JsValue,
) -> Result<(), JsValue> {
    let anchor = anchor_from_js(anchor)?;
    registry.mount(document, kind, anchor, props_from_js(props))?;
    console::debug!("mounted widget", kind);
    Ok(())
}

fn mount_with_default(kind: WidgetKind, anchor: JsValue, props: &JsValue) -> Result<(), JsValue> {
    DEFAULT_REGISTRY.with(|registry| {
        mount_js(registry, &DomDocument::current(), kind.as_str(), anchor, props)
    })
}

/// Mount every anchor declared with `data-crm-widget` that holds no widget yet.
fn mount_declared(registry: &WidgetRegistry<Element>, document: &DomDocument) -> u32 {
    let report = scan_page(registry, document);
    for problem in &report.problems {
        console::warn!(problem.as_str());
    }
    for err in &report.failures {
        console::error!("declared widget mount failed", err.to_string());
    }
    console::debug!("mounted declared widgets", report.mounted);
    report.mounted
}

/// Install the panic hook once the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Mount a resource selector at `anchor` (selector string or element).
///
/// # Errors
///
/// Throws `MountTargetNotFound` when the anchor does not resolve.
#[wasm_bindgen(js_name = createResourceSelect)]
pub fn create_resource_select(anchor: JsValue, props: JsValue) -> Result<(), JsValue> {
    mount_with_default(WidgetKind::ResourceSelect, anchor, &props)
}

/// Mount a resource table at `anchor` (selector string or element).
///
/// # Errors
///
/// Throws `MountTargetNotFound` when the anchor does not resolve.
#[wasm_bindgen(js_name = createResourceTable)]
pub fn create_resource_table(anchor: JsValue, props: JsValue) -> Result<(), JsValue> {
    mount_with_default(WidgetKind::ResourceTable, anchor, &props)
}

/// Mount a date picker at `anchor` (selector string or element).
///
/// # Errors
///
/// Throws `MountTargetNotFound` when the anchor does not resolve.
#[wasm_bindgen(js_name = createDatePicker)]
pub fn create_date_picker(anchor: JsValue, props: JsValue) -> Result<(), JsValue> {
    mount_with_default(WidgetKind::DatePicker, anchor, &props)
}

/// Mount every declared anchor on the page; returns how many were mounted.
#[wasm_bindgen(js_name = mountAll)]
#[must_use]
pub fn mount_all() -> u32 {
    DEFAULT_REGISTRY.with(|registry| mount_declared(registry, &DomDocument::current()))
}

/// Names accepted by the generic mount call.
#[wasm_bindgen(js_name = widgetKinds)]
#[must_use]
pub fn widget_kinds() -> js_sys::Array {
    DEFAULT_REGISTRY.with(kinds_array)
}

fn kinds_array(registry: &WidgetRegistry<Element>) -> js_sys::Array {
    registry.kinds().map(JsValue::from_str).collect()
}

/// An explicit registry instance for host code that passes it around.
#[wasm_bindgen]
pub struct WidgetRegistryHandle {
    registry: WidgetRegistry<Element>,
    document: DomDocument,
}

#[wasm_bindgen]
impl WidgetRegistryHandle {
    /// Registry with every built-in widget kind, bound to the current document.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: default_registry(),
            document: DomDocument::current(),
        }
    }

    /// Mount a widget of `kind` at `anchor`.
    ///
    /// # Errors
    ///
    /// Throws `UnknownWidget` for unregistered kinds and `MountTargetNotFound`
    /// when the anchor does not resolve.
    pub fn mount(&self, kind: &str, anchor: JsValue, props: JsValue) -> Result<(), JsValue> {
        mount_js(&self.registry, &self.document, kind, anchor, &props)
    }

    /// Registered widget names.
    #[must_use]
    pub fn kinds(&self) -> js_sys::Array {
        kinds_array(&self.registry)
    }

    /// Mount every declared anchor; returns how many were mounted.
    #[wasm_bindgen(js_name = mountAll)]
    #[must_use]
    pub fn mount_all(&self) -> u32 {
        mount_declared(&self.registry, &self.document)
    }
}

impl Default for WidgetRegistryHandle {
    fn default() -> Self {
        Self::new()
    }
}

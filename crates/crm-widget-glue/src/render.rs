//! HTML fragments that connect a server-rendered page to the widget bundle.
//!
//! # Design
//! - Props travel as inline `<script type="application/json">` elements, never
//!   as attribute values, so templates only need one escaping rule.
//! - Generated scripts pass the anchor element itself to the bundle; selectors
//!   never have to be escaped.
//! - Calls wait for the bundle's initialisation promise, so glue can appear
//!   anywhere after the bundle tags.

use std::fmt::{self, Display, Formatter};

use crm_widget_models::WidgetKind;
use crm_widget_models::markup::{PROPS_REF_ATTRIBUTE, WIDGET_ATTRIBUTE};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::GlueConfig;
use crate::error::{GlueError, Result};

/// The three parts of an explicit mount: anchor, props, call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountSnippet {
    /// Anchor element the widget renders into.
    pub anchor: String,
    /// Inline JSON props script.
    pub props_script: String,
    /// Script invoking the kind's entry point.
    pub call_script: String,
}

impl Display for MountSnippet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.anchor)?;
        writeln!(f, "{}", self.props_script)?;
        write!(f, "{}", self.call_script)
    }
}

/// Tags loading the bundle stylesheet, loader and wasm module.
///
/// # Errors
///
/// Returns [`GlueError::InvalidNamespace`] when the configured namespace
/// cannot be used in a script.
pub fn render_bundle_tags(config: &GlueConfig) -> Result<String> {
    config.validate()?;
    let mut tags = Vec::with_capacity(3);
    if let Some(stylesheet) = &config.bundle_stylesheet {
        tags.push(format!(
            r#"<link rel="stylesheet" href="{}">"#,
            escape_attribute(stylesheet)
        ));
    }
    tags.push(format!(
        r#"<script src="{}"></script>"#,
        escape_attribute(&config.bundle_script)
    ));
    tags.push(format!(
        "<script>window.{ready} = {namespace}({wasm});</script>",
        ready = config.ready_global(),
        namespace = config.namespace,
        wasm = script_safe_json(&config.bundle_wasm)?,
    ));
    Ok(tags.join("\n"))
}

/// Anchor, props script and an explicit call to `kind`'s entry point.
///
/// The anchor is a bare `<div>` without `data-crm-widget`, so a `mountAll`
/// scan on the same page never picks it up.
///
/// # Errors
///
/// Returns [`GlueError::InvalidAnchorId`] for unusable ids,
/// [`GlueError::InvalidNamespace`] for an unusable namespace and
/// [`GlueError::Serialize`] when `bundle` cannot be serialised.
pub fn render_mount<B: Serialize>(
    config: &GlueConfig,
    kind: WidgetKind,
    anchor_id: &str,
    bundle: &B,
) -> Result<MountSnippet> {
    config.validate()?;
    validate_anchor_id(anchor_id)?;
    let props_id = config.props_script_id(anchor_id);
    let snippet = MountSnippet {
        anchor: format!(r#"<div id="{anchor_id}"></div>"#),
        props_script: props_script(&props_id, bundle)?,
        call_script: format!(
            "<script>window.{ready}.then(function () {{ \
             {namespace}.{entry}(document.getElementById(\"{anchor_id}\"), \
             JSON.parse(document.getElementById(\"{props_id}\").textContent)); }});</script>",
            ready = config.ready_global(),
            namespace = config.namespace,
            entry = kind.entry_point(),
        ),
    };
    debug!(kind = %kind, anchor = anchor_id, "rendered widget mount");
    Ok(snippet)
}

/// Anchor and props script for the bundle's `mountAll` page scan.
///
/// The anchor carries `data-crm-mounted` only after the bundle mounted it,
/// so the markup can be emitted before or after the bundle loads.
///
/// # Errors
///
/// Same as [`render_mount`], minus the namespace check.
pub fn render_declarative<B: Serialize>(
    config: &GlueConfig,
    kind: WidgetKind,
    anchor_id: &str,
    bundle: &B,
) -> Result<String> {
    validate_anchor_id(anchor_id)?;
    let props_id = config.props_script_id(anchor_id);
    let anchor = format!(
        r#"<div id="{anchor_id}" {WIDGET_ATTRIBUTE}="{kind}" {PROPS_REF_ATTRIBUTE}="{props_id}"></div>"#
    );
    let script = props_script(&props_id, bundle)?;
    debug!(kind = %kind, anchor = anchor_id, "rendered declarative widget anchor");
    Ok(format!("{anchor}\n{script}"))
}

/// Serialise `value` as JSON that cannot terminate an enclosing `<script>`.
///
/// `<`, `>`, `&` and the JavaScript line separators are emitted as `\uXXXX`
/// escapes; they only ever occur inside JSON strings, so the output is still
/// valid JSON with the same meaning.
///
/// # Errors
///
/// Returns [`GlueError::Serialize`] when `value` cannot be serialised.
pub fn script_safe_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value).map_err(|source| GlueError::Serialize { source })?;
    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            other => escaped.push(other),
        }
    }
    Ok(escaped)
}

/// Anchor ids start with an ASCII letter and contain only ASCII
/// alphanumerics, `-` and `_`.
///
/// # Errors
///
/// Returns [`GlueError::InvalidAnchorId`] otherwise.
pub fn validate_anchor_id(anchor_id: &str) -> Result<()> {
    let mut chars = anchor_id.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'));
    if valid {
        Ok(())
    } else {
        warn!(anchor = anchor_id, "rejected widget anchor id");
        Err(GlueError::InvalidAnchorId {
            id: anchor_id.to_string(),
        })
    }
}

fn props_script<B: Serialize>(props_id: &str, bundle: &B) -> Result<String> {
    Ok(format!(
        r#"<script type="application/json" id="{props_id}">{}</script>"#,
        script_safe_json(bundle)?
    ))
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}

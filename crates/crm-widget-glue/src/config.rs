//! Where the bundle lives and under which global it is exposed.

use serde::{Deserialize, Serialize};

use crate::error::{GlueError, Result};

/// Environment variable overriding [`GlueConfig::namespace`].
pub const NAMESPACE_ENV: &str = "CRM_WIDGETS_NAMESPACE";
/// Environment variable overriding [`GlueConfig::bundle_script`].
pub const BUNDLE_SCRIPT_ENV: &str = "CRM_WIDGETS_BUNDLE_SCRIPT";
/// Environment variable overriding [`GlueConfig::bundle_wasm`].
pub const BUNDLE_WASM_ENV: &str = "CRM_WIDGETS_BUNDLE_WASM";
/// Environment variable overriding [`GlueConfig::bundle_stylesheet`]; empty disables it.
pub const BUNDLE_STYLESHEET_ENV: &str = "CRM_WIDGETS_BUNDLE_STYLESHEET";

/// Host-page glue configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlueConfig {
    /// Global the bundle's exports are reachable under.
    pub namespace: String,
    /// URL of the JavaScript loader.
    pub bundle_script: String,
    /// URL of the compiled wasm module.
    pub bundle_wasm: String,
    /// URL of the stylesheet, if the page should load one.
    pub bundle_stylesheet: Option<String>,
    /// Suffix appended to an anchor id to name its props script.
    pub props_suffix: String,
}

impl Default for GlueConfig {
    fn default() -> Self {
        Self {
            namespace: "crmWidgets".to_string(),
            bundle_script: "/static/crm_widgets.js".to_string(),
            bundle_wasm: "/static/crm_widgets_bg.wasm".to_string(),
            bundle_stylesheet: Some("/static/bundle.css".to_string()),
            props_suffix: "-props".to_string(),
        }
    }
}

impl GlueConfig {
    /// Defaults overridden by the `CRM_WIDGETS_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`GlueError::InvalidNamespace`] when the namespace override is
    /// not a JavaScript identifier.
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, keyed by the `*_ENV` constants.
    ///
    /// # Errors
    ///
    /// Returns [`GlueError::InvalidNamespace`] when the resulting namespace is
    /// not a JavaScript identifier.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(namespace) = lookup(NAMESPACE_ENV) {
            self.namespace = namespace.trim().to_string();
        }
        if let Some(script) = lookup(BUNDLE_SCRIPT_ENV) {
            self.bundle_script = script;
        }
        if let Some(wasm) = lookup(BUNDLE_WASM_ENV) {
            self.bundle_wasm = wasm;
        }
        if let Some(stylesheet) = lookup(BUNDLE_STYLESHEET_ENV) {
            self.bundle_stylesheet = (!stylesheet.trim().is_empty()).then_some(stylesheet);
        }
        self.validate()?;
        Ok(self)
    }

    /// Check that the namespace can be used verbatim in generated scripts.
    ///
    /// # Errors
    ///
    /// Returns [`GlueError::InvalidNamespace`] otherwise.
    pub fn validate(&self) -> Result<()> {
        if is_js_identifier(&self.namespace) {
            Ok(())
        } else {
            Err(GlueError::InvalidNamespace {
                namespace: self.namespace.clone(),
            })
        }
    }

    /// Global holding the bundle's initialisation promise.
    #[must_use]
    pub fn ready_global(&self) -> String {
        format!("{}Ready", self.namespace)
    }

    /// Id of the props script belonging to `anchor_id`.
    #[must_use]
    pub fn props_script_id(&self, anchor_id: &str) -> String {
        format!("{anchor_id}{}", self.props_suffix)
    }
}

fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || matches!(c, '_' | '$'))
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$'))
}

#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Host-page glue for the CRM widget bundle.
//!
//! Server templates use this crate to emit the markup a page needs to host a
//! widget: the anchor element, the props bundle as inline JSON and the call
//! into the bundle's exported entry point for that widget kind.
//!
//! # Design
//! - Mount calls are explicit per widget kind; the page never looks widgets
//!   up by name at runtime unless it opts into the `mountAll` scan.
//! - Everything that ends up inside a `<script>` is either validated
//!   (anchor ids, namespace) or escaped (props JSON).

pub mod config;
pub mod error;
pub mod render;

pub use config::GlueConfig;
pub use error::{GlueError, Result};
pub use render::{
    MountSnippet, render_bundle_tags, render_declarative, render_mount, script_safe_json,
    validate_anchor_id,
};

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
//! CRM widget bundle.
//!
//! Small Yew widgets (resource selector, resource table, date picker) that a
//! server-rendered page mounts onto anchor elements. The DOM-free registry and
//! view models live in [`core`] and are tested natively; the components and
//! the `wasm-bindgen` exports only exist on `wasm32`.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod mount;

#[cfg(target_arch = "wasm32")]
pub use mount::{
    WidgetRegistryHandle, create_date_picker, create_resource_select, create_resource_table,
    mount_all, widget_kinds,
};

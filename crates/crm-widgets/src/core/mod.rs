//! Core, DOM-free primitives for the widget bundle.
//!
//! Everything here compiles and is tested natively; the wasm build plugs the
//! browser document and the Yew components into these seams.
pub mod anchor;
pub mod date;
pub mod declarative;
pub mod error;
pub mod registry;
pub mod scan;
pub mod select;
pub mod table;

pub use anchor::{Anchor, Document};
pub use error::MountError;
pub use registry::WidgetRegistry;
pub use scan::{DeclaredPage, ScanReport, mount_declared};

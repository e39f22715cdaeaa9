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
//! Props bundles shared by the CRM widget bundle and the host-page glue.
//!
//! The server serialises these types into the page; the wasm bundle decodes
//! them leniently so a malformed bundle degrades to an empty widget instead
//! of failing the mount. Field names are camelCase on the wire to match the
//! templates that already embed them.

pub mod date;
pub mod decode;
pub mod form;
pub mod id;
pub mod kind;
pub mod markup;
pub mod select;
pub mod table;

pub use date::DatePickerConfig;
pub use decode::{Decoded, PropsBundle, PropsProblem, decode_bundle};
pub use id::ResourceId;
pub use kind::{ParseWidgetKindError, WidgetKind};
pub use select::{ResourceOption, ResourceSelectBundle};
pub use table::{ResourceTableBundle, TableRow};

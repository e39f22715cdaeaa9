//! Page scan behind `mountAll`: mounts every declared anchor still waiting for
//! a widget.
//!
//! # Design
//! - Anchors are mounted one by one; a failure is recorded and the scan moves
//!   on to the next anchor.
//! - Marking happens in [`WidgetRegistry::mount`], so anchors mounted by an
//!   explicit call are skipped here too.

use crm_widget_models::markup::{PROPS_ATTRIBUTE, PROPS_REF_ATTRIBUTE, WIDGET_ATTRIBUTE};

use crate::core::anchor::{Anchor, Document};
use crate::core::declarative::DeclaredProps;
use crate::core::error::MountError;
use crate::core::registry::WidgetRegistry;

/// A document that can list and inspect anchors declared in markup.
pub trait DeclaredPage: Document {
    /// Anchors carrying a widget kind and not yet marked mounted, in
    /// document order.
    fn pending_anchors(&self) -> Vec<Self::Node>;

    /// Value of attribute `name` on `node`.
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Text content of the element with id `id`.
    fn element_text(&self, id: &str) -> Option<String>;
}

/// What one scan did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Widgets mounted by this scan.
    pub mounted: u32,
    /// Anchors that could not be mounted.
    pub failures: Vec<MountError>,
    /// Props problems of anchors that were mounted with defaults.
    pub problems: Vec<String>,
}

/// Mount every pending anchor of `page` through `registry`.
#[must_use]
pub fn mount_declared<D>(registry: &WidgetRegistry<D::Node>, page: &D) -> ScanReport
where
    D: DeclaredPage,
{
    let mut report = ScanReport::default();
    for anchor in page.pending_anchors() {
        let kind = page.attribute(&anchor, WIDGET_ATTRIBUTE).unwrap_or_default();
        let declared = DeclaredProps::from_attributes(
            page.attribute(&anchor, PROPS_ATTRIBUTE),
            page.attribute(&anchor, PROPS_REF_ATTRIBUTE),
            |id| page.element_text(id),
        );
        let (props, problem) = declared.into_value();
        match registry.mount(page, kind.trim(), Anchor::Node(anchor), props) {
            Ok(()) => {
                report.mounted += 1;
                if let Some(problem) = problem {
                    report.problems.push(format!("{kind}: {problem}"));
                }
            }
            Err(err) => report.failures.push(err),
        }
    }
    report
}

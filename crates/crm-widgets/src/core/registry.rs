//! Widget mount registry.
//!
//! # Design
//! - An explicit mapping from widget name to factory, built once and passed
//!   by reference to whatever performs mounts.
//! - The registry keeps no reference to props or instances: the props bundle
//!   is moved into the factory and the instance lives in the anchor subtree.
//! - Mounting the same anchor twice is left to the host page to avoid.

use std::collections::BTreeMap;
use std::fmt::{self, Debug, Formatter};

use serde_json::Value;

use crate::core::anchor::{Anchor, Document};
use crate::core::error::MountError;

type Factory<N> = Box<dyn Fn(N, Value)>;

/// Named widget factories over node type `N`.
pub struct WidgetRegistry<N> {
    factories: BTreeMap<String, Factory<N>>,
}

impl<N> WidgetRegistry<N> {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Register `factory` under `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`MountError::DuplicateWidget`] when `kind` is already taken.
    pub fn register<F>(
        &mut self,
        kind: impl Into<String>,
        factory: F,
    ) -> Result<&mut Self, MountError>
    where
        F: Fn(N, Value) + 'static,
    {
        let kind = kind.into();
        if self.factories.contains_key(&kind) {
            return Err(MountError::DuplicateWidget { kind });
        }
        self.factories.insert(kind, Box::new(factory));
        Ok(self)
    }

    /// Whether a factory exists for `kind`.
    #[must_use]
    pub fn contains(&self, kind: &str) -> bool {
        self.factories.contains_key(kind)
    }

    /// Registered names in sorted order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Mount one widget of `kind` at `anchor` with `props`.
    ///
    /// The factory runs only after both the kind and the anchor resolved, so a
    /// failed mount leaves the document untouched. A resolved anchor is marked
    /// mounted before the factory runs, whichever way it was addressed.
    ///
    /// # Errors
    ///
    /// Returns [`MountError::UnknownWidget`] for unregistered kinds and
    /// [`MountError::MountTargetNotFound`] when the anchor does not resolve.
    pub fn mount<D>(
        &self,
        document: &D,
        kind: &str,
        anchor: Anchor<N>,
        props: Value,
    ) -> Result<(), MountError>
    where
        D: Document<Node = N>,
    {
        let factory = self
            .factories
            .get(kind)
            .ok_or_else(|| MountError::UnknownWidget {
                kind: kind.to_string(),
            })?;
        let node = anchor.resolve(document)?;
        document.mark_mounted(&node);
        factory(node, props);
        Ok(())
    }
}

impl<N> Default for WidgetRegistry<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Debug for WidgetRegistry<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetRegistry")
            .field("kinds", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::select::{initial_value, select_view};
    use crm_widget_models::{ResourceOption, ResourceSelectBundle, decode_bundle};
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::{BTreeMap, BTreeSet};
    use std::rc::Rc;

    /// Element stand-in: the rendered children of one anchor.
    type FakeNode = Rc<RefCell<Vec<String>>>;

    #[derive(Default)]
    struct FakeDocument {
        anchors: BTreeMap<String, FakeNode>,
        marked: RefCell<BTreeSet<String>>,
    }

    impl FakeDocument {
        fn with_anchors(ids: &[&str]) -> Self {
            Self {
                anchors: ids
                    .iter()
                    .map(|id| ((*id).to_string(), FakeNode::default()))
                    .collect(),
                marked: RefCell::default(),
            }
        }

        fn marked(&self) -> Vec<String> {
            self.marked.borrow().iter().cloned().collect()
        }

        fn children(&self, id: &str) -> Vec<String> {
            self.anchors[id].borrow().clone()
        }

        fn snapshot(&self) -> BTreeMap<String, Vec<String>> {
            self.anchors
                .iter()
                .map(|(id, node)| (id.clone(), node.borrow().clone()))
                .collect()
        }
    }

    impl Document for FakeDocument {
        type Node = FakeNode;

        fn query(&self, selector: &str) -> Option<FakeNode> {
            self.anchors.get(selector.strip_prefix('#')?).cloned()
        }

        fn mark_mounted(&self, node: &FakeNode) {
            if let Some(id) = self
                .anchors
                .iter()
                .find(|(_, candidate)| Rc::ptr_eq(candidate, node))
                .map(|(id, _)| id.clone())
            {
                self.marked.borrow_mut().insert(id);
            }
        }
    }

    fn render_select(node: FakeNode, props: Value) {
        let bundle = decode_bundle::<ResourceSelectBundle>(props).bundle;
        let initial = initial_value(&bundle);
        let view = select_view(&bundle, initial.as_deref(), "");
        let options: Vec<String> = view
            .options
            .iter()
            .map(|option| {
                let marker = if option.selected { "*" } else { "" };
                format!("{}{marker}", option.label)
            })
            .collect();
        node.borrow_mut()
            .push(format!("select[{}]({})", view.name, options.join(",")));
    }

    fn registry(calls: &Rc<RefCell<u32>>) -> WidgetRegistry<FakeNode> {
        let mut registry = WidgetRegistry::new();
        let calls = Rc::clone(calls);
        registry
            .register("resource-select", move |node, props| {
                *calls.borrow_mut() += 1;
                render_select(node, props);
            })
            .unwrap();
        registry
    }

    #[test]
    fn mount_attaches_one_instance_under_the_anchor_only() {
        let calls = Rc::new(RefCell::new(0));
        let registry = registry(&calls);
        let document = FakeDocument::with_anchors(&["region", "sidebar"]);

        registry
            .mount(
                &document,
                "resource-select",
                Anchor::from("#region"),
                json!({
                    "name": "region",
                    "options": [{ "id": 1, "label": "North" }],
                    "initialSelection": null
                }),
            )
            .unwrap();

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(document.children("region"), vec!["select[region](North)"]);
        assert!(document.children("sidebar").is_empty());
        assert_eq!(document.marked(), vec!["region"]);
    }

    #[test]
    fn missing_anchor_fails_without_touching_the_document() {
        let calls = Rc::new(RefCell::new(0));
        let registry = registry(&calls);
        let document = FakeDocument::with_anchors(&["region"]);
        let before = document.snapshot();

        let err = registry
            .mount(&document, "resource-select", Anchor::from("#nope"), json!({}))
            .unwrap_err();

        assert_eq!(
            err,
            MountError::MountTargetNotFound {
                selector: "#nope".into()
            }
        );
        assert_eq!(*calls.borrow(), 0);
        assert_eq!(document.snapshot(), before);
        assert!(document.marked().is_empty());
    }

    #[test]
    fn unknown_kind_is_reported_before_anchor_lookup() {
        let registry = registry(&Rc::new(RefCell::new(0)));
        let document = FakeDocument::default();
        let err = registry
            .mount(&document, "color-picker", Anchor::from("#nope"), json!({}))
            .unwrap_err();
        assert_eq!(
            err,
            MountError::UnknownWidget {
                kind: "color-picker".into()
            }
        );
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = WidgetRegistry::<FakeNode>::new();
        registry.register("date-picker", |_, _| {}).unwrap();
        let err = registry.register("date-picker", |_, _| {}).unwrap_err();
        assert_eq!(
            err,
            MountError::DuplicateWidget {
                kind: "date-picker".into()
            }
        );
        assert!(registry.contains("date-picker"));
    }

    #[test]
    fn kinds_are_sorted() {
        let mut registry = WidgetRegistry::<FakeNode>::new();
        registry
            .register("resource-table", |_, _| {})
            .and_then(|r| r.register("date-picker", |_, _| {}))
            .unwrap();
        assert_eq!(
            registry.kinds().collect::<Vec<_>>(),
            vec!["date-picker", "resource-table"]
        );
        assert_eq!(
            format!("{registry:?}"),
            "WidgetRegistry { kinds: [\"date-picker\", \"resource-table\"] }"
        );
    }

    #[test]
    fn repeated_mounts_render_identically() {
        let registry = registry(&Rc::new(RefCell::new(0)));
        let props = json!({
            "name": "owner",
            "options": [{ "id": 1, "title": "Ada" }, { "id": 2, "title": "Grace" }],
            "initialSelection": 2
        });
        let first = FakeDocument::with_anchors(&["a"]);
        let second = FakeDocument::with_anchors(&["a"]);
        registry
            .mount(&first, "resource-select", Anchor::from("#a"), props.clone())
            .unwrap();
        registry
            .mount(&second, "resource-select", Anchor::from("#a"), props)
            .unwrap();
        assert_eq!(first.snapshot(), second.snapshot());
        assert_eq!(first.children("a"), vec!["select[owner](Ada,Grace*)"]);
    }

    #[test]
    fn instances_at_distinct_anchors_do_not_share_state() {
        let registry = registry(&Rc::new(RefCell::new(0)));
        let document = FakeDocument::with_anchors(&["left", "right"]);
        registry
            .mount(
                &document,
                "resource-select",
                Anchor::from("#left"),
                json!({ "name": "left", "options": [{ "id": 1, "label": "North" }] }),
            )
            .unwrap();
        registry
            .mount(
                &document,
                "resource-select",
                Anchor::from("#right"),
                json!({
                    "name": "right",
                    "options": [{ "id": 2, "label": "South" }, { "id": 3, "label": "East" }],
                    "initialSelection": 3
                }),
            )
            .unwrap();
        assert_eq!(document.children("left"), vec!["select[left](North)"]);
        assert_eq!(document.children("right"), vec!["select[right](South,East*)"]);
    }

    #[test]
    fn node_anchor_mounts_directly() {
        let registry = registry(&Rc::new(RefCell::new(0)));
        let document = FakeDocument::default();
        let node = FakeNode::default();
        let bundle = ResourceSelectBundle {
            name: "region".into(),
            options: vec![ResourceOption::new(1, "North")],
            initial_selection: None,
        };
        registry
            .mount(
                &document,
                "resource-select",
                Anchor::Node(Rc::clone(&node)),
                serde_json::to_value(&bundle).unwrap(),
            )
            .unwrap();
        assert_eq!(node.borrow().len(), 1);
    }
}

use std::collections::HashMap;

use crate::element::{Element, ElementId};

/// Errors returned by tree operations on a [`Document`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PageError {
    /// The parent handle does not point at an element in the document.
    #[error("element {0:?} is not attached to the document")]
    Detached(ElementId),
}

#[derive(Debug, Clone)]
struct Node {
    element: Element,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

/// The page: a `body` root plus every element attached below it.
///
/// Elements only exist while attached; removing an element drops its whole
/// subtree, so [`Document::contains`] doubles as the "still on screen" check.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: HashMap<ElementId, Node>,
    body: ElementId,
    next_id: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty document containing only a `body` element.
    pub fn new() -> Self {
        let body = ElementId(0);
        let mut nodes = HashMap::new();
        nodes.insert(
            body,
            Node {
                element: Element::new("body"),
                parent: None,
                children: Vec::new(),
            },
        );

        Self {
            nodes,
            body,
            next_id: 1,
        }
    }

    pub fn body(&self) -> ElementId {
        self.body
    }

    /// Appends `element` as the last child of `parent`.
    pub fn append_child(
        &mut self,
        parent: ElementId,
        element: Element,
    ) -> Result<ElementId, PageError> {
        if !self.nodes.contains_key(&parent) {
            return Err(PageError::Detached(parent));
        }

        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            Node {
                element,
                parent: Some(parent),
                children: Vec::new(),
            },
        );

        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.push(id);
        }

        Ok(id)
    }

    /// Appends `element` to the body.
    pub fn append_to_body(&mut self, element: Element) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            Node {
                element,
                parent: Some(self.body),
                children: Vec::new(),
            },
        );
        if let Some(body) = self.nodes.get_mut(&self.body) {
            body.children.push(id);
        }

        id
    }

    /// Removes `id` and its subtree. Returns `false` when the element is
    /// already gone or is the body.
    pub fn remove(&mut self, id: ElementId) -> bool {
        if id == self.body {
            return false;
        }

        let Some(node) = self.nodes.remove(&id) else {
            return false;
        };

        if let Some(parent) = node.parent.and_then(|parent| self.nodes.get_mut(&parent)) {
            parent.children.retain(|child| *child != id);
        }

        let mut pending = node.children;
        while let Some(child) = pending.pop() {
            if let Some(removed) = self.nodes.remove(&child) {
                pending.extend(removed.children);
            }
        }

        true
    }

    /// Replaces every child of `id` with `elements`, in order.
    pub fn replace_children(
        &mut self,
        id: ElementId,
        elements: Vec<Element>,
    ) -> Result<Vec<ElementId>, PageError> {
        let existing = match self.nodes.get(&id) {
            Some(node) => node.children.clone(),
            None => return Err(PageError::Detached(id)),
        };
        for child in existing {
            self.remove(child);
        }

        elements
            .into_iter()
            .map(|element| self.append_child(id, element))
            .collect()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.nodes.get(&id).map(|node| &node.element)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.nodes.get_mut(&id).map(|node| &mut node.element)
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.nodes.get(&id).and_then(|node| node.parent)
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.nodes
            .get(&id)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
    }

    /// First element in tree order whose DOM id equals `dom_id`.
    pub fn element_by_id(&self, dom_id: &str) -> Option<ElementId> {
        self.walk()
            .into_iter()
            .find(|id| self.get(*id).and_then(|e| e.dom_id.as_deref()) == Some(dom_id))
    }

    pub fn element_by_id_mut(&mut self, dom_id: &str) -> Option<&mut Element> {
        let id = self.element_by_id(dom_id)?;
        self.get_mut(id)
    }

    /// Every element carrying `class`, in tree order.
    pub fn elements_by_class(&self, class: &str) -> Vec<ElementId> {
        self.walk()
            .into_iter()
            .filter(|id| self.get(*id).is_some_and(|e| e.has_class(class)))
            .collect()
    }

    /// Number of attached elements, including the body.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Deep copy of the tree suitable for handing to a renderer.
    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            root: self.snapshot_node(self.body),
        }
    }

    fn snapshot_node(&self, id: ElementId) -> SnapshotNode {
        let node = &self.nodes[&id];
        SnapshotNode {
            id,
            element: node.element.clone(),
            children: node
                .children
                .iter()
                .map(|child| self.snapshot_node(*child))
                .collect(),
        }
    }

    // pre-order, body first
    fn walk(&self) -> Vec<ElementId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.body];
        while let Some(id) = stack.pop() {
            order.push(id);
            if let Some(node) = self.nodes.get(&id) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        order
    }
}

/// Immutable copy of a [`Document`] tree.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSnapshot {
    pub root: SnapshotNode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotNode {
    pub id: ElementId,
    pub element: Element,
    pub children: Vec<SnapshotNode>,
}

impl DocumentSnapshot {
    pub fn find_by_dom_id(&self, dom_id: &str) -> Option<&SnapshotNode> {
        self.root.iter().find(|node| node.element.dom_id.as_deref() == Some(dom_id))
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&SnapshotNode> {
        self.root
            .iter()
            .filter(|node| node.element.has_class(class))
            .collect()
    }
}

impl SnapshotNode {
    /// Pre-order iterator over this node and its descendants.
    pub fn iter(&self) -> impl Iterator<Item = &SnapshotNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    pub fn find_child_by_class(&self, class: &str) -> Option<&SnapshotNode> {
        self.children.iter().find(|child| child.element.has_class(class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, ElementId, ElementId) {
        let mut document = Document::new();
        let container = document.append_to_body(Element::new("div").with_id("container"));
        let alert = document
            .append_child(container, Element::new("div").with_classes("alert alert-info"))
            .unwrap();
        (document, container, alert)
    }

    #[test]
    fn lookups_follow_tree_order() {
        let (mut document, container, alert) = sample();
        let second = document.append_to_body(Element::new("div").with_classes("alert"));

        assert_eq!(document.element_by_id("container"), Some(container));
        assert_eq!(document.elements_by_class("alert"), vec![alert, second]);
        assert_eq!(document.parent(alert), Some(container));
        assert_eq!(document.element_by_id("missing"), None);
    }

    #[test]
    fn remove_drops_subtree() {
        let (mut document, container, alert) = sample();
        assert!(document.remove(container));

        assert!(!document.contains(container));
        assert!(!document.contains(alert));
        assert!(document.children(document.body()).is_empty());
        assert!(document.is_empty());
        assert!(!document.remove(container));
    }

    #[test]
    fn body_cannot_be_removed() {
        let mut document = Document::new();
        let body = document.body();
        assert!(!document.remove(body));
        assert!(document.contains(body));
    }

    #[test]
    fn handles_are_not_reused() {
        let mut document = Document::new();
        let first = document.append_to_body(Element::new("p"));
        document.remove(first);
        let second = document.append_to_body(Element::new("p"));
        assert_ne!(first, second);
        assert!(!document.contains(first));
    }

    #[test]
    fn append_to_removed_parent_fails() {
        let (mut document, container, _) = sample();
        document.remove(container);
        assert_eq!(
            document.append_child(container, Element::new("span")),
            Err(PageError::Detached(container))
        );
    }

    #[test]
    fn replace_children_swaps_content() {
        let (mut document, container, alert) = sample();
        let replaced = document
            .replace_children(container, vec![Element::new("i"), Element::new("small")])
            .unwrap();

        assert!(!document.contains(alert));
        assert_eq!(document.children(container), replaced.as_slice());
        assert_eq!(document.get(replaced[1]).map(|e| e.tag.as_str()), Some("small"));
    }

    #[test]
    fn snapshot_mirrors_tree() {
        let (document, container, alert) = sample();
        let snapshot = document.snapshot();

        assert_eq!(snapshot.root.element.tag, "body");
        assert_eq!(snapshot.find_by_dom_id("container").map(|n| n.id), Some(container));
        let alerts = snapshot.find_by_class("alert");
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].id, alert);
        assert!(snapshot.root.children[0].find_child_by_class("alert-info").is_some());
    }
}

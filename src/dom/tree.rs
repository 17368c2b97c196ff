//! In-memory document tree

use std::collections::HashMap;
use std::sync::OnceLock;

use super::style;
use super::{Document, NodeId};

/// Elements that can be the labeled control of a `<label>`
const LABELABLE_TAGS: &[&str] = &[
    "button", "input", "meter", "output", "progress", "select", "textarea",
];

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    declarations: Vec<(String, String)>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed element tree implementing [`Document`].
///
/// Nodes are addressed by [`NodeId`]. Document order is the pre-order walk
/// of the roots, independent of the order nodes were appended in.
#[derive(Debug, Clone, Default)]
pub struct DomTree {
    elements: Vec<Element>,
    roots: Vec<NodeId>,
    /// Built on first read, dropped by every mutation
    index: OnceLock<TreeIndex>,
}

/// Derived lookups over a tree snapshot
#[derive(Debug, Clone, Default)]
struct TreeIndex {
    order: Vec<NodeId>,
    /// Labels of each labeled control, in document order
    labels: HashMap<NodeId, Vec<NodeId>>,
}

impl TreeIndex {
    fn build(tree: &DomTree) -> Self {
        let order = tree.preorder();
        let count = tree.elements.len();

        let mut position = vec![0; count];
        for (i, node) in order.iter().enumerate() {
            position[node.0] = i;
        }

        // a parent is always appended before its children
        let mut subtree = vec![1usize; count];
        for id in (0..count).rev() {
            if let Some(parent) = tree.elements[id].parent {
                subtree[parent.0] += subtree[id];
            }
        }

        // first labelable element at or after each document position
        let mut next_labelable = vec![None; order.len() + 1];
        for i in (0..order.len()).rev() {
            next_labelable[i] = if tree.is_labelable(order[i]) {
                Some(order[i])
            } else {
                next_labelable[i + 1]
            };
        }

        let mut first_by_id: HashMap<&str, NodeId> = HashMap::new();
        for node in &order {
            if let Some(id) = tree.attribute(*node, "id").filter(|id| !id.is_empty()) {
                first_by_id.entry(id).or_insert(*node);
            }
        }

        let mut labels: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
        for label in order.iter().copied() {
            if tree.tag_name(label) != Some("label") {
                continue;
            }

            let control = match tree.attribute(label, "for") {
                Some(target) => first_by_id
                    .get(target)
                    .copied()
                    .filter(|control| tree.is_labelable(*control)),
                None => {
                    let end = position[label.0] + subtree[label.0];
                    next_labelable[position[label.0] + 1]
                        .filter(|control| position[control.0] < end)
                }
            };

            if let Some(control) = control {
                labels.entry(control).or_default().push(label);
            }
        }

        Self { order, labels }
    }
}

impl DomTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element as the last child of `parent` (or as a new root).
    ///
    /// Tag and attribute names are lowercased. A duplicated attribute keeps
    /// its first value.
    pub fn append(
        &mut self,
        parent: Option<NodeId>,
        tag: &str,
        attributes: &[(&str, &str)],
    ) -> NodeId {
        self.index.take();
        let id = NodeId(self.elements.len());
        let parent = parent.filter(|p| p.0 < self.elements.len());

        let mut element = Element {
            tag: tag.to_lowercase(),
            attributes: Vec::with_capacity(attributes.len()),
            declarations: Vec::new(),
            parent,
            children: Vec::new(),
        };
        for (name, value) in attributes {
            let name = name.to_lowercase();
            if element.attributes.iter().all(|(existing, _)| *existing != name) {
                element.attributes.push((name, (*value).to_string()));
            }
        }
        element.declarations = Self::declarations_of(&element.attributes);

        self.elements.push(element);
        match parent {
            Some(p) => self.elements[p.0].children.push(id),
            None => self.roots.push(id),
        }

        id
    }

    /// Set or replace an attribute on an existing node
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.index.take();
        let Some(element) = self.elements.get_mut(node.0) else {
            return;
        };

        let name = name.to_lowercase();
        match element.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => element.attributes.push((name.clone(), value.to_string())),
        }

        if name == "style" {
            element.declarations = Self::declarations_of(&element.attributes);
        }
    }

    /// Remove an attribute from a node
    pub fn remove_attribute(&mut self, node: NodeId, name: &str) {
        self.index.take();
        if let Some(element) = self.elements.get_mut(node.0) {
            let name = name.to_lowercase();
            element.attributes.retain(|(n, _)| *n != name);
            if name == "style" {
                element.declarations.clear();
            }
        }
    }

    /// Number of elements in the tree
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the tree has no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Children of a node in document order
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.element(node)
            .map(|e| e.children.as_slice())
            .unwrap_or(&[])
    }

    fn element(&self, node: NodeId) -> Option<&Element> {
        self.elements.get(node.0)
    }

    fn declarations_of(attributes: &[(String, String)]) -> Vec<(String, String)> {
        attributes
            .iter()
            .find(|(name, _)| name == "style")
            .map(|(_, value)| style::parse_declarations(value))
            .unwrap_or_default()
    }

    fn preorder(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.elements.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();

        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }

        order
    }

    fn index(&self) -> &TreeIndex {
        self.index.get_or_init(|| TreeIndex::build(self))
    }

    /// Check if a node can be labeled (`input type=hidden` cannot)
    fn is_labelable(&self, node: NodeId) -> bool {
        match self.tag_name(node) {
            Some("input") => !self
                .attribute(node, "type")
                .is_some_and(|t| t.eq_ignore_ascii_case("hidden")),
            Some(tag) => LABELABLE_TAGS.contains(&tag),
            None => false,
        }
    }
}

impl Document for DomTree {
    fn nodes(&self) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(self.index().order.iter().copied())
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|e| e.tag.as_str())
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)?
            .attributes
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.element(node)?.parent
    }

    fn computed_style(&self, node: NodeId, property: &str) -> Option<String> {
        let property = property.to_lowercase();
        let mut current = Some(node);

        while let Some(id) = current {
            let element = self.element(id)?;
            match style::lookup(&element.declarations, &property) {
                Some(value) if !value.eq_ignore_ascii_case("inherit") => {
                    return Some(value.to_string());
                }
                Some(_) => {}
                None if !style::is_inherited(&property) => break,
                None => {}
            }
            current = element.parent;
        }

        style::initial_value(&property).map(str::to_string)
    }

    /// A `<label for=ID>` labels the first element with that id; a label
    /// without `for` labels its first labelable descendant. Either way the
    /// target must be labelable.
    fn labels(&self, node: NodeId) -> Vec<NodeId> {
        self.index().labels.get(&node).cloned().unwrap_or_default()
    }
}

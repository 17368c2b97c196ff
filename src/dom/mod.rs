//! # Document Model
//!
//! The analysis engine never touches a live page directly. Everything it
//! needs from the host is expressed by the [`Document`] trait:
//!
//! - node selection by tag or attribute presence ([`Document::query`])
//! - per-node attribute and computed-style lookup
//! - per-node label association ([`Document::labels`])
//! - document order iteration ([`Document::nodes`])
//!
//! [`DomTree`] is the bundled implementation, built either programmatically
//! (for synthetic fixtures) or from HTML text.
//!
//! ## Examples
//!
//! ```rust
//! use a11ylens::dom::{Document, DomTree, NodeQuery};
//!
//! let mut tree = DomTree::new();
//! let body = tree.append(None, "body", &[]);
//! tree.append(Some(body), "img", &[("src", "logo.png")]);
//!
//! let images = tree.query(&NodeQuery::tags(&["img"]));
//! assert_eq!(images.len(), 1);
//! assert_eq!(tree.attribute(images[0], "alt"), None);
//! ```

mod html;
pub mod style;
mod tree;

pub use tree::DomTree;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-owning reference to a node of a [`Document`].
///
/// A `NodeId` is only meaningful together with the document that produced
/// it. Findings carry one so presentation layers can locate the node again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A selector list in the spirit of `querySelectorAll("a, b, [c]")`.
///
/// A node matches when its tag is one of `tags` or when it carries any of
/// the `attributes`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeQuery<'a> {
    tags: &'a [&'a str],
    attributes: &'a [&'a str],
}

impl<'a> NodeQuery<'a> {
    /// Match nodes by tag name
    pub fn tags(tags: &'a [&'a str]) -> Self {
        Self {
            tags,
            attributes: &[],
        }
    }

    /// Match nodes by attribute presence
    pub fn attributes(attributes: &'a [&'a str]) -> Self {
        Self { tags: &[], attributes }
    }

    /// Also match nodes carrying any of these attributes
    pub fn with_attributes(mut self, attributes: &'a [&'a str]) -> Self {
        self.attributes = attributes;
        self
    }

    /// Check whether `node` of `document` matches this query
    pub fn matches<D: Document + ?Sized>(&self, document: &D, node: NodeId) -> bool {
        let tag_match = document
            .tag_name(node)
            .is_some_and(|tag| self.tags.contains(&tag));

        tag_match
            || self
                .attributes
                .iter()
                .any(|name| document.attribute(node, name).is_some())
    }
}

/// A rendered document as seen by the analysis engine.
///
/// Implementations are read-only views; the engine never mutates the host.
pub trait Document {
    /// All element nodes in document order
    fn nodes(&self) -> Box<dyn Iterator<Item = NodeId> + '_>;

    /// Lowercase tag name of a node
    fn tag_name(&self, node: NodeId) -> Option<&str>;

    /// Raw attribute value, `None` when the attribute is absent
    fn attribute(&self, node: NodeId, name: &str) -> Option<&str>;

    /// Parent element, `None` for roots
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Resolved value of a style property for a node
    fn computed_style(&self, node: NodeId, property: &str) -> Option<String>;

    /// Label elements associated with a form control, in document order
    fn labels(&self, node: NodeId) -> Vec<NodeId>;

    /// Select matching nodes in document order, each at most once
    fn query(&self, query: &NodeQuery<'_>) -> Vec<NodeId> {
        self.nodes()
            .filter(|node| query.matches(self, *node))
            .collect()
    }

    /// Short locator such as `input#email.wide`, for presentation only
    fn describe(&self, node: NodeId) -> String {
        let mut locator = self.tag_name(node).unwrap_or("?").to_string();

        if let Some(id) = self.attribute(node, "id").filter(|id| !id.is_empty()) {
            locator.push('#');
            locator.push_str(id);
        }

        if let Some(class) = self.attribute(node, "class") {
            for name in class.split_whitespace() {
                locator.push('.');
                locator.push_str(name);
            }
        }

        locator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (DomTree, NodeId, NodeId, NodeId) {
        let mut tree = DomTree::new();
        let body = tree.append(None, "body", &[]);
        let button = tree.append(Some(body), "button", &[("id", "go"), ("class", "primary big")]);
        let div = tree.append(Some(body), "div", &[("role", "alert")]);
        (tree, body, button, div)
    }

    #[test]
    fn test_query_by_tags_in_document_order() {
        let (tree, _, button, div) = fixture();
        let found = tree.query(&NodeQuery::tags(&["div", "button"]));
        assert_eq!(found, vec![button, div]);
    }

    #[test]
    fn test_query_by_attribute_presence() {
        let (tree, _, _, div) = fixture();
        let found = tree.query(&NodeQuery::attributes(&["role", "aria-label"]));
        assert_eq!(found, vec![div]);
    }

    #[test]
    fn test_query_matches_each_node_once() {
        let (tree, _, _, div) = fixture();
        let found = tree.query(&NodeQuery::tags(&["div"]).with_attributes(&["role"]));
        assert_eq!(found, vec![div]);
    }

    #[test]
    fn test_describe_uses_id_and_classes() {
        let (tree, body, button, _) = fixture();
        assert_eq!(tree.describe(button), "button#go.primary.big");
        assert_eq!(tree.describe(body), "body");
    }

    #[test]
    fn test_node_id_display() {
        assert_eq!(NodeId(7).to_string(), "#7");
    }
}

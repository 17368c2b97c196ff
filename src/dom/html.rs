//! HTML loading via `scraper`

use scraper::{ElementRef, Html};
use tracing::debug;

use super::{DomTree, NodeId};

impl DomTree {
    /// Parse an HTML document into a tree.
    ///
    /// Parsing follows the HTML5 algorithm, so malformed markup is repaired
    /// rather than rejected and the result always has an `html` root.
    pub fn parse_html(source: &str) -> Self {
        let html = Html::parse_document(source);
        let mut tree = DomTree::new();

        let mut stack: Vec<(Option<NodeId>, ElementRef<'_>)> = vec![(None, html.root_element())];
        while let Some((parent, element)) = stack.pop() {
            let attributes: Vec<(&str, &str)> = element.value().attrs().collect();
            let id = tree.append(parent, element.value().name(), &attributes);

            let children: Vec<_> = element.children().filter_map(ElementRef::wrap).collect();
            stack.extend(children.into_iter().rev().map(|child| (Some(id), child)));
        }

        debug!(elements = tree.len(), "Parsed HTML document");
        tree
    }
}

#[cfg(test)]
mod tests {
    use crate::dom::{Document, NodeQuery};

    use super::*;

    #[test]
    fn test_parse_html_builds_document_order() {
        let tree = DomTree::parse_html(
            "<html><body><h1>Title</h1><p>one</p><h2>Sub</h2></body></html>",
        );
        let tags: Vec<_> = tree
            .nodes()
            .filter_map(|n| tree.tag_name(n))
            .collect();
        assert_eq!(tags, vec!["html", "head", "body", "h1", "p", "h2"]);
    }

    #[test]
    fn test_parse_html_keeps_attributes() {
        let tree = DomTree::parse_html(r#"<img src="a.png" alt="A cat">"#);
        let img = tree.query(&NodeQuery::tags(&["img"]))[0];
        assert_eq!(tree.attribute(img, "alt"), Some("A cat"));
        assert_eq!(tree.attribute(img, "src"), Some("a.png"));
    }

    #[test]
    fn test_parse_html_repairs_fragments() {
        let tree = DomTree::parse_html("<input id=name><label for=name>Name</label>");
        let input = tree.query(&NodeQuery::tags(&["input"]))[0];
        assert_eq!(tree.labels(input).len(), 1);
    }

    #[test]
    fn test_parse_html_inline_style() {
        let tree = DomTree::parse_html(
            r#"<div style="color: #eee; background-color: #fff"><span>hi</span></div>"#,
        );
        let span = tree.query(&NodeQuery::tags(&["span"]))[0];
        assert_eq!(tree.computed_style(span, "color").as_deref(), Some("#eee"));
    }
}

//! Thin lookup helpers over roxmltree, limited to direct children.

use roxmltree::{Document, Node, ParsingOptions};

use crate::error::ParseError;

pub(crate) fn parse_document(text: &str) -> Result<Document<'_>, ParseError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Ok(Document::parse_with_options(text, options)?)
}

/// First direct child element named `tag`.
pub(crate) fn child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|c| c.has_tag_name(tag))
}

/// All direct child elements named `tag`, in document order.
pub(crate) fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |c| c.has_tag_name(tag))
}

/// Text content of an element; an empty element yields "".
pub(crate) fn text_of(node: Node<'_, '_>) -> String {
    node.text().unwrap_or("").to_string()
}

/// Text of the first direct child named `tag`, or `default` when there is no such child.
pub(crate) fn child_text_or(node: Node<'_, '_>, tag: &str, default: &str) -> String {
    child(node, tag)
        .map(text_of)
        .unwrap_or_else(|| default.to_string())
}

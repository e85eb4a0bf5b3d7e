use serde_json::Value;

use crate::ast::{Node, RichTextDocument};

/// Flatten a tree into plain text, ignoring all formatting.
///
/// Text runs inside a block are concatenated as-is; top-level blocks are
/// joined with a single space and the result is trimmed.
pub fn extract_plain_text(doc: Option<&RichTextDocument>) -> String {
    let Some(doc) = doc else {
        return String::new();
    };
    doc.children
        .iter()
        .map(node_text)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Same as [`extract_plain_text`], for raw JSON that has not been read into
/// a tree yet. Any shape is accepted.
pub fn extract_plain_text_value(value: &Value) -> String {
    extract_plain_text(Some(&RichTextDocument::from_value(value)))
}

fn node_text(node: &Node) -> String {
    match node {
        Node::Text { text, .. } => text.clone(),
        Node::LineBreak => " ".to_string(),
        Node::Paragraph(children)
        | Node::Heading { children, .. }
        | Node::PassThrough { children, .. } => children.iter().map(node_text).collect(),
    }
}

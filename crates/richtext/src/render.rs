use maud::{html, Markup, Render};
use serde::Serialize;

use crate::ast::{Node, RichTextDocument};

/// Display markup produced from a rich-text tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MarkupNode {
    Fragment { children: Vec<MarkupNode> },
    Paragraph { children: Vec<MarkupNode> },
    Heading { level: u8, children: Vec<MarkupNode> },
    Text { text: String },
    Strong { child: Box<MarkupNode> },
    Emphasis { child: Box<MarkupNode> },
    LineBreak,
}

/// Lowest and highest heading level a renderer emits.
pub const MIN_HEADING_LEVEL: u8 = 1;
pub const MAX_HEADING_LEVEL: u8 = 6;

pub fn clamp_heading_level(level: i64) -> u8 {
    level.clamp(MIN_HEADING_LEVEL as i64, MAX_HEADING_LEVEL as i64) as u8
}

/// Render a tree into markup. `None` when there is no tree or it has no
/// children.
pub fn render_markup(doc: Option<&RichTextDocument>) -> Option<MarkupNode> {
    let doc = doc?;
    if doc.is_empty() {
        return None;
    }
    Some(MarkupNode::Fragment {
        children: render_nodes(&doc.children),
    })
}

/// Render a tree straight to an HTML string. Empty string when there is
/// nothing to render.
pub fn render_html(doc: Option<&RichTextDocument>) -> String {
    render_markup(doc)
        .map(|markup| markup.to_html())
        .unwrap_or_default()
}

fn render_nodes(nodes: &[Node]) -> Vec<MarkupNode> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        render_into(node, &mut out);
    }
    out
}

fn render_into(node: &Node, out: &mut Vec<MarkupNode>) {
    match node {
        Node::Paragraph(children) => out.push(MarkupNode::Paragraph {
            children: render_nodes(children),
        }),
        Node::Heading { level, children } => out.push(MarkupNode::Heading {
            level: clamp_heading_level(*level),
            children: render_nodes(children),
        }),
        Node::Text { text, format } => {
            let mut markup = MarkupNode::Text { text: text.clone() };
            if format.is_italic() {
                markup = MarkupNode::Emphasis {
                    child: Box::new(markup),
                };
            }
            if format.is_bold() {
                markup = MarkupNode::Strong {
                    child: Box::new(markup),
                };
            }
            out.push(markup);
        }
        Node::LineBreak => out.push(MarkupNode::LineBreak),
        // Unknown wrappers are dropped; their content is spliced in place.
        Node::PassThrough { children, .. } => {
            for child in children {
                render_into(child, out);
            }
        }
    }
}

impl MarkupNode {
    pub fn to_html(&self) -> String {
        self.render().into_string()
    }
}

fn children_markup(children: &[MarkupNode]) -> Markup {
    html! {
        @for child in children {
            (child)
        }
    }
}

fn heading_markup(level: u8, inner: Markup) -> Markup {
    match level {
        1 => html! { h1 { (inner) } },
        2 => html! { h2 { (inner) } },
        3 => html! { h3 { (inner) } },
        4 => html! { h4 { (inner) } },
        5 => html! { h5 { (inner) } },
        _ => html! { h6 { (inner) } },
    }
}

impl Render for MarkupNode {
    fn render(&self) -> Markup {
        match self {
            MarkupNode::Fragment { children } => children_markup(children),
            MarkupNode::Paragraph { children } => html! { p { (children_markup(children)) } },
            MarkupNode::Heading { level, children } => heading_markup(*level, children_markup(children)),
            MarkupNode::Text { text } => html! { (text) },
            MarkupNode::Strong { child } => html! { strong { (child.as_ref()) } },
            MarkupNode::Emphasis { child } => html! { em { (child.as_ref()) } },
            MarkupNode::LineBreak => html! { br; },
        }
    }
}

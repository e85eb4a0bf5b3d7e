//! Rich-text document tree, in the shape the CMS editor stores it.
//!
//! On the wire this is the editor's JSON state:
//! `{"root": {"type": "root", "children": [...]}}`. Reading is tolerant:
//! anything that is not a recognizable node is dropped instead of failing.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Map, Value};

/// Bit 0 of a text node's `format` field.
pub const FORMAT_BOLD: u64 = 1;
/// Bit 1 of a text node's `format` field.
pub const FORMAT_ITALIC: u64 = 1 << 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextFormat(u64);

impl TextFormat {
    pub const PLAIN: TextFormat = TextFormat(0);
    pub const BOLD: TextFormat = TextFormat(FORMAT_BOLD);
    pub const ITALIC: TextFormat = TextFormat(FORMAT_ITALIC);

    pub fn from_bits(bits: u64) -> Self {
        TextFormat(bits)
    }

    pub fn bits(self) -> u64 {
        self.0
    }

    pub fn is_bold(self) -> bool {
        self.0 & FORMAT_BOLD != 0
    }

    pub fn is_italic(self) -> bool {
        self.0 & FORMAT_ITALIC != 0
    }

    pub fn union(self, other: TextFormat) -> Self {
        TextFormat(self.0 | other.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Block-level paragraph.
    Paragraph(Vec<Node>),
    /// Block-level heading. `level` is kept as authored; renderers clamp it.
    Heading { level: i64, children: Vec<Node> },
    /// Inline text run.
    Text { text: String, format: TextFormat },
    /// Inline hard line break.
    LineBreak,
    /// A node type this crate does not know. Its children are kept so
    /// renderers can splice them into the parent.
    PassThrough { kind: String, children: Vec<Node> },
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text {
            text: text.into(),
            format: TextFormat::PLAIN,
        }
    }

    pub fn formatted(text: impl Into<String>, format: TextFormat) -> Self {
        Node::Text {
            text: text.into(),
            format,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Paragraph(children)
            | Node::Heading { children, .. }
            | Node::PassThrough { children, .. } => children,
            Node::Text { .. } | Node::LineBreak => &[],
        }
    }

    /// Read one node from untrusted JSON. Returns `None` for values that are
    /// not objects.
    pub fn from_value(value: &Value) -> Option<Node> {
        let obj = value.as_object()?;
        let kind = obj.get("type").and_then(Value::as_str).unwrap_or_default();

        let node = match kind {
            "text" => Node::Text {
                text: obj
                    .get("text")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                format: TextFormat::from_bits(
                    obj.get("format").and_then(Value::as_u64).unwrap_or(0),
                ),
            },
            "paragraph" => Node::Paragraph(children_from(obj)),
            "heading" => Node::Heading {
                level: heading_level(obj.get("tag")),
                children: children_from(obj),
            },
            "linebreak" => Node::LineBreak,
            other => Node::PassThrough {
                kind: other.to_string(),
                children: children_from(obj),
            },
        };
        Some(node)
    }

    pub fn to_value(&self) -> Value {
        match self {
            Node::Paragraph(children) => json!({
                "type": "paragraph",
                "version": 1,
                "children": nodes_to_values(children),
            }),
            Node::Heading { level, children } => json!({
                "type": "heading",
                "tag": format!("h{level}"),
                "version": 1,
                "children": nodes_to_values(children),
            }),
            Node::Text { text, format } => json!({
                "type": "text",
                "text": text,
                "format": format.bits(),
                "version": 1,
            }),
            Node::LineBreak => json!({ "type": "linebreak", "version": 1 }),
            Node::PassThrough { kind, children } => json!({
                "type": kind,
                "version": 1,
                "children": nodes_to_values(children),
            }),
        }
    }
}

/// The root of a rich-text tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RichTextDocument {
    pub children: Vec<Node>,
}

impl RichTextDocument {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// A document holding a single paragraph with a single plain text run.
    pub fn from_plain_text(text: impl Into<String>) -> Self {
        Self::new(vec![Node::Paragraph(vec![Node::text(text)])])
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Read a document from untrusted JSON. Missing `root`, missing
    /// `children` or non-object nodes all yield (partially) empty trees.
    pub fn from_value(value: &Value) -> Self {
        let children = value
            .get("root")
            .and_then(Value::as_object)
            .map(children_from)
            .unwrap_or_default();
        Self { children }
    }

    pub fn to_value(&self) -> Value {
        json!({
            "root": {
                "type": "root",
                "version": 1,
                "children": nodes_to_values(&self.children),
            }
        })
    }
}

impl Serialize for RichTextDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RichTextDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(RichTextDocument::from_value(&value))
    }
}

fn children_from(obj: &Map<String, Value>) -> Vec<Node> {
    let Some(items) = obj.get("children").and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            let node = Node::from_value(item);
            if node.is_none() {
                tracing::debug!("dropping malformed rich-text node: {item}");
            }
            node
        })
        .collect()
}

fn nodes_to_values(nodes: &[Node]) -> Vec<Value> {
    nodes.iter().map(Node::to_value).collect()
}

/// Heading level from the editor's `tag` field, which is either `"h3"` or a
/// bare number. Unreadable tags count as level 1.
fn heading_level(tag: Option<&Value>) -> i64 {
    match tag {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(1),
        Some(Value::String(s)) => {
            let digits = s.trim().trim_start_matches(['h', 'H']);
            digits.parse().unwrap_or(1)
        }
        _ => 1,
    }
}

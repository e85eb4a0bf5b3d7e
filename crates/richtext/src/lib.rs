//! Rich-text trees as stored by the CMS editor: reading, rendering to
//! markup and flattening to plain text.

pub mod ast;
pub mod markdown;
pub mod plain;
pub mod render;

pub use ast::{Node, RichTextDocument, TextFormat};
pub use markdown::parse_markdown;
pub use plain::{extract_plain_text, extract_plain_text_value};
pub use render::{render_html, render_markup, MarkupNode};

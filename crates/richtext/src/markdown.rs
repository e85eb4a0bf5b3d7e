//! Reader for the markdown bundled copy is authored in.
//!
//! Paragraphs, headings, `**strong**`, `*emphasis*` and hard breaks map onto
//! tree nodes. Other constructs (links, lists, quotes, code) keep their text.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

use crate::ast::{Node, RichTextDocument, TextFormat};

enum BlockKind {
    Paragraph,
    Heading(i64),
}

#[derive(Default)]
struct Builder {
    blocks: Vec<Node>,
    current: Option<(BlockKind, Vec<Node>)>,
    bold: usize,
    italic: usize,
}

impl Builder {
    fn format(&self) -> TextFormat {
        let mut format = TextFormat::PLAIN;
        if self.bold > 0 {
            format = format.union(TextFormat::BOLD);
        }
        if self.italic > 0 {
            format = format.union(TextFormat::ITALIC);
        }
        format
    }

    fn open_block(&mut self, kind: BlockKind) {
        self.close_block();
        self.current = Some((kind, Vec::new()));
    }

    fn close_block(&mut self) {
        let Some((kind, children)) = self.current.take() else {
            return;
        };
        if children.is_empty() {
            return;
        }
        self.blocks.push(match kind {
            BlockKind::Paragraph => Node::Paragraph(children),
            BlockKind::Heading(level) => Node::Heading { level, children },
        });
    }

    fn inline(&mut self, node: Node) {
        let (_, children) = self
            .current
            .get_or_insert_with(|| (BlockKind::Paragraph, Vec::new()));
        children.push(node);
    }

    fn text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let format = self.format();
        // Adjacent runs with the same format are one run.
        if let Some((_, children)) = self.current.as_mut() {
            if let Some(Node::Text { text: last, format: last_format }) = children.last_mut() {
                if *last_format == format {
                    last.push_str(text);
                    return;
                }
            }
        }
        self.inline(Node::formatted(text, format));
    }

    fn finish(mut self) -> RichTextDocument {
        self.close_block();
        RichTextDocument::new(self.blocks)
    }
}

/// Parse markdown into a rich-text tree.
pub fn parse_markdown(input: &str) -> RichTextDocument {
    let mut builder = Builder::default();

    for event in Parser::new(input) {
        match event {
            Event::Start(Tag::Paragraph) => builder.open_block(BlockKind::Paragraph),
            Event::Start(Tag::Heading { level, .. }) => builder.open_block(BlockKind::Heading(level as i64)),
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_)) => builder.close_block(),
            Event::Start(Tag::Strong) => builder.bold += 1,
            Event::End(TagEnd::Strong) => builder.bold = builder.bold.saturating_sub(1),
            Event::Start(Tag::Emphasis) => builder.italic += 1,
            Event::End(TagEnd::Emphasis) => builder.italic = builder.italic.saturating_sub(1),
            Event::Text(text) | Event::Code(text) => builder.text(&text),
            Event::SoftBreak => builder.text(" "),
            Event::HardBreak => builder.inline(Node::LineBreak),
            _ => {}
        }
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plain::extract_plain_text;
    use crate::render::render_html;

    #[test]
    fn paragraphs_and_emphasis() {
        let doc = parse_markdown("**Bold lead.**\n\nPlain with *italic* & more.");
        assert_eq!(doc.children.len(), 2);
        assert_eq!(
            doc.children[0],
            Node::Paragraph(vec![Node::formatted("Bold lead.", TextFormat::BOLD)])
        );
        assert_eq!(
            render_html(Some(&doc)),
            "<p><strong>Bold lead.</strong></p><p>Plain with <em>italic</em> &amp; more.</p>"
        );
    }

    #[test]
    fn headings_and_breaks() {
        let doc = parse_markdown("## Title\n\nline one\\\nline two\nsame paragraph");
        assert_eq!(
            doc.children[0],
            Node::Heading {
                level: 2,
                children: vec![Node::text("Title")]
            }
        );
        assert_eq!(
            doc.children[1],
            Node::Paragraph(vec![
                Node::text("line one"),
                Node::LineBreak,
                Node::text("line two same paragraph"),
            ])
        );
    }

    #[test]
    fn other_constructs_keep_their_text() {
        let doc = parse_markdown("In [a link](/x) and `code`.\n\n> quoted");
        assert_eq!(extract_plain_text(Some(&doc)), "In a link and code. quoted");
    }

    #[test]
    fn apostrophes_and_brackets_are_literal() {
        let doc = parse_markdown("our platform's capabilities, a < b");
        assert_eq!(
            doc.children[0],
            Node::Paragraph(vec![Node::text("our platform's capabilities, a < b")])
        );
    }

    #[test]
    fn empty_input() {
        assert!(parse_markdown("").is_empty());
        assert!(parse_markdown("  \n\n ").is_empty());
    }
}

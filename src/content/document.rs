//! Rendered article HTML → display blocks.
//!
//! The front-end does not embed a browser engine, so the HTML produced by
//! `markdown::render` is parsed back with `scraper` into a flat list of
//! blocks with styled inline spans. Heading ids survive the trip so table of
//! contents entries can scroll to their targets.

use scraper::{ElementRef, Html, Node};
use serde::Serialize;

use super::markdown::slugify;

/// Tags whose children are never displayed.
const SKIP_CHILDREN: &[&str] = &["script", "style", "noscript", "svg"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SpanStyle {
    pub strong: bool,
    pub emphasis: bool,
    pub code: bool,
    pub strikethrough: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    Heading { level: u8, anchor: String, text: String },
    Paragraph(Vec<Span>),
    /// `ordinal` is `Some(n)` inside an ordered list.
    ListItem { depth: usize, ordinal: Option<usize>, spans: Vec<Span> },
    Table { header: Vec<String>, rows: Vec<Vec<String>> },
    Code(String),
    Rule,
}

impl Block {
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading { text, .. } => text.clone(),
            Block::Paragraph(spans) | Block::ListItem { spans, .. } => {
                spans.iter().map(|s| s.text.as_str()).collect()
            }
            Block::Table { header, rows } => std::iter::once(header)
                .chain(rows)
                .map(|r| r.join(" "))
                .collect::<Vec<_>>()
                .join("\n"),
            Block::Code(code) => code.clone(),
            Block::Rule => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ArticleDocument {
    pub blocks: Vec<Block>,
}

impl ArticleDocument {
    pub fn parse(html: &str) -> Self {
        let fragment = Html::parse_fragment(html);
        let mut blocks = Vec::new();
        collect_blocks(fragment.root_element(), &mut blocks, 0);
        Self { blocks }
    }

    /// Anchor ids of the h2/h3 headings, in order.
    pub fn anchors(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Heading { level: 2 | 3, anchor, .. } => Some(anchor.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Index of the block carrying `anchor`. First match wins.
    pub fn block_for_anchor(&self, anchor: &str) -> Option<usize> {
        self.blocks.iter().position(|b| {
            matches!(b, Block::Heading { anchor: a, .. } if a == anchor)
        })
    }
}

fn tag_name<'a>(el: &ElementRef<'a>) -> &'a str {
    el.value().name()
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn collect_blocks(el: ElementRef<'_>, out: &mut Vec<Block>, list_depth: usize) {
    for child in el.children() {
        match child.value() {
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    convert_block(child_el, out, list_depth);
                }
            }
            Node::Text(t) => {
                let s = t.text.to_string();
                if !s.trim().is_empty() {
                    out.push(Block::Paragraph(vec![Span {
                        text: s.trim().to_string(),
                        style: SpanStyle::default(),
                        link: None,
                    }]));
                }
            }
            _ => {}
        }
    }
}

fn convert_block(el: ElementRef<'_>, out: &mut Vec<Block>, list_depth: usize) {
    let tag = tag_name(&el);
    if SKIP_CHILDREN.contains(&tag) {
        return;
    }
    match tag {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            let level = tag.as_bytes()[1] - b'0';
            let text = element_text(el);
            let anchor = el
                .value()
                .attr("id")
                .map(str::to_string)
                .unwrap_or_else(|| slugify(&text));
            out.push(Block::Heading { level, anchor, text });
        }
        "p" => {
            let spans = inline_spans(el);
            if !spans.is_empty() {
                out.push(Block::Paragraph(spans));
            }
        }
        "ul" | "ol" => {
            let start = el
                .value()
                .attr("start")
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(1);
            let ordered = tag == "ol";
            let items = el
                .children()
                .filter_map(ElementRef::wrap)
                .filter(|c| tag_name(c) == "li");
            for (i, li) in items.enumerate() {
                convert_list_item(li, out, list_depth, ordered.then_some(start + i));
            }
        }
        "table" => out.push(convert_table(el)),
        "pre" => out.push(Block::Code(el.text().collect())),
        "hr" => out.push(Block::Rule),
        _ => collect_blocks(el, out, list_depth),
    }
}

/// Inline content becomes this item's spans; nested lists follow it one
/// level deeper.
fn convert_list_item(li: ElementRef<'_>, out: &mut Vec<Block>, depth: usize, ordinal: Option<usize>) {
    let mut spans = Vec::new();
    let mut nested = Vec::new();
    for child in li.children() {
        match ElementRef::wrap(child) {
            Some(c) if matches!(tag_name(&c), "ul" | "ol") => nested.push(c),
            Some(c) if tag_name(&c) == "p" => {
                if !spans.is_empty() {
                    spans.push(plain_span(" "));
                }
                push_inline(c, SpanStyle::default(), None, &mut spans);
            }
            Some(c) => push_inline_element(c, SpanStyle::default(), None, &mut spans),
            None => {
                if let Node::Text(t) = child.value() {
                    push_text(&t.text, SpanStyle::default(), None, &mut spans);
                }
            }
        }
    }
    trim_spans(&mut spans);
    out.push(Block::ListItem { depth, ordinal, spans });
    for list in nested {
        convert_block(list, out, depth + 1);
    }
}

fn convert_table(table: ElementRef<'_>) -> Block {
    let mut header = Vec::new();
    let mut rows = Vec::new();
    for row in table
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|e| tag_name(e) == "tr")
    {
        let cells: Vec<ElementRef<'_>> = row
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|c| matches!(tag_name(c), "th" | "td"))
            .collect();
        let texts: Vec<String> = cells.iter().map(|c| element_text(*c)).collect();
        if header.is_empty() && cells.iter().all(|c| tag_name(c) == "th") {
            header = texts;
        } else {
            rows.push(texts);
        }
    }
    Block::Table { header, rows }
}

fn plain_span(text: &str) -> Span {
    Span {
        text: text.to_string(),
        style: SpanStyle::default(),
        link: None,
    }
}

fn inline_spans(el: ElementRef<'_>) -> Vec<Span> {
    let mut spans = Vec::new();
    push_inline(el, SpanStyle::default(), None, &mut spans);
    trim_spans(&mut spans);
    spans
}

fn push_inline(el: ElementRef<'_>, style: SpanStyle, link: Option<&str>, out: &mut Vec<Span>) {
    for child in el.children() {
        match child.value() {
            Node::Text(t) => push_text(&t.text, style, link, out),
            Node::Element(_) => {
                if let Some(c) = ElementRef::wrap(child) {
                    push_inline_element(c, style, link, out);
                }
            }
            _ => {}
        }
    }
}

fn push_inline_element<'a>(el: ElementRef<'a>, mut style: SpanStyle, mut link: Option<&'a str>, out: &mut Vec<Span>) {
    match tag_name(&el) {
        "strong" | "b" => style.strong = true,
        "em" | "i" => style.emphasis = true,
        "code" => style.code = true,
        "del" | "s" => style.strikethrough = true,
        "a" => link = el.value().attr("href").or(link),
        "br" => {
            out.push(Span { text: "\n".into(), style, link: link.map(str::to_string) });
            return;
        }
        tag if SKIP_CHILDREN.contains(&tag) => return,
        _ => {}
    }
    push_inline(el, style, link, out);
}

/// Append text, merging into the previous span when the styling matches.
fn push_text(text: &str, style: SpanStyle, link: Option<&str>, out: &mut Vec<Span>) {
    if text.is_empty() {
        return;
    }
    let link = link.map(str::to_string);
    match out.last_mut() {
        Some(last) if last.style == style && last.link == link => last.text.push_str(text),
        _ => out.push(Span { text: text.to_string(), style, link }),
    }
}

fn trim_spans(spans: &mut Vec<Span>) {
    if let Some(first) = spans.first_mut() {
        first.text = first.text.trim_start().to_string();
    }
    if let Some(last) = spans.last_mut() {
        last.text = last.text.trim_end().to_string();
    }
    spans.retain(|s| !s.text.is_empty());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{builtin_articles, extract_headings, render};

    #[test]
    fn headings_keep_their_ids() {
        let doc = ArticleDocument::parse(&render("## First Part\n\ntext\n\n### Sub (A-B)\n"));
        assert_eq!(doc.anchors(), vec!["first-part", "sub-a-b"]);
        assert_eq!(doc.block_for_anchor("sub-a-b"), Some(2));
    }

    #[test]
    fn paragraph_spans_carry_style() {
        let doc = ArticleDocument::parse(&render("Plain **bold** and *em* with `code` and [a link](/blog)."));
        let Block::Paragraph(spans) = &doc.blocks[0] else {
            panic!("expected paragraph, got {:?}", doc.blocks[0]);
        };
        assert!(spans.iter().any(|s| s.text == "bold" && s.style.strong));
        assert!(spans.iter().any(|s| s.text == "em" && s.style.emphasis));
        assert!(spans.iter().any(|s| s.text == "code" && s.style.code));
        assert!(spans.iter().any(|s| s.text == "a link" && s.link.as_deref() == Some("/blog")));
        assert_eq!(doc.blocks[0].plain_text(), "Plain bold and em with code and a link.");
    }

    #[test]
    fn lists_number_and_nest() {
        let doc = ArticleDocument::parse(&render("1. **Prep**: clean\n2. Prime\n   - inner\n"));
        let items: Vec<_> = doc
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::ListItem { depth, ordinal, .. } => Some((*depth, *ordinal)),
                _ => None,
            })
            .collect();
        assert_eq!(items, vec![(0, Some(1)), (0, Some(2)), (1, None)]);
        assert_eq!(doc.blocks[0].plain_text(), "Prep: clean");
    }

    #[test]
    fn tables_split_header_and_rows() {
        let doc = ArticleDocument::parse(&render("| Factor | Coating |\n|---|---|\n| Cost | $3-6 |\n"));
        assert_eq!(
            doc.blocks,
            vec![Block::Table {
                header: vec!["Factor".into(), "Coating".into()],
                rows: vec![vec!["Cost".into(), "$3-6".into()]],
            }]
        );
    }

    #[test]
    fn code_and_rules() {
        let doc = ArticleDocument::parse(&render("```\n## not a heading\n```\n\n---\n"));
        assert_eq!(doc.blocks, vec![Block::Code("## not a heading\n".into()), Block::Rule]);
        assert!(doc.anchors().is_empty());
    }

    #[test]
    fn builtin_articles_anchor_agreement() {
        for article in builtin_articles().unwrap() {
            let doc = ArticleDocument::parse(&render(&article.content));
            let expected: Vec<String> = extract_headings(&article.content)
                .into_iter()
                .map(|h| h.anchor_id)
                .collect();
            assert_eq!(doc.anchors(), expected, "{}", article.slug);
        }
    }
}

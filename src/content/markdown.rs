//! Markdown → HTML with heading anchors, plus the table of contents.
//!
//! Two independent passes must agree on the anchor ids:
//!
//! 1. `render` runs pulldown-cmark, then rescans the HTML for `<h2>`/`<h3>`,
//!    strips any inline tags from the heading body and injects `id="slug"`.
//! 2. `extract_headings` parses the *source* again, collects the text of
//!    every level-2/3 heading event and slugifies it.
//!
//! `verify_outline` checks the two sequences match. Duplicate heading texts
//! produce duplicate ids; the first occurrence wins as an in-page target.

use log::warn;
use pulldown_cmark::{html, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use scraper::{ElementRef, Html};
use serde::Serialize;

use super::ContentError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingEntry {
    /// 2 or 3.
    pub level: u8,
    pub text: String,
    pub anchor_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedArticle {
    pub html: String,
    pub headings: Vec<HeadingEntry>,
}

fn options() -> Options {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts
}

/// Lowercase, collapse every run of non `[a-z0-9]` characters into one `-`,
/// trim leading/trailing `-`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Render markdown to HTML with `id` attributes on every h2/h3.
pub fn render(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len() + markup.len() / 2);
    html::push_html(&mut out, Parser::new_ext(markup, options()));
    inject_heading_ids(&out)
}

/// Text content of an HTML fragment, entities decoded, tags dropped.
fn fragment_text(fragment: &str) -> String {
    Html::parse_fragment(fragment)
        .root_element()
        .text()
        .collect::<String>()
}

fn inject_heading_ids(html: &str) -> String {
    let mut out = String::with_capacity(html.len() + 64);
    let mut rest = html;
    while let Some((pos, level)) = next_heading_open(rest) {
        let body_start = pos + 4;
        let close = format!("</h{level}>");
        let Some(body_len) = rest[body_start..].find(&close) else {
            break;
        };
        let body = &rest[body_start..body_start + body_len];
        let id = slugify(&fragment_text(body));
        out.push_str(&rest[..pos]);
        out.push_str(&format!("<h{level} id=\"{id}\">{body}{close}"));
        rest = &rest[body_start + body_len + close.len()..];
    }
    out.push_str(rest);
    out
}

/// Byte offset and level of the next bare `<h2>` / `<h3>` tag.
fn next_heading_open(html: &str) -> Option<(usize, char)> {
    let mut from = 0;
    while let Some(found) = html[from..].find("<h") {
        let at = from + found;
        let tail = &html.as_bytes()[at + 2..];
        if let [level @ (b'2' | b'3'), b'>', ..] = tail {
            return Some((at, *level as char));
        }
        from = at + 2;
    }
    None
}

/// Table-of-contents entries for every level-2/3 heading, in order.
///
/// Walks the parser's own heading events, so setext headings and headings
/// nested in block quotes or list items are included, while `##` lines
/// inside fenced code or raw HTML blocks are not.
pub fn extract_headings(markup: &str) -> Vec<HeadingEntry> {
    let mut headings = Vec::new();
    // Level and text of the heading currently open.
    let mut open: Option<(u8, String)> = None;

    for event in Parser::new_ext(markup, options()) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                open = match level {
                    HeadingLevel::H2 => Some((2, String::new())),
                    HeadingLevel::H3 => Some((3, String::new())),
                    _ => None,
                };
            }
            Event::Text(t) | Event::Code(t) => {
                if let Some((_, text)) = open.as_mut() {
                    text.push_str(&t);
                }
            }
            // Multi-line setext headings.
            Event::SoftBreak | Event::HardBreak => {
                if let Some((_, text)) = open.as_mut() {
                    text.push(' ');
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, text)) = open.take() {
                    headings.push(HeadingEntry {
                        level,
                        anchor_id: slugify(&text),
                        text,
                    });
                }
            }
            _ => {}
        }
    }
    headings
}

/// Anchor ids on the h2/h3 elements of rendered HTML, in document order.
pub fn rendered_anchors(html: &str) -> Vec<String> {
    let fragment = Html::parse_fragment(html);
    fragment
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| matches!(el.value().name(), "h2" | "h3"))
        .map(|el| el.value().attr("id").unwrap_or_default().to_string())
        .collect()
}

/// Check the rendered anchors and the extracted outline agree.
pub fn verify_outline(markup: &str) -> Result<Vec<HeadingEntry>, ContentError> {
    let headings = extract_headings(markup);
    let rendered = rendered_anchors(&render(markup));
    let extracted: Vec<String> = headings.iter().map(|h| h.anchor_id.clone()).collect();
    if rendered == extracted {
        Ok(headings)
    } else {
        Err(ContentError::OutlineMismatch { rendered, extracted })
    }
}

/// Render once for display: HTML plus table of contents.
pub fn render_article(markup: &str) -> RenderedArticle {
    let html = render(markup);
    let headings = extract_headings(markup);
    let rendered = rendered_anchors(&html);
    if rendered.len() != headings.len()
        || rendered.iter().zip(&headings).any(|(a, h)| *a != h.anchor_id)
    {
        warn!(
            "table of contents disagrees with rendered headings ({} vs {})",
            headings.len(),
            rendered.len()
        );
    }
    RenderedArticle { html, headings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn slugify_rules() {
        assert_eq!(slugify("TPO (Thermoplastic Polyolefin)"), "tpo-thermoplastic-polyolefin");
        assert_eq!(slugify("Cost Comparison: Coating vs. Replacement"), "cost-comparison-coating-vs-replacement");
        assert_eq!(slugify("  --Hello--  "), "hello");
        assert_eq!(slugify("Café"), "caf");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn render_injects_ids() {
        let html = render("## The ROI of *Preventive* Maintenance\n\ntext\n\n### Spring (March-May)\n");
        assert!(html.contains(r#"<h2 id="the-roi-of-preventive-maintenance">The ROI of <em>Preventive</em> Maintenance</h2>"#));
        assert!(html.contains(r#"<h3 id="spring-march-may">"#));
    }

    #[test]
    fn entities_are_decoded_before_slugging() {
        let html = render("## Coatings & Membranes\n");
        assert!(html.contains(r#"id="coatings-membranes""#), "{html}");
    }

    #[test]
    fn other_levels_are_untouched() {
        let html = render("# Title\n\n#### Deep\n");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<h4>Deep</h4>"));
        assert!(extract_headings("# Title\n\n#### Deep\n").is_empty());
    }

    #[test]
    fn extract_skips_fenced_code() {
        let md = "## Real\n\n```\n## not a heading\n```\n\n~~~~\n### also not\n~~~~\n\n### After";
        let ids: Vec<_> = extract_headings(md).into_iter().map(|h| (h.level, h.anchor_id)).collect();
        assert_eq!(ids, vec![(2, "real".to_string()), (3, "after".to_string())]);
        verify_outline(md).unwrap();
    }

    #[test]
    fn closing_hashes_and_inline_markup() {
        let h = extract_headings("## **Key** `Advantages` ##\n");
        assert_eq!(h[0].text, "Key Advantages");
        assert_eq!(h[0].anchor_id, "key-advantages");
        assert!(extract_headings("##NoSpace\n").is_empty());
    }

    #[test]
    fn numbered_headings_keep_their_number() {
        let md = "## 1. Introduction\n\ntext\n\n## 2) Step\n\n### 1999. A Year\n";
        let headings = verify_outline(md).unwrap();
        let ids: Vec<&str> = headings.iter().map(|h| h.anchor_id.as_str()).collect();
        assert_eq!(ids, vec!["1-introduction", "2-step", "1999-a-year"]);
        assert_eq!(headings[0].text, "1. Introduction");
    }

    #[test]
    fn setext_and_nested_headings_are_listed() {
        let md = "Overview\n--------\n\n> ## Note\n\n- ### In a list\n\nPlain\n";
        let headings = verify_outline(md).unwrap();
        let ids: Vec<(u8, &str)> = headings.iter().map(|h| (h.level, h.anchor_id.as_str())).collect();
        assert_eq!(ids, vec![(2, "overview"), (2, "note"), (3, "in-a-list")]);
    }

    #[test]
    fn html_blocks_are_not_headings() {
        let md = "<div>\n## inside html\n</div>\n\n## Outside\n";
        let ids: Vec<String> = extract_headings(md).into_iter().map(|h| h.anchor_id).collect();
        assert_eq!(ids, vec!["outside"]);
        assert_eq!(rendered_anchors(&render(md)), ids);
    }

    #[test]
    fn duplicate_headings_share_an_id() {
        let md = "## Overview\n\n## Overview\n";
        let h = verify_outline(md).unwrap();
        assert_eq!(h[0].anchor_id, h[1].anchor_id);
    }

    #[test]
    fn tables_render() {
        let html = render("| A | B |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>2</td>"));
    }

    #[test]
    fn render_article_keeps_toc_order() {
        let r = render_article("## One\n\n### Two\n\n## Three\n");
        let levels: Vec<u8> = r.headings.iter().map(|h| h.level).collect();
        assert_eq!(levels, vec![2, 3, 2]);
        assert_eq!(rendered_anchors(&r.html), vec!["one", "two", "three"]);
    }

    proptest! {
        #[test]
        fn slugs_are_url_safe(text in "\\PC{0,40}") {
            let s = slugify(&text);
            prop_assert!(s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            prop_assert!(!s.starts_with('-') && !s.ends_with('-'));
            prop_assert!(!s.contains("--"));
        }

        #[test]
        fn plain_word_headings_agree(words in prop::collection::vec("[A-Za-z][A-Za-z0-9]{0,8}", 1..6), level in 2u8..=3) {
            let md = format!("{} {}\n\nbody\n", "#".repeat(level as usize), words.join(" "));
            let headings = verify_outline(&md).unwrap();
            prop_assert_eq!(headings.len(), 1);
            prop_assert_eq!(headings[0].level, level);
        }

        #[test]
        fn numbered_and_setext_headings_agree(n in 0u32..3000, words in prop::collection::vec("[A-Za-z]{1,8}", 1..4), setext in any::<bool>()) {
            // A setext paragraph that opens with `1.` would be a list item instead.
            let title = if setext {
                format!("Part {n}. {}", words.join(" "))
            } else {
                format!("{n}. {}", words.join(" "))
            };
            let md = if setext {
                format!("{title}\n{}\n\nbody\n", "-".repeat(title.len()))
            } else {
                format!("## {title}\n\nbody\n")
            };
            let headings = verify_outline(&md).unwrap();
            prop_assert_eq!(headings.len(), 1);
            prop_assert_eq!(&headings[0].text, &title);
        }
    }
}

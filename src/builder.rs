//! Document tree builder.
//!
//! Consumes classified blocks in document order and assembles one `HtmlNode`
//! subtree per block, recursing into the inline tokenizer for every inline
//! region. Fenced code interiors are the one exception: their text is taken
//! verbatim with no inline interpretation.

use crate::block::{BlockKind, classify, split_blocks};
use crate::inline::{SpanKind, TextSpan, tokenize};
use crate::node::HtmlNode;
use crate::Error;

/// Build the HTML node tree for a whole document.
///
/// Returns a `Parent` with tag `div` holding one child per block.
///
/// # Errors
/// A whitespace-only or empty document has zero blocks, and the root `div`
/// cannot be built without children: the call fails with
/// [`Error::NoChildren`]. Callers that want to accept empty pages must check
/// before converting.
pub fn document_to_node(document: &str) -> Result<HtmlNode, Error> {
    let mut children = Vec::new();
    for block in split_blocks(document) {
        children.push(block_to_node(block)?);
    }
    HtmlNode::parent("div", children)
}

/// Build the subtree for one trimmed block.
fn block_to_node(block: &str) -> Result<HtmlNode, Error> {
    match classify(block) {
        BlockKind::Heading => {
            let level = block.bytes().take_while(|&b| b == b'#').count();
            let text = block[level + 1..].trim();
            HtmlNode::parent(&format!("h{level}"), inline_children(text))
        }
        BlockKind::Code => {
            // Drop the fence lines; the interior is literal, joined with
            // newlines plus one trailing newline.
            let lines: Vec<&str> = block.lines().collect();
            let interior = if lines.len() > 2 {
                lines[1..lines.len() - 1].join("\n")
            } else {
                String::new()
            };
            let code = HtmlNode::leaf(Some("code"), interior + "\n");
            HtmlNode::parent("pre", vec![code])
        }
        BlockKind::Quote => {
            let text = block
                .lines()
                .map(|line| &line[2..])
                .collect::<Vec<_>>()
                .join(" ");
            HtmlNode::parent("blockquote", inline_children(&text))
        }
        BlockKind::UnorderedList => {
            let items = block
                .lines()
                .map(|line| HtmlNode::parent("li", inline_children(&line[2..])))
                .collect::<Result<Vec<_>, _>>()?;
            HtmlNode::parent("ul", items)
        }
        BlockKind::OrderedList => {
            let items = block
                .lines()
                .zip(1usize..)
                .map(|(line, i)| {
                    // Marker is the digits of i, the dot and one space.
                    let marker_len = i.to_string().len() + 2;
                    HtmlNode::parent("li", inline_children(&line[marker_len..]))
                })
                .collect::<Result<Vec<_>, _>>()?;
            HtmlNode::parent("ol", items)
        }
        BlockKind::Paragraph => {
            // Newlines become spaces, then every whitespace run is removed
            // outright. The squeeze is deliberate dialect behavior.
            let joined = block.replace('\n', " ");
            let squeezed: String = joined.split_whitespace().collect();
            HtmlNode::parent("p", inline_children(&squeezed))
        }
    }
}

fn inline_children(text: &str) -> Vec<HtmlNode> {
    tokenize(text).into_iter().map(span_to_node).collect()
}

/// Map one typed span to its leaf node.
pub fn span_to_node(span: TextSpan) -> HtmlNode {
    match span.kind {
        SpanKind::Plain => HtmlNode::leaf(None, span.text),
        SpanKind::Bold => HtmlNode::leaf(Some("b"), span.text),
        SpanKind::Italic => HtmlNode::leaf(Some("i"), span.text),
        SpanKind::Code => HtmlNode::leaf(Some("code"), span.text),
        SpanKind::Link => {
            let url = span.url.unwrap_or_default();
            HtmlNode::leaf_with_attrs(Some("a"), span.text, vec![("href".into(), url)])
        }
        SpanKind::Image => {
            let url = span.url.unwrap_or_default();
            HtmlNode::leaf_with_attrs(
                Some("img"),
                "",
                vec![("src".into(), url), ("alt".into(), span.text)],
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn html(document: &str) -> String {
        document_to_node(document).unwrap().render().unwrap()
    }

    #[test]
    fn heading_block() {
        assert_eq!(html("# Title"), "<div><h1>Title</h1></div>");
        assert_eq!(html("### Deep"), "<div><h3>Deep</h3></div>");
    }

    #[test]
    fn heading_with_inline_markup() {
        assert_eq!(
            html("## A **bold** move"),
            "<div><h2>A <b>bold</b> move</h2></div>"
        );
    }

    #[test]
    fn code_block_is_verbatim() {
        assert_eq!(
            html("```\nThis is text that _should_ remain\nthe **same** even with inline stuff\n```"),
            "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
        );
    }

    #[test]
    fn empty_code_block() {
        assert_eq!(html("```\n```"), "<div><pre><code>\n</code></pre></div>");
        assert_eq!(html("``````"), "<div><pre><code>\n</code></pre></div>");
    }

    #[test]
    fn quote_lines_join_with_space() {
        assert_eq!(
            html("> first line\n> second line"),
            "<div><blockquote>first line second line</blockquote></div>"
        );
    }

    #[test]
    fn unordered_list() {
        assert_eq!(
            html("- Item 1\n- Item 2"),
            "<div><ul><li>Item 1</li><li>Item 2</li></ul></div>"
        );
    }

    #[test]
    fn ordered_list_strips_numbered_markers() {
        assert_eq!(
            html("1. one\n2. two\n3. three"),
            "<div><ol><li>one</li><li>two</li><li>three</li></ol></div>"
        );
    }

    #[test]
    fn list_items_get_inline_parsing() {
        assert_eq!(
            html("- plain\n- **bold**\n- `code`"),
            "<div><ul><li>plain</li><li><b>bold</b></li><li><code>code</code></li></ul></div>"
        );
    }

    #[test]
    fn paragraph_squeezes_all_whitespace() {
        assert_eq!(
            html("This is **bolded**\ntext"),
            "<div><p>Thisis<b>bolded</b>text</p></div>"
        );
    }

    #[test]
    fn paragraph_with_image() {
        assert_eq!(
            html("![image](url)"),
            "<div><p><img src=\"url\" alt=\"image\" /></p></div>"
        );
    }

    #[test]
    fn multiple_blocks_in_order() {
        assert_eq!(
            html("# Head\n\n> quoted\n\n- item"),
            "<div><h1>Head</h1><blockquote>quoted</blockquote><ul><li>item</li></ul></div>"
        );
    }

    #[test]
    fn empty_document_fails_on_root_invariant() {
        assert_eq!(
            document_to_node("   \n\n  ").unwrap_err(),
            Error::NoChildren("div".into())
        );
        assert_eq!(
            document_to_node("").unwrap_err(),
            Error::NoChildren("div".into())
        );
    }

    #[test]
    fn span_to_node_mappings() {
        assert_eq!(
            span_to_node(TextSpan::plain("x")).render().unwrap(),
            "x"
        );
        let link = TextSpan {
            kind: SpanKind::Link,
            text: "This is some anchor text".into(),
            url: Some("https://www.boot.dev".into()),
        };
        assert_eq!(
            span_to_node(link).render().unwrap(),
            "<a href=\"https://www.boot.dev\">This is some anchor text</a>"
        );
        let image = TextSpan {
            kind: SpanKind::Image,
            text: "alt".into(),
            url: Some("u.png".into()),
        };
        assert_eq!(
            span_to_node(image).render().unwrap(),
            "<img src=\"u.png\" alt=\"alt\" />"
        );
    }
}

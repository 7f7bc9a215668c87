use pretty_assertions::assert_eq;
use tinymark::{Error, render_document};

// End-to-end document conversions with exact output strings.

#[test]
fn heading_only() {
    assert_eq!(render_document("# Title").unwrap(), "<div><h1>Title</h1></div>");
}

#[test]
fn two_item_list() {
    assert_eq!(
        render_document("- Item 1\n- Item 2").unwrap(),
        "<div><ul><li>Item 1</li><li>Item 2</li></ul></div>"
    );
}

#[test]
fn ordered_list_with_inline_markup() {
    assert_eq!(
        render_document("1. **first**\n2. _second_\n3. `third`").unwrap(),
        "<div><ol><li><b>first</b></li><li><i>second</i></li><li><code>third</code></li></ol></div>"
    );
}

#[test]
fn quote_block() {
    assert_eq!(
        render_document("> nothing is written\n> in stone").unwrap(),
        "<div><blockquote>nothing is written in stone</blockquote></div>"
    );
}

#[test]
fn paragraph_newline_and_squeeze() {
    assert_eq!(
        render_document("This is **bolded**\ntext").unwrap(),
        "<div><p>Thisis<b>bolded</b>text</p></div>"
    );
}

#[test]
fn image_inside_paragraph() {
    assert_eq!(
        render_document("![image](url)").unwrap(),
        "<div><p><img src=\"url\" alt=\"image\" /></p></div>"
    );
}

#[test]
fn link_inside_paragraph() {
    assert_eq!(
        render_document("[boot.dev](https://boot.dev)").unwrap(),
        "<div><p><a href=\"https://boot.dev\">boot.dev</a></p></div>"
    );
}

#[test]
fn code_fence_keeps_markers_verbatim() {
    assert_eq!(
        render_document("```\nThis is text that _should_ remain\nthe **same** even with inline stuff\n```")
            .unwrap(),
        "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
    );
}

#[test]
fn broken_ordered_sequence_renders_as_paragraph() {
    // "1. a" then "3. b" fails ordered-list validation and squeezes like any
    // other paragraph.
    assert_eq!(
        render_document("1. a\n3. b").unwrap(),
        "<div><p>1.a3.b</p></div>"
    );
}

#[test]
fn full_document() {
    let doc = "\
# The Title

An intro paragraph.

## Section

> A quoted
> aside

- one
- two

1. first
2. second

```
let x = 1;
```";
    assert_eq!(
        render_document(doc).unwrap(),
        "<div>\
         <h1>The Title</h1>\
         <p>Anintroparagraph.</p>\
         <h2>Section</h2>\
         <blockquote>A quoted aside</blockquote>\
         <ul><li>one</li><li>two</li></ul>\
         <ol><li>first</li><li>second</li></ol>\
         <pre><code>let x = 1;\n</code></pre>\
         </div>"
    );
}

#[test]
fn crlf_document() {
    assert_eq!(
        render_document("# A\r\n\r\n- x\r\n- y").unwrap(),
        "<div><h1>A</h1><ul><li>x</li><li>y</li></ul></div>"
    );
}

#[test]
fn empty_documents_error_instead_of_partial_output() {
    assert_eq!(render_document("").unwrap_err(), Error::NoChildren("div".into()));
    assert_eq!(
        render_document(" \t\n\n  \n").unwrap_err(),
        Error::NoChildren("div".into())
    );
}

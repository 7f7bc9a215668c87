//! Inline span tokenizer.
//!
//! Converts a raw text string into an ordered sequence of typed spans by
//! running a fixed pipeline of five single-pattern splitting passes, in this
//! exact order: image, link, code, bold, italic. Each pass leaves every
//! non-plain span untouched and rescans only plain spans for its own pattern,
//! repeatedly taking the leftmost match. The order encodes precedence: images
//! must go before links (link syntax is image syntax minus the leading `!`),
//! and code spans go before bold/italic so emphasis markers inside backticks
//! are never interpreted.
//!
//! The tokenizer is total. Malformed or unmatched markers are ordinary
//! literal text, never an error.

mod delimited;
mod links;

pub use links::{extract_images, extract_links};

/// Classification of one inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Literal text with no inline markup.
    Plain,
    /// `**text**`
    Bold,
    /// `_text_`
    Italic,
    /// `` `text` ``
    Code,
    /// `[text](url)`
    Link,
    /// `![alt](url)`
    Image,
}

/// One classified, indivisible run of inline text.
///
/// `url` is present exactly for [`SpanKind::Link`] and [`SpanKind::Image`]
/// spans produced by [`tokenize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub kind: SpanKind,
    pub text: String,
    pub url: Option<String>,
}

impl TextSpan {
    /// Create a plain literal span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Plain,
            text: text.into(),
            url: None,
        }
    }

    pub(crate) fn new(kind: SpanKind, text: impl Into<String>, url: Option<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            url,
        }
    }
}

/// One pattern occurrence inside a plain span's text.
pub(crate) struct PatternMatch {
    /// Byte offset where the matched syntax starts.
    pub(crate) start: usize,
    /// Byte offset one past the matched syntax.
    pub(crate) end: usize,
    /// The typed span the match produces.
    pub(crate) span: TextSpan,
}

/// Tokenize a text string into typed inline spans.
///
/// Total; never fails. Empty input yields exactly one empty plain span.
///
/// # Example
/// ```
/// use tinymark::{tokenize, SpanKind};
///
/// let spans = tokenize("a **b** c");
/// assert_eq!(spans.len(), 3);
/// assert_eq!(spans[1].kind, SpanKind::Bold);
/// assert_eq!(spans[1].text, "b");
/// ```
pub fn tokenize(text: &str) -> Vec<TextSpan> {
    if text.is_empty() {
        return vec![TextSpan::plain("")];
    }
    let mut spans = vec![TextSpan::plain(text)];
    spans = split_plain_spans(spans, links::find_image);
    spans = split_plain_spans(spans, links::find_link);
    spans = split_plain_spans(spans, delimited::find_code);
    spans = split_plain_spans(spans, delimited::find_bold);
    spans = split_plain_spans(spans, delimited::find_italic);
    spans
}

/// Run one splitting pass over a span sequence.
///
/// Non-plain spans pass through untouched. For each plain span, repeatedly
/// take the leftmost match, emitting any preceding literal text as a plain
/// span and the match as its typed span; leftover trailing text survives as a
/// plain span, and an exhausted remainder emits nothing.
fn split_plain_spans(
    spans: Vec<TextSpan>,
    find: impl Fn(&str) -> Option<PatternMatch>,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if span.kind != SpanKind::Plain {
            out.push(span);
            continue;
        }
        let mut rest = span.text.as_str();
        while let Some(found) = find(rest) {
            if found.start > 0 {
                out.push(TextSpan::plain(&rest[..found.start]));
            }
            out.push(found.span);
            rest = &rest[found.end..];
        }
        if !rest.is_empty() {
            out.push(TextSpan::plain(rest));
        }
    }
    out
}

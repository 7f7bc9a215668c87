//! Code, bold and italic matchers.
//!
//! All three are marker-delimited runs with a non-empty body that excludes
//! the marker character itself: `` `body` ``, `**body**` (no `*` in the
//! body), `_body_` (no `_` in the body). There is no nesting and no error
//! path: a marker that cannot be paired is literal text, which the pass
//! driver keeps as a plain span.

use memchr::memchr;

use super::{PatternMatch, SpanKind, TextSpan};

/// Find the leftmost `` `code` `` match in `text`.
pub(crate) fn find_code(text: &str) -> Option<PatternMatch> {
    find_single(text, b'`', SpanKind::Code)
}

/// Find the leftmost `_italic_` match in `text`.
pub(crate) fn find_italic(text: &str) -> Option<PatternMatch> {
    find_single(text, b'_', SpanKind::Italic)
}

/// Single-character marker: `<m>body<m>` with a non-empty body excluding the
/// marker.
fn find_single(text: &str, marker: u8, kind: SpanKind) -> Option<PatternMatch> {
    let bytes = text.as_bytes();
    let mut from = 0;
    while let Some(rel) = memchr(marker, &bytes[from..]) {
        let open = from + rel;
        let body_start = open + 1;
        match memchr(marker, &bytes[body_start..]) {
            // No closer anywhere to the right: no later opener can pair
            // either.
            None => return None,
            // Adjacent markers have an empty body; retry from the second one.
            Some(0) => from = body_start,
            Some(len) => {
                let close = body_start + len;
                return Some(PatternMatch {
                    start: open,
                    end: close + 1,
                    span: TextSpan::new(kind, &text[body_start..close], None),
                });
            }
        }
    }
    None
}

/// Find the leftmost `**bold**` match in `text`.
///
/// The body is one or more non-`*` characters; the closer must be a double
/// asterisk. A candidate whose body runs into a single `*` fails, and the
/// search resumes one byte past the candidate's opener, matching leftmost
/// semantics exactly.
pub(crate) fn find_bold(text: &str) -> Option<PatternMatch> {
    let bytes = text.as_bytes();
    let mut from = 0;
    while let Some(rel) = memchr(b'*', &bytes[from..]) {
        let open = from + rel;
        if bytes.get(open + 1) != Some(&b'*') {
            from = open + 1;
            continue;
        }
        let body_start = open + 2;
        let Some(len) = memchr(b'*', &bytes[body_start..]) else {
            return None;
        };
        if len == 0 {
            // Empty body (`***`, `****`, ...); retry at the next position.
            from = open + 1;
            continue;
        }
        let close = body_start + len;
        if bytes.get(close + 1) == Some(&b'*') {
            return Some(PatternMatch {
                start: open,
                end: close + 2,
                span: TextSpan::new(SpanKind::Bold, &text[body_start..close], None),
            });
        }
        // Single-asterisk closer; this opener can never match.
        from = open + 1;
    }
    None
}

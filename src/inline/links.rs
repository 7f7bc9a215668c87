//! Image and link matchers.
//!
//! Grammar: `![alt](dest)` and `[label](dest)` where the alt/label contains
//! no literal `[` or `]`, and the destination is a run of non-parenthesis
//! characters with at most one level of `(..)` groups (`url(x)y` is valid).
//! The link matcher additionally requires the opening bracket not to be
//! preceded by `!` — a guard against stray markers, since the image pass has
//! already removed every image match by the time links are scanned.

use memchr::{memchr, memchr2, memchr_iter};

use super::{PatternMatch, SpanKind, TextSpan};

/// Find the leftmost image match in `text`.
pub(crate) fn find_image(text: &str) -> Option<PatternMatch> {
    let bytes = text.as_bytes();
    for bang in memchr_iter(b'!', bytes) {
        if bytes.get(bang + 1) != Some(&b'[') {
            continue;
        }
        if let Some((label, dest, end)) = match_bracket_pair(text, bang + 1) {
            return Some(PatternMatch {
                start: bang,
                end,
                span: TextSpan::new(SpanKind::Image, label, Some(dest.to_owned())),
            });
        }
    }
    None
}

/// Find the leftmost link match in `text`.
pub(crate) fn find_link(text: &str) -> Option<PatternMatch> {
    let bytes = text.as_bytes();
    for open in memchr_iter(b'[', bytes) {
        if open > 0 && bytes[open - 1] == b'!' {
            continue;
        }
        if let Some((label, dest, end)) = match_bracket_pair(text, open) {
            return Some(PatternMatch {
                start: open,
                end,
                span: TextSpan::new(SpanKind::Link, label, Some(dest.to_owned())),
            });
        }
    }
    None
}

/// Match `[label](dest)` with the opening bracket at byte offset `open`.
///
/// Returns the label, the destination and the offset one past the closing
/// parenthesis.
fn match_bracket_pair(text: &str, open: usize) -> Option<(&str, &str, usize)> {
    let bytes = text.as_bytes();
    debug_assert_eq!(bytes[open], b'[');

    // Label: everything up to the first bracket, which must close.
    let rel = memchr2(b'[', b']', &bytes[open + 1..])?;
    let close = open + 1 + rel;
    if bytes[close] != b']' {
        return None;
    }
    let label = &text[open + 1..close];

    if bytes.get(close + 1) != Some(&b'(') {
        return None;
    }
    let dest_start = close + 2;

    // Destination: non-parenthesis bytes, plus one-level `(..)` groups whose
    // interior excludes `)`. A bare `)` terminates the destination.
    let mut pos = dest_start;
    loop {
        match bytes.get(pos) {
            None => return None,
            Some(b')') => break,
            Some(b'(') => {
                let rel = memchr(b')', &bytes[pos + 1..])?;
                pos = pos + 1 + rel + 1;
            }
            Some(_) => pos += 1,
        }
    }
    Some((label, &text[dest_start..pos], pos + 1))
}

/// Extract all `(alt, url)` pairs of image syntax in `text`, left to right.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    extract_with(text, find_image)
}

/// Extract all `(label, url)` pairs of link syntax in `text`, left to right.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    extract_with(text, find_link)
}

fn extract_with(
    text: &str,
    find: impl Fn(&str) -> Option<PatternMatch>,
) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    let mut rest = text;
    while let Some(found) = find(rest) {
        pairs.push((found.span.text, found.span.url.unwrap_or_default()));
        rest = &rest[found.end..];
    }
    pairs
}

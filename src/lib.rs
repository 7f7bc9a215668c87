//! tinymark: a converter for a restricted Markdown dialect into HTML
//! fragments.
//!
//! The pipeline has three stages over immutable input:
//! - block classification: [`split_blocks`] partitions the document on
//!   blank-line runs and [`classify`] assigns each block a type
//! - tree building: [`document_to_node`] assembles one [`HtmlNode`] subtree
//!   per block, recursing into the inline tokenizer ([`tokenize`]) for every
//!   inline region
//! - serialization: [`HtmlNode::render`] turns the tree into one
//!   `<div>`-rooted fragment string
//!
//! # Design Principles
//! - No regex: pure byte-level scanning via memchr
//! - Total tokenizer and classifier: malformed inline syntax is literal
//!   text, unknown blocks are paragraphs
//! - Fail-fast structure: invalid parent nodes are rejected at construction,
//!   never at render time; no partial HTML is ever produced
//!
//! Deliberately out of scope: CommonMark compliance, nested inline emphasis,
//! metacharacter escaping, and HTML-safety encoding of user content.

pub mod block;
pub mod builder;
pub mod delimit;
pub mod error;
pub mod inline;
pub mod node;

// Re-export primary types
pub use block::{BlockKind, classify, split_blocks};
pub use builder::{document_to_node, span_to_node};
pub use error::Error;
pub use inline::{SpanKind, TextSpan, extract_images, extract_links, tokenize};
pub use node::HtmlNode;

/// Convert a Markdown document to one `<div>`-rooted HTML fragment.
///
/// This is the primary API. Either the complete fragment is returned or the
/// first error surfaces; there is no partial output.
///
/// # Errors
/// An empty or whitespace-only document fails with [`Error::NoChildren`]
/// because the root `div` would have no children.
///
/// # Example
/// ```
/// let html = tinymark::render_document("# Title").unwrap();
/// assert_eq!(html, "<div><h1>Title</h1></div>");
/// ```
pub fn render_document(markdown: &str) -> Result<String, Error> {
    document_to_node(markdown)?.render()
}

/// Extract the text of the first level-1 heading line.
///
/// Returns `None` when no H1 exists; callers generating pages substitute a
/// default title and continue.
///
/// # Example
/// ```
/// assert_eq!(tinymark::extract_title("# Home\n\nbody"), Some("Home"));
/// assert_eq!(tinymark::extract_title("## only h2"), None);
/// ```
pub fn extract_title(markdown: &str) -> Option<&str> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# ").map(str::trim))
}

//! HTML node tree and serializer.
//!
//! The tree is a closed sum type with two cases: `Leaf` (no children) and
//! `Parent` (one or more children). Parents are validated eagerly by the
//! [`HtmlNode::parent`] factory; an invalid parent value never exists behind
//! the supported constructors. Serialization performs no escaping of any
//! kind: tag names, attribute values and text content are emitted verbatim.

use crate::Error;

/// A single node of the HTML output tree.
///
/// Fields are public so callers can pattern-match freely, but the factory
/// functions are the supported constructors: only hand-built nodes can
/// violate the invariants, and rendering such a node fails.
///
/// # Example
/// ```
/// use tinymark::HtmlNode;
///
/// let link = HtmlNode::leaf_with_attrs(
///     Some("a"),
///     "click",
///     vec![("href".into(), "https://example.com".into())],
/// );
/// assert_eq!(link.render().unwrap(), "<a href=\"https://example.com\">click</a>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// A childless node: raw text (`tag: None`) or a single HTML element
    /// wrapping text.
    Leaf {
        /// Element name, or `None` for a raw text passthrough.
        tag: Option<String>,
        /// Text content. The builder always supplies `Some`; rendering a
        /// `None` value is [`Error::MissingValue`].
        value: Option<String>,
        /// Attributes in insertion order.
        attrs: Vec<(String, String)>,
    },
    /// An element with one or more child nodes.
    Parent {
        /// Element name; non-empty by construction.
        tag: String,
        /// Child nodes in render order; non-empty by construction.
        children: Vec<HtmlNode>,
        /// Attributes in insertion order.
        attrs: Vec<(String, String)>,
    },
}

impl HtmlNode {
    /// Create a leaf node with no attributes.
    pub fn leaf(tag: Option<&str>, value: impl Into<String>) -> Self {
        Self::leaf_with_attrs(tag, value, Vec::new())
    }

    /// Create a leaf node with attributes.
    pub fn leaf_with_attrs(
        tag: Option<&str>,
        value: impl Into<String>,
        attrs: Vec<(String, String)>,
    ) -> Self {
        HtmlNode::Leaf {
            tag: tag.map(str::to_owned),
            value: Some(value.into()),
            attrs,
        }
    }

    /// Create a parent node, validating the structural invariants eagerly.
    ///
    /// # Errors
    /// [`Error::EmptyTag`] if `tag` is empty, [`Error::NoChildren`] if
    /// `children` is empty.
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Result<Self, Error> {
        if tag.is_empty() {
            return Err(Error::EmptyTag);
        }
        if children.is_empty() {
            return Err(Error::NoChildren(tag.to_owned()));
        }
        Ok(HtmlNode::Parent {
            tag: tag.to_owned(),
            children,
            attrs: Vec::new(),
        })
    }

    /// Serialize the tree to an HTML string.
    ///
    /// # Errors
    /// [`Error::MissingValue`] if a leaf without a value is reached.
    pub fn render(&self) -> Result<String, Error> {
        let mut out = String::with_capacity(64);
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), Error> {
        match self {
            HtmlNode::Leaf { tag, value, attrs } => {
                let value = value.as_deref().ok_or(Error::MissingValue)?;
                match tag.as_deref() {
                    // Raw passthrough.
                    None => out.push_str(value),
                    // Void element: the value is ignored for output.
                    Some("img") => {
                        out.push_str("<img");
                        push_attrs(out, attrs);
                        out.push_str(" />");
                    }
                    // Attributes are never serialized on code leaves.
                    Some("code") => {
                        out.push_str("<code>");
                        out.push_str(value);
                        out.push_str("</code>");
                    }
                    Some(tag) => {
                        out.push('<');
                        out.push_str(tag);
                        push_attrs(out, attrs);
                        out.push('>');
                        out.push_str(value);
                        out.push_str("</");
                        out.push_str(tag);
                        out.push('>');
                    }
                }
            }
            HtmlNode::Parent {
                tag,
                children,
                attrs,
            } => {
                out.push('<');
                out.push_str(tag);
                push_attrs(out, attrs);
                out.push('>');
                for child in children {
                    child.render_into(out)?;
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
        Ok(())
    }
}

/// Emit ` key="value"` pairs in insertion order, values verbatim.
fn push_attrs(out: &mut String, attrs: &[(String, String)]) {
    for (key, value) in attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}

//! Error taxonomy for node construction, rendering and delimiter splitting.
//!
//! The conversion pipeline is fail-fast: the first error aborts the whole
//! document conversion and no partial HTML is ever returned.

/// Errors produced by the tinymark pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A parent node was constructed with an empty tag.
    #[error("parent node requires a non-empty tag")]
    EmptyTag,

    /// A parent node was constructed with no children.
    #[error("parent node <{0}> requires at least one child")]
    NoChildren(String),

    /// A leaf node reached the serializer without a value.
    ///
    /// Unreachable through [`crate::document_to_node`], which always supplies
    /// a value; only hand-built nodes can trigger it.
    #[error("leaf node is missing a value")]
    MissingValue,

    /// A delimiter occurred an odd number of times in the input of
    /// [`crate::delimit::split_balanced`].
    ///
    /// The inline tokenizer never raises this: its passes treat an unmatched
    /// marker as literal text.
    #[error("unbalanced delimiter {delimiter:?} in text")]
    UnbalancedDelimiter {
        /// The delimiter that could not be paired up.
        delimiter: String,
    },

    /// A text span carried a kind with no HTML mapping.
    ///
    /// Unreachable with the closed [`crate::SpanKind`] enum; retained as a
    /// defensive taxonomy entry.
    #[error("unsupported text span kind")]
    UnsupportedSpanKind,
}

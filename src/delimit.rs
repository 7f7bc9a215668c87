//! Strict symmetric-delimiter splitter.
//!
//! Independent of the inline tokenizer: the tokenizer passes treat an
//! unmatched marker as literal text, while this utility refuses to guess a
//! pairing and fails instead. The asymmetry is deliberate and load-bearing.

use crate::Error;

/// Split `text` on a delimiter, requiring every occurrence to be paired.
///
/// The resulting pieces alternate between text outside the delimiters (even
/// indices) and the delimited interiors (odd indices). Pieces may be empty.
///
/// # Errors
/// [`Error::UnbalancedDelimiter`] if the delimiter occurs an odd number of
/// times.
///
/// # Example
/// ```
/// use tinymark::delimit::split_balanced;
///
/// let pieces = split_balanced("a `b` c", "`").unwrap();
/// assert_eq!(pieces, vec!["a ", "b", " c"]);
///
/// assert!(split_balanced("odd ` one", "`").is_err());
/// ```
pub fn split_balanced<'a>(text: &'a str, delimiter: &str) -> Result<Vec<&'a str>, Error> {
    if text.matches(delimiter).count() % 2 != 0 {
        return Err(Error::UnbalancedDelimiter {
            delimiter: delimiter.to_owned(),
        });
    }
    Ok(text.split(delimiter).collect())
}

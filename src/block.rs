//! Block-level splitter and classifier.
//!
//! A document is partitioned on blank-line runs (lines that are empty or
//! whitespace-only, with `\n` or `\r\n` endings). Each resulting block is
//! trimmed; empty pieces are dropped, so an all-whitespace document yields
//! zero blocks. Classification is a fixed priority list evaluated per block:
//! code fence, heading, quote, unordered list, ordered list, then paragraph
//! as the total fallback.

/// Classification of one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Split a document into trimmed, non-empty blocks.
///
/// Blocks never span a blank-line run; leading and trailing blank regions
/// contribute nothing.
///
/// # Example
/// ```
/// use tinymark::split_blocks;
///
/// assert_eq!(split_blocks("a\n\nb\nc\n\n\nd"), vec!["a", "b\nc", "d"]);
/// assert_eq!(split_blocks("   \n\n "), Vec::<&str>::new());
/// ```
pub fn split_blocks(document: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut start: Option<usize> = None;
    let mut end = 0;
    let mut pos = 0;
    for line in document.split_inclusive('\n') {
        if is_blank_line(line) {
            if let Some(s) = start.take() {
                push_block(&mut blocks, &document[s..end]);
            }
        } else {
            if start.is_none() {
                start = Some(pos);
            }
            end = pos + line.len();
        }
        pos += line.len();
    }
    if let Some(s) = start {
        push_block(&mut blocks, &document[s..end]);
    }
    blocks
}

fn push_block<'a>(blocks: &mut Vec<&'a str>, raw: &'a str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        blocks.push(trimmed);
    }
}

/// A line consisting only of horizontal whitespace and line-ending bytes.
fn is_blank_line(line: &str) -> bool {
    line.bytes()
        .all(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
}

/// Classify one trimmed block. Total; the empty block is a paragraph.
pub fn classify(block: &str) -> BlockKind {
    if block.is_empty() {
        return BlockKind::Paragraph;
    }
    // A degenerate fence pair with nothing between.
    if block.trim() == "``````" {
        return BlockKind::Code;
    }
    let lines: Vec<&str> = block.lines().collect();
    if lines.len() >= 2
        && lines[0].trim() == "```"
        && lines[lines.len() - 1].trim() == "```"
    {
        return BlockKind::Code;
    }
    if is_heading_line(lines[0]) {
        return BlockKind::Heading;
    }
    if lines.iter().all(|line| is_prefixed(line, "> ")) {
        return BlockKind::Quote;
    }
    if lines.iter().all(|line| is_prefixed(line, "- ")) {
        return BlockKind::UnorderedList;
    }
    if is_ordered_list(&lines) {
        return BlockKind::OrderedList;
    }
    BlockKind::Paragraph
}

/// `#{1,6}` then a space then at least one more character.
fn is_heading_line(line: &str) -> bool {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    (1..=6).contains(&hashes)
        && line.as_bytes().get(hashes) == Some(&b' ')
        && line.len() > hashes + 1
}

/// The marker prefix followed by at least one character.
fn is_prefixed(line: &str, prefix: &str) -> bool {
    line.len() > prefix.len() && line.starts_with(prefix)
}

/// Every line is `<n>. ` plus content, and the numbers run 1, 2, 3, ... with
/// no gaps. Any violation means the block is a paragraph instead.
fn is_ordered_list(lines: &[&str]) -> bool {
    let mut expected: u64 = 1;
    for line in lines {
        let bytes = line.as_bytes();
        let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0
            || bytes.get(digits) != Some(&b'.')
            || bytes.get(digits + 1) != Some(&b' ')
            || line.len() <= digits + 2
        {
            return false;
        }
        let Ok(number) = line[..digits].parse::<u64>() else {
            return false;
        };
        if number != expected {
            return false;
        }
        expected += 1;
    }
    true
}

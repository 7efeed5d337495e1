//! Splitting a note into typed blocks.
//!
//! A block is whatever lies between runs of two or more line breaks. Each
//! block is then classified by its leading token, if any.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use super::tokens::{DEBATE_ROLE_PATTERN, HIGHLIGHT_PATTERN};

/// Two or more consecutive line breaks, `\r\n` included.
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\r?\n){2,}").expect("separator pattern is valid"));

/// A typed unit of a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A whitespace-only block.
    Empty,
    /// A block led by a highlight token. `token` is lowercased.
    Highlight { token: String, content: String },
    /// A block led by a debate-role token. `token` is lowercased.
    DebateRole { token: String, content: String },
    /// Anything else, verbatim.
    Normal(String),
}

impl Block {
    /// The text handed on to markdown conversion, if the block has any.
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Highlight { content, .. }
            | Self::DebateRole { content, .. }
            | Self::Normal(content) => Some(content),
        }
    }

}

/// A block together with the byte range of the source it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub span: Range<usize>,
    pub block: Block,
}

/// Split `text` into blocks, in source order.
///
/// # Example
///
/// ```
/// use debbynote::document::{segment, Block};
///
/// let blocks = segment("!r agreed\n\nplain");
/// assert_eq!(
///     blocks,
///     vec![
///         Block::Highlight { token: "!r".into(), content: "agreed".into() },
///         Block::Normal("plain".into()),
///     ]
/// );
/// ```
pub fn segment(text: &str) -> Vec<Block> {
    segment_with_spans(text)
        .into_iter()
        .map(|segment| segment.block)
        .collect()
}

/// Split `text` into blocks and keep each block's source span.
///
/// The spans are ascending and the gaps between them are exactly the
/// separator runs, so the spans plus the gaps cover all of `text`.
pub fn segment_with_spans(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut start = 0;
    for separator in SEPARATOR.find_iter(text) {
        segments.push(classify(text, start..separator.start()));
        start = separator.end();
    }
    segments.push(classify(text, start..text.len()));
    tracing::trace!(blocks = segments.len(), bytes = text.len(), "segmented note");
    segments
}

fn classify(text: &str, span: Range<usize>) -> Segment {
    let raw = &text[span.clone()];
    let block = if let Some(caps) = DEBATE_ROLE_PATTERN.captures(raw) {
        Block::DebateRole {
            token: caps[1].to_ascii_lowercase(),
            content: caps[2].to_string(),
        }
    } else if let Some(caps) = HIGHLIGHT_PATTERN.captures(raw) {
        Block::Highlight {
            token: caps[1].to_ascii_lowercase(),
            content: caps[2].to_string(),
        }
    } else if raw.trim().is_empty() {
        Block::Empty
    } else {
        Block::Normal(raw.to_string())
    };
    Segment { span, block }
}

//! Highlight marker parsing
//!
//! Turns a trimmed hit excerpt into the ordered [`Segment`] runs the renderer
//! consumes. The marker spelling is a fixed contract with the search backend
//! and must not change.
//!
//! The scan is explicit index walking with an outside-span / inside-span
//! split rather than regex, so malformed input degrades predictably: orphaned
//! single tokens are stripped from plain runs, span content passes through
//! verbatim, and empty runs are never emitted.

use serde::{Deserialize, Serialize};

/// Highlight span start token, as inserted by the search backend
pub const MARK_OPEN: &str = "<em>";

/// Highlight span end token
pub const MARK_CLOSE: &str = "</em>";

/// Two spans back to back, collapsed into one before scanning
const ADJACENT_PAIR: &str = "</em><em>";

/// A contiguous run of excerpt text, highlighted or plain.
///
/// Concatenating the `text` of every segment, in order, reconstructs the
/// marker-stripped excerpt exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

impl Segment {
    /// A plain (non-highlighted) segment.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: false,
        }
    }

    /// A highlighted segment.
    #[must_use]
    pub fn highlighted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: true,
        }
    }
}

/// Parse highlight markers into ordered segments.
///
/// Adjacent span pairs (`…</em><em>…`) merge into one highlighted run first;
/// the scan then emits plain and highlighted runs in input order. Inputs with
/// no markers yield a single plain segment; the empty input yields none.
#[must_use]
pub fn parse_segments(text: &str) -> Vec<Segment> {
    // Collapse back-to-back spans in one left-to-right pass.
    let merged = text.replace(ADJACENT_PAIR, "");

    let mut segments = Vec::new();
    let mut cursor = 0;

    while let Some(rel) = merged[cursor..].find(MARK_OPEN) {
        let open = cursor + rel;
        let inner_start = open + MARK_OPEN.len();
        // An open token with no close after it is an orphan; the tail scan
        // below strips it.
        let Some(rel_close) = merged[inner_start..].find(MARK_CLOSE) else {
            break;
        };
        let close = inner_start + rel_close;

        push_plain(&mut segments, &merged[cursor..open]);
        let inner = &merged[inner_start..close];
        if !inner.is_empty() {
            segments.push(Segment::highlighted(inner));
        }
        cursor = close + MARK_CLOSE.len();
    }

    push_plain(&mut segments, &merged[cursor..]);
    segments
}

/// Emit a plain run, stripping orphaned single tokens; empty runs are elided.
fn push_plain(segments: &mut Vec<Segment>, raw: &str) {
    if raw.is_empty() {
        return;
    }
    let plain = raw.replace(MARK_OPEN, "").replace(MARK_CLOSE, "");
    if !plain.is_empty() {
        segments.push(Segment::plain(plain));
    }
}

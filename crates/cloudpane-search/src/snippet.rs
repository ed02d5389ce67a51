//! Snippet trimming for full-text search hits
//!
//! Backend hits arrive as raw content with inline `<em>…</em>` highlight
//! markers. [`trim_content`] produces a bounded excerpt centered on the first
//! highlighted span, keeping the markers at the cut edges well formed so the
//! result is always safe to feed to [`crate::highlight::parse_segments`].

use crate::highlight::{MARK_CLOSE, MARK_OPEN};

/// Context characters kept on each side of the first highlight
pub const CONTEXT_CHARS: usize = 80;

/// Marker appended/prepended where the excerpt was cut
pub const ELLIPSIS: &str = "...";

/// Trim a raw hit to a bounded excerpt around its first highlight.
///
/// Without any highlight the input passes through unchanged unless it runs
/// past `2 × CONTEXT_CHARS` characters, in which case it is truncated with a
/// trailing ellipsis. All window arithmetic counts Unicode scalars, so a cut
/// can never split a code point.
#[must_use]
pub fn trim_content(content: &str) -> String {
    let Some(open) = content.find(MARK_OPEN) else {
        return truncate_plain(content);
    };

    // Window end anchors one past the matching close marker; a hit with no
    // close marker anchors just past the open token itself.
    let close = content[open..].find(MARK_CLOSE).map(|rel| open + rel);
    let highlight_end = close.map_or(open + MARK_OPEN.len(), |c| c + MARK_CLOSE.len());

    let start = chars_before(content, open, CONTEXT_CHARS);
    let end = chars_after(content, highlight_end, CONTEXT_CHARS);
    tracing::trace!(start, end, content_len = content.len(), "snippet window");

    let window = strip_trailing_fragment(strip_leading_fragment(&content[start..end]));

    let mut trimmed = String::with_capacity(window.len() + 2 * ELLIPSIS.len());
    if start > 0 {
        trimmed.push_str(ELLIPSIS);
    }
    trimmed.push_str(window);
    if end < content.len() {
        trimmed.push_str(ELLIPSIS);
    }
    trimmed
}

/// No highlight anywhere: keep the head of the text, bounded.
fn truncate_plain(content: &str) -> String {
    match content.char_indices().nth(2 * CONTEXT_CHARS) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &content[..cut]),
        None => content.to_owned(),
    }
}

/// Byte offset `n` characters before `from` (clamped to the string start).
fn chars_before(s: &str, from: usize, n: usize) -> usize {
    s[..from]
        .char_indices()
        .rev()
        .take(n)
        .last()
        .map_or(from, |(idx, _)| idx)
}

/// Byte offset `n` characters after `from` (clamped to the string end).
fn chars_after(s: &str, from: usize, n: usize) -> usize {
    s[from..]
        .char_indices()
        .nth(n)
        .map_or(s.len(), |(idx, _)| from + idx)
}

/// Strip a marker fragment dangling at the window start: an optional `/`,
/// optional `e`, optional `m`, then `>` (the tail of a token cut mid-way).
fn strip_leading_fragment(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut i = 0;
    if bytes.get(i) == Some(&b'/') {
        i += 1;
    }
    if bytes.get(i) == Some(&b'e') {
        i += 1;
    }
    if bytes.get(i) == Some(&b'm') {
        i += 1;
    }
    if bytes.get(i) == Some(&b'>') {
        &s[i + 1..]
    } else {
        s
    }
}

/// Strip a marker fragment dangling at the window end: a `<` followed by an
/// optional `/`, optional `e`, optional `m` (the head of a token cut mid-way).
fn strip_trailing_fragment(s: &str) -> &str {
    const FRAGMENTS: [&str; 8] = ["</em", "</e", "</m", "<em", "</", "<e", "<m", "<"];
    for fragment in FRAGMENTS {
        if let Some(stripped) = s.strip_suffix(fragment) {
            return stripped;
        }
    }
    s
}

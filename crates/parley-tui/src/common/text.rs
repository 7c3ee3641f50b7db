//! Width-aware text helpers for rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cuts `text` to `max_width` terminal columns, ending with `…` when cut.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Keeps the trailing part of `text` that fits in `max_width` columns.
///
/// The composer uses this so the cursor end of a long draft stays visible.
pub fn tail_to_width(text: &str, max_width: usize) -> &str {
    if text.width() <= max_width {
        return text;
    }
    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

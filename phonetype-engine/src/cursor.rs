//! Cursor placement after a reformat
//!
//! The cursor follows the logical digit the user was at, not the raw
//! character offset, and never rests right after a separator: a backspace
//! there would delete the separator and abandon formatting.

use phonetype_core::{dialable_count, is_dialable, is_separator};

use crate::change::{byte_index, char_len};

/// Map `selection` in `text` to the matching offset in `formatted`
pub fn remap_cursor(text: &str, selection: usize, formatted: &str, at_end: bool) -> usize {
    let cursor = if formatted == text {
        selection
    } else if at_end {
        char_len(formatted)
    } else {
        offset_after_dialable(formatted, dialable_before(text, selection))
    };

    if at_end {
        cursor
    } else {
        retreat_past_separators(formatted, cursor)
    }
}

/// Dialable characters in `text` before `offset`
pub fn dialable_before(text: &str, offset: usize) -> usize {
    dialable_count(&text[..byte_index(text, offset)])
}

/// Offset right after the `count`-th dialable character of `text`
///
/// Zero for a zero count; the end of `text` if it holds fewer.
pub fn offset_after_dialable(text: &str, count: usize) -> usize {
    if count == 0 {
        return 0;
    }

    let mut seen = 0;
    for (offset, ch) in text.chars().enumerate() {
        if is_dialable(ch) {
            seen += 1;
            if seen == count {
                return offset + 1;
            }
        }
    }

    char_len(text)
}

/// Move `cursor` left until a dialable character precedes it
pub fn retreat_past_separators(text: &str, cursor: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut cursor = cursor.min(chars.len());
    while cursor > 0 && is_separator(chars[cursor - 1]) {
        cursor -= 1;
    }
    cursor
}

//! Change notifications and engine reactions
//!
//! All offsets are character offsets, the unit a text field cursor moves in.

/// A change the host applied to the buffer
///
/// `cursor` is where the host left the cursor after its own edit, before the
/// engine has reacted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextChange {
    /// Buffer content before the edit
    pub old_text: String,
    /// First character touched by the edit
    pub start: usize,
    /// Number of characters removed at `start`
    pub removed: usize,
    /// Number of characters inserted at `start`
    pub inserted: usize,
    /// Buffer content after the edit
    pub new_text: String,
    /// Cursor after the edit
    pub cursor: usize,
}

impl TextChange {
    /// Describe replacing `removed` characters at `start` with `insert`
    ///
    /// Out-of-range offsets are clamped to the text. The cursor lands after
    /// the inserted text, as it does for typing and pasting.
    pub fn splice(old_text: &str, start: usize, removed: usize, insert: &str) -> Self {
        let len = char_len(old_text);
        let start = start.min(len);
        let removed = removed.min(len - start);
        let inserted = char_len(insert);

        let head = byte_index(old_text, start);
        let tail = byte_index(old_text, start + removed);
        let mut new_text = String::with_capacity(old_text.len() + insert.len());
        new_text.push_str(&old_text[..head]);
        new_text.push_str(insert);
        new_text.push_str(&old_text[tail..]);

        Self {
            old_text: old_text.to_string(),
            start,
            removed,
            inserted,
            new_text,
            cursor: start + inserted,
        }
    }

    /// Describe replacing the whole content, leaving the cursor at the end
    pub fn replace_all(old_text: &str, new_text: &str) -> Self {
        Self::splice(old_text, 0, char_len(old_text), new_text)
    }

    /// Characters the edit removed
    pub fn removed_text(&self) -> &str {
        char_span(&self.old_text, self.start, self.removed)
    }

    /// Characters the edit inserted
    pub fn inserted_text(&self) -> &str {
        char_span(&self.new_text, self.start, self.inserted)
    }
}

/// Replacement content and cursor for the buffer
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edit {
    /// Full new buffer content
    pub text: String,
    /// Cursor offset within `text`
    pub cursor: usize,
}

/// What the engine wants done after a change
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Reaction {
    /// Leave the buffer as it is
    NoOp,
    /// Replace the buffer content, then move the cursor
    Replace(Edit),
}

impl Reaction {
    /// Whether nothing needs to be written
    pub fn is_noop(&self) -> bool {
        matches!(self, Reaction::NoOp)
    }

    /// The requested edit, if any
    pub fn edit(&self) -> Option<&Edit> {
        match self {
            Reaction::NoOp => None,
            Reaction::Replace(edit) => Some(edit),
        }
    }
}

pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

pub(crate) fn byte_index(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map_or(text.len(), |(index, _)| index)
}

pub(crate) fn char_span(text: &str, start: usize, count: usize) -> &str {
    let head = byte_index(text, start);
    let tail = byte_index(text, start.saturating_add(count));
    &text[head..tail]
}

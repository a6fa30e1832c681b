//! Host text buffer contract

use crate::change::{char_len, TextChange};

/// The host's editable text, as the engine sees it
pub trait TextBuffer {
    /// Current content
    fn text(&self) -> &str;

    /// Cursor offset in characters
    fn cursor(&self) -> usize;

    /// Replace the whole content and return the change notification the
    /// host raises for it
    fn replace_all(&mut self, text: &str) -> TextChange;

    /// Move the cursor; offsets past the end land at the end
    fn set_cursor(&mut self, offset: usize);
}

/// Single-line text with a cursor, editing the way a text field does
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditableText {
    text: String,
    cursor: usize,
}

impl EditableText {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding `text`, cursor at the end
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = char_len(&text);
        Self { text, cursor }
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        char_len(&self.text)
    }

    /// Whether the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace `removed` characters at `start` with `insert`
    pub fn splice(&mut self, start: usize, removed: usize, insert: &str) -> TextChange {
        let change = TextChange::splice(&self.text, start, removed, insert);
        self.text.clone_from(&change.new_text);
        self.cursor = change.cursor;
        change
    }

    /// Type or paste `text` at the cursor
    pub fn insert(&mut self, text: &str) -> TextChange {
        self.splice(self.cursor, 0, text)
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) -> Option<TextChange> {
        if self.cursor == 0 {
            return None;
        }
        Some(self.splice(self.cursor - 1, 1, ""))
    }

    /// Delete the character after the cursor
    pub fn delete_forward(&mut self) -> Option<TextChange> {
        if self.cursor >= self.len() {
            return None;
        }
        Some(self.splice(self.cursor, 1, ""))
    }

    /// Delete everything
    pub fn clear(&mut self) -> Option<TextChange> {
        if self.is_empty() {
            return None;
        }
        Some(self.splice(0, self.len(), ""))
    }
}

impl TextBuffer for EditableText {
    fn text(&self) -> &str {
        &self.text
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn replace_all(&mut self, text: &str) -> TextChange {
        let change = TextChange::replace_all(&self.text, text);
        self.text.clone_from(&change.new_text);
        self.cursor = change.cursor;
        change
    }

    fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset.min(self.len());
    }
}

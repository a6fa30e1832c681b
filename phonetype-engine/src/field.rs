//! Phone number input field
//!
//! Pairs an [`EditableText`] with a [`ReformatEngine`], the way a host UI
//! wires a text box to the engine.

use crate::buffer::{EditableText, TextBuffer};
use crate::change::{Reaction, TextChange};
use crate::engine::ReformatEngine;
use crate::error::Result;
use crate::state::EngineMode;

/// Text field that reformats as the user edits it
#[derive(Debug)]
pub struct PhoneInput {
    buffer: EditableText,
    engine: ReformatEngine,
}

impl PhoneInput {
    /// Create an empty field for a region
    pub fn new(region_code: &str, calling_code: u16) -> Result<Self> {
        Ok(Self::with_engine(ReformatEngine::new(region_code, calling_code)?))
    }

    /// Create an empty field driven by `engine`
    pub fn with_engine(engine: ReformatEngine) -> Self {
        Self {
            buffer: EditableText::new(),
            engine,
        }
    }

    /// Current content
    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    /// Cursor offset in characters
    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    /// Current engine mode
    pub fn mode(&self) -> EngineMode {
        self.engine.mode()
    }

    /// Driving engine
    pub fn engine(&self) -> &ReformatEngine {
        &self.engine
    }

    /// Move the cursor
    pub fn set_cursor(&mut self, offset: usize) {
        self.buffer.set_cursor(offset);
    }

    /// Type `keys` one character at a time
    pub fn type_keys(&mut self, keys: &str) -> Reaction {
        let mut last = Reaction::NoOp;
        for key in keys.chars() {
            let mut encoded = [0u8; 4];
            let change = self.buffer.insert(key.encode_utf8(&mut encoded));
            last = self.react(change);
        }
        last
    }

    /// Paste `text` at the cursor as a single edit
    pub fn paste(&mut self, text: &str) -> Reaction {
        let change = self.buffer.insert(text);
        self.react(change)
    }

    /// Replace `removed` characters at `start` with `insert`
    pub fn replace(&mut self, start: usize, removed: usize, insert: &str) -> Reaction {
        let change = self.buffer.splice(start, removed, insert);
        self.react(change)
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) -> Reaction {
        match self.buffer.backspace() {
            Some(change) => self.react(change),
            None => Reaction::NoOp,
        }
    }

    /// Delete the character after the cursor
    pub fn delete_forward(&mut self) -> Reaction {
        match self.buffer.delete_forward() {
            Some(change) => self.react(change),
            None => Reaction::NoOp,
        }
    }

    /// Delete everything
    pub fn clear(&mut self) -> Reaction {
        match self.buffer.clear() {
            Some(change) => self.react(change),
            None => Reaction::NoOp,
        }
    }

    /// Switch region, regrouping the current content
    pub fn set_region(&mut self, region_code: &str, calling_code: u16) -> Result<()> {
        self.engine
            .configure(&mut self.buffer, region_code, calling_code)
    }

    fn react(&mut self, change: TextChange) -> Reaction {
        self.engine.apply(&mut self.buffer, &change)
    }
}

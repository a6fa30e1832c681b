//! JSON exchange for hosts across an FFI or web boundary

use crate::change::{Reaction, TextChange};
use crate::engine::ReformatEngine;
use crate::error::Result;

impl TextChange {
    /// Decode a change notification from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Reaction {
    /// Encode the reaction as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl ReformatEngine {
    /// Decode a change, react to it and encode the reaction
    pub fn on_change_json(&mut self, change_json: &str) -> Result<String> {
        let change = TextChange::from_json(change_json)?;
        self.on_change(&change).to_json()
    }
}

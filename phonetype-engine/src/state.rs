//! Transient engine state

/// Whether edits are being reformatted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EngineMode {
    /// Every edit is regrouped
    #[default]
    Active,
    /// The user typed something the formatter cannot represent; edits pass
    /// through untouched until the buffer is emptied
    Stopped,
}

/// Marks the window in which the engine writes to the buffer itself
///
/// Writing the buffer makes the host raise a change notification
/// synchronously. Any notification seen while the guard is engaged is the
/// engine's own write settling and must not be reformatted again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelfChangeGuard {
    engaged: bool,
}

impl SelfChangeGuard {
    /// Start a self-caused write
    pub fn engage(&mut self) {
        self.engaged = true;
    }

    /// End a self-caused write
    pub fn release(&mut self) {
        self.engaged = false;
    }

    /// Whether a self-caused write is in progress
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }
}

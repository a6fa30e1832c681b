//! As-you-type phone number formatting for text fields
//!
//! This crate keeps a phone number field grouped while the user types,
//! deletes or pastes, and keeps the cursor on the digit the user was at.
//!
//! - [`FormatterSession`] holds the region configuration and the grouping
//!   formatter for one field
//! - [`ReformatEngine`] reacts to each [`TextChange`], regroups the digits and
//!   places the cursor; it stops formatting once the user edits a separator
//!   and resumes when the field is cleared
//! - [`TextBuffer`] is the host text box as the engine sees it;
//!   [`EditableText`] and [`PhoneInput`] are ready-made implementations
//!
//! # Example
//!
//! ```rust
//! use phonetype_engine::PhoneInput;
//!
//! let mut field = PhoneInput::new("US", 1).unwrap();
//! field.type_keys("2065550100");
//! assert_eq!(field.text(), "(206) 555-0100");
//! assert_eq!(field.cursor(), 14);
//! ```

#![warn(missing_docs)]

pub mod buffer;
pub mod change;
pub mod cursor;
#[cfg(feature = "serde")]
pub mod dto;
pub mod engine;
pub mod error;
pub mod field;
pub mod session;
pub mod state;

// Re-export key types
pub use buffer::{EditableText, TextBuffer};
pub use change::{Edit, Reaction, TextChange};
pub use engine::ReformatEngine;
pub use error::{EngineError, Result};
pub use field::PhoneInput;
pub use session::{FormatterSession, FormattingConfig};
pub use state::{EngineMode, SelfChangeGuard};

// Re-export from core for convenience
pub use phonetype_core::{GroupingFormatter, RegionMetadata, RegionRegistry};

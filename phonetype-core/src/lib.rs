//! Region grammars and as-you-type grouping for phone number input
//!
//! This crate holds the pieces of phone number formatting that do not depend
//! on an editing session:
//!
//! - **Classification**: which characters are dialable and which are separators
//! - **Region grammars**: TOML-described calling codes, trunk prefixes and
//!   grouping templates, embedded for a handful of regions
//! - **Metadata**: example mobile number lengths and national number parsing
//! - **Grouping formatters**: incremental formatters fed one digit at a time,
//!   selected per region from a factory map
//!
//! # Example
//!
//! ```rust
//! use phonetype_core::{GroupingFormatter, RegionRegistry};
//!
//! let registry = RegionRegistry::embedded();
//! let mut formatter = registry.formatter_for("US", 1);
//!
//! let mut current = String::new();
//! for ch in "+12065550100".chars() {
//!     current = formatter.input_digit(ch);
//! }
//! assert_eq!(current, "+1 (206) 555-0100");
//! ```

pub mod classify;
pub mod error;
pub mod formatter;
pub mod metadata;
pub mod region;

pub use classify::{
    dialable_count, dialable_only, has_separator, is_dialable, is_separator,
    normalize_digits_only, CharClass,
};
pub use error::{ParseError, RegionError, Result};
pub use formatter::{AsYouTypeFormatter, GroupingFormatter};
pub use metadata::RegionMetadata;
pub use region::{FormatterFactory, Region, RegionConfig, RegionRegistry};

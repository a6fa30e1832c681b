//! Region grammars
//!
//! A region grammar is plain data: calling code, trunk prefix, an example
//! mobile number and an ordered list of grouping rules. Grammars are written
//! in TOML, validated on load and compiled into [`Region`] values that the
//! formatter consumes.

pub mod config;
pub mod format;
pub mod registry;

pub use config::{parse_config, FormatRule, Metadata, RegionConfig};
pub use format::NumberFormat;
pub use registry::{FormatterFactory, RegionRegistry};

use crate::error::Result;

/// Compiled region grammar
#[derive(Debug, Clone)]
pub struct Region {
    config: RegionConfig,
    formats: Vec<NumberFormat>,
}

impl Region {
    /// Create from configuration
    pub fn from_config(config: RegionConfig) -> Result<Self> {
        let formats = config.compile()?;
        Ok(Self { config, formats })
    }

    /// Region that groups nothing
    pub fn bare(code: &str, calling_code: u16) -> Self {
        Self {
            config: RegionConfig::bare(code, calling_code),
            formats: Vec::new(),
        }
    }

    /// Region code
    pub fn code(&self) -> &str {
        self.config.code()
    }

    /// Country calling code
    pub fn calling_code(&self) -> u16 {
        self.config.metadata.calling_code
    }

    /// Trunk prefix, if the region has one
    pub fn national_prefix(&self) -> Option<&str> {
        self.config.metadata.national_prefix.as_deref()
    }

    /// Example mobile national number
    pub fn example_mobile(&self) -> Option<&str> {
        self.config.metadata.example_mobile.as_deref()
    }

    /// Shortest complete national number
    pub fn min_national_length(&self) -> usize {
        self.config.min_national_length()
    }

    /// Source configuration
    pub fn config(&self) -> &RegionConfig {
        &self.config
    }

    /// First grouping rule able to format `national`
    pub fn select_format(&self, national: &str) -> Option<&NumberFormat> {
        self.formats.iter().find(|f| f.applies_to(national))
    }
}

//! Configuration structures and validation
//!
//! This module defines the TOML schema for region grammars.

use serde::{Deserialize, Serialize};

use crate::error::{RegionError, Result};
use crate::metadata::{MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN};
use crate::region::format::NumberFormat;

/// Highest calling code assigned by the ITU
pub const MAX_CALLING_CODE: u16 = 999;

/// Root region configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub formats: Vec<FormatRule>,
}

/// Region metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
    pub calling_code: u16,
    /// Trunk prefix dialled before national numbers, e.g. "0"
    #[serde(default)]
    pub national_prefix: Option<String>,
    /// Example mobile national number, digits only
    #[serde(default)]
    pub example_mobile: Option<String>,
    /// Lengths a complete national number can have
    #[serde(default)]
    pub possible_lengths: Vec<usize>,
}

/// One grouping rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatRule {
    /// Regex matched against the start of the national number
    #[serde(default)]
    pub leading_digits: Option<String>,
    pub groups: Vec<usize>,
    /// `$n` places group n, anything else is a literal separator
    pub template: String,
}

impl RegionConfig {
    /// Grammar with no grouping rules, used for regions nothing is known about
    pub fn bare(code: &str, calling_code: u16) -> Self {
        Self {
            metadata: Metadata {
                code: code.to_string(),
                name: code.to_string(),
                calling_code,
                national_prefix: None,
                example_mobile: None,
                possible_lengths: Vec::new(),
            },
            formats: Vec::new(),
        }
    }

    /// Region code
    pub fn code(&self) -> &str {
        &self.metadata.code
    }

    /// Shortest complete national number
    ///
    /// Taken from `possible_lengths`, else from the example number.
    pub fn min_national_length(&self) -> usize {
        self.metadata
            .possible_lengths
            .iter()
            .copied()
            .min()
            .or_else(|| self.metadata.example_mobile.as_ref().map(String::len))
            .unwrap_or(MIN_LENGTH_FOR_NSN)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.compile().map(|_| ())
    }

    /// Validate the configuration and compile its grouping rules
    pub fn compile(&self) -> Result<Vec<NumberFormat>> {
        let code = self.metadata.code.as_str();

        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(RegionError::invalid(
                code,
                "region code must be non-empty and alphabetic",
            ));
        }

        if self.metadata.calling_code == 0 || self.metadata.calling_code > MAX_CALLING_CODE {
            return Err(RegionError::invalid(
                code,
                format!(
                    "calling code {} out of range 1..={MAX_CALLING_CODE}",
                    self.metadata.calling_code
                ),
            ));
        }

        for (field, value) in [
            ("national_prefix", &self.metadata.national_prefix),
            ("example_mobile", &self.metadata.example_mobile),
        ] {
            if let Some(value) = value {
                if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
                    return Err(RegionError::invalid(
                        code,
                        format!("{field} must be digits only, got '{value}'"),
                    ));
                }
            }
        }

        if let Some(&length) = self
            .metadata
            .possible_lengths
            .iter()
            .find(|&&l| !(MIN_LENGTH_FOR_NSN..=MAX_LENGTH_FOR_NSN).contains(&l))
        {
            return Err(RegionError::invalid(
                code,
                format!(
                    "possible length {length} out of range \
                     {MIN_LENGTH_FOR_NSN}..={MAX_LENGTH_FOR_NSN}"
                ),
            ));
        }

        self.formats
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                NumberFormat::compile(rule)
                    .map_err(|reason| RegionError::invalid(code, format!("format #{index}: {reason}")))
            })
            .collect()
    }
}

/// Read a region grammar from a TOML document without validating it
pub(crate) fn read_config(toml_str: &str) -> Result<RegionConfig> {
    let mut config: RegionConfig = toml::from_str(toml_str)?;
    config.metadata.code = config.metadata.code.to_ascii_uppercase();
    Ok(config)
}

/// Parse a region grammar from a TOML document
pub fn parse_config(toml_str: &str) -> Result<RegionConfig> {
    let config = read_config(toml_str)?;
    config.validate()?;
    Ok(config)
}

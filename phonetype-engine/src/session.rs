//! Formatter session
//!
//! Owns the region configuration of one text field and the live grouping
//! formatter built for it.

use std::sync::Arc;

use phonetype_core::{
    is_dialable, GroupingFormatter, ParseError, Region, RegionMetadata, RegionRegistry,
};

use crate::error::{EngineError, Result};

/// Region configuration of a session
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormattingConfig {
    /// Upper-case region code, e.g. "US"
    pub region_code: String,
    /// Country calling code, e.g. 1
    pub calling_code: u16,
    /// Digits in a typical national number; 0 when unknown, which disables
    /// length capping
    pub expected_national_digits: usize,
}

/// One field's formatting configuration and grouping formatter
pub struct FormatterSession {
    registry: Arc<RegionRegistry>,
    config: FormattingConfig,
    formatter: Box<dyn GroupingFormatter>,
}

impl std::fmt::Debug for FormatterSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatterSession")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl FormatterSession {
    /// Create a session over the embedded region grammars
    pub fn new(region_code: &str, calling_code: u16) -> Result<Self> {
        Self::with_registry(RegionRegistry::embedded(), region_code, calling_code)
    }

    /// Create a session over a custom registry
    pub fn with_registry(
        registry: Arc<RegionRegistry>,
        region_code: &str,
        calling_code: u16,
    ) -> Result<Self> {
        let (config, formatter) = Self::prepare(&registry, region_code, calling_code)?;
        Ok(Self {
            registry,
            config,
            formatter,
        })
    }

    /// Switch to another region
    ///
    /// The grouping formatter is rebuilt and the expected national number
    /// length re-derived. On error the session keeps its previous
    /// configuration.
    pub fn configure(&mut self, region_code: &str, calling_code: u16) -> Result<()> {
        let (config, formatter) = Self::prepare(&self.registry, region_code, calling_code)?;
        log::debug!(
            "Session reconfigured from {} (+{}) to {} (+{})",
            self.config.region_code,
            self.config.calling_code,
            config.region_code,
            config.calling_code
        );
        self.config = config;
        self.formatter = formatter;
        Ok(())
    }

    fn prepare(
        registry: &RegionRegistry,
        region_code: &str,
        calling_code: u16,
    ) -> Result<(FormattingConfig, Box<dyn GroupingFormatter>)> {
        let region_code = region_code.trim().to_ascii_uppercase();
        if region_code.is_empty() {
            return Err(EngineError::InvalidConfig(
                "region code must not be empty".to_string(),
            ));
        }
        if calling_code == 0 {
            return Err(EngineError::InvalidConfig(
                "calling code must be positive".to_string(),
            ));
        }

        let mut formatter = registry.formatter_for(&region_code, calling_code);
        formatter.reset();

        let expected_national_digits = match registry.example_mobile_national_number(&region_code)
        {
            Some(example) => example.len(),
            None => {
                log::warn!("No example number for region {region_code}, length is not capped");
                0
            }
        };

        Ok((
            FormattingConfig {
                region_code,
                calling_code,
                expected_national_digits,
            },
            formatter,
        ))
    }

    /// Register an external region grammar for this session
    ///
    /// The shared registry is copied on first use, so other sessions do not
    /// see the addition. Takes effect on the next [`configure`](Self::configure).
    pub fn load_region(&mut self, toml_str: &str) -> Result<Arc<Region>> {
        let region = Arc::make_mut(&mut self.registry).load_toml(toml_str)?;
        Ok(region)
    }

    /// Current configuration
    pub fn config(&self) -> &FormattingConfig {
        &self.config
    }

    /// Digits in a typical national number, 0 when unknown
    pub fn expected_national_digits(&self) -> usize {
        self.config.expected_national_digits
    }

    /// Forget everything fed to the grouping formatter
    pub fn clear(&mut self) {
        self.formatter.reset();
    }

    /// Format `national` with international grouping, national part only
    ///
    /// The calling code is fed ahead of the national digits so the formatter
    /// picks international conventions, then stripped again together with the
    /// one space that follows it. Separators in `national` are skipped.
    pub fn reformat_international(&mut self, national: &str) -> String {
        self.formatter.reset();

        let prefix = format!("+{}", self.config.calling_code);
        let mut current = String::new();
        for ch in prefix.chars().chain(national.chars()).filter(|&c| is_dialable(c)) {
            current = self.formatter.input_digit(ch);
        }

        let current = current.trim();
        if current.chars().count() <= prefix.len() {
            return String::new();
        }

        let rest = match current.strip_prefix(prefix.as_str()) {
            Some(rest) => rest,
            None => {
                let skip = current
                    .char_indices()
                    .nth(prefix.len())
                    .map_or(current.len(), |(index, _)| index);
                &current[skip..]
            }
        };
        let rest = rest.strip_prefix(' ').unwrap_or(rest);

        if rest.trim().is_empty() {
            String::new()
        } else {
            rest.to_string()
        }
    }

    /// Read `text` as a national number of the configured region
    pub fn parse_national_number(&self, text: &str) -> std::result::Result<String, ParseError> {
        self.registry
            .parse_national_number(text, &self.config.region_code)
    }
}

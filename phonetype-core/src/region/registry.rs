//! Region registry
//!
//! Manages embedded and external region grammars, and the formatter
//! strategy selected for each region.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::error::{ParseError, RegionError, Result};
use crate::formatter::{AsYouTypeFormatter, GroupingFormatter};
use crate::metadata::{self, RegionMetadata};
use crate::region::config::read_config;
use crate::region::{Region, RegionConfig};

/// Builds the grouping formatter for a region
pub type FormatterFactory = Arc<dyn Fn(Arc<Region>) -> Box<dyn GroupingFormatter> + Send + Sync>;

/// Embedded region registry
static EMBEDDED: OnceLock<Arc<RegionRegistry>> = OnceLock::new();

macro_rules! embed_region_config {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

/// Region grammars keyed by upper-case region code
#[derive(Clone, Default)]
pub struct RegionRegistry {
    regions: HashMap<String, Arc<Region>>,
    factories: HashMap<String, FormatterFactory>,
}

impl std::fmt::Debug for RegionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut regions: Vec<_> = self.regions.keys().collect();
        regions.sort();
        let mut factories: Vec<_> = self.factories.keys().collect();
        factories.sort();
        f.debug_struct("RegionRegistry")
            .field("regions", &regions)
            .field("factories", &factories)
            .finish()
    }
}

/// Canonical form of a region code
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

impl RegionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared registry holding the embedded grammars
    pub fn embedded() -> Arc<RegionRegistry> {
        EMBEDDED
            .get_or_init(|| Arc::new(Self::load_embedded()))
            .clone()
    }

    /// Owned copy of the embedded registry, open for additions
    pub fn with_embedded() -> Self {
        Self::embedded().as_ref().clone()
    }

    fn load_embedded() -> Self {
        let mut registry = Self::new();

        let embedded_configs = [
            embed_region_config!("US", "../../configs/regions/us.toml"),
            embed_region_config!("GB", "../../configs/regions/gb.toml"),
            embed_region_config!("DE", "../../configs/regions/de.toml"),
            embed_region_config!("FR", "../../configs/regions/fr.toml"),
            embed_region_config!("IN", "../../configs/regions/in.toml"),
            embed_region_config!("JP", "../../configs/regions/jp.toml"),
        ];

        for (code, toml_content) in embedded_configs {
            let loaded = read_config(toml_content).and_then(|config| {
                // Validate that the config code matches
                if config.code() != code {
                    return Err(RegionError::invalid(
                        code,
                        format!("config code mismatch, got {}", config.code()),
                    ));
                }
                registry.register(config)
            });

            if let Err(e) = loaded {
                log::warn!("Failed to load embedded {code} config: {e}");
            }
        }

        registry
    }

    /// Validate and register a grammar, replacing any previous one for the region
    pub fn register(&mut self, mut config: RegionConfig) -> Result<Arc<Region>> {
        config.metadata.code = normalize_code(&config.metadata.code);
        let region = Arc::new(Region::from_config(config)?);
        log::debug!(
            "Registered region {} (+{})",
            region.code(),
            region.calling_code()
        );
        self.regions
            .insert(region.code().to_string(), Arc::clone(&region));
        Ok(region)
    }

    /// Register a grammar from a TOML document
    pub fn load_toml(&mut self, toml_str: &str) -> Result<Arc<Region>> {
        self.register(read_config(toml_str)?)
    }

    /// Register a grammar from a TOML file
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<Arc<Region>> {
        let content = std::fs::read_to_string(path.as_ref())?;
        self.load_toml(&content)
    }

    /// Use `factory` to build formatters for `code`
    pub fn register_factory(&mut self, code: &str, factory: FormatterFactory) {
        self.factories.insert(normalize_code(code), factory);
    }

    /// Look up a region
    pub fn get(&self, code: &str) -> Result<Arc<Region>> {
        let code = normalize_code(code);
        self.regions
            .get(&code)
            .cloned()
            .ok_or(RegionError::UnknownRegion(code))
    }

    /// Check whether a region is known
    pub fn contains(&self, code: &str) -> bool {
        self.regions.contains_key(&normalize_code(code))
    }

    /// Known region codes, sorted
    pub fn list_regions(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.regions.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Grouping formatter for `code`
    ///
    /// Unknown regions get a formatter over a bare grammar for
    /// `calling_code`, which never groups.
    pub fn formatter_for(&self, code: &str, calling_code: u16) -> Box<dyn GroupingFormatter> {
        let region = self.get(code).unwrap_or_else(|_| {
            log::warn!("No grammar for region {code}, digits will not be grouped");
            Arc::new(Region::bare(&normalize_code(code), calling_code))
        });

        match self.factories.get(region.code()) {
            Some(factory) => factory(region),
            None => Box::new(AsYouTypeFormatter::new(region)),
        }
    }
}

impl RegionMetadata for RegionRegistry {
    fn example_mobile_national_number(&self, region: &str) -> Option<String> {
        self.get(region)
            .ok()
            .and_then(|r| r.example_mobile().map(str::to_string))
    }

    fn calling_code(&self, region: &str) -> Option<u16> {
        self.get(region).ok().map(|r| r.calling_code())
    }

    fn parse_national_number(
        &self,
        text: &str,
        region: &str,
    ) -> std::result::Result<String, ParseError> {
        let region = self
            .get(region)
            .map_err(|_| ParseError::InvalidCountryCode)?;
        metadata::parse_national_number(
            text,
            region.national_prefix(),
            region.min_national_length(),
        )
    }
}

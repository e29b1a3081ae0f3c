//! Report configuration
//!
//! Controls which measures a report contains, in what order, and how values
//! are formatted. Loadable from TOML or JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StatsError};
use crate::measure::Measure;

/// Largest precision that still changes an `f64`'s printed value.
pub const MAX_PRECISION: usize = 17;

/// Output format for rendered reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One `name: value` line per measure
    #[default]
    Text,
    /// A single JSON object
    Json,
}

/// Report configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Measures to report, in output order
    pub measures: Vec<Measure>,
    /// Decimal places for text output
    pub precision: usize,
    /// Output format
    pub format: OutputFormat,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            measures: Measure::ALL.to_vec(),
            precision: 6,
            format: OutputFormat::Text,
        }
    }
}

impl StatsConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| StatsError::Config(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| StatsError::Config(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str).map_err(|e| StatsError::Config(e.to_string()))
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| StatsError::Config(e.to_string()))
    }

    /// Load and validate a configuration file.
    ///
    /// Files ending in `.json` are parsed as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json(&content)?
        } else {
            Self::from_toml(&content)?
        };
        config.validate()?;

        tracing::debug!(
            "Loaded stats config from {:?} ({} measures)",
            path,
            config.measures.len()
        );
        Ok(config)
    }

    /// Apply command-line overrides on top of a loaded configuration.
    ///
    /// `json` only ever switches the format to JSON; an empty `measures` list
    /// keeps the configured measures.
    pub fn with_overrides(
        mut self,
        json: bool,
        precision: Option<usize>,
        measures: Vec<Measure>,
    ) -> Self {
        if json {
            self.format = OutputFormat::Json;
        }
        if let Some(precision) = precision {
            self.precision = precision;
        }
        if !measures.is_empty() {
            self.measures = measures;
        }
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.measures.is_empty() {
            return Err(StatsError::Config(
                "at least one measure must be selected".to_string(),
            ));
        }

        if self.precision > MAX_PRECISION {
            return Err(StatsError::Config(format!(
                "precision must be at most {MAX_PRECISION}, got {}",
                self.precision
            )));
        }

        Ok(())
    }
}

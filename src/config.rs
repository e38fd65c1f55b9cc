//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! environment variables, then command-line flags (applied by the CLI).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::app::services::aggregator::GroupKey;
use crate::app::services::pivot::{PivotSort, PivotSortField};
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_PAGE_SIZE, DEFAULT_SOURCE, ENV_PAGE_SIZE, ENV_SOURCE,
};
use crate::models::SortDirection;
use crate::{FleetError, Result};

/// Pivot table defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PivotConfig {
    /// Field grouped into rows
    pub rows: GroupKey,

    /// Field grouped into columns
    pub columns: GroupKey,

    /// `name`, `total` or a column label
    pub default_sort: String,

    pub default_direction: SortDirection,
}

impl Default for PivotConfig {
    fn default() -> Self {
        Self {
            rows: GroupKey::Depot,
            columns: GroupKey::ServiceType,
            default_sort: "total".to_string(),
            default_direction: SortDirection::Desc,
        }
    }
}

impl PivotConfig {
    /// Initial pivot ordering
    pub fn sort(&self) -> PivotSort {
        let field = self
            .default_sort
            .parse::<PivotSortField>()
            .unwrap_or(PivotSortField::Total);
        PivotSort::new(field, self.default_direction)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when RUST_LOG is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Global configuration for the fleet list viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File path or http(s) URL of the fleet list
    pub source: String,

    /// Rows per page of search results
    pub page_size: usize,

    pub pivot: PivotConfig,

    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            pivot: PivotConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Location of the per-user config file
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| FleetError::configuration("Could not determine config directory"))?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Parse a TOML config file; missing keys take their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FleetError::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: Config = toml::from_str(&content)?;
        debug!("Loaded config file {}", path.display());
        Ok(config)
    }

    /// Defaults, then `config_file` if given, then the process environment
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(source) = lookup(ENV_SOURCE) {
            debug!("{} overrides source", ENV_SOURCE);
            self.source = source;
        }

        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            self.page_size = raw.trim().parse().map_err(|_| {
                FleetError::configuration(format!(
                    "{} must be a positive integer, got '{}'",
                    ENV_PAGE_SIZE, raw
                ))
            })?;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.source.trim().is_empty() {
            return Err(FleetError::configuration("Fleet source must not be empty"));
        }

        if self.page_size == 0 {
            return Err(FleetError::configuration(
                "Page size must be greater than 0",
            ));
        }

        Ok(())
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_pivot(mut self, pivot: PivotConfig) -> Self {
        self.pivot = pivot;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.source, "./FleetList.csv");
        assert_eq!(config.page_size, 25);
        assert_eq!(config.pivot.sort(), PivotSort::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "page_size = 50\n\n[pivot]\nrows = \"make\"\n\
             default_sort = \"name\"\ndefault_direction = \"asc\""
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.page_size, 50);
        assert_eq!(config.source, "./FleetList.csv");
        assert_eq!(config.pivot.rows, GroupKey::Make);
        assert_eq!(config.pivot.columns, GroupKey::ServiceType);
        assert_eq!(
            config.pivot.sort(),
            PivotSort::new(PivotSortField::Name, SortDirection::Asc)
        );
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "page_size = \"lots\"").unwrap();

        let error = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(error, FleetError::ConfigParse(_)));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("FLEET_LIST_SOURCE", "https://example.org/FleetList.csv"),
            ("FLEET_LIST_PAGE_SIZE", "100"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_env(|key| env.get(key).map(|value| value.to_string()))
            .unwrap();

        assert_eq!(config.source, "https://example.org/FleetList.csv");
        assert_eq!(config.page_size, 100);
    }

    #[test]
    fn test_bad_env_page_size() {
        let mut config = Config::default();
        let result =
            config.apply_env(|key| (key == "FLEET_LIST_PAGE_SIZE").then(|| "-3".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_validation() {
        assert!(Config::default().with_page_size(0).validate().is_err());
        assert!(Config::default().with_source("  ").validate().is_err());
        assert!(Config::default().with_source("data.csv").with_page_size(10).validate().is_ok());
    }
}

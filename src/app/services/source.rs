//! Raw fleet list retrieval
//!
//! The fleet list is fetched once per load, either from disk or over HTTP.
//! There is no retry and no timeout: a failed fetch is terminal for that load
//! and surfaces as [`FleetError::SourceUnavailable`].

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info};

use crate::app::services::fleet_parser::{FleetParser, ParseStats};
use crate::models::Bus;
use crate::{FleetError, Result};

/// Where the fleet list comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "location", rename_all = "lowercase")]
pub enum FleetSource {
    File(PathBuf),
    Url(String),
}

impl FleetSource {
    pub fn is_remote(&self) -> bool {
        matches!(self, FleetSource::Url(_))
    }

    /// Fetch the raw text in one attempt
    pub async fn fetch_text(&self) -> Result<String> {
        match self {
            FleetSource::File(path) => {
                debug!("Reading fleet list from {}", path.display());
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| FleetError::source_unavailable(self.to_string(), e.to_string()))
            }
            FleetSource::Url(url) => {
                debug!("Requesting fleet list from {}", url);
                let resp = reqwest::get(url)
                    .await
                    .map_err(|e| FleetError::source_unavailable(url.as_str(), e.to_string()))?;

                if !resp.status().is_success() {
                    let status = resp.status();
                    return Err(FleetError::source_unavailable(url.as_str(), status.to_string()));
                }

                Ok(resp.text().await?)
            }
        }
    }
}

impl fmt::Display for FleetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetSource::File(path) => write!(f, "{}", path.display()),
            FleetSource::Url(url) => f.write_str(url),
        }
    }
}

impl FromStr for FleetSource {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(FleetError::invalid_argument("Fleet source must not be empty"));
        }

        let lowered = trimmed.to_lowercase();
        if lowered.starts_with("http://") || lowered.starts_with("https://") {
            Ok(FleetSource::Url(trimmed.to_string()))
        } else {
            Ok(FleetSource::File(PathBuf::from(trimmed)))
        }
    }
}

/// Parsed fleet list held for the lifetime of a session
#[derive(Debug, Clone)]
pub struct FleetDataset {
    pub source: FleetSource,
    pub records: Vec<Bus>,
    pub stats: ParseStats,
}

impl FleetDataset {
    /// Build a dataset from text already in memory
    pub fn from_text(source: FleetSource, text: &str) -> Self {
        let result = FleetParser::new().parse(text);
        Self {
            source,
            records: result.records,
            stats: result.stats,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Fetch and parse the fleet list from `source`
pub async fn load_fleet(source: &FleetSource) -> Result<FleetDataset> {
    let text = source.fetch_text().await?;
    let dataset = FleetDataset::from_text(source.clone(), &text);

    info!("Loaded {} buses from {}", dataset.len(), source);
    Ok(dataset)
}

//! Reference data for Ringside.
//!
//! Ships a fixed table of wrestling promotions (name, home city, aliases and
//! coordinates) as an embedded JSON resource, and can load the same format from
//! disk when a different table is wanted.
use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

pub mod embedded;
mod error;
mod venue;

pub use error::{DataError, Result};
pub use venue::{Coordinates, Venue, VenueStatus};

/// Environment variable pointing at an alternative dataset file.
pub const DATA_PATH_ENV: &str = "RINGSIDE_DATA";

/// Header stored alongside the venue records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub version: String,
    pub source: String,
    pub generated_at: DateTime<Utc>,
    pub description: String,
    pub venue_count: usize,
}

/// A complete, read-only venue table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueDataset {
    pub metadata: DatasetMetadata,
    pub venues: Vec<Venue>,
}

impl VenueDataset {
    /// Parse a dataset from its JSON representation and check the header count.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let dataset: Self = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataError::DatasetNotFound(path.display().to_string()));
        }
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    fn validate(&self) -> Result<()> {
        if self.metadata.venue_count != self.venues.len() {
            return Err(DataError::CountMismatch {
                expected: self.metadata.venue_count,
                found: self.venues.len(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.venues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }
}

/// Where the venue table comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DataSource {
    /// The table compiled into the library
    #[default]
    Embedded,
    /// A JSON file in the same format as the embedded table
    File(PathBuf),
}

impl DataSource {
    /// Use the file named by `RINGSIDE_DATA` if set, otherwise the embedded table.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Same as [`DataSource::from_env`], reading variables through `lookup`.
    ///
    /// A value that is empty or only whitespace selects the embedded table.
    #[must_use]
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match lookup(DATA_PATH_ENV) {
            Some(path) if !path.trim().is_empty() => {
                info!(path = %path, "Using dataset from {DATA_PATH_ENV}");
                Self::File(PathBuf::from(path))
            }
            _ => Self::Embedded,
        }
    }

    /// Load the table for this source.
    #[instrument(name = "Load venue dataset", level = "info", skip(self), fields(source = %self))]
    pub fn load(&self) -> Result<Arc<VenueDataset>> {
        match self {
            Self::Embedded => embedded::load_embedded_data(),
            Self::File(path) => {
                let dataset = VenueDataset::from_path(path).inspect_err(|e| {
                    warn!(path = ?path, error = %e, "Failed to load dataset file");
                })?;
                info!(
                    venues = dataset.len(),
                    version = %dataset.metadata.version,
                    "Loaded dataset from file"
                );
                Ok(Arc::new(dataset))
            }
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => f.write_str("embedded"),
            Self::File(path) => write!(f, "file:{}", path.display()),
        }
    }
}

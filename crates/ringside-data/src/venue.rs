use std::fmt;

use serde::{Deserialize, Serialize};

/// A point on the globe in decimal degrees.
///
/// No range validation is performed; out-of-range values are carried through
/// unchanged and produce meaningless (but defined) distances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees, nominally `[-90, 90]`
    pub latitude: f64,
    /// Longitude in decimal degrees, nominally `[-180, 180]`
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueStatus {
    #[default]
    Active,
    Defunct,
}

impl VenueStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Defunct => "defunct",
        }
    }
}

impl fmt::Display for VenueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One record of the reference table: a wrestling promotion and where it runs.
///
/// `search_terms` holds the promotion's own aliases only. The generic domain
/// words shared by every record are kept in one place by the search layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    /// Display name, unique within the shipped table (not enforced)
    pub name: String,
    /// Human readable address or region
    pub location: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub country: String,
    #[serde(default)]
    pub status: VenueStatus,
    /// Free-text aliases used for keyword matching, in priority order
    #[serde(default)]
    pub search_terms: Vec<String>,
    /// Venues without coordinates never satisfy a radius-bounded query
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl Venue {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, VenueStatus::Active)
    }
}

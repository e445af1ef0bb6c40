//! Parsing of loosely typed search requests.
//!
//! Upstream callers (form fields, query strings, stored preferences) may hand
//! over coordinates and radii as either numbers or strings. Everything is
//! turned into plain `f64` values here so the search core never coerces.
use ringside_data::Coordinates;
use serde::Deserialize;

use super::{Result, SearchError, proximity::DEFAULT_MAX_MILES};

/// A number that may arrive as JSON number or as text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(f64),
    Text(String),
}

impl LooseNumber {
    pub fn to_f64(&self, field: &'static str) -> Result<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|_| SearchError::InvalidNumber {
                    field,
                    value: raw.clone(),
                }),
        }
    }
}

impl From<f64> for LooseNumber {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for LooseNumber {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Search request as received from the UI layer.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSearchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default, alias = "latitude")]
    pub lat: Option<LooseNumber>,
    #[serde(default, alias = "longitude", alias = "lon")]
    pub lng: Option<LooseNumber>,
    #[serde(default, alias = "max_miles", alias = "radius")]
    pub max_miles: Option<LooseNumber>,
}

/// A fully typed search request.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub user_location: Option<Coordinates>,
    pub max_miles: f64,
}

impl SearchRequest {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            user_location: None,
            max_miles: DEFAULT_MAX_MILES,
        }
    }

    #[must_use]
    pub fn near(mut self, location: Coordinates) -> Self {
        self.user_location = Some(location);
        self
    }

    #[must_use]
    pub fn within(mut self, max_miles: f64) -> Self {
        self.max_miles = max_miles;
        self
    }

    /// Parse a raw request, using `default_max_miles` when no radius was sent.
    pub fn parse(raw: &RawSearchRequest, default_max_miles: f64) -> Result<Self> {
        let user_location = match (&raw.lat, &raw.lng) {
            (Some(lat), Some(lng)) => Some(Coordinates::new(
                lat.to_f64("lat")?,
                lng.to_f64("lng")?,
            )),
            (None, None) => None,
            _ => return Err(SearchError::IncompleteLocation),
        };

        let max_miles = match &raw.max_miles {
            Some(radius) => validate_radius(radius.to_f64("maxMiles")?)?,
            None => default_max_miles,
        };

        Ok(Self {
            query: raw.query.clone(),
            user_location,
            max_miles,
        })
    }

    /// Deserialize and parse a JSON request body.
    pub fn from_json(json: &str, default_max_miles: f64) -> Result<Self> {
        let raw: RawSearchRequest = serde_json::from_str(json)?;
        Self::parse(&raw, default_max_miles)
    }
}

impl TryFrom<RawSearchRequest> for SearchRequest {
    type Error = SearchError;

    fn try_from(raw: RawSearchRequest) -> Result<Self> {
        Self::parse(&raw, DEFAULT_MAX_MILES)
    }
}

pub(crate) fn validate_radius(max_miles: f64) -> Result<f64> {
    if max_miles.is_finite() && max_miles >= 0.0 {
        Ok(max_miles)
    } else {
        Err(SearchError::InvalidRadius(max_miles))
    }
}

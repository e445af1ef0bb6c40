use ringside_data::VenueStatus;

use crate::{
    error::RingsideError,
    search::{DEFAULT_MAX_MILES, ProximityParams, validate_radius},
};

/// Which venue statuses a search may return.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Defunct promotions are returned exactly like active ones
    #[default]
    All,
    ActiveOnly,
}

impl StatusFilter {
    #[must_use]
    pub const fn allows(self, status: VenueStatus) -> bool {
        match self {
            Self::All => true,
            Self::ActiveOnly => matches!(status, VenueStatus::Active),
        }
    }
}

/// Settings applied by [`crate::VenueSearcher`] to every search.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Radius in miles used when a request does not carry its own
    pub max_miles: f64,
    /// Maximum number of results, `None` for all of them
    pub limit: Option<usize>,
    pub status_filter: StatusFilter,
    /// Trigger words accepted in addition to the built-in domain terms
    pub extra_trigger_words: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_miles: DEFAULT_MAX_MILES,
            limit: None,
            status_filter: StatusFilter::All,
            extra_trigger_words: Vec::new(),
        }
    }
}

impl SearchConfig {
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::new()
    }

    pub(crate) fn proximity_params(&self, max_miles: f64) -> ProximityParams<'_> {
        ProximityParams {
            max_miles,
            status_filter: self.status_filter,
            extra_trigger_words: &self.extra_trigger_words,
        }
    }
}

/// Builder for creating search configurations with ergonomic defaults
#[derive(Debug, Clone, Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    /// Create a new builder with the default 100 mile radius
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    /// Shows within easy driving distance
    pub fn local() -> Self {
        let mut builder = Self::new();
        builder.config.max_miles = 25.0;
        builder.config.limit = Some(20);
        builder
    }

    /// Same as the defaults, spelled out
    pub fn regional() -> Self {
        Self::new()
    }

    /// Half the Earth's circumference, so every located venue qualifies
    pub fn anywhere() -> Self {
        let mut builder = Self::new();
        builder.config.max_miles = std::f64::consts::PI * crate::geo::EARTH_RADIUS_MILES;
        builder
    }

    pub fn max_miles(mut self, max_miles: f64) -> Self {
        self.config.max_miles = max_miles;
        self
    }

    /// Set the maximum number of results to return
    pub fn limit(mut self, limit: usize) -> Self {
        self.config.limit = Some(limit);
        self
    }

    pub fn unlimited(mut self) -> Self {
        self.config.limit = None;
        self
    }

    /// Leave defunct promotions out of the results
    pub fn active_only(mut self) -> Self {
        self.config.status_filter = StatusFilter::ActiveOnly;
        self
    }

    pub fn status_filter(mut self, filter: StatusFilter) -> Self {
        self.config.status_filter = filter;
        self
    }

    /// Accept another word as a domain trigger (stored lower-cased)
    pub fn trigger_word(mut self, word: impl AsRef<str>) -> Self {
        let word = word.as_ref().trim().to_lowercase();
        if !word.is_empty() && !self.config.extra_trigger_words.contains(&word) {
            self.config.extra_trigger_words.push(word);
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> SearchConfig {
        self.config
    }

    /// Build, rejecting a radius that is negative, infinite or `NaN`
    pub fn try_build(self) -> Result<SearchConfig, RingsideError> {
        validate_radius(self.config.max_miles).map_err(|_| {
            RingsideError::ConfigError(format!(
                "max_miles must be a finite, non-negative number, got {}",
                self.config.max_miles
            ))
        })?;
        Ok(self.config)
    }
}

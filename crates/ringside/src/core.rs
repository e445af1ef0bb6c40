//! The [`VenueSearcher`] facade.
//!
//! Owns a loaded venue table and a [`SearchConfig`], and exposes the keyword +
//! proximity search in the shapes the UI layer asks for: borrowed matches,
//! display records, parsed JSON requests and parallel batches.
//!
//! ```rust
//! use ringside::{Coordinates, VenueSearcher};
//!
//! let searcher = VenueSearcher::new_embedded()?;
//! let nyc = Coordinates::new(40.7128, -74.0060);
//! let results = searcher.search_within("wrestling", Some(nyc), 50.0);
//! assert_eq!(results[0].name(), "Major League Wrestling");
//! # Ok::<(), ringside::error::RingsideError>(())
//! ```
use std::sync::Arc;

use rayon::prelude::*;
use ringside_data::{Coordinates, DataSource, Venue, VenueDataset};
use tracing::{info, instrument};

use crate::{
    config::SearchConfig,
    display::DisplayRecord,
    error::Result,
    search::{SearchRequest, VenueMatch, proximity_search_inner},
};

pub type SearchResults<'a> = Vec<VenueMatch<'a>>;
pub type SearchResultsBatch<'a> = Vec<Vec<VenueMatch<'a>>>;

/// Searches one read-only venue table.
///
/// Cloning is cheap: the table is shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct VenueSearcher {
    data: Arc<VenueDataset>,
    config: SearchConfig,
}

impl VenueSearcher {
    /// Create a searcher over the table compiled into the library.
    #[instrument(name = "Create VenueSearcher with Embedded Data", level = "info")]
    pub fn new_embedded() -> Result<Self> {
        Self::new(&DataSource::Embedded)
    }

    /// Create a searcher over the given data source.
    #[instrument(name = "Create VenueSearcher", level = "info")]
    pub fn new(source: &DataSource) -> Result<Self> {
        let t_init = std::time::Instant::now();
        let data = source.load()?;

        info!(
            venues = data.len(),
            elapsed_seconds = ?t_init.elapsed(),
            "VenueSearcher initialization complete"
        );

        Ok(Self {
            data,
            config: SearchConfig::default(),
        })
    }

    /// Create a searcher over the source named by `RINGSIDE_DATA`, or the
    /// embedded table when it is unset.
    pub fn from_env() -> Result<Self> {
        Self::new(&DataSource::from_env())
    }

    #[must_use]
    pub fn from_dataset(dataset: VenueDataset) -> Self {
        Self {
            data: Arc::new(dataset),
            config: SearchConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub fn venues(&self) -> &[Venue] {
        self.data.venues()
    }

    #[must_use]
    pub fn dataset(&self) -> &VenueDataset {
        &self.data
    }

    /// Search with the searcher's own configuration.
    #[must_use]
    pub fn search(&self, query: &str, user_location: Option<Coordinates>) -> SearchResults<'_> {
        self.search_with_config(query, user_location, &self.config)
    }

    /// Search with the searcher's configuration but an explicit radius.
    #[must_use]
    pub fn search_within(
        &self,
        query: &str,
        user_location: Option<Coordinates>,
        max_miles: f64,
    ) -> SearchResults<'_> {
        self.run(query, user_location, max_miles, &self.config)
    }

    /// Search with a one-off configuration.
    #[must_use]
    pub fn search_with_config(
        &self,
        query: &str,
        user_location: Option<Coordinates>,
        config: &SearchConfig,
    ) -> SearchResults<'_> {
        self.run(query, user_location, config.max_miles, config)
    }

    /// Search with an already parsed request; its radius wins over the config.
    #[must_use]
    pub fn search_request(&self, request: &SearchRequest) -> SearchResults<'_> {
        self.search_within(&request.query, request.user_location, request.max_miles)
    }

    /// Parse a loosely typed JSON request and return display records.
    pub fn search_json(&self, body: &str) -> Result<Vec<DisplayRecord>> {
        let request = SearchRequest::from_json(body, self.config.max_miles)?;
        Ok(Self::to_display(&self.search_request(&request)))
    }

    /// Search and shape the results for rendering.
    #[must_use]
    pub fn search_display(
        &self,
        query: &str,
        user_location: Option<Coordinates>,
    ) -> Vec<DisplayRecord> {
        Self::to_display(&self.search(query, user_location))
    }

    /// Run many searches in parallel. Results come back in request order.
    #[instrument(name = "Bulk venue search", level = "info", skip_all, fields(requests = requests.len()))]
    pub fn search_bulk(&self, requests: &[SearchRequest]) -> SearchResultsBatch<'_> {
        let t0 = std::time::Instant::now();
        let results: SearchResultsBatch<'_> = requests
            .par_iter()
            .map(|request| self.search_request(request))
            .collect();

        info!(
            elapsed_seconds = ?t0.elapsed(),
            total_matches = results.iter().map(Vec::len).sum::<usize>(),
            "Bulk search complete"
        );
        results
    }

    fn to_display(matches: &[VenueMatch<'_>]) -> Vec<DisplayRecord> {
        matches.iter().map(DisplayRecord::from).collect()
    }

    #[instrument(name = "Venue search", level = "debug", skip(self, config))]
    fn run(
        &self,
        query: &str,
        user_location: Option<Coordinates>,
        max_miles: f64,
        config: &SearchConfig,
    ) -> SearchResults<'_> {
        let mut results = proximity_search_inner(
            self.data.venues(),
            query,
            user_location,
            &config.proximity_params(max_miles),
        );
        if let Some(limit) = config.limit {
            results.truncate(limit);
        }
        results
    }
}

impl From<VenueDataset> for VenueSearcher {
    fn from(dataset: VenueDataset) -> Self {
        Self::from_dataset(dataset)
    }
}

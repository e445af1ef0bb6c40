//! Ringside - Wrestling Promotion Proximity Search
//!
//! Ringside answers the question a map search screen asks: which promotions
//! match what the user typed, and which of those run shows near them. It works
//! over a small, fixed table of promotions that ships inside the library.
//!
//! # Quick Start
//!
//! ```rust
//! use ringside::{Coordinates, VenueSearcher};
//!
//! let searcher = VenueSearcher::new_embedded()?;
//!
//! // Keyword only: every match, in table order
//! let everywhere = searcher.search("lucha libre", None);
//! assert!(!everywhere.is_empty());
//!
//! // Keyword + location: within the configured radius, nearest first
//! let nyc = Coordinates::new(40.7128, -74.0060);
//! for m in searcher.search("wrestling", Some(nyc)) {
//!     println!("{} ({:.1} mi)", m.name(), m.distance_miles.unwrap_or_default());
//! }
//!
//! // Queries without a wrestling term are ignored outright
//! assert!(searcher.search("pizza", Some(nyc)).is_empty());
//! # Ok::<(), ringside::error::RingsideError>(())
//! ```
//!
//! # Pieces
//!
//! - [`distance_miles`]: haversine distance in statute miles
//! - [`matches_query`] / [`passes_domain_gate`]: the keyword stage
//! - [`filter_and_sort_by_proximity`]: radius filter and distance ordering
//! - [`to_display_shape`]: flat records for list rows and map markers
//! - [`SearchRequest`]: parses string-or-number input from the UI layer
use once_cell::sync::OnceCell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod config;
mod core;
mod display;
pub mod error;
mod geo;
mod search;

pub use crate::core::{SearchResults, SearchResultsBatch, VenueSearcher};

pub use config::{SearchConfig, SearchConfigBuilder, StatusFilter};
pub use display::{DisplayRecord, VENUE_TAG, format_miles, slugify, to_display_shape};
pub use geo::{EARTH_RADIUS_MILES, distance_miles};
pub use ringside_data as data;
pub use ringside_data::{Coordinates, DataSource, Venue, VenueDataset, VenueStatus};
pub use search::{
    DEFAULT_MAX_MILES, DOMAIN_TERMS, LooseNumber, ProximityParams, RawSearchRequest,
    SearchError, SearchRequest, VenueMatch, filter_and_sort_by_proximity, matches_query,
    passes_domain_gate, passes_domain_gate_with, proximity_search_inner,
};

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Initialize logging for the Ringside library.
///
/// Installs a `tracing` fmt subscriber filtered by `RUST_LOG` when set, or by
/// `level` otherwise. Later calls are no-ops.
///
/// ```rust
/// use ringside::init_logging;
/// use tracing::Level;
///
/// init_logging(Level::INFO)?;
/// # Ok::<(), ringside::error::RingsideError>(())
/// ```
pub fn init_logging(level: impl Into<LevelFilter>) -> Result<&'static (), error::RingsideError> {
    LOGGER_INIT.get_or_try_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level.into().to_string()))?
            .add_directive("rayon=warn".parse()?);

        tracing_subscriber::fmt::fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
        Ok(())
    })
}

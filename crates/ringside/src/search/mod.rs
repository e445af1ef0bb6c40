//! Keyword and proximity search over the venue table.
//!
//! A query first has to pass the domain gate, then each venue is matched by
//! case-insensitive substring, and finally the matches are bounded by radius and
//! ordered by distance when the caller knows where the user is.

pub use error::SearchError;
mod boundary;
mod matching;
mod proximity;

pub use boundary::{LooseNumber, RawSearchRequest, SearchRequest};
pub(crate) use boundary::validate_radius;
use error::Result;
pub use matching::{DOMAIN_TERMS, matches_query, passes_domain_gate, passes_domain_gate_with};
pub use proximity::{
    DEFAULT_MAX_MILES, ProximityParams, VenueMatch, filter_and_sort_by_proximity,
    proximity_search_inner,
};

mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum SearchError {
        #[error("Invalid number for {field}: {value:?}")]
        InvalidNumber { field: &'static str, value: String },
        #[error("Both latitude and longitude are required for a located search")]
        IncompleteLocation,
        #[error("Search radius must be a finite, non-negative number of miles, got {0}")]
        InvalidRadius(f64),
        #[error("Malformed search request: {0}")]
        MalformedRequest(#[from] serde_json::Error),
    }
    pub type Result<T> = std::result::Result<T, SearchError>;
}

use itertools::Itertools;
use ringside_data::{Coordinates, Venue};
use tracing::{debug, trace};

use super::matching::{matches_query_with, passes_domain_gate_with};
use crate::{config::StatusFilter, geo::distance_miles};

/// Default search radius in miles.
pub const DEFAULT_MAX_MILES: f64 = 100.0;

/// A venue that satisfied a search, with its distance from the user when one
/// was supplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VenueMatch<'a> {
    pub venue: &'a Venue,
    pub distance_miles: Option<f64>,
}

impl<'a> VenueMatch<'a> {
    #[must_use]
    pub const fn venue(&self) -> &'a Venue {
        self.venue
    }

    #[must_use]
    pub fn name(&self) -> &'a str {
        &self.venue.name
    }
}

/// Knobs for a single proximity search beyond the query and location.
#[derive(Debug, Clone, PartialEq)]
pub struct ProximityParams<'p> {
    pub max_miles: f64,
    pub status_filter: StatusFilter,
    pub extra_trigger_words: &'p [String],
}

impl Default for ProximityParams<'_> {
    fn default() -> Self {
        Self {
            max_miles: DEFAULT_MAX_MILES,
            status_filter: StatusFilter::All,
            extra_trigger_words: &[],
        }
    }
}

/// Keyword match a query against `venues`, then bound and order by distance.
///
/// Without a user location every keyword match is returned in table order.
/// With one, venues lacking coordinates or further than `max_miles` away are
/// dropped and the rest are sorted nearest first; equal distances keep table
/// order. A query that fails the domain gate returns an empty list.
#[must_use]
pub fn filter_and_sort_by_proximity<'a>(
    venues: &'a [Venue],
    query: &str,
    user_location: Option<Coordinates>,
    max_miles: f64,
) -> Vec<VenueMatch<'a>> {
    proximity_search_inner(
        venues,
        query,
        user_location,
        &ProximityParams {
            max_miles,
            ..ProximityParams::default()
        },
    )
}

pub fn proximity_search_inner<'a>(
    venues: &'a [Venue],
    query: &str,
    user_location: Option<Coordinates>,
    params: &ProximityParams<'_>,
) -> Vec<VenueMatch<'a>> {
    if !passes_domain_gate_with(query, params.extra_trigger_words) {
        trace!(query, "Query failed domain gate");
        return Vec::new();
    }

    let keyword_matches = venues
        .iter()
        .filter(|venue| matches_query_with(query, venue, params.extra_trigger_words))
        .filter(|venue| params.status_filter.allows(venue.status));

    let results: Vec<VenueMatch<'a>> = match user_location {
        None => keyword_matches
            .map(|venue| VenueMatch {
                venue,
                distance_miles: None,
            })
            .collect(),
        Some(origin) => keyword_matches
            .filter_map(|venue| {
                let distance = distance_miles(origin, venue.coordinates?);
                // NaN compares false and is dropped here
                (distance <= params.max_miles).then_some(VenueMatch {
                    venue,
                    distance_miles: Some(distance),
                })
            })
            .sorted_by(|a, b| {
                a.distance_miles
                    .unwrap_or(f64::INFINITY)
                    .total_cmp(&b.distance_miles.unwrap_or(f64::INFINITY))
            })
            .collect(),
    };

    let defunct = results.iter().filter(|m| !m.venue.is_active()).count();
    debug!(
        query,
        located = user_location.is_some(),
        max_miles = params.max_miles,
        results = results.len(),
        defunct,
        "Proximity search complete"
    );

    results
}

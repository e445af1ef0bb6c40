//! Flat, serializable records for list rows and map markers.
use once_cell::sync::Lazy;
use regex::Regex;
use ringside_data::Venue;
use serde::Serialize;

use crate::search::VenueMatch;

static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("static slug regex"));

/// Category tag carried by every record.
pub const VENUE_TAG: &str = "venue";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    /// Slug derived from the venue name
    pub id: String,
    pub title: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_label: Option<String>,
    /// Placeholder until ratings exist
    pub rating: Option<f32>,
    /// Chips shown under the title: status then country
    pub tags: Vec<String>,
    pub tag: &'static str,
}

/// Map a venue (and its distance, if known) to a display record.
#[must_use]
pub fn to_display_shape(venue: &Venue, distance_miles: Option<f64>) -> DisplayRecord {
    DisplayRecord {
        id: slugify(&venue.name),
        title: venue.name.clone(),
        subtitle: venue.location.clone(),
        distance_label: distance_miles.map(format_miles),
        rating: None,
        tags: vec![venue.status.to_string(), venue.country.clone()],
        tag: VENUE_TAG,
    }
}

impl From<&VenueMatch<'_>> for DisplayRecord {
    fn from(m: &VenueMatch<'_>) -> Self {
        to_display_shape(m.venue, m.distance_miles)
    }
}

/// Lower-case the name and collapse every run of other characters into `-`.
#[must_use]
pub fn slugify(name: &str) -> String {
    NON_SLUG_CHARS
        .replace_all(&name.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

#[must_use]
pub fn format_miles(miles: f64) -> String {
    if miles < 0.1 {
        "< 0.1 mi".to_string()
    } else if miles < 10.0 {
        format!("{miles:.1} mi")
    } else {
        format!("{miles:.0} mi")
    }
}

//! Nearby promotion search
//!
//! Demonstrates:
//! - Creating a searcher over the embedded table
//! - Keyword-only and located searches
//! - Tuning the radius and status filter with the config builder
//! - Parsing a loosely typed JSON request into display records

use ringside::{Coordinates, SearchConfigBuilder, VenueMatch, VenueSearcher};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    ringside::init_logging(tracing::Level::INFO)?;

    let searcher = VenueSearcher::new_embedded()?;
    let nyc = Coordinates::new(40.7128, -74.0060);

    println!("Promotions matching 'puroresu' anywhere:");
    print_matches(&searcher.search("puroresu", None), 5);

    println!("\nWrestling within 50 miles of New York:");
    print_matches(&searcher.search_within("wrestling", Some(nyc), 50.0), 10);

    println!("\nActive promotions within 100 miles of Philadelphia:");
    let config = SearchConfigBuilder::regional().active_only().limit(5).build();
    let philly = Coordinates::new(39.9526, -75.1652);
    print_matches(&searcher.search_with_config("wrestling", Some(philly), &config), 5);

    println!("\nJSON request from the map screen:");
    let body = r#"{"query": "lucha libre", "lat": "19.4326", "lng": "-99.1332", "maxMiles": "15"}"#;
    for record in searcher.search_json(body)? {
        println!("  {}", serde_json::to_string(&record)?);
    }

    Ok(())
}

fn print_matches(matches: &[VenueMatch<'_>], limit: usize) {
    for (i, m) in matches.iter().take(limit).enumerate() {
        let distance = m
            .distance_miles
            .map_or_else(|| "-".to_string(), ringside::format_miles);
        println!(
            "  {}. {} ({}) [{}] {}",
            i + 1,
            m.name(),
            m.venue.location,
            m.venue.status,
            distance
        );
    }

    if matches.len() > limit {
        println!("  ... and {} more", matches.len() - limit);
    }
}

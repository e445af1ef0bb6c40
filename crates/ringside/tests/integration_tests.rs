//! Integration tests for Ringside proximity search
//!
//! These tests run against the public API and the embedded promotion table.

use std::io::Write;

use ringside::{
    Coordinates, DataSource, SearchConfigBuilder, SearchRequest, StatusFilter, Venue,
    VenueSearcher, VenueStatus, distance_miles, filter_and_sort_by_proximity, matches_query,
};

const NYC: Coordinates = Coordinates::new(40.7128, -74.0060);

fn setup_test_env() {
    let _ = ringside::init_logging(tracing::Level::WARN);
}

fn searcher() -> VenueSearcher {
    VenueSearcher::new_embedded().expect("Should create searcher")
}

#[test]
fn test_nyc_fifty_mile_scenario() {
    setup_test_env();

    let searcher = searcher();
    let results = searcher.search_within("wrestling", Some(NYC), 50.0);

    assert!(!results.is_empty());
    assert_eq!(results[0].name(), "Major League Wrestling");

    let names: Vec<&str> = results.iter().map(|m| m.name()).collect();
    assert!(!names.contains(&"Melbourne City Wrestling"));
    assert!(!names.contains(&"Progress Wrestling"));
    assert!(!names.contains(&"Revolution Pro Wrestling"));

    // Sorted ascending by distance, all inside the radius
    let distances: Vec<f64> = results.iter().filter_map(|m| m.distance_miles).collect();
    assert_eq!(distances.len(), results.len());
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    assert!(distances.iter().all(|d| *d <= 50.0));
}

#[test]
fn test_far_away_promotions_really_are_far() {
    setup_test_env();

    let searcher = searcher();
    let everywhere = searcher.search_within("wrestling", Some(NYC), 20_000.0);
    let distance_of = |name: &str| {
        everywhere
            .iter()
            .find(|m| m.name() == name)
            .and_then(|m| m.distance_miles)
            .expect("venue should be present")
    };

    assert!((distance_of("Progress Wrestling") - 3460.0).abs() < 50.0);
    assert!(distance_of("Melbourne City Wrestling") > 9_000.0);
}

#[test]
fn test_domain_gate_on_full_table() {
    setup_test_env();

    let searcher = searcher();
    assert!(searcher.search("pizza", None).is_empty());
    assert!(searcher.search("pizza", Some(NYC)).is_empty());
    // A unique alias alone does not pass the gate
    assert!(searcher.search("njpw", None).is_empty());
}

#[test]
fn test_no_location_returns_table_order() {
    setup_test_env();

    let searcher = searcher();
    let results = searcher.search("wrestling", None);
    assert_eq!(results.len(), searcher.venues().len());
    for (m, venue) in results.iter().zip(searcher.venues()) {
        assert_eq!(m.name(), venue.name);
        assert!(m.distance_miles.is_none());
    }
}

#[test]
fn test_unlocated_venue_only_without_location() {
    setup_test_env();

    let searcher = searcher();
    let unlocated = searcher
        .venues()
        .iter()
        .find(|v| v.coordinates.is_none())
        .expect("table should contain an unlocated venue")
        .name
        .clone();

    assert!(
        searcher
            .search("wrestling", None)
            .iter()
            .any(|m| m.name() == unlocated)
    );
    assert!(
        !searcher
            .search_within("wrestling", Some(NYC), 30_000.0)
            .iter()
            .any(|m| m.name() == unlocated)
    );
}

#[test]
fn test_active_only_configuration() {
    setup_test_env();

    let searcher = searcher();
    let defunct_total = searcher
        .venues()
        .iter()
        .filter(|v| v.status == VenueStatus::Defunct)
        .count();
    assert!(defunct_total > 0);

    let config = SearchConfigBuilder::anywhere().active_only().build();
    assert_eq!(config.status_filter, StatusFilter::ActiveOnly);

    let active = searcher.search_with_config("wrestling", None, &config);
    assert_eq!(active.len(), searcher.venues().len() - defunct_total);
    assert!(active.iter().all(|m| m.venue.is_active()));
}

#[test]
fn test_custom_dataset_file() {
    setup_test_env();

    let json = r#"{
        "metadata": {
            "version": "custom",
            "source": "integration-test",
            "generated_at": "2024-02-02T12:00:00Z",
            "description": "three venues",
            "venue_count": 3
        },
        "venues": [
            {"name": "Fifty", "location": "F", "city": "F", "country": "X",
             "search_terms": ["fifty"], "coordinates": {"latitude": 0.0, "longitude": 0.7237}},
            {"name": "Ten", "location": "T", "city": "T", "country": "X",
             "search_terms": ["ten"], "coordinates": {"latitude": 0.0, "longitude": 0.1447}},
            {"name": "Thirty", "location": "H", "city": "H", "country": "X",
             "search_terms": ["thirty"], "coordinates": {"latitude": 0.0, "longitude": 0.4342}}
        ]
    }"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();

    let searcher = VenueSearcher::new(&DataSource::File(file.path().to_path_buf())).unwrap();
    assert_eq!(searcher.dataset().metadata.version, "custom");

    let results = searcher.search("wrestling", Some(Coordinates::new(0.0, 0.0)));
    let names: Vec<&str> = results.iter().map(|m| m.name()).collect();
    assert_eq!(names, vec!["Ten", "Thirty", "Fifty"]);
}

#[test]
fn test_free_function_matches_facade() {
    setup_test_env();

    let searcher = searcher();
    let direct = filter_and_sort_by_proximity(searcher.venues(), "lucha", Some(NYC), 3000.0);
    let facade = searcher.search_within("lucha", Some(NYC), 3000.0);
    assert_eq!(direct, facade);
}

#[test]
fn test_matches_query_on_real_record() {
    setup_test_env();

    let searcher = searcher();
    let njpw: &Venue = searcher
        .venues()
        .iter()
        .find(|v| v.name == "New Japan Pro-Wrestling")
        .unwrap();

    assert!(matches_query("njpw", njpw));
    assert!(matches_query("NJPW", njpw));
    assert!(matches_query("nj", njpw));
    assert!(matches_query("wrestling", njpw));
    assert!(!matches_query("stardom", njpw));
}

#[test]
fn test_json_request_end_to_end() {
    setup_test_env();

    let searcher = searcher();
    let records = searcher
        .search_json(r#"{"query": "Pro Wrestling", "lat": 35.6762, "lng": "139.6503", "maxMiles": 30}"#)
        .unwrap();

    assert!(!records.is_empty());
    assert!(records.iter().all(|r| r.tag == "venue"));
    assert!(
        records
            .iter()
            .any(|r| r.id == "new-japan-pro-wrestling")
    );
}

#[test]
fn test_bulk_search() {
    setup_test_env();

    let searcher = searcher();
    let tokyo = Coordinates::new(35.6762, 139.6503);
    let requests = vec![
        SearchRequest::new("wrestling").near(NYC).within(10.0),
        SearchRequest::new("wrestling").near(tokyo).within(10.0),
        SearchRequest::new("pizza"),
    ];

    let batches = searcher.search_bulk(&requests);
    assert_eq!(batches.len(), 3);
    assert_eq!(batches[0][0].name(), "Major League Wrestling");
    assert!(
        batches[1]
            .iter()
            .all(|m| m.venue.country == "Japan")
    );
    assert!(batches[2].is_empty());
}

#[test]
fn test_distance_properties_on_table() {
    let points: Vec<Coordinates> = searcher()
        .venues()
        .iter()
        .filter_map(|v| v.coordinates)
        .take(12)
        .collect();

    for &a in &points {
        assert!(distance_miles(a, a).abs() < 1e-9);
        for &b in &points {
            let ab = distance_miles(a, b);
            let ba = distance_miles(b, a);
            assert!((ab - ba).abs() <= 1e-6 * ab.max(1.0));
            for &c in &points {
                assert!(distance_miles(a, c) <= ab + distance_miles(b, c) + 1e-6);
            }
        }
    }
}

#[test]
fn test_anywhere_preset_returns_every_located_venue() {
    setup_test_env();

    let searcher = searcher();
    let located = searcher
        .venues()
        .iter()
        .filter(|v| v.coordinates.is_some())
        .count();
    assert!(located > 0);

    let config = SearchConfigBuilder::anywhere().build();
    for origin in [
        Coordinates::new(0.0, 0.0),
        NYC,
        Coordinates::new(-90.0, 0.0),
    ] {
        let results = searcher.search_with_config("wrestling", Some(origin), &config);
        assert_eq!(results.len(), located, "from {origin}");
        assert!(results.iter().all(|m| m.distance_miles.is_some()));
    }
}

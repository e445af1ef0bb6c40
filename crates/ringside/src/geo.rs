//! Great-circle distance on a spherical Earth.
use ringside_data::Coordinates;

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Haversine distance between two points, in statute miles.
///
/// Inputs are decimal degrees and are not range checked. `NaN` in either
/// point yields `NaN`. `h` is clamped to `[0, 1]` so rounding noise near the
/// antipode stays inside the domain of `asin`; `clamp` passes `NaN` through.
#[inline]
#[must_use]
pub fn distance_miles(a: Coordinates, b: Coordinates) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_MILES * h.clamp(0.0, 1.0).sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NYC: Coordinates = Coordinates::new(40.7128, -74.0060);
    const LONDON: Coordinates = Coordinates::new(51.5074, -0.1278);
    const SYDNEY: Coordinates = Coordinates::new(-33.8688, 151.2093);
    const PHILADELPHIA: Coordinates = Coordinates::new(39.9526, -75.1652);

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_identity() {
        for point in [NYC, LONDON, SYDNEY, Coordinates::new(0.0, 0.0)] {
            assert_eq!(distance_miles(point, point), 0.0);
        }
    }

    #[test]
    fn test_symmetry() {
        let points = [NYC, LONDON, SYDNEY, PHILADELPHIA];
        for a in points {
            for b in points {
                assert!(approx_eq(distance_miles(a, b), distance_miles(b, a)));
            }
        }
    }

    #[test]
    fn test_triangle_inequality() {
        let points = [NYC, LONDON, SYDNEY, PHILADELPHIA];
        for a in points {
            for b in points {
                for c in points {
                    assert!(
                        distance_miles(a, c) <= distance_miles(a, b) + distance_miles(b, c) + 1e-6
                    );
                }
            }
        }
    }

    #[test]
    fn test_known_distances() {
        // New York to London is roughly 3,460 miles
        let nyc_london = distance_miles(NYC, LONDON);
        assert!(
            (nyc_london - 3460.0).abs() < 30.0,
            "NYC-London should be ~3460mi, got {nyc_london}"
        );

        // New York to Philadelphia is roughly 80 miles
        let nyc_phl = distance_miles(NYC, PHILADELPHIA);
        assert!(
            (nyc_phl - 80.0).abs() < 5.0,
            "NYC-Philadelphia should be ~80mi, got {nyc_phl}"
        );

        // New York to Sydney is roughly 9,950 miles
        let nyc_syd = distance_miles(NYC, SYDNEY);
        assert!((nyc_syd - 9950.0).abs() < 100.0, "got {nyc_syd}");
    }

    #[test]
    fn test_one_degree_of_longitude_at_equator() {
        let d = distance_miles(Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 1.0));
        let expected = EARTH_RADIUS_MILES * 1f64.to_radians();
        assert!(approx_eq(d, expected), "got {d}, expected {expected}");
    }

    #[test]
    fn test_antipodal_points_do_not_overflow_domain() {
        let d = distance_miles(Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 180.0));
        assert!(approx_eq(d, std::f64::consts::PI * EARTH_RADIUS_MILES));
    }

    #[test]
    fn test_nan_propagates() {
        let d = distance_miles(NYC, Coordinates::new(f64::NAN, 0.0));
        assert!(d.is_nan());
    }
}

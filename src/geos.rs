// src/geos.rs
//
// Distance enrichment for listings. Coordinates come in with the records
// (or from an upstream geocoder, which is not our concern); this module
// only does the great-circle math and writes the named distance attributes
// the location criterion scores on.

use crate::domain::Listing;
use crate::utils::round2;
use std::collections::BTreeMap;

const EARTH_RADIUS_MILES: f64 = 3958.8;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
}

impl Point {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Great-circle (haversine) distance between two points, in miles.
pub fn haversine_miles(a: Point, b: Point) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_MILES * h.sqrt().asin()
}

/// Adds a `distance_to(<poi>)` attribute (miles, rounded to 2 decimals) to
/// every listing that carries coordinates, one per named point of interest.
/// Listings without coordinates are left untouched; the scorer falls back
/// to its neutral component for them.
pub fn enrich_with_distances(listings: &mut [Listing], pois: &BTreeMap<String, Point>) {
    for listing in listings.iter_mut() {
        let (Some(lat), Some(lon)) = (listing.lat, listing.lon) else {
            continue;
        };
        let here = Point::new(lat, lon);
        for (name, &poi) in pois {
            let miles = haversine_miles(here, poi);
            listing.distances.insert(name.clone(), round2(miles));
        }
    }
}

// src/domain/listing.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single property record, flattened and cleaned, ready for scoring.
/// This is the contract the scorer consumes; upstream (API fetch, geocoding,
/// persistence) produces it and is responsible for numeric coercion.
///
/// `id` uniqueness is assumed upstream and never enforced here; duplicates
/// simply score independently.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,

    // Display attributes, carried through scoring unchanged.
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub url: Option<String>,

    // Scoring attributes. Absent means the source did not report it,
    // never zero.
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub beds: Option<f64>,
    #[serde(default)]
    pub baths: Option<f64>,
    #[serde(default)]
    pub sqft: Option<f64>,
    #[serde(default)]
    pub year_built: Option<i32>,

    // Coordinates, consumed by distance enrichment.
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,

    /// Distances in miles to named points of interest, e.g. "downtown".
    /// BTreeMap keeps serialization order deterministic.
    #[serde(default)]
    pub distances: BTreeMap<String, f64>,
}

impl Listing {
    /// Distance in miles to a named point of interest, if enriched.
    pub fn distance_to(&self, poi: &str) -> Option<f64> {
        self.distances.get(poi).copied()
    }
}

/// A `Listing` the scorer has accepted, with its weighted score and dense
/// rank. `score`'s range scales with the sum of the preference weights;
/// `rank` 1 is always the best.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredListing {
    pub listing: Listing,
    pub score: f64,
    pub rank: u32,
}

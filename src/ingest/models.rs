// src/ingest/models.rs

use serde::Deserialize;

// result
//  ├── property_id
//  ├── list_price
//  ├── href
//  ├── location
//  │    └── address
//  │         ├── line
//  │         ├── city
//  │         ├── state_code
//  │         ├── postal_code
//  │         └── coordinate
//  │              ├── lat
//  │              └── lon
//  └── description
//       ├── beds
//       ├── baths
//       ├── sqft
//       ├── year_built
//       └── type

/// Top-level search payload as the listings API returns it:
/// `data.home_search.results`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub data: Option<SearchData>,
}

#[derive(Debug, Deserialize)]
pub struct SearchData {
    pub home_search: Option<HomeSearch>,
}

#[derive(Debug, Deserialize)]
pub struct HomeSearch {
    #[serde(default)]
    pub results: Vec<RawProperty>,
}

impl SearchResponse {
    /// The result records, or empty when the payload carries none.
    pub fn results(self) -> Vec<RawProperty> {
        self.data
            .and_then(|d| d.home_search)
            .map(|hs| hs.results)
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct RawProperty {
    pub property_id: Option<String>,
    pub list_price: Option<f64>,
    pub href: Option<String>,

    pub location: Option<Location>,
    pub description: Option<Description>,
}

#[derive(Debug, Deserialize)]
pub struct Location {
    pub address: Option<Address>,
}

#[derive(Debug, Deserialize)]
pub struct Address {
    pub line: Option<String>,
    pub city: Option<String>,
    pub state_code: Option<String>,
    pub postal_code: Option<String>,
    pub coordinate: Option<Coordinate>,
}

#[derive(Debug, Deserialize)]
pub struct Coordinate {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct Description {
    pub beds: Option<f64>,
    pub baths: Option<f64>,
    pub sqft: Option<f64>,
    pub year_built: Option<i32>,
    #[serde(rename = "type")]
    pub property_type: Option<String>,
}

// src/ingest/clean.rs

use crate::domain::Listing;
use crate::errors::RankerError;
use crate::ingest::models::{RawProperty, SearchResponse};
use std::collections::BTreeMap;
use tracing::debug;

/// Flattens a raw API record into a clean `Listing`. Acts as the
/// anti-corruption layer between the nested payload and our domain model:
/// the scorer tolerates absent numeric fields, so only the identifier is
/// required here.
pub fn clean_listing(raw: &RawProperty) -> Result<Listing, RankerError> {
    let id = raw
        .property_id
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| RankerError::MissingField("property_id".to_string()))?
        .to_string();

    let address = raw.location.as_ref().and_then(|loc| loc.address.as_ref());
    let coordinate = address.and_then(|a| a.coordinate.as_ref());
    let description = raw.description.as_ref();

    let field = |value: Option<&String>| value.cloned().unwrap_or_default();

    Ok(Listing {
        id,
        address: field(address.and_then(|a| a.line.as_ref())),
        city: field(address.and_then(|a| a.city.as_ref())),
        state: field(address.and_then(|a| a.state_code.as_ref())),
        zip: field(address.and_then(|a| a.postal_code.as_ref())),
        property_type: description.and_then(|d| d.property_type.clone()),
        url: raw.href.clone(),
        price: raw.list_price,
        beds: description.and_then(|d| d.beds),
        baths: description.and_then(|d| d.baths),
        sqft: description.and_then(|d| d.sqft),
        year_built: description.and_then(|d| d.year_built),
        lat: coordinate.and_then(|c| c.lat),
        lon: coordinate.and_then(|c| c.lon),
        distances: BTreeMap::new(),
    })
}

/// Parses a full search payload straight into clean listings. Malformed
/// JSON (out-of-contract input, e.g. non-numeric prices) fails fast with a
/// data-validation error rather than being coerced.
pub fn parse_search_payload(json: &str) -> Result<Vec<Listing>, RankerError> {
    let response: SearchResponse =
        serde_json::from_str(json).map_err(|e| RankerError::InvalidData(e.to_string()))?;
    Ok(clean_listings(&response.results()))
}

/// Batch form: records that cannot be identified are skipped, not fatal.
pub fn clean_listings(raw: &[RawProperty]) -> Vec<Listing> {
    raw.iter()
        .filter_map(|prop| match clean_listing(prop) {
            Ok(listing) => Some(listing),
            Err(e) => {
                debug!("skipping listing: {e}");
                None
            }
        })
        .collect()
}

// src/tests/utils.rs

use crate::domain::{Listing, Preferences, Weights};

/// A listing with just the fields the hard filter needs.
pub fn bare_listing(id: &str, price: f64, beds: f64, baths: f64) -> Listing {
    Listing {
        id: id.to_string(),
        price: Some(price),
        beds: Some(beds),
        baths: Some(baths),
        ..Default::default()
    }
}

/// The three Austin sample listings used throughout the scenario tests.
pub fn austin_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: "1".to_string(),
            address: "123 Main St".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            zip: "78701".to_string(),
            price: Some(400_000.0),
            beds: Some(3.0),
            baths: Some(2.0),
            sqft: Some(2000.0),
            year_built: Some(2015),
            distances: [("downtown".to_string(), 5.0)].into(),
            ..Default::default()
        },
        Listing {
            id: "2".to_string(),
            address: "456 Oak Ave".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            zip: "78702".to_string(),
            price: Some(350_000.0),
            beds: Some(4.0),
            baths: Some(2.5),
            sqft: Some(2200.0),
            year_built: Some(2018),
            distances: [("downtown".to_string(), 3.0)].into(),
            ..Default::default()
        },
        Listing {
            id: "3".to_string(),
            address: "789 Elm St".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            zip: "78703".to_string(),
            price: Some(450_000.0),
            beds: Some(3.0),
            baths: Some(2.0),
            sqft: Some(1800.0),
            year_built: Some(2010),
            distances: [("downtown".to_string(), 8.0)].into(),
            ..Default::default()
        },
    ]
}

pub fn austin_preferences() -> Preferences {
    Preferences {
        max_price: Some(500_000.0),
        min_beds: Some(3.0),
        min_baths: Some(2.0),
        weights: Weights {
            price: 0.3,
            location: 0.25,
            size: 0.2,
            bedrooms: 0.15,
            age: 0.1,
        },
    }
}

// src/domain/preferences.rs

use serde::{Deserialize, Serialize};

/// Relative importance of each scoring criterion. Raw multipliers: they are
/// NOT required to sum to 1 and are never renormalized, so the final score
/// range scales with the sum. A zero weight switches its criterion off.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Weights {
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub location: f64,
    #[serde(default)]
    pub size: f64,
    #[serde(default)]
    pub bedrooms: f64,
    #[serde(default)]
    pub age: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.price + self.location + self.size + self.bedrooms + self.age
    }
}

/// Hard constraints plus criterion weights, as supplied by the user.
///
/// Absent constraints default permissively: no `max_price` means unbounded,
/// no `min_beds`/`min_baths` means zero. A listing that lacks the field a
/// constraint compares against is excluded regardless (see the scorer).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub max_price: Option<f64>,
    #[serde(default)]
    pub min_beds: Option<f64>,
    #[serde(default)]
    pub min_baths: Option<f64>,
    #[serde(default, alias = "priorities")]
    pub weights: Weights,
}

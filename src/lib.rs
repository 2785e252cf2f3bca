//! Preference scoring and ranking for real-estate listings.
//!
//! The core is [`Scorer::score`]: filter listings against hard constraints,
//! score each surviving listing 0-100 per criterion (price, location, size,
//! bedrooms, age), combine the components by the user's raw weights, and
//! return the set sorted by score with dense ranks.
//!
//! Fetching, geocoding, persistence, and presentation all live upstream or
//! downstream of this crate; it only consumes [`Listing`] records and
//! produces [`ScoredListing`] records.

pub mod domain;
pub mod errors;
pub mod geos;
pub mod ingest;
pub mod scorer;
mod utils;

#[cfg(test)]
mod tests;

pub use domain::{Listing, Preferences, ScoredListing, Weights};
pub use errors::RankerError;
pub use scorer::Scorer;

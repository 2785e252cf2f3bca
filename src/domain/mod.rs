pub mod listing;
pub mod preferences;

pub use listing::{Listing, ScoredListing};
pub use preferences::{Preferences, Weights};

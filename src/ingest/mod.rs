pub mod clean;
pub mod models;

pub use clean::{clean_listing, clean_listings, parse_search_payload};

pub mod api;


pub use api::{decode_listing, FeedClient, Listing, ListingChild, ListingData};

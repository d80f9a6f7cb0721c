pub mod cache;
pub mod geocode;
pub mod weather;

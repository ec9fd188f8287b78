//! Persistent app ID → game name cache.

pub mod store;

pub use store::AppNameCache;

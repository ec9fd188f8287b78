//! Steam store lookup module.
//!
//! This module provides:
//! - HTTP client for the store `appdetails` endpoint
//! - The `NameResolver` seam used by the organizer
//! - API response types

pub mod client;
pub mod resolver;
pub mod types;

pub use client::{classify_response, SteamStoreApi};
pub use resolver::{LookupOutcome, NameResolver};
pub use types::*;

//! Client for the ArcGIS World GeocodeServer REST API.
//!
//! Covers the four operations the coffee finder needs: category search
//! around a point, single-line geocoding, autocomplete suggestions, and
//! extent-scoped place search.

pub mod client;
pub mod error;
pub mod types;

pub use client::{ArcgisClient, ClientOptions};
pub use error::ArcgisError;
pub use types::{Candidate, CandidateAttributes, ShopRecord, Suggestion};

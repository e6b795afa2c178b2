//! ArcGIS GeocodeServer response types.
//!
//! ArcGIS names point axes `x`/`y` rather than latitude/longitude: `x` is
//! longitude and `y` is latitude.

use brewmap_core::{CompletionCandidate, Coordinate, LocatedResult};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// findAddressCandidates
// ---------------------------------------------------------------------------

/// Wrapper for the `findAddressCandidates` response: `{ "candidates": [...] }`.
#[derive(Debug, Deserialize)]
pub struct CandidatesResponse {
    pub candidates: Vec<Candidate>,
}

/// A single match returned by `findAddressCandidates`.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub address: String,
    pub location: WirePoint,
    /// Present only when `outFields` was requested.
    #[serde(default)]
    pub attributes: Option<CandidateAttributes>,
}

/// A point in ArcGIS axis naming.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WirePoint {
    /// Longitude.
    pub x: f64,
    /// Latitude.
    pub y: f64,
}

impl From<WirePoint> for Coordinate {
    fn from(p: WirePoint) -> Self {
        Coordinate::new(p.y, p.x)
    }
}

/// Attributes requested through `outFields`; only the place address is read.
#[derive(Debug, Default, Deserialize)]
pub struct CandidateAttributes {
    #[serde(rename = "Place_addr", default)]
    pub place_addr: Option<String>,
}

/// A coffee shop as decoded from a category search.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub place_address: Option<String>,
}

impl From<Candidate> for ShopRecord {
    fn from(c: Candidate) -> Self {
        let place_address = c
            .attributes
            .and_then(|a| a.place_addr)
            .filter(|addr| !addr.trim().is_empty());
        Self {
            name: c.address,
            latitude: c.location.y,
            longitude: c.location.x,
            place_address,
        }
    }
}

impl ShopRecord {
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Converts to a map pin: the name is the title and the place address,
    /// when known, the subtitle.
    #[must_use]
    pub fn into_located(self) -> LocatedResult {
        let coordinate = self.coordinate();
        LocatedResult::new(coordinate, self.name, self.place_address.unwrap_or_default())
    }
}

// ---------------------------------------------------------------------------
// suggest
// ---------------------------------------------------------------------------

/// Wrapper for the `suggest` response: `{ "suggestions": [...] }`.
#[derive(Debug, Deserialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub text: String,
    #[serde(default)]
    pub is_collection: bool,
}

impl Suggestion {
    /// Splits the suggestion text at the first `", "` into a title and a
    /// geocodable remainder. Text without a separator is used for both.
    #[must_use]
    pub fn to_candidate(&self) -> CompletionCandidate {
        let text = self.text.trim();
        match text.split_once(", ") {
            Some((title, rest)) if !title.is_empty() && !rest.trim().is_empty() => {
                CompletionCandidate::new(title, rest.trim())
            }
            _ => CompletionCandidate::new(text, text),
        }
    }
}

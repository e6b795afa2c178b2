//! Request-scoped value types shared by every search flow.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseSearchModeError;

/// A WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Angular extent of a [`Region`] on each axis, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

/// A rectangular viewport: a center plus the angular span around it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub center: Coordinate,
    pub span: Span,
}

impl Region {
    #[must_use]
    pub const fn new(center: Coordinate, latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            center,
            span: Span {
                latitude_delta,
                longitude_delta,
            },
        }
    }

    /// South-west corner of the viewport.
    #[must_use]
    pub fn south_west(&self) -> Coordinate {
        Coordinate::new(
            self.center.latitude - self.span.latitude_delta / 2.0,
            self.center.longitude - self.span.longitude_delta / 2.0,
        )
    }

    /// North-east corner of the viewport.
    #[must_use]
    pub fn north_east(&self) -> Coordinate {
        Coordinate::new(
            self.center.latitude + self.span.latitude_delta / 2.0,
            self.center.longitude + self.span.longitude_delta / 2.0,
        )
    }
}

/// One pin on the map, produced by the aggregator and consumed by the presenter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocatedResult {
    pub coordinate: Coordinate,
    pub title: String,
    pub subtitle: String,
    /// Cosmetic 1..=5 placeholder, only populated in [`SearchMode::Shop`].
    /// Not backed by any review data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_rating: Option<u8>,
}

impl LocatedResult {
    pub fn new(coordinate: Coordinate, title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            coordinate,
            title: title.into(),
            subtitle: subtitle.into(),
            source_rating: None,
        }
    }

    #[must_use]
    pub fn with_rating(mut self, rating: u8) -> Self {
        self.source_rating = Some(rating);
        self
    }
}

/// An autocomplete suggestion. `subtitle` holds the geocodable fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionCandidate {
    pub title: String,
    pub subtitle: String,
}

impl CompletionCandidate {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}

/// Which flow a submitted query runs through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Geocode the query, then look for coffee shops around it.
    #[default]
    Shop,
    /// Search named places inside the current viewport.
    Place,
    /// Resolve autocomplete suggestions to coordinates.
    General,
}

impl SearchMode {
    pub const ALL: [SearchMode; 3] = [SearchMode::Shop, SearchMode::Place, SearchMode::General];

    /// Search-bar placeholder text for this mode.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            SearchMode::Shop => "Find coffee shops near a city or address",
            SearchMode::Place => "Search places in this area",
            SearchMode::General => "Search for an address",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SearchMode::Shop => "shop",
            SearchMode::Place => "place",
            SearchMode::General => "general",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = ParseSearchModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shop" => Ok(SearchMode::Shop),
            "place" => Ok(SearchMode::Place),
            "general" => Ok(SearchMode::General),
            other => Err(ParseSearchModeError(other.to_string())),
        }
    }
}

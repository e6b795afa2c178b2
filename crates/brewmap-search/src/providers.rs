//! Collaborator seams the aggregator depends on, plus their ArcGIS
//! implementations.
//!
//! Every method resolves to a [`SearchError`] kind; transport detail is
//! logged here and then dropped.

use async_trait::async_trait;
use brewmap_arcgis::{ArcgisClient, ShopRecord};
use brewmap_core::{CompletionCandidate, Coordinate, LocatedResult, Region, SearchError};

/// Free text to coordinate.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// # Errors
    ///
    /// [`SearchError::NoLocationFound`] when the text does not resolve,
    /// whatever the underlying cause.
    async fn geocode(&self, query: &str) -> Result<Coordinate, SearchError>;
}

/// Shops of a fixed category around a coordinate.
#[async_trait]
pub trait ShopSearch: Send + Sync {
    /// # Errors
    ///
    /// [`SearchError::ServerError`] on transport or status failure,
    /// [`SearchError::DecodingFailed`] on payload mismatch.
    async fn fetch_shops(&self, near: Coordinate) -> Result<Vec<LocatedResult>, SearchError>;
}

/// Named places scoped to a viewport.
#[async_trait]
pub trait LocalSearch: Send + Sync {
    /// An empty list is a successful search with no matches.
    ///
    /// # Errors
    ///
    /// Same kinds as [`ShopSearch::fetch_shops`].
    async fn search_places(
        &self,
        query: &str,
        region: &Region,
    ) -> Result<Vec<LocatedResult>, SearchError>;
}

/// Ranked completions for partial input.
#[async_trait]
pub trait Autocomplete: Send + Sync {
    /// # Errors
    ///
    /// Same kinds as [`ShopSearch::fetch_shops`].
    async fn complete(
        &self,
        text: &str,
        near: Option<Coordinate>,
    ) -> Result<Vec<CompletionCandidate>, SearchError>;
}

#[async_trait]
impl Geocoder for ArcgisClient {
    async fn geocode(&self, query: &str) -> Result<Coordinate, SearchError> {
        match ArcgisClient::geocode(self, query).await {
            Ok(Some(point)) => Ok(point),
            Ok(None) => {
                tracing::debug!(query, "geocoder returned no candidates");
                Err(SearchError::NoLocationFound)
            }
            Err(e) => {
                tracing::warn!(query, error = %e, "geocode request failed");
                Err(SearchError::NoLocationFound)
            }
        }
    }
}

#[async_trait]
impl ShopSearch for ArcgisClient {
    async fn fetch_shops(&self, near: Coordinate) -> Result<Vec<LocatedResult>, SearchError> {
        match self.find_shops(near).await {
            Ok(shops) => Ok(shops.into_iter().map(ShopRecord::into_located).collect()),
            Err(e) => {
                tracing::warn!(near = %near, error = %e, "shop search failed");
                Err(e.into())
            }
        }
    }
}

#[async_trait]
impl LocalSearch for ArcgisClient {
    async fn search_places(
        &self,
        query: &str,
        region: &Region,
    ) -> Result<Vec<LocatedResult>, SearchError> {
        self.find_places(query, region).await.map_err(|e| {
            tracing::warn!(query, error = %e, "place search failed");
            e.into()
        })
    }
}

#[async_trait]
impl Autocomplete for ArcgisClient {
    async fn complete(
        &self,
        text: &str,
        near: Option<Coordinate>,
    ) -> Result<Vec<CompletionCandidate>, SearchError> {
        self.suggest(text, near).await.map_err(|e| {
            tracing::warn!(text, error = %e, "autocomplete request failed");
            e.into()
        })
    }
}

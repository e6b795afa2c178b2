//! The three search flows and the listener bracket around them.

use std::sync::Arc;

use async_trait::async_trait;
use brewmap_arcgis::ArcgisClient;
use brewmap_core::{
    placeholder_rating, CompletionCandidate, LocatedResult, Region, SearchError, SearchMode,
};
use futures::future::join_all;

use crate::listener::AggregationListener;
use crate::providers::{Autocomplete, Geocoder, LocalSearch, ShopSearch};

/// Trims surrounding whitespace and rejects queries that end up empty.
///
/// # Errors
///
/// [`SearchError::EmptyQuery`] when nothing but whitespace was entered.
pub fn normalize_query(query: &str) -> Result<&str, SearchError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        Err(SearchError::EmptyQuery)
    } else {
        Ok(trimmed)
    }
}

/// One asynchronous entry point per [`SearchMode`], plus the completion
/// lookup General mode depends on.
#[async_trait]
pub trait SearchOrchestrator: Send + Sync {
    /// Geocodes `query`, then fetches shops around the result.
    ///
    /// # Errors
    ///
    /// `EmptyQuery`, `NoLocationFound`, `ServerError`, or `DecodingFailed`.
    async fn search_shops(&self, query: &str) -> Result<Vec<LocatedResult>, SearchError>;

    /// Searches `query` inside `viewport`.
    ///
    /// # Errors
    ///
    /// `EmptyQuery`, `MissingRegion` without a viewport, or the local
    /// search provider's failure.
    async fn search_places(
        &self,
        query: &str,
        viewport: Option<&Region>,
    ) -> Result<Vec<LocatedResult>, SearchError>;

    /// Resolves completion candidates to coordinates.
    ///
    /// Uses `candidates` when given, otherwise fetches completions for
    /// `query` first.
    ///
    /// # Errors
    ///
    /// `EmptyQuery`, or the autocomplete provider's failure when candidates
    /// had to be fetched. Individual geocode failures are never errors.
    async fn search_general(
        &self,
        query: &str,
        candidates: Option<&[CompletionCandidate]>,
    ) -> Result<Vec<LocatedResult>, SearchError>;

    /// Completion candidates for partially typed `text`.
    ///
    /// # Errors
    ///
    /// The autocomplete provider's failure.
    async fn fetch_completions(&self, text: &str)
        -> Result<Vec<CompletionCandidate>, SearchError>;

    /// Runs the flow selected by `mode`, bracketed by listener callbacks.
    ///
    /// # Errors
    ///
    /// Whatever the selected flow returns; the same error is passed to
    /// [`AggregationListener::on_failure`] first.
    async fn search(
        &self,
        mode: SearchMode,
        query: &str,
        viewport: Option<&Region>,
        candidates: Option<&[CompletionCandidate]>,
        listener: &dyn AggregationListener,
    ) -> Result<Vec<LocatedResult>, SearchError> {
        listener.on_start();
        let outcome = match normalize_query(query) {
            Err(e) => Err(e),
            Ok(query) => {
                tracing::debug!(mode = %mode, query, "search started");
                match mode {
                    SearchMode::Shop => self.search_shops(query).await,
                    SearchMode::Place => self.search_places(query, viewport).await,
                    SearchMode::General => self.search_general(query, candidates).await,
                }
            }
        };

        match &outcome {
            Ok(results) => {
                tracing::debug!(mode = %mode, count = results.len(), "search finished");
                listener.on_success(results);
            }
            Err(e) => {
                tracing::warn!(mode = %mode, error = %e, "search failed");
                listener.on_failure(*e);
            }
        }
        listener.on_finish();
        outcome
    }
}

/// Orchestrates the search flows over injected collaborators.
///
/// Holds no reference back to the host UI; progress goes only to the
/// listener passed into each [`SearchOrchestrator::search`] call.
pub struct ResultAggregator {
    geocoder: Arc<dyn Geocoder>,
    shops: Arc<dyn ShopSearch>,
    places: Arc<dyn LocalSearch>,
    completions: Arc<dyn Autocomplete>,
    rating: fn() -> u8,
}

impl ResultAggregator {
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        shops: Arc<dyn ShopSearch>,
        places: Arc<dyn LocalSearch>,
        completions: Arc<dyn Autocomplete>,
    ) -> Self {
        Self {
            geocoder,
            shops,
            places,
            completions,
            rating: placeholder_rating,
        }
    }

    /// Backs every collaborator with the same ArcGIS client.
    #[must_use]
    pub fn arcgis(client: Arc<ArcgisClient>) -> Self {
        Self::new(client.clone(), client.clone(), client.clone(), client)
    }

    /// Replaces the random placeholder rating source.
    #[must_use]
    pub fn with_rating_source(mut self, rating: fn() -> u8) -> Self {
        self.rating = rating;
        self
    }

    /// Geocodes every candidate's subtitle concurrently and waits for all of
    /// them. Output keeps candidate order; unresolved candidates are dropped.
    async fn resolve_candidates(&self, candidates: &[CompletionCandidate]) -> Vec<LocatedResult> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let lookups = candidates.iter().map(|candidate| async move {
            match self.geocoder.geocode(&candidate.subtitle).await {
                Ok(point) => Some(LocatedResult::new(
                    point,
                    candidate.title.clone(),
                    candidate.subtitle.clone(),
                )),
                Err(e) => {
                    tracing::warn!(
                        title = %candidate.title,
                        subtitle = %candidate.subtitle,
                        error = %e,
                        "dropping completion that did not geocode"
                    );
                    None
                }
            }
        });

        let resolved: Vec<LocatedResult> = join_all(lookups).await.into_iter().flatten().collect();
        tracing::debug!(
            candidates = candidates.len(),
            resolved = resolved.len(),
            "resolved completion candidates"
        );
        resolved
    }
}

#[async_trait]
impl SearchOrchestrator for ResultAggregator {
    async fn search_shops(&self, query: &str) -> Result<Vec<LocatedResult>, SearchError> {
        let query = normalize_query(query)?;
        let near = self.geocoder.geocode(query).await?;
        let shops = self.shops.fetch_shops(near).await?;
        let rating = self.rating;
        Ok(shops
            .into_iter()
            .map(|shop| shop.with_rating(rating()))
            .collect())
    }

    async fn search_places(
        &self,
        query: &str,
        viewport: Option<&Region>,
    ) -> Result<Vec<LocatedResult>, SearchError> {
        let query = normalize_query(query)?;
        let region = viewport.ok_or(SearchError::MissingRegion)?;
        self.places.search_places(query, region).await
    }

    async fn search_general(
        &self,
        query: &str,
        candidates: Option<&[CompletionCandidate]>,
    ) -> Result<Vec<LocatedResult>, SearchError> {
        let query = normalize_query(query)?;
        match candidates {
            Some(candidates) => Ok(self.resolve_candidates(candidates).await),
            None => {
                let fetched = self.fetch_completions(query).await?;
                Ok(self.resolve_candidates(&fetched).await)
            }
        }
    }

    async fn fetch_completions(
        &self,
        text: &str,
    ) -> Result<Vec<CompletionCandidate>, SearchError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Vec::new());
        }
        self.completions.complete(text, None).await
    }
}

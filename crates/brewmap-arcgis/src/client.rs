//! HTTP client for the ArcGIS World GeocodeServer.
//!
//! Wraps `reqwest` with ArcGIS-specific error handling and typed response
//! deserialization. Any status other than `200 OK` is an error, and a 200
//! body carrying an `"error"` object surfaces as [`ArcgisError::Api`].

use std::time::Duration;

use brewmap_core::{AppConfig, CompletionCandidate, Coordinate, LocatedResult, Region};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::error::ArcgisError;
use crate::types::{CandidatesResponse, ShopRecord, SuggestResponse, Suggestion};

const DEFAULT_BASE_URL: &str =
    "https://geocode.arcgis.com/arcgis/rest/services/World/GeocodeServer";

const FIND_ADDRESS_CANDIDATES: &str = "findAddressCandidates";
const SUGGEST: &str = "suggest";

/// Request tuning shared by every operation.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub timeout_secs: u64,
    pub user_agent: String,
    pub token: Option<String>,
    pub shop_category: String,
    pub max_locations: u32,
    pub max_suggestions: u32,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: "brewmap/0.1 (coffee-finder)".to_owned(),
            token: None,
            shop_category: "Coffee Shop".to_owned(),
            max_locations: 50,
            max_suggestions: 10,
        }
    }
}

impl ClientOptions {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            timeout_secs: config.request_timeout_secs,
            user_agent: config.user_agent.clone(),
            token: config.arcgis_token.clone(),
            shop_category: config.shop_category.clone(),
            max_locations: config.max_locations,
            max_suggestions: config.max_suggestions,
        }
    }
}

/// Client for the ArcGIS GeocodeServer REST API.
///
/// Usually held behind an `Arc` and shared by every provider. Use
/// [`ArcgisClient::with_base_url`] to point at a mock server in tests.
pub struct ArcgisClient {
    client: Client,
    base_url: Url,
    options: ClientOptions,
}

impl ArcgisClient {
    /// Creates a client pointed at the public ArcGIS World geocoder.
    ///
    /// # Errors
    ///
    /// Returns [`ArcgisError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(options: ClientOptions) -> Result<Self, ArcgisError> {
        Self::with_base_url(DEFAULT_BASE_URL, options)
    }

    /// Creates a client from the loaded application configuration.
    ///
    /// # Errors
    ///
    /// Same as [`ArcgisClient::with_base_url`].
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ArcgisError> {
        Self::with_base_url(&config.arcgis_base_url, ClientOptions::from_app_config(config))
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ArcgisError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ArcgisError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(base_url: &str, options: ClientOptions) -> Result<Self, ArcgisError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(options.user_agent.as_str())
            .build()?;

        // Exactly one trailing slash so `Url::join` appends the operation
        // instead of replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ArcgisError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            options,
        })
    }

    #[must_use]
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Finds shops of the configured category around `near`.
    ///
    /// # Errors
    ///
    /// - [`ArcgisError::Http`] on network failure or timeout.
    /// - [`ArcgisError::UnexpectedStatus`] on any non-200 response.
    /// - [`ArcgisError::Api`] if ArcGIS reports an error in the body.
    /// - [`ArcgisError::Deserialize`] if the body does not match the
    ///   `candidates` schema.
    pub async fn find_shops(&self, near: Coordinate) -> Result<Vec<ShopRecord>, ArcgisError> {
        let location = format_point(near);
        let max_locations = self.options.max_locations.to_string();
        let url = self.build_url(
            FIND_ADDRESS_CANDIDATES,
            &[
                ("category", self.options.shop_category.as_str()),
                ("location", location.as_str()),
                ("outFields", "Place_addr,PlaceName"),
                ("maxLocations", max_locations.as_str()),
            ],
        )?;

        let body: CandidatesResponse = self
            .request(&url, &format!("findAddressCandidates(category near {location})"))
            .await?;
        let shops: Vec<ShopRecord> = body.candidates.into_iter().map(ShopRecord::from).collect();
        tracing::debug!(location = %location, count = shops.len(), "fetched shops");
        Ok(shops)
    }

    /// Geocodes free text to the best-scoring candidate's coordinate.
    ///
    /// Returns `Ok(None)` when ArcGIS finds no candidates.
    ///
    /// # Errors
    ///
    /// Same as [`ArcgisClient::find_shops`].
    pub async fn geocode(&self, query: &str) -> Result<Option<Coordinate>, ArcgisError> {
        let url = self.build_url(
            FIND_ADDRESS_CANDIDATES,
            &[("SingleLine", query), ("maxLocations", "1")],
        )?;
        let body: CandidatesResponse = self
            .request(&url, &format!("findAddressCandidates(SingleLine={query})"))
            .await?;
        Ok(body.candidates.into_iter().next().map(|c| c.location.into()))
    }

    /// Fetches autocomplete suggestions for partial input, optionally biased
    /// toward `near`.
    ///
    /// # Errors
    ///
    /// Same as [`ArcgisClient::find_shops`], against the `suggestions` schema.
    pub async fn suggest(
        &self,
        text: &str,
        near: Option<Coordinate>,
    ) -> Result<Vec<CompletionCandidate>, ArcgisError> {
        let max_suggestions = self.options.max_suggestions.to_string();
        let location = near.map(format_point);
        let mut params = vec![("text", text), ("maxSuggestions", max_suggestions.as_str())];
        if let Some(location) = &location {
            params.push(("location", location.as_str()));
        }

        let url = self.build_url(SUGGEST, &params)?;
        let body: SuggestResponse = self
            .request(&url, &format!("suggest(text={text})"))
            .await?;
        // Collection suggestions name a category, not an address to geocode.
        Ok(body
            .suggestions
            .iter()
            .filter(|s| !s.is_collection)
            .map(Suggestion::to_candidate)
            .collect())
    }

    /// Searches named places inside `region`.
    ///
    /// # Errors
    ///
    /// Same as [`ArcgisClient::find_shops`].
    pub async fn find_places(
        &self,
        query: &str,
        region: &Region,
    ) -> Result<Vec<LocatedResult>, ArcgisError> {
        let extent = format_extent(region);
        let max_locations = self.options.max_locations.to_string();
        let url = self.build_url(
            FIND_ADDRESS_CANDIDATES,
            &[
                ("SingleLine", query),
                ("searchExtent", extent.as_str()),
                ("maxLocations", max_locations.as_str()),
            ],
        )?;
        let body: CandidatesResponse = self
            .request(&url, &format!("findAddressCandidates(SingleLine={query} in {extent})"))
            .await?;
        Ok(body
            .candidates
            .into_iter()
            .map(|c| LocatedResult::new(c.location.into(), c.address, ""))
            .collect())
    }

    /// Builds the operation URL with properly percent-encoded query parameters.
    ///
    /// Always appends `f=json`, then `extra` in order, then `token` when one
    /// is configured.
    fn build_url(&self, op: &str, extra: &[(&str, &str)]) -> Result<Url, ArcgisError> {
        let mut url = self
            .base_url
            .join(op)
            .map_err(|e| ArcgisError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("f", "json");
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            if let Some(token) = &self.options.token {
                pairs.append_pair("token", token);
            }
        }
        Ok(url)
    }

    /// Sends a GET request, requires `200 OK`, rejects ArcGIS error bodies,
    /// and deserializes the rest into `T`.
    async fn request<T: DeserializeOwned>(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<T, ArcgisError> {
        // reqwest errors carry the request URL, which includes the token.
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ArcgisError::Http(e.without_url()))?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(ArcgisError::UnexpectedStatus {
                status: status.as_u16(),
                url: redact_token(url),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| ArcgisError::Http(e.without_url()))?;
        let body: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| ArcgisError::Deserialize {
                context: context.to_owned(),
                source: e,
            })?;
        Self::check_api_error(&body)?;

        serde_json::from_value(body).map_err(|e| ArcgisError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }

    /// Checks for a top-level `"error"` object and returns it as an error.
    fn check_api_error(body: &serde_json::Value) -> Result<(), ArcgisError> {
        let Some(error) = body.get("error") else {
            return Ok(());
        };
        let code = error
            .get("code")
            .and_then(serde_json::Value::as_i64)
            .unwrap_or_default();
        let message = error
            .get("message")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("unknown error")
            .to_owned();
        Err(ArcgisError::Api { code, message })
    }
}

/// `<lon>,<lat>`, the ArcGIS point order.
fn format_point(point: Coordinate) -> String {
    format!("{},{}", point.longitude, point.latitude)
}

/// `<xmin>,<ymin>,<xmax>,<ymax>` for the `searchExtent` parameter.
fn format_extent(region: &Region) -> String {
    let sw = region.south_west();
    let ne = region.north_east();
    format!("{},{},{},{}", sw.longitude, sw.latitude, ne.longitude, ne.latitude)
}

/// Renders `url` for error messages with any `token` value masked.
fn redact_token(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == "token") {
        return url.to_string();
    }
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "token" { "[redacted]".into() } else { v };
            (k.into_owned(), v.into_owned())
        })
        .collect();
    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

use brewmap_core::SearchError;
use thiserror::Error;

/// Errors returned by the ArcGIS geocoding client.
#[derive(Debug, Error)]
pub enum ArcgisError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with anything other than `200 OK`.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// ArcGIS reports failures as `{"error": {"code", "message"}}` inside a
    /// 200 response.
    #[error("ArcGIS API error {code}: {message}")]
    Api { code: i64, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl From<ArcgisError> for SearchError {
    fn from(err: ArcgisError) -> Self {
        match err {
            ArcgisError::Deserialize { .. } => SearchError::DecodingFailed,
            ArcgisError::Http(_)
            | ArcgisError::UnexpectedStatus { .. }
            | ArcgisError::Api { .. }
            | ArcgisError::InvalidBaseUrl { .. } => SearchError::ServerError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_maps_to_decoding_failed() {
        let source = serde_json::from_str::<()>("{").unwrap_err();
        let err = ArcgisError::Deserialize {
            context: "test".to_owned(),
            source,
        };
        assert_eq!(SearchError::from(err), SearchError::DecodingFailed);
    }

    #[test]
    fn status_and_api_errors_map_to_server_error() {
        let status = ArcgisError::UnexpectedStatus {
            status: 503,
            url: "http://example.test".to_owned(),
        };
        let api = ArcgisError::Api {
            code: 498,
            message: "Invalid token.".to_owned(),
        };
        assert_eq!(SearchError::from(status), SearchError::ServerError);
        assert_eq!(SearchError::from(api), SearchError::ServerError);
    }
}

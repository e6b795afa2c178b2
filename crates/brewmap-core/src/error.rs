use thiserror::Error;

/// Why a single search attempt produced no results.
///
/// Every kind is local to one attempt; none of them is fatal to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum SearchError {
    /// The query was empty after trimming whitespace.
    #[error("query is empty")]
    EmptyQuery,

    /// The query text could not be geocoded to a coordinate.
    #[error("no location found for query")]
    NoLocationFound,

    /// Transport failure, timeout, or a non-200 / API-level error response.
    #[error("search service returned an error")]
    ServerError,

    /// The response body did not match the expected schema.
    #[error("search response could not be decoded")]
    DecodingFailed,

    /// A place search was requested without a viewport to scope it to.
    #[error("place search requires a map region")]
    MissingRegion,
}

impl SearchError {
    /// Fixed `(title, message)` pair shown to the user for this kind.
    #[must_use]
    pub const fn alert(self) -> (&'static str, &'static str) {
        match self {
            SearchError::EmptyQuery => ("Error", "Please make sure you enter something."),
            SearchError::ServerError | SearchError::DecodingFailed => {
                ("Sorry", "It looks like we could not fetch the data.")
            }
            SearchError::NoLocationFound => {
                ("Sorry", "It looks like we could not find that location.")
            }
            SearchError::MissingRegion => ("Error", "Move the map to the area you want to search."),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
#[error("unknown search mode \"{0}\" (expected shop, place, or general)")]
pub struct ParseSearchModeError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_and_decoding_failures_share_alert_copy() {
        assert_eq!(
            SearchError::ServerError.alert(),
            SearchError::DecodingFailed.alert()
        );
    }

    #[test]
    fn empty_query_alert_asks_for_input() {
        let (title, message) = SearchError::EmptyQuery.alert();
        assert_eq!(title, "Error");
        assert_eq!(message, "Please make sure you enter something.");
    }

    #[test]
    fn every_kind_has_non_empty_alert_copy() {
        for kind in [
            SearchError::EmptyQuery,
            SearchError::NoLocationFound,
            SearchError::ServerError,
            SearchError::DecodingFailed,
            SearchError::MissingRegion,
        ] {
            let (title, message) = kind.alert();
            assert!(!title.is_empty(), "{kind:?} has empty title");
            assert!(!message.is_empty(), "{kind:?} has empty message");
        }
    }
}

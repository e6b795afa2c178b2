use super::*;

fn test_client(base_url: &str) -> ArcgisClient {
    ArcgisClient::with_base_url(base_url, ClientOptions::default())
        .expect("client construction should not fail")
}

#[test]
fn build_url_appends_operation_and_json_format() {
    let client = test_client("https://geocode.example.test/GeocodeServer");
    let url = client
        .build_url("findAddressCandidates", &[("maxLocations", "1")])
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://geocode.example.test/GeocodeServer/findAddressCandidates?f=json&maxLocations=1"
    );
}

#[test]
fn build_url_strips_trailing_slash() {
    let client = test_client("https://geocode.example.test/GeocodeServer/");
    let url = client.build_url("suggest", &[("text", "blue")]).unwrap();
    assert_eq!(
        url.as_str(),
        "https://geocode.example.test/GeocodeServer/suggest?f=json&text=blue"
    );
}

#[test]
fn build_url_encodes_special_characters() {
    let client = test_client("https://geocode.example.test/GeocodeServer");
    let url = client
        .build_url("findAddressCandidates", &[("category", "Coffee Shop")])
        .unwrap();
    assert!(
        url.as_str().contains("category=Coffee+Shop")
            || url.as_str().contains("category=Coffee%20Shop"),
        "query param should be percent-encoded: {url}"
    );
}

#[test]
fn build_url_appends_token_last() {
    let options = ClientOptions {
        token: Some("abc123".to_owned()),
        ..ClientOptions::default()
    };
    let client = ArcgisClient::with_base_url("https://geocode.example.test/gs", options).unwrap();
    let url = client.build_url("suggest", &[("text", "x")]).unwrap();
    assert!(url.as_str().ends_with("&token=abc123"), "got {url}");
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = ArcgisClient::with_base_url("not a url", ClientOptions::default());
    assert!(matches!(result, Err(ArcgisError::InvalidBaseUrl { .. })));
}

#[test]
fn format_point_is_longitude_first() {
    assert_eq!(format_point(Coordinate::new(37.7, -122.4)), "-122.4,37.7");
}

#[test]
fn format_extent_orders_min_then_max() {
    let region = Region::new(Coordinate::new(10.0, 20.0), 2.0, 4.0);
    assert_eq!(format_extent(&region), "18,9,22,11");
}

#[test]
fn check_api_error_extracts_code_and_message() {
    let body = serde_json::json!({
        "error": { "code": 498, "message": "Invalid Token", "details": [] }
    });
    let err = ArcgisClient::check_api_error(&body).unwrap_err();
    assert!(
        matches!(err, ArcgisError::Api { code: 498, ref message } if message == "Invalid Token")
    );
}

#[test]
fn check_api_error_passes_normal_bodies() {
    let body = serde_json::json!({ "candidates": [] });
    assert!(ArcgisClient::check_api_error(&body).is_ok());
}

#[test]
fn redact_token_masks_only_the_token() {
    let url = Url::parse("https://geocode.example.test/gs/suggest?f=json&text=a&token=secret").unwrap();
    let rendered = redact_token(&url);
    assert!(!rendered.contains("secret"));
    assert!(rendered.contains("text=a"));
}

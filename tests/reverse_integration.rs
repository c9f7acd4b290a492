use quick_geocode::Coordinates;
use serde_json::json;

mod common;
use common::{result_body, MockServer, Reply};

#[tokio::test]
async fn test_reverse_geocode_sends_coordinates_and_zoom() {
    let server = MockServer::start(vec![(
        "/reverse",
        Reply::json(result_body(json!({
            "lat": 48.8584,
            "lon": 2.2945,
            "label": "Paris, France"
        }))),
    )])
    .await;

    let result = server
        .client()
        .reverse_geocode(48.8584, 2.2945, Some(18))
        .await
        .unwrap()
        .expect("reverse geocode should find a place");
    assert_eq!(result.label, "Paris, France");
    assert_eq!(result.coordinates(), Coordinates::new(48.8584, 2.2945));

    let request = server.last_request("/reverse");
    assert_eq!(request.query.get("lat").map(String::as_str), Some("48.8584"));
    assert_eq!(request.query.get("lon").map(String::as_str), Some("2.2945"));
    assert_eq!(request.query.get("zoom").map(String::as_str), Some("18"));
}

#[tokio::test]
async fn test_reverse_geocode_zoom_is_optional() {
    let server = MockServer::start(vec![(
        "/reverse",
        Reply::json(result_body(json!({ "lat": -33.8688, "lon": 151.2093, "label": "Sydney" }))),
    )])
    .await;

    server
        .client()
        .reverse_geocode_point(Coordinates::new(-33.8688, 151.2093), None)
        .await
        .unwrap()
        .unwrap();

    let request = server.last_request("/reverse");
    assert_eq!(request.query.get("lat").map(String::as_str), Some("-33.8688"));
    assert!(!request.query.contains_key("zoom"));
}

#[tokio::test]
async fn test_reverse_geocode_in_the_ocean() {
    let server = MockServer::start(vec![(
        "/reverse",
        Reply::json(json!({ "success": true, "data": { "result": null } })),
    )])
    .await;

    let result = quick_geocode::reverse_geocode(0.0, -140.0, &server.url)
        .await
        .unwrap();
    assert!(result.is_none());
}

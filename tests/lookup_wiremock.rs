//! Lookups against a mock WeatherAPI.com server.

use std::time::Duration;

use reqwest::StatusCode;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};
use wxnow::config::Config;
use wxnow::{Coordinates, FailureKind, Icon, Lookup, LookupError, Outcome, Phase, Unit, WeatherApi};

fn kathmandu_response() -> serde_json::Value {
    serde_json::json!({
        "location": {
            "name": "Kathmandu",
            "region": "",
            "country": "Nepal",
            "lat": 27.72,
            "lon": 85.32,
            "localtime": "2024-11-05 14:30"
        },
        "current": {
            "last_updated": "2024-11-05 14:15",
            "temp_c": 20,
            "temp_f": 68,
            "is_day": 1,
            "condition": {
                "text": "Clear",
                "icon": "//cdn.weatherapi.com/weather/64x64/day/113.png",
                "code": 1000
            },
            "wind_kph": 6.1,
            "humidity": 49
        }
    })
}

fn lookup_for(server: &MockServer, timeout_secs: u64) -> Lookup {
    let config = Config {
        api_key: "test-key".into(),
        base_url: format!("{}/v1/", server.uri()),
        timeout_secs,
        home: None,
    };
    Lookup::new(WeatherApi::new(&config).unwrap())
}

#[tokio::test]
async fn test_kathmandu_search() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .and(query_param("key", "test-key"))
        .and(query_param("q", "Kathmandu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(kathmandu_response()))
        .expect(1)
        .mount(&server)
        .await;

    let mut lookup = lookup_for(&server, 5);
    let outcome = lookup.search("Kathmandu").await;

    let Outcome::Displayed { result, icon } = outcome else {
        panic!("expected a displayed result");
    };
    assert_eq!(result.location_name, "Kathmandu");
    assert_eq!(result.condition_text, "Clear");
    assert_eq!(icon, Icon::Clear);
    assert_eq!(icon.id(), "clear");
    assert_eq!(lookup.phase(), &Phase::Displaying { icon: Icon::Clear });
    assert_eq!(lookup.units().render(), "20°C");

    lookup.units_mut().set_unit(Unit::Fahrenheit).unwrap();
    assert_eq!(lookup.units().render(), "68°F");
    lookup.units_mut().set_unit(Unit::Celsius).unwrap();
    assert_eq!(lookup.units().render(), "20°C");
}

#[tokio::test]
async fn test_coordinates_search() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .and(query_param("q", "27.7172,85.324"))
        .respond_with(ResponseTemplate::new(200).set_body_json(kathmandu_response()))
        .expect(1)
        .mount(&server)
        .await;

    let mut lookup = lookup_for(&server, 5);
    let coords = Coordinates::new(27.7172, 85.324).unwrap();
    let outcome = lookup.search_coordinates(coords).await;
    assert!(matches!(outcome, Outcome::Displayed { .. }));
}

#[tokio::test]
async fn test_http_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": {"code": 1006, "message": "No matching location found."}
        })))
        .mount(&server)
        .await;

    let mut lookup = lookup_for(&server, 5);
    let outcome = lookup.search("Atlantis").await;

    assert!(matches!(outcome, Outcome::Failed(LookupError::Http(status)) if status == StatusCode::BAD_REQUEST));
    assert_eq!(lookup.phase(), &Phase::Failed(FailureKind::Http(400)));
    assert_eq!(lookup.units().render(), "--");
}

#[tokio::test]
async fn test_undecodable_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "location": {"name": "Kathmandu"},
            "current": {"temp_c": 20, "condition": {"text": "Clear", "code": 1000}}
        })))
        .mount(&server)
        .await;

    let mut lookup = lookup_for(&server, 5);
    let outcome = lookup.search("Kathmandu").await;

    assert!(matches!(outcome, Outcome::Failed(LookupError::Decode(_))));
    assert_eq!(lookup.phase(), &Phase::Failed(FailureKind::Decode));
    assert!(lookup.units().last_result().is_none());
}

#[tokio::test]
async fn test_timeout_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(kathmandu_response())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut lookup = lookup_for(&server, 1);
    let outcome = lookup.search("Kathmandu").await;

    assert!(matches!(outcome, Outcome::Failed(LookupError::Network(_))));
    assert_eq!(lookup.phase(), &Phase::Failed(FailureKind::Network));
}

#[tokio::test]
async fn test_failure_keeps_displayed_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .and(query_param("q", "Kathmandu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(kathmandu_response()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .and(query_param("q", "Nowhere"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut lookup = lookup_for(&server, 5);
    lookup.search("Kathmandu").await;
    lookup.units_mut().set_unit(Unit::Fahrenheit).unwrap();

    let outcome = lookup.search("Nowhere").await;
    assert!(matches!(outcome, Outcome::Failed(LookupError::Http(_))));
    assert_eq!(lookup.units().last_result().unwrap().location_name, "Kathmandu");
    assert_eq!(lookup.units().render(), "20°C");
}

#[tokio::test]
async fn test_superseded_search_is_dropped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(kathmandu_response()))
        .mount(&server)
        .await;

    let mut lookup = lookup_for(&server, 5);
    let api = lookup.api().clone();

    let slow = lookup.begin();
    let fast = lookup.begin();

    let completion = api.current("Kathmandu").await;
    assert!(matches!(lookup.finish(fast, completion), Outcome::Displayed { .. }));

    let completion = api.current("Kathmandu").await;
    assert!(matches!(lookup.finish(slow, completion), Outcome::Superseded));
}

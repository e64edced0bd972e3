//! WeatherClient against a mocked wttr.in endpoint

mod common;

use std::time::Duration;

use reqwest::StatusCode;
use weather_tools_mcp::{WeatherClient, WeatherError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{client_for, config_for, wttr_body};

#[tokio::test]
async fn fetches_and_parses_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/London"))
        .and(query_param("format", "j1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(wttr_body("12", "Light rain", &[10; 8])))
        .expect(1)
        .mount(&server)
        .await;

    let snapshot = client_for(&server).fetch_weather("London").await.unwrap();

    assert_eq!(snapshot.current.temperature_c, 12.0);
    assert_eq!(snapshot.current.description, "Light rain");
    assert_eq!(snapshot.daily_forecast.len(), 3);
    assert_eq!(snapshot.daily_forecast[0].hourly.len(), 8);
}

#[tokio::test]
async fn location_is_percent_encoded_in_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/New%20York"))
        .respond_with(ResponseTemplate::new(200).set_body_json(wttr_body("20", "Sunny", &[0; 8])))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).fetch_weather("New York").await.unwrap();
}

#[tokio::test]
async fn non_success_status_is_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_weather("Atlantis").await.unwrap_err();

    assert!(
        matches!(err, WeatherError::Upstream { status } if status == StatusCode::SERVICE_UNAVAILABLE)
    );
}

#[tokio::test]
async fn invalid_json_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Unknown location; please try ~"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_weather("Nowhere").await.unwrap_err();

    assert!(matches!(err, WeatherError::Parse(_)));
}

#[tokio::test]
async fn missing_top_level_shape_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "nearest_area": [] })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_weather("Nowhere").await.unwrap_err();

    assert!(matches!(err, WeatherError::Parse(_)));
}

#[tokio::test]
async fn slow_upstream_hits_configured_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(wttr_body("12", "Fog", &[0; 8]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = config_for(&server).with_timeout(Duration::from_millis(100));
    let err = WeatherClient::new(&config)
        .unwrap()
        .fetch_weather("London")
        .await
        .unwrap_err();

    assert!(matches!(err, WeatherError::Http(ref e) if e.is_timeout()));
}

mod common;

use axum_test::TestServer;
use city_explorer::domain::outcome::Outcome;
use city_explorer::routes::router;
use common::Providers;

#[tokio::test]
async fn test_weather_bracketed_coordinates() {
    let state = common::create_test_state(Providers::default());
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .get("/weather")
        .add_query_param("data[formatted_query]", "Seattle, WA, USA")
        .add_query_param("data[latitude]", "47.6062")
        .add_query_param("data[longitude]", "-122.3321")
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    let days = json.as_array().unwrap();
    assert_eq!(days.len(), 8);
    assert_eq!(days[0]["forecast"], "Day 0");
    assert_eq!(days[0]["time"], "Mon Oct 15 2018");
}

#[tokio::test]
async fn test_weather_json_coordinates() {
    let state = common::create_test_state(Providers::default());
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .get("/weather")
        .add_query_param("data", r#"{"latitude":47.6062,"longitude":-122.3321}"#)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>().as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_weather_empty_is_empty_array() {
    let state = common::create_test_state(Providers {
        weather: Outcome::Empty,
        ..Default::default()
    });
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .get("/weather")
        .add_query_param("data[latitude]", "0")
        .add_query_param("data[longitude]", "0")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), serde_json::json!([]));
}

#[tokio::test]
async fn test_weather_failure_is_bad_gateway() {
    let state = common::create_test_state(Providers {
        weather: Outcome::Failed(common::transport_failure("weather")),
        ..Default::default()
    });
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .get("/weather")
        .add_query_param("data[latitude]", "47.6")
        .add_query_param("data[longitude]", "-122.3")
        .await;

    assert_eq!(response.status_code(), 502);
}

#[tokio::test]
async fn test_weather_invalid_coordinates() {
    let state = common::create_test_state(Providers::default());
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .get("/weather")
        .add_query_param("data[latitude]", "north")
        .add_query_param("data[longitude]", "-122.3")
        .await;

    response.assert_status_bad_request();

    let response = server.get("/weather").await;
    response.assert_status_bad_request();
}

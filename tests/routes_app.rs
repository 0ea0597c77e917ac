mod common;

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use city_explorer::routes::app_router;
use common::Providers;

fn server() -> TestServer {
    let state = common::create_test_state(Providers::default());
    TestServer::new(ServiceExt::<Request>::into_make_service(app_router(state))).unwrap()
}

#[tokio::test]
async fn test_trailing_slash_reaches_location() {
    let server = server();

    let response = server.get("/location/").add_query_param("data", "Seattle").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["formatted_query"],
        "Seattle, WA, USA"
    );
}

#[tokio::test]
async fn test_trailing_slash_reaches_weather() {
    let server = server();

    let response = server
        .get("/weather/")
        .add_query_param("data[latitude]", "47.6062")
        .add_query_param("data[longitude]", "-122.3321")
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_unknown_path_still_falls_back() {
    let server = server();

    let response = server.get("/nowhere/").await;

    response.assert_status_not_found();
    response.assert_text("you are in the wrong place");
}

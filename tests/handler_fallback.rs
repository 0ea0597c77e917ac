mod common;

use axum_test::TestServer;
use city_explorer::routes::router;
use common::Providers;

#[tokio::test]
async fn test_unknown_path_is_plain_text_not_found() {
    let state = common::create_test_state(Providers::default());
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/nonexistent-path").await;

    response.assert_status_not_found();
    response.assert_text("you are in the wrong place");
    assert!(
        response
            .header("content-type")
            .to_str()
            .unwrap()
            .starts_with("text/plain")
    );
}

#[tokio::test]
async fn test_nested_unknown_path() {
    let state = common::create_test_state(Providers::default());
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/location/extra").await;

    response.assert_status_not_found();
    response.assert_text("you are in the wrong place");
}

#[tokio::test]
async fn test_non_get_method_is_rejected() {
    let state = common::create_test_state(Providers::default());
    let server = TestServer::new(router(state)).unwrap();

    let response = server.post("/location").await;

    assert_eq!(response.status_code(), 405);
}

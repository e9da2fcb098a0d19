//! Integration tests for the /validate endpoint

mod common;

use actix_web::{http::StatusCode, test};

use pl_api::app::create_app;

#[actix_web::test]
async fn test_validate_valid_number() {
    let app = test::init_service(create_app(
        common::test_state(),
        common::test_config(),
        common::test_authenticator(),
    ))
    .await;

    let req = test::TestRequest::get()
        .uri("/validate?phone=%2B14155552671")
        .insert_header(("x-api-token", common::TEST_TOKEN))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["phone"], "+14155552671");
    assert_eq!(body["is_valid"], true);
    assert_eq!(body["is_possible"], true);
    assert_eq!(body["country_code"], "US");
    assert!(body["error"].is_null());
}

#[actix_web::test]
async fn test_validate_malformed_number_still_answers_ok() {
    let app = test::init_service(create_app(
        common::test_state(),
        common::test_config(),
        common::test_authenticator(),
    ))
    .await;

    let req = test::TestRequest::get()
        .uri("/validate?phone=not-a-number")
        .insert_header(("x-api-token", common::TEST_TOKEN))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["is_valid"], false);
    assert_eq!(body["is_possible"], false);
    assert!(body["country_code"].is_null());
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
}

#[actix_web::test]
async fn test_validate_coerces_missing_plus_prefix() {
    let app = test::init_service(create_app(
        common::test_state(),
        common::test_config(),
        common::test_authenticator(),
    ))
    .await;

    let req = test::TestRequest::get()
        .uri("/validate?phone=14155552671")
        .insert_header(("x-api-token", common::TEST_TOKEN))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;

    // The echoed input carries the coerced "+"
    assert_eq!(body["phone"], "+14155552671");
    assert_eq!(body["country_code"], "US");
}

#[actix_web::test]
async fn test_validate_with_country_hint() {
    let app = test::init_service(create_app(
        common::test_state(),
        common::test_config(),
        common::test_authenticator(),
    ))
    .await;

    let req = test::TestRequest::get()
        .uri("/validate?phone=4155552671&country=US")
        .insert_header(("x-api-token", common::TEST_TOKEN))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;

    // With a hint the input passes through unprefixed
    assert_eq!(body["phone"], "4155552671");
    assert_eq!(body["is_valid"], true);
    assert_eq!(body["country_code"], "US");
}

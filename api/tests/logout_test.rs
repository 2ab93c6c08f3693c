//! Integration tests for the logout endpoint

use actix_web::{cookie::Cookie, test, web};
use std::sync::Arc;

use sg_api::app::create_app;
use sg_api::routes::auth::AppState;
use sg_core::services::token::{TokenService, TokenServiceConfig};
use sg_shared::config::SessionConfig;

fn test_state() -> web::Data<AppState> {
    let token_service =
        TokenService::new(TokenServiceConfig::new("test_secret")).expect("valid test config");

    web::Data::new(AppState {
        token_service: Arc::new(token_service),
        session: SessionConfig::default(),
    })
}

#[actix_web::test]
async fn test_logout_success() {
    let state = test_state();
    let token = state.token_service.issue("user-42").unwrap();

    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/logout")
        .cookie(Cookie::new("token", token))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    // The response instructs the client to drop the session cookie.
    let removal = resp
        .response()
        .cookies()
        .find(|c| c.name() == "token")
        .expect("removal cookie for `token` present");
    assert_eq!(removal.value(), "");

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Logged out successfully");
}

#[actix_web::test]
async fn test_logout_without_cookie_is_idempotent() {
    let app = test::init_service(create_app(test_state())).await;

    // Clearing an absent cookie is a no-op, not an error.
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/logout")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Logged out successfully");
}

#[actix_web::test]
async fn test_logout_only_accepts_post() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/logout")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 405);
}

//! Integration tests for the session middleware and introspection route

use actix_web::{cookie::Cookie, test, web};
use std::sync::Arc;
use uuid::Uuid;

use sg_api::app::create_app;
use sg_api::routes::auth::AppState;
use sg_core::services::token::{TokenService, TokenServiceConfig};
use sg_shared::config::SessionConfig;

fn state_with_config(config: TokenServiceConfig) -> web::Data<AppState> {
    let token_service = TokenService::new(config).expect("valid test config");

    web::Data::new(AppState {
        token_service: Arc::new(token_service),
        session: SessionConfig::default(),
    })
}

fn test_state() -> web::Data<AppState> {
    state_with_config(TokenServiceConfig::new("test_secret"))
}

#[actix_web::test]
async fn test_session_route_with_valid_cookie() {
    let state = test_state();
    let subject = Uuid::new_v4().to_string();
    let token = state.token_service.issue(&subject).unwrap();

    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/session")
        .cookie(Cookie::new("token", token))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["subject"], subject.as_str());
    assert!(body["issued_at"].is_string());
}

#[actix_web::test]
async fn test_session_route_without_cookie() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/session")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_session_route_with_garbage_cookie() {
    let app = test::init_service(create_app(test_state())).await;

    for value in ["", "garbage", "a.b.c"] {
        let req = test::TestRequest::get()
            .uri("/api/v1/auth/session")
            .cookie(Cookie::new("token", value))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}

#[actix_web::test]
async fn test_session_route_rejects_foreign_secret() {
    // Token minted under a different secret must be rejected.
    let foreign =
        TokenService::new(TokenServiceConfig::new("another_secret")).expect("valid test config");
    let token = foreign.issue("user-42").unwrap();

    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/session")
        .cookie(Cookie::new("token", token))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_session_route_rejects_expired_token() {
    // A zero-day window makes the token expired at the instant it is
    // issued, since validity requires now to be strictly before expiry.
    let state = state_with_config(TokenServiceConfig::new("test_secret").with_ttl_days(0));
    let token = state.token_service.issue("user-42").unwrap();

    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/session")
        .cookie(Cookie::new("token", token))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

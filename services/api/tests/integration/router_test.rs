use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use critica_api::auth::issue_access_token;
use critica_api::router::build_router;
use critica_api::state::AppState;
use critica_domain::role::UserRole;

use crate::helpers::TEST_JWT_SECRET;

/// Server with a disconnected DB: good for routes that reject before any
/// query runs (auth and role gates).
fn test_server() -> TestServer {
    let state = AppState {
        db: DatabaseConnection::default(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    TestServer::new(build_router(state)).unwrap()
}

fn bearer(role: UserRole) -> String {
    let (token, _) = issue_access_token(Uuid::new_v4(), role, TEST_JWT_SECRET).unwrap();
    token
}

#[tokio::test]
async fn healthz_and_readyz_respond_ok() {
    let server = test_server();
    assert_eq!(server.get("/healthz").await.status_code(), StatusCode::OK);
    assert_eq!(server.get("/readyz").await.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn anonymous_write_is_unauthorized() {
    let server = test_server();
    let response = server
        .post("/v1/titles")
        .json(&serde_json::json!({"name": "Solaris"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "UNAUTHORIZED");
}

#[tokio::test]
async fn garbage_bearer_token_is_rejected() {
    let server = test_server();
    let response = server
        .get("/v1/titles")
        .authorization_bearer("not-a-jwt")
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "INVALID_TOKEN");
}

#[tokio::test]
async fn plain_user_cannot_create_category() {
    let server = test_server();
    let response = server
        .post("/v1/categories")
        .authorization_bearer(bearer(UserRole::User))
        .json(&serde_json::json!({"name": "Movies", "slug": "movies"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "FORBIDDEN");
}

#[tokio::test]
async fn moderator_cannot_manage_users() {
    let server = test_server();
    let response = server
        .delete("/v1/users/alice")
        .authorization_bearer(bearer(UserRole::Moderator))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn anonymous_cannot_list_users() {
    let server = test_server();
    let response = server.get("/v1/users").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn anonymous_cannot_read_profile() {
    let server = test_server();
    let response = server.get("/v1/users/me").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

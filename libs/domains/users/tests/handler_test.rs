//! Handler tests for Users domain
//!
//! Drive the users router over the in-memory repository: status codes,
//! response bodies (never a password) and error mapping.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::{ErrorResponse, MessageResponse};
use domain_users::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> Router {
    handlers::router(UserService::new(InMemoryUserRepository::new()))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn jane() -> Value {
    json!({
        "name": "Jane Doe",
        "login": "jdoe",
        "password": "secret",
        "email": "jane@example.com",
        "age": 30
    })
}

async fn create(app: &Router, body: Value) -> UserResponse {
    let response = app.clone().oneshot(post_json("/add", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_user_hides_password() {
    let response = app().oneshot(post_json("/add", jane())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = json_body(response.into_body()).await;
    assert!(body.get("password").is_none());
    assert_eq!(body["login"], "jdoe");
    assert!(body["registration_date"].is_string());
}

#[tokio::test]
async fn test_duplicate_login_returns_409() {
    let app = app();
    create(&app, jane()).await;

    let mut body = jane();
    body["email"] = json!("other@example.com");

    let response = app.oneshot(post_json("/add", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "CONFLICT");
    assert!(error.message.contains("jdoe"));
}

#[tokio::test]
async fn test_duplicate_email_returns_409() {
    let app = app();
    create(&app, jane()).await;

    let mut body = jane();
    body["login"] = json!("someone-else");

    let response = app.oneshot(post_json("/add", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_invalid_user_returns_400() {
    let mut body = jane();
    body["age"] = json!(0);
    body["email"] = json!("not-an-email");

    let response = app().oneshot(post_json("/add", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = json_body(response.into_body()).await;
    let details = error.details.expect("validation details");
    assert!(details.get("age").is_some());
    assert!(details.get("email").is_some());
}

#[tokio::test]
async fn test_blank_password_returns_400() {
    let mut body = jane();
    body["password"] = json!("   ");

    let response = app().oneshot(post_json("/add", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = json_body(response.into_body()).await;
    let details = error.details.expect("validation details");
    assert!(details.get("password").is_some());
}

#[tokio::test]
async fn test_lookups_by_id_login_and_email() {
    let app = app();
    let user = create(&app, jane()).await;

    for uri in [
        format!("/find/by/{}", user.id),
        "/find/by/login/jdoe".to_string(),
        "/find/by/email/jane@example.com".to_string(),
    ] {
        let response = app.clone().oneshot(get(&uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "GET {}", uri);

        let found: UserResponse = json_body(response.into_body()).await;
        assert_eq!(found, user);
    }

    let response = app.oneshot(get("/find/by/login/ghost")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_filters_by_name_and_age() {
    let app = app();
    create(&app, jane()).await;

    let response = app
        .clone()
        .oneshot(get("/filter/by/name/Jane%20Doe"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let users: Vec<UserResponse> = json_body(response.into_body()).await;
    assert_eq!(users.len(), 1);

    let response = app.clone().oneshot(get("/filter/by/age/30")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(get("/filter/by/age/31")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(get("/filter/by/age/thirty")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_edit_keeps_id_and_registration_date() {
    let app = app();
    let user = create(&app, jane()).await;

    let response = app
        .oneshot(post_json(
            &format!("/edit/{}", user.id),
            json!({
                "name": "Jane Smith",
                "login": "jsmith",
                "password": "changed",
                "email": "jsmith@example.com",
                "age": 31
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated: UserResponse = json_body(response.into_body()).await;
    assert_eq!(updated.id, user.id);
    assert_eq!(updated.registration_date, user.registration_date);
    assert_eq!(updated.login, "jsmith");
    assert_eq!(updated.age, 31);
}

#[tokio::test]
async fn test_edit_into_another_users_login_returns_409() {
    let app = app();
    let user = create(&app, jane()).await;
    create(
        &app,
        json!({
            "name": "Bob",
            "login": "bob",
            "password": "secret",
            "email": "bob@example.com",
            "age": 40
        }),
    )
    .await;

    let mut body = jane();
    body["login"] = json!("bob");

    let response = app
        .oneshot(post_json(&format!("/edit/{}", user.id), body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_delete_and_delete_all() {
    let app = app();
    let user = create(&app, jane()).await;

    let response = app
        .clone()
        .oneshot(delete(&format!("/delete/{}", user.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let message: MessageResponse = json_body(response.into_body()).await;
    assert_eq!(
        message.message,
        format!("User with id: {} was deleted.", user.id)
    );

    let response = app
        .clone()
        .oneshot(delete(&format!("/delete/{}", user.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    create(&app, jane()).await;
    let response = app.clone().oneshot(delete("/delete/all")).await.unwrap();
    let message: MessageResponse = json_body(response.into_body()).await;
    assert_eq!(message.message, "All users were deleted.");

    let response = app.oneshot(get("/all")).await.unwrap();
    let users: Vec<UserResponse> = json_body(response.into_body()).await;
    assert!(users.is_empty());
}

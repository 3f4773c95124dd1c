mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use common::{test_jwt_config, test_state};
use snapschool::config::jwt::JwtConfig;
use snapschool::router::init_router;
use snapschool::utils::jwt::{issue_token, verify_token};

#[tokio::test]
async fn test_health_route() {
    let app = init_router(test_state());

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"Server Running...");
}

#[tokio::test]
async fn test_jwt_route_issues_verifiable_token() {
    let app = init_router(test_state());

    let request = Request::builder()
        .method("POST")
        .uri("/jwt")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": "a@x.com",
                "name": "Ayesha"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body).unwrap();
    let token = body["token"].as_str().unwrap();

    let claims = verify_token(token, &test_jwt_config()).unwrap();
    assert_eq!(claims.email(), Some("a@x.com"));
    assert_eq!(claims.payload["name"], "Ayesha");
}

#[tokio::test]
async fn test_jwt_route_rejects_non_object_claims() {
    let app = init_router(test_state());

    let request = Request::builder()
        .method("POST")
        .uri("/jwt")
        .header("content-type", "application/json")
        .body(Body::from("[1, 2, 3]"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert!(body["error"].as_str().unwrap().contains("JSON object"));
}

#[tokio::test]
async fn test_protected_routes_require_bearer_token() {
    let id = Uuid::new_v4();
    let protected: Vec<(&str, String)> = vec![
        ("GET", "/allUsers".to_string()),
        ("PATCH", "/setUserRole/a@x.com".to_string()),
        ("PATCH", format!("/classesStatus/{id}?status=approve")),
        ("POST", "/admin/feedback".to_string()),
        ("POST", "/addClass".to_string()),
        ("GET", "/classes/i@x.com".to_string()),
        ("POST", "/myClasses".to_string()),
        ("GET", "/myClasses/s@x.com".to_string()),
        ("DELETE", format!("/myClasses/{id}")),
        ("POST", "/payments".to_string()),
        ("GET", "/payments/s@x.com".to_string()),
        ("POST", "/create-payment-intent".to_string()),
    ];

    for (method, uri) in protected {
        let app = init_router(test_state());
        let request = Request::builder()
            .method(method)
            .uri(&uri)
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{method} {uri} without a token should be 401"
        );
    }
}

#[tokio::test]
async fn test_malformed_authorization_header_is_rejected() {
    for header_value in ["Token abc", "Bearer", "bearer abc", "abc"] {
        let app = init_router(test_state());
        let request = Request::builder()
            .method("GET")
            .uri("/allUsers")
            .header("authorization", header_value)
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "header {header_value:?} should be rejected"
        );
    }
}

#[tokio::test]
async fn test_garbage_bearer_token_is_rejected() {
    let app = init_router(test_state());

    let request = Request::builder()
        .method("GET")
        .uri("/allUsers")
        .header("authorization", "Bearer not.a.token")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "invalid token");
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let expired_config = JwtConfig {
        secret: test_jwt_config().secret,
        token_expiry: -3600,
    };
    let mut payload = serde_json::Map::new();
    payload.insert("email".to_string(), json!("a@x.com"));
    let token = issue_token(payload, &expired_config).unwrap();

    let app = init_router(test_state());
    let request = Request::builder()
        .method("GET")
        .uri("/allUsers")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "token expired");
}

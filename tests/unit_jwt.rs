use axum::http::StatusCode;
use serde_json::{Map, Value, json};

use snapschool::config::jwt::{DEFAULT_TOKEN_EXPIRY_SECS, JwtConfig};
use snapschool::utils::jwt::{issue_token, verify_token};

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        token_expiry: 3600,
    }
}

fn claims_with_email(email: &str) -> Map<String, Value> {
    let mut payload = Map::new();
    payload.insert("email".to_string(), json!(email));
    payload
}

#[test]
fn test_issue_token_round_trips_claims() {
    let jwt_config = get_test_jwt_config();
    let mut payload = claims_with_email("test@example.com");
    payload.insert("name".to_string(), json!("Test User"));
    payload.insert("photoUrl".to_string(), json!("https://cdn.example.com/t.png"));

    let token = issue_token(payload.clone(), &jwt_config).unwrap();
    assert!(!token.is_empty());

    let claims = verify_token(&token, &jwt_config).unwrap();
    assert_eq!(claims.payload, payload);
    assert_eq!(claims.email(), Some("test@example.com"));
}

#[test]
fn test_default_expiry_is_35_days() {
    assert_eq!(DEFAULT_TOKEN_EXPIRY_SECS, 35 * 24 * 60 * 60);
}

#[test]
fn test_expiry_claims_are_set_by_server() {
    let jwt_config = get_test_jwt_config();

    // Client-supplied exp/iat must not survive signing.
    let mut payload = claims_with_email("test@example.com");
    payload.insert("exp".to_string(), json!(9_999_999_999usize));
    payload.insert("iat".to_string(), json!(0));

    let token = issue_token(payload, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert!(claims.exp < 9_999_999_999);
    assert_eq!(claims.exp - claims.iat, 3600);
    assert!(claims.payload.get("exp").is_none());
    assert!(claims.payload.get("iat").is_none());
}

#[test]
fn test_expired_token_fails_verification() {
    let expired_config = JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        token_expiry: -3600,
    };

    let token = issue_token(claims_with_email("test@example.com"), &expired_config).unwrap();
    let err = verify_token(&token, &expired_config).unwrap_err();

    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    assert!(err.error.to_string().contains("expired"));
}

#[test]
fn test_verify_token_wrong_secret() {
    let jwt_config = get_test_jwt_config();
    let token = issue_token(claims_with_email("test@example.com"), &jwt_config).unwrap();

    let wrong_config = JwtConfig {
        secret: "different_secret_key".to_string(),
        token_expiry: 3600,
    };

    let err = verify_token(&token, &wrong_config).unwrap_err();
    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    assert!(err.error.to_string().contains("invalid"));
}

#[test]
fn test_verify_token_malformed() {
    let jwt_config = get_test_jwt_config();
    let malformed_tokens = vec![
        "",
        "not.enough.parts",
        "too.many.parts.here.extra",
        "!!!.invalid.chars",
        "header.payload.",
        ".payload.signature",
    ];

    for token in malformed_tokens {
        let result = verify_token(token, &jwt_config);
        assert!(result.is_err(), "token {token:?} should not verify");
    }
}

#[test]
fn test_tampered_token_fails_verification() {
    let jwt_config = get_test_jwt_config();
    let token = issue_token(claims_with_email("test@example.com"), &jwt_config).unwrap();

    // Flip a character in the payload segment.
    let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
    let mut payload = parts[1].clone();
    let replacement = if payload.starts_with('A') { "B" } else { "A" };
    payload.replace_range(0..1, replacement);
    parts[1] = payload;
    let tampered = parts.join(".");

    assert!(verify_token(&tampered, &jwt_config).is_err());
}

#[test]
fn test_empty_payload_is_signable() {
    let jwt_config = get_test_jwt_config();
    let token = issue_token(Map::new(), &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert!(claims.payload.is_empty());
    assert_eq!(claims.email(), None);
}

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::Claims;
use crate::utils::errors::AppError;

/// Signs an arbitrary claims payload. The `exp` and `iat` registered claims
/// are always set by the server; any values the caller supplied for them are
/// discarded before signing.
pub fn issue_token(
    mut payload: serde_json::Map<String, serde_json::Value>,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    payload.remove("exp");
    payload.remove("iat");

    let now = Utc::now().timestamp();
    let claims = Claims {
        payload,
        iat: now as usize,
        exp: (now + jwt_config.token_expiry) as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("failed to sign token: {e}")))
}

pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AppError::unauthorized(anyhow::anyhow!("token expired")),
        _ => AppError::unauthorized(anyhow::anyhow!("invalid token")),
    })
}

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::modules::auth::model::TokenResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::issue_token;

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Issue a session token for the posted claims object
#[utoipa::path(
    post,
    path = "/jwt",
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Signed session token", body = TokenResponse),
        (status = 400, description = "Claims body is not a JSON object", body = ErrorResponse)
    ),
    tag = "Auth"
)]
#[instrument(skip(state, body))]
pub async fn create_token(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<TokenResponse>, AppError> {
    let serde_json::Value::Object(payload) = body else {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "claims must be a JSON object"
        )));
    };

    let token = issue_token(payload, &state.jwt_config)?;
    Ok(Json(TokenResponse { token }))
}

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;
use validator::Validate;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::payments::model::{
    CreatePaymentDto, CreatePaymentIntentDto, CreatePaymentIntentResponse, Payment, PaymentRecord,
};
use crate::modules::payments::service::PaymentService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Record a payment and claim a seat (student only)
#[utoipa::path(
    post,
    path = "/payments",
    request_body = CreatePaymentDto,
    responses(
        (status = 200, description = "Payment recorded, seat claimed", body = PaymentRecord),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not a student", body = ErrorResponse),
        (status = 404, description = "Class does not exist", body = ErrorResponse),
        (status = 409, description = "Class is sold out", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
#[instrument(skip(state, auth_user))]
pub async fn create_payment(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(dto): Json<CreatePaymentDto>,
) -> Result<Json<PaymentRecord>, AppError> {
    let email = auth_user
        .email()
        .ok_or_else(|| AppError::forbidden(anyhow::anyhow!("token carries no email claim")))?
        .to_string();

    let record = PaymentService::record_payment(&state.db, &email, dto).await?;
    Ok(Json(record))
}

/// Create a charge intent with the payment processor (student only)
#[utoipa::path(
    post,
    path = "/create-payment-intent",
    request_body = CreatePaymentIntentDto,
    responses(
        (status = 200, description = "Client secret for completing the charge", body = CreatePaymentIntentResponse),
        (status = 400, description = "Non-positive price", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 502, description = "Payment processor failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
#[instrument(skip(state))]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(dto): Json<CreatePaymentIntentDto>,
) -> Result<Json<CreatePaymentIntentResponse>, AppError> {
    dto.validate().map_err(AppError::bad_request)?;

    let client_secret =
        PaymentService::create_payment_intent(&state.http, &state.payment_config, dto.price)
            .await?;
    Ok(Json(CreatePaymentIntentResponse { client_secret }))
}

/// List a student's payment history, newest first (student only)
#[utoipa::path(
    get,
    path = "/payments/{email}",
    params(("email" = String, Path, description = "Payer email")),
    responses(
        (status = 200, description = "Payments", body = Vec<Payment>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not a student", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
#[instrument(skip(state))]
pub async fn get_payments(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Payment>>, AppError> {
    let payments = PaymentService::get_payments_by_email(&state.db, &email).await?;
    Ok(Json(payments))
}

use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::payments::controller::{
    create_payment, create_payment_intent, get_payments,
};
use crate::state::AppState;

pub fn init_payments_router() -> Router<AppState> {
    Router::new()
        .route("/payments", post(create_payment))
        .route("/payments/{email}", get(get_payments))
}

/// Intent creation requires a valid session, not the student role.
pub fn init_payment_intent_router() -> Router<AppState> {
    Router::new().route("/create-payment-intent", post(create_payment_intent))
}

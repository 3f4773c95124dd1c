use axum::{Router, routing::post};

use crate::modules::auth::controller::create_token;
use crate::state::AppState;

pub fn init_auth_router() -> Router<AppState> {
    Router::new().route("/jwt", post(create_token))
}

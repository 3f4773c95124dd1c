use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::policy::{require_admin, require_auth, require_instructor, require_student};
use crate::modules::auth::router::init_auth_router;
use crate::modules::classes::router::{
    init_classes_admin_router, init_classes_instructor_router, init_classes_router,
};
use crate::modules::payments::router::{init_payment_intent_router, init_payments_router};
use crate::modules::selections::router::init_selections_router;
use crate::modules::users::router::{init_users_admin_router, init_users_router};
use crate::state::AppState;

async fn health() -> &'static str {
    "Server Running..."
}

/// The route/capability table. Each merge block below is one capability
/// tier; the policy middleware in `middleware::policy` is the only place
/// authorization is evaluated.
pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/", get(health))
        // public
        .merge(init_auth_router())
        .merge(init_users_router())
        .merge(init_classes_router())
        // any valid session
        .merge(init_payment_intent_router().route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        )))
        // admin
        .merge(init_users_admin_router().route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_admin,
        )))
        .merge(init_classes_admin_router().route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_admin,
        )))
        // instructor
        .merge(
            init_classes_instructor_router().route_layer(middleware::from_fn_with_state(
                state.clone(),
                require_instructor,
            )),
        )
        // student
        .merge(init_selections_router().route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_student,
        )))
        .merge(init_payments_router().route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_student,
        )))
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}

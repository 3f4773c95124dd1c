use sqlx::PgPool;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::jwt::JwtConfig;
use crate::config::payment::PaymentConfig;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub payment_config: PaymentConfig,
    /// Shared outbound client for the payment processor.
    pub http: reqwest::Client,
}

pub async fn init_app_state() -> AppState {
    AppState {
        db: init_db_pool().await,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        payment_config: PaymentConfig::from_env(),
        http: reqwest::Client::new(),
    }
}

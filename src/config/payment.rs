use std::env;

/// Payment processor configuration. The secret key stays server-side; the
/// client only ever sees the per-intent client secret.
#[derive(Clone, Debug)]
pub struct PaymentConfig {
    pub secret_key: String,
    pub api_base: String,
}

impl PaymentConfig {
    pub fn from_env() -> Self {
        Self {
            secret_key: env::var("PAYMENT_SECRET_KEY").unwrap_or_default(),
            api_base: env::var("PAYMENT_API_BASE")
                .unwrap_or_else(|_| "https://api.stripe.com/v1".to_string()),
        }
    }
}

use std::env;

/// Default session lifetime: 35 days.
pub const DEFAULT_TOKEN_EXPIRY_SECS: i64 = 35 * 24 * 60 * 60;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds.
    pub token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            token_expiry: env::var("JWT_TOKEN_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TOKEN_EXPIRY_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_expiry_is_35_days() {
        assert_eq!(DEFAULT_TOKEN_EXPIRY_SECS, 3_024_000);
    }
}

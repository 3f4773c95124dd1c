use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Signed session claims.
///
/// The payload is whatever JSON object the client posted to `/jwt`, carried
/// verbatim. By convention the browser client includes an `email` field,
/// which is the only claim the server itself ever reads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    #[serde(flatten)]
    pub payload: Map<String, Value>,
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn email(&self) -> Option<&str> {
        self.payload.get("email").and_then(Value::as_str)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_flattens_into_top_level_claims() {
        let mut payload = Map::new();
        payload.insert("email".to_string(), json!("a@x.com"));
        payload.insert("name".to_string(), json!("Ayesha"));
        let claims = Claims {
            payload,
            exp: 2_000_000_000,
            iat: 1_000_000_000,
        };

        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value["email"], "a@x.com");
        assert_eq!(value["name"], "Ayesha");
        assert_eq!(value["exp"], 2_000_000_000);

        let back: Claims = serde_json::from_value(value).unwrap();
        assert_eq!(back, claims);
        assert_eq!(back.email(), Some("a@x.com"));
    }

    #[test]
    fn email_is_none_when_absent_or_not_a_string() {
        let claims = Claims {
            payload: Map::new(),
            exp: 0,
            iat: 0,
        };
        assert_eq!(claims.email(), None);

        let mut payload = Map::new();
        payload.insert("email".to_string(), json!(42));
        let claims = Claims {
            payload,
            exp: 0,
            iat: 0,
        };
        assert_eq!(claims.email(), None);
    }
}

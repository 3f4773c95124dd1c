//! User directory models and DTOs.
//!
//! Users are keyed by email in practice (the browser client looks people up
//! by the address it knows), but uniqueness is not enforced at the storage
//! level; lookups take the first match.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Recognized role values. `role` itself is stored verbatim, so values
/// outside this set can exist; they simply never pass a capability gate.
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const INSTRUCTOR: &str = "instructor";
    pub const STUDENT: &str = "student";
}

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub photo_url: Option<String>,
    /// `None` until an admin assigns a role.
    pub role: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub name: Option<String>,
    pub email: String,
    pub photo_url: Option<String>,
    pub role: Option<String>,
}

#[derive(Deserialize, Debug, Clone, ToSchema)]
pub struct SetRoleDto {
    pub role: String,
}

#[derive(Serialize, Debug, Clone, Copy, ToSchema)]
pub struct AdminFlag {
    pub admin: bool,
}

#[derive(Serialize, Debug, Clone, Copy, ToSchema)]
pub struct InstructorFlag {
    pub instructor: bool,
}

#[derive(Serialize, Debug, Clone, Copy, ToSchema)]
pub struct StudentFlag {
    pub student: bool,
}

/// Rows matched by a role update. Zero means the email is unknown; that is
/// reported, not treated as an error.
#[derive(Serialize, Debug, Clone, Copy, ToSchema)]
pub struct RoleUpdateResponse {
    pub modified: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_with_camel_case_keys() {
        let user = User {
            id: Uuid::new_v4(),
            name: Some("Rafiq".to_string()),
            email: "rafiq@example.com".to_string(),
            photo_url: Some("https://cdn.example.com/rafiq.png".to_string()),
            role: None,
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["email"], "rafiq@example.com");
        assert!(value.get("photoUrl").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("photo_url").is_none());
        assert!(value["role"].is_null());
    }

    #[test]
    fn create_user_dto_accepts_minimal_body() {
        let dto: CreateUserDto = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        assert_eq!(dto.email, "a@x.com");
        assert_eq!(dto.name, None);
        assert_eq!(dto.role, None);
    }

    #[test]
    fn role_flag_shapes_match_client_contract() {
        let value = serde_json::to_value(AdminFlag { admin: false }).unwrap();
        assert_eq!(value, serde_json::json!({ "admin": false }));

        let value = serde_json::to_value(InstructorFlag { instructor: true }).unwrap();
        assert_eq!(value, serde_json::json!({ "instructor": true }));
    }
}

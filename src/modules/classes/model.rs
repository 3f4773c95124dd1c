//! Class catalog models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Recognized status values. `status` is stored verbatim: the approval
/// workflow moves `pending` to `approve` or `deny`, but nothing constrains
/// the stored string.
pub mod status {
    pub const PENDING: &str = "pending";
    pub const APPROVE: &str = "approve";
    pub const DENY: &str = "deny";
}

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: Uuid,
    pub name: String,
    pub image_url: Option<String>,
    pub instructor_name: Option<String>,
    pub instructor_email: String,
    pub price: f64,
    pub available_seats: i32,
    pub total_enrolled: i32,
    pub status: String,
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassDto {
    pub name: String,
    pub image_url: Option<String>,
    pub instructor_name: Option<String>,
    pub instructor_email: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub available_seats: i32,
    pub status: Option<String>,
}

#[derive(Deserialize, Debug, Clone, ToSchema)]
pub struct StatusQuery {
    pub status: String,
}

#[derive(Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackDto {
    pub class_id: Uuid,
    pub feedback: String,
}

#[derive(Serialize, Debug, Clone, Copy, ToSchema)]
pub struct ClassUpdateResponse {
    pub modified: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_serializes_with_camel_case_keys() {
        let class = Class {
            id: Uuid::new_v4(),
            name: "Watercolor Basics".to_string(),
            image_url: None,
            instructor_name: Some("Nadia".to_string()),
            instructor_email: "nadia@example.com".to_string(),
            price: 49.5,
            available_seats: 30,
            total_enrolled: 0,
            status: status::PENDING.to_string(),
            feedback: None,
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&class).unwrap();
        assert_eq!(value["instructorEmail"], "nadia@example.com");
        assert_eq!(value["availableSeats"], 30);
        assert_eq!(value["totalEnrolled"], 0);
        assert_eq!(value["status"], "pending");
    }

    #[test]
    fn create_class_dto_defaults_counts_to_zero() {
        let dto: CreateClassDto = serde_json::from_str(
            r#"{"name":"Chess Club","instructorEmail":"i@x.com"}"#,
        )
        .unwrap();
        assert_eq!(dto.price, 0.0);
        assert_eq!(dto.available_seats, 0);
        assert_eq!(dto.status, None);
    }

    #[test]
    fn feedback_dto_uses_camel_case_class_id() {
        let id = Uuid::new_v4();
        let dto: FeedbackDto = serde_json::from_str(&format!(
            r#"{{"classId":"{id}","feedback":"needs a syllabus"}}"#
        ))
        .unwrap();
        assert_eq!(dto.class_id, id);
        assert_eq!(dto.feedback, "needs a syllabus");
    }
}

//! Enrollment-intent models.
//!
//! A selection is a student's "in my cart" record: the class reference plus
//! a denormalized snapshot of the fields the client renders. Selections are
//! created freely (duplicates possible) and deleted explicitly by the
//! student, typically after paying or to cancel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectedClass {
    pub id: Uuid,
    pub student_email: String,
    pub class_id: Uuid,
    pub class_name: Option<String>,
    pub image_url: Option<String>,
    pub price: Option<f64>,
    pub instructor_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSelectionDto {
    pub student_email: String,
    pub class_id: Uuid,
    pub class_name: Option<String>,
    pub image_url: Option<String>,
    pub price: Option<f64>,
    pub instructor_name: Option<String>,
}

/// Rows removed by a delete. A second delete of the same id reports zero,
/// it does not fail.
#[derive(Serialize, Debug, Clone, Copy, ToSchema)]
pub struct SelectionDeleteResponse {
    pub deleted: u64,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::modules::classes::model::Class;

/// A completed payment. Immutable once recorded.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,
    pub email: String,
    pub class_id: Uuid,
    pub class_name: Option<String>,
    pub amount: f64,
    pub transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payment submission. The payer's email comes from the verified token, and
/// seat counts are computed server-side; the client sends neither.
#[derive(Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentDto {
    pub class_id: Uuid,
    pub class_name: Option<String>,
    pub price: f64,
    pub transaction_id: Option<String>,
}

/// Both effects of a recorded payment: the payment row and the class with
/// its updated seat counters.
#[derive(Serialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub payment: Payment,
    pub class: Class,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreatePaymentIntentDto {
    #[validate(range(min = 0.01))]
    pub price: f64,
}

#[derive(Serialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentResponse {
    pub client_secret: String,
}

/// The slice of the processor's payment-intent object we read back.
#[derive(Deserialize, Debug, Clone)]
pub struct ProcessorIntent {
    pub client_secret: String,
}

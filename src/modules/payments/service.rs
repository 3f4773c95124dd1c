use sqlx::PgPool;
use tracing::{error, info, instrument, warn};

use crate::config::payment::PaymentConfig;
use crate::modules::classes::model::Class;
use crate::modules::classes::service::CLASS_COLUMNS;
use crate::modules::payments::model::{
    CreatePaymentDto, Payment, PaymentRecord, ProcessorIntent,
};
use crate::utils::errors::AppError;

const PAYMENT_COLUMNS: &str = "id, email, class_id, class_name, amount, transaction_id, created_at";

/// Processor amounts are integer minor units (cents for USD).
pub fn amount_in_minor_units(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

pub struct PaymentService;

impl PaymentService {
    /// Records a payment and claims a seat in one transaction.
    ///
    /// The seat decrement is guarded (`available_seats > 0`), so two
    /// concurrent payments for the last seat cannot both succeed, and a
    /// failed insert rolls the seat claim back. Seat counters are derived
    /// here, never taken from the request.
    #[instrument(skip(db, dto), fields(payer.email = %email, class.id = %dto.class_id))]
    pub async fn record_payment(
        db: &PgPool,
        email: &str,
        dto: CreatePaymentDto,
    ) -> Result<PaymentRecord, AppError> {
        let mut tx = db.begin().await.map_err(AppError::database)?;

        let class = sqlx::query_as::<_, Class>(&format!(
            "UPDATE classes
             SET available_seats = available_seats - 1,
                 total_enrolled = total_enrolled + 1
             WHERE id = $1 AND available_seats > 0
             RETURNING {CLASS_COLUMNS}"
        ))
        .bind(dto.class_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            error!(error = %e, class.id = %dto.class_id, "Database error claiming seat");
            AppError::database(e)
        })?;

        let Some(class) = class else {
            let known =
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM classes WHERE id = $1")
                    .bind(dto.class_id)
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(AppError::database)?;
            tx.rollback().await.map_err(AppError::database)?;

            return Err(if known > 0 {
                warn!(class.id = %dto.class_id, "Payment attempted for sold-out class");
                AppError::conflict(anyhow::anyhow!("class {} has no seats left", dto.class_id))
            } else {
                AppError::not_found(anyhow::anyhow!("class {} not found", dto.class_id))
            });
        };

        let payment = sqlx::query_as::<_, Payment>(&format!(
            "INSERT INTO payments (email, class_id, class_name, amount, transaction_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {PAYMENT_COLUMNS}"
        ))
        .bind(email)
        .bind(dto.class_id)
        .bind(&dto.class_name)
        .bind(dto.price)
        .bind(&dto.transaction_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            error!(error = %e, class.id = %dto.class_id, "Database error recording payment");
            AppError::database(e)
        })?;

        tx.commit().await.map_err(AppError::database)?;

        info!(
            payment.id = %payment.id,
            class.id = %class.id,
            seats.available = %class.available_seats,
            "Payment recorded"
        );

        Ok(PaymentRecord { payment, class })
    }

    #[instrument(skip(db))]
    pub async fn get_payments_by_email(
        db: &PgPool,
        email: &str,
    ) -> Result<Vec<Payment>, AppError> {
        let payments = sqlx::query_as::<_, Payment>(&format!(
            "SELECT {PAYMENT_COLUMNS} FROM payments WHERE email = $1 ORDER BY created_at DESC"
        ))
        .bind(email)
        .fetch_all(db)
        .await
        .map_err(|e| {
            error!(error = %e, payer.email = %email, "Database error fetching payments");
            AppError::database(e)
        })?;

        Ok(payments)
    }

    /// Asks the processor for a charge intent and returns the client secret
    /// the browser needs to complete the payment. The account secret key
    /// never leaves the server.
    #[instrument(skip(http, config))]
    pub async fn create_payment_intent(
        http: &reqwest::Client,
        config: &PaymentConfig,
        price: f64,
    ) -> Result<String, AppError> {
        let amount = amount_in_minor_units(price);

        let response = http
            .post(format!("{}/payment_intents", config.api_base))
            .bearer_auth(&config.secret_key)
            .form(&[
                ("amount", amount.to_string()),
                ("currency", "usd".to_string()),
                ("payment_method_types[]", "card".to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Payment processor unreachable");
                AppError::bad_gateway(anyhow::anyhow!("payment processor unreachable: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Payment processor rejected intent");
            return Err(AppError::bad_gateway(anyhow::anyhow!(
                "payment processor returned {status}"
            )));
        }

        let intent: ProcessorIntent = response.json().await.map_err(|e| {
            error!(error = %e, "Unreadable payment processor response");
            AppError::bad_gateway(anyhow::anyhow!("unreadable payment processor response: {e}"))
        })?;

        Ok(intent.client_secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minor_units_rounds_to_nearest_cent() {
        assert_eq!(amount_in_minor_units(19.99), 1999);
        assert_eq!(amount_in_minor_units(10.0), 1000);
        assert_eq!(amount_in_minor_units(0.555), 56);
        assert_eq!(amount_in_minor_units(29.999), 3000);
    }
}

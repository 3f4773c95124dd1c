use sqlx::PgPool;
use tracing::{error, instrument};
use uuid::Uuid;

use crate::modules::classes::model::{Class, CreateClassDto, status};
use crate::utils::errors::AppError;

pub(crate) const CLASS_COLUMNS: &str = "id, name, image_url, instructor_name, instructor_email, \
     price, available_seats, total_enrolled, status, feedback, created_at";

pub struct ClassService;

impl ClassService {
    #[instrument(skip(db, dto), fields(class.name = %dto.name, instructor.email = %dto.instructor_email))]
    pub async fn create_class(db: &PgPool, dto: CreateClassDto) -> Result<Class, AppError> {
        let status = dto.status.unwrap_or_else(|| status::PENDING.to_string());

        let class = sqlx::query_as::<_, Class>(&format!(
            "INSERT INTO classes
                 (name, image_url, instructor_name, instructor_email, price, available_seats, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {CLASS_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.image_url)
        .bind(&dto.instructor_name)
        .bind(&dto.instructor_email)
        .bind(dto.price)
        .bind(dto.available_seats)
        .bind(&status)
        .fetch_one(db)
        .await
        .map_err(|e| {
            error!(error = %e, class.name = %dto.name, "Database error creating class");
            AppError::database(e)
        })?;

        Ok(class)
    }

    #[instrument(skip(db))]
    pub async fn get_classes(db: &PgPool) -> Result<Vec<Class>, AppError> {
        let classes =
            sqlx::query_as::<_, Class>(&format!("SELECT {CLASS_COLUMNS} FROM classes"))
                .fetch_all(db)
                .await
                .map_err(|e| {
                    error!(error = %e, "Database error fetching classes");
                    AppError::database(e)
                })?;

        Ok(classes)
    }

    #[instrument(skip(db))]
    pub async fn get_classes_by_instructor(
        db: &PgPool,
        email: &str,
    ) -> Result<Vec<Class>, AppError> {
        let classes = sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE instructor_email = $1"
        ))
        .bind(email)
        .fetch_all(db)
        .await
        .map_err(|e| {
            error!(error = %e, instructor.email = %email, "Database error fetching instructor classes");
            AppError::database(e)
        })?;

        Ok(classes)
    }

    /// Filter by id. Returns a (possibly empty) list rather than a not-found
    /// signal; the client treats the catalog as a filterable collection.
    #[instrument(skip(db))]
    pub async fn get_classes_by_id(db: &PgPool, id: Uuid) -> Result<Vec<Class>, AppError> {
        let classes = sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE id = $1"
        ))
        .bind(id)
        .fetch_all(db)
        .await
        .map_err(|e| {
            error!(error = %e, class.id = %id, "Database error fetching class by id");
            AppError::database(e)
        })?;

        Ok(classes)
    }

    #[instrument(skip(db))]
    pub async fn get_approved_classes(db: &PgPool) -> Result<Vec<Class>, AppError> {
        let classes = sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE status = $1"
        ))
        .bind(status::APPROVE)
        .fetch_all(db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error fetching approved classes");
            AppError::database(e)
        })?;

        Ok(classes)
    }

    /// Stores the status string verbatim; transitions are unconstrained.
    #[instrument(skip(db))]
    pub async fn set_status(db: &PgPool, id: Uuid, status: &str) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE classes SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(db)
            .await
            .map_err(|e| {
                error!(error = %e, class.id = %id, "Database error setting class status");
                AppError::database(e)
            })?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(db, feedback))]
    pub async fn set_feedback(db: &PgPool, id: Uuid, feedback: &str) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE classes SET feedback = $2 WHERE id = $1")
            .bind(id)
            .bind(feedback)
            .execute(db)
            .await
            .map_err(|e| {
                error!(error = %e, class.id = %id, "Database error setting class feedback");
                AppError::database(e)
            })?;

        Ok(result.rows_affected())
    }
}

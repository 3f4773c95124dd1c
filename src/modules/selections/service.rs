use sqlx::PgPool;
use tracing::{error, instrument};
use uuid::Uuid;

use crate::modules::selections::model::{CreateSelectionDto, SelectedClass};
use crate::utils::errors::AppError;

const SELECTION_COLUMNS: &str =
    "id, student_email, class_id, class_name, image_url, price, instructor_name, created_at";

pub struct SelectionService;

impl SelectionService {
    /// Inserts the selection as sent. No existence, capacity, or duplicate
    /// check; the catalog is consulted only at payment time.
    #[instrument(skip(db, dto), fields(student.email = %dto.student_email, class.id = %dto.class_id))]
    pub async fn create_selection(
        db: &PgPool,
        dto: CreateSelectionDto,
    ) -> Result<SelectedClass, AppError> {
        let selection = sqlx::query_as::<_, SelectedClass>(&format!(
            "INSERT INTO selected_classes
                 (student_email, class_id, class_name, image_url, price, instructor_name)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {SELECTION_COLUMNS}"
        ))
        .bind(&dto.student_email)
        .bind(dto.class_id)
        .bind(&dto.class_name)
        .bind(&dto.image_url)
        .bind(dto.price)
        .bind(&dto.instructor_name)
        .fetch_one(db)
        .await
        .map_err(|e| {
            error!(error = %e, student.email = %dto.student_email, "Database error creating selection");
            AppError::database(e)
        })?;

        Ok(selection)
    }

    #[instrument(skip(db))]
    pub async fn get_selections_by_student(
        db: &PgPool,
        email: &str,
    ) -> Result<Vec<SelectedClass>, AppError> {
        let selections = sqlx::query_as::<_, SelectedClass>(&format!(
            "SELECT {SELECTION_COLUMNS} FROM selected_classes WHERE student_email = $1"
        ))
        .bind(email)
        .fetch_all(db)
        .await
        .map_err(|e| {
            error!(error = %e, student.email = %email, "Database error fetching selections");
            AppError::database(e)
        })?;

        Ok(selections)
    }

    #[instrument(skip(db))]
    pub async fn delete_selection(db: &PgPool, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM selected_classes WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| {
                error!(error = %e, selection.id = %id, "Database error deleting selection");
                AppError::database(e)
            })?;

        Ok(result.rows_affected())
    }
}

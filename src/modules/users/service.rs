use sqlx::PgPool;
use tracing::{error, instrument};

use crate::modules::users::model::{CreateUserDto, User};
use crate::utils::errors::AppError;

const USER_COLUMNS: &str = "id, name, email, photo_url, role, created_at";

pub struct UserService;

impl UserService {
    #[instrument(skip(db, dto), fields(user.email = %dto.email))]
    pub async fn create_user(db: &PgPool, dto: CreateUserDto) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (name, email, photo_url, role)
             VALUES ($1, $2, $3, $4)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.photo_url)
        .bind(&dto.role)
        .fetch_one(db)
        .await
        .map_err(|e| {
            error!(error = %e, user.email = %dto.email, "Database error creating user");
            AppError::database(e)
        })?;

        Ok(user)
    }

    /// First matching user's role, `None` when the email is unknown or the
    /// user has no role yet. Callers cannot distinguish the two cases.
    #[instrument(skip(db))]
    pub async fn find_role(db: &PgPool, email: &str) -> Result<Option<String>, AppError> {
        let role = sqlx::query_scalar::<_, Option<String>>(
            "SELECT role FROM users WHERE email = $1 LIMIT 1",
        )
        .bind(email)
        .fetch_optional(db)
        .await
        .map_err(|e| {
            error!(error = %e, user.email = %email, "Database error looking up role");
            AppError::database(e)
        })?;

        Ok(role.flatten())
    }

    pub async fn has_role(db: &PgPool, email: &str, role: &str) -> Result<bool, AppError> {
        Ok(Self::find_role(db, email).await?.as_deref() == Some(role))
    }

    #[instrument(skip(db))]
    pub async fn get_users(db: &PgPool) -> Result<Vec<User>, AppError> {
        let users =
            sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users"))
                .fetch_all(db)
                .await
                .map_err(|e| {
                    error!(error = %e, "Database error fetching users");
                    AppError::database(e)
                })?;

        Ok(users)
    }

    #[instrument(skip(db))]
    pub async fn get_users_by_role(db: &PgPool, role: &str) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE role = $1"
        ))
        .bind(role)
        .fetch_all(db)
        .await
        .map_err(|e| {
            error!(error = %e, role = %role, "Database error fetching users by role");
            AppError::database(e)
        })?;

        Ok(users)
    }

    /// Overwrites `role` verbatim for every user with this email and reports
    /// how many rows matched. No role vocabulary check.
    #[instrument(skip(db))]
    pub async fn set_role(db: &PgPool, email: &str, role: &str) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE users SET role = $2 WHERE email = $1")
            .bind(email)
            .bind(role)
            .execute(db)
            .await
            .map_err(|e| {
                error!(error = %e, user.email = %email, "Database error setting role");
                AppError::database(e)
            })?;

        Ok(result.rows_affected())
    }
}

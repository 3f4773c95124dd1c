use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::model::{
    AdminFlag, CreateUserDto, InstructorFlag, RoleUpdateResponse, SetRoleDto, StudentFlag, User,
    roles,
};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Register a new user
#[utoipa::path(
    post,
    path = "/user",
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(dto): Json<CreateUserDto>,
) -> Result<Json<User>, AppError> {
    let user = UserService::create_user(&state.db, dto).await?;
    Ok(Json(user))
}

/// Check whether the user with this email is an admin
#[utoipa::path(
    get,
    path = "/user/admin/{email}",
    params(("email" = String, Path, description = "User email")),
    responses((status = 200, description = "Admin flag", body = AdminFlag)),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_admin_flag(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<AdminFlag>, AppError> {
    let admin = UserService::has_role(&state.db, &email, roles::ADMIN).await?;
    Ok(Json(AdminFlag { admin }))
}

/// Check whether the user with this email is an instructor
#[utoipa::path(
    get,
    path = "/user/instructor/{email}",
    params(("email" = String, Path, description = "User email")),
    responses((status = 200, description = "Instructor flag", body = InstructorFlag)),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_instructor_flag(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<InstructorFlag>, AppError> {
    let instructor = UserService::has_role(&state.db, &email, roles::INSTRUCTOR).await?;
    Ok(Json(InstructorFlag { instructor }))
}

/// Check whether the user with this email is a student
#[utoipa::path(
    get,
    path = "/user/student/{email}",
    params(("email" = String, Path, description = "User email")),
    responses((status = 200, description = "Student flag", body = StudentFlag)),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_student_flag(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<StudentFlag>, AppError> {
    let student = UserService::has_role(&state.db, &email, roles::STUDENT).await?;
    Ok(Json(StudentFlag { student }))
}

/// List every user (admin only)
#[utoipa::path(
    get,
    path = "/allUsers",
    responses(
        (status = 200, description = "All users", body = Vec<User>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::get_users(&state.db).await?;
    Ok(Json(users))
}

/// List every instructor
#[utoipa::path(
    get,
    path = "/allInstructors",
    responses((status = 200, description = "All instructors", body = Vec<User>)),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_instructors(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::get_users_by_role(&state.db, roles::INSTRUCTOR).await?;
    Ok(Json(users))
}

/// Assign a role to the user with this email (admin only)
#[utoipa::path(
    patch,
    path = "/setUserRole/{email}",
    params(("email" = String, Path, description = "User email")),
    request_body = SetRoleDto,
    responses(
        (status = 200, description = "Rows modified", body = RoleUpdateResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn set_user_role(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(dto): Json<SetRoleDto>,
) -> Result<Json<RoleUpdateResponse>, AppError> {
    let modified = UserService::set_role(&state.db, &email, &dto.role).await?;
    Ok(Json(RoleUpdateResponse { modified }))
}

use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::classes::model::{
    Class, ClassUpdateResponse, CreateClassDto, FeedbackDto, StatusQuery,
};
use crate::modules::classes::service::ClassService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Add a class to the catalog (instructor only)
#[utoipa::path(
    post,
    path = "/addClass",
    request_body = CreateClassDto,
    responses(
        (status = 200, description = "Class created", body = Class),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an instructor", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn create_class(
    State(state): State<AppState>,
    Json(dto): Json<CreateClassDto>,
) -> Result<Json<Class>, AppError> {
    let class = ClassService::create_class(&state.db, dto).await?;
    Ok(Json(class))
}

/// List every class
#[utoipa::path(
    get,
    path = "/allClasses",
    responses((status = 200, description = "All classes", body = Vec<Class>)),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_classes(State(state): State<AppState>) -> Result<Json<Vec<Class>>, AppError> {
    let classes = ClassService::get_classes(&state.db).await?;
    Ok(Json(classes))
}

/// List classes taught by this instructor (instructor only)
#[utoipa::path(
    get,
    path = "/classes/{email}",
    params(("email" = String, Path, description = "Instructor email")),
    responses(
        (status = 200, description = "Instructor's classes", body = Vec<Class>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an instructor", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_classes_by_instructor(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Class>>, AppError> {
    let classes = ClassService::get_classes_by_instructor(&state.db, &email).await?;
    Ok(Json(classes))
}

/// Fetch classes matching an id (array shape, empty when unknown)
#[utoipa::path(
    get,
    path = "/class/{id}",
    params(("id" = Uuid, Path, description = "Class id")),
    responses((status = 200, description = "Matching classes", body = Vec<Class>)),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_class_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Class>>, AppError> {
    let classes = ClassService::get_classes_by_id(&state.db, id).await?;
    Ok(Json(classes))
}

/// List classes approved by an admin
#[utoipa::path(
    get,
    path = "/approveClasses",
    responses((status = 200, description = "Approved classes", body = Vec<Class>)),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_approved_classes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Class>>, AppError> {
    let classes = ClassService::get_approved_classes(&state.db).await?;
    Ok(Json(classes))
}

/// Set a class's status from the query string (admin only)
#[utoipa::path(
    patch,
    path = "/classesStatus/{id}",
    params(
        ("id" = Uuid, Path, description = "Class id"),
        ("status" = String, Query, description = "New status, stored verbatim")
    ),
    responses(
        (status = 200, description = "Rows modified", body = ClassUpdateResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn set_class_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<ClassUpdateResponse>, AppError> {
    let modified = ClassService::set_status(&state.db, id, &query.status).await?;
    Ok(Json(ClassUpdateResponse { modified }))
}

/// Attach admin feedback to a class (admin only)
#[utoipa::path(
    post,
    path = "/admin/feedback",
    request_body = FeedbackDto,
    responses(
        (status = 200, description = "Rows modified", body = ClassUpdateResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn send_feedback(
    State(state): State<AppState>,
    Json(dto): Json<FeedbackDto>,
) -> Result<Json<ClassUpdateResponse>, AppError> {
    let modified = ClassService::set_feedback(&state.db, dto.class_id, &dto.feedback).await?;
    Ok(Json(ClassUpdateResponse { modified }))
}

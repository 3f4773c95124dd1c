use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::selections::model::{
    CreateSelectionDto, SelectedClass, SelectionDeleteResponse,
};
use crate::modules::selections::service::SelectionService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Select a class for later payment (student only)
#[utoipa::path(
    post,
    path = "/myClasses",
    request_body = CreateSelectionDto,
    responses(
        (status = 200, description = "Selection recorded", body = SelectedClass),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not a student", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Selections"
)]
#[instrument(skip(state))]
pub async fn create_selection(
    State(state): State<AppState>,
    Json(dto): Json<CreateSelectionDto>,
) -> Result<Json<SelectedClass>, AppError> {
    let selection = SelectionService::create_selection(&state.db, dto).await?;
    Ok(Json(selection))
}

/// List a student's selected classes (student only)
#[utoipa::path(
    get,
    path = "/myClasses/{email}",
    params(("email" = String, Path, description = "Student email")),
    responses(
        (status = 200, description = "Selected classes", body = Vec<SelectedClass>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not a student", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Selections"
)]
#[instrument(skip(state))]
pub async fn get_selections(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<SelectedClass>>, AppError> {
    let selections = SelectionService::get_selections_by_student(&state.db, &email).await?;
    Ok(Json(selections))
}

/// Remove a selection by id (student only)
#[utoipa::path(
    delete,
    path = "/myClasses/{id}",
    params(("id" = Uuid, Path, description = "Selection id")),
    responses(
        (status = 200, description = "Rows deleted", body = SelectionDeleteResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not a student", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Selections"
)]
#[instrument(skip(state))]
pub async fn delete_selection(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SelectionDeleteResponse>, AppError> {
    let deleted = SelectionService::delete_selection(&state.db, id).await?;
    Ok(Json(SelectionDeleteResponse { deleted }))
}

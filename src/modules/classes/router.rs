use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::modules::classes::controller::{
    create_class, get_approved_classes, get_class_by_id, get_classes,
    get_classes_by_instructor, send_feedback, set_class_status,
};
use crate::state::AppState;

pub fn init_classes_router() -> Router<AppState> {
    Router::new()
        .route("/allClasses", get(get_classes))
        .route("/class/{id}", get(get_class_by_id))
        .route("/approveClasses", get(get_approved_classes))
}

pub fn init_classes_instructor_router() -> Router<AppState> {
    Router::new()
        .route("/addClass", post(create_class))
        .route("/classes/{email}", get(get_classes_by_instructor))
}

pub fn init_classes_admin_router() -> Router<AppState> {
    Router::new()
        .route("/classesStatus/{id}", patch(set_class_status))
        .route("/admin/feedback", post(send_feedback))
}

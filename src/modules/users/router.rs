use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::modules::users::controller::{
    create_user, get_admin_flag, get_instructor_flag, get_instructors, get_student_flag,
    get_users, set_user_role,
};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/user", post(create_user))
        .route("/user/admin/{email}", get(get_admin_flag))
        .route("/user/instructor/{email}", get(get_instructor_flag))
        .route("/user/student/{email}", get(get_student_flag))
        .route("/allInstructors", get(get_instructors))
}

pub fn init_users_admin_router() -> Router<AppState> {
    Router::new()
        .route("/allUsers", get(get_users))
        .route("/setUserRole/{email}", patch(set_user_role))
}

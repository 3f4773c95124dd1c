use axum::{Router, routing::get, routing::post};

use crate::modules::selections::controller::{create_selection, delete_selection, get_selections};
use crate::state::AppState;

pub fn init_selections_router() -> Router<AppState> {
    Router::new()
        .route("/myClasses", post(create_selection))
        // One segment, two meanings: GET takes the student email, DELETE the
        // selection id (inherited client contract).
        .route(
            "/myClasses/{key}",
            get(get_selections).delete(delete_selection),
        )
}

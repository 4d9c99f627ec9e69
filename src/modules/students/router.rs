use crate::modules::students::controller::{
    create_student, delete_student, get_student, get_students, update_student,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Listing is public; everything that mutates (and reads by id) requires a
/// bearer token, enforced by the `AuthUser` extractor on each handler.
pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_student).get(get_students))
        .route(
            "/{id}",
            get(get_student).patch(update_student).delete(delete_student),
        )
}

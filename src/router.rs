use crate::logging::logging_middleware;
use crate::modules::auth::router::init_auth_router;
use crate::modules::students::router::init_students_router;
use crate::state::AppState;
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(init_auth_router())
        .nest("/students", init_students_router())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(logging_middleware))
}

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/login", post(handlers::login))
        .route("/register", post(handlers::register))
        .route("/logout", post(handlers::logout))
        .route("/mode", post(handlers::toggle_mode))
        .route("/people", post(handlers::add_person))
        .route("/attendance", post(handlers::mark_attendance))
        .with_state(state)
}

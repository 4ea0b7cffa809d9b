use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

mod dto;
pub mod handlers;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_users).post(handlers::create_user))
        .route("/login", post(handlers::login))
        .route("/:id", delete(handlers::delete_user))
}

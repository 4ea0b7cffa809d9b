use crate::state::AppState;
use axum::{routing::get, Router};

mod dto;
pub mod handlers;
pub mod metrics;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_entries)
                .post(handlers::create_entry)
                .put(handlers::update_entry),
        )
        .route("/metrics", get(handlers::get_metrics))
        .route(
            "/:id",
            get(handlers::get_entry).delete(handlers::delete_entry),
        )
}

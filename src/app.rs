use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/day", get(handlers::get_day))
        .route("/api/streak", get(handlers::get_streak))
        .route("/api/theme", get(handlers::get_theme).post(handlers::set_theme))
        .route("/api/tasks", post(handlers::add_task))
        .route("/api/tasks/toggle", post(handlers::toggle_task))
        .route("/api/tasks/delete", post(handlers::delete_task))
        .route("/api/tasks/subtask", post(handlers::add_subtask))
        .route("/api/wipe", post(handlers::wipe))
        .with_state(state)
}

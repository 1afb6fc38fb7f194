use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{health, todos};
use crate::service::TodoServiceHandle;

pub fn api_routes() -> Router<TodoServiceHandle> {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))

        // Todo routes
        .route("/todos", get(todos::list_todos))
        .route("/todos", post(todos::create_todo))
        .route("/todos/:id", get(todos::get_todo))
        .route("/todos/:id", put(todos::update_todo))
        .route("/todos/:id", delete(todos::delete_todo))
}

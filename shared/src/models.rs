use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Todo item model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Todo payload before the store assigns `id` and `created_at`
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub title: String,
    pub completed: bool,
}

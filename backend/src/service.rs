//! Business logic for todos, between the HTTP handlers and the store.

use std::sync::Arc;

use anyhow::Result;

use crate::repository::TodoRepository;
use shared::api::{CreateTodoRequest, UpdateTodoRequest};
use shared::models::{NewTodo, Todo};

/// Shared handle passed to the router as axum state
pub type TodoServiceHandle = Arc<TodoService>;

pub struct TodoService {
    repository: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_all(&self) -> Result<Vec<Todo>> {
        self.repository.find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Todo>> {
        self.repository.find_by_id(id).await
    }

    pub async fn create(&self, request: CreateTodoRequest) -> Result<Todo> {
        self.repository
            .insert(NewTodo {
                title: request.title,
                completed: request.completed,
            })
            .await
    }

    /// Overwrites `title` and `completed` of an existing todo.
    /// `id` and `created_at` are never touched.
    pub async fn update(&self, id: i64, request: UpdateTodoRequest) -> Result<Option<Todo>> {
        let Some(mut todo) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };

        todo.title = request.title;
        todo.completed = request.completed;
        self.repository.update(&todo).await?;

        Ok(Some(todo))
    }

    pub async fn delete(&self, id: i64) -> Result<bool> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryTodoRepository;

    fn create_service() -> TodoService {
        TodoService::new(Arc::new(InMemoryTodoRepository::new()))
    }

    fn create_request(title: &str) -> CreateTodoRequest {
        CreateTodoRequest {
            title: title.to_string(),
            completed: false,
        }
    }

    #[tokio::test]
    async fn update_overwrites_title_and_completed_only() {
        let service = create_service();
        let created = service.create(create_request("draft")).await.unwrap();

        let updated = service
            .update(
                created.id,
                UpdateTodoRequest {
                    title: "final".to_string(),
                    completed: true,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "final");
        assert!(updated.completed);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_returns_none_for_missing_id() {
        let service = create_service();

        let result = service
            .update(
                99,
                UpdateTodoRequest {
                    title: "anything".to_string(),
                    completed: false,
                },
            )
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_returns_false_for_missing_id() {
        let service = create_service();

        assert!(!service.delete(7).await.unwrap());
    }

    #[tokio::test]
    async fn list_all_reflects_creates_and_deletes() {
        let service = create_service();
        let a = service.create(create_request("a")).await.unwrap();
        let b = service.create(create_request("b")).await.unwrap();
        service.delete(a.id).await.unwrap();

        let all = service.list_all().await.unwrap();

        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, b.id);
    }
}

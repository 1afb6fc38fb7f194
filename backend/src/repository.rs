//! Persistence seam for todos.
//!
//! `TodoRepository` is the boundary a database-backed store would
//! implement; `InMemoryTodoRepository` is the implementation shipped
//! with this service.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use shared::models::{NewTodo, Todo};

#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// All todos in ascending id order
    async fn find_all(&self) -> Result<Vec<Todo>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>>;

    /// Stores a new todo, assigning its `id` and `created_at`
    async fn insert(&self, new_todo: NewTodo) -> Result<Todo>;

    /// Replaces the stored row for `todo.id` if it still exists
    async fn update(&self, todo: &Todo) -> Result<()>;

    /// Returns `false` when the id was not present
    async fn delete(&self, id: i64) -> Result<bool>;
}

pub struct InMemoryTodoRepository {
    todos: RwLock<BTreeMap<i64, Todo>>,
    next_id: AtomicI64,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self {
            todos: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos.get(&id).cloned())
    }

    async fn insert(&self, new_todo: NewTodo) -> Result<Todo> {
        let todo = Todo {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: new_todo.title,
            completed: new_todo.completed,
            created_at: Utc::now(),
        };

        let mut todos = self.todos.write().await;
        todos.insert(todo.id, todo.clone());

        Ok(todo)
    }

    async fn update(&self, todo: &Todo) -> Result<()> {
        let mut todos = self.todos.write().await;
        if let Some(existing) = todos.get_mut(&todo.id) {
            *existing = todo.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut todos = self.todos.write().await;
        Ok(todos.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_todo(title: &str) -> NewTodo {
        NewTodo {
            title: title.to_string(),
            completed: false,
        }
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids_starting_at_one() {
        let repo = InMemoryTodoRepository::new();

        let first = repo.insert(new_todo("first")).await.unwrap();
        let second = repo.insert(new_todo("second")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn find_all_returns_todos_in_ascending_id_order() {
        let repo = InMemoryTodoRepository::new();
        repo.insert(new_todo("a")).await.unwrap();
        repo.insert(new_todo("b")).await.unwrap();
        repo.insert(new_todo("c")).await.unwrap();

        let all = repo.find_all().await.unwrap();

        let ids: Vec<i64> = all.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_missing_id() {
        let repo = InMemoryTodoRepository::new();

        assert!(repo.find_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_replaces_the_stored_todo() {
        let repo = InMemoryTodoRepository::new();
        let mut todo = repo.insert(new_todo("before")).await.unwrap();

        todo.title = "after".to_string();
        todo.completed = true;
        repo.update(&todo).await.unwrap();

        let stored = repo.find_by_id(todo.id).await.unwrap().unwrap();
        assert_eq!(stored.title, "after");
        assert!(stored.completed);
    }

    #[tokio::test]
    async fn update_of_a_deleted_todo_does_not_resurrect_it() {
        let repo = InMemoryTodoRepository::new();
        let todo = repo.insert(new_todo("gone")).await.unwrap();
        repo.delete(todo.id).await.unwrap();

        repo.update(&todo).await.unwrap();

        assert!(repo.find_by_id(todo.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_returns_false_for_missing_id() {
        let repo = InMemoryTodoRepository::new();
        let todo = repo.insert(new_todo("once")).await.unwrap();

        assert!(repo.delete(todo.id).await.unwrap());
        assert!(!repo.delete(todo.id).await.unwrap());
    }
}

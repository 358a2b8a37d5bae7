//! Todo item service - the business rule layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{TodoError, TodoResult};
use crate::models::TodoItem;
use crate::repository::TodoRepository;

/// Service enforcing the business rules around reading, creating, and
/// updating todo items.
///
/// All durable state lives in the repository; the service validates input,
/// enforces description uniqueness among incomplete items, and translates
/// persistence-level conflicts into domain errors. It never logs or
/// swallows errors; classification happens at the HTTP boundary.
pub struct TodoItemService<R: TodoRepository> {
    repository: Arc<R>,
}

impl<R: TodoRepository> TodoItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all incomplete items
    #[instrument(skip(self))]
    pub async fn list_todo_items(&self) -> TodoResult<Vec<TodoItem>> {
        self.repository.list_incomplete().await
    }

    /// Fetch an item by id.
    ///
    /// Absence is `None`, not an error; the HTTP layer decides how to
    /// render a missing item.
    #[instrument(skip(self))]
    pub async fn get_todo_item(&self, id: Uuid) -> TodoResult<Option<TodoItem>> {
        self.repository.find_by_id(id).await
    }

    /// Create a new item; returns the number of affected rows.
    #[instrument(skip(self, item), fields(item_id = %item.id))]
    pub async fn create_todo_item(&self, item: TodoItem) -> TodoResult<u64> {
        if item.description.is_empty() {
            return Err(TodoError::Validation("Description is required".to_string()));
        }

        if self.description_exists(&item.description).await? {
            return Err(TodoError::Validation(
                "Description already exists".to_string(),
            ));
        }

        self.repository.insert(item).await
    }

    /// Replace an existing item in full.
    ///
    /// A repository conflict is re-checked against the id: a vanished row
    /// becomes not-found, while a row that still exists means a genuine
    /// lost update, which is propagated unchanged for the caller to retry.
    #[instrument(skip(self, item), fields(item_id = %id))]
    pub async fn update_todo_item(&self, id: Uuid, item: TodoItem) -> TodoResult<()> {
        if id != item.id {
            return Err(TodoError::Validation(
                "Invalid Id value supplied".to_string(),
            ));
        }

        match self.repository.replace(item).await {
            Err(TodoError::Conflict(conflict_id)) => {
                if self.id_exists(id).await? {
                    Err(TodoError::Conflict(conflict_id))
                } else {
                    Err(TodoError::NotFound("Guid not found".to_string()))
                }
            }
            other => other,
        }
    }

    /// Whether an item with this id exists, completed or not
    pub async fn id_exists(&self, id: Uuid) -> TodoResult<bool> {
        self.repository.exists_by_id(id).await
    }

    /// Whether an incomplete item with this description exists,
    /// case-insensitively
    pub async fn description_exists(&self, description: &str) -> TodoResult<bool> {
        self.repository.incomplete_description_exists(description).await
    }
}

impl<R: TodoRepository> Clone for TodoItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

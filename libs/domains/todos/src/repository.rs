use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{TodoError, TodoResult};
use crate::models::TodoItem;

/// Repository trait for todo item persistence.
///
/// `replace` is a replace-by-id write with optimistic-concurrency
/// detection: implementations must return [`TodoError::Conflict`] when the
/// row was concurrently modified or removed since it was last read, so the
/// service can distinguish a vanished row from a genuine write conflict.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Insert a new item; returns the number of affected rows
    async fn insert(&self, item: TodoItem) -> TodoResult<u64>;

    /// Fetch an item by id
    async fn find_by_id(&self, id: Uuid) -> TodoResult<Option<TodoItem>>;

    /// All items whose completion flag is false, in store iteration order
    async fn list_incomplete(&self) -> TodoResult<Vec<TodoItem>>;

    /// Overwrite the item with the given id in full
    async fn replace(&self, item: TodoItem) -> TodoResult<()>;

    /// Whether an item with this id exists, completed or not
    async fn exists_by_id(&self, id: Uuid) -> TodoResult<bool>;

    /// Whether an incomplete item with this description exists,
    /// case-insensitively
    async fn incomplete_description_exists(&self, description: &str) -> TodoResult<bool>;
}

/// In-memory implementation of TodoRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryTodoRepository {
    items: Arc<RwLock<HashMap<Uuid, TodoItem>>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn insert(&self, item: TodoItem) -> TodoResult<u64> {
        let mut items = self.items.write().await;

        if items.contains_key(&item.id) {
            return Err(TodoError::Database(format!(
                "duplicate key: item {} already exists",
                item.id
            )));
        }

        tracing::debug!(item_id = %item.id, "Inserted todo item");
        items.insert(item.id, item);
        Ok(1)
    }

    async fn find_by_id(&self, id: Uuid) -> TodoResult<Option<TodoItem>> {
        let items = self.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn list_incomplete(&self) -> TodoResult<Vec<TodoItem>> {
        let items = self.items.read().await;
        Ok(items.values().filter(|i| !i.is_completed).cloned().collect())
    }

    async fn replace(&self, item: TodoItem) -> TodoResult<()> {
        let mut items = self.items.write().await;

        // A missing row is the in-memory analogue of a lost update: the
        // service re-checks existence and decides how to classify it.
        match items.get_mut(&item.id) {
            Some(existing) => {
                *existing = item;
                Ok(())
            }
            None => Err(TodoError::Conflict(item.id)),
        }
    }

    async fn exists_by_id(&self, id: Uuid) -> TodoResult<bool> {
        let items = self.items.read().await;
        Ok(items.contains_key(&id))
    }

    async fn incomplete_description_exists(&self, description: &str) -> TodoResult<bool> {
        let items = self.items.read().await;
        let needle = description.to_lowercase();
        Ok(items
            .values()
            .any(|i| !i.is_completed && i.description.to_lowercase() == needle))
    }
}

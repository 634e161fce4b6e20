use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::domain::{
    repository::TodoRepository,
    todo::{Todo, TodoChanges, TodoId},
};

/// Volatile store. One mutex guards the whole collection; every operation is a
/// linear scan, which is fine at the sizes this service deals with.
#[derive(Clone, Default)]
pub struct InMemoryTodoRepository {
    items: Arc<Mutex<Vec<Todo>>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self { Self::default() }

    fn items(&self) -> Result<MutexGuard<'_, Vec<Todo>>> {
        self.items.lock().map_err(|_| anyhow!("todo store lock poisoned"))
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn insert(&self, todo: Todo) -> Result<()> {
        self.items()?.push(todo);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Todo>> {
        Ok(self.items()?.clone())
    }

    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>> {
        Ok(self.items()?.iter().find(|t| &t.id == id).cloned())
    }

    async fn apply_update(&self, id: &TodoId, changes: TodoChanges) -> Result<Option<Todo>> {
        let mut items = self.items()?;
        let Some(todo) = items.iter_mut().find(|t| &t.id == id) else { return Ok(None) };
        todo.apply(changes);
        Ok(Some(todo.clone()))
    }

    async fn remove(&self, id: &TodoId) -> Result<bool> {
        let mut items = self.items()?;
        match items.iter().position(|t| &t.id == id) {
            Some(index) => {
                items.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

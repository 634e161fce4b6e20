use async_trait::async_trait;
use super::todo::{Todo, TodoChanges, TodoId};

/// Ordered todo collection. Implementations keep insertion order and must
/// serialize mutations.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    async fn insert(&self, todo: Todo) -> anyhow::Result<()>;
    async fn list(&self) -> anyhow::Result<Vec<Todo>>;
    async fn find_by_id(&self, id: &TodoId) -> anyhow::Result<Option<Todo>>;
    async fn apply_update(&self, id: &TodoId, changes: TodoChanges) -> anyhow::Result<Option<Todo>>;
    async fn remove(&self, id: &TodoId) -> anyhow::Result<bool>;
}

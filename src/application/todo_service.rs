use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::application::ids::MonotonicIds;
use crate::application::normalize::{normalize, RawBody};
use crate::application::validate::{validate_id, validate_todo, ValidationError};
use crate::domain::repository::TodoRepository;
use crate::domain::todo::Todo;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Todo not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TodoError>;

#[async_trait]
pub trait TodoService: Send + Sync + 'static {
    async fn create(&self, body: RawBody) -> Result<Todo>;
    async fn get(&self, id: &str) -> Result<Todo>;
    async fn list(&self) -> Result<Vec<Todo>>;
    async fn update(&self, id: &str, body: RawBody) -> Result<Todo>;
    async fn delete(&self, id: &str) -> Result<()>;
}

#[derive(Clone)]
pub struct TodoServiceImpl<R: TodoRepository> {
    repo: R,
    ids: Arc<MonotonicIds>,
}

impl<R: TodoRepository> TodoServiceImpl<R> {
    pub fn new(repo: R) -> Self { Self { repo, ids: Arc::new(MonotonicIds::new()) } }
}

#[async_trait]
impl<R: TodoRepository> TodoService for TodoServiceImpl<R> {
    async fn create(&self, body: RawBody) -> Result<Todo> {
        let input = validate_todo(&normalize(body))?;
        // new todos always start open, whatever the client sent
        let todo = Todo { id: self.ids.next_id(), text: input.text, completed: false };
        self.repo.insert(todo.clone()).await?;
        tracing::info!(id = %todo.id, "todo created");
        Ok(todo)
    }

    async fn get(&self, id: &str) -> Result<Todo> {
        let id = validate_id(id)?;
        self.repo.find_by_id(&id).await?.ok_or(TodoError::NotFound)
    }

    async fn list(&self) -> Result<Vec<Todo>> { Ok(self.repo.list().await?) }

    async fn update(&self, id: &str, body: RawBody) -> Result<Todo> {
        let id = validate_id(id)?;
        let input = validate_todo(&normalize(body))?;
        let updated = self.repo.apply_update(&id, input.into()).await?.ok_or(TodoError::NotFound)?;
        tracing::info!(id = %updated.id, completed = updated.completed, "todo updated");
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let id = validate_id(id)?;
        if !self.repo.remove(&id).await? {
            return Err(TodoError::NotFound);
        }
        tracing::info!(%id, "todo deleted");
        Ok(())
    }
}

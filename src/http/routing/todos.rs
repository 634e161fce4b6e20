use axum::{extract::{Path, State}, routing::{get, post}, Router, Json};

use crate::application::todo_service::TodoService;
use crate::domain::todo::Todo;
use crate::http::body::TodoBody;
use crate::http::types::{ApiError, Deleted};

#[derive(Clone)]
pub struct AppState<S: TodoService> { pub service: S }

pub fn router<S: TodoService + Clone + Send + Sync + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/todos", post(create_todo::<S>).get(list_todos::<S>))
        .route("/todos/:id", get(get_todo::<S>).put(update_todo::<S>).delete(delete_todo::<S>))
        .with_state(state)
}

async fn create_todo<S: TodoService>(State(state): State<AppState<S>>, TodoBody(body): TodoBody) -> Result<Json<Todo>, ApiError> {
    Ok(Json(state.service.create(body).await?))
}

async fn list_todos<S: TodoService>(State(state): State<AppState<S>>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(state.service.list().await?))
}

async fn get_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<String>) -> Result<Json<Todo>, ApiError> {
    Ok(Json(state.service.get(&id).await?))
}

async fn update_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<String>, TodoBody(body): TodoBody) -> Result<Json<Todo>, ApiError> {
    Ok(Json(state.service.update(&id, body).await?))
}

async fn delete_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<String>) -> Result<Json<Deleted>, ApiError> {
    state.service.delete(&id).await?;
    Ok(Json(Deleted { success: true }))
}

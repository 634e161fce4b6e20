use axum::Router;

use crate::application::todo_service::TodoServiceImpl;
use crate::cli::AppType;
use crate::config::ServerConfig;
use crate::http::routing::{self, todos};
use crate::infrastructure::memory_repo::InMemoryTodoRepository;

/// Builds the full router for one application type, with a fresh empty store.
pub fn build_app(app_type: AppType, config: &ServerConfig) -> anyhow::Result<Router> {
    let router = match app_type {
        AppType::Todolist => {
            let service = TodoServiceImpl::new(InMemoryTodoRepository::new());
            todos::router(todos::AppState { service })
        }
    };
    Ok(routing::app(router, config.cors_layer()?))
}

pub async fn serve(app_type: AppType, config: ServerConfig) -> anyhow::Result<()> {
    let router = build_app(app_type, &config)?;
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, app = app_type.name(), "listening");
    log_usage(app_type, &format!("http://{addr}"));
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal::ctrl_c;
    let _ = ctrl_c().await;
    tracing::info!("shutdown");
}

fn log_usage(app_type: AppType, base: &str) {
    match app_type {
        AppType::Todolist => {
            for (what, example) in [
                ("create (json)", format!(r#"curl -X POST {base}/todos -H "Content-Type: application/json" -d '{{"text":"Buy groceries"}}'"#)),
                ("create (form)", format!(r#"curl -X POST {base}/todos -d "text=Buy%20groceries""#)),
                ("create (text)", format!(r#"curl -X POST {base}/todos -H "Content-Type: text/plain" -d "Buy groceries""#)),
                ("create (multipart)", format!(r#"curl -X POST {base}/todos -F "text=Buy groceries""#)),
                ("list", format!("curl {base}/todos")),
                ("update (json)", format!(r#"curl -X PUT {base}/todos/123 -H "Content-Type: application/json" -d '{{"text":"Buy milk","completed":true}}'"#)),
                ("update (form)", format!(r#"curl -X PUT {base}/todos/123 -d "text=Buy milk&completed=true""#)),
                ("delete", format!("curl -X DELETE {base}/todos/123")),
            ] {
                tracing::info!(example = %example, "usage: {what}");
            }
        }
    }
}

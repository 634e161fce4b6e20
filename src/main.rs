use clap::Parser;
use surfer::cli::{Cli, Command};
use surfer::config::ServerConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Start { app_type, port } => {
            let config = ServerConfig::from_env()?.with_port(port);
            tracing::info!(app = app_type.name(), port = config.port, "starting server");
            if let Err(e) = surfer::server::serve(app_type, config).await {
                tracing::error!(error = %e, "server failed");
                return Err(e);
            }
        }
    }
    Ok(())
}

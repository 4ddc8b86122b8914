mod cli;

use axum::Router;
use backend::dbs::DatabaseConfig;
use clap::Parser;
use shared::models::CompletionSettings;
use std::net::SocketAddr;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
    let cli = cli::Cli::parse();

    let database = match cli.database_url {
        Some(url) => DatabaseConfig::Postgres { url },
        None => DatabaseConfig::Local {
            path: cli.local_db_path,
        },
    };
    let mut completion = CompletionSettings {
        api_key: cli.api_key,
        ..CompletionSettings::default()
    };
    if let Some(api_base) = cli.api_base {
        completion.api_base = api_base;
    }
    if let Some(model) = cli.model {
        completion.model = model;
    }
    if completion.api_key.is_empty() {
        tracing::warn!("No API key configured, /api/chat will answer 401");
    }

    let router = backend::init(Router::new(), &database, completion).await?;
    let addr = SocketAddr::from(([127, 0, 0, 1], cli.port));
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

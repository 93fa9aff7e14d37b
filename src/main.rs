// src/main.rs
use std::sync::Arc;

use poll_service::config::Config;
use poll_service::db::PgPollStore;
use poll_service::routes;
use poll_service::services::PollService;
use poll_service::store::{InMemoryPollStore, PollStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("poll_service=info,tower_http=info")),
        )
        .init();

    let store: Arc<dyn PollStore> = match &config.database {
        Some(database) => Arc::new(PgPollStore::connect(database).await?),
        None => {
            tracing::warn!("DATABASE_URL not set, polls will only live in memory");
            Arc::new(InMemoryPollStore::new())
        }
    };

    let app = routes::create_routes(PollService::new(store), config.cors_origin.clone());

    let addr = config.socket_addr();
    tracing::info!(address = %addr, "starting poll service");
    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

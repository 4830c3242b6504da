//! Inserts the sample authors and books into the configured database.

use bookclub::{apply_migrations, connect, seed_catalogue, PgStore, Settings, Store, DEFAULT_LOG_FILTER};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let settings = Settings::from_env()?;
    let pool = connect(&settings).await?;
    apply_migrations(&pool).await?;
    let store = PgStore::new(pool);

    let result = seed_catalogue(&store).await;
    store.close().await;
    let report = result?;
    tracing::info!(?report, "sample catalogue ready");
    Ok(())
}

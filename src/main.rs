use dotenvy::dotenv;
use pilgrim_survey::{
    config::seed::get_seed_path,
    core::report::generate_dashboard_summary,
    errors::Result,
    store::{BuiltinSeed, RecordStore, SeedFile, StoreProvider, load_store},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Provision the store before anything reads it
    let provider = StoreProvider::new(RecordStore::new().shared());
    let store = provider.store()?;

    // 4. Initial load, from seed.toml when present
    let seed_path = get_seed_path();
    let loaded = if seed_path.exists() {
        load_store(store, &SeedFile::new(&seed_path)).await
    } else {
        info!("No seed file at {}, using built-in data", seed_path.display());
        load_store(store, &BuiltinSeed).await
    };
    loaded
        .inspect(|_| info!("Record store loaded."))
        .inspect_err(|e| error!("Failed to load record store: {}", e))?;

    // 5. Report the dashboard figures
    let snapshot = provider.read().await?;
    info!("Dashboard: {}", generate_dashboard_summary(&snapshot));

    Ok(())
}

use super::{RecordStore, SharedStore};
use crate::{
    config::seed::{Seed, load_seed},
    errors::{Error, Result},
};
use std::{future::Future, path::PathBuf, sync::Arc, time::Duration};
use tokio::{task::JoinHandle, time::sleep};
use tracing::{debug, error, info};

/// Fixed pause standing in for a data fetch before the store is populated.
pub const SIMULATED_LOAD_DELAY: Duration = Duration::from_millis(800);

/// Somewhere a seed can be fetched from.
pub trait SeedSource: Send + Sync {
    /// Produces the seed.
    fn fetch(&self) -> impl Future<Output = Result<Seed>> + Send;

    /// Short description for logs.
    fn describe(&self) -> String;
}

/// The sample data compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSeed;

impl SeedSource for BuiltinSeed {
    async fn fetch(&self) -> Result<Seed> {
        Ok(Seed::builtin())
    }

    fn describe(&self) -> String {
        "built-in sample data".to_string()
    }
}

/// A TOML seed file on disk.
#[derive(Debug, Clone)]
pub struct SeedFile {
    path: PathBuf,
}

impl SeedFile {
    /// Seed source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SeedSource for SeedFile {
    async fn fetch(&self) -> Result<Seed> {
        load_seed(&self.path)
    }

    fn describe(&self) -> String {
        format!("seed file {}", self.path.display())
    }
}

/// How a spawned load ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The store was populated
    Populated,
    /// Every store handle was dropped before the load finished; nothing was written
    Discarded,
}

/// Loads the store in place: `Loading`, wait [`SIMULATED_LOAD_DELAY`], then `Ready` or `Failed`.
///
/// # Errors
/// Returns [`Error::Load`] if the source fails; the store is left in `Failed` state.
pub async fn load_store<S: SeedSource>(store: &SharedStore, source: &S) -> Result<()> {
    info!("Loading record store from {}", source.describe());
    store.write().await.begin_loading();
    sleep(SIMULATED_LOAD_DELAY).await;
    let fetched = source.fetch().await;
    let mut guard = store.write().await;
    finish_load(&mut guard, fetched)
}

/// Starts a load in the background.
///
/// The task only holds a weak handle: if every [`SharedStore`] clone is dropped before the
/// delay ends, the fetched seed is discarded. The store is already `Loading` when this returns.
pub async fn spawn_load<S>(store: &SharedStore, source: S) -> JoinHandle<Result<LoadOutcome>>
where
    S: SeedSource + 'static,
{
    info!("Loading record store from {} in background", source.describe());
    store.write().await.begin_loading();
    let weak = Arc::downgrade(store);

    tokio::spawn(async move {
        sleep(SIMULATED_LOAD_DELAY).await;
        let fetched = source.fetch().await;
        let Some(store) = weak.upgrade() else {
            debug!("Record store dropped before load finished; discarding seed");
            return Ok(LoadOutcome::Discarded);
        };
        let mut guard = store.write().await;
        finish_load(&mut guard, fetched).map(|()| LoadOutcome::Populated)
    })
}

fn finish_load(store: &mut RecordStore, fetched: Result<Seed>) -> Result<()> {
    match fetched {
        Ok(seed) => {
            store.populate(seed);
            Ok(())
        }
        Err(e) => {
            error!("Failed to fetch seed: {}", e);
            let message = e.to_string();
            store.fail_loading(message.clone());
            Err(Error::Load { message })
        }
    }
}

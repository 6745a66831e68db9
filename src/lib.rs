//! Studio site application
//!
//! Wires the in-memory store into the site modules and serves them over HTTP.

pub mod modules;
pub mod utils;

use std::sync::Arc;

use anyhow::Context;
use studio_kernel::{settings::Settings, InitCtx, ModuleRegistry};
use studio_storage::MemStorage;

use utils::Store;

/// Build the process-wide store, seeded unless disabled in settings.
pub fn build_store(settings: &Settings) -> Arc<MemStorage> {
    if settings.seed.enabled {
        Arc::new(MemStorage::with_seed_data())
    } else {
        tracing::info!("seed data disabled; starting with an empty store");
        Arc::new(MemStorage::new())
    }
}

/// Registry holding every site module bound to `store`.
pub fn build_registry(store: Store) -> anyhow::Result<ModuleRegistry> {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, &store).context("failed to register site modules")?;
    Ok(registry)
}

/// Run the site until shutdown: init and start modules, serve, then stop them.
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let store: Store = build_store(&settings);
    let registry = build_registry(store)?;
    let ctx = InitCtx {
        settings: &settings,
    };

    registry.init_modules(&ctx).await?;
    registry.start_modules(&ctx).await?;

    let served = studio_http::start_server(&registry, &settings).await;

    registry.stop_modules().await?;
    served
}
